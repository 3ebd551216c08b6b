//! # x64emit — typed x86-64 machine-code emitter
//!
//! `x64emit` turns direct, typed function calls into the exact byte
//! sequences defined by the Intel/AMD x86-64 instruction set, written into
//! a caller-supplied buffer. There is no text parsing, no label
//! resolution and no relocation machinery: each call encodes exactly one
//! instruction, or fails atomically with a diagnostic.
//!
//! ## Quick Start
//!
//! ```rust
//! use x64emit::*;
//!
//! let mut buf = [0u8; 64];
//! let mut c = Cursor::new(&mut buf);
//!
//! push_r64(&mut c, RBP).unwrap();                    // push rbp
//! mov_rr64(&mut c, RBP, RSP).unwrap();               // mov rbp, rsp
//! sub_r64i32(&mut c, RSP, 16).unwrap();              // sub rsp, 16
//! mov_mr64(&mut c, Mem::b(RSP), RCX).unwrap();       // mov [rsp], rcx
//! mov_mr64(&mut c, Mem::bd(RSP, 8), RDX).unwrap();   // mov [rsp+8], rdx
//! add_r64i32(&mut c, RSP, 16).unwrap();              // add rsp, 16
//! pop_r64(&mut c, RBP).unwrap();                     // pop rbp
//!
//! assert_eq!(&c.written()[..4], &[0x55, 0x48, 0x8B, 0xEC]);
//! ```
//!
//! ## Design
//!
//! - **Typed operands** — `Gpr8`/`Gpr16`/`Gpr32`/`Gpr64` and
//!   `Xmm`/`Ymm`/`Zmm` are distinct types, so a 64-bit entry point cannot
//!   be handed a 32-bit register.
//! - **Atomic emission** — an entry point either advances the [`Cursor`]
//!   by the full instruction length (at most 15 bytes) or returns
//!   [`EmitError`] with the cursor untouched.
//! - **Validated by default** — constraints the types cannot express
//!   (register index ranges, `ah..bh` vs REX, memory-operand
//!   well-formedness) are checked at run time; the `unchecked` feature
//!   strips the checks.
//! - **No allocation, no global state** — pure computation over the
//!   caller's buffer; `no_std` without even `alloc`. Two threads can
//!   encode into disjoint buffers with no synchronization.
//!
//! ## Feature flags
//!
//! - `std` *(default)* — `std::error::Error` for [`EmitError`].
//! - `serde` — `Serialize`/`Deserialize` for the operand and error types.
//! - `byteswap` — byte-swap emitted multi-byte integers.
//! - `unchecked` — strip operand validation.
//! - `inline-always` / `inline-never` — inlining policy for the
//!   instruction entry points (default: compiler's choice).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
// ── Lint policy ─────────────────────────────────────────────────────────
// An instruction encoder lives on narrowing casts between integer widths
// and dense hex literals (0x0F38F6, 0xC0). The allowances below are
// expected in this context.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::unreadable_literal,
    clippy::match_same_arms,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::similar_names,
    clippy::doc_markdown
)]

/// Output cursor over a caller-supplied buffer.
pub mod cursor;
/// Error type and diagnostics.
pub mod error;
/// Instruction entry points (one function per mnemonic/operand shape).
pub mod insn;
mod kernel;
/// Memory operand descriptor and constructors.
pub mod mem;
mod modrm;
/// Register newtypes and constants.
pub mod reg;
mod validate;
mod vex;
mod writer;

pub use cursor::{Cursor, MAX_INSTRUCTION_LEN};
pub use error::EmitError;
pub use insn::*;
pub use mem::Mem;
pub use reg::*;
