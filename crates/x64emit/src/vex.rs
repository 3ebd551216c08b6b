//! VEX/EVEX vector-instruction kernels.
//!
//! One entry point exists per vector width; whether it emits a 2-byte VEX,
//! a 3-byte VEX, or an EVEX prefix is decided from the operands alone:
//! EVEX whenever the width is 512-bit or any register index is 16..=31,
//! otherwise VEX (2-byte form when the map is `0F` and `X`, `B`, `W` are
//! all clear).
//!
//! EVEX memory operands use the AVX-512 compressed displacement: an 8-bit
//! displacement is implicitly multiplied by the vector width in bytes
//! (full-tuple, no broadcast), so only multiples of it may use the short
//! form.

use crate::cursor::{Cursor, InstrBytes};
use crate::error::EmitError;
use crate::mem::Mem;
use crate::modrm;
use crate::validate;

/// Vector operand width of an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VecWidth {
    /// 128-bit (xmm).
    X,
    /// 256-bit (ymm).
    Y,
    /// 512-bit (zmm).
    Z,
}

impl VecWidth {
    /// VEX.L / EVEX.L'L field value.
    const fn ll(self) -> u8 {
        match self {
            VecWidth::X => 0b00,
            VecWidth::Y => 0b01,
            VecWidth::Z => 0b10,
        }
    }

    /// Width in bytes; also the EVEX compressed-displacement factor.
    const fn bytes(self) -> u8 {
        match self {
            VecWidth::X => 16,
            VecWidth::Y => 32,
            VecWidth::Z => 64,
        }
    }
}

/// Encoding data for one vector mnemonic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VecOp {
    /// Mandatory-prefix selector (`pp`).
    pub pp: u8,
    /// Opcode map (`mmmmm`/`mm`).
    pub map: u8,
    /// The opcode byte proper.
    pub op: u8,
    /// VEX.W (instructions ignoring W under VEX set `false`).
    pub vex_w: bool,
    /// EVEX.W (element-size significant under EVEX).
    pub evex_w: bool,
}

/// Three-operand register form: `d` in ModR/M.reg, `n` in vvvv (the
/// non-destructive source), `s` in ModR/M.r/m.
pub(crate) fn vec_rrr(
    c: &mut Cursor<'_>,
    width: VecWidth,
    d: u8,
    n: u8,
    s: u8,
    op: VecOp,
) -> Result<(), EmitError> {
    validate::check_vec(d)?;
    validate::check_vec(n)?;
    validate::check_vec(s)?;
    let mut b = InstrBytes::new();
    if width == VecWidth::Z || (d | n | s) & 0x10 != 0 {
        b.put_evex(
            d & 8 != 0,
            s & 0x10 != 0,
            s & 8 != 0,
            d & 0x10 != 0,
            op.map,
            op.evex_w,
            n & 0x0F,
            op.pp,
            false,
            width.ll(),
            false,
            n & 0x10 != 0,
            0,
        );
    } else {
        b.put_vex(
            d & 8 != 0,
            false,
            s & 8 != 0,
            op.map,
            op.vex_w,
            n,
            width.ll() == 0b01,
            op.pp,
        );
    }
    b.push(op.op);
    b.push(modrm::modrm(0b11, d, s));
    c.commit(&b)
}

/// Three-operand memory-source form: `d` in ModR/M.reg, `n` in vvvv, the
/// address in ModR/M.r/m (+SIB +disp).
pub(crate) fn vec_rrm(
    c: &mut Cursor<'_>,
    width: VecWidth,
    d: u8,
    n: u8,
    m: Mem,
    op: VecOp,
) -> Result<(), EmitError> {
    validate::check_vec(d)?;
    validate::check_vec(n)?;
    validate::check_mem(&m)?;
    let mut b = InstrBytes::new();
    if m.size_override {
        b.push(0x67);
    }
    let evex = width == VecWidth::Z || (d | n) & 0x10 != 0;
    if evex {
        b.put_evex(
            d & 8 != 0,
            m.index & 8 != 0,
            m.base & 8 != 0,
            d & 0x10 != 0,
            op.map,
            op.evex_w,
            n & 0x0F,
            op.pp,
            false,
            width.ll(),
            false,
            n & 0x10 != 0,
            0,
        );
        b.push(op.op);
        modrm::put_mem(&mut b, d, m, width.bytes());
    } else {
        b.put_vex(
            d & 8 != 0,
            m.index & 8 != 0,
            m.base & 8 != 0,
            op.map,
            op.vex_w,
            n,
            width.ll() == 0b01,
            op.pp,
        );
        b.push(op.op);
        modrm::put_mem(&mut b, d, m, 1);
    }
    c.commit(&b)
}
