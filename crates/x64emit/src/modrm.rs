//! ModR/M + SIB + displacement emission for memory operands.
//!
//! The addressing-mode corner cases reproduced here:
//!
//! 1. `[rbp]` / `[r13]` (base low-3 bits = 5) cannot encode "no
//!    displacement"; that bit pattern means disp32-follows, so a zero
//!    displacement is promoted to an explicit `disp8 = 0`.
//! 2. `[rsp]` / `[r12]` (base low-3 bits = 4) always need the SIB form;
//!    without an index the SIB is `0x24` ("rsp base, no index").
//! 3. No base register at all takes the `[disp32]` SIB form `0x25`
//!    (or a real SIB with base field `101` when an index is present),
//!    always followed by a 4-byte displacement.

use crate::cursor::InstrBytes;
use crate::mem::Mem;

/// Build a ModR/M byte.
#[inline]
pub(crate) fn modrm(mod_: u8, reg: u8, rm: u8) -> u8 {
    (mod_ << 6) | ((reg & 7) << 3) | (rm & 7)
}

/// Build a SIB byte from a log2-encoded scale.
#[inline]
fn sib(scale_log2: u8, index: u8, base: u8) -> u8 {
    (scale_log2 << 6) | ((index & 7) << 3) | (base & 7)
}

/// SIB scale field for an index scale of 1, 2, 4 or 8.
#[inline]
const fn scale_log2(index_scale: u8) -> u8 {
    match index_scale {
        2 => 1,
        4 => 2,
        8 => 3,
        _ => 0,
    }
}

/// Displacement encoding chosen for a base-relative address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispForm {
    None,
    /// Stored byte is `disp / n` (n > 1 only under EVEX compression).
    Disp8(i8),
    Disp32,
}

impl DispForm {
    /// The ModR/M `mod` field value for this form.
    fn mod_bits(self) -> u8 {
        match self {
            DispForm::None => 0b00,
            DispForm::Disp8(_) => 0b01,
            DispForm::Disp32 => 0b10,
        }
    }
}

/// Pick the displacement form for a based address.
///
/// `n` is the compressed-displacement factor: 1 for legacy/VEX encodings,
/// the vector width in bytes for full-tuple EVEX memory operands, where an
/// 8-bit displacement is implicitly scaled by `n`.
fn disp_form(mem: &Mem, n: u8) -> DispForm {
    let disp = mem.disp;
    if disp == 0 && mem.base & 7 != 5 {
        DispForm::None
    } else if disp % i32::from(n) == 0 {
        match i8::try_from(disp / i32::from(n)) {
            Ok(scaled) => DispForm::Disp8(scaled),
            Err(_) => DispForm::Disp32,
        }
    } else {
        DispForm::Disp32
    }
}

/// Emit ModR/M, optional SIB, and 0/1/4 displacement bytes for `mem`, with
/// `reg` in the ModR/M reg field (a register index or an opcode extension).
///
/// `n` is the compressed-displacement factor (see [`disp_form`]).
pub(crate) fn put_mem(buf: &mut InstrBytes, reg: u8, mem: Mem, n: u8) {
    let b7 = mem.base & 7;
    let i7 = mem.index & 7;
    let ss = scale_log2(mem.index_scale);

    if mem.base_scale != 0 {
        let df = disp_form(&mem, n);
        if mem.index_scale != 0 {
            buf.push(modrm(df.mod_bits(), reg, 0b100));
            buf.push(sib(ss, i7, b7));
        } else {
            buf.push(modrm(df.mod_bits(), reg, b7));
            if b7 == 4 {
                // rsp/r12 base: the r/m field already selects SIB.
                buf.push(0x24);
            }
        }
        match df {
            DispForm::None => {}
            DispForm::Disp8(scaled) => buf.push(scaled as u8),
            DispForm::Disp32 => buf.put_le32(mem.disp as u32),
        }
    } else {
        // No base: [disp32] or [index*scale + disp32], both with a
        // mandatory 4-byte displacement.
        buf.push(modrm(0b00, reg, 0b100));
        if mem.index_scale != 0 {
            buf.push(sib(ss, i7, 0b101));
        } else {
            buf.push(0x25);
        }
        buf.put_le32(mem.disp as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::{R12, R13, RAX, RBP, RBX, RSP};

    fn emit(reg: u8, mem: Mem, n: u8) -> Vec<u8> {
        let mut b = InstrBytes::new();
        put_mem(&mut b, reg, mem, n);
        b.as_slice().to_vec()
    }

    #[test]
    fn plain_base_no_disp() {
        assert_eq!(emit(1, Mem::b(RAX), 1), [0x08]);
    }

    #[test]
    fn rsp_base_needs_sib() {
        assert_eq!(emit(1, Mem::b(RSP), 1), [0x0C, 0x24]);
        assert_eq!(emit(0, Mem::b(R12), 1), [0x04, 0x24]);
    }

    #[test]
    fn rbp_base_promotes_disp8_zero() {
        assert_eq!(emit(0, Mem::b(RBP), 1), [0x45, 0x00]);
        assert_eq!(emit(0, Mem::b(R13), 1), [0x45, 0x00]);
    }

    #[test]
    fn disp8_and_disp32() {
        assert_eq!(emit(2, Mem::bd(RSP, 8), 1), [0x54, 0x24, 0x08]);
        assert_eq!(
            emit(0, Mem::bd(RAX, 0x3456), 1),
            [0x80, 0x56, 0x34, 0x00, 0x00]
        );
        assert_eq!(emit(0, Mem::bd(RAX, -128), 1), [0x40, 0x80]);
        assert_eq!(
            emit(0, Mem::bd(RAX, -129), 1),
            [0x80, 0x7F, 0xFF, 0xFF, 0xFF]
        );
    }

    #[test]
    fn base_index_scale_disp() {
        // [rax + rbx*4 + 0x10]
        assert_eq!(emit(1, Mem::bid(RAX, RBX, 4, 0x10), 1), [0x4C, 0x98, 0x10]);
    }

    #[test]
    fn no_base_forms() {
        assert_eq!(
            emit(0, Mem::d(0x3456), 1),
            [0x04, 0x25, 0x56, 0x34, 0x00, 0x00]
        );
        // [rbx*8 + 0] still takes the full disp32.
        assert_eq!(
            emit(0, Mem::i(RBX, 8), 1),
            [0x04, 0xDD, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn rbp_as_sib_base_keeps_disp8_promotion() {
        // [rbp + rax*2]: SIB base 101 with mod=00 would mean no-base,
        // so the zero displacement must survive as disp8.
        assert_eq!(emit(0, Mem::bi(RBP, RAX, 2), 1), [0x44, 0x45, 0x00]);
    }

    #[test]
    fn compressed_disp8() {
        // EVEX full tuple, 64-byte vectors: disp 64 stores as 1.
        assert_eq!(emit(0, Mem::bd(RAX, 64), 64), [0x40, 0x01]);
        // Not a multiple of n: falls back to disp32.
        assert_eq!(
            emit(0, Mem::bd(RAX, 8), 64),
            [0x80, 0x08, 0x00, 0x00, 0x00]
        );
        // Multiple of n but scaled value overflows i8: disp32.
        assert_eq!(
            emit(0, Mem::bd(RAX, 64 * 200), 64),
            [0x80, 0x00, 0x32, 0x00, 0x00]
        );
    }
}
