//! Form-generic encoding kernels.
//!
//! Every general-purpose entry point reduces to one of these routines,
//! parameterised by opcode bytes, an optional ModR/M opcode-extension
//! field, the operand size, and a flag set. Byte order within an
//! instruction is fixed: `0x67`, `0x66`, REX, opcode, ModR/M, SIB,
//! displacement, immediate.

use crate::cursor::{Cursor, InstrBytes};
use crate::error::EmitError;
use crate::mem::Mem;
use crate::modrm::{self, modrm};
use crate::validate;

/// Force `REX.W = 1` (64-bit operand promotion).
pub(crate) const REXW: u32 = 1 << 0;
/// Emit the `0x66` operand-size prefix (16-bit operands, or a mandatory
/// SSE prefix).
pub(crate) const OSO: u32 = 1 << 1;
/// Emit the `0x67` address-size prefix unconditionally.
pub(crate) const ASO: u32 = 1 << 2;
/// The opcode carries the register in its low 3 bits; no ModR/M follows.
pub(crate) const NO_MODRM: u32 = 1 << 3;

/// Whether an 8-bit register index demands a flagless REX prefix
/// (`spl/bpl/sil/dil`). Always false for the other register categories,
/// whose indices stay below 0x10.
#[inline]
const fn rex_band(r: u8) -> bool {
    r & 0x10 != 0
}

/// Opcode + 8-bit literal immediate, no operands encoded elsewhere.
pub(crate) fn instr_i1(c: &mut Cursor<'_>, opcode: u32, imm: i8) -> Result<(), EmitError> {
    let mut b = InstrBytes::new();
    b.put_opcode(opcode);
    b.push(imm as u8);
    c.commit(&b)
}

/// Opcode + 32-bit literal immediate.
pub(crate) fn instr_i4(c: &mut Cursor<'_>, opcode: u32, imm: i32) -> Result<(), EmitError> {
    let mut b = InstrBytes::new();
    b.put_opcode(opcode);
    b.put_le32(imm as u32);
    c.commit(&b)
}

fn put_r_body(b: &mut InstrBytes, r: u8, opcode: u32, ext: u8, flags: u32) {
    if flags & ASO != 0 {
        b.push(0x67);
    }
    if flags & OSO != 0 {
        b.push(0x66);
    }
    b.put_rex(flags & REXW != 0, false, false, r & 8 != 0, rex_band(r));
    if flags & NO_MODRM != 0 {
        b.put_opcode(opcode | u32::from(r & 7));
    } else {
        b.put_opcode(opcode);
        b.push(modrm(0b11, ext, r));
    }
}

/// Single register operand in ModR/M r/m (or in the opcode low bits under
/// `NO_MODRM`).
pub(crate) fn instr_r(
    c: &mut Cursor<'_>,
    r: u8,
    size: u8,
    opcode: u32,
    ext: u8,
    flags: u32,
) -> Result<(), EmitError> {
    validate::check_gpr_sized(r, size)?;
    let mut b = InstrBytes::new();
    put_r_body(&mut b, r, opcode, ext, flags);
    c.commit(&b)
}

/// Single register operand plus a trailing immediate.
#[allow(clippy::too_many_arguments)]
pub(crate) fn instr_ri(
    c: &mut Cursor<'_>,
    r: u8,
    size: u8,
    imm: i64,
    imm_size: u8,
    opcode: u32,
    ext: u8,
    flags: u32,
) -> Result<(), EmitError> {
    validate::check_gpr_sized(r, size)?;
    let mut b = InstrBytes::new();
    put_r_body(&mut b, r, opcode, ext, flags);
    b.put_imm(imm, imm_size);
    c.commit(&b)
}

fn put_m_body(b: &mut InstrBytes, m: Mem, reg_field: u8, opcode: u32, rexr: bool, flags: u32) {
    if m.size_override || flags & ASO != 0 {
        b.push(0x67);
    }
    if flags & OSO != 0 {
        b.push(0x66);
    }
    b.put_rex(
        flags & REXW != 0,
        rexr,
        m.index & 8 != 0,
        m.base & 8 != 0,
        false,
    );
    b.put_opcode(opcode);
    modrm::put_mem(b, reg_field, m, 1);
}

/// Single memory operand, register field carrying an opcode extension.
pub(crate) fn instr_m(
    c: &mut Cursor<'_>,
    m: Mem,
    opcode: u32,
    ext: u8,
    flags: u32,
) -> Result<(), EmitError> {
    validate::check_mem(&m)?;
    let mut b = InstrBytes::new();
    put_m_body(&mut b, m, ext, opcode, false, flags);
    c.commit(&b)
}

/// Memory operand plus a trailing immediate.
#[allow(clippy::too_many_arguments)]
pub(crate) fn instr_mi(
    c: &mut Cursor<'_>,
    m: Mem,
    imm: i64,
    imm_size: u8,
    opcode: u32,
    ext: u8,
    flags: u32,
) -> Result<(), EmitError> {
    validate::check_mem(&m)?;
    let mut b = InstrBytes::new();
    put_m_body(&mut b, m, ext, opcode, false, flags);
    b.put_imm(imm, imm_size);
    c.commit(&b)
}

/// Register-register form: `d` in ModR/M.reg, `s` in ModR/M.r/m.
pub(crate) fn instr_rr(
    c: &mut Cursor<'_>,
    d: u8,
    s: u8,
    size: u8,
    opcode: u32,
    flags: u32,
) -> Result<(), EmitError> {
    validate::check_gpr_sized(d, size)?;
    validate::check_gpr_sized(s, size)?;
    if size == 1 {
        validate::check_gpr8_pair(d, s)?;
    }
    let mut b = InstrBytes::new();
    if flags & ASO != 0 {
        b.push(0x67);
    }
    if flags & OSO != 0 {
        b.push(0x66);
    }
    b.put_rex(
        flags & REXW != 0,
        d & 8 != 0,
        false,
        s & 8 != 0,
        rex_band(d) || rex_band(s),
    );
    b.put_opcode(opcode);
    b.push(modrm(0b11, d, s));
    c.commit(&b)
}

/// Register + memory form: `r` in ModR/M.reg, `m` in ModR/M.r/m.
/// Covers both load (`r, m`) and store (`m, r`) entry points, which differ
/// only in the opcode byte.
pub(crate) fn instr_rm(
    c: &mut Cursor<'_>,
    r: u8,
    size: u8,
    m: Mem,
    opcode: u32,
    flags: u32,
) -> Result<(), EmitError> {
    validate::check_gpr_sized(r, size)?;
    validate::check_mem(&m)?;
    if size == 1 {
        validate::check_gpr8_mem(r, &m)?;
    }
    let mut b = InstrBytes::new();
    if m.size_override || flags & ASO != 0 {
        b.push(0x67);
    }
    if flags & OSO != 0 {
        b.push(0x66);
    }
    b.put_rex(
        flags & REXW != 0,
        r & 8 != 0,
        m.index & 8 != 0,
        m.base & 8 != 0,
        rex_band(r),
    );
    b.put_opcode(opcode);
    modrm::put_mem(&mut b, r, m, 1);
    c.commit(&b)
}

/// Legacy-SSE register-register form (`66 0F`-style opcodes, xmm0..15).
pub(crate) fn sse_rr(
    c: &mut Cursor<'_>,
    d: u8,
    s: u8,
    opcode: u32,
    flags: u32,
) -> Result<(), EmitError> {
    validate::check_vec_sse(d)?;
    validate::check_vec_sse(s)?;
    let mut b = InstrBytes::new();
    if flags & OSO != 0 {
        b.push(0x66);
    }
    b.put_rex(flags & REXW != 0, d & 8 != 0, false, s & 8 != 0, false);
    b.put_opcode(opcode);
    b.push(modrm(0b11, d, s));
    c.commit(&b)
}

/// Legacy-SSE register + memory form.
pub(crate) fn sse_rm(
    c: &mut Cursor<'_>,
    r: u8,
    m: Mem,
    opcode: u32,
    flags: u32,
) -> Result<(), EmitError> {
    validate::check_vec_sse(r)?;
    validate::check_mem(&m)?;
    let mut b = InstrBytes::new();
    put_m_body(&mut b, m, r, opcode, r & 8 != 0, flags);
    c.commit(&b)
}
