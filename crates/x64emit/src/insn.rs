//! Instruction entry points.
//!
//! One function per `(mnemonic, operand-shape)` pair. The shape suffix
//! lists operand kinds in order (`r` register, `m` memory, `i` immediate)
//! with the bit size written once when shared (`add_rr64`) or once per
//! operand when they differ (`add_r64i32`). Every body is a single kernel
//! call carrying the opcode, the ModR/M extension field, the operand size
//! and the flag set; the blocks below are the mnemonic table.

use crate::cursor::Cursor;
use crate::error::EmitError;
use crate::kernel;
use crate::mem::Mem;
use crate::reg::*;
use crate::vex;
use crate::writer::{MAP_0F, PP_66};

macro_rules! def_r {
    ($( $(#[$meta:meta])* $name:ident($reg:ty) => size $size:literal, op $op:literal, ext $ext:literal $(, $flag:ident)* ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, r: $reg) -> Result<(), EmitError> {
            kernel::instr_r(c, r.index(), $size, $op, $ext, 0 $(| kernel::$flag)*)
        }
    )*};
}

macro_rules! def_m {
    ($( $(#[$meta:meta])* $name:ident => op $op:literal, ext $ext:literal $(, $flag:ident)* ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, m: Mem) -> Result<(), EmitError> {
            kernel::instr_m(c, m, $op, $ext, 0 $(| kernel::$flag)*)
        }
    )*};
}

macro_rules! def_ri {
    ($( $(#[$meta:meta])* $name:ident($reg:ty, $imm:ty) => size $size:literal, imm $isz:literal, op $op:literal, ext $ext:literal $(, $flag:ident)* ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, r: $reg, i: $imm) -> Result<(), EmitError> {
            kernel::instr_ri(c, r.index(), $size, i64::from(i), $isz, $op, $ext, 0 $(| kernel::$flag)*)
        }
    )*};
}

macro_rules! def_mi {
    ($( $(#[$meta:meta])* $name:ident($imm:ty) => imm $isz:literal, op $op:literal, ext $ext:literal $(, $flag:ident)* ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, m: Mem, i: $imm) -> Result<(), EmitError> {
            kernel::instr_mi(c, m, i64::from(i), $isz, $op, $ext, 0 $(| kernel::$flag)*)
        }
    )*};
}

macro_rules! def_rr {
    ($( $(#[$meta:meta])* $name:ident($reg:ty) => size $size:literal, op $op:literal $(, $flag:ident)* ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, d: $reg, s: $reg) -> Result<(), EmitError> {
            kernel::instr_rr(c, d.index(), s.index(), $size, $op, 0 $(| kernel::$flag)*)
        }
    )*};
}

macro_rules! def_rm {
    ($( $(#[$meta:meta])* $name:ident($reg:ty) => size $size:literal, op $op:literal $(, $flag:ident)* ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, r: $reg, m: Mem) -> Result<(), EmitError> {
            kernel::instr_rm(c, r.index(), $size, m, $op, 0 $(| kernel::$flag)*)
        }
    )*};
}

macro_rules! def_mr {
    ($( $(#[$meta:meta])* $name:ident($reg:ty) => size $size:literal, op $op:literal $(, $flag:ident)* ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, m: Mem, s: $reg) -> Result<(), EmitError> {
            kernel::instr_rm(c, s.index(), $size, m, $op, 0 $(| kernel::$flag)*)
        }
    )*};
}

macro_rules! def_sse_rr {
    ($( $(#[$meta:meta])* $name:ident($reg:ty) => op $op:literal $(, $flag:ident)* ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, d: $reg, s: $reg) -> Result<(), EmitError> {
            kernel::sse_rr(c, d.index(), s.index(), $op, 0 $(| kernel::$flag)*)
        }
    )*};
}

macro_rules! def_sse_rm {
    ($( $(#[$meta:meta])* $name:ident($reg:ty) => op $op:literal $(, $flag:ident)* ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, d: $reg, m: Mem) -> Result<(), EmitError> {
            kernel::sse_rm(c, d.index(), m, $op, 0 $(| kernel::$flag)*)
        }
    )*};
}

macro_rules! def_vec_rrr {
    ($( $(#[$meta:meta])* $name:ident($reg:ty, $w:ident) => $opdata:ident ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, d: $reg, n: $reg, s: $reg) -> Result<(), EmitError> {
            vex::vec_rrr(c, vex::VecWidth::$w, d.index(), n.index(), s.index(), $opdata)
        }
    )*};
}

macro_rules! def_vec_rrm {
    ($( $(#[$meta:meta])* $name:ident($reg:ty, $w:ident) => $opdata:ident ;)*) => {$(
        $(#[$meta])*
        #[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
        #[cfg_attr(feature = "inline-never", inline(never))]
        pub fn $name(c: &mut Cursor<'_>, d: $reg, n: $reg, m: Mem) -> Result<(), EmitError> {
            vex::vec_rrm(c, vex::VecWidth::$w, d.index(), n.index(), m, $opdata)
        }
    )*};
}

// ─── add ────────────────────────────────────────────────────────────────────

def_ri! {
    /// `add r/m8, imm8` (`80 /0`).
    add_ri8(Gpr8, i8) => size 1, imm 1, op 0x80, ext 0;
    add_ri16(Gpr16, i16) => size 2, imm 2, op 0x81, ext 0, OSO;
    add_ri32(Gpr32, i32) => size 4, imm 4, op 0x81, ext 0;
    add_r64i32(Gpr64, i32) => size 8, imm 4, op 0x81, ext 0, REXW;
    /// Sign-extended `imm8` short form (`83 /0`).
    add_r16i8(Gpr16, i8) => size 2, imm 1, op 0x83, ext 0, OSO;
    add_r32i8(Gpr32, i8) => size 4, imm 1, op 0x83, ext 0;
    add_r64i8(Gpr64, i8) => size 8, imm 1, op 0x83, ext 0, REXW;
}
def_rr! {
    add_rr8(Gpr8) => size 1, op 0x02;
    add_rr16(Gpr16) => size 2, op 0x03, OSO;
    add_rr32(Gpr32) => size 4, op 0x03;
    add_rr64(Gpr64) => size 8, op 0x03, REXW;
}
def_rm! {
    add_rm8(Gpr8) => size 1, op 0x02;
    add_rm16(Gpr16) => size 2, op 0x03, OSO;
    add_rm32(Gpr32) => size 4, op 0x03;
    add_rm64(Gpr64) => size 8, op 0x03, REXW;
}
def_mi! {
    add_mi8(i8) => imm 1, op 0x80, ext 0;
    add_mi16(i16) => imm 2, op 0x81, ext 0, OSO;
    add_mi32(i32) => imm 4, op 0x81, ext 0;
    add_m64i32(i32) => imm 4, op 0x81, ext 0, REXW;
    add_m16i8(i8) => imm 1, op 0x83, ext 0, OSO;
    add_m32i8(i8) => imm 1, op 0x83, ext 0;
    add_m64i8(i8) => imm 1, op 0x83, ext 0, REXW;
}
def_mr! {
    add_mr8(Gpr8) => size 1, op 0x00;
    add_mr16(Gpr16) => size 2, op 0x01, OSO;
    add_mr32(Gpr32) => size 4, op 0x01;
    add_mr64(Gpr64) => size 8, op 0x01, REXW;
}

// ─── or ─────────────────────────────────────────────────────────────────────

def_ri! {
    or_ri8(Gpr8, i8) => size 1, imm 1, op 0x80, ext 1;
    or_ri16(Gpr16, i16) => size 2, imm 2, op 0x81, ext 1, OSO;
    or_ri32(Gpr32, i32) => size 4, imm 4, op 0x81, ext 1;
    or_r64i32(Gpr64, i32) => size 8, imm 4, op 0x81, ext 1, REXW;
    or_r16i8(Gpr16, i8) => size 2, imm 1, op 0x83, ext 1, OSO;
    or_r32i8(Gpr32, i8) => size 4, imm 1, op 0x83, ext 1;
    or_r64i8(Gpr64, i8) => size 8, imm 1, op 0x83, ext 1, REXW;
}
def_rr! {
    or_rr8(Gpr8) => size 1, op 0x0A;
    or_rr16(Gpr16) => size 2, op 0x0B, OSO;
    or_rr32(Gpr32) => size 4, op 0x0B;
    or_rr64(Gpr64) => size 8, op 0x0B, REXW;
}
def_rm! {
    or_rm8(Gpr8) => size 1, op 0x0A;
    or_rm16(Gpr16) => size 2, op 0x0B, OSO;
    or_rm32(Gpr32) => size 4, op 0x0B;
    or_rm64(Gpr64) => size 8, op 0x0B, REXW;
}
def_mi! {
    or_mi8(i8) => imm 1, op 0x80, ext 1;
    or_mi16(i16) => imm 2, op 0x81, ext 1, OSO;
    or_mi32(i32) => imm 4, op 0x81, ext 1;
    or_m64i32(i32) => imm 4, op 0x81, ext 1, REXW;
    or_m16i8(i8) => imm 1, op 0x83, ext 1, OSO;
    or_m32i8(i8) => imm 1, op 0x83, ext 1;
    or_m64i8(i8) => imm 1, op 0x83, ext 1, REXW;
}
def_mr! {
    or_mr8(Gpr8) => size 1, op 0x08;
    or_mr16(Gpr16) => size 2, op 0x09, OSO;
    or_mr32(Gpr32) => size 4, op 0x09;
    or_mr64(Gpr64) => size 8, op 0x09, REXW;
}

// ─── adc ────────────────────────────────────────────────────────────────────

def_ri! {
    adc_ri8(Gpr8, i8) => size 1, imm 1, op 0x80, ext 2;
    adc_ri16(Gpr16, i16) => size 2, imm 2, op 0x81, ext 2, OSO;
    adc_ri32(Gpr32, i32) => size 4, imm 4, op 0x81, ext 2;
    adc_r64i32(Gpr64, i32) => size 8, imm 4, op 0x81, ext 2, REXW;
    adc_r16i8(Gpr16, i8) => size 2, imm 1, op 0x83, ext 2, OSO;
    adc_r32i8(Gpr32, i8) => size 4, imm 1, op 0x83, ext 2;
    adc_r64i8(Gpr64, i8) => size 8, imm 1, op 0x83, ext 2, REXW;
}
def_rr! {
    adc_rr8(Gpr8) => size 1, op 0x12;
    adc_rr16(Gpr16) => size 2, op 0x13, OSO;
    adc_rr32(Gpr32) => size 4, op 0x13;
    adc_rr64(Gpr64) => size 8, op 0x13, REXW;
}
def_rm! {
    adc_rm8(Gpr8) => size 1, op 0x12;
    adc_rm16(Gpr16) => size 2, op 0x13, OSO;
    adc_rm32(Gpr32) => size 4, op 0x13;
    adc_rm64(Gpr64) => size 8, op 0x13, REXW;
}
def_mi! {
    adc_mi8(i8) => imm 1, op 0x80, ext 2;
    adc_mi16(i16) => imm 2, op 0x81, ext 2, OSO;
    adc_mi32(i32) => imm 4, op 0x81, ext 2;
    adc_m64i32(i32) => imm 4, op 0x81, ext 2, REXW;
    adc_m16i8(i8) => imm 1, op 0x83, ext 2, OSO;
    adc_m32i8(i8) => imm 1, op 0x83, ext 2;
    adc_m64i8(i8) => imm 1, op 0x83, ext 2, REXW;
}
def_mr! {
    adc_mr8(Gpr8) => size 1, op 0x10;
    adc_mr16(Gpr16) => size 2, op 0x11, OSO;
    adc_mr32(Gpr32) => size 4, op 0x11;
    adc_mr64(Gpr64) => size 8, op 0x11, REXW;
}

// ─── sbb ────────────────────────────────────────────────────────────────────

def_ri! {
    sbb_ri8(Gpr8, i8) => size 1, imm 1, op 0x80, ext 3;
    sbb_ri16(Gpr16, i16) => size 2, imm 2, op 0x81, ext 3, OSO;
    sbb_ri32(Gpr32, i32) => size 4, imm 4, op 0x81, ext 3;
    sbb_r64i32(Gpr64, i32) => size 8, imm 4, op 0x81, ext 3, REXW;
    sbb_r16i8(Gpr16, i8) => size 2, imm 1, op 0x83, ext 3, OSO;
    sbb_r32i8(Gpr32, i8) => size 4, imm 1, op 0x83, ext 3;
    sbb_r64i8(Gpr64, i8) => size 8, imm 1, op 0x83, ext 3, REXW;
}
def_rr! {
    sbb_rr8(Gpr8) => size 1, op 0x1A;
    sbb_rr16(Gpr16) => size 2, op 0x1B, OSO;
    sbb_rr32(Gpr32) => size 4, op 0x1B;
    sbb_rr64(Gpr64) => size 8, op 0x1B, REXW;
}
def_rm! {
    sbb_rm8(Gpr8) => size 1, op 0x1A;
    sbb_rm16(Gpr16) => size 2, op 0x1B, OSO;
    sbb_rm32(Gpr32) => size 4, op 0x1B;
    sbb_rm64(Gpr64) => size 8, op 0x1B, REXW;
}
def_mi! {
    sbb_mi8(i8) => imm 1, op 0x80, ext 3;
    sbb_mi16(i16) => imm 2, op 0x81, ext 3, OSO;
    sbb_mi32(i32) => imm 4, op 0x81, ext 3;
    sbb_m64i32(i32) => imm 4, op 0x81, ext 3, REXW;
    sbb_m16i8(i8) => imm 1, op 0x83, ext 3, OSO;
    sbb_m32i8(i8) => imm 1, op 0x83, ext 3;
    sbb_m64i8(i8) => imm 1, op 0x83, ext 3, REXW;
}
def_mr! {
    sbb_mr8(Gpr8) => size 1, op 0x18;
    sbb_mr16(Gpr16) => size 2, op 0x19, OSO;
    sbb_mr32(Gpr32) => size 4, op 0x19;
    sbb_mr64(Gpr64) => size 8, op 0x19, REXW;
}

// ─── and ────────────────────────────────────────────────────────────────────

def_ri! {
    and_ri8(Gpr8, i8) => size 1, imm 1, op 0x80, ext 4;
    and_ri16(Gpr16, i16) => size 2, imm 2, op 0x81, ext 4, OSO;
    and_ri32(Gpr32, i32) => size 4, imm 4, op 0x81, ext 4;
    and_r64i32(Gpr64, i32) => size 8, imm 4, op 0x81, ext 4, REXW;
    and_r16i8(Gpr16, i8) => size 2, imm 1, op 0x83, ext 4, OSO;
    and_r32i8(Gpr32, i8) => size 4, imm 1, op 0x83, ext 4;
    and_r64i8(Gpr64, i8) => size 8, imm 1, op 0x83, ext 4, REXW;
}
def_rr! {
    and_rr8(Gpr8) => size 1, op 0x22;
    and_rr16(Gpr16) => size 2, op 0x23, OSO;
    and_rr32(Gpr32) => size 4, op 0x23;
    and_rr64(Gpr64) => size 8, op 0x23, REXW;
}
def_rm! {
    and_rm8(Gpr8) => size 1, op 0x22;
    and_rm16(Gpr16) => size 2, op 0x23, OSO;
    and_rm32(Gpr32) => size 4, op 0x23;
    and_rm64(Gpr64) => size 8, op 0x23, REXW;
}
def_mi! {
    and_mi8(i8) => imm 1, op 0x80, ext 4;
    and_mi16(i16) => imm 2, op 0x81, ext 4, OSO;
    and_mi32(i32) => imm 4, op 0x81, ext 4;
    and_m64i32(i32) => imm 4, op 0x81, ext 4, REXW;
    and_m16i8(i8) => imm 1, op 0x83, ext 4, OSO;
    and_m32i8(i8) => imm 1, op 0x83, ext 4;
    and_m64i8(i8) => imm 1, op 0x83, ext 4, REXW;
}
def_mr! {
    and_mr8(Gpr8) => size 1, op 0x20;
    and_mr16(Gpr16) => size 2, op 0x21, OSO;
    and_mr32(Gpr32) => size 4, op 0x21;
    and_mr64(Gpr64) => size 8, op 0x21, REXW;
}

// ─── sub ────────────────────────────────────────────────────────────────────

def_ri! {
    sub_ri8(Gpr8, i8) => size 1, imm 1, op 0x80, ext 5;
    sub_ri16(Gpr16, i16) => size 2, imm 2, op 0x81, ext 5, OSO;
    sub_ri32(Gpr32, i32) => size 4, imm 4, op 0x81, ext 5;
    sub_r64i32(Gpr64, i32) => size 8, imm 4, op 0x81, ext 5, REXW;
    sub_r16i8(Gpr16, i8) => size 2, imm 1, op 0x83, ext 5, OSO;
    sub_r32i8(Gpr32, i8) => size 4, imm 1, op 0x83, ext 5;
    sub_r64i8(Gpr64, i8) => size 8, imm 1, op 0x83, ext 5, REXW;
}
def_rr! {
    sub_rr8(Gpr8) => size 1, op 0x2A;
    sub_rr16(Gpr16) => size 2, op 0x2B, OSO;
    sub_rr32(Gpr32) => size 4, op 0x2B;
    sub_rr64(Gpr64) => size 8, op 0x2B, REXW;
}
def_rm! {
    sub_rm8(Gpr8) => size 1, op 0x2A;
    sub_rm16(Gpr16) => size 2, op 0x2B, OSO;
    sub_rm32(Gpr32) => size 4, op 0x2B;
    sub_rm64(Gpr64) => size 8, op 0x2B, REXW;
}
def_mi! {
    sub_mi8(i8) => imm 1, op 0x80, ext 5;
    sub_mi16(i16) => imm 2, op 0x81, ext 5, OSO;
    sub_mi32(i32) => imm 4, op 0x81, ext 5;
    sub_m64i32(i32) => imm 4, op 0x81, ext 5, REXW;
    sub_m16i8(i8) => imm 1, op 0x83, ext 5, OSO;
    sub_m32i8(i8) => imm 1, op 0x83, ext 5;
    sub_m64i8(i8) => imm 1, op 0x83, ext 5, REXW;
}
def_mr! {
    sub_mr8(Gpr8) => size 1, op 0x28;
    sub_mr16(Gpr16) => size 2, op 0x29, OSO;
    sub_mr32(Gpr32) => size 4, op 0x29;
    sub_mr64(Gpr64) => size 8, op 0x29, REXW;
}

// ─── xor ────────────────────────────────────────────────────────────────────

def_ri! {
    xor_ri8(Gpr8, i8) => size 1, imm 1, op 0x80, ext 6;
    xor_ri16(Gpr16, i16) => size 2, imm 2, op 0x81, ext 6, OSO;
    xor_ri32(Gpr32, i32) => size 4, imm 4, op 0x81, ext 6;
    xor_r64i32(Gpr64, i32) => size 8, imm 4, op 0x81, ext 6, REXW;
    xor_r16i8(Gpr16, i8) => size 2, imm 1, op 0x83, ext 6, OSO;
    xor_r32i8(Gpr32, i8) => size 4, imm 1, op 0x83, ext 6;
    xor_r64i8(Gpr64, i8) => size 8, imm 1, op 0x83, ext 6, REXW;
}
def_rr! {
    xor_rr8(Gpr8) => size 1, op 0x32;
    xor_rr16(Gpr16) => size 2, op 0x33, OSO;
    xor_rr32(Gpr32) => size 4, op 0x33;
    xor_rr64(Gpr64) => size 8, op 0x33, REXW;
}
def_rm! {
    xor_rm8(Gpr8) => size 1, op 0x32;
    xor_rm16(Gpr16) => size 2, op 0x33, OSO;
    xor_rm32(Gpr32) => size 4, op 0x33;
    xor_rm64(Gpr64) => size 8, op 0x33, REXW;
}
def_mi! {
    xor_mi8(i8) => imm 1, op 0x80, ext 6;
    xor_mi16(i16) => imm 2, op 0x81, ext 6, OSO;
    xor_mi32(i32) => imm 4, op 0x81, ext 6;
    xor_m64i32(i32) => imm 4, op 0x81, ext 6, REXW;
    xor_m16i8(i8) => imm 1, op 0x83, ext 6, OSO;
    xor_m32i8(i8) => imm 1, op 0x83, ext 6;
    xor_m64i8(i8) => imm 1, op 0x83, ext 6, REXW;
}
def_mr! {
    xor_mr8(Gpr8) => size 1, op 0x30;
    xor_mr16(Gpr16) => size 2, op 0x31, OSO;
    xor_mr32(Gpr32) => size 4, op 0x31;
    xor_mr64(Gpr64) => size 8, op 0x31, REXW;
}

// ─── cmp ────────────────────────────────────────────────────────────────────

def_ri! {
    cmp_ri8(Gpr8, i8) => size 1, imm 1, op 0x80, ext 7;
    cmp_ri16(Gpr16, i16) => size 2, imm 2, op 0x81, ext 7, OSO;
    cmp_ri32(Gpr32, i32) => size 4, imm 4, op 0x81, ext 7;
    cmp_r64i32(Gpr64, i32) => size 8, imm 4, op 0x81, ext 7, REXW;
    cmp_r16i8(Gpr16, i8) => size 2, imm 1, op 0x83, ext 7, OSO;
    cmp_r32i8(Gpr32, i8) => size 4, imm 1, op 0x83, ext 7;
    cmp_r64i8(Gpr64, i8) => size 8, imm 1, op 0x83, ext 7, REXW;
}
def_rr! {
    cmp_rr8(Gpr8) => size 1, op 0x3A;
    cmp_rr16(Gpr16) => size 2, op 0x3B, OSO;
    cmp_rr32(Gpr32) => size 4, op 0x3B;
    cmp_rr64(Gpr64) => size 8, op 0x3B, REXW;
}
def_rm! {
    cmp_rm8(Gpr8) => size 1, op 0x3A;
    cmp_rm16(Gpr16) => size 2, op 0x3B, OSO;
    cmp_rm32(Gpr32) => size 4, op 0x3B;
    cmp_rm64(Gpr64) => size 8, op 0x3B, REXW;
}
def_mi! {
    cmp_mi8(i8) => imm 1, op 0x80, ext 7;
    cmp_mi16(i16) => imm 2, op 0x81, ext 7, OSO;
    cmp_mi32(i32) => imm 4, op 0x81, ext 7;
    cmp_m64i32(i32) => imm 4, op 0x81, ext 7, REXW;
    cmp_m16i8(i8) => imm 1, op 0x83, ext 7, OSO;
    cmp_m32i8(i8) => imm 1, op 0x83, ext 7;
    cmp_m64i8(i8) => imm 1, op 0x83, ext 7, REXW;
}
def_mr! {
    cmp_mr8(Gpr8) => size 1, op 0x38;
    cmp_mr16(Gpr16) => size 2, op 0x39, OSO;
    cmp_mr32(Gpr32) => size 4, op 0x39;
    cmp_mr64(Gpr64) => size 8, op 0x39, REXW;
}

// ─── inc / dec ──────────────────────────────────────────────────────────────

def_r! {
    /// `inc r/m8` (`FE /0`).
    inc_r8(Gpr8) => size 1, op 0xFE, ext 0;
    inc_r16(Gpr16) => size 2, op 0xFF, ext 0, OSO;
    inc_r32(Gpr32) => size 4, op 0xFF, ext 0;
    inc_r64(Gpr64) => size 8, op 0xFF, ext 0, REXW;
    dec_r8(Gpr8) => size 1, op 0xFE, ext 1;
    dec_r16(Gpr16) => size 2, op 0xFF, ext 1, OSO;
    dec_r32(Gpr32) => size 4, op 0xFF, ext 1;
    dec_r64(Gpr64) => size 8, op 0xFF, ext 1, REXW;
}
def_m! {
    inc_m8 => op 0xFE, ext 0;
    inc_m16 => op 0xFF, ext 0, OSO;
    inc_m32 => op 0xFF, ext 0;
    inc_m64 => op 0xFF, ext 0, REXW;
    dec_m8 => op 0xFE, ext 1;
    dec_m16 => op 0xFF, ext 1, OSO;
    dec_m32 => op 0xFF, ext 1;
    dec_m64 => op 0xFF, ext 1, REXW;
}

// ─── not / neg / mul / div ──────────────────────────────────────────────────

def_r! {
    not_r8(Gpr8) => size 1, op 0xF6, ext 2;
    not_r16(Gpr16) => size 2, op 0xF7, ext 2, OSO;
    not_r32(Gpr32) => size 4, op 0xF7, ext 2;
    not_r64(Gpr64) => size 8, op 0xF7, ext 2, REXW;
    neg_r8(Gpr8) => size 1, op 0xF6, ext 3;
    neg_r16(Gpr16) => size 2, op 0xF7, ext 3, OSO;
    neg_r32(Gpr32) => size 4, op 0xF7, ext 3;
    neg_r64(Gpr64) => size 8, op 0xF7, ext 3, REXW;
    /// Unsigned multiply into `dx:ax`-family accumulators (`F7 /4`).
    mul_r8(Gpr8) => size 1, op 0xF6, ext 4;
    mul_r16(Gpr16) => size 2, op 0xF7, ext 4, OSO;
    mul_r32(Gpr32) => size 4, op 0xF7, ext 4;
    mul_r64(Gpr64) => size 8, op 0xF7, ext 4, REXW;
    div_r8(Gpr8) => size 1, op 0xF6, ext 6;
    div_r16(Gpr16) => size 2, op 0xF7, ext 6, OSO;
    div_r32(Gpr32) => size 4, op 0xF7, ext 6;
    div_r64(Gpr64) => size 8, op 0xF7, ext 6, REXW;
}
def_m! {
    not_m8 => op 0xF6, ext 2;
    not_m16 => op 0xF7, ext 2, OSO;
    not_m32 => op 0xF7, ext 2;
    not_m64 => op 0xF7, ext 2, REXW;
    neg_m8 => op 0xF6, ext 3;
    neg_m16 => op 0xF7, ext 3, OSO;
    neg_m32 => op 0xF7, ext 3;
    neg_m64 => op 0xF7, ext 3, REXW;
    mul_m8 => op 0xF6, ext 4;
    mul_m16 => op 0xF7, ext 4, OSO;
    mul_m32 => op 0xF7, ext 4;
    mul_m64 => op 0xF7, ext 4, REXW;
    div_m8 => op 0xF6, ext 6;
    div_m16 => op 0xF7, ext 6, OSO;
    div_m32 => op 0xF7, ext 6;
    div_m64 => op 0xF7, ext 6, REXW;
}

// ─── shifts ─────────────────────────────────────────────────────────────────
// Three count forms each: by 1 (`D0/D1`), by cl (`D2/D3`), by imm8
// (`C0/C1`). `shl` and `sal` share `/4`.

def_r! {
    /// `shl r/m8, 1` (`D0 /4`).
    shl_r8_1(Gpr8) => size 1, op 0xD0, ext 4;
    shl_r16_1(Gpr16) => size 2, op 0xD1, ext 4, OSO;
    shl_r32_1(Gpr32) => size 4, op 0xD1, ext 4;
    shl_r64_1(Gpr64) => size 8, op 0xD1, ext 4, REXW;
    shl_r8_cl(Gpr8) => size 1, op 0xD2, ext 4;
    shl_r16_cl(Gpr16) => size 2, op 0xD3, ext 4, OSO;
    shl_r32_cl(Gpr32) => size 4, op 0xD3, ext 4;
    shl_r64_cl(Gpr64) => size 8, op 0xD3, ext 4, REXW;
    shr_r8_1(Gpr8) => size 1, op 0xD0, ext 5;
    shr_r16_1(Gpr16) => size 2, op 0xD1, ext 5, OSO;
    shr_r32_1(Gpr32) => size 4, op 0xD1, ext 5;
    shr_r64_1(Gpr64) => size 8, op 0xD1, ext 5, REXW;
    shr_r8_cl(Gpr8) => size 1, op 0xD2, ext 5;
    shr_r16_cl(Gpr16) => size 2, op 0xD3, ext 5, OSO;
    shr_r32_cl(Gpr32) => size 4, op 0xD3, ext 5;
    shr_r64_cl(Gpr64) => size 8, op 0xD3, ext 5, REXW;
    sal_r8_1(Gpr8) => size 1, op 0xD0, ext 4;
    sal_r16_1(Gpr16) => size 2, op 0xD1, ext 4, OSO;
    sal_r32_1(Gpr32) => size 4, op 0xD1, ext 4;
    sal_r64_1(Gpr64) => size 8, op 0xD1, ext 4, REXW;
    sal_r8_cl(Gpr8) => size 1, op 0xD2, ext 4;
    sal_r16_cl(Gpr16) => size 2, op 0xD3, ext 4, OSO;
    sal_r32_cl(Gpr32) => size 4, op 0xD3, ext 4;
    sal_r64_cl(Gpr64) => size 8, op 0xD3, ext 4, REXW;
    sar_r8_1(Gpr8) => size 1, op 0xD0, ext 7;
    sar_r16_1(Gpr16) => size 2, op 0xD1, ext 7, OSO;
    sar_r32_1(Gpr32) => size 4, op 0xD1, ext 7;
    sar_r64_1(Gpr64) => size 8, op 0xD1, ext 7, REXW;
    sar_r8_cl(Gpr8) => size 1, op 0xD2, ext 7;
    sar_r16_cl(Gpr16) => size 2, op 0xD3, ext 7, OSO;
    sar_r32_cl(Gpr32) => size 4, op 0xD3, ext 7;
    sar_r64_cl(Gpr64) => size 8, op 0xD3, ext 7, REXW;
}
def_ri! {
    shl_ri8(Gpr8, u8) => size 1, imm 1, op 0xC0, ext 4;
    shl_r16i8(Gpr16, u8) => size 2, imm 1, op 0xC1, ext 4, OSO;
    shl_r32i8(Gpr32, u8) => size 4, imm 1, op 0xC1, ext 4;
    shl_r64i8(Gpr64, u8) => size 8, imm 1, op 0xC1, ext 4, REXW;
    shr_ri8(Gpr8, u8) => size 1, imm 1, op 0xC0, ext 5;
    shr_r16i8(Gpr16, u8) => size 2, imm 1, op 0xC1, ext 5, OSO;
    shr_r32i8(Gpr32, u8) => size 4, imm 1, op 0xC1, ext 5;
    shr_r64i8(Gpr64, u8) => size 8, imm 1, op 0xC1, ext 5, REXW;
    sal_ri8(Gpr8, u8) => size 1, imm 1, op 0xC0, ext 4;
    sal_r16i8(Gpr16, u8) => size 2, imm 1, op 0xC1, ext 4, OSO;
    sal_r32i8(Gpr32, u8) => size 4, imm 1, op 0xC1, ext 4;
    sal_r64i8(Gpr64, u8) => size 8, imm 1, op 0xC1, ext 4, REXW;
    sar_ri8(Gpr8, u8) => size 1, imm 1, op 0xC0, ext 7;
    sar_r16i8(Gpr16, u8) => size 2, imm 1, op 0xC1, ext 7, OSO;
    sar_r32i8(Gpr32, u8) => size 4, imm 1, op 0xC1, ext 7;
    sar_r64i8(Gpr64, u8) => size 8, imm 1, op 0xC1, ext 7, REXW;
}
def_m! {
    shl_m8_1 => op 0xD0, ext 4;
    shl_m16_1 => op 0xD1, ext 4, OSO;
    shl_m32_1 => op 0xD1, ext 4;
    shl_m64_1 => op 0xD1, ext 4, REXW;
    shl_m8_cl => op 0xD2, ext 4;
    shl_m16_cl => op 0xD3, ext 4, OSO;
    shl_m32_cl => op 0xD3, ext 4;
    shl_m64_cl => op 0xD3, ext 4, REXW;
    shr_m8_1 => op 0xD0, ext 5;
    shr_m16_1 => op 0xD1, ext 5, OSO;
    shr_m32_1 => op 0xD1, ext 5;
    shr_m64_1 => op 0xD1, ext 5, REXW;
    shr_m8_cl => op 0xD2, ext 5;
    shr_m16_cl => op 0xD3, ext 5, OSO;
    shr_m32_cl => op 0xD3, ext 5;
    shr_m64_cl => op 0xD3, ext 5, REXW;
    sal_m8_1 => op 0xD0, ext 4;
    sal_m16_1 => op 0xD1, ext 4, OSO;
    sal_m32_1 => op 0xD1, ext 4;
    sal_m64_1 => op 0xD1, ext 4, REXW;
    sal_m8_cl => op 0xD2, ext 4;
    sal_m16_cl => op 0xD3, ext 4, OSO;
    sal_m32_cl => op 0xD3, ext 4;
    sal_m64_cl => op 0xD3, ext 4, REXW;
    sar_m8_1 => op 0xD0, ext 7;
    sar_m16_1 => op 0xD1, ext 7, OSO;
    sar_m32_1 => op 0xD1, ext 7;
    sar_m64_1 => op 0xD1, ext 7, REXW;
    sar_m8_cl => op 0xD2, ext 7;
    sar_m16_cl => op 0xD3, ext 7, OSO;
    sar_m32_cl => op 0xD3, ext 7;
    sar_m64_cl => op 0xD3, ext 7, REXW;
}
def_mi! {
    shl_mi8(u8) => imm 1, op 0xC0, ext 4;
    shl_m16i8(u8) => imm 1, op 0xC1, ext 4, OSO;
    shl_m32i8(u8) => imm 1, op 0xC1, ext 4;
    shl_m64i8(u8) => imm 1, op 0xC1, ext 4, REXW;
    shr_mi8(u8) => imm 1, op 0xC0, ext 5;
    shr_m16i8(u8) => imm 1, op 0xC1, ext 5, OSO;
    shr_m32i8(u8) => imm 1, op 0xC1, ext 5;
    shr_m64i8(u8) => imm 1, op 0xC1, ext 5, REXW;
    sal_mi8(u8) => imm 1, op 0xC0, ext 4;
    sal_m16i8(u8) => imm 1, op 0xC1, ext 4, OSO;
    sal_m32i8(u8) => imm 1, op 0xC1, ext 4;
    sal_m64i8(u8) => imm 1, op 0xC1, ext 4, REXW;
    sar_mi8(u8) => imm 1, op 0xC0, ext 7;
    sar_m16i8(u8) => imm 1, op 0xC1, ext 7, OSO;
    sar_m32i8(u8) => imm 1, op 0xC1, ext 7;
    sar_m64i8(u8) => imm 1, op 0xC1, ext 7, REXW;
}

// ─── mov ────────────────────────────────────────────────────────────────────

def_ri! {
    /// `mov r8, imm8` short form (`B0+r`).
    mov_ri8(Gpr8, i8) => size 1, imm 1, op 0xB0, ext 0, NO_MODRM;
    mov_ri16(Gpr16, i16) => size 2, imm 2, op 0xB8, ext 0, NO_MODRM, OSO;
    mov_ri32(Gpr32, i32) => size 4, imm 4, op 0xB8, ext 0, NO_MODRM;
    /// `mov r64, imm64` — the full 8-byte immediate form (`REX.W B8+r`).
    mov_ri64(Gpr64, i64) => size 8, imm 8, op 0xB8, ext 0, NO_MODRM, REXW;
}
def_rr! {
    mov_rr8(Gpr8) => size 1, op 0x8A;
    mov_rr16(Gpr16) => size 2, op 0x8B, OSO;
    mov_rr32(Gpr32) => size 4, op 0x8B;
    mov_rr64(Gpr64) => size 8, op 0x8B, REXW;
}
def_rm! {
    mov_rm8(Gpr8) => size 1, op 0x8A;
    mov_rm16(Gpr16) => size 2, op 0x8B, OSO;
    mov_rm32(Gpr32) => size 4, op 0x8B;
    mov_rm64(Gpr64) => size 8, op 0x8B, REXW;
}
def_mr! {
    mov_mr8(Gpr8) => size 1, op 0x88;
    mov_mr16(Gpr16) => size 2, op 0x89, OSO;
    mov_mr32(Gpr32) => size 4, op 0x89;
    mov_mr64(Gpr64) => size 8, op 0x89, REXW;
}
def_mi! {
    mov_mi8(i8) => imm 1, op 0xC6, ext 0;
    mov_mi16(i16) => imm 2, op 0xC7, ext 0, OSO;
    mov_mi32(i32) => imm 4, op 0xC7, ext 0;
    /// 64-bit store of a sign-extended 32-bit immediate (`REX.W C7 /0`).
    mov_m64i32(i32) => imm 4, op 0xC7, ext 0, REXW;
}

// ─── push / pop ─────────────────────────────────────────────────────────────

/// `push imm8` (`6A ib`), sign-extended to 64 bits.
#[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
#[cfg_attr(feature = "inline-never", inline(never))]
pub fn push_i8(c: &mut Cursor<'_>, i: i8) -> Result<(), EmitError> {
    kernel::instr_i1(c, 0x6A, i)
}

/// `push imm32` (`68 id`), sign-extended to 64 bits.
#[cfg_attr(all(feature = "inline-always", not(feature = "inline-never")), inline(always))]
#[cfg_attr(feature = "inline-never", inline(never))]
pub fn push_i32(c: &mut Cursor<'_>, i: i32) -> Result<(), EmitError> {
    kernel::instr_i4(c, 0x68, i)
}

def_r! {
    push_r16(Gpr16) => size 2, op 0x50, ext 0, NO_MODRM, OSO;
    /// `push r64` (`50+r`), no REX.W needed: pushes default to 64-bit.
    push_r64(Gpr64) => size 8, op 0x50, ext 0, NO_MODRM;
    pop_r16(Gpr16) => size 2, op 0x58, ext 0, NO_MODRM, OSO;
    pop_r64(Gpr64) => size 8, op 0x58, ext 0, NO_MODRM;
}
def_m! {
    push_m16 => op 0xFF, ext 6, OSO;
    push_m64 => op 0xFF, ext 6;
    pop_m16 => op 0x8F, ext 0, OSO;
    pop_m64 => op 0x8F, ext 0;
}

// ─── lea ────────────────────────────────────────────────────────────────────

def_rm! {
    lea_rm16(Gpr16) => size 2, op 0x8D, OSO;
    lea_rm32(Gpr32) => size 4, op 0x8D;
    lea_rm64(Gpr64) => size 8, op 0x8D, REXW;
}

// ─── adcx ───────────────────────────────────────────────────────────────────
// Carry-only add (`66 0F 38 F6 /r`); the 66 is the mandatory prefix, so
// the 64-bit form carries both OSO and REXW.

def_rr! {
    adcx_rr32(Gpr32) => size 4, op 0x0F38F6, OSO;
    adcx_rr64(Gpr64) => size 8, op 0x0F38F6, OSO, REXW;
}
def_rm! {
    adcx_rm32(Gpr32) => size 4, op 0x0F38F6, OSO;
    adcx_rm64(Gpr64) => size 8, op 0x0F38F6, OSO, REXW;
}

// ─── addpd / vaddpd ─────────────────────────────────────────────────────────

def_sse_rr! {
    /// Legacy-SSE packed-double add (`66 0F 58 /r`), xmm0..=xmm15 only.
    addpd_xx(Xmm) => op 0x0F58, OSO;
}
def_sse_rm! {
    addpd_xm(Xmm) => op 0x0F58, OSO;
}

/// `vaddpd` encoding data: map 0F, mandatory 66, W ignored under VEX but
/// required 1 under EVEX (64-bit elements).
const VADDPD: vex::VecOp = vex::VecOp {
    pp: PP_66,
    map: MAP_0F,
    op: 0x58,
    vex_w: false,
    evex_w: true,
};

def_vec_rrr! {
    /// Three-operand packed-double add. Registers 16..=31 switch the
    /// encoding from VEX to EVEX automatically.
    vaddpd_xxx(Xmm, X) => VADDPD;
    vaddpd_yyy(Ymm, Y) => VADDPD;
    vaddpd_zzz(Zmm, Z) => VADDPD;
}
def_vec_rrm! {
    vaddpd_xxm(Xmm, X) => VADDPD;
    vaddpd_yym(Ymm, Y) => VADDPD;
    vaddpd_zzm(Zmm, Z) => VADDPD;
}
