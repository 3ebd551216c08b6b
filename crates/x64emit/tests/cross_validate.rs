//! Cross-validation tests: encode with x64emit, decode with iced-x86.
//!
//! Every encoding family is verified by decoding the emitted bytes with
//! iced-x86 and checking the decoded mnemonic and operands. This provides
//! gold-standard validation against an independent, battle-tested x86-64
//! decoder.

use iced_x86::{
    Decoder, DecoderOptions, Formatter, Instruction, IntelFormatter, Mnemonic, Register,
};
use x64emit::*;

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Emit one instruction and return its bytes.
fn encode(f: impl FnOnce(&mut Cursor<'_>) -> Result<(), EmitError>) -> Vec<u8> {
    let mut buf = [0u8; 32];
    let mut c = Cursor::new(&mut buf);
    f(&mut c).unwrap_or_else(|e| panic!("x64emit failed to encode: {e}"));
    assert!(c.position() <= MAX_INSTRUCTION_LEN);
    c.written().to_vec()
}

/// Decode one instruction with iced-x86, asserting it is valid and that the
/// decoder consumed every emitted byte.
fn decode_one(bytes: &[u8]) -> (Instruction, String) {
    assert!(!bytes.is_empty(), "empty encoding");
    let mut decoder = Decoder::with_ip(64, bytes, 0, DecoderOptions::NONE);
    let instr = decoder.decode();
    assert_ne!(
        instr.mnemonic(),
        Mnemonic::INVALID,
        "iced-x86 decoded INVALID for {bytes:02X?}"
    );
    assert_eq!(
        instr.len(),
        bytes.len(),
        "iced-x86 decoded {} bytes but x64emit emitted {} for {:02X?}",
        instr.len(),
        bytes.len(),
        bytes
    );
    let mut formatter = IntelFormatter::new();
    let mut output = String::new();
    formatter.format(&instr, &mut output);
    (instr, output)
}

/// Encode + decode, assert the iced-x86 mnemonic matches.
fn verify_mnemonic(
    f: impl FnOnce(&mut Cursor<'_>) -> Result<(), EmitError>,
    expected: Mnemonic,
) -> Instruction {
    let bytes = encode(f);
    let (instr, formatted) = decode_one(&bytes);
    assert_eq!(
        instr.mnemonic(),
        expected,
        "mnemonic mismatch: iced decoded `{formatted}` from {bytes:02X?}"
    );
    instr
}

/// Encode + decode, assert mnemonic and that the formatted disassembly
/// contains every given substring (case-insensitive).
fn verify_contains(
    f: impl FnOnce(&mut Cursor<'_>) -> Result<(), EmitError>,
    expected: Mnemonic,
    substrings: &[&str],
) {
    let bytes = encode(f);
    let (instr, formatted) = decode_one(&bytes);
    assert_eq!(
        instr.mnemonic(),
        expected,
        "mnemonic mismatch: iced decoded `{formatted}` from {bytes:02X?}"
    );
    let lower = formatted.to_lowercase();
    for sub in substrings {
        assert!(
            lower.contains(&sub.to_lowercase()),
            "`{formatted}` does not contain `{sub}` (bytes {bytes:02X?})"
        );
    }
}

/// Decoded memory operand as (base-number, (index-number, scale), disp).
fn mem_fields(i: &Instruction) -> (Option<u8>, Option<(u8, u32)>, u64) {
    let base = match i.memory_base() {
        Register::None => None,
        r => Some(r.number() as u8),
    };
    let index = match i.memory_index() {
        Register::None => None,
        r => Some((r.number() as u8, i.memory_index_scale())),
    };
    (base, index, i.memory_displacement64())
}

const GPR64: [Gpr64; 16] = [
    RAX, RCX, RDX, RBX, RSP, RBP, RSI, RDI, R8, R9, R10, R11, R12, R13, R14, R15,
];

// ─── mov ──────────────────────────────────────────────────────────────────────

#[test]
fn xv_mov_rr64_all_pairs() {
    for (di, d) in GPR64.iter().enumerate() {
        for (si, s) in GPR64.iter().enumerate() {
            let instr = verify_mnemonic(|c| mov_rr64(c, *d, *s), Mnemonic::Mov);
            assert_eq!(instr.op0_register().number(), di);
            assert_eq!(instr.op1_register().number(), si);
        }
    }
}

#[test]
fn xv_mov_rr8_register_selection() {
    let instr = verify_mnemonic(|c| mov_rr8(c, SPL, BL), Mnemonic::Mov);
    assert_eq!(instr.op0_register(), Register::SPL);
    assert_eq!(instr.op1_register(), Register::BL);

    let instr = verify_mnemonic(|c| mov_rr8(c, AH, BL), Mnemonic::Mov);
    assert_eq!(instr.op0_register(), Register::AH);

    let instr = verify_mnemonic(|c| mov_rr8(c, R8B, CL), Mnemonic::Mov);
    assert_eq!(instr.op0_register(), Register::R8L);
}

#[test]
fn xv_mov_immediates() {
    let instr = verify_mnemonic(|c| mov_ri64(c, RAX, 0x1122334455667788), Mnemonic::Mov);
    assert_eq!(instr.immediate(1), 0x1122334455667788);

    let instr = verify_mnemonic(|c| mov_ri32(c, R11D, 0x12345678), Mnemonic::Mov);
    assert_eq!(instr.op0_register(), Register::R11D);
    assert_eq!(instr.immediate(1), 0x12345678);

    verify_contains(|c| mov_ri16(c, AX, 0x1234), Mnemonic::Mov, &["ax"]);
    verify_contains(|c| mov_ri8(c, DIL, 3), Mnemonic::Mov, &["dil"]);
}

#[test]
fn xv_mov_memory() {
    verify_contains(
        |c| mov_mr64(c, Mem::b(RSP), RCX),
        Mnemonic::Mov,
        &["[rsp]", "rcx"],
    );
    verify_contains(
        |c| mov_rm32(c, EAX, Mem::bd(RBP, 0x34)),
        Mnemonic::Mov,
        &["eax", "rbp"],
    );
    verify_contains(
        |c| mov_mi8(c, Mem::b(RBX), -1),
        Mnemonic::Mov,
        &["[rbx]"],
    );
    let instr = verify_mnemonic(|c| mov_m64i32(c, Mem::bd(RAX, 0x3456), 7), Mnemonic::Mov);
    assert_eq!(mem_fields(&instr), (Some(0), None, 0x3456));
}

// ─── Group-1 arithmetic ───────────────────────────────────────────────────────

#[test]
fn xv_group1_mnemonics() {
    verify_mnemonic(|c| add_rr64(c, RAX, RBX), Mnemonic::Add);
    verify_mnemonic(|c| or_rr32(c, EAX, EBX), Mnemonic::Or);
    verify_mnemonic(|c| adc_rr16(c, AX, CX), Mnemonic::Adc);
    verify_mnemonic(|c| sbb_rr8(c, AL, CL), Mnemonic::Sbb);
    verify_mnemonic(|c| and_rm64(c, RDX, Mem::b(RSI)), Mnemonic::And);
    verify_mnemonic(|c| sub_mr32(c, Mem::b(RDI), EBP), Mnemonic::Sub);
    verify_mnemonic(|c| xor_ri8(c, BL, 0x55), Mnemonic::Xor);
    verify_mnemonic(|c| cmp_m64i8(c, Mem::b(R14), 9), Mnemonic::Cmp);
}

#[test]
fn xv_group1_imm8_shortcut_sign_extends() {
    // 83 /0 with -1 must decode back as -1, not 255.
    let instr = verify_mnemonic(|c| add_r64i8(c, RAX, -1), Mnemonic::Add);
    assert_eq!(instr.immediate(1) as i64, -1);
    let instr = verify_mnemonic(|c| sub_r32i8(c, EBX, -4), Mnemonic::Sub);
    assert_eq!(instr.immediate(1) as i32, -4);
}

#[test]
fn xv_group1_direction_opcodes() {
    // rm and mr directions of the same mnemonic decode to the same
    // operation with swapped operand kinds.
    verify_contains(
        |c| add_rm64(c, RCX, Mem::b(RDX)),
        Mnemonic::Add,
        &["rcx", "[rdx]"],
    );
    verify_contains(
        |c| add_mr64(c, Mem::b(RDX), RCX),
        Mnemonic::Add,
        &["[rdx]", "rcx"],
    );
}

// ─── Group-3 unary ────────────────────────────────────────────────────────────

#[test]
fn xv_unary_mnemonics() {
    verify_mnemonic(|c| inc_r64(c, RAX), Mnemonic::Inc);
    verify_mnemonic(|c| dec_r32(c, EBX), Mnemonic::Dec);
    verify_mnemonic(|c| not_r16(c, CX), Mnemonic::Not);
    verify_mnemonic(|c| neg_r8(c, DL), Mnemonic::Neg);
    verify_mnemonic(|c| mul_m32(c, Mem::b(RSI)), Mnemonic::Mul);
    verify_mnemonic(|c| div_m64(c, Mem::b(RDI)), Mnemonic::Div);
}

#[test]
fn xv_inc_memory_matrix() {
    // Every base register, including the rsp/rbp special cases.
    for (bi, b) in GPR64.iter().enumerate() {
        let instr = verify_mnemonic(|c| inc_m64(c, Mem::b(*b)), Mnemonic::Inc);
        assert_eq!(mem_fields(&instr), (Some(bi as u8), None, 0));
    }
    // Absolute.
    let instr = verify_mnemonic(|c| inc_m64(c, Mem::d(0x3456)), Mnemonic::Inc);
    assert_eq!(mem_fields(&instr), (None, None, 0x3456));
    // Index-only.
    let instr = verify_mnemonic(|c| inc_m64(c, Mem::i(RBX, 8)), Mnemonic::Inc);
    assert_eq!(mem_fields(&instr), (None, Some((3, 8)), 0));
    // Full shape.
    let instr = verify_mnemonic(|c| inc_m64(c, Mem::bid(R13, R14, 4, 0x34)), Mnemonic::Inc);
    assert_eq!(mem_fields(&instr), (Some(13), Some((14, 4)), 0x34));
}

// ─── Shifts ───────────────────────────────────────────────────────────────────

#[test]
fn xv_shift_mnemonics() {
    verify_mnemonic(|c| shl_r64_1(c, RAX), Mnemonic::Shl);
    verify_mnemonic(|c| shl_r32_cl(c, ECX), Mnemonic::Shl);
    verify_mnemonic(|c| shr_r16i8(c, DX, 3), Mnemonic::Shr);
    verify_mnemonic(|c| sar_m64_cl(c, Mem::b(RBX)), Mnemonic::Sar);
    // sal shares shl's encoding; decoders report shl.
    verify_mnemonic(|c| sal_r64_1(c, RAX), Mnemonic::Shl);
}

#[test]
fn xv_shift_counts() {
    let instr = verify_mnemonic(|c| shl_r64i8(c, RAX, 7), Mnemonic::Shl);
    assert_eq!(instr.immediate(1), 7);
    // The `, 1` form encodes the count in the opcode itself.
    verify_contains(|c| shr_r32_1(c, EDX), Mnemonic::Shr, &["edx", "1"]);
    verify_contains(|c| shl_m8_cl(c, Mem::b(RSI)), Mnemonic::Shl, &["cl"]);
}

// ─── push / pop / lea ─────────────────────────────────────────────────────────

#[test]
fn xv_stack_ops() {
    for (ri, r) in GPR64.iter().enumerate() {
        let instr = verify_mnemonic(|c| push_r64(c, *r), Mnemonic::Push);
        assert_eq!(instr.op0_register().number(), ri);
        let instr = verify_mnemonic(|c| pop_r64(c, *r), Mnemonic::Pop);
        assert_eq!(instr.op0_register().number(), ri);
    }
    verify_contains(|c| push_r16(c, AX), Mnemonic::Push, &["ax"]);
    verify_mnemonic(|c| push_i8(c, -1), Mnemonic::Push);
    verify_mnemonic(|c| push_i32(c, 0x12345678), Mnemonic::Push);
    verify_contains(|c| push_m64(c, Mem::b(RAX)), Mnemonic::Push, &["[rax]"]);
    verify_contains(|c| pop_m16(c, Mem::b(RBX)), Mnemonic::Pop, &["[rbx]"]);
}

#[test]
fn xv_lea() {
    let instr = verify_mnemonic(
        |c| lea_rm64(c, RCX, Mem::bid(RAX, RBX, 4, 0x10)),
        Mnemonic::Lea,
    );
    assert_eq!(instr.op0_register(), Register::RCX);
    assert_eq!(mem_fields(&instr), (Some(0), Some((3, 4)), 0x10));
    verify_contains(|c| lea_rm32(c, EAX, Mem::bd(RCX, 0x34)), Mnemonic::Lea, &["eax"]);
    verify_contains(|c| lea_rm16(c, AX, Mem::b(RDX)), Mnemonic::Lea, &["ax"]);
}

// ─── adcx ─────────────────────────────────────────────────────────────────────

#[test]
fn xv_adcx() {
    let instr = verify_mnemonic(|c| adcx_rr64(c, RAX, RBX), Mnemonic::Adcx);
    assert_eq!(instr.op0_register(), Register::RAX);
    assert_eq!(instr.op1_register(), Register::RBX);
    verify_mnemonic(|c| adcx_rr32(c, EAX, EBX), Mnemonic::Adcx);
    verify_contains(|c| adcx_rm64(c, R10, Mem::b(RCX)), Mnemonic::Adcx, &["r10"]);
}

// ─── addpd / vaddpd ───────────────────────────────────────────────────────────

#[test]
fn xv_addpd() {
    let instr = verify_mnemonic(|c| addpd_xx(c, XMM1, XMM2), Mnemonic::Addpd);
    assert_eq!(instr.op0_register(), Register::XMM1);
    assert_eq!(instr.op1_register(), Register::XMM2);
    verify_contains(|c| addpd_xx(c, XMM8, XMM15), Mnemonic::Addpd, &["xmm8", "xmm15"]);
    verify_contains(|c| addpd_xm(c, XMM3, Mem::b(RAX)), Mnemonic::Addpd, &["xmm3", "[rax]"]);
}

#[test]
fn xv_vaddpd_vex() {
    let instr = verify_mnemonic(|c| vaddpd_xxx(c, XMM1, XMM2, XMM3), Mnemonic::Vaddpd);
    assert_eq!(instr.op0_register(), Register::XMM1);
    assert_eq!(instr.op1_register(), Register::XMM2);
    assert_eq!(instr.op2_register(), Register::XMM3);
    verify_contains(
        |c| vaddpd_yyy(c, YMM0, YMM9, YMM15),
        Mnemonic::Vaddpd,
        &["ymm0", "ymm9", "ymm15"],
    );
    verify_contains(
        |c| vaddpd_xxm(c, XMM1, XMM2, Mem::bd(RAX, 0x34)),
        Mnemonic::Vaddpd,
        &["xmm1", "xmm2", "rax"],
    );
    verify_contains(
        |c| vaddpd_yym(c, YMM4, YMM5, Mem::bi(RCX, RDX, 2)),
        Mnemonic::Vaddpd,
        &["ymm4", "ymm5", "rcx", "rdx"],
    );
}

#[test]
fn xv_vaddpd_evex() {
    let instr = verify_mnemonic(|c| vaddpd_zzz(c, ZMM1, ZMM2, ZMM3), Mnemonic::Vaddpd);
    assert_eq!(instr.op0_register(), Register::ZMM1);
    assert_eq!(instr.op1_register(), Register::ZMM2);
    assert_eq!(instr.op2_register(), Register::ZMM3);

    // High registers force EVEX even at xmm/ymm width.
    let instr = verify_mnemonic(|c| vaddpd_xxx(c, XMM17, XMM18, XMM19), Mnemonic::Vaddpd);
    assert_eq!(instr.op0_register(), Register::XMM17);
    assert_eq!(instr.op1_register(), Register::XMM18);
    assert_eq!(instr.op2_register(), Register::XMM19);
    verify_contains(
        |c| vaddpd_yyy(c, YMM0, YMM20, YMM31),
        Mnemonic::Vaddpd,
        &["ymm0", "ymm20", "ymm31"],
    );
}

#[test]
fn xv_vaddpd_evex_compressed_disp() {
    // disp 64 compresses to disp8=1 under 64-byte vectors; the decoder must
    // still see an effective displacement of 64.
    let instr = verify_mnemonic(|c| vaddpd_zzm(c, ZMM0, ZMM1, Mem::bd(RAX, 64)), Mnemonic::Vaddpd);
    assert_eq!(mem_fields(&instr), (Some(0), None, 64));
    // Unaligned displacement falls back to disp32.
    let instr = verify_mnemonic(|c| vaddpd_zzm(c, ZMM0, ZMM1, Mem::bd(RAX, 8)), Mnemonic::Vaddpd);
    assert_eq!(mem_fields(&instr), (Some(0), None, 8));
    // 16-byte vectors with a high destination register: N = 16.
    let instr =
        verify_mnemonic(|c| vaddpd_xxm(c, XMM16, XMM1, Mem::bd(RBX, 0x30)), Mnemonic::Vaddpd);
    assert_eq!(mem_fields(&instr), (Some(3), None, 0x30));
}

// ─── Address-size override ────────────────────────────────────────────────────

#[test]
fn xv_addr32() {
    verify_contains(|c| inc_m32(c, Mem::b32(EAX)), Mnemonic::Inc, &["[eax]"]);
    verify_contains(
        |c| mov_mr32(c, Mem::bd32(EBX, 0x34), ECX),
        Mnemonic::Mov,
        &["ebx", "ecx"],
    );
    let instr = verify_mnemonic(|c| inc_m32(c, Mem::bi32(EBX, ECX, 4)), Mnemonic::Inc);
    assert_eq!(mem_fields(&instr), (Some(3), Some((1, 4)), 0));
}
