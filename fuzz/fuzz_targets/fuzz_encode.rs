#![no_main]
use libfuzzer_sys::fuzz_target;
use x64emit::*;

// Drive entry points with operands derived from raw fuzz bytes — including
// out-of-range register indices and malformed memory operands. The emitter
// must never panic: every call returns Ok (advancing the cursor by at most
// 15 bytes) or Err (leaving it untouched).
fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    let b = |i: usize| data[i];

    let g64a = Gpr64::from_index(b(0));
    let g64b = Gpr64::from_index(b(1));
    let g8a = Gpr8::from_index(b(2));
    let g8b = Gpr8::from_index(b(3));
    let xa = Xmm::from_index(b(4));
    let xb = Xmm::from_index(b(5));
    let xc = Xmm::from_index(b(6));
    let disp = i32::from_le_bytes([b(7), b(8), b(9), b(10)]);
    let scale = b(11);

    let mems = [
        Mem::b(g64a),
        Mem::i(g64b, scale),
        Mem::d(disp),
        Mem::bi(g64a, g64b, scale),
        Mem::bd(g64a, disp),
        Mem::id(g64b, scale, disp),
        Mem::bid(g64a, g64b, scale, disp),
    ];

    let mut buf = [0u8; 256];
    let mut c = Cursor::new(&mut buf);
    let mut last = 0;

    let mut check = |c: &mut Cursor<'_>, r: Result<(), EmitError>| {
        let pos = c.position();
        match r {
            Ok(()) => assert!(pos > last && pos - last <= MAX_INSTRUCTION_LEN),
            Err(_) => assert_eq!(pos, last),
        }
        last = pos;
    };

    let r = mov_rr64(&mut c, g64a, g64b);
    check(&mut c, r);
    let r = mov_rr8(&mut c, g8a, g8b);
    check(&mut c, r);
    let r = add_r64i32(&mut c, g64a, disp);
    check(&mut c, r);
    let r = shl_r64i8(&mut c, g64a, scale);
    check(&mut c, r);
    let r = vaddpd_xxx(&mut c, xa, xb, xc);
    check(&mut c, r);

    for m in mems {
        let r = inc_m64(&mut c, m);
        check(&mut c, r);
        let r = mov_rm64(&mut c, g64a, m);
        check(&mut c, r);
        let r = add_rm8(&mut c, g8a, m);
        check(&mut c, r);
        let r = vaddpd_zzm(&mut c, Zmm::from_index(b(4)), Zmm::from_index(b(5)), m);
        check(&mut c, r);
    }
});
