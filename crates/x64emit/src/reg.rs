//! Register newtypes and the full register constant set.
//!
//! Each register category is a distinct type, so an entry point such as
//! "add 64-bit register, 32-bit sign-extended immediate" can only be called
//! with a 64-bit register. The wrapped value is the hardware register index;
//! the emitter derives REX/VEX/EVEX extension bits from it.
//!
//! 8-bit registers use a split index space inherited from the encoding
//! itself: `0x00..=0x0f` are `al..r15b` (with `0x04..=0x07` being the
//! legacy high-byte `ah..bh`), and `0x14..=0x17` are `spl..dil`, which
//! share ModR/M codes 4..7 with `ah..bh` but are selected by the mere
//! presence of a REX prefix.

/// Declares a register newtype plus its constant set.
macro_rules! register_type {
    (
        $(#[$meta:meta])*
        $ty:ident { $($name:ident = $idx:expr),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $ty(u8);

        impl $ty {
            /// Wrap a raw hardware register index.
            ///
            /// No range check happens here; emission validates the index
            /// (unless the `unchecked` feature is enabled).
            #[must_use]
            pub const fn from_index(index: u8) -> Self {
                Self(index)
            }

            /// The raw hardware register index.
            #[must_use]
            pub const fn index(self) -> u8 {
                self.0
            }
        }

        $(pub const $name: $ty = $ty($idx);)*
    };
}

register_type! {
    /// 8-bit general-purpose register.
    Gpr8 {
        AL = 0x00, CL = 0x01, DL = 0x02, BL = 0x03,
        AH = 0x04, CH = 0x05, DH = 0x06, BH = 0x07,
        R8B = 0x08, R9B = 0x09, R10B = 0x0a, R11B = 0x0b,
        R12B = 0x0c, R13B = 0x0d, R14B = 0x0e, R15B = 0x0f,
        SPL = 0x14, BPL = 0x15, SIL = 0x16, DIL = 0x17,
    }
}

register_type! {
    /// 16-bit general-purpose register.
    Gpr16 {
        AX = 0, CX = 1, DX = 2, BX = 3, SP = 4, BP = 5, SI = 6, DI = 7,
        R8W = 8, R9W = 9, R10W = 10, R11W = 11,
        R12W = 12, R13W = 13, R14W = 14, R15W = 15,
    }
}

register_type! {
    /// 32-bit general-purpose register.
    Gpr32 {
        EAX = 0, ECX = 1, EDX = 2, EBX = 3, ESP = 4, EBP = 5, ESI = 6, EDI = 7,
        R8D = 8, R9D = 9, R10D = 10, R11D = 11,
        R12D = 12, R13D = 13, R14D = 14, R15D = 15,
    }
}

register_type! {
    /// 64-bit general-purpose register.
    Gpr64 {
        RAX = 0, RCX = 1, RDX = 2, RBX = 3, RSP = 4, RBP = 5, RSI = 6, RDI = 7,
        R8 = 8, R9 = 9, R10 = 10, R11 = 11, R12 = 12, R13 = 13, R14 = 14, R15 = 15,
    }
}

register_type! {
    /// 128-bit SSE/AVX register. Indices 16..=31 are encodable only via EVEX.
    Xmm {
        XMM0 = 0, XMM1 = 1, XMM2 = 2, XMM3 = 3, XMM4 = 4, XMM5 = 5,
        XMM6 = 6, XMM7 = 7, XMM8 = 8, XMM9 = 9, XMM10 = 10, XMM11 = 11,
        XMM12 = 12, XMM13 = 13, XMM14 = 14, XMM15 = 15, XMM16 = 16,
        XMM17 = 17, XMM18 = 18, XMM19 = 19, XMM20 = 20, XMM21 = 21,
        XMM22 = 22, XMM23 = 23, XMM24 = 24, XMM25 = 25, XMM26 = 26,
        XMM27 = 27, XMM28 = 28, XMM29 = 29, XMM30 = 30, XMM31 = 31,
    }
}

register_type! {
    /// 256-bit AVX register. Indices 16..=31 are encodable only via EVEX.
    Ymm {
        YMM0 = 0, YMM1 = 1, YMM2 = 2, YMM3 = 3, YMM4 = 4, YMM5 = 5,
        YMM6 = 6, YMM7 = 7, YMM8 = 8, YMM9 = 9, YMM10 = 10, YMM11 = 11,
        YMM12 = 12, YMM13 = 13, YMM14 = 14, YMM15 = 15, YMM16 = 16,
        YMM17 = 17, YMM18 = 18, YMM19 = 19, YMM20 = 20, YMM21 = 21,
        YMM22 = 22, YMM23 = 23, YMM24 = 24, YMM25 = 25, YMM26 = 26,
        YMM27 = 27, YMM28 = 28, YMM29 = 29, YMM30 = 30, YMM31 = 31,
    }
}

register_type! {
    /// 512-bit AVX-512 register. Always EVEX-encoded.
    Zmm {
        ZMM0 = 0, ZMM1 = 1, ZMM2 = 2, ZMM3 = 3, ZMM4 = 4, ZMM5 = 5,
        ZMM6 = 6, ZMM7 = 7, ZMM8 = 8, ZMM9 = 9, ZMM10 = 10, ZMM11 = 11,
        ZMM12 = 12, ZMM13 = 13, ZMM14 = 14, ZMM15 = 15, ZMM16 = 16,
        ZMM17 = 17, ZMM18 = 18, ZMM19 = 19, ZMM20 = 20, ZMM21 = 21,
        ZMM22 = 22, ZMM23 = 23, ZMM24 = 24, ZMM25 = 25, ZMM26 = 26,
        ZMM27 = 27, ZMM28 = 28, ZMM29 = 29, ZMM30 = 30, ZMM31 = 31,
    }
}

impl Gpr8 {
    /// Whether this is one of the legacy high-byte registers `ah..bh`.
    #[must_use]
    pub const fn is_high_byte(self) -> bool {
        self.0 >= 0x04 && self.0 <= 0x07
    }

    /// Whether encoding this register requires a REX prefix even with no
    /// extension bit set (`spl`, `bpl`, `sil`, `dil`).
    #[must_use]
    pub const fn needs_rex(self) -> bool {
        self.0 & 0x10 != 0
    }
}
