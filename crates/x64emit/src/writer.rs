//! Byte-level writers: little-endian integers, variable-length opcodes, and
//! the legacy/REX/VEX/EVEX prefix encoders.
//!
//! Prefix layouts:
//!
//! ```text
//! REX          0100WRXB
//! 2-byte VEX   C5 [R vvvv L pp]
//! 3-byte VEX   C4 [R X B mmmmm] [W vvvv L pp]
//! EVEX         62 [R X B R' 0 0 mm] [W vvvv 1 pp] [z L'L b V' aaa]
//! ```
//!
//! All register-extension bits in VEX/EVEX are stored inverted.

use crate::cursor::InstrBytes;

/// Opcode escape map selector for the `0F` map (VEX `mmmmm` / EVEX `mm`).
pub(crate) const MAP_0F: u8 = 0b01;

/// Mandatory-prefix selector for `66` (VEX/EVEX `pp`).
pub(crate) const PP_66: u8 = 0b01;

#[cfg(feature = "byteswap")]
macro_rules! host_order {
    ($v:expr) => {
        $v.swap_bytes()
    };
}

#[cfg(not(feature = "byteswap"))]
macro_rules! host_order {
    ($v:expr) => {
        $v
    };
}

impl InstrBytes {
    /// Append a 16-bit little-endian integer.
    #[inline]
    pub(crate) fn put_le16(&mut self, v: u16) {
        self.extend_from_slice(&host_order!(v).to_le_bytes());
    }

    /// Append a 32-bit little-endian integer.
    #[inline]
    pub(crate) fn put_le32(&mut self, v: u32) {
        self.extend_from_slice(&host_order!(v).to_le_bytes());
    }

    /// Append a 64-bit little-endian integer.
    #[inline]
    pub(crate) fn put_le64(&mut self, v: u64) {
        self.extend_from_slice(&host_order!(v).to_le_bytes());
    }

    /// Append a 1/2/4/8-byte immediate (sign bits beyond `size` ignored).
    #[inline]
    pub(crate) fn put_imm(&mut self, imm: i64, size: u8) {
        match size {
            1 => self.push(imm as u8),
            2 => self.put_le16(imm as u16),
            4 => self.put_le32(imm as u32),
            _ => self.put_le64(imm as u64),
        }
    }

    /// Append a 1–3 byte opcode: non-zero high bytes first, low byte always.
    ///
    /// `0x8B` emits `8B`; `0x0F58` emits `0F 58`; `0x0F38F6` emits
    /// `0F 38 F6`.
    #[inline]
    pub(crate) fn put_opcode(&mut self, opcode: u32) {
        if opcode & 0x00ff_0000 != 0 {
            self.push((opcode >> 16) as u8);
        }
        if opcode & 0xff00 != 0 {
            self.push((opcode >> 8) as u8);
        }
        self.push(opcode as u8);
    }

    /// Append a REX prefix iff any of `w,r,x,b,force` is set.
    ///
    /// `force` covers `spl/bpl/sil/dil`, which need the prefix with all
    /// flag bits clear.
    #[inline]
    pub(crate) fn put_rex(&mut self, w: bool, r: bool, x: bool, b: bool, force: bool) {
        if w || r || x || b || force {
            self.push(
                0x40 | (u8::from(w) << 3) | (u8::from(r) << 2) | (u8::from(x) << 1) | u8::from(b),
            );
        }
    }

    /// Append a 2-byte VEX prefix.
    #[inline]
    pub(crate) fn put_vex2(&mut self, r: bool, vvvv: u8, l: bool, pp: u8) {
        self.push(0xC5);
        self.push(
            (if r { 0 } else { 0x80 })
                | (((!vvvv) & 0x0F) << 3)
                | (if l { 0x04 } else { 0 })
                | (pp & 0x03),
        );
    }

    /// Append a 3-byte VEX prefix.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn put_vex3(
        &mut self,
        r: bool,
        x: bool,
        b: bool,
        mmmmm: u8,
        w: bool,
        vvvv: u8,
        l: bool,
        pp: u8,
    ) {
        self.push(0xC4);
        self.push(
            (if r { 0 } else { 0x80 })
                | (if x { 0 } else { 0x40 })
                | (if b { 0 } else { 0x20 })
                | (mmmmm & 0x1F),
        );
        self.push(
            (if w { 0x80 } else { 0 })
                | (((!vvvv) & 0x0F) << 3)
                | (if l { 0x04 } else { 0 })
                | (pp & 0x03),
        );
    }

    /// Append a VEX prefix, using the 2-byte form when `x`, `b` and `w` are
    /// all clear and the map is `0F`.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn put_vex(
        &mut self,
        r: bool,
        x: bool,
        b: bool,
        map: u8,
        w: bool,
        vvvv: u8,
        l: bool,
        pp: u8,
    ) {
        if map == MAP_0F && !x && !b && !w {
            self.put_vex2(r, vvvv, l, pp);
        } else {
            self.put_vex3(r, x, b, map, w, vvvv, l, pp);
        }
    }

    /// Append a 4-byte EVEX prefix.
    ///
    /// `rp` is R′ (bit 4 of the ModR/M.reg register), `vp` is V′ (bit 4 of
    /// the NDS register), `ll` is the vector length (00=128, 01=256,
    /// 10=512), `bcst` the broadcast/rounding bit, `aaa` the opmask.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn put_evex(
        &mut self,
        r: bool,
        x: bool,
        b: bool,
        rp: bool,
        map: u8,
        w: bool,
        vvvv: u8,
        pp: u8,
        z: bool,
        ll: u8,
        bcst: bool,
        vp: bool,
        aaa: u8,
    ) {
        self.push(0x62);
        self.push(
            (if r { 0 } else { 0x80 })
                | (if x { 0 } else { 0x40 })
                | (if b { 0 } else { 0x20 })
                | (if rp { 0 } else { 0x10 })
                | (map & 0x07),
        );
        self.push((if w { 0x80 } else { 0 }) | (((!vvvv) & 0x0F) << 3) | 0x04 | (pp & 0x03));
        self.push(
            (if z { 0x80 } else { 0 })
                | ((ll & 0x03) << 5)
                | (if bcst { 0x10 } else { 0 })
                | (if vp { 0 } else { 0x08 })
                | (aaa & 0x07),
        );
    }
}
