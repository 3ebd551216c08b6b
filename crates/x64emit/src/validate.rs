//! Dynamic operand validation.
//!
//! Everything the type system cannot rule out at the call site is checked
//! here: raw register indices produced via `from_index`, memory-operand
//! field consistency, and the high-byte/REX exclusion. The `unchecked`
//! feature compiles every check down to `Ok(())`; emitted bytes for
//! invalid operands are then unspecified.

use crate::error::EmitError;
use crate::mem::Mem;

#[cfg(not(feature = "unchecked"))]
mod imp {
    use super::*;

    /// Range check for a GPR index in a 16/32/64-bit slot.
    #[inline]
    pub(crate) fn check_gpr(r: u8) -> Result<(), EmitError> {
        if r < 0x10 {
            Ok(())
        } else {
            Err(EmitError::InvalidGpr { index: r })
        }
    }

    /// Range check for the split 8-bit index space.
    #[inline]
    pub(crate) fn check_gpr8(r: u8) -> Result<(), EmitError> {
        if r < 0x10 || (0x14..0x18).contains(&r) {
            Ok(())
        } else {
            Err(EmitError::InvalidGpr8 { index: r })
        }
    }

    /// Range check for a vector register under VEX/EVEX dispatch.
    #[inline]
    pub(crate) fn check_vec(r: u8) -> Result<(), EmitError> {
        if r < 32 {
            Ok(())
        } else {
            Err(EmitError::InvalidVec { index: r })
        }
    }

    /// Range check for a vector register on a legacy-SSE entry point,
    /// which has no way to encode indices above 15.
    #[inline]
    pub(crate) fn check_vec_sse(r: u8) -> Result<(), EmitError> {
        if r < 16 {
            Ok(())
        } else if r < 32 {
            Err(EmitError::VecNeedsEvex { index: r })
        } else {
            Err(EmitError::InvalidVec { index: r })
        }
    }

    /// Memory operand field consistency. The shape constructors keep most
    /// of this true by construction, but `from_index` registers and
    /// deserialized values still end up here.
    pub(crate) fn check_mem(m: &Mem) -> Result<(), EmitError> {
        if m.base_scale == 0 && m.base != 0 {
            return Err(EmitError::MemBaseUnscaled);
        }
        if !matches!(m.index_scale, 0 | 1 | 2 | 4 | 8) {
            return Err(EmitError::MemIndexScale {
                scale: m.index_scale,
            });
        }
        if m.index_scale != 0 {
            // SIB index 100 is the "no index" sentinel.
            if m.index == 4 {
                return Err(EmitError::MemSpIndex);
            }
        } else if m.index != 0 {
            return Err(EmitError::MemIndexUnscaled);
        }
        if m.base_scale != 0 {
            check_gpr(m.base)?;
        }
        if m.index_scale != 0 {
            check_gpr(m.index)?;
        }
        Ok(())
    }

    const fn is_high_byte(r: u8) -> bool {
        r >= 0x04 && r <= 0x07
    }

    /// Two 8-bit registers in one instruction: `ah..bh` cannot meet a
    /// partner whose encoding demands REX.
    #[inline]
    pub(crate) fn check_gpr8_pair(a: u8, b: u8) -> Result<(), EmitError> {
        let ok = if is_high_byte(a) {
            b <= 0x07
        } else if is_high_byte(b) {
            a <= 0x07
        } else {
            true
        };
        if ok {
            Ok(())
        } else {
            Err(EmitError::HighByteRexConflict)
        }
    }

    /// An 8-bit register against a memory operand: an extended base or
    /// index would force REX.
    #[inline]
    pub(crate) fn check_gpr8_mem(a: u8, m: &Mem) -> Result<(), EmitError> {
        if is_high_byte(a) && (m.base > 0x07 || m.index > 0x07) {
            Err(EmitError::HighByteRexConflict)
        } else {
            Ok(())
        }
    }
}

#[cfg(feature = "unchecked")]
mod imp {
    use super::*;

    #[inline]
    pub(crate) fn check_gpr(_r: u8) -> Result<(), EmitError> {
        Ok(())
    }

    #[inline]
    pub(crate) fn check_gpr8(_r: u8) -> Result<(), EmitError> {
        Ok(())
    }

    #[inline]
    pub(crate) fn check_vec(_r: u8) -> Result<(), EmitError> {
        Ok(())
    }

    #[inline]
    pub(crate) fn check_vec_sse(_r: u8) -> Result<(), EmitError> {
        Ok(())
    }

    #[inline]
    pub(crate) fn check_mem(_m: &Mem) -> Result<(), EmitError> {
        Ok(())
    }

    #[inline]
    pub(crate) fn check_gpr8_pair(_a: u8, _b: u8) -> Result<(), EmitError> {
        Ok(())
    }

    #[inline]
    pub(crate) fn check_gpr8_mem(_a: u8, _m: &Mem) -> Result<(), EmitError> {
        Ok(())
    }
}

pub(crate) use imp::*;

/// Size-directed GPR range check (8-bit slots use the split index space).
#[inline]
pub(crate) fn check_gpr_sized(r: u8, size: u8) -> Result<(), EmitError> {
    if size == 1 {
        check_gpr8(r)
    } else {
        check_gpr(r)
    }
}
