//! `Dst`: tri-state daylight-saving-time flag.

/// Whether daylight saving time is in effect for a value.
///
/// Maps onto the C `tm_isdst` convention: positive means in effect, zero
/// means not in effect, negative means no information is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dst {
    /// DST is in effect.
    InEffect,
    /// DST is not in effect.
    NotInEffect,
    /// No information is available.
    #[default]
    Unknown,
}

impl Dst {
    /// Decode a `tm_isdst`-style integer.
    pub fn from_flag(flag: i32) -> Self {
        match flag {
            f if f > 0 => Dst::InEffect,
            0 => Dst::NotInEffect,
            _ => Dst::Unknown,
        }
    }

    /// Encode as a `tm_isdst`-style integer (1, 0 or -1).
    pub fn flag(&self) -> i32 {
        match self {
            Dst::InEffect => 1,
            Dst::NotInEffect => 0,
            Dst::Unknown => -1,
        }
    }
}

impl From<i32> for Dst {
    fn from(flag: i32) -> Self {
        Dst::from_flag(flag)
    }
}
