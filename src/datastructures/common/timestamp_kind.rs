use core::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datastructures::MngError;

/// How a port produces its timestamps.
///
/// Carried by the implementation-specific PORT_PROPERTIES_NP TLV; the
/// values match the linuxptp time stamping modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum TimestampKind {
    Software = 0,
    Hardware = 1,
    LegacyHw = 2,
    OneStep = 3,
    P2p1Step = 4,
}

impl TimestampKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Software => "SOFTWARE",
            Self::Hardware => "HARDWARE",
            Self::LegacyHw => "LEGACY_HW",
            Self::OneStep => "ONESTEP",
            Self::P2p1Step => "P2P1STEP",
        }
    }
}

impl core::fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimestampKind {
    type Err = MngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Software,
            Self::Hardware,
            Self::LegacyHw,
            Self::OneStep,
            Self::P2p1Step,
        ]
        .into_iter()
        .find(|k| k.name().eq_ignore_ascii_case(s))
        .ok_or(MngError::BadValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_kind_values() {
        for i in 0..5u8 {
            assert_eq!(u8::from(TimestampKind::try_from(i).unwrap()), i);
        }
        assert!(TimestampKind::try_from(5).is_err());
    }
}
