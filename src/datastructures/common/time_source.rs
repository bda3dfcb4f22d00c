use core::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datastructures::MngError;

/// What the time values for a system are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum TimeSource {
    AtomicClock = 0x10,
    Gnss = 0x20,
    TerrestrialRadio = 0x30,
    SerialTimeCode = 0x39,
    Ptp = 0x40,
    Ntp = 0x50,
    HandSet = 0x60,
    Other = 0x90,
    InternalOscillator = 0xa0,
}

impl Default for TimeSource {
    fn default() -> Self {
        Self::InternalOscillator
    }
}

impl TimeSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AtomicClock => "ATOMIC_CLOCK",
            Self::Gnss => "GNSS",
            Self::TerrestrialRadio => "TERRESTRIAL_RADIO",
            Self::SerialTimeCode => "SERIAL_TIME_CODE",
            Self::Ptp => "PTP",
            Self::Ntp => "NTP",
            Self::HandSet => "HAND_SET",
            Self::Other => "OTHER",
            Self::InternalOscillator => "INTERNAL_OSCILLATOR",
        }
    }
}

impl core::fmt::Display for TimeSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeSource {
    type Err = MngError;

    /// Case-insensitive; also accepts `GPS`, the 2008 edition's keyword for
    /// what is now GNSS.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GPS") {
            return Ok(Self::Gnss);
        }
        [
            Self::AtomicClock,
            Self::Gnss,
            Self::TerrestrialRadio,
            Self::SerialTimeCode,
            Self::Ptp,
            Self::Ntp,
            Self::HandSet,
            Self::Other,
            Self::InternalOscillator,
        ]
        .into_iter()
        .find(|t| t.name().eq_ignore_ascii_case(s))
        .ok_or(MngError::BadValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_source_values() {
        for i in 0..=u8::MAX {
            if let Ok(source) = TimeSource::try_from(i) {
                assert_eq!(u8::from(source), i);
            }
        }
        assert!(TimeSource::try_from(0x21).is_err());
    }

    #[test]
    fn gps_alias() {
        assert_eq!("gps".parse::<TimeSource>().unwrap(), TimeSource::Gnss);
        assert_eq!("GNSS".parse::<TimeSource>().unwrap(), TimeSource::Gnss);
    }
}
