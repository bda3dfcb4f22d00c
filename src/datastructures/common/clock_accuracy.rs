use num_enum::{IntoPrimitive, TryFromPrimitive};

/// How accurate the clock is expected to be when not synchronized.
///
/// Only the discrete codes `0x17..=0x31` and the `Unknown` code are legal
/// on the wire; everything else is rejected while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ClockAccuracy {
    /// Accurate within 1 ps
    PS1 = 0x17,
    /// Accurate within 2.5 ps
    PS2_5 = 0x18,
    /// Accurate within 10 ps
    PS10 = 0x19,
    /// Accurate within 25 ps
    PS25 = 0x1a,
    /// Accurate within 100 ps
    PS100 = 0x1b,
    /// Accurate within 250 ps
    PS250 = 0x1c,
    /// Accurate within 1 ns
    NS1 = 0x1d,
    /// Accurate within 2.5 ns
    NS2_5 = 0x1e,
    /// Accurate within 10 ns
    NS10 = 0x1f,
    /// Accurate within 25 ns
    NS25 = 0x20,
    /// Accurate within 100 ns
    NS100 = 0x21,
    /// Accurate within 250 ns
    NS250 = 0x22,
    /// Accurate within 1 us
    US1 = 0x23,
    /// Accurate within 2.5 us
    US2_5 = 0x24,
    /// Accurate within 10 us
    US10 = 0x25,
    /// Accurate within 25 us
    US25 = 0x26,
    /// Accurate within 100 us
    US100 = 0x27,
    /// Accurate within 250 us
    US250 = 0x28,
    /// Accurate within 1 ms
    MS1 = 0x29,
    /// Accurate within 2.5 ms
    MS2_5 = 0x2a,
    /// Accurate within 10 ms
    MS10 = 0x2b,
    /// Accurate within 25 ms
    MS25 = 0x2c,
    /// Accurate within 100 ms
    MS100 = 0x2d,
    /// Accurate within 250 ms
    MS250 = 0x2e,
    /// Accurate within 1 s
    S1 = 0x2f,
    /// Accurate within 10 s
    S10 = 0x30,
    /// Accurate within >10 s
    SGT10 = 0x31,
    /// Accuracy is unknown
    Unknown = 0xef,
}

impl Default for ClockAccuracy {
    fn default() -> Self {
        Self::Unknown
    }
}

impl ClockAccuracy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PS1 => "PS1",
            Self::PS2_5 => "PS2_5",
            Self::PS10 => "PS10",
            Self::PS25 => "PS25",
            Self::PS100 => "PS100",
            Self::PS250 => "PS250",
            Self::NS1 => "NS1",
            Self::NS2_5 => "NS2_5",
            Self::NS10 => "NS10",
            Self::NS25 => "NS25",
            Self::NS100 => "NS100",
            Self::NS250 => "NS250",
            Self::US1 => "US1",
            Self::US2_5 => "US2_5",
            Self::US10 => "US10",
            Self::US25 => "US25",
            Self::US100 => "US100",
            Self::US250 => "US250",
            Self::MS1 => "MS1",
            Self::MS2_5 => "MS2_5",
            Self::MS10 => "MS10",
            Self::MS25 => "MS25",
            Self::MS100 => "MS100",
            Self::MS250 => "MS250",
            Self::S1 => "S1",
            Self::S10 => "S10",
            Self::SGT10 => "SGT10",
            Self::Unknown => "Unknown",
        }
    }
}

impl core::fmt::Display for ClockAccuracy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
