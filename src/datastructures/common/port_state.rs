use core::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datastructures::MngError;

/// Protocol state of a PTP port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum PortState {
    Initializing = 1,
    Faulty = 2,
    Disabled = 3,
    Listening = 4,
    PreMaster = 5,
    Master = 6,
    Passive = 7,
    Uncalibrated = 8,
    Slave = 9,
}

impl PortState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initializing => "INITIALIZING",
            Self::Faulty => "FAULTY",
            Self::Disabled => "DISABLED",
            Self::Listening => "LISTENING",
            Self::PreMaster => "PRE_MASTER",
            Self::Master => "MASTER",
            Self::Passive => "PASSIVE",
            Self::Uncalibrated => "UNCALIBRATED",
            Self::Slave => "SLAVE",
        }
    }
}

impl core::fmt::Display for PortState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PortState {
    type Err = MngError;

    /// Case-insensitive; also accepts the `CLIENT` alias for SLAVE.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("CLIENT") {
            return Ok(Self::Slave);
        }
        [
            Self::Initializing,
            Self::Faulty,
            Self::Disabled,
            Self::Listening,
            Self::PreMaster,
            Self::Master,
            Self::Passive,
            Self::Uncalibrated,
            Self::Slave,
        ]
        .into_iter()
        .find(|p| p.name().eq_ignore_ascii_case(s))
        .ok_or(MngError::BadValue)
    }
}
