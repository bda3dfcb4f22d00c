use core::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::ptp_text::PtpText;
use super::timestamp::Timestamp;
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// Severity of a logged fault, syslog-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum FaultSeverity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Informational = 6,
    Debug = 7,
}

impl FaultSeverity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Emergency => "Emergency",
            Self::Alert => "Alert",
            Self::Critical => "Critical",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Notice => "Notice",
            Self::Informational => "Informational",
            Self::Debug => "Debug",
        }
    }
}

impl core::fmt::Display for FaultSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FaultSeverity {
    type Err = MngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Emergency,
            Self::Alert,
            Self::Critical,
            Self::Error,
            Self::Warning,
            Self::Notice,
            Self::Informational,
            Self::Debug,
        ]
        .into_iter()
        .find(|v| v.name().eq_ignore_ascii_case(s))
        .ok_or(MngError::BadValue)
    }
}

/// One FAULT_LOG entry. The leading length field covers everything after
/// itself and must agree with the variable-length texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultRecord {
    pub fault_time: Timestamp,
    pub severity: FaultSeverity,
    pub name: PtpText,
    pub value: PtpText,
    pub description: PtpText,
}

impl WireFormat for FaultRecord {
    fn wire_size(&self) -> usize {
        2 + 10
            + 1
            + self.name.wire_size()
            + self.value.wire_size()
            + self.description.wire_size()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u16((self.wire_size() - 2) as u16)?;
        self.fault_time.serialize(writer)?;
        writer.put_u8(self.severity.into())?;
        self.name.serialize(writer)?;
        self.value.serialize(writer)?;
        self.description.serialize(writer)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let length = reader.get_u16()? as usize;
        let start = reader.consumed();
        let record = Self {
            fault_time: Timestamp::deserialize(reader)?,
            severity: FaultSeverity::try_from(reader.get_u8()?)?,
            name: PtpText::deserialize(reader)?,
            value: PtpText::deserialize(reader)?,
            description: PtpText::deserialize(reader)?,
        };
        if reader.consumed() - start != length {
            return Err(MngError::SizeMismatch);
        }
        Ok(record)
    }
}
