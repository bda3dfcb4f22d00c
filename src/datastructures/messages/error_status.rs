use core::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datastructures::common::PtpText;
use crate::datastructures::wire::WireReader;
use crate::datastructures::{MngError, WireFormat};

/// Error codes of the MANAGEMENT_ERROR_STATUS TLV. See Table 109.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum ManagementErrorId {
    ResponseTooBig = 0x0001,
    NoSuchId = 0x0002,
    WrongLength = 0x0003,
    WrongValue = 0x0004,
    NotSetable = 0x0005,
    NotSupported = 0x0006,
    GeneralError = 0xfffe,
}

impl ManagementErrorId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ResponseTooBig => "RESPONSE_TOO_BIG",
            Self::NoSuchId => "NO_SUCH_ID",
            Self::WrongLength => "WRONG_LENGTH",
            Self::WrongValue => "WRONG_VALUE",
            Self::NotSetable => "NOT_SETABLE",
            Self::NotSupported => "NOT_SUPPORTED",
            Self::GeneralError => "GENERAL_ERROR",
        }
    }
}

impl core::fmt::Display for ManagementErrorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ManagementErrorId {
    type Err = MngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::ResponseTooBig,
            Self::NoSuchId,
            Self::WrongLength,
            Self::WrongValue,
            Self::NotSetable,
            Self::NotSupported,
            Self::GeneralError,
        ]
        .into_iter()
        .find(|e| e.name().eq_ignore_ascii_case(s))
        .ok_or(MngError::BadValue)
    }
}

/// Decoded body of a MANAGEMENT_ERROR_STATUS TLV: error id, the echoed
/// management id, a reserved word and an optional display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ManagementErrorStatus {
    pub error_id: ManagementErrorId,
    pub management_id_code: u16,
    pub display: PtpText,
}

impl ManagementErrorStatus {
    /// Decodes the TLV body; `reader` must be bounded to the TLV's
    /// dataField.
    pub fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let error_id = ManagementErrorId::try_from(reader.get_u16()?)?;
        let management_id_code = reader.get_u16()?;
        reader.skip(4)?;
        let display = if reader.remaining() > 0 {
            let text = PtpText::deserialize(reader)?;
            if reader.remaining() == 1 {
                reader.skip(1)?; // parity pad
            }
            text
        } else {
            PtpText::default()
        };
        if reader.remaining() != 0 {
            return Err(MngError::SizeMismatch);
        }
        Ok(Self {
            error_id,
            management_id_code,
            display,
        })
    }
}
