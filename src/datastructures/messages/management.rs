use core::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datastructures::common::PortIdentity;
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// The management message action. See 15.4.1.6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ActionField {
    Get = 0,
    Set = 1,
    Response = 2,
    Command = 3,
    Acknowledge = 4,
}

impl Default for ActionField {
    fn default() -> Self {
        Self::Get
    }
}

impl ActionField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Set => "SET",
            Self::Response => "RESPONSE",
            Self::Command => "COMMAND",
            Self::Acknowledge => "ACKNOWLEDGE",
        }
    }
}

impl core::fmt::Display for ActionField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActionField {
    type Err = MngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Get,
            Self::Set,
            Self::Response,
            Self::Command,
            Self::Acknowledge,
        ]
        .into_iter()
        .find(|a| a.name().eq_ignore_ascii_case(s))
        .ok_or(MngError::BadValue)
    }
}

/// The fields between the common header and the first TLV of a management
/// message. The actionField shares its byte with a reserved nibble and is
/// followed by one reserved byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ManagementHeader {
    pub target_port_identity: PortIdentity,
    pub starting_boundary_hops: u8,
    pub boundary_hops: u8,
    pub action_raw: u8,
}

pub(crate) const MANAGEMENT_HEADER_SIZE: usize = 14;

impl ManagementHeader {
    pub fn action(&self) -> Result<ActionField, MngError> {
        ActionField::try_from(self.action_raw & 0x0f).map_err(|_| MngError::BadAction)
    }
}

impl WireFormat for ManagementHeader {
    fn wire_size(&self) -> usize {
        MANAGEMENT_HEADER_SIZE
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.target_port_identity.serialize(writer)?;
        writer.put_u8(self.starting_boundary_hops)?;
        writer.put_u8(self.boundary_hops)?;
        writer.put_u8(self.action_raw & 0x0f)?;
        writer.pad(1)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let header = Self {
            target_port_identity: PortIdentity::deserialize(reader)?,
            starting_boundary_hops: reader.get_u8()?,
            boundary_hops: reader.get_u8()?,
            action_raw: reader.get_u8()?,
        };
        reader.skip(1)?;
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastructures::common::ClockIdentity;

    #[test]
    fn management_header_wireformat() {
        let header = ManagementHeader {
            target_port_identity: PortIdentity {
                clock_identity: ClockIdentity([1, 2, 3, 4, 5, 6, 7, 8]),
                port_number: 2,
            },
            starting_boundary_hops: 5,
            boundary_hops: 5,
            action_raw: 1,
        };

        let mut buffer = [0xffu8; 14];
        header
            .serialize(&mut WireWriter::new(&mut buffer))
            .unwrap();
        assert_eq!(
            buffer,
            [1, 2, 3, 4, 5, 6, 7, 8, 0x00, 0x02, 5, 5, 1, 0]
        );

        let deserialized = ManagementHeader::deserialize(&mut WireReader::new(&buffer)).unwrap();
        assert_eq!(deserialized, header);
        assert_eq!(deserialized.action().unwrap(), ActionField::Set);
    }

    #[test]
    fn reserved_action_nibble_is_masked() {
        let header = ManagementHeader {
            action_raw: 0xf2,
            ..Default::default()
        };
        assert_eq!(header.action().unwrap(), ActionField::Response);
    }

    #[test]
    fn invalid_action() {
        let header = ManagementHeader {
            action_raw: 0x07,
            ..Default::default()
        };
        assert_eq!(header.action(), Err(MngError::BadAction));
    }
}
