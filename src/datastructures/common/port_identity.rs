use core::fmt;

use super::clock_identity::ClockIdentity;
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct PortIdentity {
    pub clock_identity: ClockIdentity,
    pub port_number: u16,
}

impl PortIdentity {
    /// The all-ones wildcard addressing every port of every clock.
    pub fn all_ports() -> Self {
        Self {
            clock_identity: ClockIdentity([0xff; 8]),
            port_number: 0xffff,
        }
    }
}

impl WireFormat for PortIdentity {
    fn wire_size(&self) -> usize {
        10
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.clock_identity.serialize(writer)?;
        writer.put_u16(self.port_number)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            clock_identity: ClockIdentity::deserialize(reader)?,
            port_number: reader.get_u16()?,
        })
    }
}

impl fmt::Display for PortIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.clock_identity, self.port_number)
    }
}
