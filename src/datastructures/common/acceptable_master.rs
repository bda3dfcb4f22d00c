use super::port_identity::PortIdentity;
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// One entry of the ACCEPTABLE_MASTER_TABLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AcceptableMaster {
    pub acceptable_port_identity: PortIdentity,
    pub alternate_priority1: u8,
}

impl WireFormat for AcceptableMaster {
    fn wire_size(&self) -> usize {
        11
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.acceptable_port_identity.serialize(writer)?;
        writer.put_u8(self.alternate_priority1)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            acceptable_port_identity: PortIdentity::deserialize(reader)?,
            alternate_priority1: reader.get_u8()?,
        })
    }
}
