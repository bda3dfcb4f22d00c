use core::fmt;

use super::network_protocol::NetworkProtocol;
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// A transport address: protocol selector plus a length-prefixed opaque
/// address field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortAddress {
    pub network_protocol: NetworkProtocol,
    pub address: Vec<u8>,
}

impl WireFormat for PortAddress {
    fn wire_size(&self) -> usize {
        4 + self.address.len()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        if self.address.len() > u16::MAX as usize {
            return Err(MngError::BadValue);
        }
        writer.put_u16(self.network_protocol.into())?;
        writer.put_u16(self.address.len() as u16)?;
        writer.put_bytes(&self.address)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let network_protocol = NetworkProtocol::try_from(reader.get_u16()?)?;
        let length = reader.get_u16()? as usize;
        Ok(Self {
            network_protocol,
            address: reader.get_bytes(length)?.to_vec(),
        })
    }
}

impl fmt::Display for PortAddress {
    /// Renders IPv4 dotted, IPv6 colon-grouped, anything else as hex
    /// octets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.network_protocol, self.address.len()) {
            (NetworkProtocol::UdpIPv4, 4) => {
                let a = &self.address;
                write!(f, "{}.{}.{}.{}", a[0], a[1], a[2], a[3])
            }
            (NetworkProtocol::UdpIPv6, 16) => {
                for (i, pair) in self.address.chunks(2).enumerate() {
                    if i > 0 {
                        f.write_str(":")?;
                    }
                    write!(f, "{:02x}{:02x}", pair[0], pair[1])?;
                }
                Ok(())
            }
            _ => {
                for (i, byte) in self.address.iter().enumerate() {
                    if i > 0 {
                        f.write_str(":")?;
                    }
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}
