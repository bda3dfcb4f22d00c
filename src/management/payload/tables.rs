//! Payloads carrying tables of addresses or identities.

use crate::datastructures::common::{AcceptableMaster, ClockIdentity, PortAddress};
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

fn size_mismatch_on_underrun(err: MngError) -> MngError {
    match err {
        MngError::BufferTooShort => MngError::SizeMismatch,
        other => other,
    }
}

/// PATH_TRACE_LIST: the identities of the announce path. The list has no
/// count field; it fills the TLV.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathTraceList {
    pub path_sequence: Vec<ClockIdentity>,
}

impl WireFormat for PathTraceList {
    fn wire_size(&self) -> usize {
        8 * self.path_sequence.len()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        for identity in &self.path_sequence {
            identity.serialize(writer)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let mut path_sequence = Vec::with_capacity(reader.remaining() / 8);
        while reader.remaining() != 0 {
            if reader.remaining() < 8 {
                return Err(MngError::SizeMismatch);
            }
            path_sequence.push(ClockIdentity::deserialize(reader)?);
        }
        Ok(Self { path_sequence })
    }
}

/// GRANDMASTER_CLUSTER_TABLE: a counted list of cluster member addresses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GrandmasterClusterTable {
    pub log_query_interval: i8,
    pub addresses: Vec<PortAddress>,
}

impl WireFormat for GrandmasterClusterTable {
    fn wire_size(&self) -> usize {
        2 + self.addresses.iter().map(WireFormat::wire_size).sum::<usize>()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        if self.addresses.len() > u8::MAX as usize {
            return Err(MngError::BadValue);
        }
        writer.put_i8(self.log_query_interval)?;
        writer.put_u8(self.addresses.len() as u8)?;
        for address in &self.addresses {
            address.serialize(writer)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let log_query_interval = reader.get_i8()?;
        let count = reader.get_u8()?;
        let mut addresses = Vec::with_capacity(count as usize);
        for _ in 0..count {
            addresses.push(PortAddress::deserialize(reader).map_err(size_mismatch_on_underrun)?);
        }
        Ok(Self {
            log_query_interval,
            addresses,
        })
    }
}

/// UNICAST_MASTER_TABLE: a counted list of candidate master addresses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnicastMasterTable {
    pub log_query_interval: i8,
    pub addresses: Vec<PortAddress>,
}

impl WireFormat for UnicastMasterTable {
    fn wire_size(&self) -> usize {
        3 + self.addresses.iter().map(WireFormat::wire_size).sum::<usize>()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        if self.addresses.len() > u16::MAX as usize {
            return Err(MngError::BadValue);
        }
        writer.put_i8(self.log_query_interval)?;
        writer.put_u16(self.addresses.len() as u16)?;
        for address in &self.addresses {
            address.serialize(writer)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let log_query_interval = reader.get_i8()?;
        let count = reader.get_u16()?;
        let mut addresses = Vec::with_capacity(usize::min(count as usize, 64));
        for _ in 0..count {
            addresses.push(PortAddress::deserialize(reader).map_err(size_mismatch_on_underrun)?);
        }
        Ok(Self {
            log_query_interval,
            addresses,
        })
    }
}

/// UNICAST_MASTER_MAX_TABLE_SIZE response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnicastMasterMaxTableSize {
    pub max_table_size: u16,
}

impl WireFormat for UnicastMasterMaxTableSize {
    fn wire_size(&self) -> usize {
        2
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u16(self.max_table_size)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            max_table_size: reader.get_u16()?,
        })
    }
}

/// ACCEPTABLE_MASTER_TABLE: a counted list of acceptable masters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AcceptableMasterTable {
    pub masters: Vec<AcceptableMaster>,
}

impl WireFormat for AcceptableMasterTable {
    fn wire_size(&self) -> usize {
        2 + 11 * self.masters.len()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        if self.masters.len() > u16::MAX as usize {
            return Err(MngError::BadValue);
        }
        writer.put_u16(self.masters.len() as u16)?;
        for master in &self.masters {
            master.serialize(writer)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let count = reader.get_u16()? as usize;
        if count * 11 > reader.remaining() {
            return Err(MngError::SizeMismatch);
        }
        let mut masters = Vec::with_capacity(count);
        for _ in 0..count {
            masters.push(AcceptableMaster::deserialize(reader)?);
        }
        Ok(Self { masters })
    }
}

/// ACCEPTABLE_MASTER_MAX_TABLE_SIZE response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AcceptableMasterMaxTableSize {
    pub max_table_size: u16,
}

impl WireFormat for AcceptableMasterMaxTableSize {
    fn wire_size(&self) -> usize {
        2
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u16(self.max_table_size)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            max_table_size: reader.get_u16()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastructures::common::{NetworkProtocol, PortIdentity};

    #[test]
    fn path_trace_list_fills_tlv() {
        let bytes = [
            0, 1, 2, 3, 4, 5, 6, 7, //
            8, 9, 10, 11, 12, 13, 14, 15,
        ];
        let list = PathTraceList::deserialize(&mut WireReader::new(&bytes)).unwrap();
        assert_eq!(
            list.path_sequence,
            vec![
                ClockIdentity([0, 1, 2, 3, 4, 5, 6, 7]),
                ClockIdentity([8, 9, 10, 11, 12, 13, 14, 15]),
            ]
        );

        let mut buffer = vec![0; list.wire_size()];
        list.serialize(&mut WireWriter::new(&mut buffer)).unwrap();
        assert_eq!(buffer, bytes);
    }

    #[test]
    fn path_trace_list_partial_identity() {
        let bytes = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(
            PathTraceList::deserialize(&mut WireReader::new(&bytes)),
            Err(MngError::SizeMismatch)
        );
    }

    #[test]
    fn unicast_master_table_round_trip() {
        let table = UnicastMasterTable {
            log_query_interval: 1,
            addresses: vec![
                PortAddress {
                    network_protocol: NetworkProtocol::UdpIPv4,
                    address: vec![10, 0, 0, 1],
                },
                PortAddress {
                    network_protocol: NetworkProtocol::UdpIPv4,
                    address: vec![10, 0, 0, 2],
                },
            ],
        };

        let mut buffer = vec![0; table.wire_size()];
        table.serialize(&mut WireWriter::new(&mut buffer)).unwrap();
        assert_eq!(&buffer[0..3], &[0x01, 0x00, 0x02]);

        let deserialized = UnicastMasterTable::deserialize(&mut WireReader::new(&buffer)).unwrap();
        assert_eq!(deserialized, table);
    }

    #[test]
    fn acceptable_master_table_count_check() {
        // Count of three with room for one entry.
        let mut bytes = vec![0x00, 0x03];
        bytes.extend_from_slice(&[0; 11]);
        assert_eq!(
            AcceptableMasterTable::deserialize(&mut WireReader::new(&bytes)),
            Err(MngError::SizeMismatch)
        );
    }

    #[test]
    fn acceptable_master_table_round_trip() {
        let table = AcceptableMasterTable {
            masters: vec![AcceptableMaster {
                acceptable_port_identity: PortIdentity {
                    clock_identity: ClockIdentity([1; 8]),
                    port_number: 1,
                },
                alternate_priority1: 0,
            }],
        };
        let mut buffer = vec![0; table.wire_size()];
        table.serialize(&mut WireWriter::new(&mut buffer)).unwrap();
        let deserialized =
            AcceptableMasterTable::deserialize(&mut WireReader::new(&buffer)).unwrap();
        assert_eq!(deserialized, table);
    }
}
