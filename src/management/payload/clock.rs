//! Payloads of the clock description and maintenance ids (0x0000 range).

use crate::datastructures::common::{ClockType, FaultRecord, PortAddress, PtpText};
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// CLOCK_DESCRIPTION response body. See 15.5.3.1.2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDescription {
    pub clock_type: ClockType,
    pub physical_layer_protocol: PtpText,
    /// Opaque physical address, e.g. the MAC address of the port.
    pub physical_address: Vec<u8>,
    pub protocol_address: PortAddress,
    pub manufacturer_identity: [u8; 3],
    pub product_description: PtpText,
    pub revision_data: PtpText,
    pub user_description: PtpText,
    pub profile_identity: [u8; 6],
}

impl WireFormat for ClockDescription {
    fn wire_size(&self) -> usize {
        2 + self.physical_layer_protocol.wire_size()
            + 2
            + self.physical_address.len()
            + self.protocol_address.wire_size()
            + 4
            + self.product_description.wire_size()
            + self.revision_data.wire_size()
            + self.user_description.wire_size()
            + 6
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        if self.physical_address.len() > u16::MAX as usize {
            return Err(MngError::BadValue);
        }
        writer.put_u16(self.clock_type.bits())?;
        self.physical_layer_protocol.serialize(writer)?;
        writer.put_u16(self.physical_address.len() as u16)?;
        writer.put_bytes(&self.physical_address)?;
        self.protocol_address.serialize(writer)?;
        writer.put_bytes(&self.manufacturer_identity)?;
        writer.pad(1)?;
        self.product_description.serialize(writer)?;
        self.revision_data.serialize(writer)?;
        self.user_description.serialize(writer)?;
        writer.put_bytes(&self.profile_identity)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let clock_type = ClockType::from_bits_retain(reader.get_u16()?);
        let physical_layer_protocol = PtpText::deserialize(reader)?;
        let physical_address_length = reader.get_u16()? as usize;
        let physical_address = reader.get_bytes(physical_address_length)?.to_vec();
        let protocol_address = PortAddress::deserialize(reader)?;
        let manufacturer_identity = reader.get_bytes(3)?.try_into().unwrap();
        reader.skip(1)?;
        Ok(Self {
            clock_type,
            physical_layer_protocol,
            physical_address,
            protocol_address,
            manufacturer_identity,
            product_description: PtpText::deserialize(reader)?,
            revision_data: PtpText::deserialize(reader)?,
            user_description: PtpText::deserialize(reader)?,
            profile_identity: reader.get_bytes(6)?.try_into().unwrap(),
        })
    }
}

/// USER_DESCRIPTION: a settable free-form description of the clock.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDescription {
    pub user_description: PtpText,
}

impl WireFormat for UserDescription {
    fn wire_size(&self) -> usize {
        self.user_description.wire_size()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.user_description.serialize(writer)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            user_description: PtpText::deserialize(reader)?,
        })
    }
}

/// INITIALIZE command body. Key 0 is the standard INITIALIZE_EVENT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Initialize {
    pub initialization_key: u16,
}

impl WireFormat for Initialize {
    fn wire_size(&self) -> usize {
        2
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u16(self.initialization_key)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            initialization_key: reader.get_u16()?,
        })
    }
}

/// FAULT_LOG response body: a counted list of fault records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaultLog {
    pub records: Vec<FaultRecord>,
}

impl WireFormat for FaultLog {
    fn wire_size(&self) -> usize {
        2 + self.records.iter().map(WireFormat::wire_size).sum::<usize>()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        if self.records.len() > u16::MAX as usize {
            return Err(MngError::BadValue);
        }
        writer.put_u16(self.records.len() as u16)?;
        for record in &self.records {
            record.serialize(writer)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let count = reader.get_u16()?;
        let mut records = Vec::with_capacity(usize::min(count as usize, 64));
        for _ in 0..count {
            // A count that overruns the TLV is a length mismatch, not a
            // short buffer.
            records.push(FaultRecord::deserialize(reader).map_err(|err| match err {
                MngError::BufferTooShort => MngError::SizeMismatch,
                other => other,
            })?);
        }
        Ok(Self { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastructures::common::{FaultSeverity, NetworkProtocol, Timestamp};

    #[test]
    fn clock_description_wireformat() {
        let description = ClockDescription {
            clock_type: ClockType::ORDINARY,
            physical_layer_protocol: PtpText::new("IEEE 802.3").unwrap(),
            physical_address: vec![0x00, 0x1b, 0x17, 0x0a, 0x0b, 0x0c],
            protocol_address: PortAddress {
                network_protocol: NetworkProtocol::UdpIPv4,
                address: vec![192, 168, 0, 20],
            },
            manufacturer_identity: [1, 2, 3],
            product_description: PtpText::new(";;").unwrap(),
            revision_data: PtpText::new(";;").unwrap(),
            user_description: PtpText::new(";").unwrap(),
            profile_identity: [0, 1, 0, 1, 0, 0],
        };

        let mut buffer = vec![0; description.wire_size()];
        description
            .serialize(&mut WireWriter::new(&mut buffer))
            .unwrap();

        #[rustfmt::skip]
        let expected = [
            0x80, 0x00, // clockType: ordinary
            0x0a, b'I', b'E', b'E', b'E', b' ', b'8', b'0', b'2', b'.', b'3',
            0x00, 0x06, 0x00, 0x1b, 0x17, 0x0a, 0x0b, 0x0c, // physical address
            0x00, 0x01, 0x00, 0x04, 192, 168, 0, 20, // protocol address
            1, 2, 3, 0, // manufacturer identity + reserved
            0x02, b';', b';',
            0x02, b';', b';',
            0x01, b';',
            0, 1, 0, 1, 0, 0, // profile identity
        ];
        assert_eq!(buffer, expected);

        let deserialized = ClockDescription::deserialize(&mut WireReader::new(&buffer)).unwrap();
        assert_eq!(deserialized, description);
    }

    #[test]
    fn fault_log_wireformat() {
        let log = FaultLog {
            records: vec![FaultRecord {
                fault_time: Timestamp {
                    seconds: 2,
                    nanos: 1,
                },
                severity: FaultSeverity::Warning,
                name: PtpText::new("a").unwrap(),
                value: PtpText::new("b").unwrap(),
                description: PtpText::new("").unwrap(),
            }],
        };

        let mut buffer = vec![0; log.wire_size()];
        log.serialize(&mut WireWriter::new(&mut buffer)).unwrap();

        let deserialized = FaultLog::deserialize(&mut WireReader::new(&buffer)).unwrap();
        assert_eq!(deserialized, log);
    }

    #[test]
    fn fault_log_count_overrun() {
        // Claims two records but carries none.
        let bytes = [0x00, 0x02];
        assert_eq!(
            FaultLog::deserialize(&mut WireReader::new(&bytes)),
            Err(MngError::SizeMismatch)
        );
    }
}
