use super::{ControlField, MessageType};
use crate::datastructures::common::PortIdentity;
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// The fields of the 34-byte common header that a management codec
/// stamps. The correctionField and messageTypeSpecific words are always
/// written as zero and the logMessageInterval as 0x7f, per 13.3.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Header {
    pub transport_specific: u8,
    pub version_minor: u8,
    pub message_length: u16,
    pub domain_number: u8,
    pub unicast_flag: bool,
    pub source_port_identity: PortIdentity,
    pub sequence_id: u16,
}

/// Raw header fields of a received frame; validation is the message
/// object's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeserializedHeader {
    pub message_type: u8,
    pub version_major: u8,
    #[allow(dead_code)]
    pub version_minor: u8,
    pub message_length: u16,
    pub domain_number: u8,
    pub unicast_flag: bool,
    pub source_port_identity: PortIdentity,
    pub sequence_id: u16,
    pub control_field: u8,
}

pub(crate) const HEADER_SIZE: usize = 34;

impl Header {
    pub fn serialize_header(
        &self,
        content_type: MessageType,
        buffer: &mut [u8],
    ) -> Result<(), MngError> {
        if buffer.len() < HEADER_SIZE {
            return Err(MngError::BufferTooShort);
        }
        buffer[0] = (self.transport_specific << 4) | (u8::from(content_type) & 0x0f);
        buffer[1] = (self.version_minor << 4) | 0x02;
        buffer[2..4].copy_from_slice(&self.message_length.to_be_bytes());
        buffer[4] = self.domain_number;
        buffer[5] = 0;
        buffer[6] = (self.unicast_flag as u8) << 2;
        buffer[7] = 0;
        buffer[8..16].fill(0); // correctionField
        buffer[16..20].fill(0); // messageTypeSpecific
        self.source_port_identity
            .serialize(&mut WireWriter::new(&mut buffer[20..30]))?;
        buffer[30..32].copy_from_slice(&self.sequence_id.to_be_bytes());
        buffer[32] = ControlField::from(content_type).to_primitive();
        buffer[33] = 0x7f;
        Ok(())
    }

    pub fn deserialize_header(buffer: &[u8]) -> Result<DeserializedHeader, MngError> {
        if buffer.len() < HEADER_SIZE {
            return Err(MngError::BufferTooShort);
        }

        Ok(DeserializedHeader {
            message_type: buffer[0] & 0x0f,
            version_major: buffer[1] & 0x0f,
            version_minor: buffer[1] >> 4,
            message_length: u16::from_be_bytes(buffer[2..4].try_into().unwrap()),
            domain_number: buffer[4],
            unicast_flag: (buffer[6] & (1 << 2)) > 0,
            source_port_identity: PortIdentity::deserialize(&mut WireReader::new(
                &buffer[20..30],
            ))?,
            sequence_id: u16::from_be_bytes(buffer[30..32].try_into().unwrap()),
            control_field: buffer[32],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastructures::common::ClockIdentity;

    #[test]
    fn header_wireformat() {
        let header = Header {
            transport_specific: 0x5,
            version_minor: 1,
            message_length: 0x1234,
            domain_number: 0xaa,
            unicast_flag: true,
            source_port_identity: PortIdentity {
                clock_identity: ClockIdentity([0, 1, 2, 3, 4, 5, 6, 7]),
                port_number: 0x5555,
            },
            sequence_id: 0xdead,
        };

        let mut buffer = [0; 34];
        header
            .serialize_header(MessageType::Management, &mut buffer)
            .unwrap();

        #[rustfmt::skip]
        let expected = [
            0x5d, 0x12, 0x12, 0x34, 0xaa, 0x00, 0x04, 0x00,
            0, 0, 0, 0, 0, 0, 0, 0, // correctionField
            0, 0, 0, 0, // messageTypeSpecific
            0, 1, 2, 3, 4, 5, 6, 7, 0x55, 0x55, // sourcePortIdentity
            0xde, 0xad, // sequenceId
            0x04, 0x7f, // controlField, logMessageInterval
        ];
        assert_eq!(buffer, expected);

        let deserialized = Header::deserialize_header(&buffer).unwrap();
        assert_eq!(deserialized.message_type, 0xd);
        assert_eq!(deserialized.version_major, 2);
        assert_eq!(deserialized.version_minor, 1);
        assert_eq!(deserialized.message_length, 0x1234);
        assert_eq!(deserialized.domain_number, 0xaa);
        assert!(deserialized.unicast_flag);
        assert_eq!(
            deserialized.source_port_identity,
            header.source_port_identity
        );
        assert_eq!(deserialized.sequence_id, 0xdead);
        assert_eq!(deserialized.control_field, 0x04);
    }

    #[test]
    fn too_short() {
        assert_eq!(
            Header::deserialize_header(&[0; 33]),
            Err(MngError::BufferTooShort)
        );
    }
}
