use super::clock_accuracy::ClockAccuracy;
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockQuality {
    pub clock_class: u8,
    pub clock_accuracy: ClockAccuracy,
    pub offset_scaled_log_variance: u16,
}

impl WireFormat for ClockQuality {
    fn wire_size(&self) -> usize {
        4
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.clock_class)?;
        writer.put_u8(self.clock_accuracy.into())?;
        writer.put_u16(self.offset_scaled_log_variance)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            clock_class: reader.get_u8()?,
            clock_accuracy: ClockAccuracy::try_from(reader.get_u8()?)?,
            offset_scaled_log_variance: reader.get_u16()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_quality_wireformat() {
        let representations = [(
            [0x7a, 0x2a, 0x12, 0x34u8],
            ClockQuality {
                clock_class: 122,
                clock_accuracy: ClockAccuracy::MS2_5,
                offset_scaled_log_variance: 0x1234,
            },
        )];

        for (byte_representation, object_representation) in representations {
            let mut serialization_buffer = [0; 4];
            object_representation
                .serialize(&mut WireWriter::new(&mut serialization_buffer))
                .unwrap();
            assert_eq!(serialization_buffer, byte_representation);

            let deserialized_data =
                ClockQuality::deserialize(&mut WireReader::new(&byte_representation)).unwrap();
            assert_eq!(deserialized_data, object_representation);
        }
    }

    #[test]
    fn rejects_reserved_accuracy() {
        let bytes = [0x7a, 0x00, 0x12, 0x34u8];
        assert_eq!(
            ClockQuality::deserialize(&mut WireReader::new(&bytes)),
            Err(MngError::BadValue)
        );
    }
}
