use core::fmt;

use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp {
    /// The seconds field of the timestamp.
    /// 48-bit, must be less than 281474976710656
    pub seconds: u64,
    /// The nanoseconds field of the timestamp.
    /// Must be less than 10^9
    pub nanos: u32,
}

impl WireFormat for Timestamp {
    fn wire_size(&self) -> usize {
        10
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u48(self.seconds)?;
        writer.put_u32(self.nanos)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            seconds: reader.get_u48()?,
            nanos: reader.get_u32()?,
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_wireformat() {
        let representations = [
            (
                [0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x01u8],
                Timestamp {
                    seconds: 0x0000_0000_0002,
                    nanos: 0x0000_0001,
                },
            ),
            (
                [0x10, 0x00, 0x00, 0x00, 0x00, 0x02, 0x10, 0x00, 0x00, 0x01u8],
                Timestamp {
                    seconds: 0x1000_0000_0002,
                    nanos: 0x1000_0001,
                },
            ),
        ];

        for (byte_representation, object_representation) in representations {
            let mut serialization_buffer = [0; 10];
            object_representation
                .serialize(&mut WireWriter::new(&mut serialization_buffer))
                .unwrap();
            assert_eq!(serialization_buffer, byte_representation);

            let deserialized_data =
                Timestamp::deserialize(&mut WireReader::new(&byte_representation)).unwrap();
            assert_eq!(deserialized_data, object_representation);
        }
    }

    #[test]
    fn seconds_out_of_range() {
        let ts = Timestamp {
            seconds: 1 << 48,
            nanos: 0,
        };
        let mut buffer = [0; 10];
        assert_eq!(
            ts.serialize(&mut WireWriter::new(&mut buffer)),
            Err(MngError::BadValue)
        );
    }
}
