use core::ops::{Deref, DerefMut};

use fixed::types::I48F16;

use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// Represents time intervals in scaled nanoseconds: the wire value divided
/// by 2^16 is the interval in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeInterval(pub I48F16);

impl TimeInterval {
    /// The interval in (fractional) nanoseconds.
    pub fn nanoseconds(&self) -> f64 {
        self.0.to_num()
    }
}

impl Deref for TimeInterval {
    type Target = I48F16;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for TimeInterval {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl WireFormat for TimeInterval {
    fn wire_size(&self) -> usize {
        8
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_i64(self.0.to_bits())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self(I48F16::from_bits(reader.get_i64()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_interval_wireformat() {
        let representations = [
            (
                [0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x80, 0x00u8],
                TimeInterval(I48F16::from_num(2.5f64)),
            ),
            (
                [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01u8],
                TimeInterval(I48F16::from_num(1.0f64 / u16::MAX as f64)),
            ),
            (
                [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00u8],
                TimeInterval(I48F16::from_num(-1.0f64)),
            ),
        ];

        for (byte_representation, object_representation) in representations {
            let mut serialization_buffer = [0; 8];
            object_representation
                .serialize(&mut WireWriter::new(&mut serialization_buffer))
                .unwrap();
            assert_eq!(serialization_buffer, byte_representation);

            let deserialized_data =
                TimeInterval::deserialize(&mut WireReader::new(&byte_representation)).unwrap();
            assert_eq!(deserialized_data, object_representation);
        }
    }

    #[test]
    fn nanoseconds_scaling() {
        let interval = TimeInterval(I48F16::from_bits(0x0002_8000));
        assert_eq!(interval.nanoseconds(), 2.5);
    }
}
