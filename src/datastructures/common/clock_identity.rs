use core::fmt;
use core::str::FromStr;

use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// The identity of a PTP node.
///
/// Must have a unique value for each node in a ptp network, typically
/// derived from a MAC address via EUI-64 expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct ClockIdentity(pub [u8; 8]);

impl WireFormat for ClockIdentity {
    fn wire_size(&self) -> usize {
        8
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_bytes(&self.0)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self(reader.get_bytes(8)?.try_into().unwrap()))
    }
}

impl fmt::Display for ClockIdentity {
    /// The conventional `xxxxxx.xxxx.xxxxxx` rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.0;
        write!(
            f,
            "{:02x}{:02x}{:02x}.{:02x}{:02x}.{:02x}{:02x}{:02x}",
            v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7]
        )
    }
}

impl FromStr for ClockIdentity {
    type Err = MngError;

    /// Accepts sixteen hex digits, with the conventional dots optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use hex::FromHex;

        let compact: String = s.chars().filter(|c| *c != '.').collect();
        Ok(Self(
            <[u8; 8]>::from_hex(compact).map_err(|_| MngError::BadValue)?,
        ))
    }
}
