//! Wire datastructures of the PTP management protocol.

pub mod common;
pub mod messages;
pub(crate) mod wire;

use wire::{WireReader, WireWriter};

/// Errors produced while building or parsing a management message.
///
/// One flat enumeration is shared by every layer of the codec; primitive
/// failures bubble up unchanged and are refined where an outer length field
/// or value range gives a more precise verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MngError {
    /// The frame carried a MANAGEMENT_ERROR_STATUS TLV. Not a codec
    /// failure: consult [`Message::error_id`](crate::Message::error_id) and
    /// [`Message::error_display`](crate::Message::error_display).
    #[error("peer reported a management error status")]
    ErrorStatus,
    #[error("unknown management TLV id")]
    InvalidId,
    #[error("wrong TLV header")]
    InvalidTlv,
    #[error("field length does not match the TLV length")]
    SizeMismatch,
    #[error("buffer is too small")]
    BufferTooShort,
    #[error("TLV length field is odd")]
    OddLength,
    #[error("value is out of range or invalid")]
    BadValue,
    #[error("wrong value in message header")]
    BadHeader,
    #[error("action is not allowed for this TLV id")]
    BadAction,
    #[error("TLV id is not supported")]
    Unsupported,
    #[error("message does not fit its length field")]
    Capacity,
}

impl<Enum: num_enum::TryFromPrimitive> From<num_enum::TryFromPrimitiveError<Enum>> for MngError {
    fn from(_: num_enum::TryFromPrimitiveError<Enum>) -> Self {
        Self::BadValue
    }
}

/// Serialization to and from the PTP wire format, in field declaration
/// order against a checked cursor.
pub(crate) trait WireFormat: Sized {
    /// The byte size on the wire of this object.
    fn wire_size(&self) -> usize;

    /// Serializes the object into the PTP wire format.
    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError>;

    /// Deserializes the object from the PTP wire format.
    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError>;
}
