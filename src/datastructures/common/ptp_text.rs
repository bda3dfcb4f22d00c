use core::fmt;

use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// Length-prefixed UTF-8 text, at most 255 code units, no terminator.
#[derive(Debug, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct PtpText(String);

impl PtpText {
    pub fn new(text: impl Into<String>) -> Result<Self, MngError> {
        let text = text.into();
        if text.len() > u8::MAX as usize {
            return Err(MngError::BadValue);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl WireFormat for PtpText {
    fn wire_size(&self) -> usize {
        1 + self.0.len()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.0.len() as u8)?;
        writer.put_bytes(self.0.as_bytes())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let length = reader.get_u8()? as usize;
        let bytes = reader.get_bytes(length)?;
        let text = core::str::from_utf8(bytes).map_err(|_| MngError::BadValue)?;
        Ok(Self(text.to_owned()))
    }
}

impl TryFrom<&str> for PtpText {
    type Error = MngError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for PtpText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PtpText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
