//! Payloads of the settable single-value ids (GET/SET pairs).

use super::time_flags;
use crate::datastructures::common::{ClockAccuracy, PortState, PtpText, TimeSource, Timestamp};
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// One settable byte followed by a reserved byte.
macro_rules! byte_setting {
    ($(#[$attr:meta])* $name:ident { $field:ident: $ty:ident }, $get:ident, $put:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name {
            pub $field: $ty,
        }

        impl WireFormat for $name {
            fn wire_size(&self) -> usize {
                2
            }

            fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
                writer.$put(self.$field)?;
                writer.pad(1)
            }

            fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
                let value = Self {
                    $field: reader.$get()?,
                };
                reader.skip(1)?;
                Ok(value)
            }
        }
    };
}

/// A single enable bit in a flags byte, followed by a reserved byte.
macro_rules! flag_setting {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name {
            pub flags: u8,
        }

        impl $name {
            pub const ENABLED: u8 = 1 << 0;

            pub fn from_enabled(enabled: bool) -> Self {
                Self {
                    flags: enabled as u8,
                }
            }

            pub fn enabled(&self) -> bool {
                self.flags & Self::ENABLED != 0
            }
        }

        impl WireFormat for $name {
            fn wire_size(&self) -> usize {
                2
            }

            fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
                writer.put_u8(self.flags)?;
                writer.pad(1)
            }

            fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
                let value = Self {
                    flags: reader.get_u8()?,
                };
                reader.skip(1)?;
                Ok(value)
            }
        }
    };
}

byte_setting!(Priority1 { priority1: u8 }, get_u8, put_u8);
byte_setting!(Priority2 { priority2: u8 }, get_u8, put_u8);
byte_setting!(Domain { domain_number: u8 }, get_u8, put_u8);
byte_setting!(
    LogAnnounceInterval {
        log_announce_interval: i8
    },
    get_i8,
    put_i8
);
byte_setting!(
    AnnounceReceiptTimeout {
        announce_receipt_timeout: u8
    },
    get_u8,
    put_u8
);
byte_setting!(
    LogSyncInterval {
        log_sync_interval: i8
    },
    get_i8,
    put_i8
);
byte_setting!(
    /// Major version in the low nibble, minor in the high nibble.
    VersionNumber { version_number: u8 },
    get_u8,
    put_u8
);
byte_setting!(
    AlternateTimeOffsetMaxKey { max_key: u8 },
    get_u8,
    put_u8
);
byte_setting!(PrimaryDomain { primary_domain: u8 }, get_u8, put_u8);
byte_setting!(
    DelayMechanism {
        delay_mechanism: u8
    },
    get_u8,
    put_u8
);
byte_setting!(
    LogMinPdelayReqInterval {
        log_min_pdelay_req_interval: i8
    },
    get_i8,
    put_i8
);

flag_setting!(SlaveOnly);
flag_setting!(UnicastNegotiationEnable);
flag_setting!(PathTraceEnable);
flag_setting!(AcceptableMasterTableEnabled);
flag_setting!(ExternalPortConfigurationEnabled);
flag_setting!(MasterOnly);
flag_setting!(HoldoverUpgradeEnable);

/// TIME: the clock's current time as a GET/SET value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Time {
    pub current_time: Timestamp,
}

impl WireFormat for Time {
    fn wire_size(&self) -> usize {
        10
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.current_time.serialize(writer)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            current_time: Timestamp::deserialize(reader)?,
        })
    }
}

/// CLOCK_ACCURACY: the settable accuracy field of the clock quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockAccuracySetting {
    pub clock_accuracy: ClockAccuracy,
}

impl WireFormat for ClockAccuracySetting {
    fn wire_size(&self) -> usize {
        2
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.clock_accuracy.into())?;
        writer.pad(1)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let value = Self {
            clock_accuracy: ClockAccuracy::try_from(reader.get_u8()?)?,
        };
        reader.skip(1)?;
        Ok(value)
    }
}

/// UTC_PROPERTIES: the UTC offset and its leap/validity bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UtcProperties {
    pub current_utc_offset: i16,
    /// LI_61, LI_59 and UTC_OFF_VALID bits.
    pub flags: u8,
}

impl UtcProperties {
    pub fn leap61(&self) -> bool {
        self.flags & time_flags::LI_61 != 0
    }

    pub fn leap59(&self) -> bool {
        self.flags & time_flags::LI_59 != 0
    }

    pub fn current_utc_offset_valid(&self) -> bool {
        self.flags & time_flags::UTC_OFF_VALID != 0
    }
}

impl WireFormat for UtcProperties {
    fn wire_size(&self) -> usize {
        4
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_i16(self.current_utc_offset)?;
        writer.put_u8(self.flags)?;
        writer.pad(1)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let value = Self {
            current_utc_offset: reader.get_i16()?,
            flags: reader.get_u8()?,
        };
        reader.skip(1)?;
        Ok(value)
    }
}

/// TRACEABILITY_PROPERTIES: time and frequency traceability bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceabilityProperties {
    /// TIME_TRACEABLE and FREQ_TRACEABLE bits.
    pub flags: u8,
}

impl TraceabilityProperties {
    pub fn time_traceable(&self) -> bool {
        self.flags & time_flags::TIME_TRACEABLE != 0
    }

    pub fn frequency_traceable(&self) -> bool {
        self.flags & time_flags::FREQ_TRACEABLE != 0
    }
}

impl WireFormat for TraceabilityProperties {
    fn wire_size(&self) -> usize {
        2
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.flags)?;
        writer.pad(1)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let value = Self {
            flags: reader.get_u8()?,
        };
        reader.skip(1)?;
        Ok(value)
    }
}

/// TIMESCALE_PROPERTIES: PTP timescale bit plus the time source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimescaleProperties {
    /// PTP_TIMESCALE bit.
    pub flags: u8,
    pub time_source: TimeSource,
}

impl TimescaleProperties {
    pub fn ptp_timescale(&self) -> bool {
        self.flags & time_flags::PTP_TIMESCALE != 0
    }
}

impl WireFormat for TimescaleProperties {
    fn wire_size(&self) -> usize {
        2
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.flags)?;
        writer.put_u8(self.time_source.into())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            flags: reader.get_u8()?,
            time_source: TimeSource::try_from(reader.get_u8()?)?,
        })
    }
}

/// ALTERNATE_MASTER settings of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlternateMaster {
    /// TRANSMIT_SYNC bit.
    pub flags: u8,
    pub log_alternate_multicast_sync_interval: i8,
    pub number_of_alternate_masters: u8,
}

impl AlternateMaster {
    pub const TRANSMIT_SYNC: u8 = 1 << 0;

    pub fn transmit_alternate_multicast_sync(&self) -> bool {
        self.flags & Self::TRANSMIT_SYNC != 0
    }
}

impl WireFormat for AlternateMaster {
    fn wire_size(&self) -> usize {
        4
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.flags)?;
        writer.put_i8(self.log_alternate_multicast_sync_interval)?;
        writer.put_u8(self.number_of_alternate_masters)?;
        writer.pad(1)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let value = Self {
            flags: reader.get_u8()?,
            log_alternate_multicast_sync_interval: reader.get_i8()?,
            number_of_alternate_masters: reader.get_u8()?,
        };
        reader.skip(1)?;
        Ok(value)
    }
}

/// ALTERNATE_TIME_OFFSET_ENABLE: toggles one keyed alternate timescale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlternateTimeOffsetEnable {
    pub key_field: u8,
    /// ENABLED bit.
    pub flags: u8,
}

impl AlternateTimeOffsetEnable {
    pub const ENABLED: u8 = 1 << 0;

    pub fn enabled(&self) -> bool {
        self.flags & Self::ENABLED != 0
    }
}

impl WireFormat for AlternateTimeOffsetEnable {
    fn wire_size(&self) -> usize {
        2
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.key_field)?;
        writer.put_u8(self.flags)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            key_field: reader.get_u8()?,
            flags: reader.get_u8()?,
        })
    }
}

/// ALTERNATE_TIME_OFFSET_NAME: the display name of a keyed timescale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlternateTimeOffsetName {
    pub key_field: u8,
    pub display_name: PtpText,
}

impl WireFormat for AlternateTimeOffsetName {
    fn wire_size(&self) -> usize {
        1 + self.display_name.wire_size()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.key_field)?;
        self.display_name.serialize(writer)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            key_field: reader.get_u8()?,
            display_name: PtpText::deserialize(reader)?,
        })
    }
}

/// ALTERNATE_TIME_OFFSET_PROPERTIES of a keyed timescale. The time of the
/// next jump is a 48-bit seconds value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlternateTimeOffsetProperties {
    pub key_field: u8,
    pub current_offset: i32,
    pub jump_seconds: i32,
    pub time_of_next_jump: u64,
}

impl WireFormat for AlternateTimeOffsetProperties {
    fn wire_size(&self) -> usize {
        16
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.key_field)?;
        writer.put_i32(self.current_offset)?;
        writer.put_i32(self.jump_seconds)?;
        writer.put_u48(self.time_of_next_jump)?;
        writer.pad(1)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let value = Self {
            key_field: reader.get_u8()?,
            current_offset: reader.get_i32()?,
            jump_seconds: reader.get_i32()?,
            time_of_next_jump: reader.get_u48()?,
        };
        reader.skip(1)?;
        Ok(value)
    }
}

/// EXT_PORT_CONFIG_PORT_DATA_SET: externally configured desired state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtPortConfigPortDataSet {
    /// ENABLED bit.
    pub flags: u8,
    pub desired_state: PortState,
}

impl ExtPortConfigPortDataSet {
    pub const ENABLED: u8 = 1 << 0;

    pub fn enabled(&self) -> bool {
        self.flags & Self::ENABLED != 0
    }
}

impl WireFormat for ExtPortConfigPortDataSet {
    fn wire_size(&self) -> usize {
        2
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.flags)?;
        writer.put_u8(self.desired_state.into())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            flags: reader.get_u8()?,
            desired_state: PortState::try_from(reader.get_u8()?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority1_wireformat() {
        let payload = Priority1 { priority1: 128 };
        let mut buffer = [0xff; 2];
        payload.serialize(&mut WireWriter::new(&mut buffer)).unwrap();
        assert_eq!(buffer, [0x80, 0x00]);

        let deserialized = Priority1::deserialize(&mut WireReader::new(&buffer)).unwrap();
        assert_eq!(deserialized, payload);
    }

    #[test]
    fn flag_setting_round_trip() {
        let payload = SlaveOnly::from_enabled(true);
        assert!(payload.enabled());

        let mut buffer = [0; 2];
        payload.serialize(&mut WireWriter::new(&mut buffer)).unwrap();
        assert_eq!(buffer, [0x01, 0x00]);

        // Unknown flag bits survive.
        let deserialized = SlaveOnly::deserialize(&mut WireReader::new(&[0x81, 0x00])).unwrap();
        assert_eq!(deserialized.flags, 0x81);
        assert!(deserialized.enabled());
    }

    #[test]
    fn alternate_time_offset_properties_wireformat() {
        let payload = AlternateTimeOffsetProperties {
            key_field: 1,
            current_offset: -37,
            jump_seconds: 1,
            time_of_next_jump: 0x0001_0000_0000,
        };

        let mut buffer = [0; 16];
        payload.serialize(&mut WireWriter::new(&mut buffer)).unwrap();
        #[rustfmt::skip]
        let expected = [
            0x01,
            0xff, 0xff, 0xff, 0xdb,
            0x00, 0x00, 0x00, 0x01,
            0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
            0x00,
        ];
        assert_eq!(buffer, expected);

        let deserialized =
            AlternateTimeOffsetProperties::deserialize(&mut WireReader::new(&buffer)).unwrap();
        assert_eq!(deserialized, payload);
    }

    #[test]
    fn clock_accuracy_setting_rejects_reserved() {
        assert_eq!(
            ClockAccuracySetting::deserialize(&mut WireReader::new(&[0x32, 0x00])),
            Err(MngError::BadValue)
        );
    }
}
