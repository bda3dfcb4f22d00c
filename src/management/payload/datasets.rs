//! Payloads mirroring the IEEE 1588 data sets (GET-only responses).

use super::time_flags;
use crate::datastructures::common::{
    ClockIdentity, ClockQuality, PortIdentity, PortState, TimeInterval, TimeSource,
};
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// DEFAULT_DATA_SET response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultDataSet {
    /// TWO_STEP and SLAVE_ONLY bits.
    pub flags: u8,
    pub number_ports: u16,
    pub priority1: u8,
    pub clock_quality: ClockQuality,
    pub priority2: u8,
    pub clock_identity: ClockIdentity,
    pub domain_number: u8,
}

impl DefaultDataSet {
    pub const TWO_STEP: u8 = 1 << 0;
    pub const SLAVE_ONLY: u8 = 1 << 1;

    pub fn two_step(&self) -> bool {
        self.flags & Self::TWO_STEP != 0
    }

    pub fn slave_only(&self) -> bool {
        self.flags & Self::SLAVE_ONLY != 0
    }
}

impl WireFormat for DefaultDataSet {
    fn wire_size(&self) -> usize {
        20
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.flags)?;
        writer.pad(1)?;
        writer.put_u16(self.number_ports)?;
        writer.put_u8(self.priority1)?;
        self.clock_quality.serialize(writer)?;
        writer.put_u8(self.priority2)?;
        self.clock_identity.serialize(writer)?;
        writer.put_u8(self.domain_number)?;
        writer.pad(1)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let flags = reader.get_u8()?;
        reader.skip(1)?;
        let data_set = Self {
            flags,
            number_ports: reader.get_u16()?,
            priority1: reader.get_u8()?,
            clock_quality: ClockQuality::deserialize(reader)?,
            priority2: reader.get_u8()?,
            clock_identity: ClockIdentity::deserialize(reader)?,
            domain_number: reader.get_u8()?,
        };
        reader.skip(1)?;
        Ok(data_set)
    }
}

/// CURRENT_DATA_SET response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentDataSet {
    pub steps_removed: u16,
    pub offset_from_master: TimeInterval,
    pub mean_path_delay: TimeInterval,
}

impl WireFormat for CurrentDataSet {
    fn wire_size(&self) -> usize {
        18
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u16(self.steps_removed)?;
        self.offset_from_master.serialize(writer)?;
        self.mean_path_delay.serialize(writer)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            steps_removed: reader.get_u16()?,
            offset_from_master: TimeInterval::deserialize(reader)?,
            mean_path_delay: TimeInterval::deserialize(reader)?,
        })
    }
}

/// PARENT_DATA_SET response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParentDataSet {
    pub parent_port_identity: PortIdentity,
    /// PARENT_STATS bit.
    pub flags: u8,
    pub observed_parent_offset_scaled_log_variance: u16,
    pub observed_parent_clock_phase_change_rate: i32,
    pub grandmaster_priority1: u8,
    pub grandmaster_clock_quality: ClockQuality,
    pub grandmaster_priority2: u8,
    pub grandmaster_identity: ClockIdentity,
}

impl ParentDataSet {
    pub const PARENT_STATS: u8 = 1 << 0;
}

impl WireFormat for ParentDataSet {
    fn wire_size(&self) -> usize {
        32
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.parent_port_identity.serialize(writer)?;
        writer.put_u8(self.flags)?;
        writer.pad(1)?;
        writer.put_u16(self.observed_parent_offset_scaled_log_variance)?;
        writer.put_i32(self.observed_parent_clock_phase_change_rate)?;
        writer.put_u8(self.grandmaster_priority1)?;
        self.grandmaster_clock_quality.serialize(writer)?;
        writer.put_u8(self.grandmaster_priority2)?;
        self.grandmaster_identity.serialize(writer)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let parent_port_identity = PortIdentity::deserialize(reader)?;
        let flags = reader.get_u8()?;
        reader.skip(1)?;
        Ok(Self {
            parent_port_identity,
            flags,
            observed_parent_offset_scaled_log_variance: reader.get_u16()?,
            observed_parent_clock_phase_change_rate: reader.get_i32()?,
            grandmaster_priority1: reader.get_u8()?,
            grandmaster_clock_quality: ClockQuality::deserialize(reader)?,
            grandmaster_priority2: reader.get_u8()?,
            grandmaster_identity: ClockIdentity::deserialize(reader)?,
        })
    }
}

/// TIME_PROPERTIES_DATA_SET response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimePropertiesDataSet {
    pub current_utc_offset: i16,
    /// The [`time_flags`] bits.
    pub flags: u8,
    pub time_source: TimeSource,
}

impl TimePropertiesDataSet {
    pub fn leap61(&self) -> bool {
        self.flags & time_flags::LI_61 != 0
    }

    pub fn leap59(&self) -> bool {
        self.flags & time_flags::LI_59 != 0
    }

    pub fn current_utc_offset_valid(&self) -> bool {
        self.flags & time_flags::UTC_OFF_VALID != 0
    }

    pub fn ptp_timescale(&self) -> bool {
        self.flags & time_flags::PTP_TIMESCALE != 0
    }

    pub fn time_traceable(&self) -> bool {
        self.flags & time_flags::TIME_TRACEABLE != 0
    }

    pub fn frequency_traceable(&self) -> bool {
        self.flags & time_flags::FREQ_TRACEABLE != 0
    }
}

impl WireFormat for TimePropertiesDataSet {
    fn wire_size(&self) -> usize {
        4
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_i16(self.current_utc_offset)?;
        writer.put_u8(self.flags)?;
        writer.put_u8(self.time_source.into())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            current_utc_offset: reader.get_i16()?,
            flags: reader.get_u8()?,
            time_source: TimeSource::try_from(reader.get_u8()?)?,
        })
    }
}

/// PORT_DATA_SET response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortDataSet {
    pub port_identity: PortIdentity,
    pub port_state: PortState,
    pub log_min_delay_req_interval: i8,
    pub peer_mean_path_delay: TimeInterval,
    pub log_announce_interval: i8,
    pub announce_receipt_timeout: u8,
    pub log_sync_interval: i8,
    pub delay_mechanism: u8,
    pub log_min_pdelay_req_interval: i8,
    pub version_number: u8,
}

impl WireFormat for PortDataSet {
    fn wire_size(&self) -> usize {
        26
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.port_identity.serialize(writer)?;
        writer.put_u8(self.port_state.into())?;
        writer.put_i8(self.log_min_delay_req_interval)?;
        self.peer_mean_path_delay.serialize(writer)?;
        writer.put_i8(self.log_announce_interval)?;
        writer.put_u8(self.announce_receipt_timeout)?;
        writer.put_i8(self.log_sync_interval)?;
        writer.put_u8(self.delay_mechanism)?;
        writer.put_i8(self.log_min_pdelay_req_interval)?;
        writer.put_u8(self.version_number)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            port_identity: PortIdentity::deserialize(reader)?,
            port_state: PortState::try_from(reader.get_u8()?)?,
            log_min_delay_req_interval: reader.get_i8()?,
            peer_mean_path_delay: TimeInterval::deserialize(reader)?,
            log_announce_interval: reader.get_i8()?,
            announce_receipt_timeout: reader.get_u8()?,
            log_sync_interval: reader.get_i8()?,
            delay_mechanism: reader.get_u8()?,
            log_min_pdelay_req_interval: reader.get_i8()?,
            version_number: reader.get_u8()?,
        })
    }
}

/// TRANSPARENT_CLOCK_DEFAULT_DATA_SET response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransparentClockDefaultDataSet {
    pub clock_identity: ClockIdentity,
    pub number_ports: u16,
    pub delay_mechanism: u8,
    pub primary_domain: u8,
}

impl WireFormat for TransparentClockDefaultDataSet {
    fn wire_size(&self) -> usize {
        12
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.clock_identity.serialize(writer)?;
        writer.put_u16(self.number_ports)?;
        writer.put_u8(self.delay_mechanism)?;
        writer.put_u8(self.primary_domain)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            clock_identity: ClockIdentity::deserialize(reader)?,
            number_ports: reader.get_u16()?,
            delay_mechanism: reader.get_u8()?,
            primary_domain: reader.get_u8()?,
        })
    }
}

/// TRANSPARENT_CLOCK_PORT_DATA_SET response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransparentClockPortDataSet {
    pub port_identity: PortIdentity,
    /// FAULTY bit.
    pub flags: u8,
    pub log_min_pdelay_req_interval: i8,
    pub peer_mean_path_delay: TimeInterval,
}

impl TransparentClockPortDataSet {
    pub const FAULTY: u8 = 1 << 0;
}

impl WireFormat for TransparentClockPortDataSet {
    fn wire_size(&self) -> usize {
        20
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.port_identity.serialize(writer)?;
        writer.put_u8(self.flags)?;
        writer.put_i8(self.log_min_pdelay_req_interval)?;
        self.peer_mean_path_delay.serialize(writer)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            port_identity: PortIdentity::deserialize(reader)?,
            flags: reader.get_u8()?,
            log_min_pdelay_req_interval: reader.get_i8()?,
            peer_mean_path_delay: TimeInterval::deserialize(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastructures::common::ClockAccuracy;
    use fixed::types::I48F16;

    #[test]
    fn default_data_set_wireformat() {
        let data_set = DefaultDataSet {
            flags: DefaultDataSet::TWO_STEP,
            number_ports: 1,
            priority1: 128,
            clock_quality: ClockQuality {
                clock_class: 248,
                clock_accuracy: ClockAccuracy::Unknown,
                offset_scaled_log_variance: 0xffff,
            },
            priority2: 127,
            clock_identity: ClockIdentity([0, 1, 2, 3, 4, 5, 6, 7]),
            domain_number: 0,
        };

        let mut buffer = [0; 20];
        data_set
            .serialize(&mut WireWriter::new(&mut buffer))
            .unwrap();
        #[rustfmt::skip]
        let expected = [
            0x01, 0x00, 0x00, 0x01, 0x80,
            248, 0xef, 0xff, 0xff,
            127,
            0, 1, 2, 3, 4, 5, 6, 7,
            0, 0,
        ];
        assert_eq!(buffer, expected);

        let deserialized = DefaultDataSet::deserialize(&mut WireReader::new(&buffer)).unwrap();
        assert_eq!(deserialized, data_set);
        assert!(deserialized.two_step());
        assert!(!deserialized.slave_only());
    }

    #[test]
    fn current_data_set_wireformat() {
        let data_set = CurrentDataSet {
            steps_removed: 2,
            offset_from_master: TimeInterval(I48F16::from_num(-1)),
            mean_path_delay: TimeInterval(I48F16::from_num(2.5f64)),
        };

        let mut buffer = [0; 18];
        data_set
            .serialize(&mut WireWriter::new(&mut buffer))
            .unwrap();
        #[rustfmt::skip]
        let expected = [
            0x00, 0x02,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x80, 0x00,
        ];
        assert_eq!(buffer, expected);

        let deserialized = CurrentDataSet::deserialize(&mut WireReader::new(&buffer)).unwrap();
        assert_eq!(deserialized, data_set);
    }

    #[test]
    fn time_properties_flags() {
        let data_set = TimePropertiesDataSet {
            current_utc_offset: 37,
            flags: time_flags::UTC_OFF_VALID | time_flags::PTP_TIMESCALE,
            time_source: TimeSource::Gnss,
        };
        assert!(data_set.current_utc_offset_valid());
        assert!(data_set.ptp_timescale());
        assert!(!data_set.leap61());

        let mut buffer = [0; 4];
        data_set
            .serialize(&mut WireWriter::new(&mut buffer))
            .unwrap();
        assert_eq!(buffer, [0x00, 0x25, 0x0c, 0x20]);
    }

    #[test]
    fn port_data_set_rejects_bad_state() {
        let mut bytes = [0u8; 26];
        bytes[10] = 12; // no such port state
        assert_eq!(
            PortDataSet::deserialize(&mut WireReader::new(&bytes)),
            Err(MngError::BadValue)
        );
    }
}
