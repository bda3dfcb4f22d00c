//! Payloads of the linuxptp implementation-specific TLVs (ids 0xC000..).
//!
//! Everything here is big-endian like the rest of the protocol, with one
//! exception: the PORT_STATS_NP and PORT_SERVICE_STATS_NP counters are
//! transmitted little-endian.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datastructures::common::{
    ClockIdentity, ClockQuality, PortAddress, PortIdentity, PortState, PtpText, TimeInterval,
    TimeSource, TimestampKind,
};
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// 96-bit scaled nanoseconds value used by TIME_STATUS_NP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaledNs {
    pub nanoseconds_msb: u16,
    pub nanoseconds_lsb: u64,
    pub fractional_nanoseconds: u16,
}

impl WireFormat for ScaledNs {
    fn wire_size(&self) -> usize {
        12
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u16(self.nanoseconds_msb)?;
        writer.put_u64(self.nanoseconds_lsb)?;
        writer.put_u16(self.fractional_nanoseconds)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            nanoseconds_msb: reader.get_u16()?,
            nanoseconds_lsb: reader.get_u64()?,
            fractional_nanoseconds: reader.get_u16()?,
        })
    }
}

/// TIME_STATUS_NP: the servo's view of the master offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeStatusNp {
    /// Offset from the master in nanoseconds.
    pub master_offset: i64,
    /// Ingress time of the last sync in nanoseconds.
    pub ingress_time: i64,
    pub cumulative_scaled_rate_offset: i32,
    pub scaled_last_gm_phase_change: i32,
    pub gm_time_base_indicator: u16,
    pub last_gm_phase_change: ScaledNs,
    pub gm_present: i32,
    pub gm_identity: ClockIdentity,
}

impl WireFormat for TimeStatusNp {
    fn wire_size(&self) -> usize {
        50
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_i64(self.master_offset)?;
        writer.put_i64(self.ingress_time)?;
        writer.put_i32(self.cumulative_scaled_rate_offset)?;
        writer.put_i32(self.scaled_last_gm_phase_change)?;
        writer.put_u16(self.gm_time_base_indicator)?;
        self.last_gm_phase_change.serialize(writer)?;
        writer.put_i32(self.gm_present)?;
        self.gm_identity.serialize(writer)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            master_offset: reader.get_i64()?,
            ingress_time: reader.get_i64()?,
            cumulative_scaled_rate_offset: reader.get_i32()?,
            scaled_last_gm_phase_change: reader.get_i32()?,
            gm_time_base_indicator: reader.get_u16()?,
            last_gm_phase_change: ScaledNs::deserialize(reader)?,
            gm_present: reader.get_i32()?,
            gm_identity: ClockIdentity::deserialize(reader)?,
        })
    }
}

/// GRANDMASTER_SETTINGS_NP: the announced grandmaster properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GrandmasterSettingsNp {
    pub clock_quality: ClockQuality,
    pub utc_offset: i16,
    /// The [`time_flags`](super::time_flags) bits.
    pub time_flags: u8,
    pub time_source: TimeSource,
}

impl WireFormat for GrandmasterSettingsNp {
    fn wire_size(&self) -> usize {
        8
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.clock_quality.serialize(writer)?;
        writer.put_i16(self.utc_offset)?;
        writer.put_u8(self.time_flags)?;
        writer.put_u8(self.time_source.into())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            clock_quality: ClockQuality::deserialize(reader)?,
            utc_offset: reader.get_i16()?,
            time_flags: reader.get_u8()?,
            time_source: TimeSource::try_from(reader.get_u8()?)?,
        })
    }
}

/// PORT_DATA_SET_NP: 802.1AS neighbor rate settings of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortDataSetNp {
    pub neighbor_prop_delay_thresh: u32,
    pub as_capable: i32,
}

impl WireFormat for PortDataSetNp {
    fn wire_size(&self) -> usize {
        8
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u32(self.neighbor_prop_delay_thresh)?;
        writer.put_i32(self.as_capable)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            neighbor_prop_delay_thresh: reader.get_u32()?,
            as_capable: reader.get_i32()?,
        })
    }
}

/// SUBSCRIBE_EVENTS_NP: push notification subscription with a 512-bit
/// event mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscribeEventsNp {
    /// Subscription duration in seconds.
    pub duration: u16,
    pub bitmask: [u8; 64],
}

impl SubscribeEventsNp {
    pub const NOTIFY_PORT_STATE: usize = 0;
    pub const NOTIFY_TIME_SYNC: usize = 1;
    pub const NOTIFY_PARENT_DATA_SET: usize = 2;
    pub const NOTIFY_CMLDS: usize = 3;

    pub fn event(&self, event: usize) -> bool {
        event < 512 && self.bitmask[event / 8] & (1 << (event % 8)) != 0
    }

    pub fn set_event(&mut self, event: usize) {
        if event < 512 {
            self.bitmask[event / 8] |= 1 << (event % 8);
        }
    }

    pub fn clear_event(&mut self, event: usize) {
        if event < 512 {
            self.bitmask[event / 8] &= !(1 << (event % 8));
        }
    }
}

impl Default for SubscribeEventsNp {
    fn default() -> Self {
        Self {
            duration: 0,
            bitmask: [0; 64],
        }
    }
}

impl WireFormat for SubscribeEventsNp {
    fn wire_size(&self) -> usize {
        66
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u16(self.duration)?;
        writer.put_bytes(&self.bitmask)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            duration: reader.get_u16()?,
            bitmask: reader.get_bytes(64)?.try_into().unwrap(),
        })
    }
}

/// PORT_PROPERTIES_NP: port state plus its interface name and time
/// stamping mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortPropertiesNp {
    pub port_identity: PortIdentity,
    pub port_state: PortState,
    pub timestamping: TimestampKind,
    pub interface: PtpText,
}

impl WireFormat for PortPropertiesNp {
    fn wire_size(&self) -> usize {
        12 + self.interface.wire_size()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.port_identity.serialize(writer)?;
        writer.put_u8(self.port_state.into())?;
        writer.put_u8(self.timestamping.into())?;
        self.interface.serialize(writer)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            port_identity: PortIdentity::deserialize(reader)?,
            port_state: PortState::try_from(reader.get_u8()?)?,
            timestamping: TimestampKind::try_from(reader.get_u8()?)?,
            interface: PtpText::deserialize(reader)?,
        })
    }
}

/// PORT_STATS_NP: per-message-type packet counters. The counters are
/// little-endian on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortStatsNp {
    pub port_identity: PortIdentity,
    pub rx_msg_type: [u64; 16],
    pub tx_msg_type: [u64; 16],
}

impl WireFormat for PortStatsNp {
    fn wire_size(&self) -> usize {
        266
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.port_identity.serialize(writer)?;
        for counter in self.rx_msg_type.iter().chain(self.tx_msg_type.iter()) {
            writer.put_u64_le(*counter)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let port_identity = PortIdentity::deserialize(reader)?;
        let mut rx_msg_type = [0; 16];
        for counter in &mut rx_msg_type {
            *counter = reader.get_u64_le()?;
        }
        let mut tx_msg_type = [0; 16];
        for counter in &mut tx_msg_type {
            *counter = reader.get_u64_le()?;
        }
        Ok(Self {
            port_identity,
            rx_msg_type,
            tx_msg_type,
        })
    }
}

/// SYNCHRONIZATION_UNCERTAIN_NP flag value; 0xff means "don't care".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SynchronizationUncertainNp {
    pub val: u8,
}

impl SynchronizationUncertainNp {
    pub const FALSE: u8 = 0;
    pub const TRUE: u8 = 1;
    pub const DONT_CARE: u8 = 0xff;
}

impl WireFormat for SynchronizationUncertainNp {
    fn wire_size(&self) -> usize {
        2
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u8(self.val)?;
        writer.pad(1)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let value = Self {
            val: reader.get_u8()?,
        };
        reader.skip(1)?;
        Ok(value)
    }
}

/// PORT_SERVICE_STATS_NP: port event counters, little-endian like
/// PORT_STATS_NP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortServiceStatsNp {
    pub port_identity: PortIdentity,
    pub announce_timeout: u64,
    pub sync_timeout: u64,
    pub delay_timeout: u64,
    pub unicast_service_timeout: u64,
    pub unicast_request_timeout: u64,
    pub master_announce_timeout: u64,
    pub master_sync_timeout: u64,
    pub qualification_timeout: u64,
    pub sync_mismatch: u64,
    pub followup_mismatch: u64,
}

impl WireFormat for PortServiceStatsNp {
    fn wire_size(&self) -> usize {
        90
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.port_identity.serialize(writer)?;
        for counter in [
            self.announce_timeout,
            self.sync_timeout,
            self.delay_timeout,
            self.unicast_service_timeout,
            self.unicast_request_timeout,
            self.master_announce_timeout,
            self.master_sync_timeout,
            self.qualification_timeout,
            self.sync_mismatch,
            self.followup_mismatch,
        ] {
            writer.put_u64_le(counter)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            port_identity: PortIdentity::deserialize(reader)?,
            announce_timeout: reader.get_u64_le()?,
            sync_timeout: reader.get_u64_le()?,
            delay_timeout: reader.get_u64_le()?,
            unicast_service_timeout: reader.get_u64_le()?,
            unicast_request_timeout: reader.get_u64_le()?,
            master_announce_timeout: reader.get_u64_le()?,
            master_sync_timeout: reader.get_u64_le()?,
            qualification_timeout: reader.get_u64_le()?,
            sync_mismatch: reader.get_u64_le()?,
            followup_mismatch: reader.get_u64_le()?,
        })
    }
}

/// Discovery state of a candidate in UNICAST_MASTER_TABLE_NP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum UnicastMasterState {
    Wait = 0,
    HaveAnnounce = 1,
    NeedSydy = 2,
    HaveSydy = 3,
}

impl UnicastMasterState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wait => "WAIT",
            Self::HaveAnnounce => "HAVE_ANN",
            Self::NeedSydy => "NEED_SYDY",
            Self::HaveSydy => "HAVE_SYDY",
        }
    }
}

impl core::fmt::Display for UnicastMasterState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One candidate of the UNICAST_MASTER_TABLE_NP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicastMasterEntry {
    pub port_identity: PortIdentity,
    pub clock_quality: ClockQuality,
    /// Non-zero when this candidate is the selected master.
    pub selected: u8,
    pub port_state: UnicastMasterState,
    pub priority1: u8,
    pub priority2: u8,
    pub address: PortAddress,
}

impl WireFormat for UnicastMasterEntry {
    fn wire_size(&self) -> usize {
        18 + self.address.wire_size()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.port_identity.serialize(writer)?;
        self.clock_quality.serialize(writer)?;
        writer.put_u8(self.selected)?;
        writer.put_u8(self.port_state.into())?;
        writer.put_u8(self.priority1)?;
        writer.put_u8(self.priority2)?;
        self.address.serialize(writer)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            port_identity: PortIdentity::deserialize(reader)?,
            clock_quality: ClockQuality::deserialize(reader)?,
            selected: reader.get_u8()?,
            port_state: UnicastMasterState::try_from(reader.get_u8()?)?,
            priority1: reader.get_u8()?,
            priority2: reader.get_u8()?,
            address: PortAddress::deserialize(reader)?,
        })
    }
}

/// UNICAST_MASTER_TABLE_NP: the discovered unicast master candidates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnicastMasterTableNp {
    pub entries: Vec<UnicastMasterEntry>,
}

impl WireFormat for UnicastMasterTableNp {
    fn wire_size(&self) -> usize {
        2 + self.entries.iter().map(WireFormat::wire_size).sum::<usize>()
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        if self.entries.len() > u16::MAX as usize {
            return Err(MngError::BadValue);
        }
        writer.put_u16(self.entries.len() as u16)?;
        for entry in &self.entries {
            entry.serialize(writer)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let count = reader.get_u16()?;
        let mut entries = Vec::with_capacity(usize::min(count as usize, 64));
        for _ in 0..count {
            entries.push(UnicastMasterEntry::deserialize(reader).map_err(|err| match err {
                MngError::BufferTooShort => MngError::SizeMismatch,
                other => other,
            })?);
        }
        Ok(Self { entries })
    }
}

/// PORT_HWCLOCK_NP: the PHC backing a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortHwclockNp {
    pub port_identity: PortIdentity,
    pub phc_index: i32,
    pub flags: u8,
}

impl WireFormat for PortHwclockNp {
    fn wire_size(&self) -> usize {
        16
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.port_identity.serialize(writer)?;
        writer.put_i32(self.phc_index)?;
        writer.put_u8(self.flags)?;
        writer.pad(1)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        let value = Self {
            port_identity: PortIdentity::deserialize(reader)?,
            phc_index: reader.get_i32()?,
            flags: reader.get_u8()?,
        };
        reader.skip(1)?;
        Ok(value)
    }
}

/// POWER_PROFILE_SETTINGS_NP: IEEE C37.238 power profile parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerProfileSettingsNp {
    /// C37.238 profile edition: 0 none, 1 for 2011, 2 for 2017.
    pub version: u16,
    pub grandmaster_id: u16,
    pub grandmaster_time_inaccuracy: u32,
    pub network_time_inaccuracy: u32,
    pub total_time_inaccuracy: u32,
}

impl WireFormat for PowerProfileSettingsNp {
    fn wire_size(&self) -> usize {
        16
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_u16(self.version)?;
        writer.put_u16(self.grandmaster_id)?;
        writer.put_u32(self.grandmaster_time_inaccuracy)?;
        writer.put_u32(self.network_time_inaccuracy)?;
        writer.put_u32(self.total_time_inaccuracy)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            version: reader.get_u16()?,
            grandmaster_id: reader.get_u16()?,
            grandmaster_time_inaccuracy: reader.get_u32()?,
            network_time_inaccuracy: reader.get_u32()?,
            total_time_inaccuracy: reader.get_u32()?,
        })
    }
}

/// CMLDS_INFO_NP: common mean link delay service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CmldsInfoNp {
    pub mean_link_delay: TimeInterval,
    pub scaled_neighbor_rate_ratio: i32,
    pub as_capable: u32,
}

impl WireFormat for CmldsInfoNp {
    fn wire_size(&self) -> usize {
        16
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.mean_link_delay.serialize(writer)?;
        writer.put_i32(self.scaled_neighbor_rate_ratio)?;
        writer.put_u32(self.as_capable)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            mean_link_delay: TimeInterval::deserialize(reader)?,
            scaled_neighbor_rate_ratio: reader.get_i32()?,
            as_capable: reader.get_u32()?,
        })
    }
}

/// PORT_CORRECTIONS_NP: per-port latency compensation in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortCorrectionsNp {
    pub egress_latency: i64,
    pub ingress_latency: i64,
    pub delay_asymmetry: i64,
}

impl WireFormat for PortCorrectionsNp {
    fn wire_size(&self) -> usize {
        24
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        writer.put_i64(self.egress_latency)?;
        writer.put_i64(self.ingress_latency)?;
        writer.put_i64(self.delay_asymmetry)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            egress_latency: reader.get_i64()?,
            ingress_latency: reader.get_i64()?,
            delay_asymmetry: reader.get_i64()?,
        })
    }
}

/// EXTERNAL_GRANDMASTER_PROPERTIES_NP: grandmaster identity override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExternalGrandmasterPropertiesNp {
    pub gm_identity: ClockIdentity,
    pub steps_removed: u16,
}

impl WireFormat for ExternalGrandmasterPropertiesNp {
    fn wire_size(&self) -> usize {
        10
    }

    fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
        self.gm_identity.serialize(writer)?;
        writer.put_u16(self.steps_removed)
    }

    fn deserialize(reader: &mut WireReader<'_>) -> Result<Self, MngError> {
        Ok(Self {
            gm_identity: ClockIdentity::deserialize(reader)?,
            steps_removed: reader.get_u16()?,
        })
    }
}
