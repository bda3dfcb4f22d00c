//! The management id registry: wire codes, scopes, permitted actions and
//! declared dataField sizes.

use core::str::FromStr;

use bitflags::bitflags;

use crate::datastructures::messages::ActionField;
use crate::datastructures::MngError;

bitflags! {
    /// Actions a management id accepts in a request. Bit positions follow
    /// the wire action values, so `1 << action` tests membership.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ActionMask: u8 {
        const GET = 1 << 0;
        const SET = 1 << 1;
        const COMMAND = 1 << 3;
    }
}

/// Whether an id addresses the whole clock or a single port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Clock,
    Port,
}

/// Declared dataField size of a management id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSize {
    /// The dataField always occupies exactly this many bytes (even, with
    /// reserved bytes counted).
    Fixed(usize),
    /// Variable; the size is computed from the payload contents.
    Computed,
    /// The id exists in the standard but this codec cannot marshal it.
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagementIdEntry {
    pub code: u16,
    pub scope: Scope,
    pub allowed: ActionMask,
    pub size: DataSize,
}

/// All management ids this codec understands. Ids `0xC000..` are the
/// linuxptp implementation-specific set and are gated behind the
/// `implementation_specific` message parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ManagementId {
    #[default]
    NullPtpManagement,
    ClockDescription,
    UserDescription,
    SaveInNonVolatileStorage,
    ResetNonVolatileStorage,
    Initialize,
    FaultLog,
    FaultLogReset,
    DefaultDataSet,
    CurrentDataSet,
    ParentDataSet,
    TimePropertiesDataSet,
    PortDataSet,
    Priority1,
    Priority2,
    Domain,
    SlaveOnly,
    LogAnnounceInterval,
    AnnounceReceiptTimeout,
    LogSyncInterval,
    VersionNumber,
    EnablePort,
    DisablePort,
    Time,
    ClockAccuracy,
    UtcProperties,
    TraceabilityProperties,
    TimescaleProperties,
    UnicastNegotiationEnable,
    PathTraceList,
    PathTraceEnable,
    GrandmasterClusterTable,
    UnicastMasterTable,
    UnicastMasterMaxTableSize,
    AcceptableMasterTable,
    AcceptableMasterTableEnabled,
    AcceptableMasterMaxTableSize,
    AlternateMaster,
    AlternateTimeOffsetEnable,
    AlternateTimeOffsetName,
    AlternateTimeOffsetMaxKey,
    AlternateTimeOffsetProperties,
    ExternalPortConfigurationEnabled,
    MasterOnly,
    HoldoverUpgradeEnable,
    ExtPortConfigPortDataSet,
    TransparentClockDefaultDataSet,
    TransparentClockPortDataSet,
    PrimaryDomain,
    DelayMechanism,
    LogMinPdelayReqInterval,
    TimeStatusNp,
    GrandmasterSettingsNp,
    PortDataSetNp,
    SubscribeEventsNp,
    PortPropertiesNp,
    PortStatsNp,
    SynchronizationUncertainNp,
    PortServiceStatsNp,
    UnicastMasterTableNp,
    PortHwclockNp,
    PowerProfileSettingsNp,
    CmldsInfoNp,
    PortCorrectionsNp,
    ExternalGrandmasterPropertiesNp,
}

const G: ActionMask = ActionMask::GET;
const GS: ActionMask = ActionMask::GET.union(ActionMask::SET);
const C: ActionMask = ActionMask::COMMAND;
const GSC: ActionMask = GS.union(ActionMask::COMMAND);

const fn e(code: u16, scope: Scope, allowed: ActionMask, size: DataSize) -> ManagementIdEntry {
    ManagementIdEntry {
        code,
        scope,
        allowed,
        size,
    }
}

impl ManagementId {
    pub const ALL: [ManagementId; 65] = [
        Self::NullPtpManagement,
        Self::ClockDescription,
        Self::UserDescription,
        Self::SaveInNonVolatileStorage,
        Self::ResetNonVolatileStorage,
        Self::Initialize,
        Self::FaultLog,
        Self::FaultLogReset,
        Self::DefaultDataSet,
        Self::CurrentDataSet,
        Self::ParentDataSet,
        Self::TimePropertiesDataSet,
        Self::PortDataSet,
        Self::Priority1,
        Self::Priority2,
        Self::Domain,
        Self::SlaveOnly,
        Self::LogAnnounceInterval,
        Self::AnnounceReceiptTimeout,
        Self::LogSyncInterval,
        Self::VersionNumber,
        Self::EnablePort,
        Self::DisablePort,
        Self::Time,
        Self::ClockAccuracy,
        Self::UtcProperties,
        Self::TraceabilityProperties,
        Self::TimescaleProperties,
        Self::UnicastNegotiationEnable,
        Self::PathTraceList,
        Self::PathTraceEnable,
        Self::GrandmasterClusterTable,
        Self::UnicastMasterTable,
        Self::UnicastMasterMaxTableSize,
        Self::AcceptableMasterTable,
        Self::AcceptableMasterTableEnabled,
        Self::AcceptableMasterMaxTableSize,
        Self::AlternateMaster,
        Self::AlternateTimeOffsetEnable,
        Self::AlternateTimeOffsetName,
        Self::AlternateTimeOffsetMaxKey,
        Self::AlternateTimeOffsetProperties,
        Self::ExternalPortConfigurationEnabled,
        Self::MasterOnly,
        Self::HoldoverUpgradeEnable,
        Self::ExtPortConfigPortDataSet,
        Self::TransparentClockDefaultDataSet,
        Self::TransparentClockPortDataSet,
        Self::PrimaryDomain,
        Self::DelayMechanism,
        Self::LogMinPdelayReqInterval,
        Self::TimeStatusNp,
        Self::GrandmasterSettingsNp,
        Self::PortDataSetNp,
        Self::SubscribeEventsNp,
        Self::PortPropertiesNp,
        Self::PortStatsNp,
        Self::SynchronizationUncertainNp,
        Self::PortServiceStatsNp,
        Self::UnicastMasterTableNp,
        Self::PortHwclockNp,
        Self::PowerProfileSettingsNp,
        Self::CmldsInfoNp,
        Self::PortCorrectionsNp,
        Self::ExternalGrandmasterPropertiesNp,
    ];

    /// The registry row for this id.
    pub const fn entry(self) -> ManagementIdEntry {
        use DataSize::{Computed, Fixed};
        use Scope::{All, Clock, Port};
        match self {
            Self::NullPtpManagement => e(0x0000, All, GSC, Fixed(0)),
            Self::ClockDescription => e(0x0001, Port, G, Computed),
            Self::UserDescription => e(0x0002, Clock, GS, Computed),
            Self::SaveInNonVolatileStorage => e(0x0003, Clock, C, Fixed(0)),
            Self::ResetNonVolatileStorage => e(0x0004, Clock, C, Fixed(0)),
            Self::Initialize => e(0x0005, Clock, C, Fixed(2)),
            Self::FaultLog => e(0x0006, Clock, G, Computed),
            Self::FaultLogReset => e(0x0007, Clock, C, Fixed(0)),
            Self::DefaultDataSet => e(0x2000, Clock, G, Fixed(20)),
            Self::CurrentDataSet => e(0x2001, Clock, G, Fixed(18)),
            Self::ParentDataSet => e(0x2002, Clock, G, Fixed(32)),
            Self::TimePropertiesDataSet => e(0x2003, Clock, G, Fixed(4)),
            Self::PortDataSet => e(0x2004, Port, G, Fixed(26)),
            Self::Priority1 => e(0x2005, Clock, GS, Fixed(2)),
            Self::Priority2 => e(0x2006, Clock, GS, Fixed(2)),
            Self::Domain => e(0x2007, Clock, GS, Fixed(2)),
            Self::SlaveOnly => e(0x2008, Clock, GS, Fixed(2)),
            Self::LogAnnounceInterval => e(0x2009, Port, GS, Fixed(2)),
            Self::AnnounceReceiptTimeout => e(0x200a, Port, GS, Fixed(2)),
            Self::LogSyncInterval => e(0x200b, Port, GS, Fixed(2)),
            Self::VersionNumber => e(0x200c, Port, GS, Fixed(2)),
            Self::EnablePort => e(0x200d, Port, C, Fixed(0)),
            Self::DisablePort => e(0x200e, Port, C, Fixed(0)),
            Self::Time => e(0x200f, Clock, GS, Fixed(10)),
            Self::ClockAccuracy => e(0x2010, Clock, GS, Fixed(2)),
            Self::UtcProperties => e(0x2011, Clock, GS, Fixed(4)),
            Self::TraceabilityProperties => e(0x2012, Clock, GS, Fixed(2)),
            Self::TimescaleProperties => e(0x2013, Clock, GS, Fixed(2)),
            Self::UnicastNegotiationEnable => e(0x2014, Port, GS, Fixed(2)),
            Self::PathTraceList => e(0x2015, Clock, G, Computed),
            Self::PathTraceEnable => e(0x2016, Clock, GS, Fixed(2)),
            Self::GrandmasterClusterTable => e(0x2017, Clock, GS, Computed),
            Self::UnicastMasterTable => e(0x2018, Port, GS, Computed),
            Self::UnicastMasterMaxTableSize => e(0x2019, Port, G, Fixed(2)),
            Self::AcceptableMasterTable => e(0x201a, Clock, GS, Computed),
            Self::AcceptableMasterTableEnabled => e(0x201b, Port, GS, Fixed(2)),
            Self::AcceptableMasterMaxTableSize => e(0x201c, Clock, G, Fixed(2)),
            Self::AlternateMaster => e(0x201d, Port, GS, Fixed(4)),
            Self::AlternateTimeOffsetEnable => e(0x201e, Clock, GS, Fixed(2)),
            Self::AlternateTimeOffsetName => e(0x201f, Clock, GS, Computed),
            Self::AlternateTimeOffsetMaxKey => e(0x2020, Clock, G, Fixed(2)),
            Self::AlternateTimeOffsetProperties => e(0x2021, Clock, GS, Fixed(16)),
            Self::ExternalPortConfigurationEnabled => e(0x3000, Clock, GS, Fixed(2)),
            Self::MasterOnly => e(0x3001, Port, GS, Fixed(2)),
            Self::HoldoverUpgradeEnable => e(0x3002, Clock, GS, Fixed(2)),
            Self::ExtPortConfigPortDataSet => e(0x3003, Port, GS, Fixed(2)),
            Self::TransparentClockDefaultDataSet => e(0x4000, Clock, G, Fixed(12)),
            Self::TransparentClockPortDataSet => e(0x4001, Port, G, Fixed(20)),
            Self::PrimaryDomain => e(0x4002, Clock, GS, Fixed(2)),
            Self::DelayMechanism => e(0x6000, Port, GS, Fixed(2)),
            Self::LogMinPdelayReqInterval => e(0x6001, Port, GS, Fixed(2)),
            Self::TimeStatusNp => e(0xc000, Clock, G, Fixed(50)),
            Self::GrandmasterSettingsNp => e(0xc001, Clock, GS, Fixed(8)),
            Self::PortDataSetNp => e(0xc002, Port, GS, Fixed(8)),
            Self::SubscribeEventsNp => e(0xc003, Clock, GS, Fixed(66)),
            Self::PortPropertiesNp => e(0xc004, Port, G, Computed),
            Self::PortStatsNp => e(0xc005, Port, G, Fixed(266)),
            Self::SynchronizationUncertainNp => e(0xc006, Clock, GS, Fixed(2)),
            Self::PortServiceStatsNp => e(0xc007, Port, G, Fixed(90)),
            Self::UnicastMasterTableNp => e(0xc008, Port, G, Computed),
            Self::PortHwclockNp => e(0xc009, Port, G, Fixed(16)),
            Self::PowerProfileSettingsNp => e(0xc00a, Port, GS, Fixed(16)),
            Self::CmldsInfoNp => e(0xc00b, Port, G, Fixed(16)),
            Self::PortCorrectionsNp => e(0xc00c, Port, GS, Fixed(24)),
            Self::ExternalGrandmasterPropertiesNp => e(0xc00d, Clock, GS, Fixed(10)),
        }
    }

    pub const fn code(self) -> u16 {
        self.entry().code
    }

    /// The reverse map of [`code`](Self::code).
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.code() == code)
    }

    /// Ids with no dataField at all (commands and the null id).
    pub fn is_empty_id(self) -> bool {
        matches!(self.entry().size, DataSize::Fixed(0))
    }

    /// Ids from the linuxptp implementation-specific range.
    pub const fn is_implementation_specific(self) -> bool {
        self.entry().code >= 0xc000
    }

    /// Whether `action` may be used with this id. RESPONSE follows from
    /// GET or SET support, ACKNOWLEDGE from COMMAND support.
    pub fn allowed_action(self, action: ActionField) -> bool {
        let allowed = self.entry().allowed;
        match action {
            ActionField::Get => allowed.contains(ActionMask::GET),
            ActionField::Set => allowed.contains(ActionMask::SET),
            ActionField::Command => allowed.contains(ActionMask::COMMAND),
            ActionField::Response => allowed.intersects(GS),
            ActionField::Acknowledge => allowed.contains(ActionMask::COMMAND),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NullPtpManagement => "NULL_PTP_MANAGEMENT",
            Self::ClockDescription => "CLOCK_DESCRIPTION",
            Self::UserDescription => "USER_DESCRIPTION",
            Self::SaveInNonVolatileStorage => "SAVE_IN_NON_VOLATILE_STORAGE",
            Self::ResetNonVolatileStorage => "RESET_NON_VOLATILE_STORAGE",
            Self::Initialize => "INITIALIZE",
            Self::FaultLog => "FAULT_LOG",
            Self::FaultLogReset => "FAULT_LOG_RESET",
            Self::DefaultDataSet => "DEFAULT_DATA_SET",
            Self::CurrentDataSet => "CURRENT_DATA_SET",
            Self::ParentDataSet => "PARENT_DATA_SET",
            Self::TimePropertiesDataSet => "TIME_PROPERTIES_DATA_SET",
            Self::PortDataSet => "PORT_DATA_SET",
            Self::Priority1 => "PRIORITY1",
            Self::Priority2 => "PRIORITY2",
            Self::Domain => "DOMAIN",
            Self::SlaveOnly => "SLAVE_ONLY",
            Self::LogAnnounceInterval => "LOG_ANNOUNCE_INTERVAL",
            Self::AnnounceReceiptTimeout => "ANNOUNCE_RECEIPT_TIMEOUT",
            Self::LogSyncInterval => "LOG_SYNC_INTERVAL",
            Self::VersionNumber => "VERSION_NUMBER",
            Self::EnablePort => "ENABLE_PORT",
            Self::DisablePort => "DISABLE_PORT",
            Self::Time => "TIME",
            Self::ClockAccuracy => "CLOCK_ACCURACY",
            Self::UtcProperties => "UTC_PROPERTIES",
            Self::TraceabilityProperties => "TRACEABILITY_PROPERTIES",
            Self::TimescaleProperties => "TIMESCALE_PROPERTIES",
            Self::UnicastNegotiationEnable => "UNICAST_NEGOTIATION_ENABLE",
            Self::PathTraceList => "PATH_TRACE_LIST",
            Self::PathTraceEnable => "PATH_TRACE_ENABLE",
            Self::GrandmasterClusterTable => "GRANDMASTER_CLUSTER_TABLE",
            Self::UnicastMasterTable => "UNICAST_MASTER_TABLE",
            Self::UnicastMasterMaxTableSize => "UNICAST_MASTER_MAX_TABLE_SIZE",
            Self::AcceptableMasterTable => "ACCEPTABLE_MASTER_TABLE",
            Self::AcceptableMasterTableEnabled => "ACCEPTABLE_MASTER_TABLE_ENABLED",
            Self::AcceptableMasterMaxTableSize => "ACCEPTABLE_MASTER_MAX_TABLE_SIZE",
            Self::AlternateMaster => "ALTERNATE_MASTER",
            Self::AlternateTimeOffsetEnable => "ALTERNATE_TIME_OFFSET_ENABLE",
            Self::AlternateTimeOffsetName => "ALTERNATE_TIME_OFFSET_NAME",
            Self::AlternateTimeOffsetMaxKey => "ALTERNATE_TIME_OFFSET_MAX_KEY",
            Self::AlternateTimeOffsetProperties => "ALTERNATE_TIME_OFFSET_PROPERTIES",
            Self::ExternalPortConfigurationEnabled => "EXTERNAL_PORT_CONFIGURATION_ENABLED",
            Self::MasterOnly => "MASTER_ONLY",
            Self::HoldoverUpgradeEnable => "HOLDOVER_UPGRADE_ENABLE",
            Self::ExtPortConfigPortDataSet => "EXT_PORT_CONFIG_PORT_DATA_SET",
            Self::TransparentClockDefaultDataSet => "TRANSPARENT_CLOCK_DEFAULT_DATA_SET",
            Self::TransparentClockPortDataSet => "TRANSPARENT_CLOCK_PORT_DATA_SET",
            Self::PrimaryDomain => "PRIMARY_DOMAIN",
            Self::DelayMechanism => "DELAY_MECHANISM",
            Self::LogMinPdelayReqInterval => "LOG_MIN_PDELAY_REQ_INTERVAL",
            Self::TimeStatusNp => "TIME_STATUS_NP",
            Self::GrandmasterSettingsNp => "GRANDMASTER_SETTINGS_NP",
            Self::PortDataSetNp => "PORT_DATA_SET_NP",
            Self::SubscribeEventsNp => "SUBSCRIBE_EVENTS_NP",
            Self::PortPropertiesNp => "PORT_PROPERTIES_NP",
            Self::PortStatsNp => "PORT_STATS_NP",
            Self::SynchronizationUncertainNp => "SYNCHRONIZATION_UNCERTAIN_NP",
            Self::PortServiceStatsNp => "PORT_SERVICE_STATS_NP",
            Self::UnicastMasterTableNp => "UNICAST_MASTER_TABLE_NP",
            Self::PortHwclockNp => "PORT_HWCLOCK_NP",
            Self::PowerProfileSettingsNp => "POWER_PROFILE_SETTINGS_NP",
            Self::CmldsInfoNp => "CMLDS_INFO_NP",
            Self::PortCorrectionsNp => "PORT_CORRECTIONS_NP",
            Self::ExternalGrandmasterPropertiesNp => "EXTERNAL_GRANDMASTER_PROPERTIES_NP",
        }
    }
}

impl core::fmt::Display for ManagementId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ManagementId {
    type Err = MngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or(MngError::BadValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_round_trip() {
        for id in ManagementId::ALL {
            assert_eq!(ManagementId::from_code(id.code()), Some(id));
            assert_eq!(id.name().parse::<ManagementId>().unwrap(), id);
        }
        assert_eq!(ManagementId::from_code(0x1234), None);
    }

    #[test]
    fn fixed_sizes_are_even() {
        for id in ManagementId::ALL {
            if let DataSize::Fixed(n) = id.entry().size {
                assert_eq!(n % 2, 0, "{} has odd declared size {n}", id.name());
            }
        }
    }

    #[test]
    fn derived_actions() {
        // RESPONSE follows GET support, ACKNOWLEDGE follows COMMAND.
        assert!(ManagementId::PortDataSet.allowed_action(ActionField::Response));
        assert!(!ManagementId::PortDataSet.allowed_action(ActionField::Set));
        assert!(!ManagementId::PortDataSet.allowed_action(ActionField::Acknowledge));
        assert!(ManagementId::EnablePort.allowed_action(ActionField::Acknowledge));
        assert!(!ManagementId::EnablePort.allowed_action(ActionField::Response));
        assert!(!ManagementId::EnablePort.allowed_action(ActionField::Get));
        assert!(ManagementId::Priority1.allowed_action(ActionField::Set));
    }

    #[test]
    fn empty_ids() {
        let empty: Vec<_> = ManagementId::ALL
            .into_iter()
            .filter(|id| id.is_empty_id())
            .collect();
        assert_eq!(
            empty,
            vec![
                ManagementId::NullPtpManagement,
                ManagementId::SaveInNonVolatileStorage,
                ManagementId::ResetNonVolatileStorage,
                ManagementId::FaultLogReset,
                ManagementId::EnablePort,
                ManagementId::DisablePort,
            ]
        );
    }

    #[test]
    fn implementation_specific_range() {
        assert!(ManagementId::TimeStatusNp.is_implementation_specific());
        assert!(!ManagementId::Priority1.is_implementation_specific());
    }
}
