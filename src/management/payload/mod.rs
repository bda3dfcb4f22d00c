//! One payload type per management id, unified in the [`ManagementTlv`]
//! sum type. The sum type carries the payload by value; matching on it
//! yields both the encoder and the decoder of every id.

mod clock;
mod datasets;
mod linuxptp;
mod settings;
mod tables;

pub use clock::*;
pub use datasets::*;
pub use linuxptp::*;
pub use settings::*;
pub use tables::*;

use super::id::ManagementId;
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};

/// Bits of the timePropertiesDS-style flag bytes, shared by several
/// payloads.
pub mod time_flags {
    pub const LI_61: u8 = 1 << 0;
    pub const LI_59: u8 = 1 << 1;
    pub const UTC_OFF_VALID: u8 = 1 << 2;
    pub const PTP_TIMESCALE: u8 = 1 << 3;
    pub const TIME_TRACEABLE: u8 = 1 << 4;
    pub const FREQ_TRACEABLE: u8 = 1 << 5;
}

macro_rules! management_tlvs {
    ($($variant:ident($payload:ident),)*) => {
        /// A typed management TLV dataField, tagged by its management id.
        ///
        /// Ids without a dataField (the null id and the pure commands)
        /// have no variant here; they travel as an empty TLV.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum ManagementTlv {
            $($variant($payload),)*
        }

        impl ManagementTlv {
            /// The management id this payload belongs to.
            pub fn id(&self) -> ManagementId {
                match self {
                    $(Self::$variant(_) => ManagementId::$variant,)*
                }
            }

            /// The unpadded dataField size of this payload.
            pub fn data_size(&self) -> usize {
                match self {
                    $(Self::$variant(payload) => payload.wire_size(),)*
                }
            }

            pub(crate) fn serialize(&self, writer: &mut WireWriter<'_>) -> Result<(), MngError> {
                match self {
                    $(Self::$variant(payload) => payload.serialize(writer),)*
                }
            }

            /// Decodes the dataField of `id`; `reader` must be bounded to
            /// the dataField. Empty ids have nothing to decode here.
            pub(crate) fn deserialize(
                id: ManagementId,
                reader: &mut WireReader<'_>,
            ) -> Result<Self, MngError> {
                match id {
                    $(ManagementId::$variant => {
                        Ok(Self::$variant($payload::deserialize(reader)?))
                    })*
                    _ => Err(MngError::Unsupported),
                }
            }
        }

        $(
            impl From<$payload> for ManagementTlv {
                fn from(payload: $payload) -> Self {
                    Self::$variant(payload)
                }
            }
        )*
    };
}

management_tlvs! {
    ClockDescription(ClockDescription),
    UserDescription(UserDescription),
    Initialize(Initialize),
    FaultLog(FaultLog),
    DefaultDataSet(DefaultDataSet),
    CurrentDataSet(CurrentDataSet),
    ParentDataSet(ParentDataSet),
    TimePropertiesDataSet(TimePropertiesDataSet),
    PortDataSet(PortDataSet),
    Priority1(Priority1),
    Priority2(Priority2),
    Domain(Domain),
    SlaveOnly(SlaveOnly),
    LogAnnounceInterval(LogAnnounceInterval),
    AnnounceReceiptTimeout(AnnounceReceiptTimeout),
    LogSyncInterval(LogSyncInterval),
    VersionNumber(VersionNumber),
    Time(Time),
    ClockAccuracy(ClockAccuracySetting),
    UtcProperties(UtcProperties),
    TraceabilityProperties(TraceabilityProperties),
    TimescaleProperties(TimescaleProperties),
    UnicastNegotiationEnable(UnicastNegotiationEnable),
    PathTraceList(PathTraceList),
    PathTraceEnable(PathTraceEnable),
    GrandmasterClusterTable(GrandmasterClusterTable),
    UnicastMasterTable(UnicastMasterTable),
    UnicastMasterMaxTableSize(UnicastMasterMaxTableSize),
    AcceptableMasterTable(AcceptableMasterTable),
    AcceptableMasterTableEnabled(AcceptableMasterTableEnabled),
    AcceptableMasterMaxTableSize(AcceptableMasterMaxTableSize),
    AlternateMaster(AlternateMaster),
    AlternateTimeOffsetEnable(AlternateTimeOffsetEnable),
    AlternateTimeOffsetName(AlternateTimeOffsetName),
    AlternateTimeOffsetMaxKey(AlternateTimeOffsetMaxKey),
    AlternateTimeOffsetProperties(AlternateTimeOffsetProperties),
    ExternalPortConfigurationEnabled(ExternalPortConfigurationEnabled),
    MasterOnly(MasterOnly),
    HoldoverUpgradeEnable(HoldoverUpgradeEnable),
    ExtPortConfigPortDataSet(ExtPortConfigPortDataSet),
    TransparentClockDefaultDataSet(TransparentClockDefaultDataSet),
    TransparentClockPortDataSet(TransparentClockPortDataSet),
    PrimaryDomain(PrimaryDomain),
    DelayMechanism(DelayMechanism),
    LogMinPdelayReqInterval(LogMinPdelayReqInterval),
    TimeStatusNp(TimeStatusNp),
    GrandmasterSettingsNp(GrandmasterSettingsNp),
    PortDataSetNp(PortDataSetNp),
    SubscribeEventsNp(SubscribeEventsNp),
    PortPropertiesNp(PortPropertiesNp),
    PortStatsNp(PortStatsNp),
    SynchronizationUncertainNp(SynchronizationUncertainNp),
    PortServiceStatsNp(PortServiceStatsNp),
    UnicastMasterTableNp(UnicastMasterTableNp),
    PortHwclockNp(PortHwclockNp),
    PowerProfileSettingsNp(PowerProfileSettingsNp),
    CmldsInfoNp(CmldsInfoNp),
    PortCorrectionsNp(PortCorrectionsNp),
    ExternalGrandmasterPropertiesNp(ExternalGrandmasterPropertiesNp),
}
