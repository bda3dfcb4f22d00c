//! Callback-style routing of parsed payloads and population of payloads
//! to send.
//!
//! Both traits provide one default method per management id. A method
//! that is not overridden falls through to the "no handler" behavior, so
//! implementors only write the ids they care about.

use crate::datastructures::messages::ActionField;
use crate::datastructures::MngError;
use crate::management::id::ManagementId;
use crate::management::payload::*;
use crate::message::Message;

macro_rules! dispatch_handlers {
    ($($method:ident => $variant:ident($payload:ident),)*) => {
        /// Typed callbacks for every payload a [`Message`] can parse.
        ///
        /// Override the methods for the ids you handle;
        /// [`call_handler`](Self::call_handler) routes a parsed message to
        /// the right one and everything else lands in
        /// [`no_tlv_callback`](Self::no_tlv_callback).
        pub trait MessageDispatcher {
            $(
                fn $method(&mut self, message: &Message, tlv: &$payload, id_name: &str) {
                    let _ = tlv;
                    self.no_tlv_callback(message, id_name);
                }
            )*

            /// The parsed message holds no payload (an acknowledge, an
            /// empty id, or nothing parsed yet).
            fn no_tlv(&mut self, message: &Message) {
                let _ = message;
            }

            /// A payload arrived whose handler is not overridden.
            fn no_tlv_callback(&mut self, message: &Message, id_name: &str) {
                let _ = (message, id_name);
            }

            /// Routes the last parsed payload of `message` to its handler.
            fn call_handler(&mut self, message: &Message) {
                let Some(data) = message.data() else {
                    self.no_tlv(message);
                    return;
                };
                let id_name = data.id().name();
                match data {
                    $(ManagementTlv::$variant(tlv) => self.$method(message, tlv, id_name),)*
                }
            }
        }
    };
}

dispatch_handlers! {
    clock_description => ClockDescription(ClockDescription),
    user_description => UserDescription(UserDescription),
    initialize => Initialize(Initialize),
    fault_log => FaultLog(FaultLog),
    default_data_set => DefaultDataSet(DefaultDataSet),
    current_data_set => CurrentDataSet(CurrentDataSet),
    parent_data_set => ParentDataSet(ParentDataSet),
    time_properties_data_set => TimePropertiesDataSet(TimePropertiesDataSet),
    port_data_set => PortDataSet(PortDataSet),
    priority1 => Priority1(Priority1),
    priority2 => Priority2(Priority2),
    domain => Domain(Domain),
    slave_only => SlaveOnly(SlaveOnly),
    log_announce_interval => LogAnnounceInterval(LogAnnounceInterval),
    announce_receipt_timeout => AnnounceReceiptTimeout(AnnounceReceiptTimeout),
    log_sync_interval => LogSyncInterval(LogSyncInterval),
    version_number => VersionNumber(VersionNumber),
    time => Time(Time),
    clock_accuracy => ClockAccuracy(ClockAccuracySetting),
    utc_properties => UtcProperties(UtcProperties),
    traceability_properties => TraceabilityProperties(TraceabilityProperties),
    timescale_properties => TimescaleProperties(TimescaleProperties),
    unicast_negotiation_enable => UnicastNegotiationEnable(UnicastNegotiationEnable),
    path_trace_list => PathTraceList(PathTraceList),
    path_trace_enable => PathTraceEnable(PathTraceEnable),
    grandmaster_cluster_table => GrandmasterClusterTable(GrandmasterClusterTable),
    unicast_master_table => UnicastMasterTable(UnicastMasterTable),
    unicast_master_max_table_size => UnicastMasterMaxTableSize(UnicastMasterMaxTableSize),
    acceptable_master_table => AcceptableMasterTable(AcceptableMasterTable),
    acceptable_master_table_enabled => AcceptableMasterTableEnabled(AcceptableMasterTableEnabled),
    acceptable_master_max_table_size => AcceptableMasterMaxTableSize(AcceptableMasterMaxTableSize),
    alternate_master => AlternateMaster(AlternateMaster),
    alternate_time_offset_enable => AlternateTimeOffsetEnable(AlternateTimeOffsetEnable),
    alternate_time_offset_name => AlternateTimeOffsetName(AlternateTimeOffsetName),
    alternate_time_offset_max_key => AlternateTimeOffsetMaxKey(AlternateTimeOffsetMaxKey),
    alternate_time_offset_properties => AlternateTimeOffsetProperties(AlternateTimeOffsetProperties),
    external_port_configuration_enabled => ExternalPortConfigurationEnabled(ExternalPortConfigurationEnabled),
    master_only => MasterOnly(MasterOnly),
    holdover_upgrade_enable => HoldoverUpgradeEnable(HoldoverUpgradeEnable),
    ext_port_config_port_data_set => ExtPortConfigPortDataSet(ExtPortConfigPortDataSet),
    transparent_clock_default_data_set => TransparentClockDefaultDataSet(TransparentClockDefaultDataSet),
    transparent_clock_port_data_set => TransparentClockPortDataSet(TransparentClockPortDataSet),
    primary_domain => PrimaryDomain(PrimaryDomain),
    delay_mechanism => DelayMechanism(DelayMechanism),
    log_min_pdelay_req_interval => LogMinPdelayReqInterval(LogMinPdelayReqInterval),
    time_status_np => TimeStatusNp(TimeStatusNp),
    grandmaster_settings_np => GrandmasterSettingsNp(GrandmasterSettingsNp),
    port_data_set_np => PortDataSetNp(PortDataSetNp),
    subscribe_events_np => SubscribeEventsNp(SubscribeEventsNp),
    port_properties_np => PortPropertiesNp(PortPropertiesNp),
    port_stats_np => PortStatsNp(PortStatsNp),
    synchronization_uncertain_np => SynchronizationUncertainNp(SynchronizationUncertainNp),
    port_service_stats_np => PortServiceStatsNp(PortServiceStatsNp),
    unicast_master_table_np => UnicastMasterTableNp(UnicastMasterTableNp),
    port_hwclock_np => PortHwclockNp(PortHwclockNp),
    power_profile_settings_np => PowerProfileSettingsNp(PowerProfileSettingsNp),
    cmlds_info_np => CmldsInfoNp(CmldsInfoNp),
    port_corrections_np => PortCorrectionsNp(PortCorrectionsNp),
    external_grandmaster_properties_np => ExternalGrandmasterPropertiesNp(ExternalGrandmasterPropertiesNp),
}

macro_rules! build_handlers {
    ($($method:ident => $variant:ident($payload:ident),)*) => {
        /// Payload factories for requests built through
        /// [`build_tlv`](Self::build_tlv).
        ///
        /// Override the methods for the ids you can populate; a method
        /// returning `None` marks the id as not provided.
        pub trait TlvBuilder {
            $(
                fn $method(&mut self, message: &Message) -> Option<$payload> {
                    let _ = message;
                    None
                }
            )*

            /// Prepares `message` for `action` on `id`: GETs and empty ids
            /// go straight to [`Message::set_action`], everything else asks
            /// the matching factory method for a payload.
            fn build_tlv(
                &mut self,
                message: &mut Message,
                action: ActionField,
                id: ManagementId,
            ) -> Result<(), MngError> {
                if action == ActionField::Get || id.is_empty_id() {
                    return message.set_action(action, id);
                }
                let data = match id {
                    $(ManagementId::$variant => self.$method(message).map(ManagementTlv::$variant),)*
                    _ => None,
                };
                match data {
                    Some(data) => message.set_action_data(action, data),
                    None => Err(MngError::Unsupported),
                }
            }
        }
    };
}

build_handlers! {
    user_description => UserDescription(UserDescription),
    initialize => Initialize(Initialize),
    priority1 => Priority1(Priority1),
    priority2 => Priority2(Priority2),
    domain => Domain(Domain),
    slave_only => SlaveOnly(SlaveOnly),
    log_announce_interval => LogAnnounceInterval(LogAnnounceInterval),
    announce_receipt_timeout => AnnounceReceiptTimeout(AnnounceReceiptTimeout),
    log_sync_interval => LogSyncInterval(LogSyncInterval),
    version_number => VersionNumber(VersionNumber),
    time => Time(Time),
    clock_accuracy => ClockAccuracy(ClockAccuracySetting),
    utc_properties => UtcProperties(UtcProperties),
    traceability_properties => TraceabilityProperties(TraceabilityProperties),
    timescale_properties => TimescaleProperties(TimescaleProperties),
    unicast_negotiation_enable => UnicastNegotiationEnable(UnicastNegotiationEnable),
    path_trace_enable => PathTraceEnable(PathTraceEnable),
    grandmaster_cluster_table => GrandmasterClusterTable(GrandmasterClusterTable),
    unicast_master_table => UnicastMasterTable(UnicastMasterTable),
    acceptable_master_table => AcceptableMasterTable(AcceptableMasterTable),
    acceptable_master_table_enabled => AcceptableMasterTableEnabled(AcceptableMasterTableEnabled),
    alternate_master => AlternateMaster(AlternateMaster),
    alternate_time_offset_enable => AlternateTimeOffsetEnable(AlternateTimeOffsetEnable),
    alternate_time_offset_name => AlternateTimeOffsetName(AlternateTimeOffsetName),
    alternate_time_offset_properties => AlternateTimeOffsetProperties(AlternateTimeOffsetProperties),
    external_port_configuration_enabled => ExternalPortConfigurationEnabled(ExternalPortConfigurationEnabled),
    master_only => MasterOnly(MasterOnly),
    holdover_upgrade_enable => HoldoverUpgradeEnable(HoldoverUpgradeEnable),
    ext_port_config_port_data_set => ExtPortConfigPortDataSet(ExtPortConfigPortDataSet),
    primary_domain => PrimaryDomain(PrimaryDomain),
    delay_mechanism => DelayMechanism(DelayMechanism),
    log_min_pdelay_req_interval => LogMinPdelayReqInterval(LogMinPdelayReqInterval),
    grandmaster_settings_np => GrandmasterSettingsNp(GrandmasterSettingsNp),
    port_data_set_np => PortDataSetNp(PortDataSetNp),
    subscribe_events_np => SubscribeEventsNp(SubscribeEventsNp),
    synchronization_uncertain_np => SynchronizationUncertainNp(SynchronizationUncertainNp),
    power_profile_settings_np => PowerProfileSettingsNp(PowerProfileSettingsNp),
    port_corrections_np => PortCorrectionsNp(PortCorrectionsNp),
    external_grandmaster_properties_np => ExternalGrandmasterPropertiesNp(ExternalGrandmasterPropertiesNp),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        priority1: Option<u8>,
        unhandled: Vec<String>,
        empty: usize,
    }

    impl MessageDispatcher for Recorder {
        fn priority1(&mut self, _message: &Message, tlv: &Priority1, _id_name: &str) {
            self.priority1 = Some(tlv.priority1);
        }

        fn no_tlv(&mut self, _message: &Message) {
            self.empty += 1;
        }

        fn no_tlv_callback(&mut self, _message: &Message, id_name: &str) {
            self.unhandled.push(id_name.to_owned());
        }
    }

    fn parsed_message(code: u16, data: &[u8]) -> Message {
        let padded = data.len() + (data.len() & 1);
        let total = 54 + padded;
        let mut frame = vec![0u8; total];
        frame[0] = 0x0d;
        frame[1] = 0x02;
        frame[2..4].copy_from_slice(&(total as u16).to_be_bytes());
        frame[32] = 0x04;
        frame[46] = 2; // RESPONSE
        frame[48..50].copy_from_slice(&[0x00, 0x01]);
        frame[50..52].copy_from_slice(&((2 + padded) as u16).to_be_bytes());
        frame[52..54].copy_from_slice(&code.to_be_bytes());
        frame[54..54 + data.len()].copy_from_slice(data);

        let mut message = Message::new();
        message.parse(&frame).unwrap();
        message
    }

    #[test]
    fn routes_to_overridden_handler() {
        let message = parsed_message(0x2005, &[0x07, 0x00]);
        let mut recorder = Recorder::default();
        recorder.call_handler(&message);
        assert_eq!(recorder.priority1, Some(7));
        assert!(recorder.unhandled.is_empty());
    }

    #[test]
    fn unoverridden_handler_falls_through() {
        let message = parsed_message(0x2006, &[0x07, 0x00]);
        let mut recorder = Recorder::default();
        recorder.call_handler(&message);
        assert_eq!(recorder.priority1, None);
        assert_eq!(recorder.unhandled, vec!["PRIORITY2".to_owned()]);
    }

    #[test]
    fn no_payload_goes_to_no_tlv() {
        let message = Message::new();
        let mut recorder = Recorder::default();
        recorder.call_handler(&message);
        assert_eq!(recorder.empty, 1);
    }

    struct Populator;

    impl TlvBuilder for Populator {
        fn priority1(&mut self, _message: &Message) -> Option<Priority1> {
            Some(Priority1 { priority1: 99 })
        }
    }

    #[test]
    fn builder_populates_payload() {
        let mut message = Message::new();
        Populator
            .build_tlv(&mut message, ActionField::Set, ManagementId::Priority1)
            .unwrap();
        message.build(1).unwrap();
        assert_eq!(message.send_buf()[54], 99);
    }

    #[test]
    fn builder_get_needs_no_payload() {
        let mut message = Message::new();
        Populator
            .build_tlv(&mut message, ActionField::Get, ManagementId::DefaultDataSet)
            .unwrap();
        assert_eq!(message.action(), ActionField::Get);
    }

    #[test]
    fn builder_without_factory_fails() {
        let mut message = Message::new();
        assert_eq!(
            Populator.build_tlv(&mut message, ActionField::Set, ManagementId::Priority2),
            Err(MngError::Unsupported)
        );
    }
}
