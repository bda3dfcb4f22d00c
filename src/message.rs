//! The reusable management message object: owns a send buffer, builds
//! request frames and parses received ones into typed payloads.

use getset::CopyGetters;

use crate::datastructures::common::{PortIdentity, PtpText};
use crate::datastructures::messages::{
    ActionField, Header, ManagementErrorId, ManagementErrorStatus, ManagementHeader, MessageType,
    HEADER_SIZE, MANAGEMENT_HEADER_SIZE, TLV_MANAGEMENT, TLV_MANAGEMENT_ERROR_STATUS,
};
use crate::datastructures::wire::{WireReader, WireWriter};
use crate::datastructures::{MngError, WireFormat};
use crate::management::id::{DataSize, ManagementId};
use crate::management::payload::ManagementTlv;

/// Parameters stamped into every frame a [`Message`] builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsgParams {
    /// The 4-bit transportSpecific / majorSdoId nibble.
    pub transport_specific: u8,
    pub domain_number: u8,
    pub boundary_hops: u8,
    pub is_unicast: bool,
    /// Permit the linuxptp implementation-specific ids (0xC000..).
    pub implementation_specific: bool,
    /// Target port of built requests.
    pub target: PortIdentity,
    /// Our own port identity, stamped as the source.
    pub self_id: PortIdentity,
}

impl Default for MsgParams {
    fn default() -> Self {
        Self {
            transport_specific: 0,
            domain_number: 0,
            boundary_hops: 1,
            is_unicast: false,
            implementation_specific: true,
            target: PortIdentity::all_ports(),
            self_id: PortIdentity::default(),
        }
    }
}

/// Minimum length of anything we are willing to inspect as a management
/// frame.
const MIN_FRAME_SIZE: usize = 44;

/// Header + management header + TLV header + managementId, without any
/// dataField bytes.
const BASE_SIZE: usize = HEADER_SIZE + MANAGEMENT_HEADER_SIZE + 4 + 2;

/// A management message.
///
/// One instance is cheap and meant to be reused across many build/parse
/// cycles. The send buffer is owned by the message and only grows;
/// [`send_buf`](Self::send_buf) borrows it until the next build. A parsed
/// payload is owned by the message and replaced by the next parse.
#[derive(Debug, Default, CopyGetters)]
pub struct Message {
    params: MsgParams,
    /// Id of the TLV last set for sending or last parsed.
    #[getset(get_copy = "pub")]
    tlv_id: ManagementId,
    /// The action of the request being built.
    #[getset(get_copy = "pub")]
    action: ActionField,
    /// The action field of the last parsed frame.
    #[getset(get_copy = "pub")]
    reply_action: Option<ActionField>,
    /// Length of the last successfully built frame, 0 after a failure.
    #[getset(get_copy = "pub")]
    msg_len: usize,
    /// Sequence id of the last parsed frame.
    #[getset(get_copy = "pub")]
    sequence: u16,
    /// Unicast flag of the last parsed frame.
    #[getset(get_copy = "pub")]
    is_unicast: bool,
    /// Source port identity of the last parsed frame.
    #[getset(get_copy = "pub")]
    peer: PortIdentity,
    /// Error id of the last parsed MANAGEMENT_ERROR_STATUS TLV.
    #[getset(get_copy = "pub")]
    error_id: Option<ManagementErrorId>,
    /// Outcome of the last build or parse.
    #[getset(get_copy = "pub")]
    last_error: Option<MngError>,
    data_send: Option<ManagementTlv>,
    data_get: Option<ManagementTlv>,
    send_buf: Vec<u8>,
    error_display: PtpText,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: MsgParams) -> Result<Self, MngError> {
        let mut message = Self::default();
        message.update_params(params)?;
        Ok(message)
    }

    pub fn params(&self) -> &MsgParams {
        &self.params
    }

    /// Replaces the parameter block. The transportSpecific value must fit
    /// its 4-bit field.
    pub fn update_params(&mut self, params: MsgParams) -> Result<(), MngError> {
        if params.transport_specific > 0x0f {
            return Err(MngError::BadValue);
        }
        self.params = params;
        Ok(())
    }

    /// Addresses subsequent requests to all ports of all clocks.
    pub fn set_all_ports(&mut self) {
        self.params.target = PortIdentity::all_ports();
    }

    pub fn is_all_ports(&self) -> bool {
        self.params.target == PortIdentity::all_ports()
    }

    /// The payload parsed from the last frame, replaced by the next
    /// [`parse`](Self::parse).
    pub fn data(&self) -> Option<&ManagementTlv> {
        self.data_get.as_ref()
    }

    /// Display text of the last parsed MANAGEMENT_ERROR_STATUS TLV.
    pub fn error_display(&self) -> &str {
        self.error_display.as_str()
    }

    /// The frame produced by the last [`build`](Self::build); borrowed
    /// until the next build call.
    pub fn send_buf(&self) -> &[u8] {
        &self.send_buf[..self.msg_len.min(self.send_buf.len())]
    }

    /// Prepares a request without a payload: a GET, or any action on an
    /// id with no dataField.
    pub fn set_action(&mut self, action: ActionField, id: ManagementId) -> Result<(), MngError> {
        self.check_send_action(action, id)?;
        if action != ActionField::Get && !id.is_empty_id() {
            // SET and COMMAND of a non-empty id need a payload.
            return Err(MngError::BadValue);
        }
        self.action = action;
        self.tlv_id = id;
        self.data_send = None;
        Ok(())
    }

    /// Prepares a SET or COMMAND request carrying `data`; the id is the
    /// payload's tag.
    pub fn set_action_data(
        &mut self,
        action: ActionField,
        data: ManagementTlv,
    ) -> Result<(), MngError> {
        let id = data.id();
        self.check_send_action(action, id)?;
        if action == ActionField::Get {
            return self.set_action(action, id);
        }
        self.action = action;
        self.tlv_id = id;
        self.data_send = Some(data);
        Ok(())
    }

    fn check_send_action(&self, action: ActionField, id: ManagementId) -> Result<(), MngError> {
        if !matches!(
            action,
            ActionField::Get | ActionField::Set | ActionField::Command
        ) {
            return Err(MngError::BadAction);
        }
        if id.is_implementation_specific() && !self.params.implementation_specific {
            return Err(MngError::InvalidId);
        }
        if !id.allowed_action(action) {
            return Err(MngError::BadAction);
        }
        Ok(())
    }

    /// The dataField size the next build will emit, even by construction.
    fn data_field_size(&self) -> Result<usize, MngError> {
        if self.action == ActionField::Get || self.tlv_id.is_empty_id() {
            return Ok(0);
        }
        match self.tlv_id.entry().size {
            DataSize::Fixed(size) => Ok(size),
            DataSize::Computed => {
                let data = self.data_send.as_ref().ok_or(MngError::BadValue)?;
                Ok((data.data_size() + 1) & !1)
            }
            DataSize::Unsupported => Err(MngError::Unsupported),
        }
    }

    /// The total frame length the next [`build`](Self::build) will
    /// produce.
    pub fn planned_msg_len(&self) -> Result<usize, MngError> {
        Ok(BASE_SIZE + self.data_field_size()?)
    }

    /// Builds the prepared request into the owned send buffer.
    pub fn build(&mut self, sequence: u16) -> Result<(), MngError> {
        self.msg_len = 0;
        let result = self.build_owned(sequence);
        self.last_error = result.as_ref().err().copied();
        let len = result?;
        self.msg_len = len;
        Ok(())
    }

    fn build_owned(&mut self, sequence: u16) -> Result<usize, MngError> {
        let len = self.planned_msg_len()?;
        if len > u16::MAX as usize {
            return Err(MngError::Capacity);
        }
        let mut buf = core::mem::take(&mut self.send_buf);
        if buf.len() < len {
            buf.resize(len, 0);
        }
        let result = self.encode_frame(&mut buf[..len], sequence);
        self.send_buf = buf;
        result.map(|()| len)
    }

    /// Builds the prepared request into a caller-provided buffer and
    /// returns the frame length.
    pub fn build_into(&mut self, buf: &mut [u8], sequence: u16) -> Result<usize, MngError> {
        self.msg_len = 0;
        let result = (|| {
            let len = self.planned_msg_len()?;
            if len > u16::MAX as usize {
                return Err(MngError::Capacity);
            }
            if buf.len() < len {
                return Err(MngError::BufferTooShort);
            }
            self.encode_frame(&mut buf[..len], sequence)?;
            Ok(len)
        })();
        self.last_error = result.as_ref().err().copied();
        if let Ok(len) = result {
            self.msg_len = len;
        }
        result
    }

    fn encode_frame(&self, buf: &mut [u8], sequence: u16) -> Result<(), MngError> {
        let total = buf.len();
        let data_size = total - BASE_SIZE;
        let header = Header {
            transport_specific: self.params.transport_specific,
            version_minor: self.params.implementation_specific as u8,
            message_length: total as u16,
            domain_number: self.params.domain_number,
            unicast_flag: self.params.is_unicast,
            source_port_identity: self.params.self_id,
            sequence_id: sequence,
        };
        header.serialize_header(MessageType::Management, buf)?;

        let mut writer = WireWriter::new(&mut buf[HEADER_SIZE..]);
        ManagementHeader {
            target_port_identity: self.params.target,
            starting_boundary_hops: self.params.boundary_hops,
            boundary_hops: self.params.boundary_hops,
            action_raw: self.action.into(),
        }
        .serialize(&mut writer)?;

        writer.put_u16(TLV_MANAGEMENT)?;
        writer.put_u16((2 + data_size) as u16)?;
        writer.put_u16(self.tlv_id.code())?;

        if self.action != ActionField::Get {
            if let Some(data) = &self.data_send {
                let start = writer.consumed();
                data.serialize(&mut writer)?;
                let written = writer.consumed() - start;
                if let DataSize::Fixed(size) = self.tlv_id.entry().size {
                    if written != size {
                        return Err(MngError::SizeMismatch);
                    }
                }
                if written < data_size {
                    writer.pad(data_size - written)?;
                }
            }
        }

        if writer.consumed() != total - HEADER_SIZE {
            return Err(MngError::SizeMismatch);
        }
        Ok(())
    }

    /// Parses a received frame. The buffer is only borrowed for the call;
    /// the decoded payload is owned by the message and available through
    /// [`data`](Self::data).
    ///
    /// [`MngError::ErrorStatus`] is not a parse failure: it reports a
    /// well-formed error reply whose details are in
    /// [`error_id`](Self::error_id) and
    /// [`error_display`](Self::error_display).
    pub fn parse(&mut self, buf: &[u8]) -> Result<(), MngError> {
        let result = self.decode_frame(buf);
        self.last_error = result.as_ref().err().copied();
        if result.is_err() {
            self.data_get = None;
        }
        result
    }

    fn decode_frame(&mut self, buf: &[u8]) -> Result<(), MngError> {
        self.data_get = None;
        self.error_id = None;
        self.error_display.clear();
        self.reply_action = None;

        if buf.len() < MIN_FRAME_SIZE {
            return Err(MngError::BufferTooShort);
        }
        let header = Header::deserialize_header(buf)?;
        if header.message_type != u8::from(MessageType::Management) {
            return Err(MngError::BadHeader);
        }
        // Major version must be 2; any minor version is accepted.
        if header.version_major != 2 {
            return Err(MngError::BadHeader);
        }
        if header.control_field != 0x04 {
            return Err(MngError::BadHeader);
        }
        let message_length = header.message_length as usize;
        if message_length < MIN_FRAME_SIZE || message_length > buf.len() {
            return Err(MngError::BadHeader);
        }

        self.sequence = header.sequence_id;
        self.peer = header.source_port_identity;
        self.is_unicast = header.unicast_flag;

        let mut reader = WireReader::new(&buf[HEADER_SIZE..message_length]);
        let management_header = ManagementHeader::deserialize(&mut reader)?;
        let action = management_header.action()?;
        self.reply_action = Some(action);

        loop {
            let tlv_type = reader.get_u16().map_err(|_| MngError::InvalidTlv)?;
            let tlv_len = reader.get_u16().map_err(|_| MngError::InvalidTlv)? as usize;
            match tlv_type {
                TLV_MANAGEMENT => {
                    return self.decode_management_tlv(action, tlv_len, &mut reader);
                }
                TLV_MANAGEMENT_ERROR_STATUS => {
                    return self.decode_error_status(tlv_len, &mut reader);
                }
                other => {
                    log::trace!("skipping TLV type {other:#06x} in a management message");
                    reader.skip(tlv_len).map_err(|_| MngError::InvalidTlv)?;
                }
            }
        }
    }

    fn decode_management_tlv(
        &mut self,
        action: ActionField,
        tlv_len: usize,
        reader: &mut WireReader<'_>,
    ) -> Result<(), MngError> {
        if tlv_len < 2 {
            return Err(MngError::InvalidTlv);
        }
        if tlv_len % 2 != 0 {
            return Err(MngError::OddLength);
        }
        let code = reader.get_u16()?;
        let id = ManagementId::from_code(code).ok_or(MngError::InvalidId)?;
        if id.is_implementation_specific() && !self.params.implementation_specific {
            return Err(MngError::InvalidId);
        }
        if !id.allowed_action(action) {
            return Err(MngError::BadAction);
        }
        self.tlv_id = id;

        let data_len = tlv_len - 2;
        let data = reader.get_bytes(data_len)?;

        // GET requests and acknowledgements carry no dataField, and
        // neither do the payload-less ids.
        if matches!(action, ActionField::Get | ActionField::Acknowledge) || id.is_empty_id() {
            if data_len != 0 {
                return Err(MngError::SizeMismatch);
            }
            return Ok(());
        }

        match id.entry().size {
            DataSize::Fixed(size) if data_len != size => return Err(MngError::SizeMismatch),
            DataSize::Unsupported => return Err(MngError::Unsupported),
            _ => {}
        }

        let mut payload_reader = WireReader::new(data);
        let tlv = ManagementTlv::deserialize(id, &mut payload_reader)?;
        if payload_reader.remaining() == 1 {
            payload_reader.skip(1)?; // parity pad
        }
        if payload_reader.remaining() != 0 {
            return Err(MngError::SizeMismatch);
        }
        self.data_get = Some(tlv);
        Ok(())
    }

    fn decode_error_status(
        &mut self,
        tlv_len: usize,
        reader: &mut WireReader<'_>,
    ) -> Result<(), MngError> {
        if tlv_len < 8 {
            return Err(MngError::InvalidTlv);
        }
        if tlv_len % 2 != 0 {
            return Err(MngError::OddLength);
        }
        let data = reader.get_bytes(tlv_len)?;
        let status = ManagementErrorStatus::deserialize(&mut WireReader::new(data))?;
        if let Some(id) = ManagementId::from_code(status.management_id_code) {
            self.tlv_id = id;
        }
        self.error_id = Some(status.error_id);
        self.error_display = status.display;
        Err(MngError::ErrorStatus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastructures::common::ClockIdentity;
    use crate::management::payload::{PortStatsNp, Priority1, UserDescription};

    /// Hand-assembled response frame, independent of the builder.
    fn response_frame(code: u16, action: u8, data: &[u8]) -> Vec<u8> {
        let padded = data.len() + (data.len() & 1);
        let total = 54 + padded;
        let mut buf = vec![0u8; total];
        buf[0] = 0x0d;
        buf[1] = 0x02;
        buf[2..4].copy_from_slice(&(total as u16).to_be_bytes());
        buf[20..28].copy_from_slice(&[9; 8]); // peer clock identity
        buf[29] = 2; // peer port number
        buf[30..32].copy_from_slice(&0x4321u16.to_be_bytes());
        buf[32] = 0x04;
        buf[33] = 0x7f;
        buf[46] = action;
        buf[48..50].copy_from_slice(&TLV_MANAGEMENT.to_be_bytes());
        buf[50..52].copy_from_slice(&((2 + padded) as u16).to_be_bytes());
        buf[52..54].copy_from_slice(&code.to_be_bytes());
        buf[54..54 + data.len()].copy_from_slice(data);
        buf
    }

    #[test]
    fn empty_get_frame() {
        let mut message = Message::new();
        message
            .set_action(ActionField::Get, ManagementId::Priority1)
            .unwrap();
        assert_eq!(message.planned_msg_len().unwrap(), 54);
        message.build(0x1234).unwrap();
        assert_eq!(message.msg_len(), 54);

        let buf = message.send_buf();
        assert_eq!(buf.len(), 54);
        assert_eq!(buf[0], 0x0d);
        assert_eq!(&buf[2..4], &[0x00, 0x36]);
        assert_eq!(&buf[30..32], &[0x12, 0x34]); // sequenceId
        assert_eq!(buf[32], 0x04); // controlField
        assert_eq!(buf[33], 0x7f); // logMessageInterval
        assert_eq!(&buf[34..44], &[0xff; 10]); // all-ports target
        assert_eq!(&buf[44..48], &[1, 1, 0, 0]); // hops, GET, reserved
        assert_eq!(&buf[48..54], &[0x00, 0x01, 0x00, 0x02, 0x20, 0x05]);
    }

    #[test]
    fn set_priority1_frame() {
        let mut message = Message::new();
        message
            .set_action_data(
                ActionField::Set,
                ManagementTlv::Priority1(Priority1 { priority1: 128 }),
            )
            .unwrap();
        message.build(1).unwrap();

        let buf = message.send_buf();
        assert_eq!(buf.len(), 56);
        assert_eq!(&buf[2..4], &[0x00, 0x38]);
        assert_eq!(buf[46], 0x01); // SET
        assert_eq!(&buf[48..56], &[0x00, 0x01, 0x00, 0x04, 0x20, 0x05, 0x80, 0x00]);
    }

    #[test]
    fn computed_size_is_padded_even() {
        let mut message = Message::new();
        let description = UserDescription {
            user_description: PtpText::new("host").unwrap(),
        };
        // 1 length byte + 4 text bytes: odd, padded to 6.
        message
            .set_action_data(ActionField::Set, description.into())
            .unwrap();
        assert_eq!(message.planned_msg_len().unwrap(), 60);
        message.build(2).unwrap();
        let buf = message.send_buf();
        assert_eq!(buf.len(), 60);
        assert_eq!(&buf[50..52], &[0x00, 0x08]); // lengthField 2 + 6
        assert_eq!(buf[59], 0); // pad byte
        assert_eq!(buf.len() % 2, 0);
    }

    #[test]
    fn round_trip_set_request() {
        let mut sender = Message::new();
        sender
            .set_action_data(
                ActionField::Set,
                ManagementTlv::Priority1(Priority1 { priority1: 5 }),
            )
            .unwrap();
        sender.build(7).unwrap();

        let mut receiver = Message::new();
        receiver.parse(sender.send_buf()).unwrap();
        assert_eq!(receiver.reply_action(), Some(ActionField::Set));
        assert_eq!(receiver.tlv_id(), ManagementId::Priority1);
        assert_eq!(receiver.sequence(), 7);
        assert_eq!(
            receiver.data(),
            Some(&ManagementTlv::Priority1(Priority1 { priority1: 5 }))
        );
    }

    #[test]
    fn round_trip_get_request() {
        let mut sender = Message::new();
        sender
            .set_action(ActionField::Get, ManagementId::PortDataSet)
            .unwrap();
        sender.build(3).unwrap();

        let mut receiver = Message::new();
        receiver.parse(sender.send_buf()).unwrap();
        assert_eq!(receiver.reply_action(), Some(ActionField::Get));
        assert_eq!(receiver.tlv_id(), ManagementId::PortDataSet);
        assert!(receiver.data().is_none());
    }

    #[test]
    fn parse_response_payload() {
        let frame = response_frame(0x2005, 2, &[0x80, 0x00]);
        let mut message = Message::new();
        message.parse(&frame).unwrap();
        assert_eq!(message.reply_action(), Some(ActionField::Response));
        assert_eq!(message.sequence(), 0x4321);
        assert_eq!(message.peer().clock_identity, ClockIdentity([9; 8]));
        assert_eq!(message.peer().port_number, 2);
        assert_eq!(
            message.data(),
            Some(&ManagementTlv::Priority1(Priority1 { priority1: 128 }))
        );
    }

    #[test]
    fn parse_management_error_status() {
        let mut body = vec![0x00, 0x02, 0x20, 0x05, 0, 0, 0, 0];
        body.extend_from_slice(&[0x0c]);
        body.extend_from_slice(b"no such tlv!");
        let padded = body.len() + (body.len() & 1);
        let total = 52 + padded;
        let mut frame = vec![0u8; total];
        frame[0] = 0x0d;
        frame[1] = 0x02;
        frame[2..4].copy_from_slice(&(total as u16).to_be_bytes());
        frame[32] = 0x04;
        frame[46] = 2; // RESPONSE
        frame[48..50].copy_from_slice(&TLV_MANAGEMENT_ERROR_STATUS.to_be_bytes());
        frame[50..52].copy_from_slice(&(padded as u16).to_be_bytes());
        frame[52..52 + body.len()].copy_from_slice(&body);

        let mut message = Message::new();
        assert_eq!(message.parse(&frame), Err(MngError::ErrorStatus));
        assert_eq!(message.error_id(), Some(ManagementErrorId::NoSuchId));
        assert_eq!(message.error_display(), "no such tlv!");
        assert_eq!(message.tlv_id(), ManagementId::Priority1);
        assert!(message.data().is_none());
    }

    #[test]
    fn truncated_frame() {
        let mut message = Message::new();
        assert_eq!(message.parse(&[0u8; 43]), Err(MngError::BufferTooShort));
        assert_eq!(message.parse(&[]), Err(MngError::BufferTooShort));
        assert_eq!(message.last_error(), Some(MngError::BufferTooShort));
    }

    #[test]
    fn little_endian_port_stats() {
        let mut data = vec![0u8; 266];
        data[10] = 0x10; // rx sync counter, little-endian 16
        let frame = response_frame(0xc005, 2, &data);

        let mut message = Message::new();
        message.parse(&frame).unwrap();
        match message.data().unwrap() {
            ManagementTlv::PortStatsNp(stats) => {
                assert_eq!(stats.rx_msg_type[0], 16);
                assert_eq!(stats.tx_msg_type[0], 0);
            }
            other => panic!("wrong payload: {other:?}"),
        }
    }

    #[test]
    fn implementation_specific_gating() {
        let mut message = Message::new();
        let mut params = message.params().clone();
        params.implementation_specific = false;
        message.update_params(params).unwrap();

        assert_eq!(
            message.set_action(ActionField::Get, ManagementId::TimeStatusNp),
            Err(MngError::InvalidId)
        );

        let frame = response_frame(0xc005, 2, &vec![0u8; 266]);
        assert_eq!(message.parse(&frame), Err(MngError::InvalidId));
    }

    #[test]
    fn action_gating() {
        let mut message = Message::new();
        // PORT_STATS_NP is read-only.
        assert_eq!(
            message.set_action_data(
                ActionField::Set,
                ManagementTlv::PortStatsNp(PortStatsNp::default())
            ),
            Err(MngError::BadAction)
        );
        assert_eq!(
            message.set_action(ActionField::Command, ManagementId::Priority1),
            Err(MngError::BadAction)
        );
        // Replies cannot be sent, only received.
        assert_eq!(
            message.set_action(ActionField::Response, ManagementId::Priority1),
            Err(MngError::BadAction)
        );
        // A SET without payload is refused.
        assert_eq!(
            message.set_action(ActionField::Set, ManagementId::Priority1),
            Err(MngError::BadValue)
        );

        // A response frame for an id that only supports COMMAND.
        let frame = response_frame(0x200d, 2, &[]);
        assert_eq!(message.parse(&frame), Err(MngError::BadAction));
        // The same id acknowledged is fine.
        let frame = response_frame(0x200d, 4, &[]);
        message.parse(&frame).unwrap();
        assert_eq!(message.reply_action(), Some(ActionField::Acknowledge));
        assert!(message.data().is_none());
    }

    #[test]
    fn fixed_size_mismatch() {
        let frame = response_frame(0x2005, 2, &[0x80, 0x00, 0x00, 0x00]);
        let mut message = Message::new();
        assert_eq!(message.parse(&frame), Err(MngError::SizeMismatch));
        assert!(message.data().is_none());
    }

    #[test]
    fn unknown_id() {
        let frame = response_frame(0x1ff7, 2, &[0, 0]);
        let mut message = Message::new();
        assert_eq!(message.parse(&frame), Err(MngError::InvalidId));
    }

    #[test]
    fn foreign_tlv_is_skipped() {
        let mut frame = response_frame(0x2005, 2, &[0x80, 0x00]);
        // Splice a PAD TLV (type 0x8008, 4 value bytes) before the
        // management TLV.
        let mut spliced = frame[..48].to_vec();
        spliced.extend_from_slice(&[0x80, 0x08, 0x00, 0x04, 0, 0, 0, 0]);
        spliced.extend_from_slice(&frame[48..]);
        let total = spliced.len() as u16;
        spliced[2..4].copy_from_slice(&total.to_be_bytes());
        frame = spliced;

        let mut message = Message::new();
        message.parse(&frame).unwrap();
        assert_eq!(
            message.data(),
            Some(&ManagementTlv::Priority1(Priority1 { priority1: 128 }))
        );
    }

    #[test]
    fn missing_management_tlv() {
        let mut frame = response_frame(0x2005, 2, &[0x80, 0x00]);
        // Turn the management TLV into a PAD TLV.
        frame[48..50].copy_from_slice(&[0x80, 0x08]);
        let mut message = Message::new();
        assert_eq!(message.parse(&frame), Err(MngError::InvalidTlv));
    }

    #[test]
    fn odd_tlv_length() {
        let mut frame = response_frame(0x2005, 2, &[0x80, 0x00]);
        frame[50..52].copy_from_slice(&[0x00, 0x03]);
        let mut message = Message::new();
        assert_eq!(message.parse(&frame), Err(MngError::OddLength));
    }

    #[test]
    fn bad_header_values() {
        let good = response_frame(0x2005, 2, &[0x80, 0x00]);

        let mut wrong_type = good.clone();
        wrong_type[0] = 0x0b; // announce
        let mut message = Message::new();
        assert_eq!(message.parse(&wrong_type), Err(MngError::BadHeader));

        let mut wrong_version = good.clone();
        wrong_version[1] = 0x01;
        assert_eq!(message.parse(&wrong_version), Err(MngError::BadHeader));

        let mut wrong_control = good.clone();
        wrong_control[32] = 0x00;
        assert_eq!(message.parse(&wrong_control), Err(MngError::BadHeader));

        let mut lying_length = good;
        lying_length[2..4].copy_from_slice(&0xffffu16.to_be_bytes());
        assert_eq!(message.parse(&lying_length), Err(MngError::BadHeader));
    }

    #[test]
    fn reparse_is_idempotent() {
        let frame = response_frame(0x2005, 2, &[0x80, 0x00]);
        let mut message = Message::new();
        message.parse(&frame).unwrap();
        let first = message.data().cloned();
        message.parse(&frame).unwrap();
        assert_eq!(message.data().cloned(), first);
    }

    #[test]
    fn build_into_caller_buffer() {
        let mut message = Message::new();
        message
            .set_action(ActionField::Get, ManagementId::Priority1)
            .unwrap();

        let mut small = [0u8; 40];
        assert_eq!(
            message.build_into(&mut small, 1),
            Err(MngError::BufferTooShort)
        );
        assert_eq!(message.msg_len(), 0);

        let mut buf = [0u8; 64];
        let len = message.build_into(&mut buf, 1).unwrap();
        assert_eq!(len, 54);
        assert_eq!(message.msg_len(), 54);
        assert_eq!(buf[0], 0x0d);
    }

    #[test]
    fn reuse_across_cycles() {
        let mut message = Message::new();
        message
            .set_action_data(
                ActionField::Set,
                ManagementTlv::Priority1(Priority1 { priority1: 1 }),
            )
            .unwrap();
        message.build(1).unwrap();
        let first_len = message.msg_len();

        message
            .set_action(ActionField::Get, ManagementId::DefaultDataSet)
            .unwrap();
        message.build(2).unwrap();
        assert_eq!(message.msg_len(), 54);
        assert_ne!(first_len, 0);
        // The send buffer only grows; the frame is the msg_len prefix.
        assert_eq!(message.send_buf().len(), 54);
    }

    #[test]
    fn invalid_transport_specific() {
        let mut message = Message::new();
        let params = MsgParams {
            transport_specific: 0x10,
            ..Default::default()
        };
        assert_eq!(message.update_params(params), Err(MngError::BadValue));
    }
}
