//! PTP message framing: the common header, the management message header
//! and the management TLV envelope.

use num_enum::{IntoPrimitive, TryFromPrimitive};

mod control_field;
mod error_status;
mod header;
mod management;

pub(crate) use control_field::*;
pub use error_status::*;
pub(crate) use header::*;
pub use management::*;

#[derive(Debug, Clone, Copy, TryFromPrimitive, IntoPrimitive, PartialEq, Eq)]
#[repr(u8)]
pub enum MessageType {
    Sync = 0x0,
    DelayReq = 0x1,
    PDelayReq = 0x2,
    PDelayResp = 0x3,
    FollowUp = 0x8,
    DelayResp = 0x9,
    PDelayRespFollowUp = 0xA,
    Announce = 0xB,
    Signaling = 0xC,
    Management = 0xD,
}

/// TLV type codes used by management frames. See 14.1.1 / Table 52.
pub(crate) const TLV_MANAGEMENT: u16 = 0x0001;
pub(crate) const TLV_MANAGEMENT_ERROR_STATUS: u16 = 0x0002;
