//! Build and parse IEEE 1588 (PTP version 2) management messages.
//!
//! The crate is a pure in-memory codec: a [`Message`] owns its send buffer
//! and the payload decoded from the last received frame, but never touches
//! a socket or a clock. The linuxptp implementation-specific TLVs
//! (management ids `0xC000..`) are supported behind a parameter flag.

pub mod config;
pub mod datastructures;
pub mod dispatcher;
pub mod management;
pub mod message;

pub use config::{ConfigError, ConfigSource};
pub use datastructures::common::{
    AcceptableMaster, ClockAccuracy, ClockIdentity, ClockQuality, ClockType, FaultRecord,
    FaultSeverity, NetworkProtocol, PortAddress, PortIdentity, PortState, PtpText, TimeInterval,
    TimeSource, Timestamp, TimestampKind,
};
pub use datastructures::messages::{ActionField, ManagementErrorId, MessageType};
pub use datastructures::MngError;
pub use dispatcher::{MessageDispatcher, TlvBuilder};
pub use management::id::{ActionMask, DataSize, ManagementId, ManagementIdEntry, Scope};
pub use management::payload::*;
pub use message::{Message, MsgParams};
