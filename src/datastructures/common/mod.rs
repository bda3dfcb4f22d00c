//! Common structures of IEEE 1588, shared by several management TLVs.

mod acceptable_master;
mod clock_accuracy;
mod clock_identity;
mod clock_quality;
mod clock_type;
mod fault_record;
mod network_protocol;
mod port_address;
mod port_identity;
mod port_state;
mod ptp_text;
mod time_interval;
mod time_source;
mod timestamp;
mod timestamp_kind;

pub use acceptable_master::*;
pub use clock_accuracy::*;
pub use clock_identity::*;
pub use clock_quality::*;
pub use clock_type::*;
pub use fault_record::*;
pub use network_protocol::*;
pub use port_address::*;
pub use port_identity::*;
pub use port_state::*;
pub use ptp_text::*;
pub use time_interval::*;
pub use time_source::*;
pub use timestamp::*;
pub use timestamp_kind::*;
