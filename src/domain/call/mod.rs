//! Call bounded context - call session snapshots as delivered by the SIP stack

pub mod snapshot;
pub mod value_object;

pub use snapshot::CallSessionSnapshot;
pub use value_object::{CallDirection, InvState};
