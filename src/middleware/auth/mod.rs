pub mod role_gate;

pub use role_gate::{GateError, require_role};
