//! Remote-callable front end for the RemoteTech flight computer.
//!
//! [`FlightComputer`] turns autopilot intents into command nodes and queues
//! them on a [`CommandSink`]; [`RemoteTechService`] exposes the same
//! operations by name for remote callers.
#![allow(clippy::similar_names, clippy::must_use_candidate, clippy::missing_panics_doc)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub mod command;
pub mod config;
pub mod flight_control;
pub mod http_handler;
pub mod logger;
pub mod remote_call;
#[cfg(test)]
mod test_support;

pub use command::{CommandQueue, CommandRecord, CommandSink};
pub use config::SinkConfig;
pub use flight_control::{FlightComputer, VesselSnapshot, VesselStateProvider};
pub use http_handler::HTTPCommandSink;
pub use remote_call::RemoteTechService;
