mod attitude;
mod burn_estimate;
mod command_error;
pub mod common;
mod flight_computer;
mod vessel;
#[cfg(test)]
mod tests;

pub use attitude::{AttitudeMode, FlightAttitude, OrbitalAxis, ReferenceFrame};
pub use burn_estimate::BurnEstimate;
pub use command_error::CommandError;
pub use flight_computer::FlightComputer;
pub use vessel::{ManeuverNode, STANDARD_GRAVITY, Target, VesselSnapshot, VesselStateProvider};
