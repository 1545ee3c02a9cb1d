use super::{
    attitude::{AttitudeMode, FlightAttitude, OrbitalAxis, ReferenceFrame},
    burn_estimate::BurnEstimate,
    command_error::CommandError,
    vessel::VesselStateProvider,
};
use crate::command::{CommandRecord, CommandSink};
use crate::{cmd, log, warn};

/// Front end of the RemoteTech flight computer.
///
/// Every operation reads what it needs from the vessel-state provider, builds
/// exactly one [`CommandRecord`] (two for [`FlightComputer::exec_maneuver`])
/// and hands it to the command sink. Failures are reported as `false`; the
/// reason is logged.
#[derive(Debug)]
pub struct FlightComputer<V, S> {
    vessel: V,
    sink: S,
}

impl<V, S> FlightComputer<V, S>
where
    V: VesselStateProvider,
    S: CommandSink,
{
    /// Seconds before a maneuver node at which the vessel starts pointing at it.
    pub const NODE_LEAD_TIME: f64 = 180.0;
    /// Timestamp value meaning "now".
    pub const NOW: f64 = -1.0;
    /// Orientation sent when the caller does not provide one.
    pub const DEFAULT_ORIENTATION: &'static str = "0,0,0,1";

    pub fn new(vessel: V, sink: S) -> Self { Self { vessel, sink } }

    pub fn vessel(&self) -> &V { &self.vessel }

    pub fn sink(&self) -> &S { &self.sink }

    pub fn into_parts(self) -> (V, S) { (self.vessel, self.sink) }

    pub fn has_maneuver_node(&self) -> bool { !self.vessel.maneuver_nodes().is_empty() }

    /// Stops the rotation of the vessel and holds its current orientation.
    pub fn kill_rotation(&self, extra_delay: f64) -> bool {
        let orientation = self.vessel.rotation().to_string();
        self.attitude(
            AttitudeMode::KillRot.as_ref(),
            FlightAttitude::Prograde.as_ref(),
            ReferenceFrame::World.as_ref(),
            extra_delay,
            Self::NOW,
            &orientation,
        )
    }

    /// Points along the burn vector of the next maneuver node,
    /// [`Self::NODE_LEAD_TIME`] seconds ahead of it.
    pub fn node(&self, extra_delay: f64) -> bool { Self::report("node", self.try_node(extra_delay)) }

    /// Points along (or against) the velocity relative to the selected target.
    pub fn relative_velocity(&self, is_prograde: bool, extra_delay: f64) -> bool {
        Self::report(
            "relative_velocity",
            self.try_relative_velocity(is_prograde, extra_delay),
        )
    }

    /// Holds one of the six orbital axes.
    pub fn orbital(&self, axis: OrbitalAxis, extra_delay: f64) -> bool {
        self.attitude(
            AttitudeMode::AttitudeHold.as_ref(),
            FlightAttitude::from(axis).as_ref(),
            ReferenceFrame::Orbit.as_ref(),
            extra_delay,
            Self::NOW,
            Self::DEFAULT_ORIENTATION,
        )
    }

    /// Queues a raw attitude command.
    ///
    /// `mode`, `attitude`, `frame` and `orientation` are passed through as given.
    /// A negative `timestamp` is replaced with the current mission time.
    pub fn attitude(
        &self,
        mode: &str,
        attitude: &str,
        frame: &str,
        extra_delay: f64,
        timestamp: f64,
        orientation: &str,
    ) -> bool {
        let time_stamp = self.resolve_timestamp(timestamp);
        let record =
            CommandRecord::attitude(mode, attitude, frame, orientation, time_stamp, extra_delay);
        Self::report("attitude", self.try_send(&record))
    }

    /// Queues a burn at `throttle` for `duration` seconds, starting now.
    pub fn burn(&self, throttle: f64, duration: f64, extra_delay: f64) -> bool {
        let record =
            CommandRecord::burn(throttle, duration, self.vessel.mission_time(), extra_delay);
        Self::report("burn", self.try_send(&record))
    }

    /// Executes the next maneuver node.
    ///
    /// Aligns the vessel with the node first, then queues the maneuver so the
    /// estimated burn is centered on the node time. The result reflects the
    /// maneuver command only.
    pub fn exec_maneuver(&self, extra_delay: f64) -> bool {
        Self::report("exec_maneuver", self.try_exec_maneuver(extra_delay))
    }

    /// Hands `record` to the command sink and returns its verdict.
    pub fn send_command(&self, record: &CommandRecord) -> bool {
        cmd!("Queueing {record}");
        self.sink.queue_command(record)
    }

    fn try_node(&self, extra_delay: f64) -> Result<(), CommandError> {
        let node = self.vessel.next_maneuver_node().ok_or(CommandError::NoManeuverNode)?;
        let record = CommandRecord::attitude(
            AttitudeMode::AttitudeHold.as_ref(),
            FlightAttitude::Prograde.as_ref(),
            ReferenceFrame::Maneuver.as_ref(),
            Self::DEFAULT_ORIENTATION,
            self.resolve_timestamp(node.ut() - Self::NODE_LEAD_TIME),
            extra_delay,
        );
        self.try_send(&record)
    }

    fn try_relative_velocity(&self, is_prograde: bool, extra_delay: f64) -> Result<(), CommandError> {
        let target = self.vessel.target().ok_or(CommandError::NoTarget)?;
        let attitude = if is_prograde { FlightAttitude::Prograde } else { FlightAttitude::Retrograde };
        log!("Holding {attitude} relative to {target} {}", target.name());
        let record = CommandRecord::attitude(
            AttitudeMode::AttitudeHold.as_ref(),
            attitude.as_ref(),
            ReferenceFrame::TargetVelocity.as_ref(),
            Self::DEFAULT_ORIENTATION,
            self.vessel.mission_time(),
            extra_delay,
        );
        self.try_send(&record)
    }

    fn try_exec_maneuver(&self, extra_delay: f64) -> Result<(), CommandError> {
        let node = self.vessel.next_maneuver_node().ok_or(CommandError::NoManeuverNode)?;
        let estimate = BurnEstimate::for_node(&self.vessel, &node);
        let burn_time = estimate.burn_time();
        if !burn_time.is_finite() {
            return Err(CommandError::NoThrust);
        }
        log!("Estimated burn time {burn_time:.2}s for {:.1}m/s", node.delta_v_magnitude());
        let record = CommandRecord::maneuver(0, estimate.start_time(node.ut()), extra_delay);
        if !self.node(extra_delay) {
            warn!("Could not align with the maneuver node, queueing the maneuver anyway");
        }
        self.try_send(&record)
    }

    fn try_send(&self, record: &CommandRecord) -> Result<(), CommandError> {
        if self.send_command(record) {
            Ok(())
        } else {
            Err(CommandError::Rejected(record.kind()))
        }
    }

    fn resolve_timestamp(&self, timestamp: f64) -> f64 {
        if timestamp >= 0.0 { timestamp } else { self.vessel.mission_time() }
    }

    fn report(operation: &str, result: Result<(), CommandError>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                warn!("{operation}: {err}");
                false
            }
        }
    }
}
