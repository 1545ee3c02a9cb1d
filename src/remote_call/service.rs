use super::{argument::Argument, call_error::CallError, procedure::Procedure};
use crate::cmd;
use crate::command::CommandSink;
use crate::flight_control::{FlightComputer, OrbitalAxis, VesselStateProvider};
use itertools::Itertools;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// The flight computer as seen by remote callers: service `RemoteTech`, class
/// `FlightComputer`, procedures addressed by name with positional arguments.
#[derive(Debug)]
pub struct RemoteTechService<V, S> {
    f_cont: FlightComputer<V, S>,
}

impl<V, S> RemoteTechService<V, S>
where
    V: VesselStateProvider,
    S: CommandSink,
{
    pub const SERVICE_NAME: &'static str = "RemoteTech";
    pub const CLASS_NAME: &'static str = "FlightComputer";

    pub fn new(f_cont: FlightComputer<V, S>) -> Self { Self { f_cont } }

    pub fn flight_computer(&self) -> &FlightComputer<V, S> { &self.f_cont }

    /// All procedures with their signatures, in declaration order.
    pub fn procedures(&self) -> Vec<(Procedure, String)> {
        Procedure::iter().map(|p| (p, p.signature())).collect()
    }

    /// Invokes the procedure called `name`.
    ///
    /// `Ok(false)` means the flight computer refused or the command queue
    /// rejected the command; `Err` means the call itself was malformed.
    pub fn invoke(&self, name: &str, args: &[Argument]) -> Result<bool, CallError> {
        let procedure = Procedure::from_str(name)
            .map_err(|_| CallError::UnknownProcedure { name: name.to_string() })?;
        self.call(procedure, args)
    }

    /// Like [`Self::invoke`], with the arguments given as a JSON array.
    pub fn invoke_json(&self, name: &str, args: &str) -> Result<bool, CallError> {
        let args: Vec<Argument> = serde_json::from_str(args)
            .map_err(|e| CallError::MalformedArguments { reason: e.to_string() })?;
        self.invoke(name, &args)
    }

    pub fn call(&self, procedure: Procedure, args: &[Argument]) -> Result<bool, CallError> {
        cmd!(
            "{}.{}.{procedure}({})",
            Self::SERVICE_NAME,
            Self::CLASS_NAME,
            args.iter().join(", ")
        );
        let bound = procedure.bind(args)?;
        let f_cont = &self.f_cont;
        let res = match procedure {
            Procedure::HasManeuverNode => f_cont.has_maneuver_node(),
            Procedure::KillRotation => f_cont.kill_rotation(bound.double(0)?),
            Procedure::Node => f_cont.node(bound.double(0)?),
            Procedure::RelativeVelocity => {
                f_cont.relative_velocity(bound.boolean(0)?, bound.double(1)?)
            }
            Procedure::Orbital => {
                let name = bound.string(0)?;
                let axis = OrbitalAxis::from_str(name)
                    .map_err(|_| CallError::UnknownAxis { axis: name.to_string() })?;
                f_cont.orbital(axis, bound.double(1)?)
            }
            Procedure::Attitude => f_cont.attitude(
                bound.string(0)?,
                bound.string(1)?,
                bound.string(2)?,
                bound.double(3)?,
                bound.double(4)?,
                bound.string(5)?,
            ),
            Procedure::Burn => {
                f_cont.burn(bound.double(0)?, bound.double(1)?, bound.double(2)?)
            }
            Procedure::ExecManeuver => f_cont.exec_maneuver(bound.double(0)?),
        };
        Ok(res)
    }
}
