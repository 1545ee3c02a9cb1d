use crate::command::CommandKind;
use std::fmt::{Display, Formatter};

/// Reasons a flight computer operation reports `false`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CommandError {
    NoManeuverNode,
    NoTarget,
    NoThrust,
    Rejected(CommandKind),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NoManeuverNode => f.write_str("no maneuver node is planned"),
            CommandError::NoTarget => f.write_str("no target is selected"),
            CommandError::NoThrust => f.write_str("burn time is unbounded without thrust"),
            CommandError::Rejected(kind) => write!(f, "{kind} was rejected by the command queue"),
        }
    }
}

impl std::error::Error for CommandError {}
