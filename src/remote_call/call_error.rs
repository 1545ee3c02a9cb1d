use super::argument::ArgumentType;
use super::procedure::Procedure;
use std::fmt::{Display, Formatter};

/// Malformed remote invocations. Refusals by the flight computer itself are
/// not errors; they come back as `Ok(false)`.
#[derive(Debug, PartialEq, Clone)]
pub enum CallError {
    UnknownProcedure { name: String },
    MissingArgument { procedure: Procedure, parameter: &'static str },
    UnexpectedArgument { procedure: Procedure, expected: usize, given: usize },
    ArgumentType {
        procedure: Procedure,
        parameter: &'static str,
        expected: ArgumentType,
        given: ArgumentType,
    },
    UnknownAxis { axis: String },
    MalformedArguments { reason: String },
}

impl Display for CallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CallError::UnknownProcedure { name } => write!(f, "unknown procedure `{name}`"),
            CallError::MissingArgument { procedure, parameter } => {
                write!(f, "{procedure} is missing argument `{parameter}`")
            }
            CallError::UnexpectedArgument { procedure, expected, given } => {
                write!(f, "{procedure} takes {expected} arguments but {given} were given")
            }
            CallError::ArgumentType { procedure, parameter, expected, given } => {
                write!(f, "{procedure}: `{parameter}` expects {expected}, got {given}")
            }
            CallError::UnknownAxis { axis } => write!(f, "`{axis}` is not an orbital axis"),
            CallError::MalformedArguments { reason } => {
                write!(f, "arguments are not a JSON array: {reason}")
            }
        }
    }
}

impl std::error::Error for CallError {}
