use std::fmt::{Display, Formatter};
use strum_macros::Display as StrumDisplay;

/// Parameter types of the remote-call surface.
#[derive(Debug, PartialEq, Eq, Clone, Copy, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum ArgumentType {
    Bool,
    Double,
    String,
}

/// A positional argument as delivered by the remote caller.
#[derive(Debug, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Argument {
    Bool(bool),
    Double(f64),
    String(String),
}

impl Argument {
    pub fn argument_type(&self) -> ArgumentType {
        match self {
            Argument::Bool(_) => ArgumentType::Bool,
            Argument::Double(_) => ArgumentType::Double,
            Argument::String(_) => ArgumentType::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Argument::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Argument::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Argument::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Argument::Bool(b) => write!(f, "{b}"),
            Argument::Double(d) => write!(f, "{d}"),
            Argument::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self { Argument::Bool(value) }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self { Argument::Double(value) }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self { Argument::String(value.to_string()) }
}

impl From<String> for Argument {
    fn from(value: String) -> Self { Argument::String(value) }
}
