use super::argument::{Argument, ArgumentType};
use super::call_error::CallError;
use itertools::Itertools;
use strum_macros::{Display, EnumIter, EnumString};

/// Default of an optional parameter, `Required` if the caller must provide it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ParameterDefault {
    Required,
    Double(f64),
    String(&'static str),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Parameter {
    pub name: &'static str,
    pub kind: ArgumentType,
    pub default: ParameterDefault,
}

impl Parameter {
    const fn required(name: &'static str, kind: ArgumentType) -> Self {
        Self { name, kind, default: ParameterDefault::Required }
    }

    const fn double(name: &'static str, default: f64) -> Self {
        Self { name, kind: ArgumentType::Double, default: ParameterDefault::Double(default) }
    }

    fn default_argument(&self) -> Option<Argument> {
        match self.default {
            ParameterDefault::Required => None,
            ParameterDefault::Double(d) => Some(Argument::Double(d)),
            ParameterDefault::String(s) => Some(Argument::String(s.to_string())),
        }
    }
}

const EXTRA_DELAY: Parameter = Parameter::double("extraDelay", 0.0);

static EXTRA_DELAY_PARAMS: [Parameter; 1] = [EXTRA_DELAY];
static RELATIVE_VELOCITY_PARAMS: [Parameter; 2] =
    [Parameter::required("isPrograde", ArgumentType::Bool), EXTRA_DELAY];
static ORBITAL_PARAMS: [Parameter; 2] =
    [Parameter::required("axis", ArgumentType::String), EXTRA_DELAY];
static ATTITUDE_PARAMS: [Parameter; 6] = [
    Parameter::required("mode", ArgumentType::String),
    Parameter::required("attitude", ArgumentType::String),
    Parameter::required("frame", ArgumentType::String),
    EXTRA_DELAY,
    Parameter::double("timestamp", -1.0),
    Parameter {
        name: "orientation",
        kind: ArgumentType::String,
        default: ParameterDefault::String("0,0,0,1"),
    },
];
static BURN_PARAMS: [Parameter; 3] = [
    Parameter::required("throttle", ArgumentType::Double),
    Parameter::required("durationInSeconds", ArgumentType::Double),
    EXTRA_DELAY,
];

/// Procedures of the `FlightComputer` class, named as remote callers see them.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum Procedure {
    HasManeuverNode,
    KillRotation,
    Node,
    RelativeVelocity,
    Orbital,
    Attitude,
    Burn,
    ExecManeuver,
}

impl Procedure {
    pub fn parameters(self) -> &'static [Parameter] {
        match self {
            Procedure::HasManeuverNode => &[],
            Procedure::KillRotation | Procedure::Node | Procedure::ExecManeuver => {
                &EXTRA_DELAY_PARAMS
            }
            Procedure::RelativeVelocity => &RELATIVE_VELOCITY_PARAMS,
            Procedure::Orbital => &ORBITAL_PARAMS,
            Procedure::Attitude => &ATTITUDE_PARAMS,
            Procedure::Burn => &BURN_PARAMS,
        }
    }

    /// Human readable signature, e.g. `bool burn(double throttle, ..., double extraDelay = 0)`.
    pub fn signature(self) -> String {
        let params = self
            .parameters()
            .iter()
            .map(|p| match p.default {
                ParameterDefault::Required => format!("{} {}", p.kind, p.name),
                ParameterDefault::Double(d) => format!("{} {} = {d}", p.kind, p.name),
                ParameterDefault::String(s) => format!("{} {} = {s:?}", p.kind, p.name),
            })
            .join(", ");
        format!("bool {self}({params})")
    }

    /// Fills in omitted trailing arguments with their defaults.
    ///
    /// Only arity is checked here; argument types are checked on access.
    pub(super) fn bind(self, args: &[Argument]) -> Result<BoundArguments, CallError> {
        let params = self.parameters();
        if args.len() > params.len() {
            return Err(CallError::UnexpectedArgument {
                procedure: self,
                expected: params.len(),
                given: args.len(),
            });
        }
        let bound = params
            .iter()
            .enumerate()
            .map(|(i, param)| {
                args.get(i).cloned().or_else(|| param.default_argument()).ok_or(
                    CallError::MissingArgument { procedure: self, parameter: param.name },
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BoundArguments { procedure: self, args: bound })
    }
}

/// Arguments of one call, matched against the procedure's parameter list.
#[derive(Debug)]
pub(super) struct BoundArguments {
    procedure: Procedure,
    args: Vec<Argument>,
}

impl BoundArguments {
    pub(super) fn double(&self, index: usize) -> Result<f64, CallError> {
        self.args[index].as_f64().ok_or_else(|| self.type_error(index))
    }

    pub(super) fn boolean(&self, index: usize) -> Result<bool, CallError> {
        self.args[index].as_bool().ok_or_else(|| self.type_error(index))
    }

    pub(super) fn string(&self, index: usize) -> Result<&str, CallError> {
        self.args[index].as_str().ok_or_else(|| self.type_error(index))
    }

    fn type_error(&self, index: usize) -> CallError {
        let param = self.procedure.parameters()[index];
        CallError::ArgumentType {
            procedure: self.procedure,
            parameter: param.name,
            expected: param.kind,
            given: self.args[index].argument_type(),
        }
    }
}
