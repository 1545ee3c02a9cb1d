//! By-name invocation of the flight computer operations.

mod argument;
mod call_error;
mod procedure;
mod service;

pub use argument::{Argument, ArgumentType};
pub use call_error::CallError;
pub use procedure::{Parameter, ParameterDefault, Procedure};
pub use service::RemoteTechService;
