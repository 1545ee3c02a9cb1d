mod command_record;
mod command_sink;

pub use command_record::{keys, CommandKind, CommandRecord, CommandValue, ALTITUDE_UNUSED};
pub use command_sink::{CommandQueue, CommandSink};
