pub(crate) mod queue_command;
pub(crate) mod response_common;
