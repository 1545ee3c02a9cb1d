use super::response_common::HTTPResponseType;

/// Response type for the /flightcomputer/commands endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct QueueCommandResponse {
    /// Whether the flight computer took the command into its queue.
    accepted: bool,
    /// Number of commands waiting in the flight computer afterwards.
    queued: Option<usize>,
}

impl QueueCommandResponse {
    pub(crate) fn accepted(&self) -> bool { self.accepted }
    pub(crate) fn queued(&self) -> Option<usize> { self.queued }
}

impl HTTPResponseType for QueueCommandResponse {}
