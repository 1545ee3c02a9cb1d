use super::command_record::CommandRecord;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// Anything that accepts flight computer commands.
///
/// Ordering, queuing and execution belong to the implementor; the flight
/// computer only learns whether the command was accepted.
pub trait CommandSink {
    fn queue_command(&self, record: &CommandRecord) -> bool;
}

impl<F> CommandSink for F
where
    F: Fn(&CommandRecord) -> bool,
{
    fn queue_command(&self, record: &CommandRecord) -> bool { self(record) }
}

/// In-process command queue, optionally bounded.
///
/// A bounded queue rejects commands once it is full, mirroring a flight
/// computer whose command list has no free slot.
#[derive(Debug, Default)]
pub struct CommandQueue {
    queue: Mutex<VecDeque<CommandRecord>>,
    capacity: Option<usize>,
}

impl CommandQueue {
    pub fn new() -> Self { Self::default() }

    pub fn bounded(capacity: usize) -> Self {
        Self { queue: Mutex::new(VecDeque::with_capacity(capacity)), capacity: Some(capacity) }
    }

    pub fn len(&self) -> usize { self.lock().len() }

    pub fn is_empty(&self) -> bool { self.lock().is_empty() }

    /// Removes and returns the oldest queued command.
    pub fn pop(&self) -> Option<CommandRecord> { self.lock().pop_front() }

    /// Removes all queued commands, oldest first.
    pub fn drain(&self) -> Vec<CommandRecord> { self.lock().drain(..).collect() }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<CommandRecord>> {
        // the queue holds plain data, a panic while holding the lock cannot corrupt it
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CommandSink for CommandQueue {
    fn queue_command(&self, record: &CommandRecord) -> bool {
        let mut queue = self.lock();
        if self.capacity.is_some_and(|cap| queue.len() >= cap) {
            return false;
        }
        queue.push_back(record.clone());
        true
    }
}
