use std::collections::VecDeque;
use std::sync::mpsc::Receiver;

pub const DEFAULT_LOG_CAPACITY: usize = 200;

/// Keeps the most recent captured log lines, dropping the oldest past `capacity`.
pub struct LogManager {
    logs: VecDeque<String>,
    capacity: usize,
}

impl LogManager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            logs: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: String) {
        if self.logs.len() >= self.capacity {
            self.logs.pop_front();
        }
        self.logs.push_back(message);
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = String>) {
        for message in messages {
            self.push(message);
        }
    }

    /// Pull everything currently waiting on a capture channel.
    pub fn drain(&mut self, receiver: &Receiver<String>) -> usize {
        let before = self.logs.len();
        let mut received = 0;
        while let Ok(message) = receiver.try_recv() {
            self.push(message);
            received += 1;
        }
        tracing::trace!("Drained {} log lines ({} buffered before)", received, before);
        received
    }

    pub fn all_logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
