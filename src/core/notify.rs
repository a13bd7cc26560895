//! Notification sink for human-readable status messages.

use crate::ui::messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

pub trait Notifier {
    fn notify(&mut self, level: Level, message: &str);
}

/// Prints through `ui::messages`.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        match level {
            Level::Info => messages::info(message),
            Level::Success => messages::success(message),
            Level::Warning => messages::warning(message),
            Level::Error => messages::error(message),
        }
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    pub messages: Vec<(Level, String)>,
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, level: Level, message: &str) {
        self.messages.push((level, message.to_string()));
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, level: Level, message: &str) {
        (**self).notify(level, message)
    }
}
