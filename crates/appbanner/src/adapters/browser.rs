//! Navigator and Clipboard stand-ins that record what the page asked for

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::errors::DomainError;
use crate::ports::{Clipboard, Navigator};

/// A navigation requested by the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Reload,
    Navigate(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Arc<Mutex<Vec<Navigation>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<Navigation> {
        lock(&self.history).clone()
    }

    pub fn last(&self) -> Option<Navigation> {
        lock(&self.history).last().cloned()
    }

    pub fn reloads(&self) -> usize {
        lock(&self.history)
            .iter()
            .filter(|n| **n == Navigation::Reload)
            .count()
    }
}

impl Navigator for RecordingNavigator {
    fn reload(&self) {
        lock(&self.history).push(Navigation::Reload);
    }

    fn navigate(&self, location: &str) {
        lock(&self.history).push(Navigation::Navigate(location.to_string()));
    }
}

/// Clipboard held in memory; can be switched to refuse writes
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail, like a page without permission
    pub fn denied() -> Self {
        Self {
            denied: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        lock(&self.contents).clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), DomainError> {
        if self.denied {
            return Err(DomainError::Clipboard("write permission denied".to_string()));
        }
        *lock(&self.contents) = Some(text.to_string());
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
