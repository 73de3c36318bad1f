//! MemoryObserver - keeps rendered lines for later inspection.

use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::{Event, Observer};

/// Clones share one buffer: keep a handle, give the other to the pipeline.
#[derive(Debug, Clone, Default)]
pub struct MemoryObserver {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Observer for MemoryObserver {
    fn notify(&self, event: &Event<'_>) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let handle = MemoryObserver::new();
        let given = handle.clone();
        given.notify(&Event::Done { task: "a" });
        given.notify(&Event::Separator);
        assert_eq!(handle.lines(), vec!["[Done] a".to_string(), String::new()]);

        handle.clear();
        assert!(given.is_empty());
    }
}
