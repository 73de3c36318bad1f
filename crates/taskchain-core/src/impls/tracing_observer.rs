//! TracingObserver - forwards events to `tracing`.

use crate::ports::{Event, Observer};

pub const TARGET: &str = "taskchain";

/// Emits every event at DEBUG level under the `taskchain` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for TracingObserver {
    fn notify(&self, event: &Event<'_>) {
        match event.task() {
            Some(task) => tracing::debug!(target: TARGET, task, tag = event.tag(), "{event}"),
            None => tracing::debug!(target: TARGET, tag = event.tag(), "{event}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Output;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(max_level: tracing::Level, f: impl FnOnce()) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(max_level)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        out.text()
    }

    #[test]
    fn events_are_debug_records_under_taskchain_target() {
        let text = capture(tracing::Level::DEBUG, || {
            TracingObserver::new().notify(&Event::Start { task: "t" });
        });
        assert!(text.contains("DEBUG"), "{text}");
        assert!(text.contains("taskchain"), "{text}");
        assert!(text.contains("[Start] t"), "{text}");
        assert!(text.contains("task=\"t\"") || text.contains("task=t"), "{text}");
    }

    #[test]
    fn events_without_task_have_no_task_field() {
        let output = Output::single(1_i32);
        let text = capture(tracing::Level::DEBUG, || {
            TracingObserver::new().notify(&Event::Result { output: &output });
        });
        assert!(text.contains("[Result] 1"), "{text}");
        assert!(!text.contains("task="), "{text}");
    }

    #[test]
    fn filtered_out_above_debug() {
        let text = capture(tracing::Level::INFO, || {
            TracingObserver::new().notify(&Event::Start { task: "t" });
        });
        assert!(text.is_empty(), "{text}");
    }
}
