//! PipelineBuilder - wire tasks and an observer before the first run

use crate::domain::{Output, Params, TaskError};
use crate::impls::{StdoutObserver, TracingObserver};
use crate::ports::Observer;
use crate::typed::FromParams;

use super::config::{ObserverKind, PipelineConfig};
use super::pipeline::Pipeline;

/// PipelineBuilder assembles a [`Pipeline`].
///
/// # Example
/// ```ignore
/// let pipeline = PipelineBuilder::new()
///     .debug(true)
///     .observer(TracingObserver::new())
///     .task("split", |_| Ok(Output::multi(params![10, 20])))
///     .typed_task("sum", |(a, b): (i32, i32)| Ok(Output::single(a + b)))
///     .build();
/// ```
///
/// Without an explicit observer the pipeline logs through `StdoutObserver`.
pub struct PipelineBuilder {
    pipeline: Pipeline,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self {
            pipeline: Pipeline::new(),
        }
    }

    /// Debug mode and observer taken from `config`.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let builder = Self::new().debug(config.debug);
        match config.observer {
            ObserverKind::Stdout => match &config.prefix {
                Some(prefix) => builder.observer(StdoutObserver::with_prefix(prefix.clone())),
                None => builder.observer(StdoutObserver::new()),
            },
            ObserverKind::Tracing => builder.observer(TracingObserver::new()),
            ObserverKind::None => builder.no_observer(),
        }
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.pipeline.set_debug_mode(enabled);
        self
    }

    pub fn observer(mut self, observer: impl Observer + 'static) -> Self {
        self.pipeline.set_observer(observer);
        self
    }

    pub fn no_observer(mut self) -> Self {
        self.pipeline.clear_observer();
        self
    }

    pub fn task<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(Params) -> Result<Output, TaskError> + Send + Sync + 'static,
    {
        self.pipeline.add_task(name, body);
        self
    }

    pub fn typed_task<A, F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        A: FromParams + 'static,
        F: Fn(A) -> Result<Output, TaskError> + Send + Sync + 'static,
    {
        self.pipeline.add_typed(name, body);
        self
    }

    pub fn build(self) -> Pipeline {
        self.pipeline
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::MemoryObserver;
    use crate::params;

    #[test]
    fn builds_tasks_in_order() {
        let pipeline = PipelineBuilder::new()
            .task("split", |_| Ok(Output::multi(params![2, 3])))
            .typed_task("mul", |(a, b): (i32, i32)| Ok(Output::single(a * b)))
            .build();
        assert_eq!(pipeline.task_names().collect::<Vec<_>>(), vec!["split", "mul"]);
        assert_eq!(pipeline.run(params![]).unwrap().single_as::<i32>(), Some(&6));
    }

    #[test]
    fn default_is_stdout_with_debug_off() {
        let pipeline = PipelineBuilder::default().build();
        assert!(pipeline.has_observer());
        assert!(!pipeline.debug_mode());
    }

    #[test]
    fn injected_observer_sees_events() {
        let lines = MemoryObserver::new();
        let pipeline = Pipeline::builder()
            .debug(true)
            .observer(lines.clone())
            .task("only", |_| Ok(Output::empty()))
            .build();
        pipeline.run(params![]).unwrap();
        assert_eq!(lines.lines()[0], "[Start] only");
        assert_eq!(lines.lines()[3], "[Result] <empty>");
    }

    #[test]
    fn from_config_without_observer() {
        let config = PipelineConfig {
            debug: true,
            observer: ObserverKind::None,
            prefix: None,
        };
        let pipeline = PipelineBuilder::from_config(&config).build();
        assert!(pipeline.debug_mode());
        assert!(!pipeline.has_observer());
    }

    #[test]
    fn from_config_tracing() {
        let config = PipelineConfig {
            observer: ObserverKind::Tracing,
            ..PipelineConfig::default()
        };
        let pipeline = PipelineBuilder::from_config(&config).build();
        assert!(pipeline.has_observer());
        assert!(!pipeline.debug_mode());
    }

    #[test]
    fn from_config_stdout_with_prefix() {
        let config = PipelineConfig::from_json_str(r#"{"prefix": "[demo] "}"#).unwrap();
        assert_eq!(config.observer, ObserverKind::Stdout);

        let pipeline = PipelineBuilder::from_config(&config)
            .typed_task("echo", |(n,): (i32,)| Ok(Output::single(n)))
            .build();
        assert!(pipeline.has_observer());
        assert!(!pipeline.debug_mode());
        assert_eq!(pipeline.run(params![4]).unwrap().single_as::<i32>(), Some(&4));
    }
}
