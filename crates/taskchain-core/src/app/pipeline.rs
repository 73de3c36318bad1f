//! Pipeline - sequential task driver
//!
//! Tasks run one at a time in registration order. What a task returns decides
//! what the next one receives:
//!
//! | returned            | next task receives |
//! |---------------------|--------------------|
//! | `Output::Empty`     | no arguments       |
//! | `Output::Single(v)` | `v`                |
//! | `Output::Multi(p)`  | every value of `p` |
//! | `Output::Exit(e)`   | nothing, run stops |
//!
//! A task error ends the run and is returned as-is.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{Output, Params, TaskError, Value};
use crate::impls::StdoutObserver;
use crate::ports::{Event, Observer};
use crate::typed::{DynTask, FnTask, FromParams, TypedTask};

/// A registered task: its name plus its body.
#[derive(Clone)]
pub struct TaskEntry {
    name: String,
    body: Arc<dyn DynTask>,
}

impl TaskEntry {
    pub fn new(name: impl Into<String>, body: Arc<dyn DynTask>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, params: Params) -> Result<Output, TaskError> {
        self.body.call(params)
    }
}

impl fmt::Debug for TaskEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskEntry").field("name", &self.name).finish()
    }
}

/// Pipeline owns an ordered list of tasks and runs them in sequence.
///
/// # Example
/// ```ignore
/// let mut p = Pipeline::new();
/// p.add_task("split", |_| Ok(Output::multi(params![10, 20])));
/// p.add_typed("sum", |(a, b): (i32, i32)| Ok(Output::single(a + b)));
/// let out = p.run(params![])?;
/// assert_eq!(out.single_as::<i32>(), Some(&30));
/// ```
///
/// Registration takes `&mut self` and `run` takes `&self`, so the task list
/// cannot change while a run is in progress.
pub struct Pipeline {
    tasks: Vec<TaskEntry>,
    observer: Option<Arc<dyn Observer>>,
    debug: Arc<AtomicBool>,
}

/// Logger writes free-form lines through a pipeline's observer.
///
/// Obtained from [`Pipeline::logger`] and moved into task closures. It shares
/// the pipeline's debug flag, so `set_debug_mode` applies to it as well. The
/// observer is the one installed when the handle was taken.
#[derive(Clone)]
pub struct Logger {
    observer: Option<Arc<dyn Observer>>,
    debug: Arc<AtomicBool>,
}

impl Logger {
    /// Emits `message` as an `Event::Log` while debug mode is on.
    pub fn log(&self, message: impl fmt::Display) {
        if !self.debug.load(Ordering::Relaxed) {
            return;
        }
        if let Some(observer) = &self.observer {
            let line = message.to_string();
            observer.notify(&Event::Log { message: &line });
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("debug", &self.debug.load(Ordering::Relaxed))
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Pipeline {
    /// Empty pipeline with a `StdoutObserver` installed and debug mode off.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            observer: Some(Arc::new(StdoutObserver::new())),
            debug: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn builder() -> super::builder::PipelineBuilder {
        super::builder::PipelineBuilder::new()
    }

    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_mode(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Writes a free-form line through the observer while debug mode is on.
    pub fn log(&self, message: impl fmt::Display) {
        self.logger().log(message);
    }

    /// A handle tasks can hold to log through this pipeline.
    pub fn logger(&self) -> Logger {
        Logger {
            observer: self.observer.clone(),
            debug: Arc::clone(&self.debug),
        }
    }

    pub fn set_observer(&mut self, observer: impl Observer + 'static) {
        self.observer = Some(Arc::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Appends a task that works on the raw params. Names need not be unique.
    pub fn add_task<F>(&mut self, name: impl Into<String>, body: F)
    where
        F: Fn(Params) -> Result<Output, TaskError> + Send + Sync + 'static,
    {
        self.add_dyn(name, Arc::new(FnTask::new(body)));
    }

    /// Appends a task taking a typed tuple; see `FromParams`.
    pub fn add_typed<A, F>(&mut self, name: impl Into<String>, body: F)
    where
        A: FromParams + 'static,
        F: Fn(A) -> Result<Output, TaskError> + Send + Sync + 'static,
    {
        self.add_dyn(name, Arc::new(TypedTask::new(body)));
    }

    pub fn add_dyn(&mut self, name: impl Into<String>, body: Arc<dyn DynTask>) {
        self.tasks.push(TaskEntry::new(name, body));
    }

    pub fn tasks(&self) -> &[TaskEntry] {
        &self.tasks
    }

    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(TaskEntry::name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Runs every task in order, starting from `initial`.
    ///
    /// Returns the last task's output unchanged, or the exit payload when a
    /// task returned `Output::Exit`. An empty pipeline returns `Output::Empty`.
    pub fn run(&self, initial: impl Into<Params>) -> Result<Output, TaskError> {
        let mut params = initial.into();
        let mut last = Output::Empty;

        for task in &self.tasks {
            self.emit(Event::Start { task: task.name() });
            self.emit(Event::Params { params: &params });

            let output = task.call(params)?;

            if let Output::Exit(exit) = output {
                self.emit(Event::Exit {
                    task: task.name(),
                    message: &exit.message,
                });
                return Ok(exit.into_output());
            }

            self.emit(Event::Done { task: task.name() });
            self.emit(Event::Result { output: &output });
            self.emit(Event::Separator);

            params = output.to_params();
            last = output;
        }

        Ok(last)
    }

    pub fn run_values<I>(&self, values: I) -> Result<Output, TaskError>
    where
        I: IntoIterator<Item = Value>,
    {
        self.run(values.into_iter().collect::<Params>())
    }

    fn emit(&self, event: Event<'_>) {
        if !self.debug_mode() {
            return;
        }
        if let Some(observer) = &self.observer {
            observer.notify(&event);
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("tasks", &self.tasks)
            .field("debug", &self.debug_mode())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
