//! Observer port - progress notifications from a running pipeline
//!
//! Observers only watch: nothing they do feeds back into the run.

use std::fmt;

use crate::domain::{Output, Params};

/// One progress notification.
///
/// `Display` renders the log line: `[Start] <task>`, `[Params] <values>`,
/// `[Exit] <task> <message>`, `[Done] <task>`, `[Result] <value>`, and an
/// empty line for `Separator` (emitted after every step that did not exit).
/// `Log` carries a free-form line from `Pipeline::log` or a `Logger`, rendered
/// as-is.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    Start { task: &'a str },
    Params { params: &'a Params },
    Exit { task: &'a str, message: &'a str },
    Done { task: &'a str },
    Result { output: &'a Output },
    Separator,
    Log { message: &'a str },
}

impl<'a> Event<'a> {
    pub fn tag(&self) -> &'static str {
        match self {
            Event::Start { .. } => "[Start]",
            Event::Params { .. } => "[Params]",
            Event::Exit { .. } => "[Exit]",
            Event::Done { .. } => "[Done]",
            Event::Result { .. } => "[Result]",
            Event::Separator | Event::Log { .. } => "",
        }
    }

    /// Task name, for events that carry one.
    pub fn task(&self) -> Option<&'a str> {
        match *self {
            Event::Start { task } | Event::Exit { task, .. } | Event::Done { task } => Some(task),
            _ => None,
        }
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        match self {
            Event::Start { task } | Event::Done { task } => write!(f, "{tag} {task}"),
            Event::Params { params } => write!(f, "{tag} {params}"),
            Event::Exit { task, message } => write!(f, "{tag} {task} {message}"),
            Event::Result { output } => write!(f, "{tag} {output}"),
            Event::Separator => Ok(()),
            Event::Log { message } => f.write_str(message),
        }
    }
}

/// Observer receives every event of a run while debug mode is on.
pub trait Observer: Send + Sync {
    fn notify(&self, event: &Event<'_>);
}
