use super::notice::Notice;
use crate::error::BhashaError;
use crate::store::RunId;
use std::fmt;

/// The four independent model calls of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Spelling, punctuation, mixing and euphony
    Main,
    Tone,
    Style,
    Content,
}

impl TaskKind {
    /// Launch order
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Main,
        TaskKind::Tone,
        TaskKind::Style,
        TaskKind::Content,
    ];

    pub fn index(&self) -> usize {
        match self {
            Self::Main => 0,
            Self::Tone => 1,
            Self::Style => 2,
            Self::Content => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Tone => "tone",
            Self::Style => "style",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task that ended in an error
#[derive(Debug, Clone)]
pub struct TaskFailure {
    pub task: TaskKind,
    pub error: BhashaError,
}

/// Outcome of one analysis run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: RunId,
    /// Tasks that returned, in completion order
    pub completed: Vec<TaskKind>,
    pub failures: Vec<TaskFailure>,
    /// Matches highlighted by the final batch
    pub highlighted: usize,
    pub notice: Notice,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, task: TaskKind) -> bool {
        self.failures.iter().any(|f| f.task == task)
    }
}
