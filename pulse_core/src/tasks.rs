//! Mood task completion bookkeeping.
//!
//! Completion is one-way and per session. XP is only shown in a banner;
//! nothing is written to the user profile.

use crate::types::{Mood, MoodTask};
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("No task at index {index} ({len} tasks for this mood)")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Completion {
    Completed { task: MoodTask, banner: String },
    AlreadyCompleted,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskBoard {
    mood: Mood,
    tasks: &'static [MoodTask],
    completed: BTreeSet<usize>,
}

impl TaskBoard {
    pub fn new(mood: Mood, tasks: &'static [MoodTask]) -> Self {
        Self {
            mood,
            tasks,
            completed: BTreeSet::new(),
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn tasks(&self) -> &'static [MoodTask] {
        self.tasks
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn complete(&mut self, index: usize) -> Result<Completion, TaskError> {
        let task = self.tasks.get(index).ok_or(TaskError::OutOfRange {
            index,
            len: self.tasks.len(),
        })?;

        if !self.completed.insert(index) {
            return Ok(Completion::AlreadyCompleted);
        }

        log::info!("[TASKS] Completed '{}' (+{} XP)", task.title, task.xp);
        Ok(Completion::Completed {
            task: *task,
            banner: format!("+{} XP Earned!", task.xp),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::tasks_for;

    #[test]
    fn test_completing_twice_is_a_noop() {
        let mut board = TaskBoard::new(Mood::Focused, tasks_for(Mood::Focused));
        let first = board.complete(1).unwrap();
        assert!(matches!(first, Completion::Completed { .. }));
        assert_eq!(board.complete(1).unwrap(), Completion::AlreadyCompleted);
        assert_eq!(board.completed_count(), 1);
        assert!(board.is_completed(1));
        assert!(!board.is_completed(0));
    }

    #[test]
    fn test_banner_shows_task_xp() {
        let mut board = TaskBoard::new(Mood::Happy, tasks_for(Mood::Happy));
        match board.complete(0).unwrap() {
            Completion::Completed { task, banner } => {
                assert_eq!(banner, format!("+{} XP Earned!", task.xp));
            }
            Completion::AlreadyCompleted => panic!("first completion should succeed"),
        }
    }

    #[test]
    fn test_out_of_range_index() {
        let mut board = TaskBoard::new(Mood::Sad, tasks_for(Mood::Sad));
        let len = board.tasks().len();
        assert_eq!(
            board.complete(len),
            Err(TaskError::OutOfRange { index: len, len })
        );
        assert_eq!(board.completed_count(), 0);
    }
}
