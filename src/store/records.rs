//! Student and task records, plus the store operations specific to each.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::record_store::{Position, RecordStore};
use crate::error::{Result, TallyError};

/// A student and their per-course grades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub id: i64,
    /// Course name -> grade. Ordered so the file output is deterministic.
    pub grades: BTreeMap<String, i64>,
}

impl Student {
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
            grades: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the grade for `course`.
    pub fn set_grade(&mut self, course: impl Into<String>, grade: i64) {
        self.grades.insert(course.into(), grade);
    }

    /// Arithmetic mean of all grades, `0.0` when there are none.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.values().map(|&g| g as f64).sum();
        total / self.grades.len() as f64
    }
}

/// A to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub done: bool,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
        }
    }
}

pub type Gradebook = RecordStore<Student>;
pub type TodoList = RecordStore<Task>;

impl RecordStore<Student> {
    pub fn add_student(&mut self, name: impl Into<String>, id: i64) -> Position {
        self.add(Student::new(name, id))
    }

    /// Position of the first student with `id`. Ids are not required to be unique.
    pub fn find_by_id(&self, id: i64) -> Option<Position> {
        self.find(|s| s.id == id)
    }

    pub fn student(&self, id: i64) -> Option<&Student> {
        self.find_by_id(id).and_then(|p| self.get(p))
    }

    pub fn set_grade(&mut self, id: i64, course: &str, grade: i64) -> Result<()> {
        let position = self.find_by_id(id).ok_or_else(|| student_not_found(id))?;
        self.mutate_at(position, |s| s.set_grade(course, grade))
    }

    pub fn average_of(&self, id: i64) -> Result<f64> {
        self.student(id).map(Student::average).ok_or_else(|| student_not_found(id))
    }
}

impl RecordStore<Task> {
    pub fn add_task(&mut self, description: impl Into<String>) -> Position {
        self.add(Task::new(description))
    }

    /// Set `done` on the task at `position`. Marking twice is a no-op.
    pub fn mark_done(&mut self, position: Position) -> Result<()> {
        self.mutate_at(position, |t| t.done = true)
    }

    pub fn delete_task(&mut self, position: Position) -> Result<Task> {
        self.delete_at(position)
    }
}

fn student_not_found(id: i64) -> TallyError {
    debug!("no student with id {}", id);
    TallyError::NotFound(format!("student with ID {}", id))
}
