//! JSON listings for scripting (`tally grades list --json`).

use serde::Serialize;

use crate::error::Result;
use crate::store::{Gradebook, RecordStore, TodoList};

#[derive(Debug, Serialize)]
struct Listed<'a, T> {
    position: usize,
    #[serde(flatten)]
    record: &'a T,
    #[serde(skip_serializing_if = "Option::is_none")]
    average: Option<f64>,
}

fn listed<T>(store: &RecordStore<T>, average: impl Fn(&T) -> Option<f64>) -> Vec<Listed<'_, T>> {
    store
        .iter()
        .map(|(position, record)| Listed {
            position: position.get(),
            record,
            average: average(record),
        })
        .collect()
}

/// Pretty JSON array of students, each with its position and average.
pub fn students_json(book: &Gradebook) -> Result<String> {
    Ok(serde_json::to_string_pretty(&listed(book, |s| Some(s.average())))?)
}

/// Pretty JSON array of tasks, each with its position.
pub fn tasks_json(list: &TodoList) -> Result<String> {
    Ok(serde_json::to_string_pretty(&listed(list, |_| None))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Position;
    use serde_json::{Value, json};

    #[test]
    fn test_students_json() {
        let mut book = Gradebook::new();
        book.add_student("Ada", 7);
        book.set_grade(7, "A", 80).unwrap();
        book.set_grade(7, "B", 90).unwrap();

        let value: Value = serde_json::from_str(&students_json(&book).unwrap()).unwrap();
        assert_eq!(
            value,
            json!([{
                "position": 1,
                "name": "Ada",
                "id": 7,
                "grades": {"A": 80, "B": 90},
                "average": 85.0
            }])
        );
    }

    #[test]
    fn test_tasks_json() {
        let mut list = TodoList::new();
        list.add_task("Buy milk");
        list.add_task("Write report");
        list.mark_done(Position::new(2).unwrap()).unwrap();

        let value: Value = serde_json::from_str(&tasks_json(&list).unwrap()).unwrap();
        assert_eq!(
            value,
            json!([
                {"position": 1, "description": "Buy milk", "done": false},
                {"position": 2, "description": "Write report", "done": true}
            ])
        );
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(tasks_json(&TodoList::new()).unwrap(), "[]");
    }
}
