//! Task file format: a description line followed by `0` or `1`, per task.

use super::TextCodec;
use super::lines::LineCursor;
use crate::error::{Result, TallyError};
use crate::store::Task;

impl TextCodec for Task {
    fn encode(records: &[Self]) -> String {
        records
            .iter()
            .map(|t| format!("{}\n{}\n", t.description, u8::from(t.done)))
            .collect()
    }

    fn decode(text: &str) -> Result<Vec<Self>> {
        let mut cursor = LineCursor::new(text);
        let mut tasks = Vec::new();
        while !cursor.is_exhausted() {
            let description = cursor.next_line("task description")?;
            let flag = cursor.next_line("done flag")?;
            let done = match flag.trim() {
                "0" => false,
                "1" => true,
                other => {
                    return Err(TallyError::malformed(
                        cursor.line_no(),
                        format!("expected done flag 0 or 1, found '{}'", other),
                    ));
                }
            };
            tasks.push(Task {
                description: description.to_string(),
                done,
            });
        }
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasks() -> Vec<Task> {
        vec![
            Task::new("Buy milk"),
            Task {
                description: "Write report".to_string(),
                done: true,
            },
        ]
    }

    #[test]
    fn test_encode_layout() {
        assert_eq!(Task::encode(&tasks()), "Buy milk\n0\nWrite report\n1\n");
        assert_eq!(Task::encode(&[]), "");
    }

    #[test]
    fn test_round_trip() {
        let mut list = tasks();
        list.push(Task::new(""));
        list.push(Task::new("  padded  "));
        assert_eq!(Task::decode(&Task::encode(&list)).unwrap(), list);
    }

    #[test]
    fn test_decode_empty() {
        assert!(Task::decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_missing_flag() {
        let err = Task::decode("Buy milk\n0\nWrite report\n").unwrap_err();
        match err {
            TallyError::Malformed { line, reason } => {
                assert_eq!(line, 4);
                assert!(reason.contains("done flag"));
            }
            other => panic!("Expected malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_bad_flag() {
        let err = Task::decode("Buy milk\nyes\n").unwrap_err();
        assert!(matches!(err, TallyError::Malformed { line: 2, .. }));
    }
}
