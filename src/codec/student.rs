//! Student file format.
//!
//! ```text
//! <student_count>
//! <name>
//! <id>
//! <grade_count>
//! <course_name> <grade>
//! ```
//!
//! The name takes a whole line. Grade lines split at the last space, so both
//! names and course names may contain spaces.

use super::TextCodec;
use super::lines::LineCursor;
use crate::error::{Result, TallyError};
use crate::store::Student;

impl TextCodec for Student {
    fn encode(records: &[Self]) -> String {
        let mut out = format!("{}\n", records.len());
        for student in records {
            out.push_str(&format!("{}\n{}\n{}\n", student.name, student.id, student.grades.len()));
            for (course, grade) in &student.grades {
                out.push_str(&format!("{} {}\n", course, grade));
            }
        }
        out
    }

    fn decode(text: &str) -> Result<Vec<Self>> {
        let mut cursor = LineCursor::new(text);
        if cursor.is_exhausted() {
            return Ok(Vec::new());
        }

        let count: usize = cursor.next_parsed("student count")?;
        let mut students = Vec::new();
        for _ in 0..count {
            let name = cursor.next_line("student name")?;
            let id: i64 = cursor.next_parsed("student ID")?;
            let mut student = Student::new(name, id);

            let grade_count: usize = cursor.next_parsed("grade count")?;
            for _ in 0..grade_count {
                let (course, grade) = decode_grade(&mut cursor)?;
                student.set_grade(course, grade);
            }
            students.push(student);
        }

        if !cursor.is_exhausted() {
            return Err(TallyError::malformed(
                cursor.line_no() + 1,
                format!("unexpected content after {} students", count),
            ));
        }
        Ok(students)
    }
}

fn decode_grade<'a>(cursor: &mut LineCursor<'a>) -> Result<(&'a str, i64)> {
    let line = cursor.next_line("grade line")?;
    let bad = || TallyError::malformed(cursor.line_no(), format!("expected '<course> <grade>', found '{}'", line));
    let (course, grade) = line.trim_end().rsplit_once(' ').ok_or_else(&bad)?;
    let grade = grade.parse().map_err(|_| bad())?;
    Ok((course, grade))
}
