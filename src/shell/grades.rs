//! Grade book menu.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::debug;

use super::{Console, Flow, Menu, announce_load, run_menu};
use crate::codec::{self, Loaded};
use crate::error::Result;
use crate::store::{Gradebook, Student};

pub struct GradesMenu {
    pub book: Gradebook,
    path: PathBuf,
    precision: usize,
}

impl GradesMenu {
    pub fn new(book: Gradebook, path: impl Into<PathBuf>, precision: usize) -> Self {
        Self {
            book,
            path: path.into(),
            precision,
        }
    }

    fn add_student<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        let Some(name) = console.ask("Enter student name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = ask_id(console)? else {
            return Ok(Flow::Exit);
        };
        if let Some(id) = id {
            self.book.add_student(name.trim(), id);
            debug!("Added student {}", id);
        }
        Ok(Flow::Continue)
    }

    fn add_grade<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        let Some(id) = ask_id(console)? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return Ok(Flow::Continue);
        };
        if self.book.find_by_id(id).is_none() {
            writeln!(console.out(), "Student not found.")?;
            return Ok(Flow::Continue);
        }

        let Some(course) = console.ask("Enter course name: ")? else {
            return Ok(Flow::Exit);
        };
        let course = course.trim().to_string();
        let Some(grade) = console.ask(&format!("Enter grade for {}: ", course))? else {
            return Ok(Flow::Exit);
        };
        match grade.trim().parse::<i64>() {
            Ok(grade) => {
                if let Err(e) = self.book.set_grade(id, &course, grade) {
                    writeln!(console.out(), "{}", e)?;
                }
            }
            Err(_) => writeln!(console.out(), "Invalid grade.")?,
        }
        Ok(Flow::Continue)
    }

    fn average<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        let Some(id) = ask_id(console)? else {
            return Ok(Flow::Exit);
        };
        if let Some(id) = id {
            match self.book.average_of(id) {
                Ok(avg) => writeln!(console.out(), "Average Grade: {:.*}", self.precision, avg)?,
                Err(_) => writeln!(console.out(), "Student not found.")?,
            }
        }
        Ok(Flow::Continue)
    }
}

impl Menu for GradesMenu {
    const OPTIONS: &'static [&'static str] = &[
        "Add Student",
        "Add Grade",
        "Display Grades",
        "Calculate Average",
        "Save and Exit",
    ];

    fn dispatch<R: BufRead, W: Write>(&mut self, choice: usize, console: &mut Console<R, W>) -> Result<Flow> {
        match choice {
            1 => self.add_student(console),
            2 => self.add_grade(console),
            3 => {
                write_students(console.out(), &self.book, self.precision)?;
                Ok(Flow::Continue)
            }
            4 => self.average(console),
            _ => Ok(Flow::Continue),
        }
    }

    fn finish<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        codec::save(&self.path, &self.book)?;
        writeln!(console.out(), "Data saved. Exiting.")?;
        Ok(())
    }
}

/// Prompt for a student id. Outer `None` is end of input; inner `None` means
/// the user typed something that is not a number (already reported).
fn ask_id<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<Option<i64>>> {
    let Some(raw) = console.ask("Enter student ID: ")? else {
        return Ok(None);
    };
    match raw.trim().parse::<i64>() {
        Ok(id) => Ok(Some(Some(id))),
        Err(_) => {
            writeln!(console.out(), "Invalid student ID.")?;
            Ok(Some(None))
        }
    }
}

/// Print every student with their grades and average.
pub fn write_students<W: Write>(out: &mut W, book: &Gradebook, precision: usize) -> Result<()> {
    if book.is_empty() {
        writeln!(out, "No students recorded.")?;
        return Ok(());
    }
    for (_, student) in book.iter() {
        write_student(out, student, precision)?;
    }
    Ok(())
}

fn write_student<W: Write>(out: &mut W, student: &Student, precision: usize) -> Result<()> {
    writeln!(out, "Student: {}, ID: {}", student.name, student.id)?;
    writeln!(out, "Grades:")?;
    for (course, grade) in &student.grades {
        writeln!(out, "{}: {}", course, grade)?;
    }
    writeln!(out, "Average Grade: {:.*}\n", precision, student.average())?;
    Ok(())
}

/// Load the grade book from `path`, run the menu, and save on exit.
pub fn run_grades<R: BufRead, W: Write>(
    path: impl Into<PathBuf>,
    precision: usize,
    console: &mut Console<R, W>,
) -> Result<Gradebook> {
    let path = path.into();
    let Loaded { store, status } = codec::load_or_init::<Student>(&path);
    announce_load(&status, &path, console)?;

    let mut menu = GradesMenu::new(store, path, precision);
    run_menu(&mut menu, console)?;
    Ok(menu.book)
}
