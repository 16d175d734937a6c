//! Interactive menu loops for the grade book and the to-do list.
//!
//! Both shells run over any `BufRead`/`Write` pair so they can be driven from
//! tests as well as from stdin/stdout. End of input behaves like choosing
//! "Save and Exit".

mod grades;
mod todo;

use std::io::{BufRead, Write};
use std::path::Path;

use log::info;

use crate::codec::LoadStatus;
use crate::error::Result;

pub use grades::{GradesMenu, run_grades, write_students};
pub use todo::{TodoMenu, run_todo, write_tasks};

/// Line-based console over an input reader and an output writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one line. Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// What the menu loop does after an option runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One of the numbered menus. The last option is always "Save and Exit".
pub trait Menu {
    /// Labels for options `1..=OPTIONS.len()`.
    const OPTIONS: &'static [&'static str];

    /// Run option `choice` (1-based, never the exit option).
    fn dispatch<R: BufRead, W: Write>(&mut self, choice: usize, console: &mut Console<R, W>) -> Result<Flow>;

    /// Persist and say goodbye.
    fn finish<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()>;
}

/// Show the menu, dispatch choices, and finish on exit or end of input.
pub fn run_menu<M: Menu, R: BufRead, W: Write>(menu: &mut M, console: &mut Console<R, W>) -> Result<()> {
    let exit_choice = M::OPTIONS.len();
    loop {
        writeln!(console.out())?;
        for (i, label) in M::OPTIONS.iter().enumerate() {
            writeln!(console.out(), "{}. {}", i + 1, label)?;
        }

        let Some(line) = console.ask("Choose an option: ")? else {
            info!("End of input, saving");
            return menu.finish(console);
        };

        let flow = match line.trim().parse::<usize>() {
            Ok(n) if n == exit_choice => Flow::Exit,
            Ok(n) if (1..exit_choice).contains(&n) => menu.dispatch(n, console)?,
            _ => {
                writeln!(console.out(), "Invalid option. Try again.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            return menu.finish(console);
        }
    }
}

/// Tell the user what startup found on disk.
pub fn announce_load<R: BufRead, W: Write>(
    status: &LoadStatus,
    path: &Path,
    console: &mut Console<R, W>,
) -> Result<()> {
    let out = console.out();
    match status {
        LoadStatus::Restored(n) => writeln!(out, "Loaded {} records from {}.", n, path.display())?,
        LoadStatus::Fresh => writeln!(out, "No previous data found. Starting fresh.")?,
        LoadStatus::Unreadable(e) => {
            writeln!(out, "Could not read {}: {}. Starting fresh.", path.display(), e)?
        }
        LoadStatus::Malformed(e) => {
            writeln!(out, "Ignoring corrupt data in {}: {}. Starting fresh.", path.display(), e)?
        }
    }
    Ok(())
}
