//! To-do list menu.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::{Console, Flow, Menu, announce_load, run_menu};
use crate::codec::{self, Loaded};
use crate::error::Result;
use crate::store::{Position, Task, TodoList};

pub struct TodoMenu {
    pub list: TodoList,
    path: PathBuf,
}

impl TodoMenu {
    pub fn new(list: TodoList, path: impl Into<PathBuf>) -> Self {
        Self {
            list,
            path: path.into(),
        }
    }

    fn add_task<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        let Some(description) = console.ask("Enter task: ")? else {
            return Ok(Flow::Exit);
        };
        self.list.add_task(description);
        Ok(Flow::Continue)
    }

    /// Prompt for a position and apply `action` to it. Out-of-range and
    /// unparsable input are both reported as an invalid task number.
    fn with_position<R, W, F>(&mut self, console: &mut Console<R, W>, prompt: &str, action: F) -> Result<Flow>
    where
        R: BufRead,
        W: Write,
        F: FnOnce(&mut TodoList, Position) -> Result<&'static str>,
    {
        let Some(raw) = console.ask(prompt)? else {
            return Ok(Flow::Exit);
        };
        let outcome = raw
            .parse::<Position>()
            .and_then(|position| action(&mut self.list, position).map(|verb| (position, verb)));
        match outcome {
            Ok((position, verb)) => writeln!(console.out(), "Task {} {}.", position, verb)?,
            Err(_) => writeln!(console.out(), "Invalid task number.")?,
        }
        Ok(Flow::Continue)
    }
}

impl Menu for TodoMenu {
    const OPTIONS: &'static [&'static str] = &[
        "Add Task",
        "Display Tasks",
        "Mark Task as Done",
        "Delete Task",
        "Save and Exit",
    ];

    fn dispatch<R: BufRead, W: Write>(&mut self, choice: usize, console: &mut Console<R, W>) -> Result<Flow> {
        match choice {
            1 => self.add_task(console),
            2 => {
                write_tasks(console.out(), &self.list)?;
                Ok(Flow::Continue)
            }
            3 => self.with_position(console, "Enter task number to mark as done: ", |list, p| {
                list.mark_done(p).map(|_| "marked as done")
            }),
            4 => self.with_position(console, "Enter task number to delete: ", |list, p| {
                list.delete_task(p).map(|_| "deleted")
            }),
            _ => Ok(Flow::Continue),
        }
    }

    fn finish<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        codec::save(&self.path, &self.list)?;
        writeln!(console.out(), "Tasks saved to {}.", self.path.display())?;
        Ok(())
    }
}

/// Print the numbered list, marking finished tasks.
pub fn write_tasks<W: Write>(out: &mut W, list: &TodoList) -> Result<()> {
    if list.is_empty() {
        writeln!(out, "No tasks in the list.")?;
        return Ok(());
    }
    writeln!(out, "TO-DO LIST:")?;
    for (position, task) in list.iter() {
        writeln!(out, "{}. {}{}", position, task.description, done_marker(task))?;
    }
    Ok(())
}

fn done_marker(task: &Task) -> &'static str {
    if task.done { " [DONE]" } else { "" }
}

/// Load the list from `path`, run the menu, and save on exit.
pub fn run_todo<R: BufRead, W: Write>(path: impl Into<PathBuf>, console: &mut Console<R, W>) -> Result<TodoList> {
    let path = path.into();
    let Loaded { store, status } = codec::load_or_init::<Task>(&path);
    announce_load(&status, &path, console)?;

    let mut menu = TodoMenu::new(store, path);
    run_menu(&mut menu, console)?;
    Ok(menu.list)
}
