//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - grades: grade book menu, or a one-shot grade book action
//! - todo: to-do list menu, or a one-shot list action

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally::store::Position;

/// Tally - a grade book and a to-do list kept in flat text files
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Student grade book (interactive menu when no action is given)
    Grades {
        /// Student data file (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        action: Option<GradesAction>,
    },

    /// To-do list (interactive menu when no action is given)
    Todo {
        /// Task data file (overrides config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        action: Option<TodoAction>,
    },
}

/// One-shot grade book actions
#[derive(Subcommand, Debug, Clone)]
pub enum GradesAction {
    /// Show every student with grades and average
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a student with no grades
    AddStudent {
        /// Student name
        name: String,

        /// Student ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Set (or overwrite) a course grade for a student
    AddGrade {
        /// Student ID
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// Course name
        course: String,

        /// Grade for the course
        #[arg(allow_negative_numbers = true)]
        grade: i64,
    },

    /// Print a student's average grade
    Average {
        /// Student ID
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

impl GradesAction {
    /// Whether the action changes the grade book
    pub fn is_mutation(&self) -> bool {
        matches!(self, GradesAction::AddStudent { .. } | GradesAction::AddGrade { .. })
    }
}

/// One-shot to-do list actions
#[derive(Subcommand, Debug, Clone)]
pub enum TodoAction {
    /// Show the numbered task list
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Append a task
    Add {
        /// Task description
        description: String,
    },

    /// Mark the task at a position as done
    Done {
        /// 1-based task number
        position: Position,
    },

    /// Delete the task at a position
    Delete {
        /// 1-based task number
        position: Position,
    },
}

impl TodoAction {
    /// Whether the action changes the list
    pub fn is_mutation(&self) -> bool {
        !matches!(self, TodoAction::List { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["tally"]).is_err());
    }

    #[test]
    fn test_grades_interactive() {
        let cli = Cli::try_parse_from(["tally", "grades"]).unwrap();
        match cli.command {
            Commands::Grades { file, action } => {
                assert!(file.is_none());
                assert!(action.is_none());
            }
            _ => panic!("Expected grades command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["tally", "todo", "-v", "-c", "/path/to/tally.yml"]).unwrap();
        assert!(cli.is_verbose());
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/tally.yml")));
    }

    #[test]
    fn test_file_override() {
        let cli = Cli::try_parse_from(["tally", "todo", "--file", "my.txt", "list"]).unwrap();
        match cli.command {
            Commands::Todo { file, action } => {
                assert_eq!(file, Some(PathBuf::from("my.txt")));
                assert!(matches!(action, Some(TodoAction::List { json: false })));
            }
            _ => panic!("Expected todo command"),
        }
    }

    #[test]
    fn test_add_grade_with_negative_values() {
        let cli = Cli::try_parse_from(["tally", "grades", "add-grade", "-3", "Math", "-10"]).unwrap();
        match cli.command {
            Commands::Grades {
                action: Some(GradesAction::AddGrade { id, course, grade }),
                ..
            } => {
                assert_eq!(id, -3);
                assert_eq!(course, "Math");
                assert_eq!(grade, -10);
            }
            _ => panic!("Expected add-grade action"),
        }
    }

    #[test]
    fn test_todo_done_parses_position() {
        let cli = Cli::try_parse_from(["tally", "todo", "done", "2"]).unwrap();
        match cli.command {
            Commands::Todo {
                action: Some(TodoAction::Done { position }),
                ..
            } => assert_eq!(position.get(), 2),
            _ => panic!("Expected done action"),
        }
    }

    #[test]
    fn test_todo_rejects_position_zero() {
        assert!(Cli::try_parse_from(["tally", "todo", "delete", "0"]).is_err());
        assert!(Cli::try_parse_from(["tally", "todo", "delete", "first"]).is_err());
    }

    #[test]
    fn test_mutation_flags() {
        assert!(!GradesAction::List { json: true }.is_mutation());
        assert!(!GradesAction::Average { id: 1 }.is_mutation());
        assert!(GradesAction::AddStudent { name: "Ada".into(), id: 7 }.is_mutation());
        assert!(!TodoAction::List { json: false }.is_mutation());
        assert!(TodoAction::Add { description: "x".into() }.is_mutation());
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
