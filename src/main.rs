use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tally::codec::{self, Loaded, TextCodec};
use tally::TallyError;
use tally::listing;
use tally::shell::{self, Console};
use tally::store::{RecordStore, Student, Task};

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, GradesAction, TodoAction};
use config::Config;

fn setup_logging(config: &Config) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tally")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("tally.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level()))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Grades { file, action } => {
            let path = file.clone().unwrap_or_else(|| config.files.students.clone());
            match action {
                None => run_grades_shell(&path, config),
                Some(action) => {
                    handle_grades_action(action, &path, config.display.average_precision, &mut io::stdout().lock())
                }
            }
        }
        Commands::Todo { file, action } => {
            let path = file.clone().unwrap_or_else(|| config.files.tasks.clone());
            match action {
                None => run_todo_shell(&path),
                Some(action) => handle_todo_action(action, &path, &mut io::stdout().lock()),
            }
        }
    }
}

fn run_grades_shell(path: &Path, config: &Config) -> Result<()> {
    info!("Launching grade book menu on {}", path.display());
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    shell::run_grades(path, config.display.average_precision, &mut console).context("Grade book session failed")?;
    Ok(())
}

fn run_todo_shell(path: &Path) -> Result<()> {
    info!("Launching to-do menu on {}", path.display());
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    shell::run_todo(path, &mut console).context("To-do session failed")?;
    Ok(())
}

/// Load for a one-shot action. Mutations refuse to run over a file that
/// could not be read, since saving would replace it with an empty store.
fn load_for_action<T: TextCodec>(path: &Path, mutating: bool) -> tally::Result<RecordStore<T>> {
    let Loaded { store, status } = codec::load_or_init::<T>(path);
    match status {
        codec::LoadStatus::Unreadable(e) | codec::LoadStatus::Malformed(e) => {
            if mutating {
                return Err(TallyError::Refused {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
            eprintln!("{} {}: {}", "Warning:".yellow(), path.display(), e);
        }
        codec::LoadStatus::Restored(_) | codec::LoadStatus::Fresh => {}
    }
    Ok(store)
}

fn handle_grades_action<W: Write>(action: &GradesAction, path: &Path, precision: usize, out: &mut W) -> Result<()> {
    info!("Grade book action: {:?}", action);
    let mut book = load_for_action::<Student>(path, action.is_mutation())?;

    match action {
        GradesAction::List { json } => {
            if *json {
                writeln!(out, "{}", listing::students_json(&book)?)?;
            } else {
                shell::write_students(out, &book, precision)?;
            }
        }
        GradesAction::AddStudent { name, id } => {
            book.add_student(name.as_str(), *id);
            writeln!(out, "{} {} (ID {})", "Added:".green(), name, id)?;
        }
        GradesAction::AddGrade { id, course, grade } => {
            book.set_grade(*id, course, *grade).context("Failed to add grade")?;
            writeln!(out, "{} {} = {} for ID {}", "Graded:".green(), course, grade, id)?;
        }
        GradesAction::Average { id } => {
            let avg = book.average_of(*id).context("Failed to compute average")?;
            writeln!(out, "Average Grade: {:.*}", precision, avg)?;
        }
    }
    out.flush()?;

    if action.is_mutation() {
        codec::save(path, &book).context(format!("Failed to save {}", path.display()))?;
    }
    Ok(())
}

fn handle_todo_action<W: Write>(action: &TodoAction, path: &Path, out: &mut W) -> Result<()> {
    info!("To-do action: {:?}", action);
    let mut list = load_for_action::<Task>(path, action.is_mutation())?;

    match action {
        TodoAction::List { json } => {
            if *json {
                writeln!(out, "{}", listing::tasks_json(&list)?)?;
            } else {
                shell::write_tasks(out, &list)?;
            }
        }
        TodoAction::Add { description } => {
            let position = list.add_task(description.as_str());
            writeln!(out, "{} {}. {}", "Added:".green(), position, description)?;
        }
        TodoAction::Done { position } => {
            list.mark_done(*position).context("Invalid task number")?;
            writeln!(out, "{} Task {} marked as done.", "Done:".green(), position)?;
        }
        TodoAction::Delete { position } => {
            list.delete_task(*position).context("Invalid task number")?;
            writeln!(out, "{} Task {} deleted.", "Deleted:".red(), position)?;
        }
    }
    out.flush()?;

    if action.is_mutation() {
        codec::save(path, &list).context(format!("Failed to save {}", path.display()))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
