//! In-memory record stores for Tally.
//!
//! A single generic [`RecordStore`] backs both programs:
//! - [`Gradebook`]: students looked up by id (first match wins)
//! - [`TodoList`]: tasks addressed by 1-based [`Position`]
//!
//! # Example
//!
//! ```
//! use tally::store::{Gradebook, Position, TodoList};
//!
//! let mut book = Gradebook::new();
//! book.add_student("Ada", 7);
//! book.set_grade(7, "Math", 90)?;
//! assert_eq!(book.average_of(7)?, 90.0);
//!
//! let mut todo = TodoList::new();
//! let first = todo.add_task("Buy milk");
//! todo.mark_done(first)?;
//! assert!(todo.delete_task(Position::new(2).unwrap()).is_err());
//! # Ok::<(), tally::TallyError>(())
//! ```

mod record_store;
mod records;

pub use record_store::{Position, RecordStore};
pub use records::{Gradebook, Student, Task, TodoList};
