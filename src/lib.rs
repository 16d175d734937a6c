//! Tally - a student grade book and a to-do list kept in flat text files
//!
//! Both programs share one shape: an in-memory [`store::RecordStore`] loaded
//! from disk at startup by the [`codec`], mutated by an interactive
//! [`shell`], and written back on exit.

pub mod codec;
pub mod error;
pub mod listing;
pub mod shell;
pub mod store;

pub use error::{Result, TallyError};
