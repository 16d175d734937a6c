//! Ordered in-memory collection with 1-based positional access.
//!
//! `RecordStore` never hands out a `&mut` into its backing vector. Updates go
//! through [`RecordStore::mutate_at`], which runs a closure against the located
//! record and reports `NotFound` when the position is out of range.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use log::debug;

use crate::error::{Result, TallyError};

/// 1-based index into the current order of a store.
///
/// Positions are recomputed from list order: deleting a record shifts every
/// later position down by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(NonZeroUsize);

impl Position {
    /// Build a position from a 1-based number. Returns `None` for zero.
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Self)
    }

    /// The 1-based number.
    pub fn get(self) -> usize {
        self.0.get()
    }

    fn index(self) -> usize {
        self.0.get() - 1
    }

    fn from_index(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| TallyError::InvalidInput(format!("position '{}'", s.trim())))
    }
}

/// In-memory ordered collection of records.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T> RecordStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end. Returns its position.
    pub fn add(&mut self, record: T) -> Position {
        self.records.push(record);
        Position::from_index(self.records.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `position`, if in range.
    pub fn get(&self, position: Position) -> Option<&T> {
        self.records.get(position.index())
    }

    /// Position of the first record matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<Position>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().position(predicate).map(Position::from_index)
    }

    /// Apply `f` to the record at `position`.
    pub fn mutate_at<F, R>(&mut self, position: Position, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let len = self.records.len();
        match self.records.get_mut(position.index()) {
            Some(record) => Ok(f(record)),
            None => {
                debug!("mutate_at rejected position {} (len {})", position, len);
                Err(out_of_range(position, len))
            }
        }
    }

    /// Remove and return the record at `position`. Later records shift down.
    pub fn delete_at(&mut self, position: Position) -> Result<T> {
        let len = self.records.len();
        if position.get() > len {
            debug!("delete_at rejected position {} (len {})", position, len);
            return Err(out_of_range(position, len));
        }
        Ok(self.records.remove(position.index()))
    }

    /// Records paired with their current positions.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (Position::from_index(i), record))
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

impl<T> From<Vec<T>> for RecordStore<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

fn out_of_range(position: Position, len: usize) -> TallyError {
    TallyError::NotFound(format!("no record at position {} (have {})", position, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: usize) -> Position {
        Position::new(n).unwrap()
    }

    fn letters() -> RecordStore<&'static str> {
        let mut store = RecordStore::new();
        store.add("a");
        store.add("b");
        store.add("c");
        store
    }

    #[test]
    fn test_position_rejects_zero() {
        assert!(Position::new(0).is_none());
        assert_eq!(pos(3).get(), 3);
    }

    #[test]
    fn test_position_from_str() {
        assert_eq!(" 2 ".parse::<Position>().unwrap(), pos(2));
        assert!("0".parse::<Position>().is_err());
        assert!("-1".parse::<Position>().is_err());
        assert!("two".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_parse_error_is_invalid_input() {
        let err = "two".parse::<Position>().unwrap_err();
        assert!(matches!(err, TallyError::InvalidInput(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_add_returns_position() {
        let mut store = RecordStore::new();
        assert_eq!(store.add("x"), pos(1));
        assert_eq!(store.add("y"), pos(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut store = RecordStore::new();
        store.add(("dup", 1));
        store.add(("dup", 2));
        assert_eq!(store.find(|r| r.0 == "dup"), Some(pos(1)));
        assert_eq!(store.find(|r| r.0 == "missing"), None);
    }

    #[test]
    fn test_find_on_empty_store() {
        let store: RecordStore<i32> = RecordStore::new();
        assert_eq!(store.find(|_| true), None);
    }

    #[test]
    fn test_mutate_at() {
        let mut store = RecordStore::from(vec![1, 2, 3]);
        let old = store.mutate_at(pos(2), |v| std::mem::replace(v, 20)).unwrap();
        assert_eq!(old, 2);
        assert_eq!(store.records(), &[1, 20, 3]);
    }

    #[test]
    fn test_mutate_at_out_of_range() {
        let mut store = RecordStore::from(vec![1]);
        let err = store.mutate_at(pos(2), |v| *v = 9).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.records(), &[1]);
    }

    #[test]
    fn test_delete_at_shifts_positions() {
        let mut store = letters();
        assert_eq!(store.delete_at(pos(1)).unwrap(), "a");
        assert_eq!(store.get(pos(1)), Some(&"b"));
        assert_eq!(store.get(pos(2)), Some(&"c"));
        assert_eq!(store.get(pos(3)), None);
    }

    #[test]
    fn test_delete_at_past_end_leaves_store_unchanged() {
        let mut store = letters();
        assert!(store.delete_at(pos(4)).unwrap_err().is_not_found());
        assert_eq!(store, letters());
    }

    #[test]
    fn test_delete_at_on_empty_store() {
        let mut store: RecordStore<&str> = RecordStore::new();
        assert!(store.delete_at(pos(1)).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_iter_positions() {
        let store = letters();
        let listed: Vec<(usize, &str)> = store.iter().map(|(p, r)| (p.get(), *r)).collect();
        assert_eq!(listed, vec![(1, "a"), (2, "b"), (3, "c")]);
    }
}
