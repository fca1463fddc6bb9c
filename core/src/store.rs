// src/store.rs

//! In-memory keyed record stores.
//!
//! A `RecordStore<T>` owns a `BTreeMap<u64, T>` and the `IdSequence` that hands out its
//! keys. Both sit behind one `RwLock`, and every insert runs "check, take next id,
//! insert" inside a single write section, so concurrent creates never observe the same
//! id. Callers must not hold anything from the store across an `.await`: every method
//! copies data out and releases the lock before returning.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{event, Level};

/// A record addressed by a numeric id.
pub trait Record: Clone + Send + Sync + 'static {
  fn id(&self) -> u64;
}

/// Monotonic id source: next id is the highest id ever seen plus one.
///
/// Seeding with an explicit id advances the sequence past it. The sequence never moves
/// backwards, so ids of removed records are not handed out again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdSequence {
  last: u64,
}

impl IdSequence {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn last(&self) -> u64 {
    self.last
  }

  pub fn peek_next(&self) -> u64 {
    self.last + 1
  }

  pub fn advance(&mut self) -> u64 {
    self.last += 1;
    self.last
  }

  pub fn observe(&mut self, id: u64) {
    self.last = self.last.max(id);
  }
}

struct StoreInner<T> {
  records: BTreeMap<u64, T>,
  ids: IdSequence,
}

pub struct RecordStore<T: Record> {
  name: &'static str,
  inner: RwLock<StoreInner<T>>,
}

impl<T: Record> RecordStore<T> {
  pub fn new(name: &'static str) -> Self {
    Self {
      name,
      inner: RwLock::new(StoreInner {
        records: BTreeMap::new(),
        ids: IdSequence::new(),
      }),
    }
  }

  /// Builds a store pre-populated with `records`, keyed by their own ids.
  pub fn seeded(name: &'static str, records: impl IntoIterator<Item = T>) -> Self {
    let store = Self::new(name);
    store.seed(records);
    store
  }

  pub fn seed(&self, records: impl IntoIterator<Item = T>) {
    let mut inner = self.inner.write();
    let mut count = 0usize;
    for record in records {
      let id = record.id();
      inner.ids.observe(id);
      inner.records.insert(id, record);
      count += 1;
    }
    event!(Level::DEBUG, store = self.name, count, last_id = inner.ids.last(), "Store seeded.");
  }

  pub fn get(&self, id: u64) -> Option<T> {
    self.inner.read().records.get(&id).cloned()
  }

  /// All records in ascending id order, which is also insertion order.
  pub fn list(&self) -> Vec<T> {
    self.inner.read().records.values().cloned().collect()
  }

  pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
    self.inner.read().records.values().filter(|r| predicate(r)).cloned().collect()
  }

  pub fn len(&self) -> usize {
    self.inner.read().records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn last_id(&self) -> u64 {
    self.inner.read().ids.last()
  }

  /// Builds and inserts a record under the write lock.
  ///
  /// `build` sees the current records and the id the new record will get. If it returns
  /// an error nothing is inserted and the sequence does not advance.
  pub fn insert_with<E>(&self, build: impl FnOnce(&BTreeMap<u64, T>, u64) -> Result<T, E>) -> Result<T, E> {
    let mut inner = self.inner.write();
    let id = inner.ids.peek_next();
    let record = build(&inner.records, id)?;
    debug_assert_eq!(record.id(), id, "record built with an id other than the one assigned");
    inner.ids.advance();
    inner.records.insert(id, record.clone());
    event!(Level::DEBUG, store = self.name, id, "Record inserted.");
    Ok(record)
  }

  /// Applies `change` to the record with `id`, returning the updated copy.
  pub fn update(&self, id: u64, change: impl FnOnce(&mut T)) -> Option<T> {
    let mut inner = self.inner.write();
    let record = inner.records.get_mut(&id)?;
    change(record);
    Some(record.clone())
  }
}
