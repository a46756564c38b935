// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::marker::PhantomData;

use anyhow::{Result, anyhow};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{Budget, Expense, Goal, Income, Investment, RecordId, Settings};
use crate::store::{KvStore, StoreKey};

/// A record kept in one of the fixed collections.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const KEY: StoreKey;

    fn id(&self) -> &RecordId;
    fn set_id(&mut self, id: RecordId);
}

macro_rules! impl_record {
    ($ty:ty, $key:expr) => {
        impl Record for $ty {
            const KEY: StoreKey = $key;

            fn id(&self) -> &RecordId {
                &self.id
            }

            fn set_id(&mut self, id: RecordId) {
                self.id = id;
            }
        }
    };
}

impl_record!(Expense, StoreKey::Expenses);
impl_record!(Income, StoreKey::Incomes);
impl_record!(Budget, StoreKey::Budgets);
impl_record!(Goal, StoreKey::Goals);
impl_record!(Investment, StoreKey::Investments);

/// CRUD over one collection. Records come back in insertion order.
pub struct RecordStore<'a, T> {
    store: &'a KvStore,
    _marker: PhantomData<T>,
}

impl<'a, T: Record> RecordStore<'a, T> {
    pub fn new(store: &'a KvStore) -> Self {
        RecordStore {
            store,
            _marker: PhantomData,
        }
    }

    pub fn get_all(&self) -> Vec<T> {
        self.store.get(T::KEY.as_str(), Vec::new())
    }

    pub fn get(&self, id: &RecordId) -> Option<T> {
        self.get_all().into_iter().find(|r| r.id() == id)
    }

    pub fn save_all(&self, records: &[T]) -> Result<()> {
        self.store.set(T::KEY.as_str(), records)
    }

    pub fn add(&self, record: T) -> Result<()> {
        let mut all = self.get_all();
        all.push(record);
        self.save_all(&all)
    }

    /// Replace the record stored under `id`, keeping `id`. Returns false and
    /// writes nothing when no record matches.
    pub fn update(&self, id: &RecordId, mut record: T) -> Result<bool> {
        let mut all = self.get_all();
        let Some(slot) = all.iter_mut().find(|r| r.id() == id) else {
            return Ok(false);
        };
        record.set_id(id.clone());
        *slot = record;
        self.save_all(&all)?;
        Ok(true)
    }

    /// Returns false and writes nothing when no record matches.
    pub fn delete(&self, id: &RecordId) -> Result<bool> {
        let mut all = self.get_all();
        let before = all.len();
        all.retain(|r| r.id() != id);
        if all.len() == before {
            return Ok(false);
        }
        self.save_all(&all)?;
        Ok(true)
    }

    /// Resolve a full id or an unambiguous id prefix as typed by a user.
    pub fn resolve(&self, prefix: &str) -> Result<RecordId> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(anyhow!("Empty id"));
        }
        let all = self.get_all();
        if let Some(r) = all.iter().find(|r| r.id().as_str() == prefix) {
            return Ok(r.id().clone());
        }
        let mut hits = all.iter().filter(|r| r.id().as_str().starts_with(prefix));
        match (hits.next(), hits.next()) {
            (Some(r), None) => Ok(r.id().clone()),
            (Some(_), Some(_)) => Err(anyhow!("Id prefix '{}' is ambiguous", prefix)),
            (None, _) => Err(anyhow!(
                "No record with id '{}' in {}",
                prefix,
                T::KEY.export_name()
            )),
        }
    }
}

pub struct SettingsStore<'a> {
    store: &'a KvStore,
}

impl<'a> SettingsStore<'a> {
    pub fn new(store: &'a KvStore) -> Self {
        SettingsStore { store }
    }

    pub fn get(&self) -> Settings {
        self.store
            .get(StoreKey::Settings.as_str(), Settings::default())
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        self.store.set(StoreKey::Settings.as_str(), settings)
    }
}
