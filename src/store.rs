// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Key-value persistence for JSON-serialized collections.
//!
//! Every value lives under an `(owner, key)` pair in the `kv` table. Reads
//! never fail: absent, unreadable or malformed values come back as the
//! caller's default. Writes and removals notify every live subscriber.

use std::cell::RefCell;
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::db;

pub const DEFAULT_OWNER: &str = "local";

/// Fixed keys of the collections this crate persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Expenses,
    Incomes,
    Budgets,
    Goals,
    Investments,
    Settings,
}

impl StoreKey {
    pub const ALL: [StoreKey; 6] = [
        StoreKey::Expenses,
        StoreKey::Incomes,
        StoreKey::Budgets,
        StoreKey::Goals,
        StoreKey::Investments,
        StoreKey::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Expenses => "budget-tracker-expenses",
            StoreKey::Incomes => "budget-tracker-incomes",
            StoreKey::Budgets => "budget-tracker-budgets",
            StoreKey::Goals => "budget-tracker-goals",
            StoreKey::Investments => "budget-tracker-investments",
            StoreKey::Settings => "budget-tracker-settings",
        }
    }

    /// Name of the collection inside an export document.
    pub fn export_name(&self) -> &'static str {
        match self {
            StoreKey::Expenses => "expenses",
            StoreKey::Incomes => "incomes",
            StoreKey::Budgets => "budgets",
            StoreKey::Goals => "goals",
            StoreKey::Investments => "investments",
            StoreKey::Settings => "settings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub key: String,
}

pub struct KvStore {
    conn: Connection,
    owner: String,
    subscribers: RefCell<Vec<Sender<StoreChange>>>,
}

impl KvStore {
    pub fn new(conn: Connection, owner: impl Into<String>) -> Result<Self> {
        db::init_schema(&conn)?;
        Ok(KvStore {
            conn,
            owner: owner.into(),
            subscribers: RefCell::new(Vec::new()),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        KvStore::new(Connection::open_in_memory()?, DEFAULT_OWNER)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Hand the connection back, e.g. to reopen it for another owner.
    pub fn into_conn(self) -> Connection {
        self.conn
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw: Option<String> = match self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE owner=?1 AND key=?2",
                params![&self.owner, key],
                |r| r.get(0),
            )
            .optional()
        {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read key, using default");
                return default;
            }
        };
        match raw {
            Some(s) => match serde_json::from_str(&s) {
                Ok(v) => v,
                Err(err) => {
                    tracing::warn!(key, error = %err, "malformed value, using default");
                    default
                }
            },
            None => default,
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)
            .with_context(|| format!("Failed to serialize value for '{}'", key))?;
        self.conn
            .execute(
                "INSERT INTO kv(owner, key, value, updated_at) VALUES (?1, ?2, ?3, datetime('now'))
                 ON CONFLICT(owner, key) DO UPDATE SET value=excluded.value, updated_at=excluded.updated_at",
                params![&self.owner, key, json],
            )
            .with_context(|| format!("Failed to write '{}'", key))?;
        tracing::debug!(key, owner = %self.owner, bytes = json.len(), "stored");
        self.notify(key);
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute(
                "DELETE FROM kv WHERE owner=?1 AND key=?2",
                params![&self.owner, key],
            )
            .with_context(|| format!("Failed to remove '{}'", key))?;
        tracing::debug!(key, owner = %self.owner, "removed");
        self.notify(key);
        Ok(())
    }

    /// Remove every known collection of this owner.
    pub fn clear_all(&self) -> Result<()> {
        for key in StoreKey::ALL {
            self.remove(key.as_str())?;
        }
        Ok(())
    }

    /// Register for change notifications. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> Receiver<StoreChange> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.borrow_mut().push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self, key: &str) {
        let change = StoreChange {
            key: key.to_string(),
        };
        self.subscribers
            .borrow_mut()
            .retain(|tx| tx.send(change.clone()).is_ok());
    }
}
