// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mq-core: Durable offline mutation queue.
//!
//! This crate provides the action catalog (the closed set of queued
//! mutations and their lifecycle states), the SQLite-backed [`Database`],
//! and the [`ActionStore`] used by both the sync engine and the `mutq` CLI.
//!
//! A successfully synced action is deleted rather than stored with a
//! "synced" status: the absence of a record is the success signal.

pub mod action;
pub mod clock;
pub mod db;
pub mod error;
pub mod id;
pub mod store;

pub use action::{
    ActionPayload, ActionStatus, ActionType, OfflineAction, QueueCounts, ResourceCategory,
};
pub use clock::{ClockSource, SystemClock};
pub use db::Database;
pub use error::{Error, Result};
pub use store::{ActionStore, StoreHandle};
