// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sink for the view-state layer (badges, toasts, cached queries).

use mq_core::{QueueCounts, ResourceCategory};

use crate::summary::SyncSummary;

/// Receives sync outcomes. The engine never renders anything itself.
pub trait ViewState: Send + Sync {
    /// Cached views of these categories may be stale.
    fn invalidate(&self, _categories: &[ResourceCategory]) {}

    /// A non-empty pass finished; `counts` is the queue state afterwards.
    fn sync_completed(&self, _summary: &SyncSummary, _counts: QueueCounts) {}
}

/// View state that ignores every notification.
#[derive(Debug, Default)]
pub struct NoopView;

impl ViewState for NoopView {}
