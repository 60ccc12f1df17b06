/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use crate::ViewData;

/// Receiver of view snapshots pushed by the collection layer on each flush.
///
/// The collection layer may call `export_view` from its own flush thread,
/// possibly with overlapping flush cycles, so implementations must be
/// `Send + Sync`. Failures are the exporter's own business and are never
/// returned to the caller.
pub trait ViewExporter: Send + Sync {
    fn export_view(&self, data: &ViewData);
}

pub type ArcViewExporter = Arc<dyn ViewExporter>;
