/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use foldhash::fast::FixedState;
use log::debug;

use crate::{ArcViewExporter, ViewData};

static VIEW_EXPORTER_REGISTRY: Mutex<HashMap<String, ArcViewExporter, FixedState>> =
    Mutex::new(HashMap::with_hasher(FixedState::with_seed(0)));

fn lock_registry() -> MutexGuard<'static, HashMap<String, ArcViewExporter, FixedState>> {
    VIEW_EXPORTER_REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Register an exporter under `name`, returning the one it replaced.
pub fn register_exporter(name: &str, exporter: ArcViewExporter) -> Option<ArcViewExporter> {
    let mut ht = lock_registry();
    let old = ht.insert(name.to_string(), exporter);
    if old.is_some() {
        debug!("view exporter {name} replaced");
    }
    old
}

pub fn unregister_exporter(name: &str) -> Option<ArcViewExporter> {
    let mut ht = lock_registry();
    ht.remove(name)
}

pub fn registered_names() -> HashSet<String> {
    let ht = lock_registry();
    ht.keys().cloned().collect()
}

/// Push one snapshot to every registered exporter.
///
/// The exporters are called after the registry lock is released, so a slow
/// exporter does not block registration.
pub fn export_view(data: &ViewData) {
    let exporters: Vec<ArcViewExporter> = {
        let ht = lock_registry();
        ht.values().cloned().collect()
    };
    for exporter in exporters {
        exporter.export_view(data);
    }
}
