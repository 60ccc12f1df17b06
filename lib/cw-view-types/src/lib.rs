/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod tag;
pub use tag::{Tag, TagKey};

mod aggregation;
pub use aggregation::{AggregationData, AggregationKind, DistributionData};

mod view;
pub use view::{Row, ViewData};

mod export;
pub use export::{ArcViewExporter, ViewExporter};

pub mod registry;
