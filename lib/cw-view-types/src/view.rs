/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use chrono::{DateTime, Utc};

use crate::{AggregationData, AggregationKind, Tag};

/// One tag combination and its aggregated value.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub tags: Vec<Tag>,
    pub data: AggregationData,
}

impl Row {
    pub fn new(tags: Vec<Tag>, data: AggregationData) -> Self {
        Row { tags, data }
    }
}

/// Snapshot of a named view at flush time.
///
/// Rows are kept in the order the collection layer produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewData {
    pub name: String,
    pub aggregation: AggregationKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub rows: Vec<Row>,
}

impl ViewData {
    pub fn new(name: &str, aggregation: AggregationKind, end: DateTime<Utc>) -> Self {
        ViewData {
            name: name.to_string(),
            aggregation,
            start: end,
            end,
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }
}
