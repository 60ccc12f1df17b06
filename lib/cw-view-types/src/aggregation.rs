/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AggregationKind {
    Count,
    Sum,
    LastValue,
    Distribution,
    Other(String),
}

impl AggregationKind {
    pub fn as_str(&self) -> &str {
        match self {
            AggregationKind::Count => "Count",
            AggregationKind::Sum => "Sum",
            AggregationKind::LastValue => "LastValue",
            AggregationKind::Distribution => "Distribution",
            AggregationKind::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Histogram state of a distribution aggregation.
///
/// `bucket_counts` has one more entry than `bounds`, the last bucket holds
/// every value greater than or equal to the last bound.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistributionData {
    pub count: i64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub sum_of_squared_dev: f64,
    pub bounds: Vec<f64>,
    pub bucket_counts: Vec<i64>,
}

/// The aggregated value of one row.
#[derive(Clone, Debug, PartialEq)]
pub enum AggregationData {
    Count(i64),
    Sum(f64),
    LastValue(f64),
    Distribution(DistributionData),
    /// A kind produced by the collection layer that has no typed variant here
    Other(String),
}

impl AggregationData {
    pub fn kind(&self) -> AggregationKind {
        match self {
            AggregationData::Count(_) => AggregationKind::Count,
            AggregationData::Sum(_) => AggregationKind::Sum,
            AggregationData::LastValue(_) => AggregationKind::LastValue,
            AggregationData::Distribution(_) => AggregationKind::Distribution,
            AggregationData::Other(name) => AggregationKind::Other(name.clone()),
        }
    }
}
