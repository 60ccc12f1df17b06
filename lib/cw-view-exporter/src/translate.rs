/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use chrono::{DateTime, Utc};

use cw_view_types::{AggregationData, Row, Tag, ViewData};

use crate::{Dimension, MetricRecord, MetricUnit, TranslateError, sanitize_name};

/// Result of translating one view snapshot.
///
/// Rows are translated independently, a failed row never hides the records
/// of the other rows.
#[derive(Debug, Default)]
pub struct Translation {
    pub records: Vec<MetricRecord>,
    pub errors: Vec<TranslateError>,
}

pub fn translate(vd: &ViewData) -> Translation {
    let metric_name = sanitize_name(&vd.name);
    let mut translation = Translation {
        records: Vec::with_capacity(vd.rows.len()),
        errors: Vec::new(),
    };

    for row in &vd.rows {
        match build_record(vd, &metric_name, &vd.end, row) {
            Ok(record) => translation.records.push(record),
            Err(e) => translation.errors.push(e),
        }
    }
    translation
}

fn dimensions_from_tags(tags: &[Tag]) -> Vec<Dimension> {
    tags.iter()
        .map(|t| Dimension {
            name: t.key.name().to_string(),
            value: t.value.clone(),
        })
        .collect()
}

fn build_record(
    vd: &ViewData,
    metric_name: &str,
    time: &DateTime<Utc>,
    row: &Row,
) -> Result<MetricRecord, TranslateError> {
    let value = match &row.data {
        AggregationData::Count(v) => *v as f64,
        AggregationData::Sum(v) => *v,
        AggregationData::LastValue(v) => *v,
        AggregationData::Distribution(_) | AggregationData::Other(_) => {
            return Err(TranslateError::UnsupportedAggregation {
                view: vd.name.clone(),
                kind: row.data.kind(),
            });
        }
    };

    Ok(MetricRecord {
        name: metric_name.to_string(),
        value,
        unit: MetricUnit::None,
        dimensions: dimensions_from_tags(&row.tags),
        timestamp: *time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_view_types::{AggregationKind, DistributionData, TagKey};

    fn end_time() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn test_tags() -> Vec<Tag> {
        vec![Tag::new(TagKey::new("test"), "testvalue")]
    }

    fn expected_record(value: f64) -> MetricRecord {
        MetricRecord {
            name: "foo".to_string(),
            value,
            unit: MetricUnit::None,
            dimensions: vec![Dimension {
                name: "test".to_string(),
                value: "testvalue".to_string(),
            }],
            timestamp: end_time(),
        }
    }

    #[test]
    fn count() {
        let vd = ViewData::new("foo", AggregationKind::Count, end_time())
            .with_row(Row::new(test_tags(), AggregationData::Count(1)));
        let t = translate(&vd);
        assert!(t.errors.is_empty());
        assert_eq!(t.records, vec![expected_record(1.0)]);
    }

    #[test]
    fn sum() {
        let vd = ViewData::new("foo", AggregationKind::Sum, end_time())
            .with_row(Row::new(test_tags(), AggregationData::Sum(1.0)));
        let t = translate(&vd);
        assert!(t.errors.is_empty());
        assert_eq!(t.records, vec![expected_record(1.0)]);
    }

    #[test]
    fn last_value() {
        let vd = ViewData::new("foo", AggregationKind::LastValue, end_time())
            .with_row(Row::new(test_tags(), AggregationData::LastValue(1.0)));
        let t = translate(&vd);
        assert!(t.errors.is_empty());
        assert_eq!(t.records, vec![expected_record(1.0)]);
    }

    #[test]
    fn count_large() {
        let vd = ViewData::new("foo", AggregationKind::Count, end_time())
            .with_row(Row::new(Vec::new(), AggregationData::Count(1 << 40)));
        let t = translate(&vd);
        assert_eq!(t.records.len(), 1);
        assert_eq!(t.records[0].value, 1_099_511_627_776.0);
        assert!(t.records[0].dimensions.is_empty());
    }

    #[test]
    fn dimensions_verbatim_in_order() {
        let tags = vec![
            Tag::new(TagKey::new("zone"), "us-east-1a"),
            Tag::new(TagKey::new("Method Name"), "/grpc.Health/Check"),
            Tag::new(TagKey::new("a"), ""),
        ];
        let vd = ViewData::new(
            "grpc.io/server/completed_rpcs",
            AggregationKind::Count,
            end_time(),
        )
        .with_row(Row::new(tags, AggregationData::Count(7)));
        let t = translate(&vd);
        let record = &t.records[0];
        assert_eq!(record.name, "grpc_io_server_completed_rpcs");
        let dims: Vec<(&str, &str)> = record
            .dimensions
            .iter()
            .map(|d| (d.name.as_str(), d.value.as_str()))
            .collect();
        assert_eq!(
            dims,
            vec![
                ("zone", "us-east-1a"),
                ("Method Name", "/grpc.Health/Check"),
                ("a", ""),
            ]
        );
    }

    #[test]
    fn distribution_unsupported() {
        let vd = ViewData::new("latency", AggregationKind::Distribution, end_time()).with_row(
            Row::new(
                test_tags(),
                AggregationData::Distribution(DistributionData {
                    count: 2,
                    min: 1.0,
                    max: 3.0,
                    mean: 2.0,
                    sum_of_squared_dev: 2.0,
                    bounds: vec![2.0],
                    bucket_counts: vec![1, 1],
                }),
            ),
        );
        let t = translate(&vd);
        assert!(t.records.is_empty());
        assert_eq!(
            t.errors,
            vec![TranslateError::UnsupportedAggregation {
                view: "latency".to_string(),
                kind: AggregationKind::Distribution,
            }]
        );
        assert!(t.errors[0].to_string().contains("Distribution"));
    }

    #[test]
    fn other_unsupported() {
        let kind = AggregationKind::Other("Percentile".to_string());
        let vd = ViewData::new("p99", kind, end_time()).with_row(Row::new(
            test_tags(),
            AggregationData::Other("Percentile".to_string()),
        ));
        let t = translate(&vd);
        assert!(t.records.is_empty());
        assert_eq!(t.errors.len(), 1);
        assert!(t.errors[0].to_string().contains("Percentile"));
    }

    #[test]
    fn partial_success() {
        let vd = ViewData::new("mixed", AggregationKind::Sum, end_time())
            .with_row(Row::new(test_tags(), AggregationData::Sum(2.5)))
            .with_row(Row::new(
                test_tags(),
                AggregationData::Distribution(DistributionData::default()),
            ))
            .with_row(Row::new(test_tags(), AggregationData::LastValue(-4.0)));
        let t = translate(&vd);
        assert_eq!(t.errors.len(), 1);
        let values: Vec<f64> = t.records.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![2.5, -4.0]);
    }

    #[test]
    fn timestamp_is_end() {
        let mut vd = ViewData::new("foo", AggregationKind::Sum, end_time())
            .with_row(Row::new(test_tags(), AggregationData::Sum(3.0)));
        vd.start = DateTime::from_timestamp(1_699_999_940, 0).unwrap();
        let t = translate(&vd);
        assert_eq!(t.records[0].timestamp, vd.end);
        assert_ne!(t.records[0].timestamp, vd.start);
    }

    #[test]
    fn no_rows() {
        let vd = ViewData::new("foo", AggregationKind::Count, end_time());
        let t = translate(&vd);
        assert!(t.records.is_empty());
        assert!(t.errors.is_empty());
    }
}
