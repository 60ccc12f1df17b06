/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// Convert a view name to a CloudWatch metric name.
///
/// ASCII letters and digits are kept, every maximal run of other chars is
/// replaced by a single `_`.
pub fn sanitize_name(name: &str) -> String {
    let mut s = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            s.push(c);
            in_run = false;
        } else if !in_run {
            s.push('_');
            in_run = true;
        }
    }
    s
}
