/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use log::warn;
use yaml_rust::Yaml;

use super::ExporterConfig;

fn bool_value(v: &Yaml) -> anyhow::Result<bool> {
    let b = match v {
        Yaml::Boolean(b) => *b,
        Yaml::Integer(0) => false,
        Yaml::Integer(1) => true,
        Yaml::String(s) if s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true") => {
            true
        }
        Yaml::String(s) if s.eq_ignore_ascii_case("no") || s.eq_ignore_ascii_case("false") => {
            false
        }
        _ => return Err(anyhow!("expect a boolean, got {v:?}")),
    };
    Ok(b)
}

fn str_value(v: &Yaml) -> anyhow::Result<String> {
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("expect a string, got {v:?}"))
}

fn count_value(v: &Yaml) -> anyhow::Result<usize> {
    let n = v
        .as_i64()
        .ok_or_else(|| anyhow!("expect an integer, got {v:?}"))?;
    usize::try_from(n).map_err(|_| anyhow!("expect a non-negative integer, got {n}"))
}

impl ExporterConfig {
    /// Load the config from a yaml map.
    ///
    /// Keys are case insensitive and `-` may be used in place of `_`.
    /// The error callback can not be set in yaml, set `on_error` after loading.
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        let Yaml::Hash(map) = v else {
            return Err(anyhow!(
                "yaml value type for 'cloudwatch exporter config' should be 'map'"
            ));
        };

        let mut config = ExporterConfig::default();
        for (k, v) in map {
            let Some(k) = k.as_str() else {
                return Err(anyhow!("non-string key {k:?} in cloudwatch exporter config"));
            };
            config
                .set_by_yaml_kv(k, v)
                .context(format!("invalid value for key {k}"))?;
        }
        config.check().context("invalid cloudwatch exporter config")?;
        Ok(config)
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match k.to_ascii_lowercase().replace('-', "_").as_str() {
            "namespace" => self.namespace = str_value(v)?,
            "use_shared_aws_config" => {
                warn!("deprecated config key '{k}', please use 'use_shared_config' instead");
                self.use_shared_config = bool_value(v)?;
            }
            "use_shared_config" => self.use_shared_config = bool_value(v)?,
            "use_env_credentials" => self.use_env_credentials = bool_value(v)?,
            "region" => self.region = str_value(v)?,
            "max_data_points" => self.max_data_points = count_value(v)?,
            _ => return Err(anyhow!("unknown key")),
        }
        Ok(())
    }
}
