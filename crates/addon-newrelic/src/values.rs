use addon_core::error::AddOnResult;
use addon_core::values::{set_path, try_set_path, ValuesTree};
use serde_yaml::Value;

use crate::config::NewRelicAddOnOptions;

pub const CLUSTER_NAME_PATH: &str = "global.cluster";
pub const LICENSE_KEY_PATH: &str = "global.licenseKey";
pub const LOW_DATA_MODE_PATH: &str = "global.lowDataMode";
pub const PROMETHEUS_PATH: &str = "prometheus";
pub const LOGGING_PATH: &str = "logging";
pub const INFRASTRUCTURE_PATH: &str = "infrastructure.enabled";
pub const INFRASTRUCTURE_PRIVILEGED_PATH: &str = "newrelic-infrastructure.privileged";
pub const KSM_PATH: &str = "ksm.enabled";

/// The add-on's writes, in the order they are applied. Disabled features
/// produce no write, so an override can still set them.
pub fn planned_writes(options: &NewRelicAddOnOptions) -> Vec<(&'static str, Value)> {
    let mut writes = Vec::new();

    if let Some(cluster) = non_empty(&options.new_relic_cluster_name) {
        writes.push((CLUSTER_NAME_PATH, Value::from(cluster)));
    }
    if let Some(license_key) = non_empty(&options.new_relic_license_key) {
        writes.push((LICENSE_KEY_PATH, Value::from(license_key)));
    }
    if options.low_data_mode {
        writes.push((LOW_DATA_MODE_PATH, Value::Bool(true)));
    }
    if options.install_prometheus {
        writes.push((PROMETHEUS_PATH, Value::Bool(true)));
    }
    if options.install_logging {
        writes.push((LOGGING_PATH, Value::Bool(true)));
    }
    if options.install_infrastructure {
        writes.push((INFRASTRUCTURE_PATH, Value::Bool(true)));
        writes.push((
            INFRASTRUCTURE_PRIVILEGED_PATH,
            Value::Bool(options.install_infrastructure_privileged),
        ));
    }
    if options.install_ksm {
        writes.push((KSM_PATH, Value::Bool(true)));
    }

    writes
}

/// Build the chart values: the caller's override map with the add-on's
/// settings written over it.
pub fn build_values(options: &NewRelicAddOnOptions) -> ValuesTree {
    let mut values = options.values.clone().unwrap_or_default();
    for (path, value) in planned_writes(options) {
        set_path(&mut values, path, value);
    }
    tracing::debug!(keys = values.len(), "Built chart values");
    values
}

/// Like [`build_values`], but fails when a write would replace a scalar the
/// override map put in its way, e.g. `global: prod` under `global.cluster`.
pub fn build_values_strict(options: &NewRelicAddOnOptions) -> AddOnResult<ValuesTree> {
    let mut values = options.values.clone().unwrap_or_default();
    for (path, value) in planned_writes(options) {
        try_set_path(&mut values, path, value)?;
    }
    Ok(values)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
