use serde::{Deserialize, Serialize};
use std::path::Path;

use addon_core::config::from_yaml_file;
use addon_core::error::AddOnResult;
use addon_core::values::ValuesTree;

pub const DEFAULT_REPOSITORY: &str = "https://helm-charts.newrelic.com";
pub const DEFAULT_CHART: &str = "nri-bundle";
pub const DEFAULT_NAMESPACE: &str = "newrelic";
pub const DEFAULT_VERSION: &str = "3.2.11";
pub const DEFAULT_RELEASE: &str = "newrelic-bundle";

/// Caller-supplied add-on options. Every field is optional; unset fields
/// fall back to the defaults in [`NewRelicAddOnOptions::default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewRelicAddOnProps {
    /// Namespace for the add-on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_relic_license_key: Option<String>,
    /// Kubernetes cluster name as shown in New Relic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_relic_cluster_name: Option<String>,
    /// Helm chart version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_data_mode: Option<bool>,
    /// Install the infrastructure DaemonSet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_infrastructure: Option<bool>,
    /// Run the infrastructure DaemonSet privileged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_infrastructure_privileged: Option<bool>,
    /// Install kube-state-metrics.
    #[serde(rename = "installKSM", skip_serializing_if = "Option::is_none")]
    pub install_ksm: Option<bool>,
    /// Install the Prometheus OpenMetrics integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_prometheus: Option<bool>,
    /// Install the Fluent Bit logging integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_logging: Option<bool>,
    /// Free-form chart values, written under the add-on's own settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<ValuesTree>,
}

impl NewRelicAddOnProps {
    /// The default table, with every defaulted field set.
    pub fn defaults() -> Self {
        NewRelicAddOnOptions::default().into()
    }

    pub fn from_file(path: &Path) -> AddOnResult<Self> {
        from_yaml_file(path)
    }

    /// Field-wise merge where fields set on `self` win over `base`.
    /// An explicit `false` counts as set.
    pub fn merge_over(self, base: Self) -> Self {
        Self {
            namespace: self.namespace.or(base.namespace),
            new_relic_license_key: self.new_relic_license_key.or(base.new_relic_license_key),
            new_relic_cluster_name: self.new_relic_cluster_name.or(base.new_relic_cluster_name),
            version: self.version.or(base.version),
            repository: self.repository.or(base.repository),
            release: self.release.or(base.release),
            chart: self.chart.or(base.chart),
            low_data_mode: self.low_data_mode.or(base.low_data_mode),
            install_infrastructure: self.install_infrastructure.or(base.install_infrastructure),
            install_infrastructure_privileged: self
                .install_infrastructure_privileged
                .or(base.install_infrastructure_privileged),
            install_ksm: self.install_ksm.or(base.install_ksm),
            install_prometheus: self.install_prometheus.or(base.install_prometheus),
            install_logging: self.install_logging.or(base.install_logging),
            values: self.values.or(base.values),
        }
    }
}

/// Complete add-on options after merging caller props over the defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRelicAddOnOptions {
    pub repository: String,
    pub chart: String,
    pub namespace: String,
    pub version: String,
    pub release: String,
    pub low_data_mode: bool,
    pub install_infrastructure: bool,
    pub install_infrastructure_privileged: bool,
    pub install_ksm: bool,
    pub install_prometheus: bool,
    pub install_logging: bool,
    pub new_relic_license_key: Option<String>,
    pub new_relic_cluster_name: Option<String>,
    pub values: Option<ValuesTree>,
}

impl Default for NewRelicAddOnOptions {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            chart: DEFAULT_CHART.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            release: DEFAULT_RELEASE.to_string(),
            low_data_mode: true,
            install_infrastructure: true,
            install_infrastructure_privileged: true,
            install_ksm: true,
            install_prometheus: true,
            install_logging: true,
            new_relic_license_key: None,
            new_relic_cluster_name: None,
            values: None,
        }
    }
}

impl NewRelicAddOnOptions {
    pub fn resolve(props: NewRelicAddOnProps) -> Self {
        let base = Self::default();
        Self {
            repository: props.repository.unwrap_or(base.repository),
            chart: props.chart.unwrap_or(base.chart),
            namespace: props.namespace.unwrap_or(base.namespace),
            version: props.version.unwrap_or(base.version),
            release: props.release.unwrap_or(base.release),
            low_data_mode: props.low_data_mode.unwrap_or(base.low_data_mode),
            install_infrastructure: props
                .install_infrastructure
                .unwrap_or(base.install_infrastructure),
            install_infrastructure_privileged: props
                .install_infrastructure_privileged
                .unwrap_or(base.install_infrastructure_privileged),
            install_ksm: props.install_ksm.unwrap_or(base.install_ksm),
            install_prometheus: props.install_prometheus.unwrap_or(base.install_prometheus),
            install_logging: props.install_logging.unwrap_or(base.install_logging),
            new_relic_license_key: props.new_relic_license_key,
            new_relic_cluster_name: props.new_relic_cluster_name,
            values: props.values,
        }
    }
}

impl From<NewRelicAddOnOptions> for NewRelicAddOnProps {
    fn from(options: NewRelicAddOnOptions) -> Self {
        Self {
            namespace: Some(options.namespace),
            new_relic_license_key: options.new_relic_license_key,
            new_relic_cluster_name: options.new_relic_cluster_name,
            version: Some(options.version),
            repository: Some(options.repository),
            release: Some(options.release),
            chart: Some(options.chart),
            low_data_mode: Some(options.low_data_mode),
            install_infrastructure: Some(options.install_infrastructure),
            install_infrastructure_privileged: Some(options.install_infrastructure_privileged),
            install_ksm: Some(options.install_ksm),
            install_prometheus: Some(options.install_prometheus),
            install_logging: Some(options.install_logging),
            values: options.values,
        }
    }
}
