use async_trait::async_trait;
use std::path::Path;

use addon_core::addon::ClusterAddOn;
use addon_core::cluster::{ChartHandle, ClusterInfo, HelmChartSpec};
use addon_core::error::AddOnResult;

use crate::config::{NewRelicAddOnOptions, NewRelicAddOnProps, DEFAULT_CHART};
use crate::values::build_values;

/// Construct id the chart is registered under.
pub const CHART_ID: &str = "newrelic-bundle";

/// Installs the New Relic `nri-bundle` chart.
#[derive(Debug, Clone, Default)]
pub struct NewRelicAddOn {
    options: NewRelicAddOnOptions,
}

impl NewRelicAddOn {
    pub fn new(props: NewRelicAddOnProps) -> Self {
        Self {
            options: NewRelicAddOnOptions::resolve(props),
        }
    }

    pub fn from_yaml_file(path: &Path) -> AddOnResult<Self> {
        Ok(Self::new(NewRelicAddOnProps::from_file(path)?))
    }

    pub fn options(&self) -> &NewRelicAddOnOptions {
        &self.options
    }

    /// The install request this add-on hands to the cluster.
    pub fn chart_spec(&self) -> HelmChartSpec {
        let options = &self.options;
        let chart = if options.chart.is_empty() {
            DEFAULT_CHART.to_string()
        } else {
            options.chart.clone()
        };
        HelmChartSpec {
            chart,
            release: options.release.clone(),
            repository: options.repository.clone(),
            namespace: options.namespace.clone(),
            version: options.version.clone(),
            values: build_values(options),
        }
    }
}

#[async_trait]
impl ClusterAddOn for NewRelicAddOn {
    fn name(&self) -> &str {
        "newrelic-addon"
    }

    async fn deploy(&self, cluster_info: &ClusterInfo) -> AddOnResult<ChartHandle> {
        let spec = self.chart_spec();
        tracing::info!(
            cluster = %cluster_info.name,
            chart = %spec.chart,
            release = %spec.release,
            namespace = %spec.namespace,
            version = %spec.version,
            "Deploying New Relic add-on"
        );
        cluster_info.cluster.add_helm_chart(CHART_ID, spec)
    }
}
