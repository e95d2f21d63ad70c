use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::error::AddOnResult;
use crate::values::ValuesTree;

/// Everything needed to install one Helm chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelmChartSpec {
    pub chart: String,
    pub release: String,
    pub repository: String,
    pub namespace: String,
    pub version: String,
    pub values: ValuesTree,
}

/// Handle to a chart resource registered with a cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    pub id: Uuid,
    /// Construct id the chart was registered under.
    pub construct_id: String,
    pub release: String,
    pub namespace: String,
    pub created_at: DateTime<Utc>,
}

impl ChartHandle {
    pub fn new(construct_id: impl Into<String>, spec: &HelmChartSpec) -> Self {
        Self {
            id: Uuid::new_v4(),
            construct_id: construct_id.into(),
            release: spec.release.clone(),
            namespace: spec.namespace.clone(),
            created_at: Utc::now(),
        }
    }
}

/// A cluster able to register Helm chart installations.
pub trait HelmChartInstaller: Send + Sync {
    fn add_helm_chart(&self, id: &str, spec: HelmChartSpec) -> AddOnResult<ChartHandle>;
}

/// Cluster passed to add-ons at deploy time.
#[derive(Clone)]
pub struct ClusterInfo {
    pub name: String,
    pub cluster: Arc<dyn HelmChartInstaller>,
}

impl ClusterInfo {
    pub fn new(name: impl Into<String>, cluster: Arc<dyn HelmChartInstaller>) -> Self {
        Self {
            name: name.into(),
            cluster,
        }
    }
}

/// A chart request as recorded by [`ManifestInstaller`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedChart {
    pub id: String,
    #[serde(flatten)]
    pub spec: HelmChartSpec,
}

/// Installer that records chart requests in order instead of applying them.
#[derive(Debug, Default)]
pub struct ManifestInstaller {
    charts: Mutex<Vec<RecordedChart>>,
}

impl ManifestInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every chart requested so far, oldest first.
    pub fn charts(&self) -> Vec<RecordedChart> {
        self.charts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl HelmChartInstaller for ManifestInstaller {
    fn add_helm_chart(&self, id: &str, spec: HelmChartSpec) -> AddOnResult<ChartHandle> {
        let handle = ChartHandle::new(id, &spec);
        tracing::debug!(
            id,
            chart = %spec.chart,
            release = %spec.release,
            namespace = %spec.namespace,
            "Recorded Helm chart"
        );
        self.charts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedChart {
                id: id.to_string(),
                spec,
            });
        Ok(handle)
    }
}
