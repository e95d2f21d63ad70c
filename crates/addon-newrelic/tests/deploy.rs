use std::io::Write;
use std::sync::Arc;

use addon_core::addon::ClusterAddOn;
use addon_core::cluster::{ChartHandle, ClusterInfo, HelmChartInstaller, HelmChartSpec, ManifestInstaller};
use addon_core::error::{AddOnError, AddOnResult};
use addon_core::values::get_path;
use addon_newrelic::addon::CHART_ID;
use addon_newrelic::{NewRelicAddOn, NewRelicAddOnProps};
use serde_yaml::Value;

struct RejectingInstaller;

impl HelmChartInstaller for RejectingInstaller {
    fn add_helm_chart(&self, _id: &str, spec: HelmChartSpec) -> AddOnResult<ChartHandle> {
        Err(AddOnError::Install {
            chart: spec.chart,
            source: anyhow::anyhow!("namespace is immutable"),
        })
    }
}

#[tokio::test]
async fn deploy_registers_chart_and_returns_handle() {
    let installer = Arc::new(ManifestInstaller::new());
    let cluster = ClusterInfo::new("prod-eks", installer.clone());

    let addon = NewRelicAddOn::new(NewRelicAddOnProps {
        new_relic_cluster_name: Some("prod-eks".into()),
        new_relic_license_key: Some("license".into()),
        ..Default::default()
    });
    let handle = addon.deploy(&cluster).await.unwrap();

    let charts = installer.charts();
    assert_eq!(charts.len(), 1);
    let recorded = &charts[0];
    assert_eq!(recorded.id, CHART_ID);
    assert_eq!(recorded.spec.chart, "nri-bundle");
    assert_eq!(recorded.spec.release, "newrelic-bundle");
    assert_eq!(recorded.spec.namespace, "newrelic");
    assert_eq!(recorded.spec.version, "3.2.11");
    assert_eq!(
        get_path(&recorded.spec.values, "global.cluster"),
        Some(&Value::from("prod-eks"))
    );

    assert_eq!(handle.construct_id, CHART_ID);
    assert_eq!(handle.release, "newrelic-bundle");
    assert_eq!(handle.namespace, "newrelic");
}

#[tokio::test]
async fn deploy_forwards_installer_errors() {
    let cluster = ClusterInfo::new("prod-eks", Arc::new(RejectingInstaller));
    let err = NewRelicAddOn::default().deploy(&cluster).await.unwrap_err();
    match err {
        AddOnError::Install { chart, .. } => assert_eq!(chart, "nri-bundle"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn deploy_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "namespace: observability\ninstallLogging: false\nvalues:\n  logging:\n    fluentBit: custom\n"
    )
    .unwrap();

    let installer = Arc::new(ManifestInstaller::new());
    let cluster = ClusterInfo::new("staging", installer.clone());
    let addon = NewRelicAddOn::from_yaml_file(file.path()).unwrap();
    addon.deploy(&cluster).await.unwrap();

    let spec = &installer.charts()[0].spec;
    assert_eq!(spec.namespace, "observability");
    assert_eq!(
        get_path(&spec.values, "logging.fluentBit"),
        Some(&Value::from("custom"))
    );
    assert_eq!(get_path(&spec.values, "prometheus"), Some(&Value::Bool(true)));
}
