use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use addon_core::addon::ClusterAddOn;
use addon_core::cluster::{ClusterInfo, ManifestInstaller};
use addon_newrelic::{NewRelicAddOn, NewRelicAddOnProps};

use super::OutputFormat;

#[derive(Args)]
pub struct RenderArgs {
    /// Path to the add-on YAML config file (defaults apply when omitted)
    pub config: Option<PathBuf>,
    /// Kubernetes cluster name as shown in New Relic
    #[arg(long)]
    pub cluster_name: Option<String>,
    /// New Relic license key
    #[arg(long, env = "NEW_RELIC_LICENSE_KEY", hide_env_values = true)]
    pub license_key: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

impl RenderArgs {
    /// Props from the config file with command-line flags layered on top.
    /// Empty flag values (e.g. an exported but blank env var) don't count.
    pub fn props(&self) -> anyhow::Result<NewRelicAddOnProps> {
        let file = match &self.config {
            Some(path) => NewRelicAddOnProps::from_file(path)?,
            None => NewRelicAddOnProps::default(),
        };
        let flags = NewRelicAddOnProps {
            new_relic_cluster_name: self.cluster_name.clone().filter(|s| !s.is_empty()),
            new_relic_license_key: self.license_key.clone().filter(|s| !s.is_empty()),
            ..Default::default()
        };
        Ok(flags.merge_over(file))
    }
}

/// Deploy onto an in-memory installer and serialize the recorded requests.
pub async fn render_output(args: &RenderArgs) -> anyhow::Result<String> {
    let addon = NewRelicAddOn::new(args.props()?);

    let installer = Arc::new(ManifestInstaller::new());
    let cluster_name = addon
        .options()
        .new_relic_cluster_name
        .clone()
        .unwrap_or_else(|| "local".to_string());
    let cluster = ClusterInfo::new(cluster_name, installer.clone());

    let handle = addon.deploy(&cluster).await?;
    tracing::info!(
        id = %handle.id,
        release = %handle.release,
        namespace = %handle.namespace,
        "Chart request rendered"
    );

    args.format.render(&installer.charts())
}

pub async fn execute(args: RenderArgs) -> anyhow::Result<()> {
    print!("{}", render_output(&args).await?);
    Ok(())
}
