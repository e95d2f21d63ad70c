use async_trait::async_trait;

use crate::cluster::{ChartHandle, ClusterInfo};
use crate::error::AddOnResult;

/// A unit of cluster configuration that installs something onto a cluster.
#[async_trait]
pub trait ClusterAddOn: Send + Sync {
    fn name(&self) -> &str;

    /// Register this add-on's workload with the cluster.
    /// Resolves once, with the handle the cluster returned.
    async fn deploy(&self, cluster_info: &ClusterInfo) -> AddOnResult<ChartHandle>;
}
