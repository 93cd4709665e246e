use derivative::Derivative;
use tracing::*;

use crate::cluster::snapshot_builder::build_snapshot;
use crate::cluster::{ClusterStateProvider, Member};
use crate::config::MonitorConfig;
use crate::error::Result;
use crate::node_identity::NodeIdentity;
use crate::snapshot::ClusterSnapshot;

/// Entry point for obtaining cluster snapshots. Stateless apart from its configuration - every
/// call reads the provider anew, so a monitor can be shared freely between tasks.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct ClusterMonitor<P: ClusterStateProvider> {
    #[derivative(Debug = "ignore")]
    provider: P,
    config: MonitorConfig,
}

impl<P: ClusterStateProvider> ClusterMonitor<P> {
    pub fn new(provider: P, config: MonitorConfig) -> Self {
        ClusterMonitor { provider, config }
    }

    #[inline]
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Builds a snapshot of the current membership view.
    pub fn snapshot(&self) -> Result<ClusterSnapshot> {
        let view = self.provider.current_state()?;
        Ok(build_snapshot(&view, self.config.valid_ports()))
    }

    /// Identity of the local node.
    pub fn self_identity(&self) -> Result<NodeIdentity> {
        self.provider
            .current_state()
            .map(|view| view.self_member().identity())
    }

    /// Returns the port the local node should serve its monitor on, or `None` if the local node
    /// is outside of the valid range.
    pub fn http_port(&self) -> Result<Option<u16>> {
        let identity = self.self_identity()?;
        let port = self.config.http_port(identity);

        if port.is_none() {
            debug!(%identity, valid_ports = %self.config.valid_ports(), "Local node is not monitored.");
        }

        Ok(port)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cluster::{ClusterMember, MemberAddress, MembershipView, MockClusterStateProvider};
    use crate::config::MonitorConfigBuilder;
    use crate::error::Error;
    use crate::port_range::ValidPortRange;

    fn view_of(port: u16) -> Arc<MembershipView<ClusterMember>> {
        let member = ClusterMember::joining(MemberAddress::remote(
            "cluster",
            "demo",
            "127.0.0.1",
            port,
        ));
        Arc::new(MembershipView::new(
            member.clone(),
            None,
            vec![member],
            vec![],
        ))
    }

    #[test]
    fn should_build_snapshot_from_provider() {
        let mut provider = MockClusterStateProvider::new();
        provider
            .expect_current_state()
            .times(1)
            .returning(|| Ok(view_of(2552)));

        let monitor = ClusterMonitor::new(provider, MonitorConfig::default());
        let snapshot = monitor.snapshot().unwrap();

        assert_eq!(snapshot.self_port(), NodeIdentity::new(2552));
        assert_eq!(snapshot.nodes().len(), 1);
    }

    #[test]
    fn should_propagate_provider_failure() {
        let mut provider = MockClusterStateProvider::new();
        provider
            .expect_current_state()
            .returning(|| Err(Error::ClusterStateUnavailable("not joined".into())));

        let monitor = ClusterMonitor::new(provider, MonitorConfig::default());

        assert!(matches!(
            monitor.snapshot(),
            Err(Error::ClusterStateUnavailable(_))
        ));
        assert!(monitor.http_port().is_err());
    }

    #[test]
    fn should_resolve_http_port() {
        let mut provider = MockClusterStateProvider::new();
        provider
            .expect_current_state()
            .returning(|| Ok(view_of(2553)));

        let monitor = ClusterMonitor::new(provider, MonitorConfig::default());

        assert_eq!(monitor.http_port().unwrap(), Some(8553));
    }

    #[test]
    fn should_not_serve_monitor_outside_of_range() {
        let mut provider = MockClusterStateProvider::new();
        provider
            .expect_current_state()
            .returning(|| Ok(view_of(2553)));

        let config = MonitorConfigBuilder::new()
            .with_valid_ports(ValidPortRange::new(2551, 2552).unwrap())
            .build()
            .unwrap();
        let monitor = ClusterMonitor::new(provider, config);

        assert_eq!(monitor.http_port().unwrap(), None);
    }
}
