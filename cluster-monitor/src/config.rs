use std::time::Duration;

use crate::error::{Error, Result};
use crate::node_identity::NodeIdentity;
use crate::port_range::ValidPortRange;

const DEFAULT_HTTP_PORT_OFFSET: u16 = 6000;
const DEFAULT_BIND_HOST: &str = "127.0.0.1";
const DEFAULT_BIND_TIMEOUT: Duration = Duration::from_secs(15);

/// Monitor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    valid_ports: ValidPortRange,
    http_port_offset: u16,
    bind_host: String,
    bind_timeout: Duration,
}

impl MonitorConfig {
    /// Band of node identities reported in snapshots.
    #[inline]
    pub fn valid_ports(&self) -> &ValidPortRange {
        &self.valid_ports
    }

    /// Distance between a node's cluster port and its monitor HTTP port.
    #[inline]
    pub fn http_port_offset(&self) -> u16 {
        self.http_port_offset
    }

    #[inline]
    pub fn bind_host(&self) -> &str {
        &self.bind_host
    }

    /// Maximum time to wait for the HTTP listener to bind.
    #[inline]
    pub fn bind_timeout(&self) -> Duration {
        self.bind_timeout
    }

    /// Returns the HTTP port a node with given identity should serve its monitor on. Nodes outside
    /// of the valid range don't serve a monitor at all.
    pub fn http_port(&self, identity: NodeIdentity) -> Option<u16> {
        if self.valid_ports.contains(identity) {
            identity.port().checked_add(self.http_port_offset)
        } else {
            None
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            valid_ports: Default::default(),
            http_port_offset: DEFAULT_HTTP_PORT_OFFSET,
            bind_host: DEFAULT_BIND_HOST.into(),
            bind_timeout: DEFAULT_BIND_TIMEOUT,
        }
    }
}

/// Builder structure that helps to configure the monitor.
#[derive(Default)]
pub struct MonitorConfigBuilder {
    config: MonitorConfig,
}

impl MonitorConfigBuilder {
    pub fn new() -> MonitorConfigBuilder {
        Default::default()
    }

    /// Sets the band of reported node identities.
    pub fn with_valid_ports(mut self, valid_ports: ValidPortRange) -> Self {
        self.config.valid_ports = valid_ports;
        self
    }

    /// Sets the distance between cluster and HTTP ports.
    pub fn with_http_port_offset(mut self, http_port_offset: u16) -> Self {
        self.config.http_port_offset = http_port_offset;
        self
    }

    /// Sets the host name or address the HTTP server binds to.
    pub fn with_bind_host(mut self, bind_host: impl Into<String>) -> Self {
        self.config.bind_host = bind_host.into();
        self
    }

    /// Sets the time limit for binding the HTTP listener.
    pub fn with_bind_timeout(mut self, bind_timeout: Duration) -> Self {
        self.config.bind_timeout = bind_timeout;
        self
    }

    /// Finalizes building process. Fails if the HTTP port of any valid node would not fit in the
    /// port space.
    pub fn build(self) -> Result<MonitorConfig> {
        let config = self.config;

        if config
            .valid_ports
            .end()
            .checked_add(config.http_port_offset)
            .is_none()
        {
            return Err(Error::General(format!(
                "HTTP port offset {} is too large for port range {}",
                config.http_port_offset, config.valid_ports
            )));
        }

        if config.bind_host.is_empty() {
            return Err("Empty bind host".into());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_offset_http_port_for_valid_nodes() {
        let config = MonitorConfigBuilder::new().build().unwrap();

        assert_eq!(config.http_port(NodeIdentity::new(2551)), Some(8551));
        assert_eq!(config.http_port(NodeIdentity::new(2559)), Some(8559));
        assert_eq!(config.http_port(NodeIdentity::new(2560)), None);
        assert_eq!(config.http_port(NodeIdentity::UNKNOWN), None);
    }

    #[test]
    fn should_apply_builder_settings() {
        let config = MonitorConfigBuilder::new()
            .with_valid_ports(ValidPortRange::new(7000, 7002).unwrap())
            .with_http_port_offset(100)
            .with_bind_host("0.0.0.0")
            .with_bind_timeout(Duration::from_secs(1))
            .build()
            .unwrap();

        assert_eq!(config.http_port(NodeIdentity::new(7002)), Some(7102));
        assert_eq!(config.bind_host(), "0.0.0.0");
        assert_eq!(config.bind_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn should_reject_overflowing_offset() {
        let result = MonitorConfigBuilder::new()
            .with_valid_ports(ValidPortRange::new(60000, 60010).unwrap())
            .with_http_port_offset(6000)
            .build();

        assert!(matches!(result, Err(Error::General(_))));
    }

    #[test]
    fn should_reject_empty_bind_host() {
        assert!(MonitorConfigBuilder::new()
            .with_bind_host("")
            .build()
            .is_err());
    }
}
