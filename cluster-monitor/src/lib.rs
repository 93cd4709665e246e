//! **cluster-monitor** exposes the membership state of a cluster as a JSON snapshot, meant for
//! live visualization of cluster nodes.
//!
//! ## Getting started
//!
//! This example feeds a membership registry from cluster events and serves snapshots on
//! `self port + 6000`.
//!
//! ```no_run
//! use cluster_monitor::cluster::{ClusterMember, MemberEvent, MembershipRegistry};
//! use cluster_monitor::config::MonitorConfigBuilder;
//! use cluster_monitor::monitor::ClusterMonitor;
//! use cluster_monitor::server;
//! use std::sync::Arc;
//! use tokio::sync::broadcast;
//!
//! #[tokio::main]
//! async fn main() {
//!     let self_member = ClusterMember::joining("cluster://demo@127.0.0.1:2551".parse().unwrap());
//!     let registry = Arc::new(MembershipRegistry::new(self_member));
//!
//!     let (event_sender, event_receiver) = broadcast::channel::<MemberEvent<ClusterMember>>(64);
//!     registry.clone().listen(event_receiver);
//!
//!     let config = MonitorConfigBuilder::new().build().unwrap();
//!     let monitor = ClusterMonitor::new(registry, config);
//!
//!     let handle = server::start(monitor)
//!         .await
//!         .expect("Monitor server error");
//!     # drop((handle, event_sender));
//! }
//! ```
//!
//! ## Snapshots
//!
//! Snapshots are derived from a [`MembershipView`](crate::cluster::MembershipView) supplied by a
//! [`ClusterStateProvider`](crate::cluster::ClusterStateProvider). Any clustering library can be
//! plugged in by implementing [`Member`](crate::cluster::Member) for its member type - the
//! monitor only needs an address comparison and the library's own join-order comparator.

pub mod cluster;
pub mod config;
pub mod monitor;
pub mod server;

pub use cluster_state_protocol::display_state;
pub use cluster_state_protocol::error;
pub use cluster_state_protocol::member_status;
pub use cluster_state_protocol::node_identity;
pub use cluster_state_protocol::node_view;
pub use cluster_state_protocol::node_views;
pub use cluster_state_protocol::port_range;
pub use cluster_state_protocol::snapshot;

pub type Error = error::Error;
pub type Result<T> = error::Result<T>;
