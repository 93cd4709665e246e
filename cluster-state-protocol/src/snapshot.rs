//! Point-in-time view of cluster membership, as returned to visualization clients.
use serde::Serialize;

use crate::error::Result;
use crate::node_identity::NodeIdentity;
use crate::node_views::NodeViews;

/// Immutable snapshot of the cluster, as seen from a single node. Snapshots are never cached -
/// a new one is derived from the live membership view for every request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSnapshot {
    self_port: NodeIdentity,
    leader: bool,
    oldest: bool,
    nodes: NodeViews,
}

impl ClusterSnapshot {
    pub fn new(self_port: NodeIdentity, leader: bool, oldest: bool, nodes: NodeViews) -> Self {
        ClusterSnapshot {
            self_port,
            leader,
            oldest,
            nodes,
        }
    }

    /// Identity of the node which created the snapshot.
    #[inline]
    pub fn self_port(&self) -> NodeIdentity {
        self.self_port
    }

    /// Checks if the local node is the current leader.
    #[inline]
    pub fn is_leader(&self) -> bool {
        self.leader
    }

    /// Checks if the local node is the oldest member.
    #[inline]
    pub fn is_oldest(&self) -> bool {
        self.oldest
    }

    /// Returns all reported nodes.
    #[inline]
    pub fn nodes(&self) -> &NodeViews {
        &self.nodes
    }

    /// Serializes the snapshot to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Serializes the snapshot to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}
