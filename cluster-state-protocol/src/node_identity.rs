use derive_more::{Display, From};
use serde::Serialize;

/// Identity of a node within a snapshot - the port its cluster address listens on.
#[derive(
    Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Display, From, Serialize, Default,
)]
#[serde(transparent)]
pub struct NodeIdentity(u16);

impl NodeIdentity {
    /// Identity of a node whose address carries no port.
    pub const UNKNOWN: NodeIdentity = NodeIdentity(0);

    #[inline]
    pub const fn new(port: u16) -> Self {
        NodeIdentity(port)
    }

    #[inline]
    pub const fn port(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

impl From<Option<u16>> for NodeIdentity {
    fn from(port: Option<u16>) -> Self {
        port.map(NodeIdentity).unwrap_or(Self::UNKNOWN)
    }
}

impl From<NodeIdentity> for u16 {
    fn from(identity: NodeIdentity) -> Self {
        identity.0
    }
}
