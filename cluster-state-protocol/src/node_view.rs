use derive_more::Display;
use serde::{Serialize, Serializer};
use std::hash::{Hash, Hasher};

use crate::display_state::DisplayState;
use crate::member_status::MemberStatus;
use crate::node_identity::NodeIdentity;

/// Raw member state reported next to the display state. Unreachable nodes report `unreachable`
/// instead of their membership status.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
pub enum MemberState {
    #[display("{_0}")]
    Status(MemberStatus),
    #[display("unreachable")]
    Unreachable,
}

impl Serialize for MemberState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MemberState::Status(status) => status.serialize(serializer),
            MemberState::Unreachable => serializer.serialize_str("unreachable"),
        }
    }
}

/// Snapshot record of a single node.
///
/// Two views are considered the same node when their identities match, regardless of the other
/// fields.
#[derive(Debug, Copy, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    port: NodeIdentity,
    state: DisplayState,
    member_state: MemberState,
    leader: bool,
    oldest: bool,
}

impl NodeView {
    /// Creates a view of a reachable member.
    pub fn new(identity: NodeIdentity, status: MemberStatus, leader: bool, oldest: bool) -> Self {
        NodeView {
            port: identity,
            state: status.into(),
            member_state: MemberState::Status(status),
            leader,
            oldest,
        }
    }

    /// Creates a view of a member which cannot be reached. Such member is never reported as the
    /// leader nor the oldest one.
    pub fn unreachable(identity: NodeIdentity) -> Self {
        NodeView {
            port: identity,
            state: DisplayState::Unreachable,
            member_state: MemberState::Unreachable,
            leader: false,
            oldest: false,
        }
    }

    /// Creates a copy of this view which is also the leader or the oldest node if `other` is.
    #[must_use]
    pub fn with_roles_of(&self, other: &NodeView) -> Self {
        NodeView {
            leader: self.leader || other.leader,
            oldest: self.oldest || other.oldest,
            ..*self
        }
    }

    #[inline]
    pub fn identity(&self) -> NodeIdentity {
        self.port
    }

    #[inline]
    pub fn state(&self) -> DisplayState {
        self.state
    }

    #[inline]
    pub fn member_state(&self) -> MemberState {
        self.member_state
    }

    #[inline]
    pub fn is_leader(&self) -> bool {
        self.leader
    }

    #[inline]
    pub fn is_oldest(&self) -> bool {
        self.oldest
    }

    #[inline]
    pub fn is_unreachable(&self) -> bool {
        self.member_state == MemberState::Unreachable
    }
}

impl PartialEq for NodeView {
    fn eq(&self, other: &Self) -> bool {
        self.port == other.port
    }
}

impl Eq for NodeView {}

impl Hash for NodeView {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.port.hash(state);
    }
}
