use std::hash::{Hash, Hasher};
use uuid::Uuid;

use crate::cluster::{Member, MemberAddress};
use crate::member_status::MemberStatus;

/// Member record as maintained by a [`MembershipRegistry`](crate::cluster::MembershipRegistry).
///
/// Two records describe the same member only when both the address and the incarnation id match -
/// a node restarted on the same address is a different member.
#[derive(Debug, Clone)]
pub struct ClusterMember {
    address: MemberAddress,
    uid: Uuid,
    status: MemberStatus,
    up_number: i32,
}

impl ClusterMember {
    /// Up number of members which have not been moved to [`MemberStatus::Up`] yet.
    pub const NOT_UP: i32 = i32::MAX;

    pub fn new(address: MemberAddress, uid: Uuid, status: MemberStatus, up_number: i32) -> Self {
        ClusterMember {
            address,
            uid,
            status,
            up_number,
        }
    }

    /// Creates a new incarnation of a member which just asked to join.
    pub fn joining(address: MemberAddress) -> Self {
        Self::new(address, Uuid::new_v4(), MemberStatus::default(), Self::NOT_UP)
    }

    /// Creates a copy of this member with given status.
    #[must_use]
    pub fn with_status(&self, status: MemberStatus) -> Self {
        ClusterMember {
            status,
            ..self.clone()
        }
    }

    /// Creates a copy of this member moved to [`MemberStatus::Up`] with given up number.
    #[must_use]
    pub fn with_up_number(&self, up_number: i32) -> Self {
        ClusterMember {
            status: MemberStatus::Up,
            up_number,
            ..self.clone()
        }
    }

    #[inline]
    pub fn uid(&self) -> Uuid {
        self.uid
    }

    /// Ordinal of the moment the member became up. Lower means older.
    #[inline]
    pub fn up_number(&self) -> i32 {
        self.up_number
    }
}

impl Member for ClusterMember {
    type Address = MemberAddress;

    #[inline]
    fn address(&self) -> &MemberAddress {
        &self.address
    }

    #[inline]
    fn port(&self) -> Option<u16> {
        self.address.port()
    }

    #[inline]
    fn status(&self) -> MemberStatus {
        self.status
    }

    fn is_older_than(&self, other: &Self) -> bool {
        if self.up_number == other.up_number {
            self.address < other.address
        } else {
            self.up_number < other.up_number
        }
    }
}

impl PartialEq for ClusterMember {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address && self.uid == other.uid
    }
}

impl Eq for ClusterMember {}

impl Hash for ClusterMember {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
        self.uid.hash(state);
    }
}
