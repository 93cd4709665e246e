use std::fmt::Debug;

use crate::member_status::MemberStatus;
use crate::node_identity::NodeIdentity;

/// A cluster member, as known by the external clustering subsystem.
///
/// The monitor does not interpret member ordering itself - the implementation supplies the
/// subsystem's own notion of member age and address equality. Member equality (`PartialEq`) is
/// expected to follow the subsystem's definition of "the same member", which may be stricter than
/// address equality.
pub trait Member: PartialEq {
    /// Address type used to identify the leader.
    type Address: PartialEq + Clone + Debug + Send + Sync;

    /// Cluster address of the member.
    fn address(&self) -> &Self::Address;

    /// Port the member listens on, if its address has one.
    fn port(&self) -> Option<u16>;

    /// Current lifecycle status.
    fn status(&self) -> MemberStatus;

    /// Checks if this member joined the cluster before `other`.
    fn is_older_than(&self, other: &Self) -> bool;

    /// Snapshot identity of the member.
    #[inline]
    fn identity(&self) -> NodeIdentity {
        self.port().into()
    }

    /// Checks if the member is reachable under given address. Absent address never matches.
    #[inline]
    fn has_address(&self, address: Option<&Self::Address>) -> bool {
        address.is_some_and(|address| self.address() == address)
    }
}
