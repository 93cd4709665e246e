use derive_more::Display;

use crate::cluster::Member;

/// Membership change published by the clustering subsystem. Status events carry the member
/// record with its new status already applied.
#[derive(Debug, Clone, Display)]
pub enum MemberEvent<M: Member> {
    #[display("member joined")]
    Joined(M),
    #[display("member weakly up")]
    WeaklyUp(M),
    #[display("member up")]
    Up(M),
    #[display("member left")]
    Left(M),
    #[display("member exited")]
    Exited(M),
    #[display("member downed")]
    Downed(M),
    /// The member was removed from the cluster entirely.
    #[display("member removed")]
    Removed(M),
    /// Failure detector marked the member as unreachable.
    #[display("member unreachable")]
    Unreachable(M),
    /// Previously unreachable member can be reached again.
    #[display("member reachable")]
    Reachable(M),
    /// A new leader was elected, or no member can currently act as one.
    #[display("leader changed")]
    LeaderChanged(Option<M::Address>),
}

impl<M: Member> MemberEvent<M> {
    /// Returns the member this event is about, if any.
    pub fn member(&self) -> Option<&M> {
        match self {
            MemberEvent::Joined(member)
            | MemberEvent::WeaklyUp(member)
            | MemberEvent::Up(member)
            | MemberEvent::Left(member)
            | MemberEvent::Exited(member)
            | MemberEvent::Downed(member)
            | MemberEvent::Removed(member)
            | MemberEvent::Unreachable(member)
            | MemberEvent::Reachable(member) => Some(member),
            MemberEvent::LeaderChanged(_) => None,
        }
    }
}
