#[cfg(test)]
use mockall::*;
use std::sync::Arc;

#[cfg(test)]
use crate::cluster::ClusterMember;
use crate::cluster::{Member, MembershipView};
use crate::error::Result;

/// Source of the current membership view, usually backed by the clustering subsystem.
///
/// Implementations are queried once per snapshot and should return whatever they currently know
/// without blocking. When the view cannot be obtained, the error is propagated to the caller
/// unchanged - the monitor never retries.
pub trait ClusterStateProvider: Send + Sync {
    /// Member type of the clustering subsystem.
    type Node: Member;

    /// Returns current membership view.
    fn current_state(&self) -> Result<Arc<MembershipView<Self::Node>>>;
}

#[cfg(test)]
mock! {
    pub ClusterStateProvider {
    }

    impl ClusterStateProvider for ClusterStateProvider {
        type Node = ClusterMember;

        fn current_state(&self) -> Result<Arc<MembershipView<ClusterMember>>>;
    }
}

impl<P: ClusterStateProvider + ?Sized> ClusterStateProvider for Arc<P> {
    type Node = P::Node;

    #[inline]
    fn current_state(&self) -> Result<Arc<MembershipView<Self::Node>>> {
        self.as_ref().current_state()
    }
}
