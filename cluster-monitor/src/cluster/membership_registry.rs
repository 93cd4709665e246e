use arc_swap::ArcSwap;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use tokio::task::JoinHandle;
use tracing::*;

use crate::cluster::{ClusterMember, ClusterStateProvider, Member, MemberEvent, MembershipView};
use crate::error::Result;

/// Live membership view maintained from cluster events. Readers always get a consistent view
/// without locking, while events are applied atomically.
pub struct MembershipRegistry<M: Member = ClusterMember> {
    view: ArcSwap<MembershipView<M>>,
}

impl<M> MembershipRegistry<M>
where
    M: Member + Clone + Send + Sync + 'static,
{
    /// Creates a registry for a node which did not receive any events yet.
    pub fn new(self_member: M) -> Self {
        Self::with_view(MembershipView::of_self(self_member))
    }

    /// Creates a registry starting from a known view, e.g. the initial state received on
    /// subscription.
    pub fn with_view(view: MembershipView<M>) -> Self {
        MembershipRegistry {
            view: ArcSwap::from_pointee(view),
        }
    }

    /// Returns current view.
    #[inline]
    pub fn view(&self) -> Arc<MembershipView<M>> {
        self.view.load_full()
    }

    /// Applies a membership change.
    pub fn apply(&self, event: &MemberEvent<M>) {
        debug!(%event, member = ?event.member().map(Member::address), "Applying membership event");
        self.view.rcu(|view| view.clone_with_event(event));
    }

    /// Starts applying events from given channel in the background. The task finishes when all
    /// senders are gone.
    pub fn listen(self: Arc<Self>, mut event_receiver: Receiver<MemberEvent<M>>) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                match event_receiver.recv().await {
                    Ok(event) => self.apply(&event),
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Membership registry lagged behind cluster events.");
                    }
                    Err(RecvError::Closed) => {
                        debug!("Cluster event channel closed.");
                        break;
                    }
                }
            }
        })
    }
}

impl<M> ClusterStateProvider for MembershipRegistry<M>
where
    M: Member + Clone + Send + Sync + 'static,
{
    type Node = M;

    #[inline]
    fn current_state(&self) -> Result<Arc<MembershipView<M>>> {
        Ok(self.view())
    }
}
