use derive_more::Constructor;

use crate::cluster::{Member, MemberEvent};

/// Membership state of the cluster at a given moment, as seen by the local node. This is the
/// sole input of snapshot building.
#[derive(Debug, Clone, Constructor)]
pub struct MembershipView<M: Member> {
    self_member: M,
    leader: Option<M::Address>,
    members: Vec<M>,
    unreachable: Vec<M>,
}

impl<M: Member + Clone> MembershipView<M> {
    /// Creates a view of a node which does not know about any other members yet.
    pub fn of_self(self_member: M) -> Self {
        MembershipView {
            self_member,
            leader: None,
            members: vec![],
            unreachable: vec![],
        }
    }

    /// Creates a new view with given event applied.
    #[must_use]
    pub fn clone_with_event(&self, event: &MemberEvent<M>) -> Self {
        let mut view = self.clone();

        match event {
            MemberEvent::Joined(member)
            | MemberEvent::WeaklyUp(member)
            | MemberEvent::Up(member)
            | MemberEvent::Left(member)
            | MemberEvent::Exited(member)
            | MemberEvent::Downed(member) => {
                upsert(&mut view.members, member);
                view.refresh_self(member);
            }
            MemberEvent::Removed(member) => {
                view.members.retain(|existing| existing != member);
                view.unreachable.retain(|existing| existing != member);
                view.refresh_self(member);
            }
            MemberEvent::Unreachable(member) => upsert(&mut view.unreachable, member),
            MemberEvent::Reachable(member) => {
                view.unreachable.retain(|existing| existing != member)
            }
            MemberEvent::LeaderChanged(leader) => view.leader = leader.clone(),
        }

        view
    }

    fn refresh_self(&mut self, member: &M) {
        if &self.self_member == member {
            self.self_member = member.clone();
        }
    }
}

impl<M: Member> MembershipView<M> {
    /// The local node.
    #[inline]
    pub fn self_member(&self) -> &M {
        &self.self_member
    }

    /// Address of the current leader, if any.
    #[inline]
    pub fn leader(&self) -> Option<&M::Address> {
        self.leader.as_ref()
    }

    /// All known members, reachable or not, in the order reported by the clustering subsystem.
    #[inline]
    pub fn members(&self) -> &[M] {
        &self.members
    }

    /// Members the failure detector currently cannot reach.
    #[inline]
    pub fn unreachable(&self) -> &[M] {
        &self.unreachable
    }
}

fn upsert<M: Member + Clone>(members: &mut Vec<M>, member: &M) {
    match members.iter_mut().find(|existing| *existing == member) {
        Some(existing) => *existing = member.clone(),
        None => members.push(member.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{ClusterMember, MemberAddress};
    use crate::member_status::MemberStatus;

    fn joining(port: u16) -> ClusterMember {
        ClusterMember::joining(MemberAddress::remote("cluster", "demo", "127.0.0.1", port))
    }

    fn statuses(view: &MembershipView<ClusterMember>) -> Vec<(Option<u16>, MemberStatus)> {
        view.members()
            .iter()
            .map(|member| (member.port(), member.status()))
            .collect()
    }

    #[test]
    fn should_append_new_members_and_update_in_place() {
        let first = joining(2551);
        let second = joining(2552);

        let view = MembershipView::of_self(first.clone())
            .clone_with_event(&MemberEvent::Joined(first.clone()))
            .clone_with_event(&MemberEvent::Joined(second.clone()))
            .clone_with_event(&MemberEvent::Up(first.with_up_number(1)));

        assert_eq!(
            statuses(&view),
            vec![
                (Some(2551), MemberStatus::Up),
                (Some(2552), MemberStatus::Joining)
            ]
        );
        assert_eq!(view.self_member().status(), MemberStatus::Up);
    }

    #[test]
    fn should_track_unreachable_members() {
        let first = joining(2551);
        let second = joining(2552);

        let view = MembershipView::of_self(first.clone())
            .clone_with_event(&MemberEvent::Joined(second.clone()))
            .clone_with_event(&MemberEvent::Unreachable(second.clone()));
        assert_eq!(view.unreachable().len(), 1);

        let view = view.clone_with_event(&MemberEvent::Unreachable(second.clone()));
        assert_eq!(view.unreachable().len(), 1);

        let view = view.clone_with_event(&MemberEvent::Reachable(second));
        assert!(view.unreachable().is_empty());
        assert_eq!(view.members().len(), 1);
    }

    #[test]
    fn should_forget_removed_members() {
        let first = joining(2551);
        let second = joining(2552);

        let view = MembershipView::of_self(first.clone())
            .clone_with_event(&MemberEvent::Joined(first.clone()))
            .clone_with_event(&MemberEvent::Joined(second.clone()))
            .clone_with_event(&MemberEvent::Unreachable(second.clone()))
            .clone_with_event(&MemberEvent::Removed(
                second.with_status(MemberStatus::Removed),
            ));

        assert_eq!(statuses(&view), vec![(Some(2551), MemberStatus::Joining)]);
        assert!(view.unreachable().is_empty());
    }

    #[test]
    fn should_not_confuse_restarted_member() {
        let first = joining(2551);
        let restarted = joining(2551);

        let view = MembershipView::of_self(first.clone())
            .clone_with_event(&MemberEvent::Joined(first.clone()))
            .clone_with_event(&MemberEvent::Joined(restarted));

        assert_eq!(view.members().len(), 2);
    }

    #[test]
    fn should_change_leader() {
        let first = joining(2551);

        let view = MembershipView::of_self(first.clone())
            .clone_with_event(&MemberEvent::LeaderChanged(Some(first.address().clone())));
        assert_eq!(view.leader(), Some(first.address()));

        let view = view.clone_with_event(&MemberEvent::LeaderChanged(None));
        assert_eq!(view.leader(), None);
    }

    #[test]
    fn should_keep_original_view_untouched() {
        let first = joining(2551);
        let view = MembershipView::of_self(first.clone());

        let _ = view.clone_with_event(&MemberEvent::Joined(first));

        assert!(view.members().is_empty());
    }
}
