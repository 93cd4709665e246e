//! Derivation of [`ClusterSnapshot`]s from membership views.
use itertools::Itertools;
use tracing::*;

use crate::cluster::{Member, MembershipView};
use crate::node_view::NodeView;
use crate::node_views::NodeViews;
use crate::port_range::ValidPortRange;
use crate::snapshot::ClusterSnapshot;

/// Selects the oldest of given members using their own age comparator. When there are no
/// members, the local node is the oldest one.
pub fn oldest_member<'a, M: Member>(members: &'a [M], self_member: &'a M) -> &'a M {
    members
        .iter()
        .reduce(|older, member| {
            if older.is_older_than(member) {
                older
            } else {
                member
            }
        })
        .unwrap_or(self_member)
}

/// Builds a snapshot of given view. Only members with identities inside `valid_ports` are
/// reported, although all of them take part in selecting the oldest member.
///
/// Members sharing an identity collapse into a single view of the last one, which keeps the
/// leader and oldest flags of all of them.
///
/// Unreachable members are reported after the reachable ones - an unreachable member replaces
/// its reachable view and moves to the end of the node list.
pub fn build_snapshot<M: Member>(
    view: &MembershipView<M>,
    valid_ports: &ValidPortRange,
) -> ClusterSnapshot {
    let self_member = view.self_member();
    let leader = view.leader();
    let oldest = oldest_member(view.members(), self_member);

    let mut nodes = NodeViews::with_capacity(view.members().len());

    for member in view.members() {
        let identity = member.identity();
        if !valid_ports.contains(identity) {
            trace!(%identity, %valid_ports, "Ignoring member outside of valid port range.");
            continue;
        }

        let mut node = NodeView::new(
            identity,
            member.status(),
            member.has_address(leader),
            member == oldest,
        );

        if let Some(previous) = nodes.get(identity) {
            debug!(%identity, "Multiple members share the same identity - keeping the last one.");
            node = node.with_roles_of(previous);
        }

        nodes.insert(node);
    }

    for member in view.unreachable() {
        let identity = member.identity();
        if valid_ports.contains(identity) {
            nodes.insert_last(NodeView::unreachable(identity));
        }
    }

    trace!(
        nodes = %nodes.iter().map(|node| node.identity()).join(", "),
        "Built cluster snapshot."
    );

    ClusterSnapshot::new(
        self_member.identity(),
        self_member.has_address(leader),
        self_member == oldest,
        nodes,
    )
}
