use fxhash::FxHashMap;
use serde::{Serialize, Serializer};

use crate::node_identity::NodeIdentity;
use crate::node_view::NodeView;

/// Ordered sequence of node views with at most one view per identity.
///
/// Views live in append-only slots; replacing a view by moving it to the end leaves a vacant slot
/// behind, so both operations are O(1) regardless of cluster size.
#[derive(Debug, Clone, Default)]
pub struct NodeViews {
    slots: Vec<Option<NodeView>>,
    positions: FxHashMap<NodeIdentity, usize>,
}

impl NodeViews {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        NodeViews {
            slots: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Adds a view at the end. If a view with the same identity is already present, it gets
    /// replaced in place and the replaced view is returned.
    pub fn insert(&mut self, view: NodeView) -> Option<NodeView> {
        match self.positions.get(&view.identity()) {
            Some(&position) => self.slots[position].replace(view),
            None => {
                self.append(view);
                None
            }
        }
    }

    /// Adds a view at the end, removing any view with the same identity from its previous
    /// position. The removed view is returned.
    pub fn insert_last(&mut self, view: NodeView) -> Option<NodeView> {
        let previous = self
            .positions
            .remove(&view.identity())
            .and_then(|position| self.slots[position].take());

        self.append(view);
        previous
    }

    /// Returns the view of given identity, if present.
    pub fn get(&self, identity: NodeIdentity) -> Option<&NodeView> {
        self.positions
            .get(&identity)
            .and_then(|&position| self.slots[position].as_ref())
    }

    #[inline]
    pub fn contains(&self, identity: NodeIdentity) -> bool {
        self.positions.contains_key(&identity)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates over views in their sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeView> + '_ {
        self.slots.iter().flatten()
    }

    fn append(&mut self, view: NodeView) {
        self.positions.insert(view.identity(), self.slots.len());
        self.slots.push(Some(view));
    }
}

impl<'a> IntoIterator for &'a NodeViews {
    type Item = &'a NodeView;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<NodeView>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}

impl FromIterator<NodeView> for NodeViews {
    fn from_iter<I: IntoIterator<Item = NodeView>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut views = NodeViews::with_capacity(iter.size_hint().0);
        for view in iter {
            views.insert(view);
        }

        views
    }
}

impl Serialize for NodeViews {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_state::DisplayState;
    use crate::member_status::MemberStatus;

    fn up(port: u16) -> NodeView {
        NodeView::new(NodeIdentity::new(port), MemberStatus::Up, false, false)
    }

    fn ports(views: &NodeViews) -> Vec<u16> {
        views.iter().map(|view| view.identity().port()).collect()
    }

    #[test]
    fn should_keep_insertion_order() {
        let views: NodeViews = vec![up(2553), up(2551), up(2552)].into_iter().collect();

        assert_eq!(ports(&views), vec![2553, 2551, 2552]);
        assert_eq!(views.len(), 3);
    }

    #[test]
    fn should_replace_in_place_on_insert() {
        let mut views: NodeViews = vec![up(2551), up(2552)].into_iter().collect();

        let previous = views.insert(NodeView::new(
            NodeIdentity::new(2551),
            MemberStatus::Leaving,
            false,
            false,
        ));

        assert_eq!(previous.unwrap().state(), DisplayState::Up);
        assert_eq!(ports(&views), vec![2551, 2552]);
        assert_eq!(
            views.get(NodeIdentity::new(2551)).unwrap().state(),
            DisplayState::Stopping
        );
    }

    #[test]
    fn should_move_to_end_on_insert_last() {
        let mut views: NodeViews = vec![up(2551), up(2552), up(2553)].into_iter().collect();

        let previous = views.insert_last(NodeView::unreachable(NodeIdentity::new(2551)));

        assert!(previous.is_some());
        assert_eq!(ports(&views), vec![2552, 2553, 2551]);
        assert_eq!(views.len(), 3);
        assert!(views.get(NodeIdentity::new(2551)).unwrap().is_unreachable());
    }

    #[test]
    fn should_append_new_identity_on_insert_last() {
        let mut views: NodeViews = vec![up(2551)].into_iter().collect();

        assert!(views
            .insert_last(NodeView::unreachable(NodeIdentity::new(2552)))
            .is_none());
        assert_eq!(ports(&views), vec![2551, 2552]);
    }

    #[test]
    fn should_move_same_identity_repeatedly() {
        let mut views: NodeViews = vec![up(2551), up(2552)].into_iter().collect();

        views.insert_last(NodeView::unreachable(NodeIdentity::new(2551)));
        views.insert_last(NodeView::unreachable(NodeIdentity::new(2552)));
        views.insert_last(NodeView::unreachable(NodeIdentity::new(2551)));

        assert_eq!(ports(&views), vec![2552, 2551]);
        assert_eq!(views.len(), 2);
    }

    #[test]
    fn should_serialize_as_sequence() {
        let mut views: NodeViews = vec![up(2551), up(2552)].into_iter().collect();
        views.insert_last(NodeView::unreachable(NodeIdentity::new(2551)));

        let json = serde_json::to_value(&views).unwrap();
        let entries = json.as_array().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["port"], 2552);
        assert_eq!(entries[1]["port"], 2551);
        assert_eq!(entries[1]["state"], "unreachable");
    }
}
