mod cluster_member;
mod cluster_state_provider;
mod member;
mod member_address;
mod member_event;
mod membership_registry;
mod membership_view;
pub mod snapshot_builder;

pub use self::cluster_member::ClusterMember;
#[cfg(test)]
pub(crate) use self::cluster_state_provider::MockClusterStateProvider;
pub use self::cluster_state_provider::ClusterStateProvider;
pub use self::member::Member;
pub use self::member_address::MemberAddress;
pub use self::member_event::MemberEvent;
pub use self::membership_registry::MembershipRegistry;
pub use self::membership_view::MembershipView;
