//! Data model of a cluster membership snapshot.
//! Built in coordination with cluster-monitor, but free of any runtime so it can be reused by
//! other transports or tools that render the same JSON.

pub mod display_state;
pub mod error;
pub mod member_status;
pub mod node_identity;
pub mod node_view;
pub mod node_views;
pub mod port_range;
pub mod snapshot;

pub type Error = error::Error;
pub type Result<T> = error::Result<T>;
