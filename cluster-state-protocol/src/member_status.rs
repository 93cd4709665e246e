//! Raw lifecycle phase of a cluster member, as reported by the clustering subsystem.
use derive_more::Display;
use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::str::FromStr;

const DOWN: &str = "down";
const JOINING: &str = "joining";
const WEAKLY_UP: &str = "weaklyup";
const UP: &str = "up";
const EXITING: &str = "exiting";
const LEAVING: &str = "leaving";
const REMOVED: &str = "removed";
const UNKNOWN: &str = "unknown";

/// Lifecycle status of a member. The clustering subsystem owns the transitions between these;
/// the monitor only reads them.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Display, Default)]
pub enum MemberStatus {
    /// The member was marked as down and will be removed.
    #[display("down")]
    Down,
    /// The member asked to join and is waiting to be accepted.
    #[display("joining")]
    #[default]
    Joining,
    /// The member joined while the cluster could not converge.
    #[display("weaklyup")]
    WeaklyUp,
    /// Fully operational member.
    #[display("up")]
    Up,
    /// The member finished leaving and is about to be removed.
    #[display("exiting")]
    Exiting,
    /// The member announced it is leaving.
    #[display("leaving")]
    Leaving,
    /// The member is no longer part of the cluster.
    #[display("removed")]
    Removed,
    /// Any status this model does not recognize.
    #[display("unknown")]
    Other,
}

impl MemberStatus {
    /// Returns the wire label of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            MemberStatus::Down => DOWN,
            MemberStatus::Joining => JOINING,
            MemberStatus::WeaklyUp => WEAKLY_UP,
            MemberStatus::Up => UP,
            MemberStatus::Exiting => EXITING,
            MemberStatus::Leaving => LEAVING,
            MemberStatus::Removed => REMOVED,
            MemberStatus::Other => UNKNOWN,
        }
    }
}

/// Parsing never fails - unrecognized labels become [`MemberStatus::Other`].
impl FromStr for MemberStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s.to_ascii_lowercase().as_str() {
            DOWN => MemberStatus::Down,
            JOINING => MemberStatus::Joining,
            WEAKLY_UP | "weakly-up" | "weakly_up" => MemberStatus::WeaklyUp,
            UP => MemberStatus::Up,
            EXITING => MemberStatus::Exiting,
            LEAVING => MemberStatus::Leaving,
            REMOVED => MemberStatus::Removed,
            _ => MemberStatus::Other,
        };

        Ok(status)
    }
}

impl Serialize for MemberStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
