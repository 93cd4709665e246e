use derive_more::Display;
use serde::Serialize;

use crate::member_status::MemberStatus;

/// Coarse, user facing state of a node, as rendered by visualization clients.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayState {
    #[display("down")]
    Down,
    #[display("starting")]
    Starting,
    #[display("up")]
    Up,
    #[display("stopping")]
    Stopping,
    #[display("offline")]
    Offline,
    /// The clustering subsystem cannot currently communicate with the node. Never derived from a
    /// [`MemberStatus`].
    #[display("unreachable")]
    Unreachable,
}

impl From<MemberStatus> for DisplayState {
    fn from(status: MemberStatus) -> Self {
        match status {
            MemberStatus::Down => DisplayState::Down,
            MemberStatus::Joining | MemberStatus::WeaklyUp => DisplayState::Starting,
            MemberStatus::Up => DisplayState::Up,
            MemberStatus::Exiting | MemberStatus::Leaving | MemberStatus::Removed => {
                DisplayState::Stopping
            }
            MemberStatus::Other => DisplayState::Offline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_every_status() {
        let expected = [
            (MemberStatus::Down, DisplayState::Down),
            (MemberStatus::Joining, DisplayState::Starting),
            (MemberStatus::WeaklyUp, DisplayState::Starting),
            (MemberStatus::Up, DisplayState::Up),
            (MemberStatus::Exiting, DisplayState::Stopping),
            (MemberStatus::Leaving, DisplayState::Stopping),
            (MemberStatus::Removed, DisplayState::Stopping),
            (MemberStatus::Other, DisplayState::Offline),
        ];

        for (status, state) in expected {
            assert_eq!(DisplayState::from(status), state, "{status}");
        }
    }

    #[test]
    fn should_map_unrecognized_label_to_offline() {
        let status: MemberStatus = "preparing-for-shutdown".parse().unwrap();
        assert_eq!(DisplayState::from(status), DisplayState::Offline);
    }

    #[test]
    fn should_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&DisplayState::Unreachable).unwrap(),
            "\"unreachable\""
        );
        assert_eq!(
            serde_json::to_string(&DisplayState::Starting).unwrap(),
            "\"starting\""
        );
    }
}
