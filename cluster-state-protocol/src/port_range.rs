use derive_more::Display;
use std::convert::TryFrom;
use std::ops::RangeInclusive;

use crate::error::{Error, Result};
use crate::node_identity::NodeIdentity;

const DEFAULT_START: u16 = 2551;
const DEFAULT_END: u16 = 2559;

/// Inclusive band of node identities which are reported in snapshots. Nodes outside the band
/// are silently ignored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
#[display("{start}..={end}")]
pub struct ValidPortRange {
    start: u16,
    end: u16,
}

impl ValidPortRange {
    /// Creates a new range. Fails if `start` is greater than `end`.
    pub fn new(start: u16, end: u16) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidPortRange { start, end });
        }

        Ok(ValidPortRange { start, end })
    }

    #[inline]
    pub fn start(&self) -> u16 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Checks if given identity is reported. Members without a port are never reported, even if
    /// the range starts at `0`.
    #[inline]
    pub fn contains(&self, identity: NodeIdentity) -> bool {
        !identity.is_unknown() && (self.start..=self.end).contains(&identity.port())
    }
}

impl Default for ValidPortRange {
    fn default() -> Self {
        ValidPortRange {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl TryFrom<RangeInclusive<u16>> for ValidPortRange {
    type Error = Error;

    fn try_from(range: RangeInclusive<u16>) -> Result<Self> {
        ValidPortRange::new(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_include_bounds() {
        let range = ValidPortRange::default();
        assert!(range.contains(NodeIdentity::new(2551)));
        assert!(range.contains(NodeIdentity::new(2555)));
        assert!(range.contains(NodeIdentity::new(2559)));
        assert!(!range.contains(NodeIdentity::new(2550)));
        assert!(!range.contains(NodeIdentity::new(2560)));
        assert!(!range.contains(NodeIdentity::new(9999)));
        assert!(!range.contains(NodeIdentity::UNKNOWN));
    }

    #[test]
    fn should_reject_inverted_range() {
        assert!(matches!(
            ValidPortRange::new(2559, 2551),
            Err(Error::InvalidPortRange {
                start: 2559,
                end: 2551
            })
        ));
    }

    #[test]
    fn should_never_contain_unknown_identity() {
        let range = ValidPortRange::new(0, 10).unwrap();
        assert!(!range.contains(NodeIdentity::UNKNOWN));
        assert!(range.contains(NodeIdentity::new(1)));
        assert!(range.contains(NodeIdentity::new(10)));
    }

    #[test]
    fn should_accept_single_port_range() {
        let range = ValidPortRange::try_from(7000..=7000).unwrap();
        assert!(range.contains(NodeIdentity::new(7000)));
        assert!(!range.contains(NodeIdentity::new(7001)));
        assert_eq!(range.to_string(), "7000..=7000");
    }
}
