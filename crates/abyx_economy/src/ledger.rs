//! # Resource Ledger
//!
//! One counter per resource kind. Counters only grow during play; the HUD
//! reads them to build the inventory bar.

use abyx_shared::ResourceKind;

/// Per-kind resource counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceLedger {
    counts: [u32; ResourceKind::COUNT],
}

impl ResourceLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `kind`. Returns the new count.
    pub fn credit(&mut self, kind: ResourceKind) -> u32 {
        let count = &mut self.counts[kind.index()];
        *count = count.saturating_add(1);
        *count
    }

    /// Count held of `kind`.
    #[inline]
    #[must_use]
    pub fn count(&self, kind: ResourceKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Kinds with a non-zero count and their counts, in ledger order.
    pub fn stocked(&self) -> impl Iterator<Item = (ResourceKind, u32)> + '_ {
        ResourceKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|&(_, count)| count > 0)
    }

    /// Sum over all kinds.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_counts_per_kind() {
        let mut ledger = ResourceLedger::new();
        assert_eq!(ledger.credit(ResourceKind::Wood), 1);
        assert_eq!(ledger.credit(ResourceKind::Wood), 2);
        assert_eq!(ledger.count(ResourceKind::Stone), 0);
        assert_eq!(ledger.total(), 2);
    }

    #[test]
    fn test_stocked_skips_empty_kinds() {
        let mut ledger = ResourceLedger::new();
        assert_eq!(ledger.stocked().count(), 0);

        ledger.credit(ResourceKind::Wood);
        let stocked: Vec<_> = ledger.stocked().collect();
        assert_eq!(stocked, vec![(ResourceKind::Wood, 1)]);

        ledger.credit(ResourceKind::Stone);
        let kinds: Vec<_> = ledger.stocked().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![ResourceKind::Stone, ResourceKind::Wood]);
    }
}
