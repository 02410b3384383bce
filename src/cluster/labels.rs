//! Point labels and the dense per-index label table.
//!
//! Labels are keyed by point index (position in the fitted set), never by
//! coordinate values. Two fitted points with identical coordinates are
//! distinct entries; they always end up co-clustered because each lies in
//! the other's neighborhood.

/// Sentinel for noise when labels are flattened to an integer column.
pub const NOISE: i64 = -1;

/// Final classification of a fitted point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Not density-reachable from any core point.
    Noise,
    /// Member of cluster `n` (0-based).
    Cluster(usize),
}

impl Label {
    /// True if this label is noise.
    pub fn is_noise(self) -> bool {
        matches!(self, Label::Noise)
    }

    /// Integer encoding for label columns: [`NOISE`] (-1) for noise, the
    /// cluster id otherwise.
    pub fn to_index(self) -> i64 {
        match self {
            Label::Noise => NOISE,
            Label::Cluster(k) => k as i64,
        }
    }
}

/// Per-point slot during a fit. `Unclassified` never escapes the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Unclassified,
    Noise,
    Cluster(usize),
}

/// Dense label storage, one slot per point index.
///
/// Mutated only by the cluster engine during a fit; the transition rules
/// live there. A slot holding `Cluster` is never overwritten.
#[derive(Debug, Clone)]
pub(crate) struct LabelTable {
    slots: Vec<Slot>,
}

impl LabelTable {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            slots: vec![Slot::Unclassified; n],
        }
    }

    pub(crate) fn get(&self, i: usize) -> Slot {
        self.slots[i]
    }

    pub(crate) fn set(&mut self, i: usize, slot: Slot) {
        self.slots[i] = slot;
    }

    /// True iff the point has left the `Unclassified` state.
    pub(crate) fn is_classified(&self, i: usize) -> bool {
        self.slots[i] != Slot::Unclassified
    }

    /// Collapse to final labels. The scan guarantees no `Unclassified`
    /// slots remain; any that did would read as noise.
    pub(crate) fn finish(self) -> Vec<Label> {
        self.slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Cluster(k) => Label::Cluster(k),
                Slot::Unclassified | Slot::Noise => Label::Noise,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_encoding() {
        assert_eq!(Label::Noise.to_index(), -1);
        assert_eq!(Label::Cluster(0).to_index(), 0);
        assert_eq!(Label::Cluster(7).to_index(), 7);
    }

    #[test]
    fn test_is_noise() {
        assert!(Label::Noise.is_noise());
        assert!(!Label::Cluster(0).is_noise());
    }

    #[test]
    fn test_table_starts_unclassified() {
        let table = LabelTable::new(3);
        for i in 0..3 {
            assert!(!table.is_classified(i));
            assert_eq!(table.get(i), Slot::Unclassified);
        }
    }

    #[test]
    fn test_table_finish() {
        let mut table = LabelTable::new(3);
        table.set(0, Slot::Cluster(1));
        table.set(1, Slot::Noise);
        table.set(2, Slot::Cluster(0));
        assert_eq!(
            table.finish(),
            vec![Label::Cluster(1), Label::Noise, Label::Cluster(0)]
        );
    }
}
