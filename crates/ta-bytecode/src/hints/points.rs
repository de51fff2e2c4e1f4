//! Ordered collections of points awaiting interpolation-action emission.
//!
//! The auto-hinter reports interpolation actions (`ip_before`, `ip_after`,
//! `ip_on`, `ip_between`) as a point is visited, not grouped by edge. This
//! crate must however emit `ip_on`/`ip_between` grouped by edge (or edge
//! pair) and, within a group, in ascending point order, so that repeated
//! runs over the same analysis produce byte-identical output.
//! `ip_before`/`ip_after` have no edge dimension at all — every point a
//! glyph reports for either one is interpolated relative to the glyph's
//! overall first or last edge, never a per-point edge, so they are flat
//! sorted sets. `BTreeMap`/`BTreeSet` give us that ordering for free.

use std::collections::{BTreeMap, BTreeSet};

/// Points collected for the four interpolation-action kinds, ordered the
/// way [`crate::point_hints`] needs to emit them.
#[derive(Debug, Clone, Default)]
pub struct OrderedPointSets {
    /// Points interpolated before the glyph's first edge.
    pub ip_before: BTreeSet<u16>,
    /// Points interpolated after the glyph's last edge.
    pub ip_after: BTreeSet<u16>,
    /// Points interpolated onto a single edge, by edge index.
    pub ip_on: BTreeMap<u16, BTreeSet<u16>>,
    /// Points interpolated between two edges, by `(before_edge, after_edge)`.
    pub ip_between: BTreeMap<(u16, u16), BTreeSet<u16>>,
}

impl OrderedPointSets {
    /// An empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards every recorded point, without freeing the backing maps.
    pub fn clear(&mut self) {
        self.ip_before.clear();
        self.ip_after.clear();
        self.ip_on.clear();
        self.ip_between.clear();
    }

    /// Records that `point` interpolates before the glyph's first edge.
    pub fn insert_before(&mut self, point: u16) {
        self.ip_before.insert(point);
    }

    /// Records that `point` interpolates after the glyph's last edge.
    pub fn insert_after(&mut self, point: u16) {
        self.ip_after.insert(point);
    }

    /// Records that `point` interpolates onto `edge`.
    pub fn insert_on(&mut self, edge: u16, point: u16) {
        self.ip_on.entry(edge).or_default().insert(point);
    }

    /// Records that `point` interpolates between `before_edge` and
    /// `after_edge`.
    pub fn insert_between(&mut self, before_edge: u16, after_edge: u16, point: u16) {
        self.ip_between
            .entry((before_edge, after_edge))
            .or_default()
            .insert(point);
    }

    /// Whether no points have been recorded at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ip_before.is_empty()
            && self.ip_after.is_empty()
            && self.ip_on.is_empty()
            && self.ip_between.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_come_back_in_ascending_order_regardless_of_insertion_order() {
        let mut sets = OrderedPointSets::new();
        sets.insert_on(3, 9);
        sets.insert_on(3, 2);
        sets.insert_on(3, 5);

        let points: Vec<u16> = sets.ip_on[&3].iter().copied().collect();
        assert_eq!(points, vec![2, 5, 9]);
    }

    #[test]
    fn before_and_after_are_flat_point_sets_with_no_edge_dimension() {
        let mut sets = OrderedPointSets::new();
        sets.insert_before(7);
        sets.insert_before(1);
        sets.insert_after(4);

        assert_eq!(
            sets.ip_before.iter().copied().collect::<Vec<_>>(),
            vec![1, 7]
        );
        assert_eq!(sets.ip_after.iter().copied().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn between_is_keyed_by_edge_pair() {
        let mut sets = OrderedPointSets::new();
        sets.insert_between(2, 5, 10);
        sets.insert_between(2, 5, 11);
        sets.insert_between(2, 6, 12);

        assert_eq!(sets.ip_between.len(), 2);
        assert_eq!(
            sets.ip_between[&(2, 5)].iter().copied().collect::<Vec<_>>(),
            vec![10, 11]
        );
    }

    #[test]
    fn clear_empties_every_set() {
        let mut sets = OrderedPointSets::new();
        sets.insert_before(0);
        sets.insert_after(0);
        sets.insert_on(0, 0);
        sets.insert_between(0, 1, 0);
        assert!(!sets.is_empty());

        sets.clear();
        assert!(sets.is_empty());
    }
}
