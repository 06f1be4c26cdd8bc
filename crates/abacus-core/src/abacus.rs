//! Indexed bead table for a whole abacus.
//!
//! Beads live in a dense `Vec` addressed by [`BeadId`]; an `FnvHashMap` maps
//! `(rod, deck, rank)` keys to ids, and each rod keeps its deck stacks ordered
//! by rank for neighbour lookups.

use crate::bead::{Bead, BeadId, BeadKey, NodeRef};
use crate::constants::ROD_COUNT;
use crate::controller::{self, Neighbors};
use crate::error::AbacusError;
use crate::layout::{Deck, Layout};
use crate::value;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::ops::Index;

#[derive(Clone, Debug, Default)]
struct RodStacks {
    upper: SmallVec<[BeadId; 5]>,
    lower: SmallVec<[BeadId; 4]>,
}

impl RodStacks {
    fn deck(&self, deck: Deck) -> &[BeadId] {
        match deck {
            Deck::Upper => &self.upper,
            Deck::Lower => &self.lower,
        }
    }

    fn push(&mut self, deck: Deck, id: BeadId) {
        match deck {
            Deck::Upper => self.upper.push(id),
            Deck::Lower => self.lower.push(id),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Abacus {
    layout: Layout,
    beads: Vec<Bead>,
    index: FnvHashMap<BeadKey, BeadId>,
    rods: Vec<RodStacks>,
}

impl Abacus {
    pub fn new(layout: Layout) -> Self {
        let column = layout.column();
        let mut beads = Vec::with_capacity(ROD_COUNT * column.len());
        let mut index = FnvHashMap::default();
        let mut rods = vec![RodStacks::default(); ROD_COUNT];
        for (rod, stacks) in rods.iter_mut().enumerate() {
            // `column()` yields each deck in rank order, so pushes stay sorted.
            for spec in &column {
                let id = BeadId(beads.len());
                let bead = Bead::from_spec(rod, spec);
                index.insert(bead.key, id);
                stacks.push(spec.deck, id);
                beads.push(bead);
            }
        }
        log::debug!("built {} abacus with {} beads", layout, beads.len());
        Self {
            layout,
            beads,
            index,
            rods,
        }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn min_gap(&self) -> f32 {
        self.layout.min_gap()
    }

    #[inline]
    pub fn rod_count(&self) -> usize {
        self.rods.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.beads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    #[inline]
    pub fn get(&self, id: BeadId) -> Option<&Bead> {
        self.beads.get(id.0)
    }

    #[inline]
    pub fn id_of(&self, key: BeadKey) -> Option<BeadId> {
        self.index.get(&key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BeadId, &Bead)> + '_ {
        self.beads.iter().enumerate().map(|(i, b)| (BeadId(i), b))
    }

    /// Beads of one deck on a rod, ordered by rank (bottom to top).
    pub fn deck(&self, rod: usize, deck: Deck) -> &[BeadId] {
        self.rods.get(rod).map(|s| s.deck(deck)).unwrap_or(&[])
    }

    /// All beads on a rod: upper deck first.
    pub fn rod_beads(&self, rod: usize) -> impl Iterator<Item = BeadId> + '_ {
        self.deck(rod, Deck::Upper)
            .iter()
            .chain(self.deck(rod, Deck::Lower).iter())
            .copied()
    }

    /// Current offsets of the rank neighbours of `id` within its deck.
    pub fn neighbors(&self, id: BeadId) -> Neighbors {
        let Some(bead) = self.get(id) else {
            return Neighbors::default();
        };
        let stack = self.deck(bead.key.rod, bead.key.deck);
        let rank = bead.key.rank as usize;
        let offset_at = |r: usize| stack.get(r).map(|n| self.beads[n.0].offset);
        Neighbors {
            lower: rank.checked_sub(1).and_then(offset_at),
            upper: offset_at(rank + 1),
        }
    }

    /// Apply a drag candidate to a bead and return the accepted offset.
    pub fn drag_to(&mut self, id: BeadId, candidate: f32) -> Option<f32> {
        let neighbors = self.neighbors(id);
        let min_gap = self.min_gap();
        let bead = self.beads.get_mut(id.0)?;
        let t = controller::drag_update(candidate, bead.bounds(), neighbors, min_gap);
        bead.offset = t;
        Some(t)
    }

    /// End a drag: snap to a rest position where the layout snaps.
    pub fn release(&mut self, id: BeadId) -> Option<f32> {
        let neighbors = self.neighbors(id);
        let min_gap = self.min_gap();
        let snaps = self.layout.snaps();
        let bead = self.beads.get_mut(id.0)?;
        if !snaps {
            return Some(bead.offset);
        }
        let target = match bead.key.deck {
            Deck::Lower => {
                controller::snap_with_neighbors(
                    bead.offset,
                    bead.home,
                    bead.active,
                    neighbors,
                    min_gap,
                )
                .target
            }
            Deck::Upper => controller::snap_target(bead.offset, bead.home, bead.active),
        };
        bead.offset = target;
        Some(target)
    }

    /// Derived column value, `None` for layouts without place values.
    pub fn column_value(&self, rod: usize) -> Option<u8> {
        if !self.layout.has_place_values() || rod >= self.rods.len() {
            return None;
        }
        Some(value::column_value(
            self.rod_beads(rod).map(|id| &self.beads[id.0]),
        ))
    }

    /// Column values left to right; empty when the layout has no place values.
    pub fn digits(&self) -> Vec<u8> {
        (0..self.rods.len())
            .filter_map(|rod| self.column_value(rod))
            .collect()
    }

    /// Decimal value with the leftmost rod most significant.
    pub fn total_value(&self) -> Option<u64> {
        self.layout
            .has_place_values()
            .then(|| value::fold_digits(&self.digits()))
    }

    /// Place a column's beads at the rest positions representing `digit`.
    pub fn set_column_value(&mut self, rod: usize, digit: u8) -> Result<(), AbacusError> {
        if !self.layout.has_place_values() {
            return Err(AbacusError::NoPlaceValues(self.layout));
        }
        if rod >= self.rods.len() {
            return Err(AbacusError::RodOutOfRange(rod));
        }
        if digit > 9 {
            return Err(AbacusError::DigitOutOfRange(digit));
        }
        let heaven = digit >= 5;
        let earth_count = (digit % 5) as usize;
        let stacks = &self.rods[rod];
        for id in stacks.upper.iter() {
            let b = &mut self.beads[id.0];
            b.offset = if heaven { b.active } else { b.home };
        }
        // Engaged earth beads are the top ones, pushed up against the divider.
        let earth_len = stacks.lower.len();
        for (rank, id) in stacks.lower.iter().enumerate() {
            let b = &mut self.beads[id.0];
            b.offset = if rank + earth_count >= earth_len {
                b.active
            } else {
                b.home
            };
        }
        Ok(())
    }

    /// Write a whole number across the columns, right-aligned.
    pub fn set_value(&mut self, mut value: u64) -> Result<(), AbacusError> {
        if !self.layout.has_place_values() {
            return Err(AbacusError::NoPlaceValues(self.layout));
        }
        for rod in (0..self.rods.len()).rev() {
            self.set_column_value(rod, (value % 10) as u8)?;
            value /= 10;
        }
        Ok(())
    }

    /// Return every bead to its start-up offset.
    pub fn reset(&mut self) {
        for b in &mut self.beads {
            b.offset = b.start;
        }
    }

    pub fn set_node(&mut self, id: BeadId, node: NodeRef) {
        if let Some(b) = self.beads.get_mut(id.0) {
            b.node = Some(node);
        }
    }
}

impl Index<BeadId> for Abacus {
    type Output = Bead;

    fn index(&self, id: BeadId) -> &Bead {
        &self.beads[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_keyed_by_rod_deck_rank() {
        let abacus = Abacus::new(Layout::Soroban);
        assert_eq!(abacus.len(), 13 * 5);
        let key = BeadKey {
            rod: 4,
            deck: Deck::Lower,
            rank: 2,
        };
        let id = abacus.id_of(key).unwrap();
        assert_eq!(abacus[id].key, key);
        assert_eq!(abacus.deck(4, Deck::Lower)[2], id);
    }

    #[test]
    fn neighbors_stay_within_deck() {
        let abacus = Abacus::new(Layout::Soroban);
        let heaven = abacus.deck(0, Deck::Upper)[0];
        assert_eq!(abacus.neighbors(heaven), Neighbors::default());
        let bottom = abacus.deck(0, Deck::Lower)[0];
        let n = abacus.neighbors(bottom);
        assert!(n.lower.is_none());
        assert!((n.upper.unwrap() - -4.45).abs() < 1e-5);
    }

    #[test]
    fn free_layout_has_no_place_values() {
        let mut abacus = Abacus::new(Layout::Free);
        assert_eq!(abacus.column_value(0), None);
        assert!(abacus.digits().is_empty());
        assert_eq!(abacus.total_value(), None);
        assert_eq!(
            abacus.set_column_value(0, 3),
            Err(AbacusError::NoPlaceValues(Layout::Free))
        );
    }

    #[test]
    fn node_refs_are_stored_not_owned() {
        let mut abacus = Abacus::new(Layout::Free);
        let id = abacus.deck(3, Deck::Upper)[1];
        assert_eq!(abacus[id].node(), None);
        abacus.set_node(id, NodeRef(17));
        assert_eq!(abacus[id].node(), Some(NodeRef(17)));
    }
}
