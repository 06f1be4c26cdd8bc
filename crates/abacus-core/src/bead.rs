use crate::controller::Bounds;
use crate::layout::{BeadSpec, Deck};

/// Table key of a bead: rod, deck and rank never change after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeadKey {
    pub rod: usize,
    pub deck: Deck,
    pub rank: u8,
}

/// Dense handle into the bead table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeadId(pub(crate) usize);

/// Opaque back-reference to whatever the renderer uses to draw a bead.
///
/// The model only stores it; rendering resources stay with the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct Bead {
    pub key: BeadKey,
    pub home: f32,
    pub active: f32,
    /// Current position along the rod's local vertical axis.
    pub offset: f32,
    pub(crate) start: f32,
    pub(crate) weight: u8,
    pub(crate) node: Option<NodeRef>,
}

impl Bead {
    pub(crate) fn from_spec(rod: usize, spec: &BeadSpec) -> Self {
        Self {
            key: BeadKey {
                rod,
                deck: spec.deck,
                rank: spec.rank,
            },
            home: spec.home,
            active: spec.active,
            offset: spec.start,
            start: spec.start,
            weight: spec.weight,
            node: None,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::between(self.home, self.active)
    }

    /// Whether the bead sits on the active side of its midpoint.
    #[inline]
    pub fn is_engaged(&self) -> bool {
        crate::controller::is_engaged(self.offset, self.home, self.active)
    }

    /// Place value while engaged (5 for heaven, 1 for earth, 0 in the free layout).
    #[inline]
    pub fn weight(&self) -> u8 {
        self.weight
    }

    #[inline]
    pub fn node(&self) -> Option<NodeRef> {
        self.node
    }
}
