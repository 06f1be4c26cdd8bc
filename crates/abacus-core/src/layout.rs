//! Column arrangements and the formulas that place rods and beads.

use crate::constants::*;
use crate::error::AbacusError;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// How beads are arranged on every rod.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Five beads sliding freely over the whole rod. No snapping, no digits.
    Free,
    /// One heaven bead worth 5 above the divider and four earth beads worth 1
    /// below it. Beads snap to their rest positions and each column reads 0–9.
    #[default]
    Soroban,
}

/// Bead group on a rod.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Deck {
    /// Heaven bead, or the single group of the free layout.
    Upper,
    /// Earth beads.
    Lower,
}

/// Static description of one bead slot in a column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeadSpec {
    pub deck: Deck,
    /// Order within the deck; higher ranks sit higher on the rod.
    pub rank: u8,
    pub home: f32,
    pub active: f32,
    /// Offset at construction time and after a reset.
    pub start: f32,
    /// Place value contributed while engaged.
    pub weight: u8,
}

/// Vertical extent of the frame in model space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    pub top_y: f32,
    pub bottom_y: f32,
    pub divider_y: Option<f32>,
}

impl FrameGeometry {
    pub fn rod_length(&self) -> f32 {
        self.top_y - self.bottom_y
    }

    pub fn center_y(&self) -> f32 {
        0.5 * (self.top_y + self.bottom_y)
    }
}

impl Layout {
    pub fn bead_radius(self) -> f32 {
        match self {
            Layout::Free => FREE_BEAD_RADIUS,
            Layout::Soroban => SOROBAN_BEAD_RADIUS,
        }
    }

    /// Closest two rank-adjacent beads may get: one diameter plus a margin.
    pub fn min_gap(self) -> f32 {
        2.0 * self.bead_radius() + BEAD_GAP_MARGIN
    }

    pub fn snaps(self) -> bool {
        matches!(self, Layout::Soroban)
    }

    pub fn has_place_values(self) -> bool {
        matches!(self, Layout::Soroban)
    }

    /// Bead slots of a single column, upper deck first, each deck ordered by rank.
    pub fn column(self) -> SmallVec<[BeadSpec; 5]> {
        let mut specs = SmallVec::new();
        match self {
            Layout::Free => {
                // The page lays beads out top to bottom; ranks count from the bottom.
                for rank in 0..FREE_BEADS_PER_ROD {
                    let from_top = (FREE_BEADS_PER_ROD - 1 - rank) as f32;
                    specs.push(BeadSpec {
                        deck: Deck::Upper,
                        rank: rank as u8,
                        home: -FREE_TRAVEL_LIMIT,
                        active: FREE_TRAVEL_LIMIT,
                        start: FREE_BEAD_START_Y + from_top * FREE_BEAD_SPACING_Y,
                        weight: 0,
                    });
                }
            }
            Layout::Soroban => {
                specs.push(BeadSpec {
                    deck: Deck::Upper,
                    rank: 0,
                    home: HEAVEN_HOME_Y,
                    active: HEAVEN_ACTIVE_Y,
                    start: HEAVEN_HOME_Y,
                    weight: HEAVEN_VALUE,
                });
                let pitch = self.min_gap();
                for rank in 0..EARTH_BEADS_PER_ROD {
                    let lift = rank as f32 * pitch;
                    specs.push(BeadSpec {
                        deck: Deck::Lower,
                        rank: rank as u8,
                        home: EARTH_HOME_BOTTOM_Y + lift,
                        active: EARTH_ACTIVE_BOTTOM_Y + lift,
                        start: EARTH_HOME_BOTTOM_Y + lift,
                        weight: EARTH_VALUE,
                    });
                }
            }
        }
        specs
    }

    pub fn frame(self) -> FrameGeometry {
        match self {
            Layout::Free => FrameGeometry {
                top_y: FREE_FRAME_TOP_Y,
                bottom_y: FREE_FRAME_BOTTOM_Y,
                divider_y: None,
            },
            Layout::Soroban => FrameGeometry {
                top_y: SOROBAN_FRAME_TOP_Y,
                bottom_y: SOROBAN_FRAME_BOTTOM_Y,
                divider_y: Some(SOROBAN_DIVIDER_Y),
            },
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Free => f.write_str("free"),
            Layout::Soroban => f.write_str("soroban"),
        }
    }
}

impl FromStr for Layout {
    type Err = AbacusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" | "simple" => Ok(Layout::Free),
            "soroban" | "heaven-earth" => Ok(Layout::Soroban),
            _ => Err(AbacusError::UnknownLayout(s.to_string())),
        }
    }
}

/// Local x of a rod; rods are centred on the origin.
#[inline]
pub fn rod_x(rod: usize) -> f32 {
    let span = (ROD_COUNT - 1) as f32 * ROD_SPACING;
    -span / 2.0 + rod as f32 * ROD_SPACING
}

/// Total frame width including padding.
#[inline]
pub fn frame_width() -> f32 {
    (ROD_COUNT - 1) as f32 * ROD_SPACING + FRAME_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soroban_earth_ranks_are_one_gap_apart() {
        let col = Layout::Soroban.column();
        let earth: Vec<_> = col.iter().filter(|b| b.deck == Deck::Lower).collect();
        assert_eq!(earth.len(), 4);
        for pair in earth.windows(2) {
            assert!((pair[1].home - pair[0].home - 1.05).abs() < 1e-5);
            assert!((pair[1].active - pair[0].active - 1.05).abs() < 1e-5);
        }
        assert!((earth[1].home - -4.45).abs() < 1e-5);
    }

    #[test]
    fn free_layout_matches_page_positions() {
        let starts: Vec<f32> = Layout::Free.column().iter().map(|b| b.start).collect();
        assert_eq!(starts, vec![-3.0, -1.5, 0.0, 1.5, 3.0]);
        assert!((Layout::Free.min_gap() - 1.25).abs() < 1e-6);
    }

    #[test]
    fn rods_are_centred() {
        assert_eq!(rod_x(0), -12.0);
        assert_eq!(rod_x(6), 0.0);
        assert_eq!(rod_x(ROD_COUNT - 1), 12.0);
        assert_eq!(frame_width(), 28.0);
    }
}
