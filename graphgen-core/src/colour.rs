//! Edge colours and their depth predicates.
//!
//! Every edge carries one of five colours. Each colour constrains the depths
//! of the vertices it may join; [`EdgeColour::permits`] is the single pure
//! definition of those rules and is shared by the entity store, the colour
//! passes and the invariant checker.

use std::fmt;

/// Semantic colour attached to every edge.
///
/// # Examples
/// ```
/// use graphgen_core::EdgeColour;
///
/// assert!(EdgeColour::Yellow.permits(2, 3));
/// assert!(!EdgeColour::Red.permits(2, 3));
/// assert_eq!(EdgeColour::Blue.as_str(), "blue");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EdgeColour {
    /// Tree edge linking a freshly created vertex to its parent.
    Gray,
    /// Self-loop on a single vertex.
    Green,
    /// Link between two vertices at the same depth.
    Blue,
    /// Link between vertices one level apart.
    Yellow,
    /// Link between vertices two levels apart.
    Red,
}

impl EdgeColour {
    /// Returns every colour in painting order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Gray, Self::Green, Self::Blue, Self::Yellow, Self::Red]
    }

    /// Returns the lowercase name used in serialised output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// Reports whether an edge of this colour may join a vertex at
    /// `from_depth` to a vertex at `to_depth`.
    ///
    /// Gray edges point from a parent to its child, so the target must sit
    /// exactly one level below the source. The store additionally requires
    /// the gray target to be freshly created.
    #[must_use]
    pub const fn permits(self, from_depth: usize, to_depth: usize) -> bool {
        match self {
            Self::Gray => matches!(from_depth.checked_add(1), Some(next) if next == to_depth),
            Self::Green | Self::Blue => from_depth == to_depth,
            Self::Yellow => from_depth.abs_diff(to_depth) == 1,
            Self::Red => from_depth.abs_diff(to_depth) == 2,
        }
    }

    /// Reports whether this colour is drawn as a self-loop.
    ///
    /// Green edges are always self-loops and no other colour may be one.
    #[must_use]
    pub const fn is_loop_colour(self) -> bool {
        matches!(self, Self::Green)
    }
}

impl fmt::Display for EdgeColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
