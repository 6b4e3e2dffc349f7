//! Playable-cell markers.

/// Marks a cell as playable.
///
/// A cell without a tile is permanently empty: it never receives a cookie and
/// never takes part in chains or swaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tile;
