use crunch_core::Position;

/// Errors reported by [`Level`](crate::Level).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LevelError {
    /// The level has no playable cells, so no layout can be generated.
    #[display("level has no playable tiles")]
    NoPlayableTiles,
    /// Every shuffle attempt produced a layout without a legal swap.
    #[display("no playable layout found after {attempts} attempts")]
    UngenerableLayout {
        /// Number of layouts tried.
        attempts: usize,
    },
    /// The tile layout does not fit the configured board.
    #[display(
        "layout of {columns}x{rows} does not fit a {max_columns}x{max_rows} board"
    )]
    LayoutTooLarge {
        /// Columns in the layout.
        columns: usize,
        /// Rows in the layout.
        rows: usize,
        /// Configured board columns.
        max_columns: usize,
        /// Configured board rows.
        max_rows: usize,
    },
    /// A cookie was placed on a cell without a tile.
    #[display("no tile at {position}")]
    UntiledCell {
        /// The untiled cell.
        position: Position,
    },
}
