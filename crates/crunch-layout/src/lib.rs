//! Level layout loading for Crunch.
//!
//! A level layout is a two-dimensional mask of playable cells. Layouts are stored
//! as JSON documents of the form
//!
//! ```json
//! { "tiles": [[0, 1, 1], [1, 1, 1], [1, 1, 0]] }
//! ```
//!
//! where the outer array lists visual rows from the top, the inner arrays list
//! columns from the left, and `1` marks a playable cell.
//!
//! - [`TileLayout`] is the parsed mask, still in top-row-first order.
//! - [`TileLayoutSource`] abstracts where layouts come from; [`DirectorySource`]
//!   reads `<name>.json` files from a directory.
//!
//! # Examples
//!
//! ```
//! use crunch_layout::TileLayout;
//!
//! let layout = TileLayout::from_json_str(r#"{ "tiles": [[1, 0], [1, 1]] }"#)?;
//! assert_eq!(layout.row_count(), 2);
//! assert!(!layout.is_playable(0, 1));
//! assert!(layout.is_playable(1, 1));
//! # Ok::<(), crunch_layout::LayoutError>(())
//! ```

pub use self::{level_file::*, source::*, tile_layout::*};

mod level_file;
mod source;
mod tile_layout;
