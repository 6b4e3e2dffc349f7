use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::TileLayout;

/// Errors that can occur while loading a level layout.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// The level resource could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the resource.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The level document is not valid JSON or lacks the `tiles` array.
    #[display("invalid level document: {source}")]
    Json {
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// A tile value is neither `0` nor `1`.
    #[display("invalid tile value {value} at row {row}, column {column}")]
    InvalidTileValue {
        /// Visual row from the top.
        row: usize,
        /// Column from the left.
        column: usize,
        /// The offending value.
        value: u8,
    },
}

impl From<serde_json::Error> for LayoutError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source }
    }
}

/// A provider of named level layouts.
///
/// Closures of the form `Fn(&str) -> Result<TileLayout, LayoutError>` implement
/// this trait, which is convenient for in-memory layouts.
///
/// # Examples
///
/// ```
/// use crunch_layout::{LayoutError, TileLayout, TileLayoutSource};
///
/// let source = |_name: &str| Ok::<_, LayoutError>(TileLayout::filled(3, 3));
/// let layout = source.load_tile_layout("Level_1")?;
/// assert_eq!(layout.playable_count(), 9);
/// # Ok::<(), LayoutError>(())
/// ```
pub trait TileLayoutSource {
    /// Loads the layout called `name`.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the resource is missing or malformed.
    fn load_tile_layout(&self, name: &str) -> Result<TileLayout, LayoutError>;
}

impl<F> TileLayoutSource for F
where
    F: Fn(&str) -> Result<TileLayout, LayoutError>,
{
    fn load_tile_layout(&self, name: &str) -> Result<TileLayout, LayoutError> {
        self(name)
    }
}

/// Loads `<name>.json` level documents from a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Creates a source reading from `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory levels are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the document for level `name`.
    #[must_use]
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl TileLayoutSource for DirectorySource {
    fn load_tile_layout(&self, name: &str) -> Result<TileLayout, LayoutError> {
        let path = self.path_of(name);
        log::debug!("loading level layout from {}", path.display());
        let json = fs::read_to_string(&path).map_err(|source| LayoutError::Io {
            path: path.clone(),
            source,
        })?;
        TileLayout::from_json_str(&json)
    }
}
