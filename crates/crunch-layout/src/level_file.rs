use serde::Deserialize;

use crate::{LayoutError, TileLayout};

/// On-disk shape of a level document.
///
/// Only the tile mask is read; other keys in the document are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelFile {
    /// Visual rows from the top; `1` is playable and `0` is excluded.
    pub tiles: Vec<Vec<u8>>,
}

impl TryFrom<LevelFile> for TileLayout {
    type Error = LayoutError;

    fn try_from(file: LevelFile) -> Result<Self, Self::Error> {
        let rows = file
            .tiles
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .into_iter()
                    .enumerate()
                    .map(|(column, value)| match value {
                        0 => Ok(false),
                        1 => Ok(true),
                        _ => Err(LayoutError::InvalidTileValue { row, column, value }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TileLayout::from_rows(rows))
    }
}

impl TileLayout {
    /// Parses a level document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Json`] if the document is not a valid level file, or
    /// [`LayoutError::InvalidTileValue`] if a tile is neither `0` nor `1`.
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        let file: LevelFile = serde_json::from_str(json)?;
        file.try_into()
    }
}
