use std::{fmt, str::FromStr};

/// A mask of playable cells, indexed by visual row from the top and then column.
///
/// Rows may have different lengths; missing cells are not playable.
///
/// # Examples
///
/// ```
/// use crunch_layout::TileLayout;
///
/// let layout: TileLayout = "
///     110
///     011
/// ".parse()?;
/// assert_eq!(layout.column_count(), 3);
/// assert_eq!(layout.playable_count(), 4);
/// assert_eq!(layout.to_string(), "110\n011\n");
/// # Ok::<(), crunch_layout::ParseTileLayoutError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileLayout {
    rows: Vec<Vec<bool>>,
}

impl TileLayout {
    /// Creates a layout from rows listed top to bottom.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Creates a layout with no playable cells.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a fully playable `columns × rows` layout.
    #[must_use]
    pub fn filled(columns: usize, rows: usize) -> Self {
        Self {
            rows: vec![vec![true; columns]; rows],
        }
    }

    /// Returns the number of visual rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the length of the longest row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the number of playable cells.
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&playable| playable).count()
    }

    /// Returns `true` if the cell at `visual_row` (from the top) and `column` is
    /// playable. Cells outside the layout are not playable.
    #[must_use]
    pub fn is_playable(&self, visual_row: usize, column: usize) -> bool {
        self.rows
            .get(visual_row)
            .and_then(|row| row.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl fmt::Display for TileLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &playable in row {
                f.write_str(if playable { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error returned when parsing the text form of a [`TileLayout`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid tile {ch:?} on line {line}")]
pub struct ParseTileLayoutError {
    /// One-based line number of the offending character.
    pub line: usize,
    /// The character that is neither `1` nor `0`.
    pub ch: char,
}

impl FromStr for TileLayout {
    type Err = ParseTileLayoutError;

    /// Parses one visual row per non-blank line, `1` for playable and `0` for
    /// excluded cells. Whitespace inside a line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = vec![];
        for (i, line) in s.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|ch| match ch {
                    '1' => Ok(true),
                    '0' => Ok(false),
                    _ => Err(ParseTileLayoutError { line: i + 1, ch }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Ok(Self { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_form() {
        let layout: TileLayout = "\n  1 0 1\n\n  111\n".parse().unwrap();
        assert_eq!(layout.row_count(), 2);
        assert_eq!(layout.column_count(), 3);
        assert!(layout.is_playable(0, 0));
        assert!(!layout.is_playable(0, 1));
        assert!(layout.is_playable(1, 1));
        assert!(!layout.is_playable(2, 0));
        assert!(!layout.is_playable(0, 3));
    }

    #[test]
    fn test_parse_rejects_unknown_characters() {
        let err = "11\n1x\n".parse::<TileLayout>().unwrap_err();
        assert_eq!(err, ParseTileLayoutError { line: 2, ch: 'x' });
        assert_eq!(err.to_string(), "invalid tile 'x' on line 2");
    }

    #[test]
    fn test_ragged_rows() {
        let layout = TileLayout::from_rows(vec![vec![true], vec![true, true, false]]);
        assert_eq!(layout.column_count(), 3);
        assert_eq!(layout.playable_count(), 3);
        assert!(!layout.is_playable(0, 1));
    }

    #[test]
    fn test_empty_and_filled() {
        let empty = TileLayout::empty();
        assert_eq!(empty.row_count(), 0);
        assert_eq!(empty.column_count(), 0);
        assert_eq!(empty.playable_count(), 0);

        let filled = TileLayout::filled(9, 9);
        assert_eq!(filled.playable_count(), 81);
        assert_eq!(filled.to_string().parse::<TileLayout>().unwrap(), filled);
    }
}
