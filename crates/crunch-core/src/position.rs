//! Grid coordinates.

use std::{num::ParseIntError, str::FromStr};

/// A cell address on the board.
///
/// Columns grow to the right and rows grow upward, so `Position::new(0, 0)` is the
/// bottom-left cell.
///
/// # Examples
///
/// ```
/// use crunch_core::{Direction, Position};
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.neighbor(Direction::Right), Some(Position::new(3, 0)));
/// assert_eq!(pos.neighbor(Direction::Down), None);
/// assert_eq!(pos.to_string(), "(2, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({column}, {row})")]
pub struct Position {
    /// Column index, counted from the left.
    pub column: usize,
    /// Row index, counted from the bottom.
    pub row: usize,
}

impl Position {
    /// Creates a position from a column and a row.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Returns the orthogonal neighbor in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant. The upper
    /// bounds depend on the grid and are checked by the caller.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let Self { column, row } = self;
        match direction {
            Direction::Left => column.checked_sub(1).map(|column| Self { column, row }),
            Direction::Right => Some(Self::new(column + 1, row)),
            Direction::Down => row.checked_sub(1).map(|row| Self { column, row }),
            Direction::Up => Some(Self::new(column, row + 1)),
        }
    }

    /// Returns `true` if `other` shares an edge with this position.
    ///
    /// Diagonal neighbors and the position itself are not adjacent.
    #[must_use]
    pub fn is_adjacent_to(self, other: Self) -> bool {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row) == 1
    }
}

impl From<(usize, usize)> for Position {
    fn from((column, row): (usize, usize)) -> Self {
        Self::new(column, row)
    }
}

/// Error returned when parsing a [`Position`] from `"column,row"` text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePositionError {
    /// The text is not two comma-separated fields.
    #[display("expected `column,row`")]
    MissingComma,
    /// One of the fields is not a non-negative integer.
    #[display("invalid coordinate: {_0}")]
    InvalidCoordinate(ParseIntError),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, row) = s.split_once(',').ok_or(ParsePositionError::MissingComma)?;
        let column = column
            .trim()
            .parse()
            .map_err(ParsePositionError::InvalidCoordinate)?;
        let row = row
            .trim()
            .parse()
            .map_err(ParsePositionError::InvalidCoordinate)?;
        Ok(Self { column, row })
    }
}

/// One of the four orthogonal directions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
    /// Away from row 0.
    Up,
    /// Toward row 0.
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_at_origin() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.neighbor(Direction::Left), None);
        assert_eq!(origin.neighbor(Direction::Down), None);
        assert_eq!(origin.neighbor(Direction::Right), Some(Position::new(1, 0)));
        assert_eq!(origin.neighbor(Direction::Up), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_adjacency() {
        let pos = Position::new(4, 4);
        for direction in Direction::ALL {
            let neighbor = pos.neighbor(direction).unwrap();
            assert!(pos.is_adjacent_to(neighbor));
            assert!(neighbor.is_adjacent_to(pos));
        }
        assert!(!pos.is_adjacent_to(pos));
        assert!(!pos.is_adjacent_to(Position::new(5, 5)));
        assert!(!pos.is_adjacent_to(Position::new(6, 4)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("3,7".parse::<Position>(), Ok(Position::new(3, 7)));
        assert_eq!(" 0 , 8 ".parse::<Position>(), Ok(Position::new(0, 8)));
        assert_eq!(
            "3".parse::<Position>(),
            Err(ParsePositionError::MissingComma)
        );
        assert!(matches!(
            "a,1".parse::<Position>(),
            Err(ParsePositionError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            "-1,1".parse::<Position>(),
            Err(ParsePositionError::InvalidCoordinate(_))
        ));
    }
}
