//! Run-length scanning along rows and columns.

use crunch_core::{Cookie, CookieType, Direction, Grid, Position};

/// Minimum run length that forms a chain.
pub(crate) const MIN_CHAIN_LENGTH: usize = 3;

/// Counts consecutive cookies of type `ty` starting next to `pos` and moving in
/// `direction`. The cell at `pos` itself is not counted.
pub(crate) fn run_length(
    cookies: &Grid<Cookie>,
    pos: Position,
    direction: Direction,
    ty: CookieType,
) -> usize {
    let mut count = 0;
    let mut current = pos;
    while let Some(next) = current.neighbor(direction) {
        if !cookies.contains(next.column, next.row) {
            break;
        }
        match &cookies[next] {
            Some(cookie) if cookie.cookie_type() == ty => count += 1,
            _ => break,
        }
        current = next;
    }
    count
}

/// Returns `true` if the cookie at `pos` is part of a horizontal or vertical run
/// of at least [`MIN_CHAIN_LENGTH`] cookies of its type.
///
/// The two axes are measured independently. Empty cells never form a chain.
pub(crate) fn has_chain_at(cookies: &Grid<Cookie>, pos: Position) -> bool {
    let Some(ty) = cookies[pos].map(|cookie| cookie.cookie_type()) else {
        return false;
    };
    let horizontal = 1
        + run_length(cookies, pos, Direction::Left, ty)
        + run_length(cookies, pos, Direction::Right, ty);
    if horizontal >= MIN_CHAIN_LENGTH {
        return true;
    }
    let vertical = 1
        + run_length(cookies, pos, Direction::Down, ty)
        + run_length(cookies, pos, Direction::Up, ty);
    vertical >= MIN_CHAIN_LENGTH
}

#[cfg(test)]
mod tests {
    use crunch_core::CookieId;

    use super::*;

    /// Builds a grid from rows of raw category values listed top to bottom;
    /// `0` leaves the cell empty.
    fn grid(rows: &[&[u8]]) -> Grid<Cookie> {
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut grid = Grid::new(width, height);
        let mut id = CookieId::new(0);
        for (visual_row, values) in rows.iter().enumerate() {
            let row = height - visual_row - 1;
            for (column, &raw) in values.iter().enumerate() {
                if let Some(ty) = CookieType::from_raw(raw) {
                    let pos = Position::new(column, row);
                    grid[pos] = Some(Cookie::new(id, pos, ty));
                    id = id.next();
                }
            }
        }
        grid
    }

    #[test]
    fn test_horizontal_run() {
        let cookies = grid(&[&[1, 1, 1, 2]]);
        for column in 0..3 {
            assert!(has_chain_at(&cookies, Position::new(column, 0)));
        }
        assert!(!has_chain_at(&cookies, Position::new(3, 0)));
    }

    #[test]
    fn test_vertical_run() {
        let cookies = grid(&[&[4], &[4], &[4], &[5]]);
        assert!(has_chain_at(&cookies, Position::new(0, 3)));
        assert!(has_chain_at(&cookies, Position::new(0, 1)));
        assert!(!has_chain_at(&cookies, Position::new(0, 0)));
    }

    #[test]
    fn test_pairs_do_not_chain() {
        let cookies = grid(&[&[1, 1, 2], &[2, 3, 3], &[1, 2, 2]]);
        for pos in cookies.positions() {
            assert!(!has_chain_at(&cookies, pos), "unexpected chain at {pos}");
        }
    }

    #[test]
    fn test_axes_are_not_combined() {
        // Two horizontal and two vertical cookies meeting in an L.
        let cookies = grid(&[&[6, 0], &[6, 6]]);
        assert!(!has_chain_at(&cookies, Position::new(0, 0)));
    }

    #[test]
    fn test_diagonals_do_not_chain() {
        let cookies = grid(&[&[2, 1, 1], &[1, 2, 1], &[1, 1, 2]]);
        assert!(!has_chain_at(&cookies, Position::new(1, 1)));
    }

    #[test]
    fn test_empty_cells_break_runs() {
        let cookies = grid(&[&[3, 3, 0, 3, 3]]);
        assert!(!has_chain_at(&cookies, Position::new(1, 0)));
        assert!(!has_chain_at(&cookies, Position::new(2, 0)));
    }

    #[test]
    fn test_run_length_excludes_origin() {
        let cookies = grid(&[&[2, 2, 2, 2]]);
        let ty = CookieType::Cupcake;
        assert_eq!(run_length(&cookies, Position::new(0, 0), Direction::Right, ty), 3);
        assert_eq!(run_length(&cookies, Position::new(0, 0), Direction::Left, ty), 0);
        assert_eq!(
            run_length(&cookies, Position::new(2, 0), Direction::Right, CookieType::Donut),
            0
        );
    }
}
