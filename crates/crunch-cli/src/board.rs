//! Text rendering of a level.

use std::fmt::{self, Display};

use crunch_core::{CookieType, Position};
use crunch_level::Level;

/// Returns the single-letter symbol of a cookie type.
fn symbol(ty: CookieType) -> char {
    match ty {
        CookieType::Croissant => 'R',
        CookieType::Cupcake => 'C',
        CookieType::Danish => 'D',
        CookieType::Donut => 'O',
        CookieType::Macaroon => 'M',
        CookieType::SugarCookie => 'S',
    }
}

/// Text view of a level: top row first, with row numbers on the left and
/// column numbers underneath. Unplayable cells are shown as `.` and playable
/// cells without a cookie as `_`.
pub(crate) struct Board<'a>(pub(crate) &'a Level);

impl Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(level) = self;
        for row in (0..level.rows()).rev() {
            write!(f, "{row:>2} ")?;
            for column in 0..level.columns() {
                let ch = match (level.tile_at(column, row), level.cookie_at(column, row)) {
                    (_, Some(cookie)) => symbol(cookie.cookie_type()),
                    (Some(_), None) => '_',
                    (None, None) => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for column in 0..level.columns() {
            write!(f, " {}", column % 10)?;
        }
        writeln!(f)
    }
}

/// Returns the legal swaps as position pairs in a stable order.
pub(crate) fn sorted_swaps(level: &Level) -> Vec<(Position, Position)> {
    let mut swaps: Vec<_> = level
        .possible_swaps()
        .iter()
        .map(|swap| {
            let a = swap.cookie_a().position();
            let b = swap.cookie_b().position();
            if a <= b { (a, b) } else { (b, a) }
        })
        .collect();
    swaps.sort_unstable();
    swaps
}

#[cfg(test)]
mod tests {
    use crunch_layout::TileLayout;
    use crunch_level::LevelConfig;

    use super::*;

    #[test]
    fn test_render_strip() {
        let config = LevelConfig::default().with_dimensions(4, 2);
        let layout: TileLayout = "0000\n1110".parse().unwrap();
        let mut level = Level::new(config, &layout).unwrap();
        level
            .restore([
                (Position::new(0, 0), CookieType::Croissant),
                (Position::new(1, 0), CookieType::Croissant),
                (Position::new(2, 0), CookieType::Donut),
            ])
            .unwrap();

        assert_eq!(
            Board(&level).to_string(),
            " 1  . . . .\n 0  R R O .\n    0 1 2 3\n"
        );
        assert!(sorted_swaps(&level).is_empty());
    }

    #[test]
    fn test_render_empty_tiles() {
        let config = LevelConfig::default().with_dimensions(3, 1);
        let level = Level::new(config, &"110".parse().unwrap()).unwrap();
        assert_eq!(Board(&level).to_string(), " 0  _ _ .\n    0 1 2\n");
    }

    #[test]
    fn test_sorted_swaps() {
        let config = LevelConfig::default().with_dimensions(4, 1);
        let mut level = Level::new(config, &TileLayout::filled(4, 1)).unwrap();
        level
            .restore([
                (Position::new(0, 0), CookieType::Danish),
                (Position::new(1, 0), CookieType::Danish),
                (Position::new(2, 0), CookieType::Macaroon),
                (Position::new(3, 0), CookieType::Danish),
            ])
            .unwrap();
        assert_eq!(
            sorted_swaps(&level),
            [(Position::new(2, 0), Position::new(3, 0))]
        );
    }
}
