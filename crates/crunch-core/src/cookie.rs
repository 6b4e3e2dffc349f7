//! Cookie categories and cookie occupants.

use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use rand::{Rng, RngExt as _};

use crate::Position;

/// The category of a cookie.
///
/// Raw value `0` is reserved as the "unknown" sentinel and has no variant, so a
/// `CookieType` is always a playable category.
///
/// # Examples
///
/// ```
/// use crunch_core::CookieType;
///
/// assert_eq!(CookieType::from_raw(4), Some(CookieType::Donut));
/// assert_eq!(CookieType::from_raw(0), None);
/// assert_eq!(CookieType::Danish.sprite_name(), "Danish");
/// assert_eq!(CookieType::Danish.highlighted_sprite_name(), "Danish-Highlighted");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CookieType {
    /// Croissant.
    Croissant = 1,
    /// Cupcake.
    Cupcake = 2,
    /// Danish.
    Danish = 3,
    /// Donut.
    Donut = 4,
    /// Macaroon.
    Macaroon = 5,
    /// Sugar cookie.
    SugarCookie = 6,
}

impl CookieType {
    /// All playable categories in raw-value order.
    pub const ALL: [Self; 6] = [
        Self::Croissant,
        Self::Cupcake,
        Self::Danish,
        Self::Donut,
        Self::Macaroon,
        Self::SugarCookie,
    ];

    /// Converts a raw value to a category.
    ///
    /// Returns `None` for the unknown sentinel `0` and for values past the last
    /// category.
    #[must_use]
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.raw() == raw)
    }

    /// Returns the raw value (1-6).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Returns the sprite name used by renderers.
    #[must_use]
    pub const fn sprite_name(self) -> &'static str {
        match self {
            Self::Croissant => "Croissant",
            Self::Cupcake => "Cupcake",
            Self::Danish => "Danish",
            Self::Donut => "Donut",
            Self::Macaroon => "Macaroon",
            Self::SugarCookie => "SugarCookie",
        }
    }

    /// Returns the sprite name of the highlighted (selected) variant.
    #[must_use]
    pub fn highlighted_sprite_name(self) -> String {
        format!("{}-Highlighted", self.sprite_name())
    }

    /// Picks a category uniformly at random.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Picks a category uniformly among those not listed in `excluded`.
    ///
    /// Returns `None` if every category is excluded.
    pub fn random_excluding<R>(rng: &mut R, excluded: &[Self]) -> Option<Self>
    where
        R: Rng + ?Sized,
    {
        let allowed: Vec<Self> = Self::ALL
            .into_iter()
            .filter(|ty| !excluded.contains(ty))
            .collect();
        if allowed.is_empty() {
            return None;
        }
        Some(allowed[rng.random_range(0..allowed.len())])
    }
}

impl Display for CookieType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sprite_name())
    }
}

/// Stable identity of a [`Cookie`] for the lifetime of a level.
///
/// Identifiers are 64 bits wide. A level allocates one per placed cookie, so
/// even a board reshuffled continuously never exhausts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct CookieId(u64);

impl CookieId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one.
    ///
    /// Wraps to zero after `u64::MAX` instead of panicking.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A cookie occupying one cell of the board.
///
/// Equality and hashing follow the [`CookieId`] only. The position is ordinary
/// mutable state that changes when the cookie is swapped, so a cookie stays the
/// same set member after it moves. Compare [`Cookie::position`] for positional
/// comparisons.
///
/// # Examples
///
/// ```
/// use crunch_core::{Cookie, CookieId, CookieType, Position};
///
/// let a = Cookie::new(CookieId::new(1), Position::new(0, 0), CookieType::Cupcake);
/// let mut moved = a;
/// moved.set_position(Position::new(1, 0));
///
/// assert_eq!(a, moved);
/// assert_ne!(a.position(), moved.position());
/// assert_eq!(moved.to_string(), "type:Cupcake square:(1,0)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cookie {
    id: CookieId,
    column: usize,
    row: usize,
    cookie_type: CookieType,
}

impl Cookie {
    /// Creates a cookie at `pos`.
    #[must_use]
    pub const fn new(id: CookieId, pos: Position, cookie_type: CookieType) -> Self {
        Self {
            id,
            column: pos.column,
            row: pos.row,
            cookie_type,
        }
    }

    /// Returns the stable identifier.
    #[must_use]
    pub const fn id(&self) -> CookieId {
        self.id
    }

    /// Returns the current column.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the current row.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns the current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.column, self.row)
    }

    /// Moves the cookie to `pos`.
    pub const fn set_position(&mut self, pos: Position) {
        self.column = pos.column;
        self.row = pos.row;
    }

    /// Returns the category.
    #[must_use]
    pub const fn cookie_type(&self) -> CookieType {
        self.cookie_type
    }
}

impl PartialEq for Cookie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Cookie {}

impl Hash for Cookie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type:{} square:({},{})",
            self.cookie_type, self.column, self.row
        )
    }
}
