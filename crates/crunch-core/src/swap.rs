//! Swap candidates.

use std::{
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use crate::{Cookie, CookieId};

/// An unordered pair of adjacent cookies considered for exchange.
///
/// `Swap::new(a, b)` and `Swap::new(b, a)` are equal and hash identically.
/// The cookies are snapshots taken when the swap was built; their positions are
/// the cells being exchanged.
///
/// # Examples
///
/// ```
/// use crunch_core::{Cookie, CookieId, CookieType, Position, Swap};
///
/// let a = Cookie::new(CookieId::new(0), Position::new(0, 0), CookieType::Donut);
/// let b = Cookie::new(CookieId::new(1), Position::new(1, 0), CookieType::Danish);
/// assert_eq!(Swap::new(a, b), Swap::new(b, a));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Swap {
    cookie_a: Cookie,
    cookie_b: Cookie,
}

impl Swap {
    /// Creates a swap between two cookies.
    ///
    /// # Panics
    ///
    /// Panics if the cookies are not orthogonally adjacent.
    #[must_use]
    #[track_caller]
    pub fn new(cookie_a: Cookie, cookie_b: Cookie) -> Self {
        assert!(
            cookie_a.position().is_adjacent_to(cookie_b.position()),
            "swap cookies must be adjacent: {} and {}",
            cookie_a.position(),
            cookie_b.position()
        );
        Self { cookie_a, cookie_b }
    }

    /// Returns the first cookie.
    #[must_use]
    pub const fn cookie_a(&self) -> &Cookie {
        &self.cookie_a
    }

    /// Returns the second cookie.
    #[must_use]
    pub const fn cookie_b(&self) -> &Cookie {
        &self.cookie_b
    }

    fn key(&self) -> (CookieId, CookieId) {
        let (a, b) = (self.cookie_a.id(), self.cookie_b.id());
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl PartialEq for Swap {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Swap {}

impl Hash for Swap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "swap {} with {}", self.cookie_a, self.cookie_b)
    }
}
