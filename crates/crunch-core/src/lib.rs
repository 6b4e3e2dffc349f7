//! Core data structures for the Crunch tile-matching puzzle.
//!
//! This crate provides the plain data types shared by layout loading, the level
//! engine, and front ends.
//!
//! # Overview
//!
//! 1. **Addressing** - Grid coordinates and storage
//!    - [`position`]: `(column, row)` coordinates and orthogonal [`Direction`]s
//!    - [`grid`]: [`Grid`], a fixed-size bounds-checked two-dimensional store
//!
//! 2. **Board entities** - What lives in a grid cell
//!    - [`cookie`]: [`CookieType`] categories and [`Cookie`] occupants
//!    - [`tile`]: [`Tile`] markers for playable cells
//!    - [`swap`]: [`Swap`], an unordered pair of adjacent cookies
//!
//! 3. **Collections**
//!    - [`unordered_set`]: [`UnorderedSet`], a deduplicating collection with no
//!      ordering guarantee
//!
//! Rows are numbered bottom-up: row 0 is the bottom visual row.
//!
//! # Examples
//!
//! ```
//! use crunch_core::{Cookie, CookieId, CookieType, Grid, Position};
//!
//! let mut grid = Grid::new(3, 3);
//! let cookie = Cookie::new(CookieId::new(0), Position::new(1, 2), CookieType::Donut);
//! grid.set(1, 2, Some(cookie));
//!
//! assert_eq!(grid.get(1, 2).map(|c| c.cookie_type()), Some(CookieType::Donut));
//! assert!(grid.get(0, 0).is_none());
//! ```

pub mod cookie;
pub mod grid;
pub mod position;
pub mod swap;
pub mod tile;
pub mod unordered_set;

pub use self::{
    cookie::{Cookie, CookieId, CookieType},
    grid::Grid,
    position::{Direction, Position},
    swap::Swap,
    tile::Tile,
    unordered_set::UnorderedSet,
};
