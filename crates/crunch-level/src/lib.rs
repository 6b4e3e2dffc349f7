//! The Crunch level engine.
//!
//! A [`Level`] owns the playable-tile mask and the cookie layer of one board. It
//! generates starting layouts, answers which swaps are legal, and applies swaps.
//!
//! # Invariants
//!
//! After a successful shuffle:
//!
//! - no row or column contains a run of three or more cookies of the same type;
//! - at least one legal swap exists.
//!
//! A swap is legal when exchanging the two cookies creates a run of three or more
//! at either of the two cells. Legality is derived by tentatively exchanging the
//! cookies and checking for runs, never from a lookup table.
//!
//! # Examples
//!
//! ```
//! use crunch_layout::TileLayout;
//! use crunch_level::{Level, LevelConfig, LevelSeed, SwapOutcome};
//!
//! let mut level = Level::new(LevelConfig::default(), &TileLayout::filled(9, 9))?;
//! let seed: LevelSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff".parse()?;
//! let cookies = level.shuffle_with_seed(seed)?;
//! assert_eq!(cookies.len(), 81);
//!
//! let swap = *level.possible_swaps().iter().next().expect("a legal swap exists");
//! assert_eq!(level.try_swap(&swap), SwapOutcome::Performed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{config::*, error::*, level::*, seed::*};

mod chain;
mod config;
mod error;
mod level;
mod seed;
