use crunch_core::{
    Cookie, CookieId, CookieType, Direction, Grid, Position, Swap, Tile, UnorderedSet,
};
use crunch_layout::{TileLayout, TileLayoutSource};
use rand::Rng;

use crate::{
    LevelConfig, LevelError, LevelSeed,
    chain::{self, MIN_CHAIN_LENGTH},
};

/// Result of [`Level::try_swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SwapOutcome {
    /// The swap was legal and has been applied.
    Performed,
    /// The swap was not legal; the board is unchanged.
    Invalid,
}

/// The rule engine for one board.
///
/// A level holds two layers of the same size: the tile mask, fixed at
/// construction, and the cookie layer, filled by [`Level::shuffle`] and mutated by
/// swaps. It also caches the set of legal swaps for the current cookie layer.
///
/// Rows are numbered bottom-up. Layouts are given top-row-first and are flipped
/// on construction.
#[derive(Debug, Clone)]
pub struct Level {
    config: LevelConfig,
    tiles: Grid<Tile>,
    cookies: Grid<Cookie>,
    possible_swaps: UnorderedSet<Swap>,
    next_cookie_id: CookieId,
}

impl Level {
    /// Creates a level with the playable cells of `layout` and no cookies.
    ///
    /// Visual row `r` of the layout becomes row `config.rows - r - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::LayoutTooLarge`] if the layout has more rows or
    /// columns than the configured board.
    ///
    /// # Examples
    ///
    /// ```
    /// use crunch_layout::TileLayout;
    /// use crunch_level::{Level, LevelConfig};
    ///
    /// let layout: TileLayout = "100\n111".parse()?;
    /// let level = Level::new(LevelConfig::default().with_dimensions(3, 2), &layout)?;
    ///
    /// // The top visual row is the highest row index.
    /// assert!(level.tile_at(0, 1).is_some());
    /// assert!(level.tile_at(1, 1).is_none());
    /// assert!(level.tile_at(1, 0).is_some());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(config: LevelConfig, layout: &TileLayout) -> Result<Self, LevelError> {
        if layout.column_count() > config.columns || layout.row_count() > config.rows {
            return Err(LevelError::LayoutTooLarge {
                columns: layout.column_count(),
                rows: layout.row_count(),
                max_columns: config.columns,
                max_rows: config.rows,
            });
        }

        let mut tiles = Grid::new(config.columns, config.rows);
        for (visual_row, cells) in layout.rows().enumerate() {
            let row = config.rows - visual_row - 1;
            for (column, &playable) in cells.iter().enumerate() {
                if playable {
                    tiles.set(column, row, Some(Tile));
                }
            }
        }

        Ok(Self {
            config,
            tiles,
            cookies: Grid::new(config.columns, config.rows),
            possible_swaps: UnorderedSet::new(),
            next_cookie_id: CookieId::new(0),
        })
    }

    /// Creates a level from the layout called `name` in `source`.
    ///
    /// A layout that cannot be loaded is logged and replaced by an empty mask, so
    /// the level is still constructed; shuffling it reports
    /// [`LevelError::NoPlayableTiles`].
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::LayoutTooLarge`] if the loaded layout does not fit the
    /// configured board.
    pub fn from_source<S>(
        source: &S,
        name: &str,
        config: LevelConfig,
    ) -> Result<Self, LevelError>
    where
        S: TileLayoutSource + ?Sized,
    {
        let layout = source.load_tile_layout(name).unwrap_or_else(|err| {
            log::warn!("failed to load level {name:?}, using an empty layout: {err}");
            TileLayout::empty()
        });
        Self::new(config, &layout)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.config.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Returns the tile at `(column, row)`, or `None` for an unplayable cell.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn tile_at(&self, column: usize, row: usize) -> Option<&Tile> {
        self.tiles.get(column, row)
    }

    /// Returns the cookie at `(column, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn cookie_at(&self, column: usize, row: usize) -> Option<&Cookie> {
        self.cookies.get(column, row)
    }

    /// Iterates over every cookie on the board in row-major order.
    pub fn cookies(&self) -> impl Iterator<Item = &Cookie> + '_ {
        self.cookies.iter().map(|(_, cookie)| cookie)
    }

    /// Returns the cached set of legal swaps.
    #[must_use]
    pub fn possible_swaps(&self) -> &UnorderedSet<Swap> {
        &self.possible_swaps
    }

    /// Fills the board with a fresh layout using a random seed.
    ///
    /// See [`Level::shuffle_with_rng`].
    ///
    /// # Errors
    ///
    /// See [`Level::shuffle_with_rng`].
    pub fn shuffle(&mut self) -> Result<UnorderedSet<Cookie>, LevelError> {
        self.shuffle_with_seed(LevelSeed::random())
    }

    /// Fills the board with the layout determined by `seed`.
    ///
    /// The same seed on the same tile mask always yields the same layout.
    ///
    /// # Errors
    ///
    /// See [`Level::shuffle_with_rng`].
    pub fn shuffle_with_seed(
        &mut self,
        seed: LevelSeed,
    ) -> Result<UnorderedSet<Cookie>, LevelError> {
        log::debug!("shuffling with seed {seed}");
        self.shuffle_with_rng(&mut seed.to_rng())
    }

    /// Fills the board with a fresh layout and returns the new cookies.
    ///
    /// Every tiled cell receives a cookie whose type does not complete a run of
    /// three with the two cells to its left or the two cells below it. The layout
    /// is accepted only if it has at least one legal swap; otherwise it is
    /// discarded and regenerated, up to
    /// [`LevelConfig::max_shuffle_attempts`] times. The legal-swap cache is
    /// refreshed for the accepted layout.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::NoPlayableTiles`] if the level has no tiles, or
    /// [`LevelError::UngenerableLayout`] if no attempt produced a legal swap. In
    /// both cases the board is left empty.
    pub fn shuffle_with_rng<R>(
        &mut self,
        rng: &mut R,
    ) -> Result<UnorderedSet<Cookie>, LevelError>
    where
        R: Rng + ?Sized,
    {
        if self.tiles.iter().next().is_none() {
            self.clear_cookies();
            return Err(LevelError::NoPlayableTiles);
        }

        let attempts = self.config.max_shuffle_attempts;
        for attempt in 1..=attempts {
            let cookies = self.create_initial_cookies(rng);
            self.detect_possible_swaps();
            if !self.possible_swaps.is_empty() {
                log::info!(
                    "generated layout with {} cookies and {} possible swaps in {attempt} attempt(s)",
                    cookies.len(),
                    self.possible_swaps.len(),
                );
                return Ok(cookies);
            }
            log::debug!("attempt {attempt} produced no possible swaps, retrying");
        }

        self.clear_cookies();
        Err(LevelError::UngenerableLayout { attempts })
    }

    fn clear_cookies(&mut self) {
        self.cookies.clear();
        self.possible_swaps.clear();
    }

    fn create_initial_cookies<R>(&mut self, rng: &mut R) -> UnorderedSet<Cookie>
    where
        R: Rng + ?Sized,
    {
        self.cookies.clear();
        let mut set = UnorderedSet::new();
        for pos in self.tiles.positions() {
            if self.tiles[pos].is_none() {
                continue;
            }
            let cookie_type = self.choose_cookie_type(pos, rng);
            let cookie = Cookie::new(self.allocate_cookie_id(), pos, cookie_type);
            self.cookies[pos] = Some(cookie);
            set.insert(cookie);
        }
        set
    }

    /// Picks a type for `pos` that does not complete a run with the already
    /// populated cells to the left and below.
    fn choose_cookie_type<R>(&self, pos: Position, rng: &mut R) -> CookieType
    where
        R: Rng + ?Sized,
    {
        let mut excluded = Vec::with_capacity(2);
        for direction in [Direction::Left, Direction::Down] {
            let Some(prev) = pos.neighbor(direction) else {
                continue;
            };
            let Some(prev) = self.cookies[prev] else {
                continue;
            };
            let ty = prev.cookie_type();
            if chain::run_length(&self.cookies, pos, direction, ty) >= MIN_CHAIN_LENGTH - 1 {
                excluded.push(ty);
            }
        }
        let Some(ty) = CookieType::random_excluding(rng, &excluded) else {
            unreachable!(
                "at most two of {} cookie types are excluded",
                CookieType::ALL.len()
            )
        };
        ty
    }

    fn allocate_cookie_id(&mut self) -> CookieId {
        let id = self.next_cookie_id;
        self.next_cookie_id = id.next();
        id
    }

    /// Places cookies of the given types and refreshes the legal-swap cache.
    ///
    /// Existing cookies are removed first. No run or legal-swap invariant is
    /// enforced, which makes this suitable for restoring a saved board.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::UntiledCell`] if a cookie targets a cell without a
    /// tile. The board is left empty in that case.
    ///
    /// # Panics
    ///
    /// Panics if a position is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use crunch_core::{CookieType, Position};
    /// use crunch_layout::TileLayout;
    /// use crunch_level::{Level, LevelConfig};
    ///
    /// let config = LevelConfig::default().with_dimensions(4, 1);
    /// let mut level = Level::new(config, &TileLayout::filled(4, 1))?;
    /// level.restore(
    ///     [1, 1, 2, 1]
    ///         .into_iter()
    ///         .enumerate()
    ///         .map(|(column, raw)| (Position::new(column, 0), CookieType::from_raw(raw).unwrap())),
    /// )?;
    ///
    /// let swap = level.swap_between(Position::new(2, 0), Position::new(3, 0)).unwrap();
    /// assert!(level.is_possible_swap(&swap));
    /// # Ok::<(), crunch_level::LevelError>(())
    /// ```
    pub fn restore<I>(&mut self, cookies: I) -> Result<UnorderedSet<Cookie>, LevelError>
    where
        I: IntoIterator<Item = (Position, CookieType)>,
    {
        self.clear_cookies();
        let mut set = UnorderedSet::new();
        for (pos, cookie_type) in cookies {
            if self.tiles[pos].is_none() {
                self.clear_cookies();
                return Err(LevelError::UntiledCell { position: pos });
            }
            let cookie = Cookie::new(self.allocate_cookie_id(), pos, cookie_type);
            if let Some(replaced) = self.cookies[pos].replace(cookie) {
                set.remove(&replaced);
            }
            set.insert(cookie);
        }
        self.detect_possible_swaps();
        Ok(set)
    }

    /// Recomputes the set of legal swaps for the current board.
    ///
    /// Every pair of horizontally or vertically adjacent cookies is exchanged in
    /// storage, checked for a chain at either cell, and exchanged back. The
    /// cookies' own positions are not touched.
    pub fn detect_possible_swaps(&mut self) -> &UnorderedSet<Swap> {
        let mut set = UnorderedSet::new();
        for pos in self.cookies.positions() {
            let Some(cookie) = self.cookies[pos] else {
                continue;
            };
            for direction in [Direction::Right, Direction::Up] {
                let Some(other_pos) = pos
                    .neighbor(direction)
                    .filter(|p| self.cookies.contains(p.column, p.row))
                else {
                    continue;
                };
                let Some(other) = self.cookies[other_pos] else {
                    continue;
                };

                self.cookies.swap(pos, other_pos);
                let legal = chain::has_chain_at(&self.cookies, pos)
                    || chain::has_chain_at(&self.cookies, other_pos);
                self.cookies.swap(pos, other_pos);

                log::trace!("{pos} <-> {other_pos}: legal={legal}");
                if legal {
                    set.insert(Swap::new(cookie, other));
                }
            }
        }
        self.possible_swaps = set;
        &self.possible_swaps
    }

    /// Returns `true` if the cookie at `pos` is part of a run of three or more
    /// along its row or its column.
    ///
    /// Empty cells never form a chain.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn has_chain_at(&self, pos: Position) -> bool {
        chain::has_chain_at(&self.cookies, pos)
    }

    /// Returns `true` if `swap` is in the cached legal-swap set and its cookies
    /// still sit at the positions it was built from.
    ///
    /// A swap built before one of its cookies moved is never possible, even when
    /// the same pair of cookies has become legal to exchange elsewhere.
    #[must_use]
    pub fn is_possible_swap(&self, swap: &Swap) -> bool {
        self.is_current(swap) && self.possible_swaps.contains(swap)
    }

    /// Returns `true` if both cells named by `swap` hold the cookies it carries.
    fn is_current(&self, swap: &Swap) -> bool {
        [swap.cookie_a(), swap.cookie_b()].into_iter().all(|cookie| {
            let pos = cookie.position();
            self.cookies.contains(pos.column, pos.row)
                && self.cookies[pos].map(|c| c.id()) == Some(cookie.id())
        })
    }

    /// Exchanges the two cookies of `swap` and updates their positions.
    ///
    /// Legality is not checked: callers check [`Level::is_possible_swap`] first.
    /// The legal-swap cache is recomputed afterwards, so any previously held
    /// [`Cookie`] values carry stale positions.
    ///
    /// # Panics
    ///
    /// Panics if a cookie of `swap` no longer sits at the position recorded in
    /// the swap, or if that position is out of bounds.
    #[track_caller]
    pub fn perform_swap(&mut self, swap: &Swap) {
        assert!(self.is_current(swap), "stale swap: {swap}");
        let pos_a = swap.cookie_a().position();
        let pos_b = swap.cookie_b().position();
        log::debug!("performing swap {pos_a} <-> {pos_b}");

        self.cookies.swap(pos_a, pos_b);
        for pos in [pos_a, pos_b] {
            if let Some(cookie) = &mut self.cookies[pos] {
                cookie.set_position(pos);
            }
        }
        self.detect_possible_swaps();
    }

    /// Applies `swap` if it is legal.
    ///
    /// Returns [`SwapOutcome::Invalid`] and leaves the board untouched otherwise.
    pub fn try_swap(&mut self, swap: &Swap) -> SwapOutcome {
        if self.is_possible_swap(swap) {
            self.perform_swap(swap);
            SwapOutcome::Performed
        } else {
            log::debug!("rejected {swap}");
            SwapOutcome::Invalid
        }
    }

    /// Builds the swap requested between two cells.
    ///
    /// Returns `None` if either cell is outside the board or empty, or if the
    /// cells are not orthogonally adjacent.
    #[must_use]
    pub fn swap_between(&self, a: Position, b: Position) -> Option<Swap> {
        if !a.is_adjacent_to(b)
            || !self.cookies.contains(a.column, a.row)
            || !self.cookies.contains(b.column, b.row)
        {
            return None;
        }
        let cookie_a = self.cookies[a]?;
        let cookie_b = self.cookies[b]?;
        Some(Swap::new(cookie_a, cookie_b))
    }
}
