/// Board dimensions and generation limits for a [`Level`](crate::Level).
///
/// # Examples
///
/// ```
/// use crunch_level::LevelConfig;
///
/// let config = LevelConfig::default()
///     .with_dimensions(6, 8)
///     .with_max_shuffle_attempts(20);
/// assert_eq!((config.columns, config.rows), (6, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    /// Number of columns.
    pub columns: usize,
    /// Number of rows.
    pub rows: usize,
    /// Number of layouts a shuffle may generate before giving up.
    pub max_shuffle_attempts: usize,
}

impl LevelConfig {
    /// Default number of columns.
    pub const DEFAULT_COLUMNS: usize = 9;
    /// Default number of rows.
    pub const DEFAULT_ROWS: usize = 9;
    /// Default shuffle attempt limit.
    pub const DEFAULT_MAX_SHUFFLE_ATTEMPTS: usize = 100;

    /// Sets the board dimensions.
    #[must_use]
    pub const fn with_dimensions(self, columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ..self
        }
    }

    /// Sets the shuffle attempt limit.
    #[must_use]
    pub const fn with_max_shuffle_attempts(self, max_shuffle_attempts: usize) -> Self {
        Self {
            max_shuffle_attempts,
            ..self
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            columns: Self::DEFAULT_COLUMNS,
            rows: Self::DEFAULT_ROWS,
            max_shuffle_attempts: Self::DEFAULT_MAX_SHUFFLE_ATTEMPTS,
        }
    }
}
