//! Shuffles every bundled level layout and checks the starting-board invariants.

use std::path::PathBuf;

use crunch_layout::{DirectorySource, TileLayoutSource as _};
use crunch_level::{Level, LevelConfig, LevelSeed};

const LEVELS: [&str; 3] = ["Level_0", "Level_1", "Level_2"];

fn source() -> DirectorySource {
    DirectorySource::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../levels"))
}

#[test]
fn test_bundled_levels_shuffle() {
    let source = source();
    for name in LEVELS {
        let layout = source.load_tile_layout(name).unwrap();
        for byte in 0..8 {
            let mut level = Level::from_source(&source, name, LevelConfig::default()).unwrap();
            let cookies = level.shuffle_with_seed(LevelSeed::from([byte; 32])).unwrap();

            assert_eq!(cookies.len(), layout.playable_count(), "{name}");
            assert!(!level.possible_swaps().is_empty(), "{name}");
            for cookie in &cookies {
                assert!(
                    !level.has_chain_at(cookie.position()),
                    "{name}: chain at {}",
                    cookie.position()
                );
                assert!(level.tile_at(cookie.column(), cookie.row()).is_some());
            }
        }
    }
}

#[test]
fn test_every_legal_swap_creates_a_chain() {
    let source = source();
    let mut level = Level::from_source(&source, "Level_1", LevelConfig::default()).unwrap();
    level.shuffle_with_seed(LevelSeed::from([42; 32])).unwrap();

    let swaps: Vec<_> = level.possible_swaps().iter().copied().collect();
    for swap in swaps {
        let mut scratch = level.clone();
        scratch.perform_swap(&swap);
        let a = swap.cookie_a().position();
        let b = swap.cookie_b().position();
        assert!(
            scratch.has_chain_at(a) || scratch.has_chain_at(b),
            "no chain after {swap}"
        );
    }
}

#[test]
fn test_missing_level_is_unplayable() {
    let mut level = Level::from_source(&source(), "Level_404", LevelConfig::default()).unwrap();
    assert_eq!(level.cookies().count(), 0);
    assert!(level.shuffle().is_err());
}
