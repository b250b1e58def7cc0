use conway_life_lib::{next_generation, Config, Error, Fill, Grid, Life};
use rand::{rngs::StdRng, SeedableRng};
use std::{env, error::Error as StdError, fs, path::PathBuf};

fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("conway-life-{}-{}", std::process::id(), name))
}

const NEIGHBORS: [(usize, usize); 8] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (0, 1),
    (2, 1),
    (0, 2),
    (1, 2),
    (2, 2),
];

#[test]
fn new_grid_is_dead() -> Result<(), Box<dyn StdError>> {
    let grid = Grid::new(4, 3)?;
    assert_eq!(grid.size(), (4, 3));
    assert_eq!(grid.cell_count(), 0);
    assert_eq!(grid.rows().count(), 3);
    assert!(grid.rows().all(|row| row.len() == 4));
    Ok(())
}

#[test]
fn non_positive() {
    assert!(matches!(Grid::new(0, 3), Err(Error::NonPositiveError)));
    assert!(matches!(Grid::new(3, 0), Err(Error::NonPositiveError)));
}

#[test]
fn too_large() {
    assert!(matches!(
        Grid::new(usize::MAX, 2),
        Err(Error::TooLarge(usize::MAX, 2))
    ));
    assert!(matches!(
        Config::new(2, usize::MAX).life(),
        Err(Error::TooLarge(2, usize::MAX))
    ));
}

#[test]
fn set_outside() -> Result<(), Box<dyn StdError>> {
    let mut grid = Grid::new(3, 3)?;
    assert!(matches!(grid.set(3, 0, true), Err(Error::SetCellError(3, 0))));
    assert_eq!(grid.get(0, 3), None);
    grid.set(2, 1, true)?;
    assert_eq!(grid.get(2, 1), Some(true));
    Ok(())
}

#[test]
fn neighbor_count_bounded() -> Result<(), Box<dyn StdError>> {
    let grid: Grid = "111\n111\n111".parse()?;
    assert_eq!(grid.neighbor_count(1, 1), 8);
    assert_eq!(grid.neighbor_count(0, 0), 3);
    assert_eq!(grid.neighbor_count(1, 0), 5);
    for y in 0..3 {
        for x in 0..3 {
            assert!(grid.neighbor_count(x, y) <= 8);
        }
    }
    Ok(())
}

#[test]
fn transition_table() -> Result<(), Box<dyn StdError>> {
    for alive in [false, true] {
        for n in 0..=8 {
            let mut grid = Grid::new(3, 3)?;
            grid.set(1, 1, alive)?;
            for &(x, y) in NEIGHBORS.iter().take(n) {
                grid.set(x, y, true)?;
            }
            assert_eq!(grid.neighbor_count(1, 1) as usize, n);
            let expected = if alive { n == 2 || n == 3 } else { n == 3 };
            assert_eq!(
                grid.next_cell_state(1, 1),
                expected,
                "alive: {}, neighbors: {}",
                alive,
                n
            );
        }
    }
    Ok(())
}

#[test]
fn lone_cell_dies() -> Result<(), Box<dyn StdError>> {
    let grid: Grid = "000\n010\n000".parse()?;
    let mut next = Grid::new(3, 3)?;
    next_generation(&grid, &mut next)?;
    assert_eq!(next, Grid::new(3, 3)?);
    assert_eq!(grid.cell_count(), 1);
    Ok(())
}

#[test]
fn blinker() -> Result<(), Box<dyn StdError>> {
    let grid: Grid = "000\n111\n000".parse()?;
    assert_eq!(grid.neighbor_count(1, 1), 2);
    assert_eq!(grid.neighbor_count(1, 0), 3);
    assert_eq!(grid.neighbor_count(1, 2), 3);
    assert_eq!(grid.neighbor_count(0, 0), 2);
    let mut next = Grid::new(3, 3)?;
    next_generation(&grid, &mut next)?;
    assert_eq!(next, "010\n010\n010".parse::<Grid>()?);
    Ok(())
}

#[test]
fn size_mismatch() -> Result<(), Box<dyn StdError>> {
    let grid: Grid = "010\n010\n010".parse()?;
    let mut next = Grid::new(3, 2)?;
    assert!(matches!(
        next_generation(&grid, &mut next),
        Err(Error::SizeMismatch((3, 3), (3, 2)))
    ));
    assert_eq!(next.cell_count(), 0);
    Ok(())
}

#[test]
fn render() -> Result<(), Box<dyn StdError>> {
    let grid: Grid = "10\n01".parse()?;
    let text = grid.render();
    assert_eq!(text, "◼️◻️\n◻️◼️\n");
    assert_eq!(grid.render(), text);
    assert_eq!(grid.to_string(), text);
    Ok(())
}

#[test]
fn write_state() -> Result<(), Box<dyn StdError>> {
    let grid: Grid = "101\n010".parse()?;
    let mut buf = Vec::new();
    grid.write_state(&mut buf)?;
    assert_eq!(buf, b"101\n010");
    Ok(())
}

#[test]
fn read_state_trailing_newline() -> Result<(), Box<dyn StdError>> {
    let grid = Grid::read_state(&b"01\r\n10\n"[..])?;
    assert_eq!(grid.size(), (2, 2));
    assert_eq!(grid.get(1, 0), Some(true));
    assert_eq!(grid.get(0, 1), Some(true));
    Ok(())
}

#[test]
fn read_state_empty() -> Result<(), Box<dyn StdError>> {
    let grid: Grid = "".parse()?;
    assert_eq!(grid.size(), (0, 0));
    assert_eq!(grid.render(), "");
    Ok(())
}

#[test]
fn read_state_empty_lines() -> Result<(), Box<dyn StdError>> {
    let grid: Grid = "\n\n".parse()?;
    assert_eq!(grid.size(), (0, 0));
    assert_eq!(grid.rows().count(), 0);
    Ok(())
}

#[test]
fn read_state_empty_first_line() {
    assert!(matches!(
        "\n101".parse::<Grid>(),
        Err(Error::InconsistentWidth {
            line: 2,
            expected: 0,
            found: 3,
        })
    ));
}

#[test]
fn inconsistent_width() {
    assert!(matches!(
        "101\n10".parse::<Grid>(),
        Err(Error::InconsistentWidth {
            line: 2,
            expected: 3,
            found: 2,
        })
    ));
}

#[test]
fn invalid_char() {
    assert!(matches!(
        "1x0".parse::<Grid>(),
        Err(Error::InvalidChar {
            line: 1,
            column: 2,
            found: b'x',
        })
    ));
}

#[test]
fn invalid_byte() {
    assert!(matches!(
        Grid::read_state(&b"10\n1\xff"[..]),
        Err(Error::InvalidChar {
            line: 2,
            column: 2,
            found: 0xff,
        })
    ));
}

#[test]
fn save_and_load() -> Result<(), Box<dyn StdError>> {
    let path = temp_path("save-and-load");
    let mut grid = Grid::new(5, 4)?;
    grid.seed(&mut StdRng::seed_from_u64(7), 3)?;
    grid.save_state(&path)?;
    assert_eq!(fs::read_to_string(&path)?.lines().count(), 4);

    let mut loaded = Grid::new(1, 1)?;
    loaded.load_state(&path)?;
    fs::remove_file(&path)?;
    assert_eq!(loaded, grid);
    Ok(())
}

#[test]
fn failed_load_keeps_grid() -> Result<(), Box<dyn StdError>> {
    let path = temp_path("failed-load");
    let mut grid: Grid = "11\n01".parse()?;
    let before = grid.clone();

    fs::write(&path, "101\n10")?;
    let result = grid.load_state(&path);
    assert!(matches!(result, Err(Error::InconsistentWidth { .. })));
    assert_eq!(grid, before);

    fs::write(&path, "1x0")?;
    let result = grid.load_state(&path);
    assert!(matches!(result, Err(Error::InvalidChar { .. })));
    assert_eq!(grid, before);

    fs::remove_file(&path)?;
    let result = grid.load_state(&path);
    assert!(matches!(result, Err(Error::Io(_))));
    assert_eq!(grid, before);
    Ok(())
}

#[test]
fn seed_extremes() -> Result<(), Box<dyn StdError>> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut grid = Grid::new(6, 6)?;
    assert!(matches!(
        grid.seed(&mut rng, 0),
        Err(Error::NonPositiveError)
    ));
    grid.seed(&mut rng, 1)?;
    assert_eq!(grid.cell_count(), 36);

    let mut grid = Grid::new(6, 6)?;
    grid.rand_init(&mut rng, 0);
    assert_eq!(grid.cell_count(), 0);
    grid.rand_init(&mut rng, 150);
    assert_eq!(grid.cell_count(), 36);
    Ok(())
}

#[test]
fn seed_accumulates() -> Result<(), Box<dyn StdError>> {
    let mut rng = StdRng::seed_from_u64(2);
    let mut grid = Grid::new(10, 10)?;
    grid.seed(&mut rng, 4)?;
    let first = grid.clone();
    grid.seed(&mut rng, 4)?;
    assert!(grid.cell_count() >= first.cell_count());
    for y in 0..10 {
        for x in 0..10 {
            if first.get(x, y) == Some(true) {
                assert_eq!(grid.get(x, y), Some(true));
            }
        }
    }
    Ok(())
}

#[test]
fn life_swaps() -> Result<(), Box<dyn StdError>> {
    let horizontal: Grid = "00000\n00000\n01110\n00000\n00000".parse()?;
    let vertical: Grid = "00000\n00100\n00100\n00100\n00000".parse()?;
    let mut life = Life::new(horizontal.clone());
    let first = life.current().rows().next().map(|row| row.as_ptr());

    assert_eq!(life.advance(), &vertical);
    assert_eq!(life.advance(), &horizontal);
    assert_eq!(life.generation(), 2);
    assert_eq!(life.current().rows().next().map(|row| row.as_ptr()), first);

    life.set_cell(2, 2, false)?;
    assert_eq!(life.current().cell_count(), 2);
    assert_eq!(life.advance().cell_count(), 0);
    assert_eq!(life.into_grid(), Grid::new(5, 5)?);
    Ok(())
}

#[test]
fn config() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(8, 6).set_rng_seed(Some(42));
    let grid = config.grid()?;
    assert_eq!(grid.size(), (8, 6));
    assert_eq!(grid, config.grid()?);

    let life = config.clone().set_fill(Fill::Empty).life()?;
    assert_eq!(life.current().cell_count(), 0);
    assert_eq!(life.generation(), 0);

    let full = config.clone().set_fill(Fill::Percent(100)).grid()?;
    assert_eq!(full.cell_count(), 48);

    assert!(matches!(
        Config::new(0, 6).life(),
        Err(Error::NonPositiveError)
    ));
    assert!(matches!(
        config.set_fill(Fill::OneIn(0)).grid(),
        Err(Error::NonPositiveError)
    ));
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn config_ser() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(30, 10)
        .set_fill(Fill::Percent(40))
        .set_rng_seed(Some(3));
    let json = serde_json::to_string(&config)?;
    assert_eq!(serde_json::from_str::<Config>(&json)?, config);

    let partial: Config = serde_json::from_str(r#"{"width": 5}"#)?;
    assert_eq!(
        partial,
        Config {
            width: 5,
            ..Config::default()
        }
    );
    Ok(())
}
