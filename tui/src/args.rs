//! Parsing command-line arguments.

use clap::{command, error::ErrorKind, value_parser, Arg, Command, Error};
use conway_life_lib::{Config, Fill, Grid, Life};
use log::info;
use std::{
    error::Error as StdError,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse() {
        Ok(0) | Err(_) => Err(String::from("must be a positive integer")),
        Ok(n) => Ok(n),
    }
}

/// Reads a configuration file. The format is chosen by the extension:
/// `.toml`, `.yaml` / `.yml`, or JSON for anything else.
fn read_config(path: &Path) -> Result<Config, Box<dyn StdError>> {
    let text = fs::read_to_string(path)?;
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&text)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
        _ => serde_json::from_str(&text)?,
    };
    Ok(config)
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) life: Life,
    pub(crate) delay: Duration,
    pub(crate) generations: Option<u64>,
    pub(crate) save: Option<PathBuf>,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

impl Args {
    fn command() -> Command {
        let cmd = command!()
            .long_about(
                "Conway's Game of Life in the terminal\n\
                 \n\
                 The grid is bounded: cells outside it are always dead.\n\
                 Living cells are shown as `◼️`, dead cells as `◻️`.\n\
                 \n\
                 Saved grids are plain text: `1` for a living cell, `0` for \
                 a dead cell, one line per row.\n",
            )
            .arg(
                Arg::new("WIDTH")
                    .help("Width of the grid")
                    .index(1)
                    .required_unless_present_any(["LOAD", "CONFIG"])
                    .value_parser(parse_positive),
            )
            .arg(
                Arg::new("HEIGHT")
                    .help("Height of the grid")
                    .index(2)
                    .required_unless_present_any(["LOAD", "CONFIG"])
                    .value_parser(parse_positive),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads the configuration from a file")
                    .long_help(
                        "Reads the configuration from a file\n\
                         TOML, YAML or JSON, chosen by the file extension.\n\
                         Other arguments override the values in the file.\n",
                    )
                    .short('c')
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("LOAD")
                    .help("Starts from a saved grid instead of a random one")
                    .short('l')
                    .long("load")
                    .value_parser(value_parser!(PathBuf))
                    .conflicts_with_all(["WIDTH", "HEIGHT", "CONFIG", "FILL", "PERCENT", "SEED"]),
            )
            .arg(
                Arg::new("FILL")
                    .help("Each cell is initially alive with probability 1/N")
                    .short('f')
                    .long("fill")
                    .value_name("N")
                    .value_parser(value_parser!(u32).range(1..)),
            )
            .arg(
                Arg::new("PERCENT")
                    .help("Each cell is initially alive with probability P/100")
                    .short('p')
                    .long("percent")
                    .value_name("P")
                    .value_parser(value_parser!(u32).range(0..=100))
                    .conflicts_with("FILL"),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed of the random number generator")
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("DELAY")
                    .help("Pause between generations, in milliseconds")
                    .short('d')
                    .long("delay")
                    .default_value("100")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Stops after this many generations")
                    .long_help(
                        "Stops after this many generations\n\
                         Without it, the simulation runs until interrupted.\n",
                    )
                    .short('g')
                    .long("generations")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("SAVE")
                    .help("Saves the last generation to a file")
                    .short('s')
                    .long("save")
                    .value_parser(value_parser!(PathBuf))
                    .requires("GENERATIONS"),
            );

        #[cfg(feature = "tui")]
        let cmd = cmd.arg(
            Arg::new("NOTUI")
                .help("Prints the generations one after another, without clearing the screen")
                .short('n')
                .long("no-tui")
                .action(clap::ArgAction::SetTrue),
        );

        cmd
    }

    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        let mut cmd = Self::command();
        let matches = cmd.try_get_matches_from_mut(std::env::args_os())?;

        let life = if let Some(path) = matches.get_one::<PathBuf>("LOAD") {
            let grid = Grid::load(path).map_err(|e| {
                cmd.error(
                    ErrorKind::Io,
                    format!("cannot load {}: {}", path.display(), e),
                )
            })?;
            if grid.size() == (0, 0) {
                return Err(cmd.error(
                    ErrorKind::InvalidValue,
                    format!("{} contains an empty grid", path.display()),
                ));
            }
            info!("loaded {}x{} grid", grid.width(), grid.height());
            Life::new(grid)
        } else {
            let mut config = match matches.get_one::<PathBuf>("CONFIG") {
                Some(path) => read_config(path).map_err(|e| {
                    cmd.error(
                        ErrorKind::Io,
                        format!("cannot read {}: {}", path.display(), e),
                    )
                })?,
                None => Config::default(),
            };
            if let Some(&width) = matches.get_one::<usize>("WIDTH") {
                config.width = width;
            }
            if let Some(&height) = matches.get_one::<usize>("HEIGHT") {
                config.height = height;
            }
            if let Some(&n) = matches.get_one::<u32>("FILL") {
                config = config.set_fill(Fill::OneIn(n));
            }
            if let Some(&p) = matches.get_one::<u32>("PERCENT") {
                config = config.set_fill(Fill::Percent(p));
            }
            if let Some(&seed) = matches.get_one::<u64>("SEED") {
                config = config.set_rng_seed(seed);
            }
            config
                .life()
                .map_err(|e| cmd.error(ErrorKind::InvalidValue, e))?
        };

        let delay = matches.get_one::<u64>("DELAY").copied().unwrap_or(100);

        Ok(Args {
            life,
            delay: Duration::from_millis(delay),
            generations: matches.get_one::<u64>("GENERATIONS").copied(),
            save: matches.get_one::<PathBuf>("SAVE").cloned(),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}
