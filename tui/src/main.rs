mod args;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use log::{error, info};
use std::{error::Error, io::Write, process, thread};

/// Prints the generations one after another.
fn run_plain(args: &mut Args) -> Result<(), Box<dyn Error>> {
    let stdout = std::io::stdout();
    loop {
        {
            let mut out = stdout.lock();
            writeln!(out, "Generation: {}", args.life.generation())?;
            writeln!(out, "{}", args.life.current())?;
            out.flush()?;
        }
        if Some(args.life.generation()) == args.generations {
            return Ok(());
        }
        args.life.advance();
        thread::sleep(args.delay);
    }
}

fn run(mut args: Args) -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "tui")]
    {
        if args.no_tui {
            run_plain(&mut args)?;
        } else {
            tui::run_with_tui(&mut args.life, args.delay, args.generations)?;
        }
    }
    #[cfg(not(feature = "tui"))]
    run_plain(&mut args)?;

    if let Some(path) = &args.save {
        args.life.current().save_state(path)?;
        info!(
            "saved generation {} to {}",
            args.life.generation(),
            path.display()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
