use conway_life_lib::Life;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

/// Shows one generation at a time, clearing the screen in between.
///
/// Runs until `generations` steps have been taken, or forever.
pub(crate) fn run_with_tui(
    life: &mut Life,
    delay: Duration,
    generations: Option<u64>,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    loop {
        queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        write!(stdout, "{}", life.current())?;
        write!(
            stdout,
            "Gen: {}  Cells: {}",
            life.generation(),
            life.current().cell_count()
        )?;
        stdout.flush()?;
        if Some(life.generation()) == generations {
            writeln!(stdout)?;
            return Ok(());
        }
        life.advance();
        thread::sleep(delay);
    }
}
