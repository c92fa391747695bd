use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use blockfall::{Command, Driver};

use crate::cli::Args;
use crate::ui::draw_game;

type Term = Terminal<CrosstermBackend<Stdout>>;

// Upper bound on how long input polling may block between redraws.
const MAX_POLL: Duration = Duration::from_millis(50);

pub fn run(args: &Args) -> anyhow::Result<()> {
    let mut tui = TuiGuard::new()?;
    let driver = Driver::new(args.new_game(), args.timing(), Instant::now());
    run_loop(tui.terminal_mut(), driver)
}

fn run_loop(terminal: &mut Term, mut driver: Driver) -> anyhow::Result<()> {
    loop {
        let snapshot = driver.snapshot();
        let last_lock = driver.last_lock();
        terminal.draw(|frame| draw_game(frame, &snapshot, last_lock))?;

        let now = Instant::now();
        let wait = driver
            .next_deadline()
            .map_or(MAX_POLL, |due| due.saturating_duration_since(now).min(MAX_POLL));

        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        break;
                    }
                    if let Some(command) = command_for_key(key.code) {
                        driver.handle(command, Instant::now());
                    }
                }
                _ => {}
            }
        }

        driver.poll(Instant::now());
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> anyhow::Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn command_for_key(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Up => Command::Rotate,
        KeyCode::Down => Command::SoftDrop,
        KeyCode::Char(' ') => Command::HardDrop,
        KeyCode::Char('p' | 'P') => Command::TogglePause,
        KeyCode::Char('r' | 'R') => Command::Restart,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_bindings() {
        assert_eq!(command_for_key(KeyCode::Left), Some(Command::MoveLeft));
        assert_eq!(command_for_key(KeyCode::Right), Some(Command::MoveRight));
        assert_eq!(command_for_key(KeyCode::Up), Some(Command::Rotate));
        assert_eq!(command_for_key(KeyCode::Down), Some(Command::SoftDrop));
        assert_eq!(command_for_key(KeyCode::Char(' ')), Some(Command::HardDrop));
        assert_eq!(command_for_key(KeyCode::Char('P')), Some(Command::TogglePause));
        assert_eq!(command_for_key(KeyCode::Char('r')), Some(Command::Restart));
        assert_eq!(command_for_key(KeyCode::Char('x')), None);
    }
}
