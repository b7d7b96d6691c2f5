//! Interactive mode: adjust brightness with `+` / `-` until `q`.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style, terminal, QueueableCommand,
};
use log::debug;

use crate::brightness::Direction;
use crate::error::Result;
use crate::session::Session;
use crate::signal::Interrupt;
use crate::usb::UsbHandle;

/// How often a pending key read wakes up to look for a termination signal.
const SIGNAL_POLL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Ctrl-C. Raw mode delivers it as a key instead of a signal.
    Interrupt,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Adjust(Direction),
    Quit,
    Ignore,
}

impl From<Key> for Action {
    fn from(key: Key) -> Self {
        match key {
            Key::Char('+') | Key::Char('=') => Action::Adjust(Direction::Brighten),
            Key::Char('-') | Key::Char('_') => Action::Adjust(Direction::Dim),
            Key::Char('q') | Key::Interrupt => Action::Quit,
            _ => Action::Ignore,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiState {
    Running,
    Exiting,
}

/// Key presses from the terminal. Each `next` blocks until a key arrives
/// or a termination signal is caught, which reads as `Key::Interrupt`.
pub struct TerminalKeys {
    interrupt: Interrupt,
}

impl TerminalKeys {
    pub fn new(interrupt: Interrupt) -> Self {
        TerminalKeys { interrupt }
    }
}

impl Iterator for TerminalKeys {
    type Item = io::Result<Key>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.interrupt.is_set() {
                return Some(Ok(Key::Interrupt));
            }
            match event::poll(SIGNAL_POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => return Some(Err(e)),
            }
            match event::read() {
                Ok(Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                })) => {
                    let key = match code {
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            Key::Interrupt
                        }
                        KeyCode::Char(c) => Key::Char(c),
                        _ => Key::Other,
                    };
                    return Some(Ok(key));
                }
                Ok(_) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Raw keyboard mode, left again when dropped.
pub struct RawMode(());

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode(()))
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            debug!("failed to restore terminal: {}", e);
        }
    }
}

fn draw<W: Write>(out: &mut W, percent: u8) -> io::Result<()> {
    out.queue(cursor::MoveToColumn(0))?
        .queue(terminal::Clear(terminal::ClearType::CurrentLine))?
        .queue(style::Print(format!("Brightness volume is {}%", percent)))?;
    out.flush()
}

/// Drive `session` from `keys`, drawing to `out`, until quit, the keys run
/// out, or `interrupt` is set. The first transfer error ends the loop.
pub fn run<H, K, W>(
    session: &mut Session<H>,
    keys: K,
    out: &mut W,
    interrupt: &Interrupt,
) -> Result<()>
where
    H: UsbHandle,
    K: IntoIterator<Item = io::Result<Key>>,
    W: Write,
{
    out.queue(style::Print("Press + / - to adjust brightness.\r\n"))?;
    draw(out, session.read_percent()?)?;

    let mut keys = keys.into_iter();
    let mut state = UiState::Running;
    while state == UiState::Running {
        if interrupt.is_set() {
            debug!("interrupted, leaving interactive mode");
            break;
        }
        state = match keys.next() {
            None => UiState::Exiting,
            Some(key) => match Action::from(key?) {
                Action::Adjust(direction) => {
                    let percent = session.run_once(direction)?;
                    draw(out, percent)?;
                    UiState::Running
                }
                Action::Quit => UiState::Exiting,
                Action::Ignore => UiState::Running,
            },
        };
    }

    out.queue(style::Print("\r\n"))?;
    out.flush()?;
    Ok(())
}

/// Interactive mode on the real terminal.
pub fn run_interactive<H: UsbHandle>(
    session: &mut Session<H>,
    interrupt: &Interrupt,
) -> Result<()> {
    let _raw = RawMode::enable()?;
    let mut stdout = io::stdout();
    run(session, TerminalKeys::new(interrupt.clone()), &mut stdout, interrupt)
}
