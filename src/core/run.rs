//! The attendance loop: read a frame, hand it to the session, repeat.

use crate::core::command::ConsoleCommand;
use crate::core::session::{Control, Session};
use crate::errors::{AppError, AppResult};
use crate::reader::{Frame, LineSource};
use crate::ui::messages::{error, info, warning};
use std::io::{self, BufRead, ErrorKind};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    ExitCommand,
    InputClosed,
}

/// Forward stdin lines over a channel so the loop never blocks on the
/// keyboard. The thread only reads; all state stays with the loop.
pub fn spawn_console() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || forward_lines(io::stdin().lock(), &tx));
    rx
}

/// Send each line of `input` until it ends or the receiver goes away.
/// Lines that are not valid UTF-8 are reported and skipped.
fn forward_lines<R: BufRead>(input: R, tx: &Sender<String>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warning("Ignored console input that is not valid UTF-8");
                continue;
            }
            Err(_) => break,
        };
        if tx.send(line).is_err() {
            break;
        }
    }
}

pub struct RunLogic;

impl RunLogic {
    /// Run until `exit` is typed or the source closes. Decode and per-scan
    /// errors are reported and skipped; read failures end the loop.
    pub fn run<S: LineSource>(
        session: &mut Session,
        source: &mut S,
        console: Option<&Receiver<String>>,
    ) -> AppResult<StopReason> {
        let mut console_open = console.is_some();

        loop {
            if console_open
                && let Some(rx) = console
            {
                match Self::drain_console(session, rx) {
                    Ok(Some(reason)) => return Ok(reason),
                    Ok(None) => {}
                    Err(()) => console_open = false,
                }
            }

            match source.read_frame() {
                Ok(Frame::Line(line)) => {
                    if let Err(e) = session.handle_frame(&line) {
                        error(format!("Error processing data: {}", e));
                    }
                }
                Ok(Frame::Idle) => {}
                Ok(Frame::Closed) => {
                    info("Input closed");
                    return Ok(StopReason::InputClosed);
                }
                Err(AppError::Decode(msg)) => {
                    error(format!("Error processing data: {}", msg));
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Apply every queued console line. `Err(())` means the console is gone.
    fn drain_console(
        session: &mut Session,
        rx: &Receiver<String>,
    ) -> Result<Option<StopReason>, ()> {
        loop {
            let line = match rx.try_recv() {
                Ok(line) => line,
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => return Err(()),
            };

            if Self::apply_console_line(session, &line) == Control::Exit {
                return Ok(Some(StopReason::ExitCommand));
            }
        }
    }

    /// Parse and execute a console line, reporting any error.
    pub fn apply_console_line(session: &mut Session, line: &str) -> Control {
        let result = ConsoleCommand::parse(line).and_then(|cmd| match cmd {
            Some(cmd) => session.handle_command(cmd),
            None => Ok(Control::Continue),
        });

        match result {
            Ok(control) => control,
            Err(AppError::UnknownCommand(verb)) => {
                error(format!("Unknown command '{}'. Type 'help' for commands.", verb));
                Control::Continue
            }
            Err(e) => {
                error(e);
                Control::Continue
            }
        }
    }
}
