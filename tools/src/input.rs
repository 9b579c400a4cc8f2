//! Stdin on its own thread, so the main loop keeps polling the scheduler
//! while nobody is typing.

use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::Duration,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Nothing arrived within the poll interval.
    Idle,
    /// Stdin reached EOF or failed.
    Closed,
}

/// Spawn a reader that forwards every stdin line until EOF.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::warn!("input: stdin read failed: {e}");
                    break;
                }
            }
        }
    });
    rx
}

/// Wait at most `interval` for the next line.
pub fn next_input(rx: &Receiver<String>, interval: Duration) -> Input {
    match rx.recv_timeout(interval) {
        Ok(line) => Input::Line(line),
        Err(RecvTimeoutError::Timeout) => Input::Idle,
        Err(RecvTimeoutError::Disconnected) => Input::Closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_yields_idle_then_lines_flow() {
        let (tx, rx) = mpsc::channel();

        assert_eq!(next_input(&rx, Duration::from_millis(5)), Input::Idle);

        tx.send("mine".to_string()).unwrap();
        assert_eq!(next_input(&rx, Duration::from_millis(5)), Input::Line("mine".into()));
    }

    #[test]
    fn queued_lines_survive_sender_drop() {
        let (tx, rx) = mpsc::channel();
        tx.send("quit".to_string()).unwrap();
        drop(tx);

        assert_eq!(next_input(&rx, Duration::from_millis(5)), Input::Line("quit".into()));
        assert_eq!(next_input(&rx, Duration::from_millis(5)), Input::Closed);
    }
}
