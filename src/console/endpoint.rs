use super::command::ConsoleCommand;
use crate::warn;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Reads operator lines from stdin and forwards parsed commands to the
/// dispatch loop. The task ends on an explicit quit, EOF or read error,
/// always delivering a final [`ConsoleCommand::Quit`] so the loop can
/// wind down.
pub struct ConsoleEndpoint;

impl ConsoleEndpoint {
    const COMMAND_BUFFER: usize = 10;

    /// Spawns the reader task and returns the receiving end.
    pub fn start() -> mpsc::Receiver<ConsoleCommand> {
        let (tx, rx) = mpsc::channel(Self::COMMAND_BUFFER);
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        match ConsoleCommand::parse(&line) {
                            Some(command) => {
                                let quit = command == ConsoleCommand::Quit;
                                if tx.send(command).await.is_err() || quit {
                                    return;
                                }
                            }
                            None => warn!("Unknown console input: {:?}", line.trim()),
                        }
                    }
                    Ok(None) => {
                        let _ = tx.send(ConsoleCommand::Quit).await;
                        return;
                    }
                    Err(e) => {
                        warn!("Closing console endpoint due to {e:?}");
                        let _ = tx.send(ConsoleCommand::Quit).await;
                        return;
                    }
                }
            }
        });
        rx
    }
}
