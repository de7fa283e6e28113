//! Line-oriented control surface for a running queue
//!
//! Each input line is one command. Commands act on the shared queue directly,
//! except `ended` and `error`, which are delivered through the engine event
//! channel as a real engine would.

use crate::error::{PlayerError, Result};
use crossbeam_channel::Sender;
use memora_core::Track;
use memora_library::filter_tracks;
use memora_playback::{lock, EngineEvent, SharedQueueManager};
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
commands:
  next | n           skip forward
  prev | p           skip back
  shuffle | s        toggle shuffle
  reshuffle          shuffle again around the current track
  pause | resume     pause or resume the engine
  ended              simulate the current track finishing
  error <message>    simulate an engine error
  status             show the current track
  queue              list the queue
  find <query>       queue tracks whose title or tags match
  help               show this help
  quit | q           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    ToggleShuffle,
    Reshuffle,
    Pause,
    Resume,
    Ended,
    Error(String),
    Status,
    Queue,
    Find(String),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = PlayerError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "shuffle" | "s" => Self::ToggleShuffle,
            "reshuffle" => Self::Reshuffle,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "ended" => Self::Ended,
            "error" => Self::Error(rest.to_string()),
            "status" => Self::Status,
            "queue" => Self::Queue,
            "find" => Self::Find(rest.to_string()),
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(PlayerError::UnknownCommand(line.to_string())),
        };
        Ok(command)
    }
}

pub struct Console {
    manager: SharedQueueManager,
    events: Sender<EngineEvent>,
    library: Vec<Track>,
}

impl Console {
    /// `library` is the full track list `find` searches
    pub fn new(
        manager: SharedQueueManager,
        events: Sender<EngineEvent>,
        library: Vec<Track>,
    ) -> Self {
        Self {
            manager,
            events,
            library,
        }
    }

    /// Read commands until `quit` or end of input
    ///
    /// Returns the number of commands executed. Unknown commands are reported
    /// on `output` and skipped.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<usize> {
        let mut executed = 0;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(output, "{} (try `help`)", e)?;
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }

            self.execute(command, &mut output)?;
            executed += 1;
        }

        Ok(executed)
    }

    pub fn execute<W: Write>(&self, command: Command, output: &mut W) -> Result<()> {
        match command {
            Command::Ended => return self.send(EngineEvent::TrackEnded),
            Command::Error(message) => return self.send(EngineEvent::Error { message }),
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                return Ok(());
            }
            _ => {}
        }

        let mut manager = lock(&self.manager);
        match command {
            Command::Next => manager.play_next_track(),
            Command::Prev => manager.play_prev_track(),
            Command::ToggleShuffle => manager.toggle_shuffle(),
            Command::Reshuffle => manager.shuffle_queue(),
            Command::Pause => manager.pause(),
            Command::Resume => manager.resume(),
            Command::Status => write_status(
                output,
                manager.current_track(),
                manager.current_index(),
                manager.len(),
                manager.is_shuffled(),
            )?,
            Command::Queue => {
                let current = manager.current_index();
                for (i, track) in manager.queue().iter().enumerate() {
                    let marker = if Some(i) == current { '>' } else { ' ' };
                    writeln!(
                        output,
                        "{} {:>3}. {} - {}",
                        marker,
                        i + 1,
                        track.title,
                        track.artist
                    )?;
                }
            }
            Command::Find(query) => {
                let found = filter_tracks(&self.library, &query);
                writeln!(output, "{} match(es) for {:?}", found.len(), query)?;
                manager.set_queue(found, 0);
            }
            Command::Ended | Command::Error(_) | Command::Help | Command::Quit => {}
        }

        for event in manager.drain_events() {
            tracing::debug!(?event, "Queue event");
        }
        Ok(())
    }

    fn send(&self, event: EngineEvent) -> Result<()> {
        self.events
            .send(event)
            .map_err(|_| PlayerError::EngineClosed)
    }
}

fn write_status<W: Write>(
    output: &mut W,
    track: Option<&Track>,
    index: Option<usize>,
    len: usize,
    shuffled: bool,
) -> Result<()> {
    let shuffle = if shuffled { "on" } else { "off" };
    match (track, index) {
        (Some(track), Some(index)) => writeln!(
            output,
            "{} - {} [{}/{}] shuffle {}",
            track.title,
            track.artist,
            index + 1,
            len,
            shuffle
        )?,
        _ => writeln!(output, "nothing playing [{} queued] shuffle {}", len, shuffle)?,
    }
    Ok(())
}
