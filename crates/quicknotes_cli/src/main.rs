//! Command-line presentation surface over `quicknotes_core`.
//!
//! # Responsibility
//! - Map subcommands onto the notes manager operations.
//! - Provide the stdin-backed implementation of the capture seam.

use clap::{Parser, Subcommand};
use log::info;
use quicknotes_core::{
    capture_note, default_log_level, init_logging, preview, CaptureError, CaptureResult,
    NotesManager, SqliteStore, TextCapture,
};
use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quicknotes", version, about = "Quick text notes over a local key-value store")]
struct Cli {
    /// SQLite database file backing the note store.
    #[arg(long, global = true, default_value = "quicknotes.db")]
    db: PathBuf,

    /// Directory for rotating log files. Logging stays off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a note with the given text.
    Add {
        /// Note text. Empty strings are accepted.
        text: String,
    },
    /// Read one line from stdin and append it as a note.
    Capture,
    /// List notes with their positions and previews.
    List,
    /// Print the full text of one note.
    Show {
        /// Position as printed by `list`.
        position: usize,
    },
    /// Delete notes at the given positions.
    Rm {
        /// Positions as printed by `list`. Out-of-range values are ignored.
        #[arg(required = true)]
        positions: Vec<usize>,
    },
}

/// Stdin-backed capture source: one line is one recognition result.
struct LineCapture<R: BufRead> {
    reader: R,
}

impl<R: BufRead> TextCapture for LineCapture<R> {
    fn capture(&mut self) -> CaptureResult<Option<Vec<String>>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(CaptureError::Io)?;
        if read == 0 {
            // EOF before any input: the session ended without a result.
            return Ok(None);
        }
        let text = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(vec![text]))
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(cli) {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(log_dir) = &cli.log_dir {
        init_logging(default_log_level(), &log_dir.display().to_string())?;
        info!(
            "event=cli_start module=cli status=ok core_version={}",
            quicknotes_core::core_version()
        );
    }

    let store = SqliteStore::open(&cli.db).map_err(|err| err.to_string())?;
    let mut manager = NotesManager::open(store).map_err(|err| err.to_string())?;

    match cli.command {
        Commands::Add { text } => {
            let note = manager.add_note(text).map_err(|err| err.to_string())?;
            println!("added note {}", note.id);
        }
        Commands::Capture => {
            let stdin = std::io::stdin();
            let mut source = LineCapture {
                reader: stdin.lock(),
            };
            match capture_note(&mut manager, &mut source).map_err(|err| err.to_string())? {
                Some(note) => println!("added note {}", note.id),
                None => println!("nothing captured"),
            }
        }
        Commands::List => {
            for (position, note) in manager.notes().iter().enumerate() {
                println!("{position:>3}  {}", preview(&note.text));
            }
        }
        Commands::Show { position } => match manager.get(position) {
            Some(note) => println!("{}", note.text),
            None => return Err(format!("no note at position {position}")),
        },
        Commands::Rm { positions } => {
            let positions: BTreeSet<usize> = positions.into_iter().collect();
            let removed = manager
                .delete_notes(&positions)
                .map_err(|err| err.to_string())?;
            println!("removed {removed}");
        }
    }

    Ok(())
}
