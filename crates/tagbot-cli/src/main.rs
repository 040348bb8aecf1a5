//! Console shell for tagbot.
//!
//! Reads one line of free text per turn from stdin and prints one response
//! per turn, until the conversation reaches a terminal state or the user
//! types `exit` / `quit` (EOF also ends the session).

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tagbot_core::{builtin, Conversation, Lexicon};

#[derive(Parser, Debug)]
#[command(name = "tagbot", version, about = "Tag-based teen drug-screening chatbot")]
struct Args {
    /// Load a custom lexicon from a JSON file instead of the builtin one
    #[arg(long, value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// Write the session transcript to this JSON file on exit
    #[arg(long, value_name = "PATH")]
    transcript: Option<PathBuf>,
}

fn load_lexicon(args: &Args) -> Result<Lexicon> {
    match &args.lexicon {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading lexicon {}", path.display()))?;
            Lexicon::from_json(&json)
                .with_context(|| format!("invalid lexicon {}", path.display()))
        }
        None => Ok(builtin()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let lexicon = load_lexicon(&args)?;
    let mut convo = Conversation::new(&lexicon);

    println!("{}", convo.greeting().cyan());
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let message = line.trim();
        if message.is_empty() {
            prompt()?;
            continue;
        }
        if matches!(message.to_lowercase().as_str(), "exit" | "quit") {
            break;
        }

        let reply = convo.respond(message);
        println!("\n{}\n", reply.cyan());

        if convo.is_finished() {
            break;
        }
        prompt()?;
    }

    if let Some(path) = &args.transcript {
        let json = convo
            .session()
            .to_json()
            .context("serializing transcript")?;
        fs::write(path, json)
            .with_context(|| format!("writing transcript {}", path.display()))?;
        debug!(path = %path.display(), "transcript written");
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush().context("flushing stdout")?;
    Ok(())
}
