//! `folio ask` and `folio chat` — the assistant surfaces.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use folio_core::session::Session;
use folio_core::speech::Speaker;

use crate::catalog;
use crate::config::Config;
use crate::host::{ConsoleHost, ConsoleSynthesizer};

/// Dispatch one utterance and print the outcome.
pub fn run_ask(config: &Config, utterance: &str, speak: bool) -> Result<()> {
    let cat = catalog::load(config)?;
    let mut session = Session::new(config.engine.context_cap, config.engine.history_cap);
    session.auto_speak = speak || config.speech.auto_speak;
    let mut host = ConsoleHost::new(&config.speech.locale);
    let mut speaker = Speaker::new(
        Box::new(ConsoleSynthesizer::default()),
        config.speech.locale.clone(),
    );

    let outcome = session.dispatch(utterance, &cat, &mut host, Some(&mut speaker));
    println!("{}", outcome.response);
    if let Some(action) = outcome.action {
        println!("[{action}]");
    }

    Ok(())
}

/// Interactive chat loop over stdin. `/history` lists the command
/// ring, `/reset` starts a fresh session, `/quit` exits.
pub fn run_chat(config: &Config) -> Result<()> {
    let cat = catalog::load(config)?;
    let mut session = Session::new(config.engine.context_cap, config.engine.history_cap);
    session.auto_speak = config.speech.auto_speak;
    let mut host = ConsoleHost::new(&config.speech.locale);
    let mut speaker = Speaker::new(
        Box::new(ConsoleSynthesizer::default()),
        config.speech.locale.clone(),
    );

    println!("Folio assistant — ask about projects, skills, experience. /quit to exit.");

    let stdin = io::stdin();
    loop {
        print!("folio> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                println!("Session reset.");
            }
            "/history" => {
                if session.history.is_empty() {
                    println!("No commands yet.");
                }
                for record in session.history.iter_recent() {
                    let action = record
                        .action
                        .map(|a| a.as_str())
                        .unwrap_or("-");
                    println!(
                        "{}  [{}] {} -> {}",
                        record.timestamp.format("%H:%M:%S"),
                        action,
                        record.utterance,
                        record.response
                    );
                }
            }
            _ => {
                let outcome = session.dispatch(line, &cat, &mut host, Some(&mut speaker));
                println!("{}", outcome.response);
            }
        }
    }

    Ok(())
}
