//! Interactive chat loop.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use serene_core::bot::StressBot;
use serene_core::llm::{self, config::LlmConfig};
use serene_core::profile::ProfileStore;

use crate::Result;

const QUIT: &str = "quit";

pub async fn run(provider: Option<String>, profile: Option<PathBuf>) -> Result<()> {
    let mut config = LlmConfig::from_env();
    if let Some(provider) = provider {
        config.provider = provider.to_ascii_lowercase();
    }
    let model = llm::build_client(&config)?;
    log::info!("using provider {}", model.provider());

    let mut bot = StressBot::new(model);
    let store = profile.map(ProfileStore::new);
    if let Some(store) = &store {
        let message = bot.load_profile(store)?;
        println!("{message}");
    }

    println!("Stress Management Assistant initialized. Type '{QUIT}' to exit.");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("You: ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        if input.trim().eq_ignore_ascii_case(QUIT) {
            break;
        }

        // A failed model call ends the session.
        let reply = bot.process_message(&input).await?;
        println!("Assistant: {reply}");
    }

    if let Some(store) = &store {
        let message = bot.save_profile(store)?;
        println!("{message}");
    }

    Ok(())
}
