use std::io::{self, BufRead, StdinLock, Write};

use anyhow::Context;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use bookmanager_api::client::BookApiClient;
use bookmanager_ui::command::{execute, Command, HELP};
use bookmanager_ui::confirm::{is_affirmative, Confirm};
use bookmanager_ui::form_manager::BookFormManager;
use bookmanager_ui::settings::Settings;
use bookmanager_ui::view::render;

fn init_telemetry() {
    let app_name = "bookmanager";

    // Tunable via `RUST_LOG` env variable, quiet by default to keep the screen readable
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("warn"));
    // Logs go to stderr, stdout belongs to the form
    let formatting_layer = BunyanFormattingLayer::new(app_name.into(), std::io::stderr);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to install `tracing` subscriber.")
}

struct Terminal {
    stdin: StdinLock<'static>,
}

impl Terminal {
    fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
        }
    }

    /// Returns None once stdin is closed
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl Confirm for Terminal {
    fn confirm(&mut self, prompt: &str) -> bool {
        match self.prompt(&format!("{} [y/N] ", prompt)) {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(err) => {
                tracing::warn!("Failed to read confirmation {}", err);
                false
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_telemetry();

    let settings = Settings::load()?;
    tracing::info!("Using book api at {}", settings.base_url);
    let client = BookApiClient::new(&settings.base_url).context("Failed to create book api client")?;

    let mut manager = BookFormManager::mount(client).await;
    let mut terminal = Terminal::new();
    println!("{}", render(&manager));

    while let Some(line) = terminal.prompt("bookmanager> ")? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(command) => {
                if let Some(hint) = execute(&mut manager, command, &mut terminal).await {
                    println!("{}", hint);
                }
                println!("{}", render(&manager));
            }
            Err(err) => println!("{}", err),
        }
    }
    Ok(())
}
