//! Mood Journal CLI
//!
//! Command-line client for the mood journal backend:
//! - Show the mood history chart
//! - Chat with the journal assistant
//! - List the emotion registry
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mood_journal::api::{ConversationId, HttpJournalApi};
use mood_journal::chat::{ChatError, ChatSession, TranscriptEntry};
use mood_journal::config::{generate_default_config, Config, LoggingConfig};
use mood_journal::emotion;
use mood_journal::mood::{ChartState, MoodChartLoader};

#[derive(Parser)]
#[command(name = "mood-journal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Mood journal client: mood history charts and journaling chat")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Journal backend URL (overrides config and MOOD_JOURNAL_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/mood-journal/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the emotions the journal recognizes
    Emotions,

    /// Show your mood history
    Chart {
        #[arg(short, long, value_enum, default_value_t = ChartFormat::Table)]
        format: ChartFormat,
    },

    /// Send a single journal entry
    Send {
        /// Journal text
        text: String,
        /// Continue an existing conversation
        #[arg(short = 'c', long)]
        conversation_id: Option<String>,
    },

    /// Interactive journaling chat
    Chat {
        /// Write the transcript as HTML when the session ends
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ChartFormat {
    /// Emotion by date grid
    Table,
    /// Plotly figure JSON
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (mut config, warnings) = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    match cli.command {
        Commands::Emotions => {
            println!("{:<10} {:<10} {:<8} Icon", "Key", "Name", "Color");
            println!("{}", "-".repeat(36));
            for (key, e) in emotion::registry() {
                println!("{:<10} {:<10} {:<8} {}", key.as_str(), e.name, e.color, e.icon);
            }
        }

        Commands::Chart { format } => {
            let api = connect(&config)?;
            let mut loader = MoodChartLoader::new();

            match loader.load(&api).await {
                ChartState::Ready(chart) => match format {
                    ChartFormat::Table => print!("{}", chart.to_table()),
                    ChartFormat::Json => println!("{}", chart.to_json()?),
                },
                ChartState::Empty | ChartState::Loading => {
                    println!("No mood entries yet. Start journaling with `mood-journal chat`.")
                }
                ChartState::Failed(message) => {
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
            }
        }

        Commands::Send { text, conversation_id } => {
            let api = connect(&config)?;
            let mut session = match conversation_id {
                Some(id) => ChatSession::resume(ConversationId::parse(&id)),
                None => ChatSession::new(),
            };

            match session.send(&api, &text).await {
                None => {
                    eprintln!("Nothing to send.");
                    std::process::exit(1);
                }
                Some(Ok(turn)) => {
                    if let Some(entry) = session.transcript().last() {
                        println!("{}", entry);
                    }
                    println!("conversation: {}", turn.conversation_id);
                }
                Some(Err(e)) => {
                    report(&e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Chat { save } => {
            let api = connect(&config)?;
            let session = run_chat(&api).await?;

            if let Some(path) = save {
                std::fs::write(&path, session.transcript().to_html_document("Mood Journal"))
                    .with_context(|| format!("writing transcript to {}", path.display()))?;
                println!("Transcript saved to {}", path.display());
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("mood_journal={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn connect(config: &Config) -> anyhow::Result<HttpJournalApi> {
    HttpJournalApi::new(&config.api.base_url, config.api.request_timeout())
        .with_context(|| format!("connecting to {}", config.api.base_url))
}

/// Print the user-facing notification for a failed send
fn report(error: &ChatError) {
    if let Some(message) = error.alert_message() {
        eprintln!("! {}", message);
    }
}

async fn run_chat(api: &HttpJournalApi) -> anyhow::Result<ChatSession> {
    let mut session = ChatSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("How are you feeling today? (/quit to finish)");
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        if line.trim() == "/quit" {
            break;
        }

        session.set_input(line);
        let text = session.input().to_string();
        match session.send(api, &text).await {
            None => continue,
            Some(Ok(_)) => {
                if let Some(entry @ TranscriptEntry::Assistant { .. }) = session.transcript().last() {
                    println!("{}", entry);
                }
            }
            Some(Err(e)) => report(&e),
        }
    }

    if let Some(id) = session.conversation_id() {
        println!("Conversation {} saved ({} messages).", id, session.transcript().len());
    }
    Ok(session)
}
