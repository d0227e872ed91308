//! Student Helper - text tools for students
//!
//! Runs one task and prints the resulting HTML.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::str::FromStr;
use std::sync::Arc;
use student_helper::config::Config;
use student_helper::core::random::{RandomSource, SeededRandom, ThreadRandom};
use student_helper::heuristics::LocalGenerator;
use student_helper::processor::Processor;
use student_helper::task::{TaskKind, TextTask};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Skip remote services and answer locally
    #[arg(long, global = true)]
    offline: bool,

    /// Seed the local generators for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a passage (at least 100 characters)
    Summarize { text: Option<String> },
    /// Suggest an approach and key points for an essay topic
    Ideas { topic: Option<String> },
    /// Suggest five essay titles for a topic
    Titles { topic: Option<String> },
    /// Explain a concept or term
    Explain { concept: Option<String> },
    /// Translate between English and Arabic
    Translate {
        #[arg(long, default_value = "en")]
        from: String,
        #[arg(long, default_value = "ar")]
        to: String,
        text: Option<String>,
    },
    /// Generate multiple-choice questions from a passage
    Mcq {
        #[arg(short, long, default_value_t = 5)]
        count: usize,
        text: Option<String>,
    },
    /// Fix spelling, grammar and punctuation
    Grammar { text: Option<String> },
}

/// Positional input, or stdin when absent or `-`
fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

fn build_task(command: Command) -> Result<TextTask> {
    let task = match command {
        Command::Summarize { text } => TextTask::new(TaskKind::Summarize, read_input(text)?),
        Command::Ideas { topic } => TextTask::new(TaskKind::EssayIdeas, read_input(topic)?),
        Command::Titles { topic } => TextTask::new(TaskKind::EssayTitles, read_input(topic)?),
        Command::Explain { concept } => TextTask::new(TaskKind::Explain, read_input(concept)?),
        Command::Translate { from, to, text } => {
            TextTask::new(TaskKind::Translate, read_input(text)?).with_languages(from, to)
        }
        Command::Mcq { count, text } => {
            TextTask::new(TaskKind::Mcq, read_input(text)?).with_question_count(count)
        }
        Command::Grammar { text } => TextTask::new(TaskKind::Grammar, read_input(text)?),
    };
    Ok(task)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load()?;
    if args.offline {
        config.offline = true;
    }

    // Setup logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::from_str(&config.log_level).unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("📚 Student Helper v{} starting...", env!("CARGO_PKG_VERSION"));

    let rng: Arc<dyn RandomSource> = match args.seed {
        Some(seed) => {
            debug!("🎲 Using seed {}", seed);
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    };
    let processor = Processor::with_generator(config, Arc::new(LocalGenerator::new(rng)));

    let task = build_task(args.command)?;
    match processor.submit(task).await {
        Ok(output) => {
            println!("{}", output.html);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.to_html());
            std::process::exit(1);
        }
    }
}
