use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tango_config::ConvertConfig;
use tango_core::Lexicon;
use tango_deck::{read_deck, resolve_deck, write_deck};
use tango_dictionary::load_directory;


#[derive(Parser)]
#[command(name = "tango")]
#[command(about = "Rewrites a flashcard deck's definitions with monolingual glosses")]
struct Cli {
    /// Tab-separated deck export to convert
    deck: PathBuf,

    /// Dictionary directory with term_bank_<N>.json files; repeat in
    /// priority order, earlier directories win
    #[arg(long = "dict", value_name = "DIR", required = true)]
    dictionaries: Vec<PathBuf>,

    /// Column holding the surface word
    #[arg(long)]
    vocab_field: Option<String>,

    /// Column holding and receiving the definition
    #[arg(long)]
    definitions_field: Option<String>,

    /// Column holding the card's notes or tags
    #[arg(long)]
    notes_field: Option<String>,

    /// Where to write the converted deck
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> ConvertConfig {
        let mut config = ConvertConfig::new();
        config.deck = self.deck;
        config.output = self.output;
        config.dictionaries = self.dictionaries;
        if let Some(vocab_field) = self.vocab_field {
            config.vocab_field = vocab_field;
        }
        if let Some(definitions_field) = self.definitions_field {
            config.definitions_field = definitions_field;
        }
        if let Some(notes_field) = self.notes_field {
            config.notes_field = notes_field;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    run(cli.into_config())
}

fn run(config: ConvertConfig) -> anyhow::Result<()> {
    let mut lexicon = Lexicon::new();
    for source in &config.dictionaries {
        let stats = load_directory(source, &mut lexicon)
            .with_context(|| format!("loading dictionary source {}", source.display()))?;
        tracing::info!(
            "Loaded {} entries from {} ({} banks, {} records)",
            stats.added,
            source.display(),
            stats.banks,
            stats.records
        );
    }
    tracing::info!("Lexicon ready: {} headwords", lexicon.len());

    let mut deck = read_deck(&config.deck)
        .with_context(|| format!("reading deck {}", config.deck.display()))?;
    let stats = resolve_deck(&mut deck, &lexicon, &config)?;
    tracing::info!(
        "Resolved {} rows: {} glossed, {} misses, {} sentence rows",
        stats.rows,
        stats.glossed,
        stats.misses,
        stats.sentences
    );

    let output = config.output_path();
    write_deck(&output, &deck).with_context(|| format!("writing deck {}", output.display()))?;
    tracing::info!("Wrote {}", output.display());
    Ok(())
}
