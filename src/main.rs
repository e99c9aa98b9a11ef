//! Combodeck CLI application entry point
//!
//! Browses a catalogue of combo routes from the command line. Every command
//! restores a browse session (deep link first, then remembered preferences),
//! applies its flags as intents and prints the resulting view.
//!
//! # Usage
//!
//! ```bash
//! # List combos for the remembered (or first) character
//! combodeck
//! combodeck combos -c paul --filter heat
//!
//! # One combo at a time
//! combodeck deck -c devil_jin -n 3 --next
//!
//! # Move-string table
//! combodeck moves --tier simple --mode text
//!
//! # Share and reopen a view
//! combodeck link -c paul -n 2 --view deck --copy
//! combodeck open "https://combodeck.local/?character=paul&combo=2&view=deck"
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/combodeck/config.toml` on Linux). Set `RUST_LOG` to see
//! diagnostics beyond warnings.

use combodeck::{
    ComboDeckError,
    browse::{
        BrowseSession, Locator, MemoryPreferenceStore, PreferenceStore, ShareTarget,
        TomlPreferenceStore,
    },
    catalogue::Catalogue,
    cli::{Cli, Commands},
    commands::{self, link::ClipboardShare},
    config::ComboDeckConfig,
    output::{OutputWriter, StdoutWriter},
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, ComboDeckError>;

/// Install the stderr log subscriber, `warn` unless `RUST_LOG` says otherwise
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the configured dataset, falling back to the built-in sample
fn load_catalogue(cli: &Cli, config: &ComboDeckConfig, out: &dyn OutputWriter) -> Catalogue {
    match cli.data.as_ref().or(config.dataset.as_ref()) {
        Some(path) => Catalogue::or_fallback(Catalogue::load(path)),
        None => {
            out.info("No dataset configured, showing sample data.");
            Catalogue::fallback()
        }
    }
}

fn open_preferences(config: &ComboDeckConfig) -> Box<dyn PreferenceStore> {
    match config.preferences_path() {
        Some(path) => Box::new(TomlPreferenceStore::open(path)),
        None => Box::new(MemoryPreferenceStore::new()),
    }
}

fn run(cli: &Cli, config: &ComboDeckConfig, out: &dyn OutputWriter) -> Result<()> {
    let command = cli.get_command();
    let catalogue = load_catalogue(cli, config, out);
    let prefs = open_preferences(config);

    let locator = match &command {
        Commands::Open { locator } => Locator::parse(locator),
        _ => Locator::default(),
    };
    let mut session = BrowseSession::new(catalogue, prefs, &locator);

    match &command {
        Commands::Characters => commands::characters(&session, out),
        Commands::Combos { selection } => commands::combos(&mut session, selection, config, out)?,
        Commands::Deck {
            selection,
            number,
            next,
            prev,
        } => commands::deck(&mut session, selection, *number, *next, *prev, config, out)?,
        Commands::Moves {
            character,
            tier,
            mode,
        } => commands::moves(&mut session, character.as_deref(), *tier, *mode, config, out)?,
        Commands::Link {
            character,
            number,
            view,
            copy,
        } => {
            let mut clipboard = ClipboardShare;
            let target = copy.then_some(&mut clipboard as &mut dyn ShareTarget);
            commands::link(&mut session, character.as_deref(), *number, *view, target, config, out)?;
        }
        Commands::Open { .. } => {
            commands::open(&session, locator.character_id.as_deref(), config, out);
        }
        Commands::Portraits => commands::portraits(&session, config, out),
    }
    Ok(())
}

fn main() {
    init_tracing();

    let cli = Cli::parse_args();
    let config = match ComboDeckConfig::load() {
        Ok(config) => config,
        Err(e) => {
            StdoutWriter::new(cli.quiet).error(&ComboDeckError::from(e).to_string());
            std::process::exit(1);
        }
    };
    let out = StdoutWriter::new(cli.quiet || config.quiet);

    if let Err(e) = run(&cli, &config, &out) {
        out.error(&e.to_string());
        std::process::exit(1);
    }
}
