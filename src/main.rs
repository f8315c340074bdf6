//! Mamba Config CLI
//!
//! Entry point for the `mamba-config` command-line tool.

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use mamba_config::config::{
    parse_value, Analyzer, Documentation, DragAndDrop, FilePicker, General, Tester, Update,
};
use mamba_config::{logging, ConfigError, ConfigStore, Overlay, Section};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "mamba-config")]
#[command(about = "Inspect the Black Mamba configuration with overlays applied", version)]
struct Cli {
    /// JSON object merged over the defaults (repeatable, applied in order)
    #[arg(long = "overlay", value_name = "JSON", global = true)]
    overlays: Vec<String>,

    /// TOML document merged after the JSON overlays (repeatable)
    #[arg(long = "overlay-toml", value_name = "TOML", global = true)]
    toml_overlays: Vec<String>,

    /// Set one value, e.g. --set general.jedi=true (repeatable, applied last)
    #[arg(long = "set", value_name = "PATH=VALUE", global = true)]
    assignments: Vec<String>,

    /// Log merges and lookups to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a dotted path
    Get {
        /// Dotted path, e.g. analyzer.hud_alert_delay
        path: String,

        /// Printed when the path does not resolve (JSON, or a plain string)
        #[arg(long)]
        default: Option<String>,
    },

    /// Print the whole active configuration
    Dump {
        /// Include revision, fingerprint and sources
        #[arg(long)]
        effective: bool,
    },

    /// Print the typed view of one section
    Section {
        /// Section name
        name: SectionName,
    },

    /// Print the SHA-256 fingerprint of the active configuration
    Fingerprint,
}

#[derive(Clone, Copy, ValueEnum)]
enum SectionName {
    General,
    Update,
    #[value(name = "file_picker")]
    FilePicker,
    Analyzer,
    Tester,
    #[value(name = "drag_and_drop")]
    DragAndDrop,
    Documentation,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let store = match build_store(&cli) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error applying overlay: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Get { path, default } => run_get(&store, &path, default.as_deref()),
        Commands::Dump { effective } => run_dump(&store, effective),
        Commands::Section { name } => run_section(&store, name),
        Commands::Fingerprint => store.fingerprint().map(|digest| println!("{}", digest)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn build_store(cli: &Cli) -> Result<ConfigStore, ConfigError> {
    let store = ConfigStore::new();

    for text in &cli.overlays {
        store.merge(Overlay::from_json_str(text)?);
    }
    for text in &cli.toml_overlays {
        store.merge(Overlay::from_toml_str(text)?);
    }
    let mut assignments = Overlay::new();
    for assignment in &cli.assignments {
        assignments = assignments.then(Overlay::from_assignment(assignment)?);
    }
    if !assignments.is_empty() {
        store.merge(assignments);
    }

    Ok(store)
}

fn run_get(store: &ConfigStore, path: &str, default: Option<&str>) -> Result<(), ConfigError> {
    let default = default.map(parse_value).unwrap_or_default();
    print_json(&store.get_or(path, default))
}

fn run_dump(store: &ConfigStore, effective: bool) -> Result<(), ConfigError> {
    if effective {
        let effective = store.effective()?;
        println!("{}", effective.to_json()?);
        Ok(())
    } else {
        print_json(store.snapshot().tree())
    }
}

fn run_section(store: &ConfigStore, name: SectionName) -> Result<(), ConfigError> {
    match name {
        SectionName::General => print_section::<General>(store),
        SectionName::Update => print_section::<Update>(store),
        SectionName::FilePicker => print_section::<FilePicker>(store),
        SectionName::Analyzer => print_section::<Analyzer>(store),
        SectionName::Tester => print_section::<Tester>(store),
        SectionName::DragAndDrop => print_section::<DragAndDrop>(store),
        SectionName::Documentation => print_section::<Documentation>(store),
    }
}

fn print_section<S: Section>(store: &ConfigStore) -> Result<(), ConfigError> {
    print_json(&store.section::<S>())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), ConfigError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
