//! Weft CLI - apply data bindings to annotated documents

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;

use weft::{BindingEngine, DataStore, Document, FixSuggestion, UpdateKind, WeftError};

#[derive(Parser)]
#[command(name = "weft")]
#[command(about = "Weft - declarative data binding for annotated documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a binding pass over a document
    Apply {
        /// Path to the annotated document (YAML)
        document: String,

        /// Path to the data source (YAML or JSON)
        #[arg(short, long)]
        data: Option<String>,

        /// Write the resolved document here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check a document's binding declarations (parse only, or resolve with --data)
    Validate {
        /// Path to the annotated document (YAML)
        document: String,

        /// Also resolve every path against this data source
        #[arg(short, long)]
        data: Option<String>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply { document, data, output } => {
            apply_document(&document, data.as_deref(), output.as_deref())
        }
        Commands::Validate { document, data } => validate_document(&document, data.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(weft_err) = e.downcast_ref::<WeftError>() {
            if let Some(suggestion) = weft_err.fix_suggestion() {
                eprintln!("{} {}", "Suggestion:".yellow(), suggestion);
            }
        }
        std::process::exit(1);
    }
}

/// Load a data source file; `None` path degrades to an unloaded store
fn load_store(data: Option<&str>) -> Result<DataStore> {
    let Some(path) = data else {
        return Ok(DataStore::load(None));
    };

    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read data from {path}"))?;

    let value: Value = if Path::new(path).extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse JSON data in {path}"))?
    } else {
        serde_yaml::from_str(&raw).with_context(|| format!("Failed to parse YAML data in {path}"))?
    };

    Ok(DataStore::load(Some(value)))
}

fn load_document(path: &str) -> Result<Document> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document from {path}"))?;
    let doc = Document::from_yaml(&raw)
        .with_context(|| format!("Failed to parse document in {path}"))?;
    Ok(doc)
}

fn apply_document(document: &str, data: Option<&str>, output: Option<&str>) -> Result<()> {
    let store = load_store(data)?;
    let mut doc = load_document(document)?;

    let report = BindingEngine::new(&store).apply(&mut doc);

    // Per-binding failures are fail-soft: report them, keep the exit clean
    for failure in report.failures() {
        if let Err(e) = &failure.result {
            eprintln!("{} {} ({})", "skipped".yellow(), failure.path, e);
        }
    }
    if report.is_clean() {
        eprintln!("{} {}", "✓".green(), report);
    } else {
        eprintln!("{} {}", "!".yellow(), report);
    }

    let resolved = doc.to_yaml()?;
    match output {
        Some(path) => fs::write(path, resolved)
            .with_context(|| format!("Failed to write resolved document to {path}"))?,
        None => print!("{resolved}"),
    }

    Ok(())
}

fn validate_document(document: &str, data: Option<&str>) -> Result<()> {
    let doc = load_document(document)?;
    let store = data.map(|d| load_store(Some(d))).transpose()?;

    let mut declared = 0usize;
    let mut invalid = 0usize;
    let mut unresolved = 0usize;

    for idx in doc.pre_order() {
        let el = doc.node(idx);
        let Some(path) = el.attr(weft::document::attr::BIND) else {
            continue;
        };
        declared += 1;

        if let Err(e) = weft::path::parse(path) {
            invalid += 1;
            println!("{} {} - {}", "✗".red(), path, e);
            continue;
        }

        if let Some(kind) = el.attr(weft::document::attr::UPDATE) {
            if let Err(e) = kind.parse::<UpdateKind>() {
                invalid += 1;
                println!("{} {} - {}", "✗".red(), path, e);
                continue;
            }
        }

        if let Some(store) = &store {
            if let Err(e) = store.resolve(path) {
                unresolved += 1;
                println!("{} {} - {}", "?".yellow(), path, e);
                continue;
            }
        }

        println!("{} {}", "✓".green(), path);
    }

    println!(
        "\n{declared} declarations: {} invalid, {} unresolved",
        invalid, unresolved
    );

    if invalid > 0 {
        bail!("document has {invalid} invalid binding declaration(s)");
    }
    Ok(())
}
