// research-glossary CLI: extract, add, list, search
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use research_glossary::catalog::{
    group_by_letter, highlight, letter_counts, letter_key, Catalog, CatalogEntry,
};
use research_glossary::prompt::{entry_from_args, prompt_entry, GivenFields};
use research_glossary::storage::{append_entry, to_pretty_json, write_entries};
use research_glossary::{GlossaryConfig, GlossaryExtractor};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Config file (falls back to $GLOSSARY_CONFIG, then ./glossary.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract glossary terms from the PDF into the index JSON
    Extract {
        /// Path to the glossary PDF
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Where to write the JSON array
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Citation attached to every entry
        #[arg(long)]
        source: Option<String>,
        /// Print the JSON instead of writing the output file
        #[arg(long)]
        stdout: bool,
    },
    /// Append a custom term, prompting for anything not given
    Add {
        #[arg(long)]
        term: Option<String>,
        #[arg(long)]
        definition: Option<String>,
        #[arg(long)]
        source: Option<String>,
        /// Custom entries file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List official and custom entries grouped by letter
    List {
        /// Only show one letter
        #[arg(short, long)]
        letter: Option<char>,
    },
    /// Search terms and definitions (case-insensitive)
    Search {
        query: String,
        /// Only show one letter
        #[arg(short, long)]
        letter: Option<char>,
        /// Never colour matches
        #[arg(long)]
        no_color: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = GlossaryConfig::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Extract { input, output, source, stdout } => {
            run_extract(&config, input, output, source, stdout)?;
        }
        Commands::Add { term, definition, source, file } => {
            run_add(&config, term, definition, source, file)?;
        }
        Commands::List { letter } => {
            run_list(&config, letter);
        }
        Commands::Search { query, letter, no_color } => {
            run_search(&config, &query, letter, !no_color && atty::is(atty::Stream::Stdout));
        }
    }

    Ok(())
}

fn run_extract(
    config: &GlossaryConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    source: Option<String>,
    stdout: bool,
) -> Result<()> {
    let input = input.unwrap_or_else(|| config.paths.input_pdf.clone());
    let output = output.unwrap_or_else(|| config.paths.output_json.clone());
    let mut settings = config.extraction.clone();
    if let Some(source) = source {
        settings.source = source;
    }

    let extractor = GlossaryExtractor::new(&settings);
    let entries = extractor
        .extract_pdf(&input)
        .with_context(|| format!("extracting glossary from {}", input.display()))?;

    if stdout {
        println!("{}", to_pretty_json(&entries)?);
        eprintln!("Extracted {} entries", entries.len());
        return Ok(());
    }

    write_entries(&output, &entries)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Extracted {} entries → {}", entries.len(), output.display());
    Ok(())
}

fn run_add(
    config: &GlossaryConfig,
    term: Option<String>,
    definition: Option<String>,
    source: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let path = file.unwrap_or_else(|| config.paths.custom_json.clone());
    let default_source = config.custom.default_source.as_str();
    let placeholder = config.extraction.letter_placeholder.as_str();

    let entry = match (term.as_deref(), definition.as_deref()) {
        (Some(term), Some(definition)) => {
            entry_from_args(term, definition, source.as_deref(), default_source, placeholder)?
        }
        (term, definition) => {
            let given = GivenFields {
                term,
                definition,
                source: source.as_deref(),
            };
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let entry = prompt_entry(&mut input, &mut output, given, default_source, placeholder)?;
            writeln!(output)?;
            entry
        }
    };

    let term = entry.term.clone();
    let count = append_entry(&path, entry).with_context(|| format!("writing {}", path.display()))?;
    log::info!("{} now holds {} custom entries", path.display(), count);
    println!("✅ Added {} to {}", term, path.display());
    Ok(())
}

fn load_catalog(config: &GlossaryConfig) -> Catalog {
    Catalog::load(&config.paths.output_json, &config.paths.custom_json)
}

fn run_list(config: &GlossaryConfig, letter: Option<char>) {
    let catalog = load_catalog(config);
    let groups = group_by_letter(catalog.entries());

    let bar: Vec<String> = letter_counts(&groups)
        .into_iter()
        .map(|(l, n)| format!("{} {}", l, n))
        .collect();
    println!("{} entries from {}", catalog.len(), describe_sources(config));
    println!("{}", bar.join("  "));

    print_groups(&groups, letter, "", false);
}

fn run_search(config: &GlossaryConfig, query: &str, letter: Option<char>, color: bool) {
    let catalog = load_catalog(config);
    let hits = catalog.search(query);
    println!("{} matching entries for {:?}", hits.len(), query.trim());

    let groups = group_by_letter(hits);
    print_groups(&groups, letter, query, color);
}

fn print_groups(
    groups: &std::collections::BTreeMap<char, Vec<&CatalogEntry>>,
    only: Option<char>,
    query: &str,
    color: bool,
) {
    let only = only.map(letter_key);
    for (letter, items) in groups {
        if only.is_some_and(|o| o != *letter) {
            continue;
        }
        println!("\n== {} ==", letter);
        for item in items {
            let tag = if item.is_custom() { " [custom]" } else { "" };
            println!("{}{}", highlight(&item.entry.term, query, color), tag);
            println!("    {}", highlight(&item.entry.definition, query, color));
            println!("    ({})", item.entry.source);
        }
    }
}

fn describe_sources(config: &GlossaryConfig) -> String {
    let show = |p: &Path| p.display().to_string();
    format!("{} + {}", show(&config.paths.output_json), show(&config.paths.custom_json))
}
