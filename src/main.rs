use anyhow::{Context, Result};
use bororo_clans::output::{to_json_string, write_game_data, DEFAULT_OUTPUT_PATH};
use bororo_clans::transform::duplicate_item_ids;
use bororo_clans::{table, GenerateOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bororo-clans")]
#[command(version, about = "Generate the clan matching game data as JSON")]
#[command(long_about = "Generate the clan matching game data as JSON\n\n\
    With no arguments the embedded clan table is written to public/game-data.json,\n\
    pretty-printed with 2-space indentation.\n\n\
    bororo-clans [-o output.json | -o -] [--table clans.json] [--compact] [--dedupe] [--check] [-v]")]
struct Cli {
    /// Output JSON file path ("-" writes to stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Read clan records from a JSON file instead of the embedded table
    #[arg(long)]
    table: Option<PathBuf>,

    /// Compact JSON output (default is pretty-printed with indentation)
    #[arg(long)]
    compact: bool,

    /// Drop items whose id was already emitted, keeping the first
    #[arg(long)]
    dedupe: bool,

    /// Validate clan ids and item references before writing
    #[arg(long)]
    check: bool,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let clans = match cli.table.as_ref() {
        Some(path) => {
            if cli.verbose {
                eprintln!("Reading clan table: {}", path.display());
            }
            table::load_table_file(path)
                .with_context(|| format!("Failed to load clan table: {}", path.display()))?
        }
        None => table::embedded_clans(),
    };

    if cli.verbose {
        eprintln!("Building game data from {} clan(s)...", clans.len());
    }

    let options = GenerateOptions {
        check: cli.check,
        dedupe: cli.dedupe,
    };
    let data = bororo_clans::generate_with(&clans, options).context("Failed to build game data")?;

    if cli.verbose {
        let summary = data.summary();
        eprintln!(
            "Generated {} clan(s) and {} item(s)",
            summary.clan_count, summary.item_count
        );
        for (clan_id, count) in &summary.items_per_clan {
            eprintln!("  {}: {} item(s)", clan_id, count);
        }

        let duplicates = duplicate_item_ids(&data);
        if !duplicates.is_empty() {
            eprintln!("Duplicate item id(s):");
            for id in &duplicates {
                eprintln!("  {}", id);
            }
        }
    }

    if cli.output.as_os_str() == "-" {
        println!("{}", to_json_string(&data, cli.compact)?);
        return Ok(());
    }

    if cli.verbose {
        eprintln!("Writing output to: {}", cli.output.display());
    }

    write_game_data(&data, &cli.output, cli.compact)
        .with_context(|| format!("Failed to write output file: {}", cli.output.display()))?;

    println!(
        "File '{}' written with {} clan(s) and {} item(s)",
        cli.output.display(),
        data.clans.len(),
        data.items.len()
    );

    Ok(())
}
