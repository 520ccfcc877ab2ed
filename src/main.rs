mod dorar;
mod parser;
mod render;

use std::io::Read;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use parser::fields::Field;
use parser::tashkeel::TashkeelMode;
use parser::{extract_hadiths, ExtractOptions, Hadith};

#[derive(Parser)]
#[command(name = "dorar_scraper", about = "Hadith search extractor for dorar.net")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search dorar.net and extract hadith records
    Search {
        /// Search keyword (Arabic)
        skey: String,
        #[command(flatten)]
        options: PipelineArgs,
    },
    /// Extract records from a saved fragment file ('-' reads stdin)
    Extract {
        /// Path to an HTML fragment
        path: String,
        #[command(flatten)]
        options: PipelineArgs,
    },
}

#[derive(Args)]
struct PipelineArgs {
    /// Where to strip diacritical marks
    #[arg(short, long, value_enum, default_value = "keep-all")]
    tashkeel: TashkeelMode,
    /// Value substituted for fields missing from a record
    #[arg(long, default_value = "")]
    missing: String,
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: Format,
    /// Max records to output (default: all)
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Numbered console listing
    Table,
    /// JSON record array
    Json,
    /// hadith-card HTML
    Html,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search { skey, options } => {
            let fragment = dorar::search(&skey).await?;
            run_pipeline(&fragment, &options)
        }
        Commands::Extract { path, options } => {
            let fragment = read_fragment(&path)?;
            run_pipeline(&fragment, &options)
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn run_pipeline(fragment: &str, args: &PipelineArgs) -> Result<()> {
    let opts = ExtractOptions {
        tashkeel: args.tashkeel,
        missing_field_default: args.missing.clone(),
    };

    let mut hadiths = extract_hadiths(fragment, &opts);
    info!("Extracted {} records", hadiths.len());

    if let Some(limit) = args.limit {
        hadiths.truncate(limit);
    }

    if hadiths.is_empty() {
        println!("No results.");
        return Ok(());
    }

    match args.format {
        Format::Json => println!("{}", render::to_json(&hadiths)?),
        Format::Html => println!("{}", render::to_html(&hadiths)),
        Format::Table => print_listing(&hadiths),
    }

    Ok(())
}

fn print_listing(hadiths: &[Hadith]) {
    for (i, hadith) in hadiths.iter().enumerate() {
        println!("#{} {}", i + 1, truncate(&hadith.body, 100));
        for field in Field::ALL {
            let value = hadith.field(field);
            if !value.is_empty() {
                println!("   {}: {}", field.label(), value);
            }
        }
        println!();
    }
    println!("{} hadith(s)", hadiths.len());
}

fn read_fragment(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
