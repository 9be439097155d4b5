use std::path::PathBuf;

use clap::{Parser, Subcommand};

use climbers_guide_parser::config::Config;
use climbers_guide_parser::parser::{parse_corpus, CorpusResult};
use climbers_guide_parser::{db, json};

#[derive(Parser)]
#[command(
    name = "climbers-guide-parser",
    about = "Extract peaks, passes, and routes from A Climber's Guide to the High Sierra"
)]
struct Cli {
    /// Directory holding the chapter HTML files
    #[arg(short, long, default_value = "chapters")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the corpus and write output-{peaks,passes,regions}.json
    Json {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Parse the corpus and load it into a SQLite database
    Sqlite {
        #[arg(long, default_value = "guide.sqlite")]
        db: PathBuf,
    },
    /// Row counts for an existing database
    Stats {
        #[arg(long, default_value = "guide.sqlite")]
        db: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Json { out } => {
            let config = Config::from_chapter_dir(&cli.dir);
            let result = parse_corpus(&config);
            print_summary(&result);
            json::write_outputs(&out, &result)?;
            println!("JSON files written to {}", out.display());
        }
        Commands::Sqlite { db } => {
            let config = Config::from_chapter_dir(&cli.dir);
            let result = parse_corpus(&config);
            print_summary(&result);
            let conn = db::connect(&db)?;
            db::init_schema(&conn)?;
            db::save_regions(&conn, &result.regions)?;
            println!("Saved to {}", db.display());
        }
        Commands::Stats { db } => {
            let conn = db::connect(&db)?;
            db::init_schema(&conn)?;
            let stats = db::get_stats(&conn)?;
            println!("Regions: {}", stats.regions);
            println!("Peaks:   {}", stats.peaks);
            println!("Routes:  {}", stats.routes);
            println!("Passes:  {}", stats.passes);
        }
    }

    Ok(())
}

fn print_summary(result: &CorpusResult) {
    println!(
        "Parsed {} regions, {} peaks ({} routes), {} passes.",
        result.regions.len(),
        result.peaks.len(),
        result.route_count(),
        result.passes.len(),
    );
    if !result.failed.is_empty() {
        println!("{} chapters failed:", result.failed.len());
        for path in &result.failed {
            println!("  {}", path.display());
        }
    }
}
