use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use symtrace::core::{Alias, FileTree, ImportResolver, PathTracer, ProjectAnalyzer};

#[derive(Debug, Parser)]
#[command(
    name = "symtrace",
    version = "0.1.0",
    author = "symtrace developers",
    about = "Symbol-level dependency graph extraction for JavaScript/TypeScript projects"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Crawl a project from an entry file and print every declaration found
    Analyze {
        /// Entry file to start the crawl from
        entry: PathBuf,

        /// Maximum crawl depth (entry file is depth 0)
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
        depth: u8,

        /// Path alias mapping, e.g. '@=./src' (repeatable)
        #[arg(long = "alias", value_name = "PREFIX=DIR")]
        aliases: Vec<String>,
    },

    /// Extract the declarations of a single file, without crawling imports
    File {
        path: PathBuf,
    },

    /// Trace the transitive dependency closure of a symbol
    Trace {
        /// Entry file to analyze before tracing
        entry: PathBuf,

        /// Symbol id to trace
        symbol: String,

        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
        depth: u8,

        #[arg(long = "alias", value_name = "PREFIX=DIR")]
        aliases: Vec<String>,
    },

    /// Print a JSON mirror of a directory tree with file contents
    Tree {
        root: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Analyze {
            entry,
            depth,
            aliases,
        } => {
            let analyzer = ProjectAnalyzer::new(ImportResolver::new(parse_aliases(&aliases)?));
            let table = analyzer.analyze_project(&entry, depth as usize).await;
            println!("{}", serde_json::to_string_pretty(&table.declarations())?);
        }
        Command::File { path } => {
            let analyzer = ProjectAnalyzer::new(ImportResolver::default());
            let declarations = analyzer.analyze_file(&path).await?;
            println!("{}", serde_json::to_string_pretty(&declarations)?);
        }
        Command::Trace {
            entry,
            symbol,
            depth,
            aliases,
        } => {
            let analyzer = ProjectAnalyzer::new(ImportResolver::new(parse_aliases(&aliases)?));
            let table = analyzer.analyze_project(&entry, depth as usize).await;
            let tracer = PathTracer::new(&table);
            print!("{}", tracer.render(&symbol)?);
        }
        Command::Tree { root } => {
            let tree = FileTree::build(&root)?;
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
    }
    Ok(())
}

fn parse_aliases(specs: &[String]) -> Result<Vec<Alias>> {
    let mut aliases = Vec::with_capacity(specs.len());
    for spec in specs {
        let Some((prefix, target)) = spec.split_once('=') else {
            bail!("invalid alias '{spec}': expected PREFIX=DIR");
        };
        aliases.push(Alias::new(prefix, target));
    }
    Ok(aliases)
}
