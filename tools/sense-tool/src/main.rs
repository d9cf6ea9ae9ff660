//! `sense` - run the disambiguation pipeline from the command line.

use std::fs;
use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sense_lexicon::{compile_lexicon, KnowledgeBase};
use sense_protocol::Lexicon;
use sense_solver::{Analyzer, AnalyzerConfig, SemanticGraph};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "sense",
    author,
    version,
    about = "Rule-based semantic disambiguation of single sentences"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Lexicon file (.json, or a compiled archive)
    #[arg(long, global = true, env = "SENSE_LEXICON", value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Analyzer rule configuration (JSON)
    #[arg(long, global = true, env = "SENSE_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a sentence. Without a sentence, every non-empty stdin line is analyzed.
    Analyze {
        /// Sentence words (joined with spaces)
        sentence: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate a JSON lexicon and compile it to a binary archive.
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Read `pred(arg1,arg2)` lines and print the graph as DOT.
    Graph {
        /// Relation file (defaults to stdin)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn build_analyzer(lexicon: Option<&Path>, config: Option<&Path>) -> Result<Analyzer> {
    let kb = match lexicon {
        Some(path) => KnowledgeBase::load(path)
            .with_context(|| format!("loading lexicon {}", path.display()))?,
        None => KnowledgeBase::builtin(),
    };

    let config = match config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };

    debug!(entries = kb.len(), tokenizer = ?config.tokenizer, "Analyzer ready");
    Ok(Analyzer::new(kb, config))
}

fn run_analyze(analyzer: &Analyzer, sentence: &str, format: OutputFormat) -> Result<()> {
    let analysis = analyzer.analyze(sentence);
    match format {
        OutputFormat::Text => println!("{}", render::render_text(&analysis)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
    }
    Ok(())
}

fn run_compile(input: &Path, output: &Path) -> Result<()> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let lexicon: Lexicon = serde_json::from_str(&json)
        .with_context(|| format!("parsing {}", input.display()))?;

    info!(version = lexicon.version, entries = lexicon.entries.len(), "Compiling lexicon");
    let bytes = compile_lexicon(&lexicon)?;

    fs::write(output, &bytes).with_context(|| format!("writing {}", output.display()))?;
    println!(
        "Compiled {} entries ({} bytes) to {}",
        lexicon.entries.len(),
        bytes.len(),
        output.display()
    );
    Ok(())
}

fn run_graph(input: Option<&Path>) -> Result<()> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let graph = SemanticGraph::from_relation_text(&text)?;
    print!("{}", graph.to_dot());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match &cli.command {
        Commands::Analyze { sentence, format } => {
            let analyzer = build_analyzer(cli.lexicon.as_deref(), cli.config.as_deref())?;
            if sentence.is_empty() {
                for line in io::stdin().lock().lines() {
                    let line = line?;
                    if !line.trim().is_empty() {
                        run_analyze(&analyzer, &line, *format)?;
                    }
                }
            } else {
                run_analyze(&analyzer, &sentence.join(" "), *format)?;
            }
        }
        Commands::Compile { input, output } => run_compile(input, output)?,
        Commands::Graph { input } => run_graph(input.as_deref())?,
    }

    Ok(())
}
