use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use chrono::Local;
use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};
use ngrammer::{
    Error,
    GramRange,
    NGramExtractor,
    NgramConfig,
    Result,
    output::{write_ngrams, OutputFormat},
};

const BENCH_SENTENCE: &str = "A long text which is very long ";

#[derive(Debug, Parser)]
#[command(name = "ngrams", version, about = "Extract contiguous word n-grams from text")]
struct Cli {
    /// INI configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// none, error, warn, info, debug or trace
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log records to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every n-gram of the input
    Extract {
        /// Gram sizes: "a..b", "a-b", or "n" for 1 up to n
        #[arg(short, long)]
        sizes: Option<GramRange>,

        /// text or json
        #[arg(short, long)]
        format: Option<String>,

        /// Token separator for text output
        #[arg(long)]
        separator: Option<String>,

        /// Input file; stdin when omitted
        input: Option<PathBuf>,
    },
    /// Print the number of n-grams per size
    Count {
        #[arg(short, long)]
        sizes: Option<GramRange>,

        input: Option<PathBuf>,
    },
    /// Time extraction over a large synthetic text
    Bench {
        /// Repetitions of the 7-word benchmark sentence
        #[arg(short, long, default_value_t = 500_000)]
        multiplier: usize,

        #[arg(short, long, default_value = "4")]
        sizes: GramRange,
    },
}

fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<NgramConfig> {
    let mut config = match &cli.config {
        Some(path) => NgramConfig::from_ini(path)?,
        None => NgramConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.extractor.set_log_level(level)?;
    }
    config.extractor.adjust_thread_count();
    Ok(config)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn build_extractor(text: &str, config: &NgramConfig) -> Result<NGramExtractor> {
    let extractor = NGramExtractor::new(text).with_config(config.extractor.clone())?;
    if extractor.token_count() == 0 {
        warn!("Input contains no tokens");
    }
    info!("Tokenized input into {} words", extractor.token_count());
    Ok(extractor)
}

fn run_extract(
    config: &NgramConfig,
    sizes: Option<GramRange>,
    format: Option<&str>,
    separator: Option<&str>,
    input: Option<&Path>,
) -> Result<()> {
    let format = match format {
        Some(name) => OutputFormat::from_str(name).ok_or_else(|| {
            Error::config(format!("Invalid format (must be 'text' or 'json'): {}", name))
        })?,
        None => config.output.format,
    };
    let separator = separator.unwrap_or(config.output.separator.as_str());
    let sizes = sizes.unwrap_or(config.extractor.sizes);

    let text = read_input(input)?;
    let extractor = build_extractor(&text, config)?;
    let ngrams = extractor.extract(sizes)?;
    info!("Writing {} ngrams for sizes {} as {}", ngrams.len(), sizes, format.as_str());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_ngrams(&mut out, &ngrams, format, separator)
}

fn run_count(config: &NgramConfig, sizes: Option<GramRange>, input: Option<&Path>) -> Result<()> {
    let sizes = sizes.unwrap_or(config.extractor.sizes);
    let text = read_input(input)?;
    let extractor = build_extractor(&text, config)?;

    let total = extractor.count_range(sizes.min, sizes.max)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "tokens\t{}", extractor.token_count())?;
    for n in sizes.sizes() {
        writeln!(out, "{}\t{}", n, extractor.count_size(n)?)?;
    }
    writeln!(out, "total\t{}", total)?;
    Ok(())
}

fn run_bench(config: &NgramConfig, multiplier: usize, sizes: GramRange) -> Result<()> {
    let demo = NGramExtractor::new("A brown fox ").extract_up_to(3)?;
    let demo: Vec<Vec<&str>> = demo.iter().map(|g| g.as_strs()).collect();
    println!("\nInput:\n  \"A brown fox\"\n");
    println!("Output:\n  {:?}\n", demo);

    let text = BENCH_SENTENCE.repeat(multiplier);
    println!("Big text length: {} characters", text.len());

    let start = Instant::now();
    let extractor = NGramExtractor::new(&text).with_config(config.extractor.clone())?;
    println!(
        "Total {} tokens after splitting the text ({:.2?})\n",
        extractor.token_count(),
        start.elapsed()
    );

    let start = Instant::now();
    let all = extractor.extract(sizes)?;
    println!(
        "{:.6} Million n-grams, for n = {} ({:.2?})",
        all.len() as f64 / 1e6,
        sizes,
        start.elapsed()
    );
    drop(all);

    for n in sizes.sizes() {
        let start = Instant::now();
        let grams = extractor.extract_size(n)?;
        println!(
            "{:.6} Million, for n = {} ({:.2?})",
            grams.len() as f64 / 1e6,
            n,
            start.elapsed()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first
    let config = load_config(&cli)?;

    init_logging(config.extractor.get_log_level(), cli.log_file.as_deref())?;
    info!("Starting ngrams with log level: {:?}", config.extractor.get_log_level());
    info!("{}", config.extractor.describe());

    match &cli.command {
        Command::Extract { sizes, format, separator, input } => run_extract(
            &config,
            *sizes,
            format.as_deref(),
            separator.as_deref(),
            input.as_deref(),
        ),
        Command::Count { sizes, input } => run_count(&config, *sizes, input.as_deref()),
        Command::Bench { multiplier, sizes } => run_bench(&config, *multiplier, *sizes),
    }
}
