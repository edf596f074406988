use std::cmp::Ordering;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pali_sort::{Alphabet, PaliCollator};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list, one word per line (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Alphabet file, one entry per line in collation order (built-in Pali alphabet if omitted)
    #[arg(short, long)]
    alphabet: Option<PathBuf>,

    /// What to write for the input words
    #[arg(short, long, value_enum, default_value_t = Mode::Sort)]
    mode: Mode,

    /// Sort / explode on the rayon thread pool
    #[arg(short, long)]
    parallel: bool,

    /// Limit number of words to process
    #[arg(short, long)]
    limit: Option<usize>,

    /// Write the sorted list in descending order
    #[arg(short, long)]
    reverse: bool,

    /// Drop words that compare equal to their predecessor after sorting
    #[arg(long)]
    dedup: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Sorted words, one per line
    Sort,
    /// One JSON object per word with its Pali characters and their ranks
    Explode,
}

#[derive(Serialize)]
struct ExplodeRecord<'a> {
    word: &'a str,
    units: Vec<&'a str>,
    ranks: Vec<usize>,
}

fn explode_record(alphabet: &Alphabet, word: &str) -> anyhow::Result<String> {
    let mut units = Vec::new();
    let mut ranks = Vec::new();
    for unit in alphabet.units(word) {
        units.push(unit.text);
        ranks.push(alphabet.position(unit.text));
    }
    let record = ExplodeRecord { word, units, ranks };
    Ok(serde_json::to_string(&record)?)
}

fn read_words(input: Option<&PathBuf>) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read input")?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

fn open_output(output: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?;
            Box::new(BufWriter::with_capacity(262144, file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout may carry the results.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let custom_alphabet;
    let alphabet: &Alphabet = match &args.alphabet {
        Some(path) => {
            let start_load = Instant::now();
            custom_alphabet = Alphabet::load(path)?;
            info!(
                path = %path.display(),
                entries = custom_alphabet.len(),
                elapsed_ms = start_load.elapsed().as_millis() as u64,
                "loaded alphabet"
            );
            &custom_alphabet
        }
        None => Alphabet::pali(),
    };
    let collator = PaliCollator::new(alphabet);

    let mut words = read_words(args.input.as_ref())?;
    if let Some(limit) = args.limit {
        words.truncate(limit);
    }
    info!(words = words.len(), mode = ?args.mode, parallel = args.parallel, "processing");

    let start_process = Instant::now();
    let lines: Vec<String> = match args.mode {
        Mode::Sort => {
            let mut sorted = if args.parallel {
                collator.sort_words_par(words)
            } else {
                collator.sort_words(words)
            };
            if args.dedup {
                let before = sorted.len();
                sorted.dedup_by(|a, b| collator.compare(a, b) == Ordering::Equal);
                info!(removed = before - sorted.len(), "dropped rank-equal duplicates");
            }
            if args.reverse {
                sorted.reverse();
            }
            sorted
        }
        Mode::Explode => {
            if args.parallel {
                words
                    .par_iter()
                    .map(|w| explode_record(alphabet, w))
                    .collect::<anyhow::Result<_>>()?
            } else {
                words
                    .iter()
                    .map(|w| explode_record(alphabet, w))
                    .collect::<anyhow::Result<_>>()?
            }
        }
    };
    let duration = start_process.elapsed();

    let mut writer = open_output(args.output.as_ref())?;
    for line in &lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), "saved output");
    }
    info!(
        elapsed_ms = duration.as_millis() as u64,
        words_per_sec = lines.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
        "done"
    );

    Ok(())
}
