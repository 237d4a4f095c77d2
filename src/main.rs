use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::time::Instant;

use khmer_locale::{
    format_currency, format_date, format_number, normalize_text, validate_landline,
    validate_mobile, validate_national_id, DateFormatOptions, FormatOptions, Request, Response,
    ScanMode, Transliterator,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replace ASCII digits with Khmer digits
    Number { value: String },

    /// Format an amount as riel with Khmer digits
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        #[arg(long, default_value = "en-US")]
        locale: String,

        #[arg(long, default_value_t = 0)]
        min_fraction: usize,

        #[arg(long, default_value_t = 2)]
        max_fraction: usize,

        /// Suffix appended after the amount
        #[arg(long, default_value = " រៀល")]
        symbol: String,
    },

    /// Format a YYYY-MM-DD date with Khmer digits
    Date {
        date: chrono::NaiveDate,

        #[arg(short, long, default_value = "/")]
        delimiter: String,
    },

    /// Transliterate Khmer text to Latin letters
    Translit {
        text: String,

        /// Look up one codepoint at a time (no cluster entries)
        #[arg(long)]
        codepoint: bool,
    },

    /// Normalize text for comparison
    Normalize { text: String },

    /// Check a phone number or national ID
    Validate { kind: ValidateKind, value: String },

    /// Run JSONL requests from a file in parallel
    Batch {
        /// Input file, one JSON request per line
        #[arg(short, long)]
        input: String,

        /// Output file (JSONL) - optional, skip to benchmark only
        #[arg(short, long)]
        output: Option<String>,

        /// Limit number of lines to process
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ValidateKind {
    Landline,
    Mobile,
    NationalId,
}

#[derive(Serialize)]
struct BatchRecord {
    id: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    ok: Option<Response>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn run_line(id: usize, line: &str) -> BatchRecord {
    let outcome = serde_json::from_str::<Request>(line)
        .map_err(|e| e.to_string())
        .and_then(|request| request.run().map_err(|e| e.to_string()));
    match outcome {
        Ok(response) => BatchRecord { id, ok: Some(response), error: None },
        Err(error) => BatchRecord { id, ok: None, error: Some(error) },
    }
}

fn run_batch(input: &str, output: Option<&str>, limit: Option<usize>) -> anyhow::Result<()> {
    println!("Reading source: {}", input);
    let reader = BufReader::new(File::open(input)?);
    let mut lines: Vec<String> = reader
        .lines()
        .collect::<Result<Vec<String>, _>>()?
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    if let Some(limit) = limit {
        lines.truncate(limit);
    }

    println!("Processing {} requests...", lines.len());
    let start = Instant::now();

    let records: Vec<BatchRecord> = lines
        .par_iter()
        .enumerate()
        .map(|(i, line)| run_line(i, line))
        .collect();

    let failed = records.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        eprintln!("{} of {} requests failed", failed, records.len());
    }

    if let Some(output_path) = output {
        let mut writer = BufWriter::with_capacity(262144, File::create(output_path)?);
        for record in &records {
            serde_json::to_writer(&mut writer, record)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        println!("Done. Saved to {}", output_path);
    }

    let duration = start.elapsed();
    println!("Time taken: {:.2}s", duration.as_secs_f32());
    println!("Speed: {:.2} requests/sec", lines.len() as f32 / duration.as_secs_f32());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Number { value } => println!("{}", format_number(value)),
        Command::Currency { amount, locale, min_fraction, max_fraction, symbol } => {
            let options = FormatOptions {
                locale,
                minimum_fraction_digits: min_fraction,
                maximum_fraction_digits: max_fraction,
                currency_symbol: symbol,
            };
            println!("{}", format_currency(amount, &options)?);
        }
        Command::Date { date, delimiter } => {
            let options = DateFormatOptions { delimiter, ..DateFormatOptions::default() };
            println!("{}", format_date(&date, &options));
        }
        Command::Translit { text, codepoint } => {
            let mode = if codepoint { ScanMode::Codepoint } else { ScanMode::LongestMatch };
            println!("{}", Transliterator::new(mode).transliterate(&text));
        }
        Command::Normalize { text } => println!("{}", normalize_text(&text)),
        Command::Validate { kind, value } => {
            let valid = match kind {
                ValidateKind::Landline => validate_landline(&value),
                ValidateKind::Mobile => validate_mobile(&value),
                ValidateKind::NationalId => validate_national_id(&value),
            };
            println!("{}", valid);
            if !valid {
                std::process::exit(1);
            }
        }
        Command::Batch { input, output, limit } => {
            run_batch(&input, output.as_deref(), limit)?;
        }
    }

    Ok(())
}
