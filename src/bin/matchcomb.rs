use clap::Parser;
use log::info;
use std::process::ExitCode;

use matchcomb::pattern::{Regcx, format_records, parse_records, tokenize_spanned};

#[derive(Parser, Debug)]
#[command(author, version, about = "Parse a record pattern and run it", long_about = None)]
struct Args {
    /// Pattern over records, e.g. "B(W|H)+✖"
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Records to match against, one character each (B, W, H, L, or _ for nil)
    #[arg(short, long, value_name = "STRING")]
    records: Option<String>,

    /// Print every token of the pattern with its span
    #[arg(short, long)]
    spans: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.spans {
        for (token, span) in tokenize_spanned(&args.pattern) {
            println!("{}\t{}", span, token);
        }
    }

    let regcx = match Regcx::new(&args.pattern) {
        Ok(regcx) => regcx,
        Err(err) => {
            eprintln!("Invalid pattern: {}", err);
            return ExitCode::FAILURE;
        }
    };
    println!("pattern: {}", regcx.pattern());

    let Some(text) = args.records else {
        return ExitCode::SUCCESS;
    };
    let records = match parse_records(&text) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("Invalid records: {}", err);
            return ExitCode::FAILURE;
        }
    };
    info!("matching {} records", records.len());

    match regcx.matches(&records) {
        Ok(Some(matched)) => println!("match: {}", format_records(&matched)),
        Ok(None) => println!("no match"),
        Err(end) => println!("no match: {}", end),
    }
    ExitCode::SUCCESS
}
