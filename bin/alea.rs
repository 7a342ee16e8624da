use clap::{Parser, ValueEnum};
use serde::Serialize;

use alea::{Alea, AleaState, Seed};

#[derive(Clone, Copy, ValueEnum, Debug)]
enum Kind { F64, U32, Fract53 }

#[derive(Clone, Copy, ValueEnum, Debug)]
enum Format { Plain, Json }

#[derive(Parser, Debug)]
#[command(name="alea", about="Print a reproducible Alea sequence for the given seeds")]
struct Args {
    /// Seeds, mixed in order. None: seed from the wall clock.
    seeds: Vec<String>,
    /// Parse every seed as a number instead of text.
    #[arg(long, default_value_t=false)] numeric: bool,
    #[arg(long, short='n', default_value_t=10)] count: usize,
    #[arg(long, value_enum, default_value_t=Kind::F64)] kind: Kind,
    #[arg(long, value_enum, default_value_t=Format::Plain)] format: Format,
    /// Steps to discard before printing.
    #[arg(long, default_value_t=0)] skip: usize,
}

#[derive(Serialize)]
struct Report<'a> {
    version: &'static str,
    seeds: &'a [Seed],
    kind: String,
    values: Vec<f64>,
    state: AleaState,
}

fn main() {
    let args = Args::parse();

    let seeds: Vec<Seed> = if args.numeric {
        let parsed: Result<Vec<Seed>, _> = args.seeds.iter().map(|s| Seed::parse_number(s)).collect();
        match parsed {
            Ok(v) => v,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(2);
            }
        }
    } else {
        args.seeds.iter().map(Seed::from).collect()
    };

    let mut rng = Alea::new(seeds);
    if args.seeds.is_empty() {
        eprintln!("note: no seeds given, using clock seed {}", rng.args()[0]);
    }
    for _ in 0..args.skip { rng.next_f64(); }

    let values: Vec<f64> = (0..args.count).map(|_| match args.kind {
        Kind::F64 => rng.next_f64(),
        Kind::U32 => rng.next_u32() as f64,
        Kind::Fract53 => rng.fract53(),
    }).collect();

    match args.format {
        Format::Plain => {
            for v in &values { println!("{}", v); }
        }
        Format::Json => {
            let report = Report {
                version: Alea::VERSION,
                seeds: rng.args(),
                kind: format!("{:?}", args.kind).to_lowercase(),
                values,
                state: rng.state(),
            };
            println!("{}", serde_json::to_string_pretty(&report).expect("json"));
        }
    }
}
