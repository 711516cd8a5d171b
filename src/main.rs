use std::io::{self, BufRead, Write};

use clap::Parser;
use exacta::{evaluate_line,
             interpreter::{cancel::CancelToken,
                           evaluator::core::{Context, DEFAULT_PRECISION_DIGITS, PrecisionPolicy},
                           value::Outcome}};

/// exacta is an interactive calculator that never rounds behind your back:
/// every result is an exact fraction, or is clearly marked as approximate.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of correct decimal digits for approximated results such as
    /// roots. Values above 100000 are clamped.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION_DIGITS)]
    precision: u32,

    /// Evaluate a single expression and exit instead of starting a session.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut context = Context::with_precision(PrecisionPolicy::new(args.precision));
    let cancel = CancelToken::new();

    if let Some(expression) = args.expression {
        match evaluate_line(&expression, &mut context, &cancel) {
            Ok(outcome) => println!("{}", render(&outcome, args.precision)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim() == "quit" {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match evaluate_line(line, &mut context, &cancel) {
            Ok(outcome) => println!("{}", render(&outcome, args.precision)),
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Formats an outcome for display.
///
/// Exact values print as plain decimals when the decimal form terminates
/// within the digit budget, and as `n/d ≈ decimal` when it does not.
/// Approximate values always carry the `≈` marker.
fn render(outcome: &Outcome, precision: u32) -> String {
    let value = outcome.value();
    let (decimal, decimal_is_exact) = value.to_decimal(precision);
    if outcome.is_exact() {
        if decimal_is_exact {
            decimal
        } else {
            format!("{} ≈ {decimal}", value.to_fraction_string())
        }
    } else {
        format!("≈ {decimal}")
    }
}
