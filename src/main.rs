use std::collections::HashSet;
use std::process::ExitCode;

use clap::Parser;
use ruleval::{evaluate, util::preprocess::wrap_variables, Value, Variables};

/// ruleval evaluates a business-rule expression against a set of named
/// variables and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A variable binding in NAME=VALUE form. Numeric and boolean values are
    /// recognized; anything else is bound as a string. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE")]
    var: Vec<String>,

    /// Pre-wrap free-text variable names in parentheses before evaluation.
    #[arg(short, long)]
    wrap: bool,

    /// The rule expression to evaluate.
    expression: String,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let mut variables = Variables::new();
    for binding in &args.var {
        match binding.split_once('=') {
            Some((name, raw)) => {
                variables.insert(name.to_string(), parse_value(raw));
            },
            None => {
                eprintln!("Invalid variable binding '{binding}'. Expected NAME=VALUE.");
                return ExitCode::FAILURE;
            },
        }
    }

    let expression = if args.wrap {
        let known: HashSet<String> = variables.keys().cloned().collect();
        wrap_variables(&args.expression, &known)
    } else {
        args.expression.clone()
    };

    match evaluate(&expression, &variables) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Interprets a raw command-line value as the most specific [`Value`] kind.
fn parse_value(raw: &str) -> Value {
    if let Ok(number) = raw.parse::<f64>() {
        return Value::Number(number);
    }
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(raw.to_string()),
    }
}
