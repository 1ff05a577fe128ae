use std::io::{self, BufRead, Write};

use clap::Parser;
use deskcalc::{Calculator, evaluate};
use tracing_subscriber::EnvFilter;

/// deskcalc is a small interactive infix calculator with an evaluation
/// history.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate once. Starts an interactive session when
    /// omitted.
    expression: Option<String>,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();

    if let Some(expression) = args.expression {
        match evaluate(&expression) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    } else {
        run_session();
    }
}

/// Runs the interactive session.
///
/// Each line is evaluated as an expression and recorded in the history. The
/// words `history`, `clear` and `quit` are commands; they cannot collide
/// with expressions because letters are outside the expression alphabet.
fn run_session() {
    let mut calculator = Calculator::new();
    let stdin = io::stdin();

    print_prompt();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };

        match line.trim() {
            "" => {},

            "quit" | "exit" => break,

            "history" => {
                if calculator.history().is_empty() {
                    println!("No history available.");
                } else {
                    for entry in calculator.history().entries() {
                        println!("  {} = {}", entry.expression, entry.result);
                    }
                }
            },

            "clear" => calculator.clear_history(),

            expression => {
                calculator.clear();
                calculator.press(expression);
                calculator.equals();
                println!("{}", calculator.display());
            },
        }

        print_prompt();
    }
}

fn print_prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
