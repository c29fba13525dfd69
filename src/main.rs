use anyhow::{Context, Result};
use calcpad::calculator::{Calculation, Calculator, parse_keys};
use calcpad::config::{Config, DisplayConfig};
use calcpad::logging;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Keypad calculator: press buttons, see the problem and its solution.
#[derive(Debug, Parser)]
#[command(name = "calcpad", version, about)]
struct Cli {
    /// Buttons to press, e.g. `(1+2)×3` or `2 + 3 =`. Starts an
    /// interactive session when omitted.
    keys: Vec<String>,

    /// Print calculations as JSON.
    #[arg(long)]
    json: bool,

    /// Print the calculation after every button instead of only the last.
    #[arg(long)]
    steps: bool,

    /// Path to a config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    logging::init(config.log_level.as_deref());

    config.display.json |= cli.json;

    let mut calculator = Calculator::new();

    if cli.keys.is_empty() {
        run_interactive(&mut calculator, &config.display)
    } else {
        let line = cli.keys.join(" ");
        press_line(&mut calculator, &line, cli.steps, &config.display)
    }
}

fn run_interactive(calculator: &mut Calculator, display: &DisplayConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let interactive = stdin.is_terminal();
    let mut input = String::new();

    loop {
        if interactive {
            print!("{}", display.prompt);
            stdout.flush()?;
        }

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        if let Err(err) = press_line(calculator, line, false, display) {
            eprintln!("{err}");
        }
    }

    Ok(())
}

fn press_line(
    calculator: &mut Calculator,
    line: &str,
    steps: bool,
    display: &DisplayConfig,
) -> Result<()> {
    let buttons = parse_keys(line)?;

    for button in buttons {
        calculator.press(button);
        if steps {
            print_calculation(calculator.calculation(), &calculator.evaluable(), display)?;
        }
    }

    if !steps {
        print_calculation(calculator.calculation(), &calculator.evaluable(), display)?;
    }

    Ok(())
}

fn print_calculation(
    calculation: &Calculation,
    evaluable: &str,
    display: &DisplayConfig,
) -> Result<()> {
    if display.json {
        println!("{}", serde_json::to_string(calculation)?);
        return Ok(());
    }

    println!("{}", calculation.problem);
    if display.show_evaluable {
        println!("~ {evaluable}");
    }
    println!("= {}", calculation.solution);
    Ok(())
}
