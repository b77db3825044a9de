//! Propositional Bases - Command Line Interface
//!
//! Rewrites formulas given on the command line or in a file into a restricted
//! operator basis.

use clap::{ArgAction, Parser, ValueEnum};
use fern::colors::{Color, ColoredLevelConfig};
use log::{error, info, LevelFilter};
use propositional_bases::{read_formulas_file, Basis, Formula};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BasisArg {
    /// Negation, conjunction and disjunction
    NotAndOr,
    /// Negation and conjunction
    NotAnd,
    /// Negated conjunction alone
    Nand,
    /// Implication and negation
    ImpliesNot,
    /// Implication and the constant F
    ImpliesFalse,
}

impl From<BasisArg> for Basis {
    fn from(val: BasisArg) -> Self {
        match val {
            BasisArg::NotAndOr => Basis::NotAndOr,
            BasisArg::NotAnd => Basis::NotAnd,
            BasisArg::Nand => Basis::Nand,
            BasisArg::ImpliesNot => Basis::ImpliesNot,
            BasisArg::ImpliesFalse => Basis::ImpliesFalse,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bases")]
#[command(about = "Rewrite propositional formulas into a restricted operator basis", long_about = None)]
#[command(version)]
struct Args {
    /// Formulas to rewrite, e.g. "p -> q & ~r"
    #[arg(value_name = "FORMULA")]
    formulas: Vec<String>,

    /// Read formulas from a file, one per line
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Target basis
    #[arg(short = 'b', long = "basis", value_enum, default_value = "nand")]
    basis: BasisArg,

    /// Verify that each result is restricted to the basis and equivalent to its input
    #[arg(short = 'c', long = "check")]
    check: bool,

    /// Print the truth table of each result
    #[arg(short = 't', long = "table")]
    table: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

fn collect_formulas(args: &Args) -> Result<Vec<Formula>, String> {
    let mut formulas = Vec::new();
    for text in &args.formulas {
        let formula = Formula::parse(text).map_err(|e| e.to_string())?;
        formulas.push(formula);
    }
    if let Some(ref path) = args.input {
        let from_file = read_formulas_file(path)
            .map_err(|e| format!("Error reading formulas from '{}': {}", path.display(), e))?;
        formulas.extend(from_file);
    }
    Ok(formulas)
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logger(args.verbose) {
        eprintln!("Error initialising logger: {}", e);
        process::exit(1);
    }

    let formulas = match collect_formulas(&args) {
        Ok(formulas) => formulas,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    if formulas.is_empty() {
        error!("No formula given; pass formulas as arguments or use --input");
        process::exit(2);
    }

    let basis = Basis::from(args.basis);
    info!("rewriting {} formula(s) into basis {}", formulas.len(), basis);

    let mut failures = 0;
    for formula in &formulas {
        let result = match basis.rewrite(formula) {
            Ok(result) => result,
            Err(e) => {
                error!("{}: {}", formula, e);
                failures += 1;
                continue;
            }
        };
        println!("{}", result);

        if args.check {
            let admitted = basis.admits(&result);
            let equivalent = result.equivalent_to(formula);
            if admitted && equivalent {
                info!("{}: check passed", formula);
            } else {
                error!(
                    "{}: check failed (restricted: {}, equivalent: {})",
                    formula, admitted, equivalent
                );
                failures += 1;
            }
        }

        if args.table {
            print!("{}", result.truth_table());
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}
