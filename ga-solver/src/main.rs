mod cli;

use clap::Parser;
use cli::{Cli, Command};
use ga_algebra::{Algebra, Lexical, Ranked, TermSet};
use ga_solver::{evaluate, Error, Formula, BUILTIN, QUAT_MUL, ROTATE};
use std::process;
use tracing::debug;

/// Prints the result of a product, as an equation and / or as code.
fn print_result(cli: &Cli, result: &TermSet, mapping: Option<&[(&str, &str)]>) -> Result<(), Error> {
    if cli.equation || mapping.is_none() {
        println!("{}", result);
    }
    if let Some(mapping) = mapping {
        print!("{}", result.to_code(mapping, &cli.code_format())?);
    }
    Ok(())
}

/// Evaluates and prints a built-in formula.
fn run_formula(cli: &Cli, formula: &Formula) -> Result<(), Error> {
    debug!(formula = formula.name, "evaluating built-in formula");
    println!("// {}", formula.description);
    let result = formula.evaluate()?;
    print_result(cli, &result, Some(formula.mapping))
}

/// Multiplies two term lists from the command line.
fn run_product(
    cli: &Cli,
    lhs: &str,
    rhs: &str,
    mappings: &[(String, String)],
    order: Option<&str>,
) -> Result<(), Error> {
    let result = match order {
        Some(order) => evaluate(&Algebra::new(Ranked::from_chars(order)), "product", &[lhs, rhs])?,
        None => evaluate(&Algebra::new(Lexical), "product", &[lhs, rhs])?,
    };

    let mappings = mappings.iter()
        .map(|(name, expr)| (name.as_str(), expr.as_str()))
        .collect::<Vec<_>>();
    let mapping = (!mappings.is_empty()).then_some(mappings.as_slice());
    print_result(cli, &result, mapping)
}

fn run(cli: &Cli) -> Result<(), Error> {
    match &cli.command {
        Some(Command::Rotate) => run_formula(cli, &ROTATE),
        Some(Command::QuatMul) => run_formula(cli, &QUAT_MUL),
        Some(Command::Product { lhs, rhs, mappings, order }) => {
            run_product(cli, lhs, rhs, mappings, order.as_deref())
        },
        None => {
            for (i, formula) in BUILTIN.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                run_formula(cli, formula)?;
            }
            Ok(())
        },
    }
}

fn main() {
    let cli = Cli::parse();
    cli.init_logging();

    if let Err(err) = run(&cli) {
        err.report_to_stderr();
        process::exit(1);
    }
}
