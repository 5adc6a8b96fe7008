use std::{io, io::Read, path::PathBuf};

use miette::IntoDiagnostic;
use wick_rs::{command::Command, text::Notation, wick::WickTheorem};

/// Wick's theorem for fermionic operator products
#[derive(clap::Parser)]
struct Args {
    /// File name to run
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
    /// Print each product unchanged instead of fully contracting it
    #[arg(long)]
    no_contract: bool,
    /// Notation for printed terms
    #[arg(long, value_enum, default_value_t = Notation::Plain)]
    notation: Notation,
    /// Line width to wrap long sums at
    #[arg(long, default_value_t = 80)]
    width: usize,
}

fn main() -> miette::Result<()> {
    let args: Args = clap::Parser::parse();

    let (name, src) = if let Some(path) = &args.file {
        (
            path.display().to_string(),
            std::fs::read_to_string(path).into_diagnostic()?,
        )
    } else {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s).into_diagnostic()?;
        ("<stdin>".to_owned(), s)
    };

    let command = Command::parse(&name, &src)?;
    for product in command.products {
        let wick = WickTheorem::new(product).full_contractions(!args.no_contract);
        let result = wick.compute();
        println!("{} =", wick.expr().render(args.notation));
        println!(
            "  {}",
            result
                .render(args.notation, args.width.saturating_sub(2))
                .replace('\n', "\n  ")
        );
    }
    Ok(())
}
