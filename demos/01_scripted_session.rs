/// scripted session - drive the interactive flow from canned answers
use std::io::Cursor;

use term_deposit_rs::{BalanceRounding, CalculatorConfig, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // bad principal, then a term that is too long, then a menu slot that does not exist
    let answers = "500\n1,000\n1.45\n6\n0\n0\n6\n4\n1\n";

    let config = CalculatorConfig::bank_compatible().with_rounding(BalanceRounding::Cents);
    let mut transcript = Vec::new();
    let quote = Session::new(config).run(Cursor::new(answers), &mut transcript)?;

    println!("{}", String::from_utf8_lossy(&transcript));
    println!("{}", quote.json());

    Ok(())
}
