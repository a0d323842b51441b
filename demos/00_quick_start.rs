/// quick start - price a deposit without any prompting
use term_deposit_rs::{calculate_final_balance, Compounding, Decimal, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $10,000 at 1.70% for 3 years, compounded quarterly
    let balance = calculate_final_balance(
        Money::from_major(10_000),
        Rate::from_percent(Decimal::new(170, 2)),
        Decimal::from(3),
        Compounding::Periodic(4),
    )?;
    println!("quarterly: {}", balance);

    // same deposit with interest paid at maturity
    let balance = calculate_final_balance(
        Money::from_major(10_000),
        Rate::from_percent(Decimal::new(170, 2)),
        Decimal::from(3),
        Compounding::AtMaturity,
    )?;
    println!("at maturity: {}", balance);

    Ok(())
}
