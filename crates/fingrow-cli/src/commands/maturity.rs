use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use fingrow_core::rate_math::{annuity_maturity, simple_interest_maturity};
use fingrow_core::{round_money, with_metadata, Money, Rate};

#[derive(Debug, Clone, Copy, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityKind {
    /// One upfront deposit, simple interest
    LumpSum,
    /// Equal monthly contributions, annuity accrual
    Installment,
}

/// Arguments for a direct maturity projection
#[derive(Args)]
pub struct MaturityArgs {
    /// Funding shape
    #[arg(long, value_enum)]
    pub kind: MaturityKind,

    /// Principal for lump-sum, monthly contribution for installment
    #[arg(long)]
    pub amount: Decimal,

    /// Annual rate in percent (3.5 = 3.5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Term in months
    #[arg(long)]
    pub months: u32,
}

#[derive(Debug, Serialize)]
struct MaturityProjection {
    kind: MaturityKind,
    principal: Money,
    rate: Rate,
    months: u32,
    maturity_amount: Money,
    expected_return: Money,
}

pub fn run_maturity(args: MaturityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    if args.amount < Decimal::ZERO {
        return Err("--amount must be >= 0".into());
    }

    let (principal, maturity) = match args.kind {
        MaturityKind::LumpSum => (
            args.amount,
            simple_interest_maturity(args.amount, args.rate, args.months)?,
        ),
        MaturityKind::Installment => {
            let maturity = annuity_maturity(args.amount, args.rate, args.months)?;
            let paid_in = args
                .amount
                .checked_mul(Decimal::from(args.months))
                .ok_or("--amount times --months is out of range")?;
            (paid_in, maturity)
        }
    };

    let projection = MaturityProjection {
        kind: args.kind,
        principal: round_money(principal),
        rate: args.rate,
        months: args.months,
        maturity_amount: round_money(maturity),
        expected_return: round_money(maturity - principal),
    };

    let methodology = match args.kind {
        MaturityKind::LumpSum => "Simple interest: P * (1 + rate/100 * months/12)",
        MaturityKind::Installment => {
            "Installment annuity with end-of-term crediting: M * ((1+r)^n - 1) / r * (1+r)"
        }
    };
    let mut warnings = Vec::new();
    if args.rate <= Decimal::ZERO {
        warnings.push("Non-positive rate: no interest accrues".to_string());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let output = with_metadata(
        methodology,
        &serde_json::json!({
            "amount": args.amount.to_string(),
            "rate_pct": args.rate.to_string(),
            "months": args.months,
        }),
        warnings,
        elapsed,
        projection,
    );
    Ok(serde_json::to_value(output)?)
}
