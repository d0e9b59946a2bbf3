use anyhow::{Result, bail};

use crate::cli::PositionArgs;
use crate::report;
use crate::sim::calculate_yield_with;

use super::{Session, print_json};

/// Reject NaN and infinities; the calculator assumes finite inputs.
pub fn check_position(position: &PositionArgs) -> Result<()> {
    for (name, value) in [
        ("--base-yield", position.base_yield),
        ("--leverage", position.leverage),
        ("--borrow-rate", position.borrow_rate),
    ] {
        if !value.is_finite() {
            bail!("{name} must be a finite number, got {value}");
        }
    }
    Ok(())
}

pub fn run(session: &Session, position: &PositionArgs, json: bool) -> Result<()> {
    check_position(position)?;

    let result = calculate_yield_with(
        &session.config.assumptions,
        position.base_yield,
        position.leverage,
        position.borrow_rate,
        position.kind,
    );

    if json {
        print_json(&result)
    } else {
        report::print_yield(&result);
        Ok(())
    }
}
