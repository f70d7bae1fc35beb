//! Budget arithmetic: runway and required cushion
//!
//! Both functions model the same household: a fixed monthly salary and a
//! monthly spend that grows by a constant rate. One asks how long existing
//! savings last, the other how much savings a planned horizon needs.

use shared::{ModelError, Result};

/// Number of whole months the cushion lasts before going into debt.
///
/// Each month the salary arrives, the (growing) spend is paid, and the rate
/// compounds. Counting stops the first month the balance cannot cover the
/// spend.
pub fn months_before_broke(capital: f64, salary: f64, spend: f64, increase: f64) -> Result<u32> {
    validate_household(salary, spend, increase)?;
    if !capital.is_finite() || capital < 0.0 {
        return Err(ModelError::InvalidArgument(format!(
            "capital must be a non-negative number, got {capital}"
        )));
    }
    // With no growth and salary covering the spend, the balance never shrinks.
    if increase == 0.0 && salary >= spend {
        return Err(ModelError::InvalidArgument(
            "spend never exceeds salary, the cushion lasts forever".to_string(),
        ));
    }

    let mut balance = capital + salary;
    let mut spend = spend;
    let mut months = 0u32;

    while balance >= spend {
        balance -= spend;
        balance += salary;
        spend += spend * increase;
        months += 1;
    }

    tracing::debug!(months, "runway computed");
    Ok(months)
}

/// Cushion needed to survive `months` months, rounded to the nearest whole
/// unit.
///
/// Each month contributes the shortfall between the (growing) spend and the
/// salary; months where the salary covers the spend contribute negatively,
/// matching a balance that would actually grow.
pub fn required_cushion(salary: f64, spend: f64, months: u32, increase: f64) -> Result<i64> {
    validate_household(salary, spend, increase)?;

    let mut cushion = 0.0;
    let mut spend = spend;

    for _ in 0..months {
        cushion += spend - salary;
        spend += spend * increase;
    }

    Ok(cushion.round() as i64)
}

fn validate_household(salary: f64, spend: f64, increase: f64) -> Result<()> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(ModelError::InvalidArgument(format!(
            "salary must be a non-negative number, got {salary}"
        )));
    }
    if !spend.is_finite() || spend <= 0.0 {
        return Err(ModelError::InvalidArgument(format!(
            "spend must be a positive number, got {spend}"
        )));
    }
    if !increase.is_finite() || increase < 0.0 {
        return Err(ModelError::InvalidArgument(format!(
            "increase must be a non-negative rate, got {increase}"
        )));
    }
    Ok(())
}
