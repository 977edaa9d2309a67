//! Raw customer attributes as entered on the form, with their declared domains.

use crate::error::{ChurnError, ChurnResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const CREDIT_SCORE_RANGE: RangeInclusive<u32> = 300..=850;
pub const AGE_RANGE: RangeInclusive<u32> = 18..=100;
pub const TENURE_RANGE: RangeInclusive<u32> = 0..=48;
pub const NUM_OF_PRODUCTS_RANGE: RangeInclusive<u32> = 1..=4;
/// Shared bound for `Balance` and `EstimatedSalary`.
pub const MONEY_RANGE: RangeInclusive<f64> = 0.0..=9e9;

/// Customer country. France is the baseline category (no one-hot column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Geography {
    France,
    Germany,
    Spain,
}

impl Geography {
    pub const ALL: [Geography; 3] = [Geography::France, Geography::Germany, Geography::Spain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Geography::France => "France",
            Geography::Germany => "Germany",
            Geography::Spain => "Spain",
        }
    }
}

impl FromStr for Geography {
    type Err = ChurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Geography::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ChurnError::invalid("Geography", format!("unknown country {s:?}")))
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer gender. Female is the baseline category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = ChurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ChurnError::invalid("Gender", format!("unknown gender {s:?}")))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request's worth of customer attributes. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCustomerInput {
    pub credit_score: u32,
    pub age: u32,
    /// Months
    pub tenure: u32,
    pub balance: f64,
    pub num_of_products: u32,
    pub has_cr_card: bool,
    pub is_active_member: bool,
    pub estimated_salary: f64,
    pub geography: Geography,
    pub gender: Gender,
}

impl RawCustomerInput {
    /// Check every field against its declared domain; the error names the first offender.
    pub fn validate(&self) -> ChurnResult<()> {
        check_int("CreditScore", self.credit_score, &CREDIT_SCORE_RANGE)?;
        check_int("Age", self.age, &AGE_RANGE)?;
        check_int("Tenure", self.tenure, &TENURE_RANGE)?;
        check_money("Balance", self.balance)?;
        check_int("NumOfProducts", self.num_of_products, &NUM_OF_PRODUCTS_RANGE)?;
        check_money("EstimatedSalary", self.estimated_salary)?;
        Ok(())
    }
}

fn check_int(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> ChurnResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ChurnError::invalid(
            field,
            format!("{value} outside [{}, {}]", range.start(), range.end()),
        ))
    }
}

fn check_money(field: &'static str, value: f64) -> ChurnResult<()> {
    if !value.is_finite() {
        return Err(ChurnError::invalid(field, "must be a finite number"));
    }
    if !MONEY_RANGE.contains(&value) {
        return Err(ChurnError::invalid(
            field,
            format!("{value} outside [0, {}]", MONEY_RANGE.end()),
        ));
    }
    Ok(())
}
