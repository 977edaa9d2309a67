//! Feature builder: raw attributes → derived attributes → one-hot flags → [`FeatureVector`].

use super::{Feature, FeatureVector, Gender, Geography, RawCustomerInput, FEATURE_COUNT};
use crate::error::ChurnResult;
use serde::{Deserialize, Serialize};

/// Customers strictly older than this fall in the `Old` bucket.
const OLD_AGE_THRESHOLD: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBucket {
    Young,
    Old,
}

impl AgeBucket {
    pub fn from_age(age: u32) -> Self {
        if age > OLD_AGE_THRESHOLD {
            AgeBucket::Old
        } else {
            AgeBucket::Young
        }
    }
}

/// Every attribute computed from one input, including those the model never sees
/// (`Tenure`, `HasCrCard`, `EstimatedSalary` and the baseline flags).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedAttributes {
    pub tenure: u32,
    pub has_cr_card: bool,
    pub estimated_salary: f64,
    pub loyalty: f64,
    pub age_bucket: AgeBucket,
    pub geography_france: bool,
    pub geography_germany: bool,
    pub geography_spain: bool,
    pub gender_male: bool,
    pub gender_female: bool,
    pub age_young: bool,
    pub age_old: bool,
}

/// Age per month of tenure; zero tenure yields 0 rather than a division error.
pub(crate) fn loyalty(age: u32, tenure: u32) -> f64 {
    if tenure == 0 {
        0.0
    } else {
        f64::from(age) / f64::from(tenure)
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureBuilder;

impl FeatureBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn derive(&self, raw: &RawCustomerInput) -> DerivedAttributes {
        let age_bucket = AgeBucket::from_age(raw.age);
        DerivedAttributes {
            tenure: raw.tenure,
            has_cr_card: raw.has_cr_card,
            estimated_salary: raw.estimated_salary,
            loyalty: loyalty(raw.age, raw.tenure),
            age_bucket,
            geography_france: raw.geography == Geography::France,
            geography_germany: raw.geography == Geography::Germany,
            geography_spain: raw.geography == Geography::Spain,
            gender_male: raw.gender == Gender::Male,
            gender_female: raw.gender == Gender::Female,
            age_young: age_bucket == AgeBucket::Young,
            age_old: age_bucket == AgeBucket::Old,
        }
    }

    /// Validate `raw` and assemble the model's 10 slots by name.
    pub fn build(&self, raw: &RawCustomerInput) -> ChurnResult<FeatureVector> {
        raw.validate()?;
        let derived = self.derive(raw);

        let mut values = [0.0f64; FEATURE_COUNT];
        for feature in Feature::ALL {
            values[feature.index()] = match feature {
                Feature::CreditScore => f64::from(raw.credit_score),
                Feature::Age => f64::from(raw.age),
                Feature::Balance => raw.balance,
                Feature::NumOfProducts => f64::from(raw.num_of_products),
                Feature::IsActiveMember => flag(raw.is_active_member),
                Feature::Loyalty => derived.loyalty,
                Feature::GeographyGermany => flag(derived.geography_germany),
                Feature::GeographySpain => flag(derived.geography_spain),
                Feature::GenderMale => flag(derived.gender_male),
                Feature::AgeYoung => flag(derived.age_young),
            };
        }
        Ok(FeatureVector::from_values(values))
    }
}
