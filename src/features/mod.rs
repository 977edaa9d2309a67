//! Customer attributes → fixed-order model input.

mod builder;
mod input;

pub use builder::{AgeBucket, DerivedAttributes, FeatureBuilder};
pub use input::{
    Gender, Geography, RawCustomerInput, AGE_RANGE, CREDIT_SCORE_RANGE, MONEY_RANGE,
    NUM_OF_PRODUCTS_RANGE, TENURE_RANGE,
};

use serde::{Deserialize, Serialize};

pub const FEATURE_COUNT: usize = 10;

/// Model input slots, declared in the column order the scaler and classifier were fit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    CreditScore,
    Age,
    Balance,
    NumOfProducts,
    IsActiveMember,
    Loyalty,
    GeographyGermany,
    GeographySpain,
    GenderMale,
    AgeYoung,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::CreditScore,
        Feature::Age,
        Feature::Balance,
        Feature::NumOfProducts,
        Feature::IsActiveMember,
        Feature::Loyalty,
        Feature::GeographyGermany,
        Feature::GeographySpain,
        Feature::GenderMale,
        Feature::AgeYoung,
    ];

    /// Training column name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Feature::CreditScore => "CreditScore",
            Feature::Age => "Age",
            Feature::Balance => "Balance",
            Feature::NumOfProducts => "NumOfProducts",
            Feature::IsActiveMember => "IsActiveMember",
            Feature::Loyalty => "Loyalty",
            Feature::GeographyGermany => "Geography_Germany",
            Feature::GeographySpain => "Geography_Spain",
            Feature::GenderMale => "Gender_Male",
            Feature::AgeYoung => "age_young",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = {
    let mut names = [""; FEATURE_COUNT];
    let mut i = 0;
    while i < FEATURE_COUNT {
        names[i] = Feature::ALL[i].name();
        i += 1;
    }
    names
};

/// Fixed-size feature vector for model input, one per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(column name, value)` pairs in model order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        Feature::ALL.into_iter().map(move |f| (f.name(), self.get(f)))
    }
}
