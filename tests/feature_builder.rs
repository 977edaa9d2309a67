use churn_predictor::features::{
    Feature, FeatureBuilder, Gender, Geography, RawCustomerInput, FEATURE_COUNT, FEATURE_NAMES,
};
use churn_predictor::ChurnError;
use proptest::prelude::*;

fn build(raw: &RawCustomerInput) -> Vec<f64> {
    FeatureBuilder::new().build(raw).unwrap().as_slice().to_vec()
}

fn arb_input() -> impl Strategy<Value = RawCustomerInput> {
    (
        300u32..=850,
        18u32..=100,
        0u32..=48,
        0.0f64..=9e9,
        1u32..=4,
        any::<bool>(),
        any::<bool>(),
        0.0f64..=9e9,
        prop::sample::select(Geography::ALL.to_vec()),
        prop::sample::select(Gender::ALL.to_vec()),
    )
        .prop_map(
            |(
                credit_score,
                age,
                tenure,
                balance,
                num_of_products,
                has_cr_card,
                is_active_member,
                estimated_salary,
                geography,
                gender,
            )| RawCustomerInput {
                credit_score,
                age,
                tenure,
                balance,
                num_of_products,
                has_cr_card,
                is_active_member,
                estimated_salary,
                geography,
                gender,
            },
        )
}

#[test]
fn scenario_zero_tenure_french_male() {
    let raw = RawCustomerInput {
        credit_score: 650,
        age: 30,
        tenure: 0,
        balance: 0.0,
        num_of_products: 1,
        has_cr_card: true,
        is_active_member: true,
        estimated_salary: 0.0,
        geography: Geography::France,
        gender: Gender::Male,
    };
    assert_eq!(build(&raw), vec![650.0, 30.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn scenario_german_female_over_forty() {
    for is_active_member in [false, true] {
        let raw = RawCustomerInput {
            credit_score: 700,
            age: 45,
            tenure: 5,
            balance: 1000.0,
            num_of_products: 2,
            has_cr_card: false,
            is_active_member,
            estimated_salary: 50_000.0,
            geography: Geography::Germany,
            gender: Gender::Female,
        };
        let active = if is_active_member { 1.0 } else { 0.0 };
        assert_eq!(
            build(&raw),
            vec![700.0, 45.0, 1000.0, 2.0, active, 9.0, 1.0, 0.0, 0.0, 0.0]
        );
    }
}

#[test]
fn column_names_follow_training_order() {
    let expected = [
        "CreditScore",
        "Age",
        "Balance",
        "NumOfProducts",
        "IsActiveMember",
        "Loyalty",
        "Geography_Germany",
        "Geography_Spain",
        "Gender_Male",
        "age_young",
    ];
    assert_eq!(FEATURE_NAMES, expected);
    let names: Vec<&str> = Feature::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names, FEATURE_NAMES);
    for (i, f) in Feature::ALL.iter().enumerate() {
        assert_eq!(f.index(), i);
    }
}

#[test]
fn out_of_domain_fields_are_named() {
    let ok = RawCustomerInput {
        credit_score: 650,
        age: 30,
        tenure: 3,
        balance: 10.0,
        num_of_products: 1,
        has_cr_card: true,
        is_active_member: false,
        estimated_salary: 10.0,
        geography: Geography::Spain,
        gender: Gender::Female,
    };
    let cases: Vec<(&str, RawCustomerInput)> = vec![
        ("CreditScore", RawCustomerInput { credit_score: 851, ..ok.clone() }),
        ("Age", RawCustomerInput { age: 17, ..ok.clone() }),
        ("Tenure", RawCustomerInput { tenure: 49, ..ok.clone() }),
        ("Balance", RawCustomerInput { balance: -1.0, ..ok.clone() }),
        ("Balance", RawCustomerInput { balance: f64::NAN, ..ok.clone() }),
        ("NumOfProducts", RawCustomerInput { num_of_products: 0, ..ok.clone() }),
        ("EstimatedSalary", RawCustomerInput { estimated_salary: 1e10, ..ok.clone() }),
    ];
    for (expected, raw) in cases {
        match FeatureBuilder::new().build(&raw) {
            Err(ChurnError::InvalidInput { field, .. }) => assert_eq!(field, expected),
            other => panic!("{expected}: expected InvalidInput, got {other:?}"),
        }
    }
    assert!(FeatureBuilder::new().build(&ok).is_ok());
}

#[test]
fn unknown_categories_are_rejected() {
    assert!(matches!(
        "Italy".parse::<Geography>(),
        Err(ChurnError::InvalidInput { field: "Geography", .. })
    ));
    assert!(matches!(
        "male".parse::<Gender>(),
        Err(ChurnError::InvalidInput { field: "Gender", .. })
    ));
    assert_eq!("Spain".parse::<Geography>().unwrap(), Geography::Spain);

    let json = r#"{"CreditScore":650,"Age":30,"Tenure":0,"Balance":0.0,"NumOfProducts":1,
        "HasCrCard":true,"IsActiveMember":true,"EstimatedSalary":0.0,
        "Geography":"Italy","Gender":"Male"}"#;
    assert!(serde_json::from_str::<RawCustomerInput>(json).is_err());
}

#[test]
fn input_reads_training_column_names() {
    let json = r#"{"CreditScore":700,"Age":45,"Tenure":5,"Balance":1000.0,"NumOfProducts":2,
        "HasCrCard":false,"IsActiveMember":true,"EstimatedSalary":0.0,
        "Geography":"Germany","Gender":"Female"}"#;
    let raw: RawCustomerInput = serde_json::from_str(json).unwrap();
    assert_eq!(raw.geography, Geography::Germany);
    assert_eq!(build(&raw)[Feature::Loyalty.index()], 9.0);
}

#[test]
fn derived_keeps_dropped_columns() {
    let raw = RawCustomerInput {
        credit_score: 500,
        age: 41,
        tenure: 10,
        balance: 0.0,
        num_of_products: 3,
        has_cr_card: true,
        is_active_member: true,
        estimated_salary: 1234.5,
        geography: Geography::France,
        gender: Gender::Female,
    };
    let d = FeatureBuilder::new().derive(&raw);
    assert_eq!(d.tenure, 10);
    assert!(d.has_cr_card);
    assert_eq!(d.estimated_salary, 1234.5);
    assert!(d.geography_france && !d.geography_germany && !d.geography_spain);
    assert!(d.gender_female && !d.gender_male);
    assert!(d.age_old && !d.age_young);
    assert_eq!(d.loyalty, 4.1);
}

proptest! {
    #[test]
    fn zero_tenure_never_divides(mut raw in arb_input()) {
        raw.tenure = 0;
        let v = build(&raw);
        prop_assert_eq!(v[Feature::Loyalty.index()], 0.0);
    }

    #[test]
    fn loyalty_is_finite(raw in arb_input()) {
        let v = build(&raw);
        prop_assert!(v[Feature::Loyalty.index()].is_finite());
    }

    #[test]
    fn age_young_flag_splits_at_forty(raw in arb_input()) {
        let v = build(&raw);
        let expected = if raw.age > 40 { 0.0 } else { 1.0 };
        prop_assert_eq!(v[Feature::AgeYoung.index()], expected);
    }

    #[test]
    fn one_hot_flags_match_category(raw in arb_input()) {
        let v = build(&raw);
        let (germany, spain) = match raw.geography {
            Geography::France => (0.0, 0.0),
            Geography::Germany => (1.0, 0.0),
            Geography::Spain => (0.0, 1.0),
        };
        prop_assert_eq!(v[Feature::GeographyGermany.index()], germany);
        prop_assert_eq!(v[Feature::GeographySpain.index()], spain);
        let male = if raw.gender == Gender::Male { 1.0 } else { 0.0 };
        prop_assert_eq!(v[Feature::GenderMale.index()], male);
    }

    #[test]
    fn vector_has_ten_slots_and_passes_raw_columns_through(raw in arb_input()) {
        let v = build(&raw);
        prop_assert_eq!(v.len(), FEATURE_COUNT);
        prop_assert_eq!(v[Feature::CreditScore.index()], f64::from(raw.credit_score));
        prop_assert_eq!(v[Feature::Age.index()], f64::from(raw.age));
        prop_assert_eq!(v[Feature::Balance.index()], raw.balance);
        prop_assert_eq!(v[Feature::NumOfProducts.index()], f64::from(raw.num_of_products));
    }

    #[test]
    fn build_is_deterministic(raw in arb_input()) {
        let a = build(&raw);
        let b = build(&raw);
        let a_bits: Vec<u64> = a.iter().map(|x| x.to_bits()).collect();
        let b_bits: Vec<u64> = b.iter().map(|x| x.to_bits()).collect();
        prop_assert_eq!(a_bits, b_bits);
    }
}
