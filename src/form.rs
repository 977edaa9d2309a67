//! Terminal rendition of the customer form and the result panel.
//!
//! Each prompt enforces its widget's constraints: numeric fields carry a range and
//! a default, choice fields accept a label (case-insensitive) or a 1-based index.
//! An empty answer takes the default. End of input ends the session.

use crate::config::OutputFormat;
use crate::error::ChurnError;
use crate::features::{
    Gender, Geography, RawCustomerInput, AGE_RANGE, CREDIT_SCORE_RANGE, MONEY_RANGE,
    TENURE_RANGE,
};
use crate::logging::{PredictionLine, StructuredLogger};
use crate::risk::{Assessment, RiskLabel};
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

const BAR_CELLS: usize = 20;

pub struct Form<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Form<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "🎬 OTT Customer Churn Prediction")?;
        writeln!(
            self.output,
            "Provide the customer details below to get churn probability predictions."
        )?;
        writeln!(self.output, "---")
    }

    /// Prompt for every field. `None` when input ends before the form is complete.
    pub fn collect(&mut self) -> io::Result<Option<RawCustomerInput>> {
        writeln!(self.output, "📋 Customer Information")?;

        let Some(credit_score) = self.ask_int("📈 Credit Score", &CREDIT_SCORE_RANGE, 650)? else {
            return Ok(None);
        };
        let Some(tenure) = self.ask_int("📆 Tenure (months)", &TENURE_RANGE, 0)? else {
            return Ok(None);
        };
        let Some(num_of_products) =
            self.ask_choice("🛍️ Number of Products", &[("1", 1u32), ("2", 2), ("3", 3), ("4", 4)], 0)?
        else {
            return Ok(None);
        };
        let Some(age) = self.ask_int("🎂 Age", &AGE_RANGE, 30)? else {
            return Ok(None);
        };
        let Some(balance) = self.ask_money("💰 Account Balance")? else {
            return Ok(None);
        };
        let Some(estimated_salary) = self.ask_money("📊 Estimated Salary")? else {
            return Ok(None);
        };
        let geographies = Geography::ALL.map(|g| (g.as_str(), g));
        let Some(geography) = self.ask_choice("🌍 Country", &geographies, 0)? else {
            return Ok(None);
        };
        let genders = Gender::ALL.map(|g| (g.as_str(), g));
        let Some(gender) = self.ask_choice("⚧️ Gender", &genders, 0)? else {
            return Ok(None);
        };
        let yes_no = [("Yes", true), ("No", false)];
        let Some(has_cr_card) = self.ask_choice("💳 Has Credit Card?", &yes_no, 0)? else {
            return Ok(None);
        };
        let Some(is_active_member) = self.ask_choice("✅ Active Member?", &yes_no, 0)? else {
            return Ok(None);
        };

        Ok(Some(RawCustomerInput {
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
        }))
    }

    pub fn render(&mut self, assessment: &Assessment, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Json => {
                StructuredLogger::emit_json(&PredictionLine::from_assessment(assessment), &mut self.output)
            }
            OutputFormat::Text => {
                let marker = match assessment.label {
                    RiskLabel::High => "🔴",
                    RiskLabel::Low => "🟢",
                };
                writeln!(self.output, "---")?;
                writeln!(self.output, "📊 Prediction Result")?;
                writeln!(
                    self.output,
                    "{marker} {} - Probability: {}",
                    assessment.label, assessment.probability
                )?;
                writeln!(self.output, "{}", progress_bar(assessment.probability.whole_percent()))
            }
        }
    }

    /// Request-level failure shown to the user; the session continues.
    pub fn show_error(&mut self, err: &ChurnError) -> io::Result<()> {
        writeln!(self.output, "⚠️ Prediction failed: {err}")
    }

    /// `None` on end of input. Bytes that are not UTF-8 decode lossily and then
    /// fail to parse, so the field is asked again.
    fn read_answer(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn ask_int(
        &mut self,
        label: &str,
        range: &RangeInclusive<u32>,
        default: u32,
    ) -> io::Result<Option<u32>> {
        let prompt = format!("{label} [{}-{}] ({default})", range.start(), range.end());
        loop {
            let Some(answer) = self.read_answer(&prompt)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default));
            }
            match answer.parse::<u32>() {
                Ok(v) if range.contains(&v) => return Ok(Some(v)),
                _ => writeln!(
                    self.output,
                    "Enter a whole number between {} and {}.",
                    range.start(),
                    range.end()
                )?,
            }
        }
    }

    fn ask_money(&mut self, label: &str) -> io::Result<Option<f64>> {
        let prompt = format!("{label} [0-{}] (0.00)", MONEY_RANGE.end());
        loop {
            let Some(answer) = self.read_answer(&prompt)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(0.0));
            }
            match answer.parse::<f64>() {
                Ok(v) if v.is_finite() && MONEY_RANGE.contains(&v) => return Ok(Some(v)),
                _ => writeln!(
                    self.output,
                    "Enter an amount between 0 and {}.",
                    MONEY_RANGE.end()
                )?,
            }
        }
    }

    fn ask_choice<T: Copy>(
        &mut self,
        label: &str,
        options: &[(&str, T)],
        default: usize,
    ) -> io::Result<Option<T>> {
        let listed: Vec<String> = options
            .iter()
            .enumerate()
            .map(|(i, (name, _))| format!("{}) {name}", i + 1))
            .collect();
        let prompt = format!("{label} {} ({})", listed.join(" "), options[default].0);
        loop {
            let Some(answer) = self.read_answer(&prompt)? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(options[default].1));
            }
            if let Some((_, v)) = options.iter().find(|(name, _)| name.eq_ignore_ascii_case(&answer)) {
                return Ok(Some(*v));
            }
            if let Ok(i) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&i) {
                    return Ok(Some(options[i - 1].1));
                }
            }
            writeln!(self.output, "Choose one of: {}", listed.join(", "))?;
        }
    }
}

/// `[#####...............] 25%`
pub fn progress_bar(percent: u8) -> String {
    let percent = percent.min(100) as usize;
    let filled = percent * BAR_CELLS / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        ".".repeat(BAR_CELLS - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn form(input: &str) -> Form<Cursor<Vec<u8>>, Vec<u8>> {
        Form::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn empty_answers_take_widget_defaults() {
        let mut f = form("\n\n\n\n\n\n\n\n\n\n");
        let raw = f.collect().unwrap().unwrap();
        assert_eq!(raw.credit_score, 650);
        assert_eq!(raw.age, 30);
        assert_eq!(raw.tenure, 0);
        assert_eq!(raw.num_of_products, 1);
        assert_eq!(raw.balance, 0.0);
        assert_eq!(raw.geography, Geography::France);
        assert_eq!(raw.gender, Gender::Male);
        assert!(raw.has_cr_card);
        assert!(raw.is_active_member);
    }

    #[test]
    fn out_of_range_answers_are_reprompted() {
        // credit score 900 rejected, then 700; choices by label and by index
        let mut f = form("900\n700\n5\n2\n45\n1000\n250.5\ngermany\n2\nNo\n1\n");
        let raw = f.collect().unwrap().unwrap();
        assert_eq!(raw.credit_score, 700);
        assert_eq!(raw.tenure, 5);
        assert_eq!(raw.num_of_products, 2);
        assert_eq!(raw.age, 45);
        assert_eq!(raw.balance, 1000.0);
        assert_eq!(raw.estimated_salary, 250.5);
        assert_eq!(raw.geography, Geography::Germany);
        assert_eq!(raw.gender, Gender::Female);
        assert!(!raw.has_cr_card);
        assert!(raw.is_active_member);

        let out = String::from_utf8(f.into_output()).unwrap();
        assert!(out.contains("Enter a whole number between 300 and 850."));
    }

    #[test]
    fn non_utf8_answer_is_reprompted() {
        let mut input = b"\xff\xfe\n".to_vec();
        input.extend_from_slice(b"\n\n\n\n\n\n\n\n\n\n");
        let mut f = Form::new(Cursor::new(input), Vec::new());
        let raw = f.collect().unwrap().unwrap();
        assert_eq!(raw.credit_score, 650);

        let out = String::from_utf8(f.into_output()).unwrap();
        assert!(out.contains("Enter a whole number between 300 and 850."));
    }

    #[test]
    fn end_of_input_ends_the_form() {
        let mut f = form("650\n");
        assert!(f.collect().unwrap().is_none());
    }

    #[test]
    fn progress_bar_fills_by_percent() {
        assert_eq!(progress_bar(0), "[....................] 0%");
        assert_eq!(progress_bar(50), "[##########..........] 50%");
        assert_eq!(progress_bar(100), "[####################] 100%");
    }
}
