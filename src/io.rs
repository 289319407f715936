use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::{Serialize, Serializer};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::utils::log_sum_exp;

#[derive(Parser, Debug)]
#[command(version, about = "Numerically stable log-sum-exp of log-space values", long_about = None)]
pub struct CliInputs {
    /// Log-space values. Read from --file or stdin when omitted.
    /// Pass `-inf` after `--`
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,

    /// File with whitespace separated values
    #[arg(long, conflicts_with = "values")]
    file: Option<PathBuf>,

    /// Print a JSON summary instead of the bare result
    #[arg(long)]
    pub json: bool,
}

impl CliInputs {
    pub fn read_cli() -> Self {
        CliInputs::parse()
    }

    pub fn read_values(&self) -> Result<Vec<f64>> {
        self.read_values_or(io::stdin().lock())
    }

    /// Values from the command line or --file, falling back to `fallback`.
    pub fn read_values_or<R: BufRead>(&self, fallback: R) -> Result<Vec<f64>> {
        if !self.values.is_empty() {
            return Ok(self.values.clone());
        }
        match &self.file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening {}", path.display()))?;
                parse_values(BufReader::new(file))
                    .with_context(|| format!("reading {}", path.display()))
            }
            None => parse_values(fallback).context("reading stdin"),
        }
    }
}

/// Parse whitespace separated floats, one or more per line.
pub fn parse_values<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|e| anyhow!("line {}: '{}' is not a number: {}", line_no + 1, token, e))?;
            values.push(value);
        }
    }
    Ok(values)
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    #[serde(serialize_with = "labelled_float")]
    pub max: f64,
    #[serde(serialize_with = "labelled_float")]
    pub log_sum_exp: f64,
}

// serde_json would write every non-finite float as null
fn labelled_float<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if *value > 0.0 {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

impl Summary {
    pub fn compute(values: &[f64]) -> Result<Self> {
        let log_sum_exp = log_sum_exp(values)?;
        let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        Ok(Self {
            count: values.len(),
            max,
            log_sum_exp,
        })
    }

    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            Ok(serde_json::to_string(self)?)
        } else {
            Ok(self.log_sum_exp.to_string())
        }
    }
}
