use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Error};
use clap::Parser;

#[derive(Debug)]
pub enum Day1Error {
    NoDigits(String),
}

impl Display for Day1Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Day1Error::NoDigits(s) => {
                write!(f, "Given string({}) doesn't have any digits.", s)
            }
        }
    }
}

impl error::Error for Day1Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

pub fn read_calibration_values<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, Error> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({})", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut values = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let s = line.with_context(|| {
            format!(
                "Failed to read line #{} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if s.is_empty() {
            continue;
        }

        let value = calibration_value(&s).with_context(|| {
            format!(
                "Failed to extract the calibration value of line #{}({} line(s) processed).",
                ind + 1,
                values.len()
            )
        })?;
        values.push(value);
    }

    Ok(values)
}

pub fn calibration_value(s: &str) -> Result<u32, Day1Error> {
    let mut first_op = None;
    let mut last_op = None;
    for c in s.chars() {
        if let Some(digit) = c.to_digit(10) {
            // The first digit is captured exactly once, even when it's 0.
            if first_op.is_none() {
                first_op = Some(digit);
            } else {
                last_op = Some(digit);
            }
        }
    }

    first_op
        .ok_or(Day1Error::NoDigits(s.to_string()))
        .map(|first| first * 10 + last_op.unwrap_or(first))
}

#[test]
fn test_calibration_value_sample_lines() {
    assert_eq!(calibration_value("1abc2").unwrap(), 12);
    assert_eq!(calibration_value("pqr3stu8vwx").unwrap(), 38);
    assert_eq!(calibration_value("a1b2c3d4e5f").unwrap(), 15);
    assert_eq!(calibration_value("treb7uchet").unwrap(), 77);
}

#[test]
fn test_calibration_value_single_digit() {
    assert_eq!(calibration_value("a1b").unwrap(), 11);
    assert_eq!(calibration_value("7").unwrap(), 77);
}

#[test]
fn test_calibration_value_zero_first_digit() {
    assert_eq!(calibration_value("0a5").unwrap(), 5);
    assert_eq!(calibration_value("0").unwrap(), 0);
}

#[test]
fn test_calibration_value_no_digits() {
    assert!(calibration_value("abc").is_err());
}
