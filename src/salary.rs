use anyhow::{Context, Result, ensure};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Totals computed from one salary file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryReport {
    pub total: f64,
    /// Total divided by the number of non-empty lines.
    pub average: f64,
}

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"-?\d+\.?\d*").expect("pattern is a valid literal"))
}

/// Sum every number appearing in the given text.
///
/// Numbers are whatever matches `-?\d+\.?\d*`: integers, decimals and
/// negative values, anywhere in the surrounding prose.
pub fn sum_numbers(text: &str) -> f64 {
    number_pattern()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .sum()
}

/// Compute total and average salary from a text file with one entry per line.
///
/// Blank lines are ignored. A file with no entries at all is an error, as is
/// a missing or unreadable file.
pub fn total_salary(path: impl AsRef<Path>) -> Result<SalaryReport> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("can't read salary file {}", path.display()))?;

    let entries: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    ensure!(
        !entries.is_empty(),
        "salary file {} contains no entries",
        path.display()
    );

    let total: f64 = entries.iter().map(|line| sum_numbers(line)).sum();
    Ok(SalaryReport {
        total,
        average: total / entries.len() as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sum_numbers_extracts_from_prose() {
        assert_eq!(sum_numbers("Alice earns 2000 and a 500 bonus"), 2500.0);
    }

    #[test]
    fn test_sum_numbers_handles_decimals_and_negatives() {
        assert_eq!(sum_numbers("adjustment -100.5 on top of 200"), 99.5);
    }

    #[test]
    fn test_sum_numbers_empty_text_is_zero() {
        assert_eq!(sum_numbers("no digits here"), 0.0);
    }

    #[test]
    fn test_total_salary_averages_over_non_empty_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Alice 3000\n\nBob 2000\n   \nCarol 1000\n").unwrap();

        let report = total_salary(file.path()).unwrap();
        assert_eq!(report.total, 6000.0);
        assert_eq!(report.average, 2000.0);
    }

    #[test]
    fn test_total_salary_empty_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = total_salary(file.path()).unwrap_err();
        assert!(err.to_string().contains("no entries"));
    }

    #[test]
    fn test_total_salary_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = total_salary(dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("can't read salary file"));
    }
}
