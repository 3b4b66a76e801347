use serde_json::Value;
use std::io::{self, Read};

use ratio_analysis_core::analysis::AnalysisInput;
use ratio_analysis_core::dataset::{self, FinancialDataset};

/// Read a piped analysis request from stdin.
///
/// Accepts either a full request (`{"year": .., "dataset": ..}`) or a bare
/// dataset, which is analysed at its latest year. Returns `None` if stdin is
/// a TTY or empty.
pub fn read_stdin() -> Result<Option<AnalysisInput>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_request(&buffer)
}

fn parse_request(raw: &str) -> Result<Option<AnalysisInput>, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    if value.get("year").is_some() {
        let request: AnalysisInput = serde_json::from_value(value)?;
        if let Some(ref ds) = request.dataset {
            dataset::validate(ds)?;
        }
        return Ok(Some(request));
    }

    let ds: FinancialDataset = serde_json::from_value(value)?;
    dataset::validate(&ds)?;
    let year = ds.latest_year().ok_or("piped dataset contains no fiscal years")?;
    Ok(Some(AnalysisInput {
        dataset: Some(ds),
        year,
        previous_year: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_none() {
        assert!(parse_request("   \n").unwrap().is_none());
    }

    #[test]
    fn test_request_with_year() {
        let req = parse_request(r#"{"year": 2017, "previous_year": 2016}"#)
            .unwrap()
            .unwrap();
        assert_eq!(req.year, 2017);
        assert_eq!(req.comparison_year(), 2016);
        assert!(req.dataset.is_none());
    }

    #[test]
    fn test_bare_dataset_uses_latest_year() {
        let raw = r#"{"company": "X", "years": {"2019": {"equity": 1}, "2020": {"equity": 2}}}"#;
        let req = parse_request(raw).unwrap().unwrap();
        assert_eq!(req.year, 2020);
        assert_eq!(req.dataset.unwrap().company, "X");
    }

    #[test]
    fn test_negative_figures_rejected() {
        let raw = r#"{"company": "X", "years": {"2020": {"equity": -2}}}"#;
        assert!(parse_request(raw).is_err());
    }
}
