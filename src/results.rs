use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One record of the contest's submitted-solutions listing. `tag` and the
/// score fields are null until the service has processed the submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(rename = "problemId")]
    pub problem_id: u32,
    pub seed: i64,
    #[serde(default)]
    pub tag: Option<String>,
    pub solution: String,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(rename = "powerScore", default)]
    pub power_score: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Reads a results log, a JSON array of submission records.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ResultRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read results log: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse results log: {}", path.display()))
}

/// Oldest first, so the most recent submission prints last.
pub fn sort_by_created_at(records: &mut [ResultRecord]) {
    records.sort_by_key(|r| r.created_at);
}

/// Renders one record in the results log's block format, with the derived
/// Day and Time lines.
pub fn render(record: &ResultRecord) -> String {
    let mut out = String::new();
    let timestamp = record.created_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    let _ = writeln!(out, "Score: {}", display_opt(record.score));
    let _ = writeln!(out, "Tag: {}", record.tag.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "Solution: {}", record.solution);
    let _ = writeln!(out, "Powerscore: {}", display_opt(record.power_score));
    let _ = writeln!(out, "Seed: {}", record.seed);
    let _ = writeln!(out, "Problem: {}", record.problem_id);
    let _ = writeln!(out, "Timestamp: {}", timestamp);
    let _ = writeln!(out, "Day: {}", record.created_at.format("%d"));
    let _ = write!(out, "Time: {}", record.created_at.format("%H:%M:%S"));
    out
}

fn display_opt(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"problemId": 3, "seed": 0, "tag": "day1-mc", "solution": "iiiaal",
         "score": 3345, "powerScore": 12, "createdAt": "2015-08-08T12:34:56.000Z"},
        {"problemId": 0, "seed": 17, "tag": null, "solution": "pppk",
         "score": null, "powerScore": null, "createdAt": "2015-08-07T23:01:02.000Z"}
    ]"#;

    #[test]
    fn parses_the_listing_with_null_fields() {
        let records: Vec<ResultRecord> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].problem_id, 3);
        assert_eq!(records[0].score, Some(3345));
        assert_eq!(records[1].tag, None);
        assert_eq!(records[1].score, None);
    }

    #[test]
    fn sorts_oldest_first() {
        let mut records: Vec<ResultRecord> = serde_json::from_str(SAMPLE).unwrap();
        sort_by_created_at(&mut records);
        assert_eq!(records[0].seed, 17);
        assert_eq!(records[1].seed, 0);
    }

    #[test]
    fn renders_the_block_format() {
        let records: Vec<ResultRecord> = serde_json::from_str(SAMPLE).unwrap();
        let block = render(&records[0]);
        assert_eq!(
            block,
            "Score: 3345\n\
             Tag: day1-mc\n\
             Solution: iiiaal\n\
             Powerscore: 12\n\
             Seed: 0\n\
             Problem: 3\n\
             Timestamp: 2015-08-08T12:34:56.000Z\n\
             Day: 08\n\
             Time: 12:34:56"
        );
    }

    #[test]
    fn renders_unscored_records_with_placeholders() {
        let records: Vec<ResultRecord> = serde_json::from_str(SAMPLE).unwrap();
        let block = render(&records[1]);
        assert!(block.starts_with("Score: -\nTag: -\n"));
    }
}
