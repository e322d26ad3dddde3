//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, WordNetArgs};
use crate::error::Result;
use crate::wordnet::WordNetStats;

/// Result structure for distance queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub noun_a: String,
    pub noun_b: String,
    pub distance: i64,
}

/// Result structure for common ancestor queries.
#[derive(Debug, Serialize, Deserialize)]
pub struct SapResult {
    pub noun_a: String,
    pub noun_b: String,
    pub distance: i64,
    pub ancestor: String,
}

/// Result structure for noun membership.
#[derive(Debug, Serialize, Deserialize)]
pub struct IsNounResult {
    pub word: String,
    pub is_noun: bool,
}

/// Result structure for noun listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct NounListResult {
    pub total: usize,
    pub nouns: Vec<String>,
}

/// Distance sum of one noun within an outcast list.
#[derive(Debug, Serialize, Deserialize)]
pub struct NounScore {
    pub noun: String,
    pub total_distance: i64,
}

/// Outcast of one noun list file.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutcastResult {
    pub file: String,
    pub outcast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<Vec<NounScore>>,
}

/// Outcasts of every requested file.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutcastReport {
    pub results: Vec<OutcastResult>,
    pub duration_ms: u64,
}

/// Human-readable rendering of a result.
///
/// The default prints each top-level field as `key: value`.
pub trait HumanOutput: Serialize {
    fn human_lines(&self) -> Result<Vec<String>> {
        let value = serde_json::to_value(self)?;
        Ok(match value {
            serde_json::Value::Object(obj) => obj
                .iter()
                .map(|(key, val)| format!("{key}: {}", format_value(val)))
                .collect(),
            other => vec![format_value(&other)],
        })
    }
}

impl HumanOutput for DistanceResult {
    fn human_lines(&self) -> Result<Vec<String>> {
        Ok(vec![format!("distance = {}", self.distance)])
    }
}

impl HumanOutput for SapResult {
    fn human_lines(&self) -> Result<Vec<String>> {
        Ok(vec![
            format!("distance = {}", self.distance),
            format!("ancestor = {}", self.ancestor),
        ])
    }
}

impl HumanOutput for IsNounResult {
    fn human_lines(&self) -> Result<Vec<String>> {
        Ok(vec![self.is_noun.to_string()])
    }
}

impl HumanOutput for NounListResult {
    fn human_lines(&self) -> Result<Vec<String>> {
        Ok(self.nouns.clone())
    }
}

impl HumanOutput for OutcastReport {
    fn human_lines(&self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        for result in &self.results {
            lines.push(format!(
                "{}: {}",
                result.file,
                result.outcast.as_deref().unwrap_or("-")
            ));
            for score in result.scores.iter().flatten() {
                lines.push(format!("  {:<24} {}", score.noun, score.total_distance));
            }
        }
        Ok(lines)
    }
}

impl HumanOutput for WordNetStats {}

/// Output a result in the specified format.
pub fn output_result<T: HumanOutput>(message: &str, result: &T, args: &WordNetArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &WordNetArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    for line in result.human_lines()? {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordNetArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => {
            let formatted_fields = obj
                .iter()
                .map(|(key, val)| format!("{key}={}", format_value(val)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{formatted_fields}}}")
        }
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sap::CacheStats;

    #[test]
    fn test_outcast_report_lines() {
        let report = OutcastReport {
            results: vec![
                OutcastResult {
                    file: "outcast5.txt".to_string(),
                    outcast: Some("table".to_string()),
                    scores: None,
                },
                OutcastResult {
                    file: "empty.txt".to_string(),
                    outcast: None,
                    scores: None,
                },
            ],
            duration_ms: 3,
        };

        assert_eq!(
            report.human_lines().unwrap(),
            vec!["outcast5.txt: table".to_string(), "empty.txt: -".to_string()]
        );
    }

    #[test]
    fn test_generic_lines() {
        let stats = WordNetStats {
            synsets: 2,
            nouns: 3,
            hypernym_edges: 1,
            root: 0,
            root_label: "entity".to_string(),
            cache: CacheStats::default(),
        };

        let lines = stats.human_lines().unwrap();
        assert!(lines.contains(&"root_label: entity".to_string()));
        assert!(lines.contains(&"cache: {entries=0, hits=0, misses=0}".to_string()));
    }

    #[test]
    fn test_scores_skipped_in_json() {
        let result = OutcastResult {
            file: "a.txt".to_string(),
            outcast: Some("b".to_string()),
            scores: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"file":"a.txt","outcast":"b"}"#);
    }
}
