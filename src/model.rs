//! Records produced by the extraction core and the batch layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Educational level. A materialized record always has one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Initial (pre-school)
    Inicial,
    /// Primary
    Primaria,
    /// Secondary
    Secundaria,
}

impl Level {
    /// Levels in detection priority order.
    pub const PRIORITY: [Level; 3] = [Level::Inicial, Level::Primaria, Level::Secundaria];

    /// Uppercase label as printed on the acta and used as archive folder name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Inicial => "INICIAL",
            Level::Primaria => "PRIMARIA",
            Level::Secundaria => "SECUNDARIA",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured metadata of one acta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActaMetadata {
    /// Filename the document was received under
    pub original_filename: String,
    /// Four-digit academic year
    pub year: String,
    /// Seven-digit modular code
    pub modular_code: String,
    /// Annex number, always "0"
    pub annex: String,
    /// Sanitized institution name (at most 50 characters)
    pub institution_name: String,
    /// Educational level
    pub level: Level,
    /// Grade and section label, e.g. "5to B" or "3a U"
    pub grade_section: String,
    /// Recovery (make-up) evaluation
    pub is_recovery: bool,
    /// Canonical filename, attached after derivation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_filename: Option<String>,
}

/// Outcome of processing one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProcessResult {
    /// The file was parsed and archived.
    Success {
        /// Input filename
        file: String,
        /// Extracted metadata
        metadata: ActaMetadata,
        /// Derived canonical filename
        new_filename: String,
        /// Destination the file was written to
        destination: PathBuf,
    },
    /// The file could not be processed.
    Error {
        /// Input filename
        file: String,
        /// Human-readable reason
        message: String,
    },
}

impl ProcessResult {
    /// Input filename.
    pub fn file(&self) -> &str {
        match self {
            ProcessResult::Success { file, .. } | ProcessResult::Error { file, .. } => file,
        }
    }

    /// Whether the file was archived.
    pub fn is_success(&self) -> bool {
        matches!(self, ProcessResult::Success { .. })
    }
}

/// Ordered results of a batch with running counts.
///
/// Results can only be added through [`BatchResult::push`], which keeps the
/// counts equal to the sizes of the success/error partition. Deserializing
/// reads only the results and recounts them; stored counts are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredBatch")]
pub struct BatchResult {
    results: Vec<ProcessResult>,
    total: usize,
    succeeded: usize,
    failed: usize,
}

impl BatchResult {
    /// Create an empty batch result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one result and update the counts.
    pub fn push(&mut self, result: ProcessResult) {
        if result.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.total += 1;
        self.results.push(result);
    }

    /// Results in input order.
    pub fn results(&self) -> &[ProcessResult] {
        &self.results
    }

    /// Number of processed files.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of archived files.
    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    /// Number of failed files.
    pub fn failed(&self) -> usize {
        self.failed
    }
}

/// Serialized form of a batch as read back; counts are derived, not trusted.
#[derive(Deserialize)]
struct StoredBatch {
    results: Vec<ProcessResult>,
}

impl From<StoredBatch> for BatchResult {
    fn from(stored: StoredBatch) -> Self {
        stored.results.into_iter().collect()
    }
}

impl FromIterator<ProcessResult> for BatchResult {
    fn from_iter<I: IntoIterator<Item = ProcessResult>>(iter: I) -> Self {
        let mut batch = BatchResult::new();
        for result in iter {
            batch.push(result);
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(file: &str) -> ProcessResult {
        ProcessResult::Error {
            file: file.to_string(),
            message: "Level not detected".to_string(),
        }
    }

    fn success(file: &str) -> ProcessResult {
        ProcessResult::Success {
            file: file.to_string(),
            metadata: ActaMetadata {
                original_filename: file.to_string(),
                year: "2024".to_string(),
                modular_code: "1154814".to_string(),
                annex: "0".to_string(),
                institution_name: "71009".to_string(),
                level: Level::Primaria,
                grade_section: "1ro U".to_string(),
                is_recovery: false,
                new_filename: None,
            },
            new_filename: "x.pdf".to_string(),
            destination: PathBuf::from("root/2024/PRIMARIA/x.pdf"),
        }
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(Level::Inicial.to_string(), "INICIAL");
        assert_eq!(Level::Secundaria.as_str(), "SECUNDARIA");
        assert_eq!(serde_json::to_string(&Level::Primaria).unwrap(), "\"PRIMARIA\"");
    }

    #[test]
    fn test_batch_counts_match_partition() {
        let batch: BatchResult = vec![success("a.pdf"), error("b.pdf"), success("c.pdf")]
            .into_iter()
            .collect();
        assert_eq!(batch.total(), 3);
        assert_eq!(batch.succeeded(), 2);
        assert_eq!(batch.failed(), 1);
        assert_eq!(
            batch.results().iter().filter(|r| r.is_success()).count(),
            batch.succeeded()
        );
        assert_eq!(batch.results()[1].file(), "b.pdf");
    }

    #[test]
    fn test_process_result_status_tag() {
        let json = serde_json::to_value(error("b.pdf")).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Level not detected");

        let json = serde_json::to_value(success("a.pdf")).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["metadata"]["level"], "PRIMARIA");
        assert!(json["metadata"].get("new_filename").is_none());
    }

    #[test]
    fn test_deserialize_recounts_results() {
        let json = serde_json::json!({
            "results": [
                serde_json::to_value(success("a.pdf")).unwrap(),
                serde_json::to_value(error("b.pdf")).unwrap(),
            ],
            "total": 10,
            "succeeded": 0,
            "failed": 7,
        });
        let batch: BatchResult = serde_json::from_value(json).unwrap();
        assert_eq!(batch.total(), 2);
        assert_eq!(batch.succeeded(), 1);
        assert_eq!(batch.failed(), 1);
    }

    #[test]
    fn test_serialized_batch_reads_back_equal() {
        let batch: BatchResult = vec![success("a.pdf"), error("b.pdf")].into_iter().collect();
        let json = serde_json::to_string(&batch).unwrap();
        assert_eq!(serde_json::from_str::<BatchResult>(&json).unwrap(), batch);
    }
}
