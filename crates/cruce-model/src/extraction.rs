//! Per-document extraction quality summaries.
//!
//! These describe how well the upstream extractor did, not whether the
//! documents are consistent; they ride along in the enriched report so the
//! capture UI can show which fields need a retake.

use serde::{Deserialize, Serialize};

/// Extraction status of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// A usable value was extracted.
    Success,
    /// Sentinel, blank, or zero where a quantity was expected.
    NotFound,
    /// Extracted, but the reader's confidence was below the cutoff.
    LowConfidence,
}

/// One extracted field with its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReport {
    /// Wire name, e.g. `fecha_emision`.
    pub field_name: String,
    /// Display label, e.g. "Emission date".
    pub field_label: String,
    pub value: String,
    pub status: FieldStatus,
    pub confidence: Option<f64>,
}

/// Extraction summary for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentExtraction {
    /// Wire document key, e.g. `tractor_plate`.
    pub document_type: String,
    /// Display name, e.g. "Tractor plate photo".
    pub document_name: String,
    pub total_fields: usize,
    pub extracted_fields: usize,
    pub not_found_fields: usize,
    /// Document confidence in `[0, 1]`.
    pub confidence_score: f64,
    pub fields: Vec<FieldReport>,
}

impl DocumentExtraction {
    /// True when every expected field produced a usable value.
    pub fn is_complete(&self) -> bool {
        self.not_found_fields == 0
    }
}
