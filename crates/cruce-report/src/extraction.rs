//! Extraction quality summaries.
//!
//! Classifies every expected field of the five documents and scores each
//! document, so the capture UI can point at the photos worth retaking.
//! Text documents score by the fraction of fields that produced a value;
//! plate photos carry their own reader confidence and score by that alone.

use cruce_model::{
    DocumentExtraction, DocumentSet, FieldReport, FieldStatus, PlateReading, is_missing,
};

/// Reader confidence below this marks a plate field `low_confidence`.
pub const LOW_CONFIDENCE_CUTOFF: f64 = 0.7;

/// Summarizes extraction quality per document, in wire order.
pub fn extraction_summary(documents: &DocumentSet) -> Vec<DocumentExtraction> {
    let declaration = &documents.declaration;
    let manifest = &documents.manifest;
    let prefile = &documents.prefile;
    vec![
        text_document(
            "doda",
            "DODA",
            vec![
                text_field("fecha_emision", "Emission date", &declaration.emission_date),
                text_field("seccion_aduanera", "Customs section", &declaration.customs_section),
            ],
        ),
        text_document(
            "manifest",
            "E-Manifest",
            vec![
                text_field("placa_tracto", "Tractor plate", &manifest.tractor_plate),
                text_field("placa_remolque", "Trailer plate", &manifest.trailer_plate),
                text_field("nombre_operador", "Operator name", &manifest.operator_name),
                text_field("aduana_arribo", "Arrival office", &manifest.arrival_office),
                text_field("numero_entry", "Entry number", &manifest.entry_number),
                text_field("broker", "Broker", &manifest.broker),
                text_field(
                    "descripcion_mercancia",
                    "Merchandise description",
                    &manifest.description,
                ),
                numeric_field("cantidad", "Quantity", manifest.quantity),
                numeric_field("peso_monto", "Weight/amount", manifest.weight_amount),
            ],
        ),
        text_document(
            "prefile",
            "Prefile",
            vec![
                text_field("numero_entry", "Entry number", &prefile.entry_number),
                text_field("broker", "Broker", &prefile.broker),
                text_field(
                    "descripcion_mercancia",
                    "Merchandise description",
                    &prefile.description,
                ),
                numeric_field("cantidad", "Quantity", prefile.quantity),
                numeric_field("peso_monto", "Weight/amount", prefile.weight_amount),
            ],
        ),
        plate_document("tractor_plate", "Tractor plate photo", "Tractor plate", &documents.tractor_plate),
        plate_document("trailer_plate", "Trailer plate photo", "Trailer plate", &documents.trailer_plate),
    ]
}

/// Mean of the per-document scores, rounded to two decimals.
pub fn confidence_average(extractions: &[DocumentExtraction]) -> f64 {
    if extractions.is_empty() {
        return 0.0;
    }
    let total: f64 = extractions
        .iter()
        .map(|extraction| extraction.confidence_score)
        .sum();
    crate::round2(total / extractions.len() as f64)
}

fn text_field(name: &str, label: &str, value: &str) -> FieldReport {
    let status = if is_missing(value) {
        FieldStatus::NotFound
    } else {
        FieldStatus::Success
    };
    FieldReport {
        field_name: name.to_string(),
        field_label: label.to_string(),
        value: value.to_string(),
        status,
        confidence: None,
    }
}

fn numeric_field(name: &str, label: &str, value: f64) -> FieldReport {
    // Zero is the wire encoding for a quantity the extractor could not read.
    let status = if value == 0.0 {
        FieldStatus::NotFound
    } else {
        FieldStatus::Success
    };
    FieldReport {
        field_name: name.to_string(),
        field_label: label.to_string(),
        value: value.to_string(),
        status,
        confidence: None,
    }
}

fn plate_field(label: &str, reading: &PlateReading) -> FieldReport {
    let status = if is_missing(&reading.plate_number) {
        FieldStatus::NotFound
    } else if reading.confidence.is_some_and(|value| value < LOW_CONFIDENCE_CUTOFF) {
        FieldStatus::LowConfidence
    } else {
        FieldStatus::Success
    };
    FieldReport {
        field_name: "plate_number".to_string(),
        field_label: label.to_string(),
        value: reading.plate_number.clone(),
        status,
        confidence: reading.confidence,
    }
}

fn text_document(
    document_type: &str,
    document_name: &str,
    fields: Vec<FieldReport>,
) -> DocumentExtraction {
    let extracted = extracted_count(&fields);
    let total = fields.len();
    assemble(
        document_type,
        document_name,
        fields,
        extracted as f64 / total as f64,
    )
}

fn plate_document(
    document_type: &str,
    document_name: &str,
    field_label: &str,
    reading: &PlateReading,
) -> DocumentExtraction {
    let fields = vec![plate_field(field_label, reading)];
    assemble(
        document_type,
        document_name,
        fields,
        reading.confidence.unwrap_or(0.0),
    )
}

fn assemble(
    document_type: &str,
    document_name: &str,
    fields: Vec<FieldReport>,
    confidence_score: f64,
) -> DocumentExtraction {
    let total_fields = fields.len();
    let extracted_fields = extracted_count(&fields);
    DocumentExtraction {
        document_type: document_type.to_string(),
        document_name: document_name.to_string(),
        total_fields,
        extracted_fields,
        not_found_fields: total_fields - extracted_fields,
        confidence_score,
        fields,
    }
}

fn extracted_count(fields: &[FieldReport]) -> usize {
    fields
        .iter()
        .filter(|field| field.status != FieldStatus::NotFound)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::valid_documents;

    #[test]
    fn complete_documents_score_full_marks() {
        let extractions = extraction_summary(&valid_documents());
        assert_eq!(extractions.len(), 5);
        let types: Vec<&str> = extractions
            .iter()
            .map(|extraction| extraction.document_type.as_str())
            .collect();
        assert_eq!(types, vec!["doda", "manifest", "prefile", "tractor_plate", "trailer_plate"]);
        assert!(extractions.iter().all(DocumentExtraction::is_complete));
        assert_eq!(extractions[0].confidence_score, 1.0);
        assert_eq!(extractions[1].total_fields, 9);
        assert_eq!(extractions[2].total_fields, 5);
    }

    #[test]
    fn plate_documents_score_by_reader_confidence() {
        let extractions = extraction_summary(&valid_documents());
        assert_eq!(extractions[3].confidence_score, 0.95);
        assert_eq!(extractions[4].confidence_score, 0.93);
        assert_eq!(extractions[3].fields[0].confidence, Some(0.95));
    }

    #[test]
    fn missing_reader_confidence_scores_zero() {
        let mut documents = valid_documents();
        documents.tractor_plate.confidence = None;
        let extractions = extraction_summary(&documents);
        assert_eq!(extractions[3].confidence_score, 0.0);
        // The plate itself was still read, so the field is not missing.
        assert_eq!(extractions[3].fields[0].status, FieldStatus::Success);
    }

    #[test]
    fn low_reader_confidence_flags_the_field() {
        let mut documents = valid_documents();
        documents.tractor_plate.confidence = Some(0.4);
        let extractions = extraction_summary(&documents);
        assert_eq!(extractions[3].fields[0].status, FieldStatus::LowConfidence);
        assert_eq!(extractions[3].confidence_score, 0.4);
        // Low confidence is still extracted, not missing.
        assert!(extractions[3].is_complete());
    }

    #[test]
    fn sentinels_and_zeros_count_as_not_found() {
        let mut documents = valid_documents();
        documents.declaration.emission_date = "NO_ENCONTRADO".into();
        documents.manifest.quantity = 0.0;
        let extractions = extraction_summary(&documents);

        let doda = &extractions[0];
        assert_eq!(doda.not_found_fields, 1);
        assert_eq!(doda.confidence_score, 0.5);
        assert_eq!(doda.fields[0].status, FieldStatus::NotFound);

        let manifest = &extractions[1];
        assert_eq!(manifest.not_found_fields, 1);
        assert_eq!(manifest.extracted_fields, 8);
        let quantity = manifest
            .fields
            .iter()
            .find(|field| field.field_name == "cantidad")
            .unwrap();
        assert_eq!(quantity.status, FieldStatus::NotFound);
    }

    #[test]
    fn unlegible_plate_is_not_found() {
        let mut documents = valid_documents();
        documents.trailer_plate.plate_number = "NO_LEGIBLE".into();
        documents.trailer_plate.confidence = Some(0.2);
        let extractions = extraction_summary(&documents);
        assert_eq!(extractions[4].fields[0].status, FieldStatus::NotFound);
        assert!(!extractions[4].is_complete());
        // Score still follows the reader confidence, however poor.
        assert_eq!(extractions[4].confidence_score, 0.2);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let extractions = extraction_summary(&valid_documents());
        // (1.0 + 1.0 + 1.0 + 0.95 + 0.93) / 5 = 0.976 -> 0.98
        assert_eq!(confidence_average(&extractions), 0.98);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(confidence_average(&[]), 0.0);
    }
}
