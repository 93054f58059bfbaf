//! Plate cross-check (R2).
//!
//! Tractor and trailer are compared independently: the plate recorded in the
//! manifest against the plate read from the corresponding photo. A failure
//! on one side never suppresses the other.

use cruce_model::{Finding, FindingCategory, PlateReading, RuleId, Sentinel};

use super::{CrossingRule, RuleContext};
use crate::matcher;

/// R2: manifest plates must match the photographed plates.
pub struct PlateCrossCheck;

impl CrossingRule for PlateCrossCheck {
    fn id(&self) -> RuleId {
        RuleId::R2
    }

    fn name(&self) -> &'static str {
        "Plate Cross-Check"
    }

    fn description(&self) -> &'static str {
        "Compares manifest plates against the photographed plates"
    }

    fn recommendation(&self) -> &'static str {
        "Physically verify the unit's plates against the manifest."
    }

    fn evaluate(&self, context: &RuleContext<'_>) -> Vec<Finding> {
        let documents = context.documents;
        let pairs = [
            ("Tractor", &documents.manifest.tractor_plate, &documents.tractor_plate),
            ("Trailer", &documents.manifest.trailer_plate, &documents.trailer_plate),
        ];
        pairs
            .into_iter()
            .filter_map(|(label, manifest_plate, reading)| {
                self.check_plate(label, manifest_plate, reading, context.config.match_threshold)
            })
            .collect()
    }
}

impl PlateCrossCheck {
    fn check_plate(
        &self,
        label: &str,
        manifest_plate: &str,
        reading: &PlateReading,
        threshold: f64,
    ) -> Option<Finding> {
        if Sentinel::of(manifest_plate.trim()) == Some(Sentinel::NotFound) {
            return Some(Finding::error(
                self.id(),
                self.name(),
                format!("{label} plate not found in the manifest"),
                FindingCategory::MissingData,
            ));
        }
        let photo_plate = reading.plate_number.trim();
        if photo_plate.is_empty() || Sentinel::of(photo_plate) == Some(Sentinel::NotLegible) {
            return Some(Finding::error(
                self.id(),
                self.name(),
                format!("{label} plate not legible in the photo"),
                FindingCategory::MissingData,
            ));
        }
        if !matcher::matches(manifest_plate, photo_plate, threshold) {
            let confidence = reading.confidence.unwrap_or(0.0);
            return Some(Finding::error(
                self.id(),
                self.name(),
                format!(
                    "{label} plate does not match. Manifest: '{manifest_plate}', \
                     Photo: '{photo_plate}' (confidence: {:.0}%)",
                    confidence * 100.0
                ),
                FindingCategory::Mismatch,
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use cruce_model::{DocumentSet, ValidationConfig};

    use super::*;
    use crate::rules::fixtures;

    fn evaluate(documents: &DocumentSet) -> Vec<Finding> {
        let user = fixtures::operator();
        let config = ValidationConfig::default();
        let context = RuleContext {
            documents,
            user: &user,
            config: &config,
            as_of: fixtures::as_of(),
        };
        PlateCrossCheck.evaluate(&context)
    }

    #[test]
    fn matching_plates_pass() {
        assert!(evaluate(&fixtures::valid_documents()).is_empty());
    }

    #[test]
    fn manifest_sentinel_reports_missing() {
        let mut documents = fixtures::valid_documents();
        documents.manifest.tractor_plate = "NO_ENCONTRADO".into();
        let findings = evaluate(&documents);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, FindingCategory::MissingData);
        assert!(findings[0].message.contains("Tractor plate not found"));
    }

    #[test]
    fn unreadable_photo_reports_missing() {
        let mut documents = fixtures::valid_documents();
        documents.trailer_plate.plate_number = "NO_LEGIBLE".into();
        let findings = evaluate(&documents);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("Trailer plate not legible"));
    }

    #[test]
    fn empty_photo_reports_missing() {
        let mut documents = fixtures::valid_documents();
        documents.tractor_plate.plate_number = String::new();
        let findings = evaluate(&documents);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("not legible"));
    }

    #[test]
    fn mismatch_carries_both_values_and_confidence() {
        let mut documents = fixtures::valid_documents();
        documents.tractor_plate.plate_number = "WRONG-123".into();
        documents.tractor_plate.confidence = Some(0.87);
        let findings = evaluate(&documents);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, FindingCategory::Mismatch);
        assert!(findings[0].message.contains("'ABC-123'"));
        assert!(findings[0].message.contains("'WRONG-123'"));
        assert!(findings[0].message.contains("87%"));
    }

    #[test]
    fn absent_confidence_prints_zero_percent() {
        let mut documents = fixtures::valid_documents();
        documents.tractor_plate.plate_number = "WRONG-123".into();
        documents.tractor_plate.confidence = None;
        let findings = evaluate(&documents);
        assert!(findings[0].message.contains("0%"));
    }

    #[test]
    fn plates_are_checked_independently() {
        let mut documents = fixtures::valid_documents();
        documents.manifest.tractor_plate = "NO_ENCONTRADO".into();
        documents.trailer_plate.plate_number = "WRONG-789".into();
        let findings = evaluate(&documents);
        assert_eq!(findings.len(), 2);
        assert!(findings[0].message.contains("Tractor"));
        assert!(findings[1].message.contains("Trailer"));
    }
}
