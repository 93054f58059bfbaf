pub mod config;
pub mod document;
pub mod error;
pub mod extraction;
pub mod finding;
pub mod outcome;
pub mod report;
pub mod sentinel;

pub use config::ValidationConfig;
pub use document::{
    CustomsDeclaration, DocumentSet, Manifest, PlateReading, Prefile, UserData,
    ValidationRequest,
};
pub use error::{CruceError, Result};
pub use extraction::{DocumentExtraction, FieldReport, FieldStatus};
pub use finding::{Finding, FindingCategory, RuleId, Severity};
pub use outcome::{Comparison, RuleOutcome, RuleStatus};
pub use report::{OverallStatus, ValidationReport, ValidationResponse, ValidationSummary};
pub use sentinel::{Sentinel, is_missing};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request_json() -> &'static str {
        r#"{
            "extracted": {
                "doda": {
                    "fecha_emision": "2025-10-20",
                    "seccion_aduanera": "Tijuana"
                },
                "manifest": {
                    "placa_tracto": "ABC-123",
                    "placa_remolque": "XYZ-789",
                    "nombre_operador": "Juan Pérez García",
                    "aduana_arribo": "Tijuana",
                    "numero_entry": "ENT-2025-001234",
                    "broker": "Logistica MX",
                    "descripcion_mercancia": "Cajas de fruta fresca",
                    "cantidad": 100,
                    "peso_monto": 5000.5
                },
                "prefile": {
                    "numero_entry": "ENT-2025-001234",
                    "broker": "Logistica MX",
                    "descripcion_mercancia": "Cajas de fruta fresca",
                    "cantidad": 100,
                    "peso_monto": 5000.5
                },
                "tractor_plate": { "plate_number": "ABC-123", "confidence": 0.95 },
                "trailer_plate": { "plate_number": "XYZ-789", "confidence": 0.93 }
            },
            "user": { "operatorName": "Juan Pérez García" }
        }"#
    }

    #[test]
    fn request_parses_spanish_wire_names() {
        let request: ValidationRequest =
            serde_json::from_str(sample_request_json()).expect("parse request");
        assert_eq!(request.extracted.declaration.emission_date, "2025-10-20");
        assert_eq!(request.extracted.manifest.tractor_plate, "ABC-123");
        assert_eq!(request.extracted.prefile.entry_number, "ENT-2025-001234");
        assert_eq!(request.extracted.tractor_plate.confidence, Some(0.95));
        assert_eq!(request.user.operator_name, "Juan Pérez García");
    }

    #[test]
    fn request_round_trips() {
        let request: ValidationRequest =
            serde_json::from_str(sample_request_json()).expect("parse request");
        let json = serde_json::to_string(&request).expect("serialize request");
        assert!(json.contains("\"fecha_emision\""));
        assert!(json.contains("\"placa_remolque\""));
        assert!(json.contains("\"operatorName\""));
        let round: ValidationRequest = serde_json::from_str(&json).expect("round trip");
        assert_eq!(round, request);
    }

    #[test]
    fn plate_confidence_defaults_to_none() {
        let reading: PlateReading =
            serde_json::from_str(r#"{ "plate_number": "NO_LEGIBLE" }"#).expect("parse plate");
        assert_eq!(reading.confidence, None);
        assert_eq!(Sentinel::of(&reading.plate_number), Some(Sentinel::NotLegible));
    }
}
