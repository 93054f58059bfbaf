//! Property tests for the matching primitives and the engine.

use chrono::NaiveDate;
use cruce_model::{
    CustomsDeclaration, DocumentSet, Manifest, PlateReading, Prefile, UserData,
    ValidationConfig,
};
use cruce_validate::{RuleEngine, matcher, text};
use proptest::prelude::*;

fn documents_from(emission: String, plate: String, entry: String, quantity: f64) -> DocumentSet {
    DocumentSet {
        declaration: CustomsDeclaration {
            emission_date: emission,
            customs_section: "Tijuana".into(),
        },
        manifest: Manifest {
            tractor_plate: plate.clone(),
            trailer_plate: "XYZ-789".into(),
            operator_name: "Juan Pérez".into(),
            arrival_office: "Tijuana".into(),
            entry_number: entry,
            broker: "Logistica MX".into(),
            description: "Cajas de fruta".into(),
            quantity,
            weight_amount: 5000.50,
        },
        prefile: Prefile {
            entry_number: "ENT-2025-001234".into(),
            broker: "Logistica MX".into(),
            description: "Cajas de fruta".into(),
            quantity: 100.0,
            weight_amount: 5000.50,
        },
        tractor_plate: PlateReading {
            plate_number: plate,
            confidence: Some(0.9),
        },
        trailer_plate: PlateReading {
            plate_number: "XYZ-789".into(),
            confidence: None,
        },
    }
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "\\PC*") {
        let once = text::normalize(&s);
        prop_assert_eq!(text::normalize(&once), once);
    }

    #[test]
    fn normalized_output_has_no_outer_or_double_spaces(s in "\\PC*") {
        let normalized = text::normalize(&s);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
    }

    #[test]
    fn matching_is_symmetric(a in "\\PC*", b in "\\PC*", t in 0.0f64..=1.0) {
        prop_assert_eq!(matcher::matches(&a, &b, t), matcher::matches(&b, &a, t));
    }

    #[test]
    fn matching_is_reflexive_for_real_values(
        s in "[a-zA-Z0-9áéíóúñÁÉÍÓÚÑ]{1,24}",
        t in 0.0f64..=1.0,
    ) {
        prop_assert!(matcher::matches(&s, &s, t));
    }

    #[test]
    fn sentinels_never_match(s in "\\PC*") {
        prop_assert!(!matcher::matches("NO_ENCONTRADO", &s, 0.0));
        prop_assert!(!matcher::matches(&s, "NO_LEGIBLE", 0.0));
    }

    #[test]
    fn similarity_stays_in_unit_range(a in "\\PC*", b in "\\PC*") {
        let score = matcher::similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn evaluation_is_deterministic(
        emission in "\\PC{0,12}",
        plate in "\\PC{0,10}",
        entry in "\\PC{0,16}",
        quantity in -1.0e6f64..1.0e6,
    ) {
        let documents = documents_from(emission, plate, entry, quantity);
        let user = UserData { operator_name: "Juan Pérez".into() };
        let config = ValidationConfig::default();
        let engine = RuleEngine::new(&config);
        let as_of = NaiveDate::from_ymd_opt(2025, 10, 22).unwrap();
        let first = engine.run_at(&documents, &user, as_of);
        let second = engine.run_at(&documents, &user, as_of);
        prop_assert_eq!(first, second);
    }
}
