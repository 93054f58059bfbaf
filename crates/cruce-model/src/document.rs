//! Extracted document records and user-entered capture data.
//!
//! Wire field names keep the upstream extractor's Spanish keys; struct
//! fields use English names. A [`DocumentSet`] is produced once per
//! validation request and never mutated afterward.

use serde::{Deserialize, Serialize};

/// Customs dispatch-operation declaration (DODA) fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomsDeclaration {
    /// Emission date as `YYYY-MM-DD`.
    #[serde(rename = "fecha_emision")]
    pub emission_date: String,
    /// Customs section the declaration was issued for.
    #[serde(rename = "seccion_aduanera")]
    pub customs_section: String,
}

/// Electronic manifest (E-Manifest) fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "placa_tracto")]
    pub tractor_plate: String,
    #[serde(rename = "placa_remolque")]
    pub trailer_plate: String,
    #[serde(rename = "nombre_operador")]
    pub operator_name: String,
    /// Customs office of arrival.
    #[serde(rename = "aduana_arribo")]
    pub arrival_office: String,
    #[serde(rename = "numero_entry")]
    pub entry_number: String,
    /// Broker name as printed; the broker cross-check derives a code from
    /// the entry number instead of comparing this text.
    pub broker: String,
    #[serde(rename = "descripcion_mercancia")]
    pub description: String,
    /// Declared quantity; zero means the extractor found nothing.
    #[serde(rename = "cantidad")]
    pub quantity: f64,
    /// Declared weight or amount; zero means the extractor found nothing.
    #[serde(rename = "peso_monto")]
    pub weight_amount: f64,
}

/// Pre-declaration (prefile) fields cross-checked against the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prefile {
    #[serde(rename = "numero_entry")]
    pub entry_number: String,
    pub broker: String,
    #[serde(rename = "descripcion_mercancia")]
    pub description: String,
    #[serde(rename = "cantidad")]
    pub quantity: f64,
    #[serde(rename = "peso_monto")]
    pub weight_amount: f64,
}

/// A plate number read from a unit photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateReading {
    pub plate_number: String,
    /// Reader confidence in `[0, 1]`; `None` when the extractor gave none.
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Immutable snapshot of the five extracted documents for one crossing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSet {
    #[serde(rename = "doda")]
    pub declaration: CustomsDeclaration,
    pub manifest: Manifest,
    pub prefile: Prefile,
    pub tractor_plate: PlateReading,
    pub trailer_plate: PlateReading,
}

/// Data the operator typed in at capture time, independent of extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// May be empty; the operator-identity rule reports that as a finding.
    pub operator_name: String,
}

/// One full validation request: extracted documents plus capture-form data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub extracted: DocumentSet,
    pub user: UserData,
}
