// Signal domain models
use serde::{Deserialize, Serialize};

/// A signal resolved to one concrete row of the catalog.
/// Unique per (name, case_name); id is a stable surrogate key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalIdentity {
    pub id: i64,
    pub name: String,
    pub case_name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
}

/// Optional time bounds in seconds. An absent bound means
/// "use the full available range".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeWindow {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub timestamp: f64,
    pub value: f64,
}

/// Bounds and point count reported by the data service alongside a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub time_range: (f64, f64),
    pub returned_points: usize,
}

/// One row of the flattened catalog listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub signal_name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub case_name: String,
}

/// Per-signal view of the catalog: description, unit, and the cases
/// the signal appears in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub description: Option<String>,
    pub unit: Option<String>,
    pub cases: Vec<String>,
}

/// A (id, name, case) triple used in disambiguation lists attached to
/// resolution failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableSignal {
    pub id: i64,
    pub name: String,
    #[serde(rename = "case")]
    pub case_name: String,
}
