// Rendered artifact domain models
use serde::{Deserialize, Serialize};

/// Requested output representation for a plot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Interactive,
    Html,
    Png,
}

/// A single plotly-style trace: the series split into parallel axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: String,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLayout {
    pub title: String,
    pub xaxis: AxisTitle,
    pub yaxis: AxisTitle,
    pub template: String,
}

/// The payload consumed by the frontend's embedded chart component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractivePlot {
    pub trace: PlotTrace,
    pub layout: PlotLayout,
}

/// Exactly one variant is populated per render call, selected by the
/// requested [`OutputFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderArtifact {
    Interactive(InteractivePlot),
    Document { markup: String, truncated: bool },
    Image { base64_png: String },
}
