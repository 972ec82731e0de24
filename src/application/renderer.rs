// Renderer - turns a fetched series into one of three output artifacts
use crate::application::error::ToolError;
use crate::domain::artifact::{
    AxisTitle, InteractivePlot, OutputFormat, PlotLayout, PlotTrace, RenderArtifact,
};
use crate::domain::signal::{SeriesPoint, SignalIdentity};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use plotters::prelude::*;

/// Longest inline document preview returned in a tool result. Anything
/// beyond this is elided with [`TRUNCATION_MARKER`].
pub const DOCUMENT_PREVIEW_LIMIT: usize = 10_000;
pub const TRUNCATION_MARKER: &str = "...";

const PNG_WIDTH: u32 = 800;
const PNG_HEIGHT: u32 = 600;

/// Render `series` for `signal` in the requested format. Pure with respect
/// to the series input, modulo the generation timestamp embedded in the
/// html document form.
pub fn render(
    signal: &SignalIdentity,
    series: &[SeriesPoint],
    format: OutputFormat,
) -> Result<RenderArtifact, ToolError> {
    let plot = build_plot(signal, series);
    match format {
        OutputFormat::Interactive => Ok(RenderArtifact::Interactive(plot)),
        OutputFormat::Html => render_document(&plot),
        OutputFormat::Png => Ok(RenderArtifact::Image {
            base64_png: render_png(series)?,
        }),
    }
}

fn build_plot(signal: &SignalIdentity, series: &[SeriesPoint]) -> InteractivePlot {
    let unit = signal.unit.as_deref().unwrap_or("N/A");
    InteractivePlot {
        trace: PlotTrace {
            x: series.iter().map(|p| p.timestamp).collect(),
            y: series.iter().map(|p| p.value).collect(),
            trace_type: "scatter".to_string(),
            mode: "lines".to_string(),
        },
        layout: PlotLayout {
            title: format!("{} from {}", signal.name, signal.case_name),
            xaxis: AxisTitle {
                title: "Time (seconds)".to_string(),
            },
            yaxis: AxisTitle {
                title: format!("{} ({unit})", signal.name),
            },
            template: "plotly_white".to_string(),
        },
    }
}

/// Self-contained HTML document embedding the trace/layout JSON. The full
/// markup can be large, so results over the preview limit are cut and
/// marked; callers must treat a truncated preview as non-authoritative.
fn render_document(plot: &InteractivePlot) -> Result<RenderArtifact, ToolError> {
    let trace = serde_json::to_string(&plot.trace).map_err(render_err)?;
    let layout = serde_json::to_string(&plot.layout).map_err(render_err)?;
    let generated_at = chrono::Utc::now().to_rfc3339();

    let markup = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <title>{title}</title>\n\
         <script src=\"https://cdn.plot.ly/plotly-2.32.0.min.js\"></script>\n\
         </head>\n\
         <body>\n\
         <!-- generated at {generated_at} -->\n\
         <div id=\"chart\"></div>\n\
         <script>\n\
         Plotly.newPlot(\"chart\", [{trace}], {layout});\n\
         </script>\n\
         </body>\n\
         </html>\n",
        title = plot.layout.title,
    );

    if markup.len() > DOCUMENT_PREVIEW_LIMIT {
        let mut cut = DOCUMENT_PREVIEW_LIMIT;
        while !markup.is_char_boundary(cut) {
            cut -= 1;
        }
        Ok(RenderArtifact::Document {
            markup: format!("{}{TRUNCATION_MARKER}", &markup[..cut]),
            truncated: true,
        })
    } else {
        Ok(RenderArtifact::Document {
            markup,
            truncated: false,
        })
    }
}

/// Rasterize the series as a line chart and return it base64 encoded.
/// An empty series has no drawable extent in this mode.
fn render_png(series: &[SeriesPoint]) -> Result<String, ToolError> {
    if series.is_empty() {
        return Err(ToolError::Render(
            "cannot rasterize an empty series".to_string(),
        ));
    }

    let (t_min, t_max) = padded_range(series.iter().map(|p| p.timestamp));
    let (v_min, v_max) = padded_range(series.iter().map(|p| p.value));

    let mut raw = vec![0u8; (PNG_WIDTH * PNG_HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut raw, (PNG_WIDTH, PNG_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .build_cartesian_2d(t_min..t_max, v_min..v_max)
            .map_err(render_err)?;
        chart
            .draw_series(LineSeries::new(
                series.iter().map(|p| (p.timestamp, p.value)),
                &BLUE,
            ))
            .map_err(render_err)?;
        root.present().map_err(render_err)?;
    }

    let image = image::RgbImage::from_raw(PNG_WIDTH, PNG_HEIGHT, raw)
        .ok_or_else(|| ToolError::Render("raster buffer size mismatch".to_string()))?;
    let mut png = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(render_err)?;

    Ok(BASE64.encode(png))
}

/// Axis extent of a non-empty value sequence, widened when degenerate so
/// the chart never gets a zero-width range.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> ToolError {
    ToolError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal() -> SignalIdentity {
        SignalIdentity {
            id: 7,
            name: "BusVoltage".to_string(),
            case_name: "Fault1".to_string(),
            description: Some("Main bus voltage".to_string()),
            unit: Some("V".to_string()),
        }
    }

    fn short_series() -> Vec<SeriesPoint> {
        vec![
            SeriesPoint { timestamp: 0.0, value: 1.5 },
            SeriesPoint { timestamp: 0.1, value: 1.7 },
            SeriesPoint { timestamp: 0.2, value: 1.4 },
        ]
    }

    fn long_series() -> Vec<SeriesPoint> {
        (0..1500)
            .map(|i| SeriesPoint {
                timestamp: i as f64 * 0.01,
                value: (i as f64 * 0.1).sin(),
            })
            .collect()
    }

    fn without_generation_line(markup: &str) -> String {
        markup
            .lines()
            .filter(|line| !line.contains("generated at"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_interactive_trace_and_layout() {
        let artifact = render(&signal(), &short_series(), OutputFormat::Interactive).unwrap();
        let RenderArtifact::Interactive(plot) = artifact else {
            panic!("expected interactive artifact");
        };
        assert_eq!(plot.trace.x, vec![0.0, 0.1, 0.2]);
        assert_eq!(plot.trace.y, vec![1.5, 1.7, 1.4]);
        assert_eq!(plot.trace.trace_type, "scatter");
        assert_eq!(plot.trace.mode, "lines");
        assert_eq!(plot.layout.title, "BusVoltage from Fault1");
        assert_eq!(plot.layout.xaxis.title, "Time (seconds)");
        assert_eq!(plot.layout.yaxis.title, "BusVoltage (V)");
    }

    #[test]
    fn test_missing_unit_falls_back_to_na() {
        let mut signal = signal();
        signal.unit = None;
        let RenderArtifact::Interactive(plot) =
            render(&signal, &short_series(), OutputFormat::Interactive).unwrap()
        else {
            panic!("expected interactive artifact");
        };
        assert_eq!(plot.layout.yaxis.title, "BusVoltage (N/A)");
    }

    #[test]
    fn test_render_is_deterministic_modulo_timestamp() {
        let first = render(&signal(), &short_series(), OutputFormat::Interactive).unwrap();
        let second = render(&signal(), &short_series(), OutputFormat::Interactive).unwrap();
        assert_eq!(first, second);

        let RenderArtifact::Document { markup: a, .. } =
            render(&signal(), &short_series(), OutputFormat::Html).unwrap()
        else {
            panic!("expected document artifact");
        };
        let RenderArtifact::Document { markup: b, .. } =
            render(&signal(), &short_series(), OutputFormat::Html).unwrap()
        else {
            panic!("expected document artifact");
        };
        assert_eq!(without_generation_line(&a), without_generation_line(&b));
    }

    #[test]
    fn test_short_document_is_unmarked() {
        let RenderArtifact::Document { markup, truncated } =
            render(&signal(), &short_series(), OutputFormat::Html).unwrap()
        else {
            panic!("expected document artifact");
        };
        assert!(!truncated);
        assert!(markup.len() <= DOCUMENT_PREVIEW_LIMIT);
        assert!(markup.starts_with("<!DOCTYPE html>"));
        assert!(markup.ends_with("</html>\n"));
    }

    #[test]
    fn test_long_document_truncates_at_limit() {
        let RenderArtifact::Document { markup, truncated } =
            render(&signal(), &long_series(), OutputFormat::Html).unwrap()
        else {
            panic!("expected document artifact");
        };
        assert!(truncated);
        assert_eq!(markup.len(), DOCUMENT_PREVIEW_LIMIT + TRUNCATION_MARKER.len());
        assert!(markup.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_png_is_base64_encoded_png() {
        let RenderArtifact::Image { base64_png } =
            render(&signal(), &short_series(), OutputFormat::Png).unwrap()
        else {
            panic!("expected image artifact");
        };
        let bytes = BASE64.decode(base64_png).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_png_of_empty_series_is_render_error() {
        let err = render(&signal(), &[], OutputFormat::Png).unwrap_err();
        assert!(matches!(err, ToolError::Render(_)));
    }

    #[test]
    fn test_empty_series_still_renders_interactive_and_html() {
        assert!(render(&signal(), &[], OutputFormat::Interactive).is_ok());
        assert!(render(&signal(), &[], OutputFormat::Html).is_ok());
    }

    #[test]
    fn test_single_point_png_does_not_degenerate() {
        let series = vec![SeriesPoint { timestamp: 1.0, value: 2.0 }];
        assert!(render(&signal(), &series, OutputFormat::Png).is_ok());
    }
}
