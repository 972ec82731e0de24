// Fake port implementations shared by the application-layer tests
use crate::application::catalog_repository::CatalogRepository;
use crate::application::error::ToolError;
use crate::application::timeseries_client::{SeriesResponse, TimeseriesClient};
use crate::domain::signal::{
    AvailableSignal, CatalogRow, SeriesMetadata, SeriesPoint, SignalIdentity, TimeWindow,
};
use async_trait::async_trait;

pub struct FakeCatalog {
    signals: Vec<SignalIdentity>,
    error: Option<String>,
}

impl FakeCatalog {
    pub fn sample() -> Self {
        let signal = |id, name: &str, case: &str, unit: &str| SignalIdentity {
            id,
            name: name.to_string(),
            case_name: case.to_string(),
            description: Some(format!("{name} in {case}")),
            unit: Some(unit.to_string()),
        };
        Self {
            signals: vec![
                signal(7, "BusVoltage", "Fault1", "V"),
                signal(8, "BusVoltage", "Nominal", "V"),
                signal(9, "RotorSpeed", "Nominal", "rad/s"),
            ],
            error: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            signals: Vec::new(),
            error: Some(message.to_string()),
        }
    }

    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    fn check(&self) -> anyhow::Result<()> {
        match &self.error {
            Some(message) => Err(anyhow::anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogRepository for FakeCatalog {
    async fn list_catalog_rows(&self) -> anyhow::Result<Vec<CatalogRow>> {
        self.check()?;
        Ok(self
            .signals
            .iter()
            .map(|s| CatalogRow {
                signal_name: s.name.clone(),
                description: s.description.clone(),
                unit: s.unit.clone(),
                case_name: s.case_name.clone(),
            })
            .collect())
    }

    async fn find_signal_by_id(&self, id: i64) -> anyhow::Result<Option<SignalIdentity>> {
        self.check()?;
        Ok(self.signals.iter().find(|s| s.id == id).cloned())
    }

    async fn find_signal_by_name_case(
        &self,
        name: &str,
        case: &str,
    ) -> anyhow::Result<Option<SignalIdentity>> {
        self.check()?;
        Ok(self
            .signals
            .iter()
            .find(|s| s.name == name && s.case_name == case)
            .cloned())
    }

    async fn list_available_signals(&self) -> anyhow::Result<Vec<AvailableSignal>> {
        self.check()?;
        Ok(self
            .signals
            .iter()
            .map(|s| AvailableSignal {
                id: s.id,
                name: s.name.clone(),
                case_name: s.case_name.clone(),
            })
            .collect())
    }
}

pub enum FakeTimeseries {
    Series(SeriesResponse),
    Failing { status: u16, body: String },
}

impl FakeTimeseries {
    pub fn sample() -> Self {
        FakeTimeseries::Series(SeriesResponse {
            timeseries: vec![
                SeriesPoint { timestamp: 0.0, value: 1.5 },
                SeriesPoint { timestamp: 0.1, value: 1.7 },
                SeriesPoint { timestamp: 0.2, value: 1.4 },
            ],
            metadata: SeriesMetadata {
                time_range: (0.0, 0.2),
                returned_points: 3,
            },
        })
    }

    pub fn empty() -> Self {
        FakeTimeseries::Series(SeriesResponse {
            timeseries: Vec::new(),
            metadata: SeriesMetadata {
                time_range: (0.0, 0.0),
                returned_points: 0,
            },
        })
    }

    pub fn failing(status: u16, body: &str) -> Self {
        FakeTimeseries::Failing {
            status,
            body: body.to_string(),
        }
    }
}

#[async_trait]
impl TimeseriesClient for FakeTimeseries {
    async fn fetch_series(
        &self,
        _signal_id: i64,
        _window: &TimeWindow,
    ) -> Result<SeriesResponse, ToolError> {
        match self {
            FakeTimeseries::Series(response) => Ok(SeriesResponse {
                timeseries: response.timeseries.clone(),
                metadata: response.metadata,
            }),
            FakeTimeseries::Failing { status, body } => Err(ToolError::Fetch {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
