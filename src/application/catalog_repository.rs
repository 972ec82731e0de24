// Repository trait for read-only catalog access
use crate::domain::signal::{AvailableSignal, CatalogRow, SignalIdentity};
use async_trait::async_trait;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Flattened (signal, description, unit, case) rows, ordered by
    /// signal name then case name.
    async fn list_catalog_rows(&self) -> anyhow::Result<Vec<CatalogRow>>;

    /// Look up one signal by its surrogate id.
    async fn find_signal_by_id(&self, id: i64) -> anyhow::Result<Option<SignalIdentity>>;

    /// Look up one signal by its unique (name, case) pair.
    async fn find_signal_by_name_case(
        &self,
        name: &str,
        case: &str,
    ) -> anyhow::Result<Option<SignalIdentity>>;

    /// All (id, name, case) triples, for disambiguation lists.
    async fn list_available_signals(&self) -> anyhow::Result<Vec<AvailableSignal>>;
}
