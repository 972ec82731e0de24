// Signal resolver - selector rules for mapping tool arguments to one signal
use crate::application::catalog_repository::CatalogRepository;
use crate::application::error::ToolError;
use crate::domain::signal::SignalIdentity;
use std::sync::Arc;

#[derive(Clone)]
pub struct SignalResolver {
    catalog: Arc<dyn CatalogRepository>,
}

impl SignalResolver {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Resolve to exactly one signal. An id wins over a (name, case) pair;
    /// anything less than a full selector is a [`ToolError::MissingSelector`].
    /// Lookup misses and missing selectors both carry the full list of
    /// (id, name, case) triples so the caller can disambiguate.
    pub async fn resolve(
        &self,
        signal_id: Option<i64>,
        signal_name: Option<&str>,
        case_name: Option<&str>,
    ) -> Result<SignalIdentity, ToolError> {
        if let Some(id) = signal_id {
            match self.catalog.find_signal_by_id(id).await? {
                Some(signal) => Ok(signal),
                None => Err(ToolError::NotFound {
                    message: format!("Signal with ID {id} not found"),
                    available: self.catalog.list_available_signals().await?,
                }),
            }
        } else if let (Some(name), Some(case)) = (signal_name, case_name) {
            match self.catalog.find_signal_by_name_case(name, case).await? {
                Some(signal) => Ok(signal),
                None => Err(ToolError::NotFound {
                    message: format!("Signal '{name}' in case '{case}' not found"),
                    available: self.catalog.list_available_signals().await?,
                }),
            }
        } else {
            Err(ToolError::MissingSelector {
                available: self.catalog.list_available_signals().await?,
            })
        }
    }
}
