// Catalog service - Use case for listing signal types
use crate::application::catalog_repository::CatalogRepository;
use crate::application::error::ToolResult;
use crate::domain::signal::CatalogEntry;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Nested catalog view: signal name -> {description, unit, cases}.
    /// Store failures come back as a textual failure result, never a fault.
    pub async fn signal_catalog(&self, tool_call_id: String) -> ToolResult {
        match self.build_catalog().await {
            Ok(content) => ToolResult::Success {
                tool_call_id,
                content,
            },
            Err(e) => {
                tracing::warn!("signal catalog query failed: {e}");
                ToolResult::Failure {
                    tool_call_id,
                    message: format!("Error extracting signal types: {e}"),
                    available_signals: None,
                }
            }
        }
    }

    async fn build_catalog(&self) -> anyhow::Result<serde_json::Value> {
        let rows = self.catalog.list_catalog_rows().await?;

        let mut mapping: BTreeMap<String, CatalogEntry> = BTreeMap::new();
        for row in rows {
            mapping
                .entry(row.signal_name)
                .or_insert_with(|| CatalogEntry {
                    description: row.description,
                    unit: row.unit,
                    cases: Vec::new(),
                })
                .cases
                .push(row.case_name);
        }

        Ok(serde_json::to_value(mapping)?)
    }
}
