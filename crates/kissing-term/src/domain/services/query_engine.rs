#[cfg(test)]
#[path = "query_engine_test.rs"]
mod tests;

use super::BoundEstimator;
use super::KnowledgeTable;
use crate::domain::models::DisplayMode;
use crate::domain::models::KissingData;
use crate::domain::models::QueryError;
use crate::domain::models::Report;

/// Stateless composition of the knowledge table and the asymptotic estimate.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    table: KnowledgeTable,
}

impl Default for QueryEngine {
    fn default() -> Self {
        QueryEngine::new(KnowledgeTable::reference())
    }
}

impl QueryEngine {
    pub fn new(table: KnowledgeTable) -> QueryEngine {
        QueryEngine { table }
    }

    pub fn query(&self, dimension: i64, mode: DisplayMode) -> Result<Report, QueryError> {
        if dimension < 1 {
            return Err(QueryError::InvalidDimension(dimension));
        }
        let dimension = dimension as u64;

        let report = match mode {
            DisplayMode::Exact => self.exact(dimension),
            DisplayMode::Asymptotic => {
                let (lower, upper) = BoundEstimator::estimate(dimension);
                Report::Asymptotic {
                    dimension,
                    lower,
                    upper,
                }
            }
        };

        tracing::debug!(dimension, mode = %mode, status = %report.status(), "query");

        Ok(report)
    }

    fn exact(&self, dimension: u64) -> Report {
        let data = self.table.lookup(dimension).map(|entry| &entry.data);

        match data {
            Some(KissingData::Exact {
                value,
                root_system,
                diagram,
            }) => Report::Exact {
                dimension,
                value: *value,
                root_system: root_system.to_string(),
                diagram: diagram.map(|e| e.to_string()),
            },
            Some(KissingData::Bounded { lower, upper }) => Report::Bounded {
                dimension,
                lower: *lower,
                upper: *upper,
            },
            Some(KissingData::Unknown) | None => Report::NoData { dimension },
        }
    }
}
