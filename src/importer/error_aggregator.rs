// ==========================================
// Storefront Catalog - Deferred Error Aggregator
// ==========================================
// Responsibility: collect per-row problems that must not stop the pass,
//                 then fail the run at the gate if any were collected
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use tracing::{debug, error};

#[derive(Debug, Default)]
pub struct ErrorAggregator {
    messages: Vec<String>,
}

impl ErrorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, row: usize, message: impl Into<String>) {
        let message = message.into();
        debug!(row = row, "deferred: {}", message);
        self.messages.push(message);
    }

    /// Gate: Ok when nothing was deferred.
    pub fn into_result(self) -> ImportResult<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        for message in &self.messages {
            error!(deferred = %message, "import blocked");
        }
        Err(ImportError::DeferredErrors {
            count: self.messages.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_gate_passes() {
        assert!(ErrorAggregator::new().into_result().is_ok());
    }

    #[test]
    fn test_gate_fails_with_count() {
        let mut agg = ErrorAggregator::new();
        agg.defer(2, "failed to find level 1 category with EN name: X, on row: 2");
        agg.defer(5, "failed to convert maximum order on row: 5");

        match agg.into_result() {
            Err(ImportError::DeferredErrors { count }) => assert_eq!(count, 2),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
