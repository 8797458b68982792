//! The `BatchCaller` seam.
//!
//! A batch caller executes `ContractCallContext`s against a ledger and hands
//! back one `BatchResult` per reference. Live implementations live outside
//! this workspace; `RecordedCaller` replays a captured response.

use crate::call::{ContractCallContext, ContractCallResults};
use crate::error::CallerError;
use std::path::Path;
use tracing::debug;

/// Executes batched read-only contract calls.
///
/// Implementations must be `Send + Sync` so they can be shared as
/// `Arc<dyn BatchCaller>`.
pub trait BatchCaller: Send + Sync {
    fn call(&self, contexts: &[ContractCallContext]) -> Result<ContractCallResults, CallerError>;
}

/// Replays a previously recorded multicall response.
#[derive(Debug, Clone, Default)]
pub struct RecordedCaller {
    recorded: ContractCallResults,
}

impl RecordedCaller {
    pub fn new(recorded: ContractCallResults) -> Self {
        Self { recorded }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CallerError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CallerError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn recorded(&self) -> &ContractCallResults {
        &self.recorded
    }
}

impl BatchCaller for RecordedCaller {
    /// Returns only the requested references; any missing one is an error.
    fn call(&self, contexts: &[ContractCallContext]) -> Result<ContractCallResults, CallerError> {
        let mut out = ContractCallResults::default();
        for ctx in contexts {
            let batch = self.recorded.get(&ctx.reference).ok_or_else(|| {
                CallerError::MissingReference {
                    reference: ctx.reference.clone(),
                }
            })?;
            debug!(reference = %ctx.reference, calls = batch.len(), "replaying recorded batch");
            out.results.insert(ctx.reference.clone(), batch.clone());
        }
        Ok(out)
    }
}
