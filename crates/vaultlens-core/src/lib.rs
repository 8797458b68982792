//! # vaultlens-core
//!
//! Types and mapping routines for batched (multicall) contract reads.
//! The multicall itself runs behind the `BatchCaller` trait; this crate only
//! builds request contexts and turns the decoded responses into application
//! data.

pub mod call;
pub mod caller;
pub mod config;
pub mod error;
pub mod mapper;
pub mod types;

pub use call::{
    strategies_helper_calls, BatchResult, CallContext, CallResult, ContractCallContext,
    ContractCallResults, VaultRef,
};
pub use caller::{BatchCaller, RecordedCaller};
pub use config::{ContractAddresses, USDC_DECIMALS};
pub use error::{CallerError, ConfigError, MapError};
pub use mapper::{
    flatten_to_scalars, map_queue_indexes, map_queue_indexes_from_results, MappedScalarResult,
    QueueIndexEntry,
};
pub use types::{DecodedValue, ScalarValue};
