#![no_std]

mod confirmations;
mod engine;
mod errors;
mod events;
mod governance;
mod multisig;
mod registry;
mod storage;
mod transactions;
mod types;

pub use crate::errors::{ErrorKind, MultisigError};
pub use crate::multisig::{MultiSigWallet, MultiSigWalletClient};
pub use crate::registry::MAX_OWNER_COUNT;
pub use crate::types::{Call, Confirmation, ExecutionOutcome, FailureReason, Payload, Transaction};
