use soroban_sdk::{Address, Env, Vec};

use crate::errors::MultisigError;
use crate::events;
use crate::storage::{RecordStorage, WalletStorage};
use crate::types::{Payload, Transaction};

/// Append-only store of submitted transactions, indexed by a counter that
/// starts at zero and is never reused.
pub struct TransactionLog;

impl TransactionLog {
    pub fn append(
        env: &Env,
        destination: Address,
        value: i128,
        payload: Payload,
    ) -> Result<u64, MultisigError> {
        if value < 0 {
            return Err(MultisigError::InvalidValue);
        }

        let transaction_id = WalletStorage::transaction_count(env);
        WalletStorage::set_transaction_count(env, transaction_id + 1);

        let transaction = Transaction {
            id: transaction_id,
            destination,
            value,
            payload,
            executed: false,
        };
        RecordStorage::set_transaction(env, &transaction);

        events::submission(env, transaction_id);
        Ok(transaction_id)
    }

    pub fn get(env: &Env, transaction_id: u64) -> Result<Transaction, MultisigError> {
        RecordStorage::transaction(env, transaction_id).ok_or(MultisigError::TransactionNotFound)
    }

    /// Flips the executed flag and keeps the running executed count in step.
    pub fn set_executed(env: &Env, transaction: &mut Transaction, executed: bool) {
        if transaction.executed != executed {
            let executed_count = WalletStorage::executed_count(env);
            if executed {
                WalletStorage::set_executed_count(env, executed_count + 1);
            } else {
                WalletStorage::set_executed_count(env, executed_count.saturating_sub(1));
            }
        }

        transaction.executed = executed;
        RecordStorage::set_transaction(env, transaction);
    }

    pub fn count(env: &Env) -> u64 {
        WalletStorage::transaction_count(env)
    }

    fn matches(transaction: &Transaction, include_pending: bool, include_executed: bool) -> bool {
        (include_pending && !transaction.executed) || (include_executed && transaction.executed)
    }

    /// Number of transactions in the selected states, from the running
    /// counters rather than a scan.
    pub fn count_filtered(env: &Env, include_pending: bool, include_executed: bool) -> u64 {
        let executed = WalletStorage::executed_count(env);
        let pending = Self::count(env).saturating_sub(executed);

        let mut count = 0u64;
        if include_pending {
            count += pending;
        }
        if include_executed {
            count += executed;
        }
        count
    }

    /// Ids in the selected states, ascending, skipping the first `offset`
    /// matches and returning at most `count`.
    ///
    /// Walks the log from id 0 with one persistent read per id and stops as
    /// soon as `count` ids are collected. The cost grows with `offset` plus the
    /// number of non-matching transactions before the page, so callers paging
    /// through a long history should keep pages small.
    pub fn ids(
        env: &Env,
        offset: u32,
        count: u32,
        include_pending: bool,
        include_executed: bool,
    ) -> Vec<u64> {
        let mut ids = Vec::new(env);
        let mut skipped = 0u32;

        for transaction_id in 0..Self::count(env) {
            if ids.len() >= count {
                break;
            }

            let transaction = match RecordStorage::transaction(env, transaction_id) {
                Some(transaction) => transaction,
                None => continue,
            };
            if !Self::matches(&transaction, include_pending, include_executed) {
                continue;
            }

            if skipped < offset {
                skipped += 1;
                continue;
            }
            ids.push_back(transaction_id);
        }

        ids
    }
}
