use soroban_sdk::{Address, Env, Vec};

use crate::errors::MultisigError;
use crate::types::{Confirmation, DataKey, Transaction};

/// Ledgers left before a persistent record gets its TTL extended.
pub const PERSISTENT_TTL_THRESHOLD: u32 = 100;
/// Ledgers a persistent record is kept alive for after each write.
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 2_000_000;

pub const INSTANCE_TTL_THRESHOLD: u32 = 100;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 500_000;

/// Contract configuration held in instance storage.
pub struct WalletStorage;

impl WalletStorage {
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    pub fn require_initialized(env: &Env) -> Result<(), MultisigError> {
        if !Self::is_initialized(env) {
            return Err(MultisigError::NotInitialized);
        }
        Ok(())
    }

    pub fn mark_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    pub fn bump(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
    }

    pub fn owners(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Owners)
            .unwrap_or(Vec::new(env))
    }

    pub fn set_owners(env: &Env, owners: &Vec<Address>) {
        env.storage().instance().set(&DataKey::Owners, owners);
    }

    pub fn required(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Required)
            .unwrap_or(0)
    }

    pub fn set_required(env: &Env, required: u32) {
        env.storage().instance().set(&DataKey::Required, &required);
    }

    pub fn token(env: &Env) -> Result<Address, MultisigError> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(MultisigError::NotInitialized)
    }

    pub fn set_token(env: &Env, token: &Address) {
        env.storage().instance().set(&DataKey::Token, token);
    }

    pub fn transaction_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TransactionCount)
            .unwrap_or(0u64)
    }

    pub fn set_transaction_count(env: &Env, count: u64) {
        env.storage()
            .instance()
            .set(&DataKey::TransactionCount, &count);
    }

    pub fn executed_count(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ExecutedCount)
            .unwrap_or(0u64)
    }

    pub fn set_executed_count(env: &Env, count: u64) {
        env.storage()
            .instance()
            .set(&DataKey::ExecutedCount, &count);
    }

    pub fn is_dispatching(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Dispatching)
    }

    pub fn set_dispatching(env: &Env, dispatching: bool) {
        if dispatching {
            env.storage().instance().set(&DataKey::Dispatching, &true);
        } else {
            env.storage().instance().remove(&DataKey::Dispatching);
        }
    }

    pub fn self_dispatch(env: &Env) -> Option<u64> {
        env.storage().instance().get(&DataKey::SelfDispatch)
    }

    pub fn set_self_dispatch(env: &Env, transaction_id: Option<u64>) {
        match transaction_id {
            Some(id) => env.storage().instance().set(&DataKey::SelfDispatch, &id),
            None => env.storage().instance().remove(&DataKey::SelfDispatch),
        }
    }
}

/// Per-transaction records held in persistent storage.
pub struct RecordStorage;

impl RecordStorage {
    pub fn transaction(env: &Env, transaction_id: u64) -> Option<Transaction> {
        env.storage()
            .persistent()
            .get(&DataKey::Transaction(transaction_id))
    }

    pub fn set_transaction(env: &Env, transaction: &Transaction) {
        let key = DataKey::Transaction(transaction.id);
        env.storage().persistent().set(&key, transaction);
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_TTL_THRESHOLD,
            PERSISTENT_TTL_EXTEND_TO,
        );
    }

    pub fn confirmations(env: &Env, transaction_id: u64) -> Vec<Confirmation> {
        env.storage()
            .persistent()
            .get(&DataKey::Confirmations(transaction_id))
            .unwrap_or(Vec::new(env))
    }

    pub fn set_confirmations(env: &Env, transaction_id: u64, confirmations: &Vec<Confirmation>) {
        let key = DataKey::Confirmations(transaction_id);
        env.storage().persistent().set(&key, confirmations);
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_TTL_THRESHOLD,
            PERSISTENT_TTL_EXTEND_TO,
        );
    }
}
