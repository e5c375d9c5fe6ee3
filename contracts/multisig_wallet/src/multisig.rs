use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

use crate::confirmations::ConfirmationLedger;
use crate::engine::ExecutionEngine;
use crate::errors::MultisigError;
use crate::events;
use crate::governance::SelfCall;
use crate::registry::OwnerRegistry;
use crate::storage::WalletStorage;
use crate::transactions::TransactionLog;
use crate::types::{ExecutionOutcome, Payload, Transaction};

#[contract]
pub struct MultiSigWallet;

#[contractimpl]
impl MultiSigWallet {
    /// Sets up the owner set, the confirmation requirement and the token the
    /// wallet holds value in. Callable once.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If called a second time
    /// * `EmptyOwnerList` - If `owners` is empty
    /// * `TooManyOwners` - If `owners` has more than `MAX_OWNER_COUNT` entries
    /// * `InvalidRequirement` - If `required` is zero
    /// * `RequirementExceedsOwners` - If `required` is above the owner count
    /// * `DuplicateOwner` - If an owner is listed twice
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        required: u32,
        token: Address,
    ) -> Result<(), MultisigError> {
        if WalletStorage::is_initialized(&env) {
            return Err(MultisigError::AlreadyInitialized);
        }

        OwnerRegistry::init(&env, &owners, required)?;
        WalletStorage::set_token(&env, &token);
        WalletStorage::set_transaction_count(&env, 0);
        WalletStorage::set_executed_count(&env, 0);
        WalletStorage::mark_initialized(&env);
        WalletStorage::bump(&env);

        log!(&env, "wallet initialized", owners.len(), required);
        Ok(())
    }

    /// Moves `amount` of the value token from `from` into the wallet.
    /// A zero amount is accepted and leaves no trace.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), MultisigError> {
        WalletStorage::require_initialized(&env)?;
        ExecutionEngine::require_idle(&env)?;

        if amount < 0 {
            return Err(MultisigError::InvalidValue);
        }
        if amount == 0 {
            return Ok(());
        }

        from.require_auth();

        let token_client = token::Client::new(&env, &WalletStorage::token(&env)?);
        token_client.transfer(&from, &env.current_contract_address(), &amount);

        events::deposit(&env, &from, amount);
        WalletStorage::bump(&env);
        Ok(())
    }

    /// Records a new transaction and the caller's confirmation of it. When the
    /// requirement is one, the transaction is executed in the same call.
    ///
    /// # Errors
    /// * `NotOwner` - If `caller` is not an owner
    /// * `InvalidValue` - If `value` is negative
    /// * `ReentrantCall` - If called while a dispatch is in flight
    /// * `ValueTransferFailed` - As for `confirm_transaction`, when the
    ///   requirement is one
    pub fn submit_transaction(
        env: Env,
        caller: Address,
        destination: Address,
        value: i128,
        payload: Payload,
    ) -> Result<u64, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        ExecutionEngine::require_idle(&env)?;
        caller.require_auth();
        OwnerRegistry::require_owner(&env, &caller)?;

        let transaction_id = TransactionLog::append(&env, destination, value, payload)?;
        Self::confirm_and_execute(&env, &caller, transaction_id)?;

        WalletStorage::bump(&env);
        Ok(transaction_id)
    }

    /// Adds the caller's confirmation and executes the transaction if that
    /// brings it to quorum.
    ///
    /// # Errors
    /// * `NotOwner` - If `caller` is not an owner
    /// * `TransactionNotFound` - If no transaction has this id
    /// * `AlreadyExecuted` - If the transaction has been executed
    /// * `AlreadyConfirmed` - If `caller` already confirmed it
    /// * `ValueTransferFailed` - If the payload call went through but the
    ///   value could not be sent; nothing from this call is kept
    pub fn confirm_transaction(
        env: Env,
        caller: Address,
        transaction_id: u64,
    ) -> Result<ExecutionOutcome, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        ExecutionEngine::require_idle(&env)?;
        caller.require_auth();
        OwnerRegistry::require_owner(&env, &caller)?;

        let outcome = Self::confirm_and_execute(&env, &caller, transaction_id)?;

        WalletStorage::bump(&env);
        Ok(outcome)
    }

    /// Withdraws the caller's confirmation of a pending transaction.
    ///
    /// # Errors
    /// * `NotOwner` - If `caller` is not an owner
    /// * `TransactionNotFound` - If no transaction has this id
    /// * `AlreadyExecuted` - If the transaction has been executed
    /// * `ConfirmationNotFound` - If `caller` has not confirmed it
    pub fn revoke_confirmation(
        env: Env,
        caller: Address,
        transaction_id: u64,
    ) -> Result<(), MultisigError> {
        WalletStorage::require_initialized(&env)?;
        ExecutionEngine::require_idle(&env)?;
        caller.require_auth();
        OwnerRegistry::require_owner(&env, &caller)?;

        let transaction = TransactionLog::get(&env, transaction_id)?;
        if transaction.executed {
            return Err(MultisigError::AlreadyExecuted);
        }

        ConfirmationLedger::revoke(&env, transaction_id, &caller)?;

        WalletStorage::bump(&env);
        Ok(())
    }

    /// Retries execution of a transaction the caller has confirmed.
    ///
    /// Returns `NotReady` without touching state while the transaction is
    /// short of quorum, and `Failed` when the dispatch did not go through;
    /// both leave the transaction pending.
    ///
    /// # Errors
    /// * `NotOwner` - If `caller` is not an owner
    /// * `TransactionNotFound` - If no transaction has this id
    /// * `NotConfirmedByCaller` - If `caller` has not confirmed it
    /// * `AlreadyExecuted` - If the transaction has been executed
    /// * `ValueTransferFailed` - If the payload call went through but the
    ///   value could not be sent; nothing from this call is kept
    pub fn execute_transaction(
        env: Env,
        caller: Address,
        transaction_id: u64,
    ) -> Result<ExecutionOutcome, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        ExecutionEngine::require_idle(&env)?;
        caller.require_auth();
        OwnerRegistry::require_owner(&env, &caller)?;

        let transaction = TransactionLog::get(&env, transaction_id)?;
        if !ConfirmationLedger::has_confirmed(&env, transaction_id, &caller) {
            return Err(MultisigError::NotConfirmedByCaller);
        }

        let outcome = ExecutionEngine::run(&env, transaction)?;

        WalletStorage::bump(&env);
        Ok(outcome)
    }

    // Owner registry mutations. These only succeed while the wallet is
    // dispatching one of its own transactions.

    pub fn add_owner(env: Env, owner: Address) -> Result<(), MultisigError> {
        WalletStorage::require_initialized(&env)?;
        let guard = SelfCall::check(&env)?;
        OwnerRegistry::add_owner(&env, &guard, owner)
    }

    pub fn remove_owner(env: Env, owner: Address) -> Result<(), MultisigError> {
        WalletStorage::require_initialized(&env)?;
        let guard = SelfCall::check(&env)?;
        OwnerRegistry::remove_owner(&env, &guard, owner)
    }

    pub fn replace_owner(env: Env, owner: Address, new_owner: Address) -> Result<(), MultisigError> {
        WalletStorage::require_initialized(&env)?;
        let guard = SelfCall::check(&env)?;
        OwnerRegistry::replace_owner(&env, &guard, owner, new_owner)
    }

    pub fn change_requirement(env: Env, required: u32) -> Result<(), MultisigError> {
        WalletStorage::require_initialized(&env)?;
        let guard = SelfCall::check(&env)?;
        OwnerRegistry::change_requirement(&env, &guard, required)
    }

    // Reads. All of them fail with `NotInitialized` on a wallet that has not
    // been set up, rather than answering with empty defaults.

    pub fn get_owners(env: Env) -> Result<Vec<Address>, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(OwnerRegistry::owners(&env))
    }

    pub fn is_owner(env: Env, identity: Address) -> Result<bool, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(OwnerRegistry::is_owner(&env, &identity))
    }

    pub fn required(env: Env) -> Result<u32, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(OwnerRegistry::required(&env))
    }

    pub fn token(env: Env) -> Result<Address, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        WalletStorage::token(&env)
    }

    /// The wallet's balance of the value token.
    pub fn balance(env: Env) -> Result<i128, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        let token_client = token::Client::new(&env, &WalletStorage::token(&env)?);
        Ok(token_client.balance(&env.current_contract_address()))
    }

    pub fn transaction_count(env: Env) -> Result<u64, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(TransactionLog::count(&env))
    }

    pub fn get_transaction(env: Env, transaction_id: u64) -> Result<Transaction, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        TransactionLog::get(&env, transaction_id)
    }

    pub fn get_confirmation_count(env: Env, transaction_id: u64) -> Result<u32, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(ConfirmationLedger::count(&env, transaction_id))
    }

    pub fn get_confirmations(env: Env, transaction_id: u64) -> Result<Vec<Address>, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(ConfirmationLedger::confirmed_owners(&env, transaction_id))
    }

    pub fn is_confirmed(env: Env, transaction_id: u64) -> Result<bool, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(ConfirmationLedger::is_confirmed(&env, transaction_id))
    }

    pub fn is_confirmed_by(
        env: Env,
        transaction_id: u64,
        owner: Address,
    ) -> Result<bool, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(ConfirmationLedger::has_confirmed(&env, transaction_id, &owner))
    }

    pub fn remaining_confirmations(env: Env, transaction_id: u64) -> Result<u32, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(ConfirmationLedger::remaining(&env, transaction_id))
    }

    pub fn get_transaction_count(
        env: Env,
        include_pending: bool,
        include_executed: bool,
    ) -> Result<u64, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(TransactionLog::count_filtered(&env, include_pending, include_executed))
    }

    pub fn get_transaction_ids(
        env: Env,
        offset: u32,
        count: u32,
        include_pending: bool,
        include_executed: bool,
    ) -> Result<Vec<u64>, MultisigError> {
        WalletStorage::require_initialized(&env)?;
        Ok(TransactionLog::ids(&env, offset, count, include_pending, include_executed))
    }
}

impl MultiSigWallet {
    fn confirm_and_execute(
        env: &Env,
        caller: &Address,
        transaction_id: u64,
    ) -> Result<ExecutionOutcome, MultisigError> {
        let transaction = TransactionLog::get(env, transaction_id)?;
        if transaction.executed {
            return Err(MultisigError::AlreadyExecuted);
        }

        ConfirmationLedger::confirm(env, transaction_id, caller)?;
        ExecutionEngine::run(env, transaction)
    }
}
