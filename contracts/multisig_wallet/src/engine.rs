use soroban_sdk::{log, token, Env, Val};

use crate::confirmations::ConfirmationLedger;
use crate::errors::MultisigError;
use crate::events;
use crate::governance;
use crate::storage::WalletStorage;
use crate::transactions::TransactionLog;
use crate::types::{ExecutionOutcome, FailureReason, Transaction};

/// Quorum check and dispatch.
///
/// A transaction is only ever dispatched from here, and only while it is
/// pending and confirmed by enough current owners. Dispatch failures are
/// reported through [`ExecutionOutcome::Failed`] and an `exec_fail` event,
/// so the confirmation that triggered the attempt is kept. The exception is a
/// value transfer that fails after the payload call succeeded: that surfaces
/// as [`MultisigError::ValueTransferFailed`] and the whole invocation is
/// rolled back, so a pending transaction never has its payload applied.
pub struct ExecutionEngine;

impl ExecutionEngine {
    /// Refuses entry while an external dispatch is in flight.
    pub fn require_idle(env: &Env) -> Result<(), MultisigError> {
        if WalletStorage::is_dispatching(env) {
            log!(env, "re-entrant call refused during dispatch");
            return Err(MultisigError::ReentrantCall);
        }
        Ok(())
    }

    pub fn run(env: &Env, transaction: Transaction) -> Result<ExecutionOutcome, MultisigError> {
        if transaction.executed {
            return Err(MultisigError::AlreadyExecuted);
        }

        if !ConfirmationLedger::is_confirmed(env, transaction.id) {
            return Ok(ExecutionOutcome::NotReady);
        }

        if transaction.destination == env.current_contract_address() {
            Ok(Self::execute_self(env, transaction))
        } else {
            Self::execute_external(env, transaction)
        }
    }

    // Governance mutations are internal state, so the executed flag is
    // committed before they run and rolled back if they refuse.
    fn execute_self(env: &Env, mut transaction: Transaction) -> ExecutionOutcome {
        TransactionLog::set_executed(env, &mut transaction, true);

        match governance::dispatch(env, transaction.id, &transaction.payload) {
            Ok(()) => {
                events::execution(env, transaction.id);
                ExecutionOutcome::Executed
            }
            Err(reason) => {
                TransactionLog::set_executed(env, &mut transaction, false);
                events::execution_failure(env, transaction.id);
                ExecutionOutcome::Failed(reason)
            }
        }
    }

    // External targets hold the dispatch lock for the duration of the call;
    // the executed flag is only committed once the call has succeeded.
    fn execute_external(
        env: &Env,
        mut transaction: Transaction,
    ) -> Result<ExecutionOutcome, MultisigError> {
        WalletStorage::set_dispatching(env, true);
        let result = Self::dispatch_external(env, &transaction);
        WalletStorage::set_dispatching(env, false);

        match result? {
            Ok(()) => {
                TransactionLog::set_executed(env, &mut transaction, true);
                events::execution(env, transaction.id);
                Ok(ExecutionOutcome::Executed)
            }
            Err(reason) => {
                log!(env, "dispatch failed", transaction.id, transaction.destination);
                events::execution_failure(env, transaction.id);
                Ok(ExecutionOutcome::Failed(reason))
            }
        }
    }

    // Inner `Err` is a contained failure with nothing applied. Outer `Err` means
    // the payload call went through but the value did not; the caller must
    // abort so the host rolls the call back with everything else.
    fn dispatch_external(
        env: &Env,
        transaction: &Transaction,
    ) -> Result<Result<(), FailureReason>, MultisigError> {
        let wallet = env.current_contract_address();

        let value_token = if transaction.value > 0 {
            let token_address = match WalletStorage::token(env) {
                Ok(token_address) => token_address,
                Err(_) => return Ok(Err(FailureReason::TransferFailed)),
            };
            let client = token::Client::new(env, &token_address);
            if client.balance(&wallet) < transaction.value {
                return Ok(Err(FailureReason::InsufficientBalance));
            }
            Some(client)
        } else {
            None
        };

        let called = match transaction.payload.call() {
            Some(call) => {
                let result = env.try_invoke_contract::<Val, soroban_sdk::Error>(
                    &transaction.destination,
                    &call.function,
                    call.args.clone(),
                );
                if !matches!(result, Ok(Ok(_))) {
                    return Ok(Err(FailureReason::CallFailed));
                }
                true
            }
            None => false,
        };

        if let Some(client) = value_token {
            let result = client.try_transfer(&wallet, &transaction.destination, &transaction.value);
            if !matches!(result, Ok(Ok(_))) {
                if called {
                    log!(env, "value transfer failed after call, aborting", transaction.id);
                    return Err(MultisigError::ValueTransferFailed);
                }
                return Ok(Err(FailureReason::TransferFailed));
            }
        }

        Ok(Ok(()))
    }
}
