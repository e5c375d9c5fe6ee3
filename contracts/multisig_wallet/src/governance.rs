use soroban_sdk::{log, Address, Env, Symbol, TryFromVal, Val, Vec};

use crate::errors::MultisigError;
use crate::multisig::MultiSigWallet;
use crate::storage::WalletStorage;
use crate::types::{Call, FailureReason, Payload};

/// Proof that the current invocation is the wallet dispatching one of its
/// own transactions.
///
/// The only way to obtain one is [`SelfCall::check`], which succeeds only
/// while [`dispatch`] has the self-dispatch marker set. Every owner-registry
/// mutation takes a `&SelfCall`, so a direct external call cannot reach them.
pub struct SelfCall {
    transaction_id: u64,
}

impl SelfCall {
    pub fn check(env: &Env) -> Result<SelfCall, MultisigError> {
        match WalletStorage::self_dispatch(env) {
            Some(transaction_id) => Ok(SelfCall { transaction_id }),
            None => {
                log!(env, "governance call outside of self dispatch refused");
                Err(MultisigError::SelfCallOnly)
            }
        }
    }

    pub fn transaction_id(&self) -> u64 {
        self.transaction_id
    }
}

/// Runs a self-targeted payload through the wallet's guarded entry points.
///
/// A missing payload is a no-op. The marker is cleared again whatever the
/// outcome.
pub fn dispatch(env: &Env, transaction_id: u64, payload: &Payload) -> Result<(), FailureReason> {
    let call = match payload.call() {
        Some(call) => call,
        None => return Ok(()),
    };

    WalletStorage::set_self_dispatch(env, Some(transaction_id));
    let result = route(env, call);
    WalletStorage::set_self_dispatch(env, None);

    if let Err(reason) = result {
        log!(env, "governance dispatch failed", transaction_id, call.function.clone());
        return Err(reason);
    }
    Ok(())
}

fn route(env: &Env, call: &Call) -> Result<(), FailureReason> {
    let wallet = env.clone();
    let function = &call.function;
    let args = &call.args;

    let result = if *function == Symbol::new(env, "add_owner") {
        expect_arity(args, 1)?;
        MultiSigWallet::add_owner(wallet, arg(env, args, 0)?)
    } else if *function == Symbol::new(env, "remove_owner") {
        expect_arity(args, 1)?;
        MultiSigWallet::remove_owner(wallet, arg(env, args, 0)?)
    } else if *function == Symbol::new(env, "replace_owner") {
        expect_arity(args, 2)?;
        let owner: Address = arg(env, args, 0)?;
        let new_owner: Address = arg(env, args, 1)?;
        MultiSigWallet::replace_owner(wallet, owner, new_owner)
    } else if *function == Symbol::new(env, "change_requirement") {
        expect_arity(args, 1)?;
        MultiSigWallet::change_requirement(wallet, arg(env, args, 0)?)
    } else {
        return Err(FailureReason::UnsupportedCall);
    };

    result.map_err(|err| FailureReason::GovernanceRejected(err as u32))
}

fn expect_arity(args: &Vec<Val>, arity: u32) -> Result<(), FailureReason> {
    if args.len() != arity {
        return Err(FailureReason::UnsupportedCall);
    }
    Ok(())
}

fn arg<T>(env: &Env, args: &Vec<Val>, index: u32) -> Result<T, FailureReason>
where
    T: TryFromVal<Env, Val>,
{
    let val = args.get(index).ok_or(FailureReason::UnsupportedCall)?;
    T::try_from_val(env, &val).map_err(|_| FailureReason::UnsupportedCall)
}
