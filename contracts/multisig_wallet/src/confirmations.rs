use soroban_sdk::{Address, Env, Vec};

use crate::errors::MultisigError;
use crate::events;
use crate::registry::OwnerRegistry;
use crate::storage::RecordStorage;
use crate::types::Confirmation;

/// Per-transaction approvals.
///
/// Approvals are recorded per owner and kept even after that owner leaves
/// the registry; only approvals by current owners count towards quorum.
pub struct ConfirmationLedger;

impl ConfirmationLedger {
    pub fn confirm(env: &Env, transaction_id: u64, owner: &Address) -> Result<(), MultisigError> {
        let mut confirmations = RecordStorage::confirmations(env, transaction_id);

        for confirmation in confirmations.iter() {
            if confirmation.owner == *owner {
                return Err(MultisigError::AlreadyConfirmed);
            }
        }

        confirmations.push_back(Confirmation {
            owner: owner.clone(),
            confirmed_at: env.ledger().timestamp(),
        });
        RecordStorage::set_confirmations(env, transaction_id, &confirmations);

        events::confirmation(env, owner, transaction_id);
        Ok(())
    }

    pub fn revoke(env: &Env, transaction_id: u64, owner: &Address) -> Result<(), MultisigError> {
        let mut confirmations = RecordStorage::confirmations(env, transaction_id);

        let index = confirmations
            .iter()
            .position(|confirmation| confirmation.owner == *owner)
            .ok_or(MultisigError::ConfirmationNotFound)?;

        confirmations.remove(index as u32);
        RecordStorage::set_confirmations(env, transaction_id, &confirmations);

        events::revocation(env, owner, transaction_id);
        Ok(())
    }

    /// Whether `owner` has an approval on record, current owner or not.
    pub fn has_confirmed(env: &Env, transaction_id: u64, owner: &Address) -> bool {
        RecordStorage::confirmations(env, transaction_id)
            .iter()
            .any(|confirmation| confirmation.owner == *owner)
    }

    /// Current owners that approved, in registry order.
    pub fn confirmed_owners(env: &Env, transaction_id: u64) -> Vec<Address> {
        let confirmations = RecordStorage::confirmations(env, transaction_id);
        let mut confirmed = Vec::new(env);

        for owner in OwnerRegistry::owners(env).iter() {
            if confirmations.iter().any(|confirmation| confirmation.owner == owner) {
                confirmed.push_back(owner);
            }
        }

        confirmed
    }

    pub fn count(env: &Env, transaction_id: u64) -> u32 {
        Self::confirmed_owners(env, transaction_id).len()
    }

    pub fn is_confirmed(env: &Env, transaction_id: u64) -> bool {
        Self::count(env, transaction_id) >= OwnerRegistry::required(env)
    }

    pub fn remaining(env: &Env, transaction_id: u64) -> u32 {
        OwnerRegistry::required(env).saturating_sub(Self::count(env, transaction_id))
    }
}
