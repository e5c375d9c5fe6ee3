use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::MultisigError;
use crate::events;
use crate::governance::SelfCall;
use crate::storage::WalletStorage;

pub const MAX_OWNER_COUNT: u32 = 50;

/// Checks an (owner count, requirement) pair against the registry bounds.
pub fn validate_requirement(owner_count: u32, required: u32) -> Result<(), MultisigError> {
    if owner_count == 0 {
        return Err(MultisigError::EmptyOwnerList);
    }

    if owner_count > MAX_OWNER_COUNT {
        return Err(MultisigError::TooManyOwners);
    }

    if required == 0 {
        return Err(MultisigError::InvalidRequirement);
    }

    if required > owner_count {
        return Err(MultisigError::RequirementExceedsOwners);
    }

    Ok(())
}

fn position(owners: &Vec<Address>, owner: &Address) -> Option<u32> {
    owners
        .iter()
        .position(|candidate| candidate == *owner)
        .map(|index| index as u32)
}

/// The owner set and quorum threshold.
///
/// Mutations require a [`SelfCall`], which only the execution engine can
/// hand out while dispatching a transaction addressed to the wallet itself.
/// Each mutation validates fully before writing, so an `Err` leaves the
/// registry untouched.
pub struct OwnerRegistry;

impl OwnerRegistry {
    pub fn init(env: &Env, owners: &Vec<Address>, required: u32) -> Result<(), MultisigError> {
        validate_requirement(owners.len(), required)?;

        // Check for duplicate owners
        for i in 0..owners.len() {
            for j in (i + 1)..owners.len() {
                if owners.get_unchecked(i) == owners.get_unchecked(j) {
                    return Err(MultisigError::DuplicateOwner);
                }
            }
        }

        WalletStorage::set_owners(env, owners);
        WalletStorage::set_required(env, required);
        Ok(())
    }

    pub fn owners(env: &Env) -> Vec<Address> {
        WalletStorage::owners(env)
    }

    pub fn required(env: &Env) -> u32 {
        WalletStorage::required(env)
    }

    pub fn is_owner(env: &Env, identity: &Address) -> bool {
        position(&WalletStorage::owners(env), identity).is_some()
    }

    pub fn require_owner(env: &Env, identity: &Address) -> Result<(), MultisigError> {
        if !Self::is_owner(env, identity) {
            return Err(MultisigError::NotOwner);
        }
        Ok(())
    }

    pub fn add_owner(env: &Env, guard: &SelfCall, owner: Address) -> Result<(), MultisigError> {
        let mut owners = WalletStorage::owners(env);

        if position(&owners, &owner).is_some() {
            return Err(MultisigError::OwnerAlreadyExists);
        }

        validate_requirement(owners.len() + 1, WalletStorage::required(env))?;

        owners.push_back(owner.clone());
        WalletStorage::set_owners(env, &owners);

        log!(env, "owner added", guard.transaction_id(), owner, owners.len());
        events::owner_addition(env, &owner);
        Ok(())
    }

    pub fn remove_owner(env: &Env, guard: &SelfCall, owner: Address) -> Result<(), MultisigError> {
        let mut owners = WalletStorage::owners(env);

        let index = position(&owners, &owner).ok_or(MultisigError::OwnerNotFound)?;

        let remaining = owners.len() - 1;
        if remaining == 0 {
            return Err(MultisigError::EmptyOwnerList);
        }

        owners.remove(index);
        WalletStorage::set_owners(env, &owners);

        // Only ever lowered, down to the new owner count.
        let required = WalletStorage::required(env);
        if required > remaining {
            WalletStorage::set_required(env, remaining);
            log!(env, "requirement lowered after owner removal", guard.transaction_id(), remaining);
            events::requirement_change(env, remaining);
        }

        log!(env, "owner removed", guard.transaction_id(), owner, remaining);
        events::owner_removal(env, &owner);
        Ok(())
    }

    pub fn replace_owner(
        env: &Env,
        guard: &SelfCall,
        owner: Address,
        new_owner: Address,
    ) -> Result<(), MultisigError> {
        let mut owners = WalletStorage::owners(env);

        let index = position(&owners, &owner).ok_or(MultisigError::OwnerNotFound)?;

        if position(&owners, &new_owner).is_some() {
            return Err(MultisigError::OwnerAlreadyExists);
        }

        owners.set(index, new_owner.clone());
        WalletStorage::set_owners(env, &owners);

        log!(env, "owner replaced", guard.transaction_id(), owner, new_owner);
        events::owner_removal(env, &owner);
        events::owner_addition(env, &new_owner);
        Ok(())
    }

    pub fn change_requirement(env: &Env, guard: &SelfCall, required: u32) -> Result<(), MultisigError> {
        validate_requirement(WalletStorage::owners(env).len(), required)?;

        WalletStorage::set_required(env, required);

        log!(env, "requirement changed", guard.transaction_id(), required);
        events::requirement_change(env, required);
        Ok(())
    }
}
