// Event contract of the wallet. Topic layouts are stable: watchers index on
// the leading symbol and the id/owner topics that follow it.
#![allow(deprecated)]

use soroban_sdk::{symbol_short, Address, Env};

pub fn deposit(env: &Env, sender: &Address, value: i128) {
    env.events()
        .publish((symbol_short!("deposit"), sender.clone()), value);
}

pub fn submission(env: &Env, transaction_id: u64) {
    env.events()
        .publish((symbol_short!("submit"), transaction_id), ());
}

pub fn confirmation(env: &Env, sender: &Address, transaction_id: u64) {
    env.events().publish(
        (symbol_short!("confirm"), sender.clone(), transaction_id),
        (),
    );
}

pub fn revocation(env: &Env, sender: &Address, transaction_id: u64) {
    env.events().publish(
        (symbol_short!("revoke"), sender.clone(), transaction_id),
        (),
    );
}

pub fn execution(env: &Env, transaction_id: u64) {
    env.events()
        .publish((symbol_short!("execute"), transaction_id), ());
}

pub fn execution_failure(env: &Env, transaction_id: u64) {
    env.events()
        .publish((symbol_short!("exec_fail"), transaction_id), ());
}

pub fn owner_addition(env: &Env, owner: &Address) {
    env.events()
        .publish((symbol_short!("own_add"), owner.clone()), ());
}

pub fn owner_removal(env: &Env, owner: &Address) {
    env.events()
        .publish((symbol_short!("own_rm"), owner.clone()), ());
}

pub fn requirement_change(env: &Env, required: u32) {
    env.events().publish((symbol_short!("req_chg"),), required);
}
