use soroban_sdk::{symbol_short, Address, Env};

pub fn proposal_created(env: &Env, proposal_id: u64, deadline: u64) {
    env.events().publish(
        (symbol_short!("proposal"), symbol_short!("created")),
        (proposal_id, deadline),
    );
}

pub fn vote_cast(env: &Env, proposal_id: u64, voter: &Address) {
    env.events().publish(
        (symbol_short!("vote"), symbol_short!("cast"), proposal_id),
        voter.clone(),
    );
}

pub fn proposal_closed(env: &Env, proposal_id: u64) {
    env.events().publish(
        (symbol_short!("proposal"), symbol_short!("closed")),
        proposal_id,
    );
}

pub fn access_granted(env: &Env, proposal_id: u64, grantee: &Address) {
    env.events().publish(
        (symbol_short!("access"), symbol_short!("granted"), proposal_id),
        grantee.clone(),
    );
}
