use soroban_sdk::{contracttype, Address, Env};

use crate::errors::VoteError;
use crate::types::Proposal;

#[contracttype]
pub enum DataKey {
    Admin,
    Coprocessor,
    ProposalCount,
    Proposal(u64),
    Voted(u64, Address), // (proposal_id, voter)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn admin(env: &Env) -> Result<Address, VoteError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(VoteError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn coprocessor(env: &Env) -> Result<Address, VoteError> {
    env.storage()
        .instance()
        .get(&DataKey::Coprocessor)
        .ok_or(VoteError::NotInitialized)
}

pub fn set_coprocessor(env: &Env, coprocessor: &Address) {
    env.storage().instance().set(&DataKey::Coprocessor, coprocessor);
}

pub fn proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
}

pub fn proposal(env: &Env, proposal_id: u64) -> Result<Proposal, VoteError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
        .ok_or(VoteError::NotFound)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id), proposal);
}

pub fn has_voted(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voted(proposal_id, voter.clone()))
}

pub fn set_voted(env: &Env, proposal_id: u64, voter: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Voted(proposal_id, voter.clone()), &true);
}
