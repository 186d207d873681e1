#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String};

mod contract;
mod coprocessor;
mod errors;
mod events;
mod storage;
mod types;
mod utils;

pub use coprocessor::{CipherHandle, Coprocessor};
pub use errors::VoteError;
pub use types::{Proposal, VoteTotals};

use contract::GhostVoteContract;

#[contract]
pub struct GhostVote;

#[contractimpl]
impl GhostVote {
    /// One-time setup fixing the admin identity and the address of the
    /// FHE coprocessor contract.
    pub fn initialize(env: Env, admin: Address, coprocessor: Address) -> Result<(), VoteError> {
        GhostVoteContract::initialize(env, admin, coprocessor)
    }

    pub fn create_proposal(
        env: Env,
        title: String,
        description: String,
        duration_seconds: u64,
    ) -> Result<u64, VoteError> {
        GhostVoteContract::create_proposal(env, title, description, duration_seconds)
    }

    pub fn vote(
        env: Env,
        proposal_id: u64,
        voter: Address,
        ciphertext: BytesN<32>,
        proof: Bytes,
    ) -> Result<(), VoteError> {
        GhostVoteContract::vote(env, proposal_id, voter, ciphertext, proof)
    }

    pub fn close_proposal(env: Env, proposal_id: u64, caller: Address) -> Result<(), VoteError> {
        GhostVoteContract::close_proposal(env, proposal_id, caller)
    }

    pub fn request_decryption_access(
        env: Env,
        proposal_id: u64,
        requester: Address,
    ) -> Result<(), VoteError> {
        GhostVoteContract::request_decryption_access(env, proposal_id, requester)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, VoteError> {
        GhostVoteContract::get_proposal(env, proposal_id)
    }

    pub fn get_vote_totals(env: Env, proposal_id: u64) -> Result<VoteTotals, VoteError> {
        GhostVoteContract::get_vote_totals(env, proposal_id)
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        GhostVoteContract::has_voted(env, proposal_id, voter)
    }

    pub fn admin(env: Env) -> Result<Address, VoteError> {
        GhostVoteContract::admin(env)
    }

    pub fn proposal_count(env: Env) -> u64 {
        GhostVoteContract::proposal_count(env)
    }
}
