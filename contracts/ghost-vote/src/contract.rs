use soroban_sdk::{Address, Bytes, BytesN, Env, String};

use crate::coprocessor::CoprocessorClient;
use crate::errors::VoteError;
use crate::events;
use crate::storage;
use crate::types::{Proposal, VoteTotals};
use crate::utils::current_time;

pub struct GhostVoteContract;

impl GhostVoteContract {
    // -------------------------------
    // Initialization
    // -------------------------------
    pub fn initialize(env: Env, admin: Address, coprocessor: Address) -> Result<(), VoteError> {
        if storage::is_initialized(&env) {
            return Err(VoteError::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_coprocessor(&env, &coprocessor);
        storage::set_proposal_count(&env, 0);

        Ok(())
    }

    // -------------------------------
    // Proposal Registry
    // -------------------------------
    pub fn create_proposal(
        env: Env,
        title: String,
        description: String,
        duration_seconds: u64,
    ) -> Result<u64, VoteError> {
        if title.len() == 0 || description.len() == 0 || duration_seconds == 0 {
            return Err(VoteError::InvalidInput);
        }

        let deadline = current_time(&env)
            .checked_add(duration_seconds)
            .ok_or(VoteError::InvalidInput)?;

        // Both tallies start as an encryption of zero minted by the
        // coprocessor; the ledger never holds a plaintext count.
        let cop = CoprocessorClient::new(&env, &storage::coprocessor(&env)?);
        let tally_for = Self::unwrap_coprocessor(cop.try_zero())?;
        let tally_against = Self::unwrap_coprocessor(cop.try_zero())?;

        let id = storage::proposal_count(&env);

        let proposal = Proposal {
            id,
            title,
            description,
            deadline,
            active: true,
            total_voters: 0,
            tally_for,
            tally_against,
        };

        storage::set_proposal(&env, &proposal);
        storage::set_proposal_count(&env, id + 1);

        events::proposal_created(&env, id, deadline);

        Ok(id)
    }

    // -------------------------------
    // Voting
    // -------------------------------
    pub fn vote(
        env: Env,
        proposal_id: u64,
        voter: Address,
        ciphertext: BytesN<32>,
        proof: Bytes,
    ) -> Result<(), VoteError> {
        voter.require_auth();

        let mut proposal = storage::proposal(&env, proposal_id)?;

        if !proposal.active {
            return Err(VoteError::ProposalClosed);
        }

        // Deadline and `active` are independent gates: an expired
        // proposal still reads active until the admin closes it.
        if current_time(&env) > proposal.deadline {
            return Err(VoteError::VotingEnded);
        }

        if storage::has_voted(&env, proposal_id, &voter) {
            return Err(VoteError::AlreadyVoted);
        }

        let cop = CoprocessorClient::new(&env, &storage::coprocessor(&env)?);

        let ballot = match cop.try_validate_input(
            &ciphertext,
            &proof,
            &env.current_contract_address(),
            &voter,
        ) {
            Ok(Ok(handle)) => handle,
            Err(Ok(_)) => return Err(VoteError::InvalidCiphertext),
            _ => return Err(VoteError::CoprocessorUnavailable),
        };

        // The ballot is 0 or 1 but this contract never learns which.
        // Instead of branching on the ciphertext, fold it into both
        // counters: the ballot itself into FOR and its complement into
        // AGAINST. Exactly one of the two additions changes a count.
        // Every coprocessor call completes before any storage write, so
        // a failure here leaves the proposal untouched.
        let against_delta = Self::unwrap_coprocessor(cop.try_complement(&ballot))?;
        let tally_for = Self::unwrap_coprocessor(cop.try_add(&proposal.tally_for, &ballot))?;
        let tally_against =
            Self::unwrap_coprocessor(cop.try_add(&proposal.tally_against, &against_delta))?;

        proposal.tally_for = tally_for;
        proposal.tally_against = tally_against;
        proposal.total_voters += 1;

        storage::set_proposal(&env, &proposal);
        storage::set_voted(&env, proposal_id, &voter);

        events::vote_cast(&env, proposal_id, &voter);

        Ok(())
    }

    // -------------------------------
    // Lifecycle
    // -------------------------------
    pub fn close_proposal(env: Env, proposal_id: u64, caller: Address) -> Result<(), VoteError> {
        caller.require_auth();

        if caller != storage::admin(&env)? {
            return Err(VoteError::Unauthorized);
        }

        let mut proposal = storage::proposal(&env, proposal_id)?;

        // Closed is terminal; re-closing is a no-op.
        if proposal.active {
            proposal.active = false;
            storage::set_proposal(&env, &proposal);
            events::proposal_closed(&env, proposal_id);
        }

        Ok(())
    }

    // -------------------------------
    // Decryption Access
    // -------------------------------
    pub fn request_decryption_access(
        env: Env,
        proposal_id: u64,
        requester: Address,
    ) -> Result<(), VoteError> {
        requester.require_auth();

        // Allowed in every lifecycle state, including Closed.
        let proposal = storage::proposal(&env, proposal_id)?;

        let cop = CoprocessorClient::new(&env, &storage::coprocessor(&env)?);
        Self::unwrap_coprocessor(cop.try_grant_decrypt(&proposal.tally_for, &requester))?;
        Self::unwrap_coprocessor(cop.try_grant_decrypt(&proposal.tally_against, &requester))?;

        events::access_granted(&env, proposal_id, &requester);

        Ok(())
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------
    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, VoteError> {
        storage::proposal(&env, proposal_id)
    }

    pub fn get_vote_totals(env: Env, proposal_id: u64) -> Result<VoteTotals, VoteError> {
        let proposal = storage::proposal(&env, proposal_id)?;
        Ok(VoteTotals {
            tally_for: proposal.tally_for,
            tally_against: proposal.tally_against,
        })
    }

    pub fn has_voted(env: Env, proposal_id: u64, voter: Address) -> bool {
        storage::has_voted(&env, proposal_id, &voter)
    }

    pub fn admin(env: Env) -> Result<Address, VoteError> {
        storage::admin(&env)
    }

    pub fn proposal_count(env: Env) -> u64 {
        storage::proposal_count(&env)
    }

    fn unwrap_coprocessor<T, C, E, I>(result: Result<Result<T, C>, Result<E, I>>) -> Result<T, VoteError> {
        match result {
            Ok(Ok(value)) => Ok(value),
            _ => Err(VoteError::CoprocessorUnavailable),
        }
    }
}
