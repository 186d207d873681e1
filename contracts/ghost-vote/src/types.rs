use soroban_sdk::{contracttype, String};

use crate::coprocessor::CipherHandle;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Ledger timestamp after which votes are rejected.
    pub deadline: u64,
    /// Cleared only by an admin close; expiry never writes this flag.
    pub active: bool,
    pub total_voters: u32,
    pub tally_for: CipherHandle,
    pub tally_against: CipherHandle,
}

/// The two opaque tally ciphertext handles, decryptable off-chain once
/// access has been granted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteTotals {
    pub tally_for: CipherHandle,
    pub tally_against: CipherHandle,
}
