use soroban_sdk::contracterror;

/// Error codes for the GhostVote contract.
///
/// Codes are stable and grouped by category:
/// - 1-2: initialization
/// - 3-5: authorization / input
/// - 6-8: voting rules
/// - 9-10: coprocessor
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum VoteError {
    /// Contract not initialized
    NotInitialized = 1,

    /// Contract already initialized
    AlreadyInitialized = 2,

    /// Caller is not the admin
    Unauthorized = 3,

    /// Unknown proposal id
    NotFound = 4,

    /// Empty title/description or zero duration
    InvalidInput = 5,

    /// Proposal has been closed by the admin
    ProposalClosed = 6,

    /// Voting deadline has passed
    VotingEnded = 7,

    /// Caller already voted on this proposal
    AlreadyVoted = 8,

    /// Ciphertext or input proof rejected by the coprocessor
    InvalidCiphertext = 9,

    /// Coprocessor call failed
    CoprocessorUnavailable = 10,
}

impl VoteError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            VoteError::NotInitialized => "Contract not initialized",
            VoteError::AlreadyInitialized => "Contract already initialized",
            VoteError::Unauthorized => "Caller is not the admin",
            VoteError::NotFound => "Proposal not found",
            VoteError::InvalidInput => "Invalid input provided",
            VoteError::ProposalClosed => "Proposal is not active",
            VoteError::VotingEnded => "Voting period has ended",
            VoteError::AlreadyVoted => "You have already voted",
            VoteError::InvalidCiphertext => "Invalid encrypted ballot",
            VoteError::CoprocessorUnavailable => "Coprocessor unavailable",
        }
    }
}
