//! Client interface to the external FHE coprocessor contract.
//!
//! The coprocessor owns every ciphertext; this contract only ever holds
//! opaque 32-byte handles and drives the operations below through the
//! generated `CoprocessorClient`. Decryption itself is an off-chain flow
//! between the ciphertext owner and the coprocessor and has no entry
//! point here.

use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env};

/// Opaque handle naming a ciphertext held by the coprocessor.
pub type CipherHandle = BytesN<32>;

#[contractclient(name = "CoprocessorClient")]
pub trait Coprocessor {
    /// Trivial encryption of zero, used to seed fresh tallies.
    fn zero(env: Env) -> CipherHandle;

    /// Verifies that `proof` attests `ciphertext` was formed for exactly
    /// (`contract`, `caller`) and returns a handle usable in homomorphic
    /// operations. Rejects any mismatch.
    fn validate_input(
        env: Env,
        ciphertext: BytesN<32>,
        proof: Bytes,
        contract: Address,
        caller: Address,
    ) -> CipherHandle;

    /// Homomorphic addition. Returns a fresh handle; operands are not
    /// consumed.
    fn add(env: Env, a: CipherHandle, b: CipherHandle) -> CipherHandle;

    /// Homomorphic `1 - v` for a ballot restricted to {0, 1}.
    fn complement(env: Env, v: CipherHandle) -> CipherHandle;

    /// Records decrypt permission on `handle` for `grantee`. Additive,
    /// never revoked; re-granting is a no-op.
    fn grant_decrypt(env: Env, handle: CipherHandle, grantee: Address);
}
