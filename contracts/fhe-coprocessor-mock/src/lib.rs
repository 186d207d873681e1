#![no_std]

//! Plaintext-backed stand-in for the external FHE coprocessor.
//!
//! Ciphertexts are 32-byte handles minted from a counter; the plaintext
//! behind each handle stays inside this contract's storage and is only
//! released through `decrypt` after an explicit grant. `encrypt_input`
//! and `decrypt` stand in for the client-side SDK flows that happen
//! off-chain against the real coprocessor; the remaining entry points
//! match the `Coprocessor` interface the voting contract drives.
//!
//! Every homomorphic operation mints a fresh handle, as the real scheme
//! does, so callers cannot rely on handle identity across operations.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Bytes,
    BytesN, Env,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum CoprocessorError {
    /// Proof missing, malformed, or bound to a different (contract, caller)
    InvalidProof = 1,

    /// Handle does not name a known ciphertext
    UnknownHandle = 2,

    /// Caller holds no decrypt grant for this handle
    NoDecryptPermission = 3,
}

#[contracttype]
#[derive(Clone)]
pub struct InputBinding {
    pub value: u64,
    pub contract: Address,
    pub caller: Address,
    pub proof: BytesN<32>,
}

#[contracttype]
pub enum DataKey {
    NextHandle,
    Plain(BytesN<32>),          // handle -> plaintext
    Input(BytesN<32>),          // ciphertext -> binding
    Grant(BytesN<32>, Address), // (handle, grantee)
}

#[contract]
pub struct FheCoprocessorMock;

#[contractimpl]
impl FheCoprocessorMock {
    /// Client-side input encryption stand-in: mints a ciphertext for
    /// `value` bound to (`contract`, `caller`) and returns it together
    /// with its input proof.
    pub fn encrypt_input(
        env: Env,
        value: u64,
        contract: Address,
        caller: Address,
    ) -> (BytesN<32>, BytesN<32>) {
        let ciphertext = mint_handle(&env);
        let proof = mint_handle(&env);

        let binding = InputBinding {
            value,
            contract,
            caller,
            proof: proof.clone(),
        };
        env.storage()
            .instance()
            .set(&DataKey::Input(ciphertext.clone()), &binding);

        (ciphertext, proof)
    }

    /// Trivial encryption of zero.
    pub fn zero(env: Env) -> BytesN<32> {
        let handle = mint_handle(&env);
        env.storage().instance().set(&DataKey::Plain(handle.clone()), &0u64);
        handle
    }

    /// Checks the input proof and its (contract, caller) binding, then
    /// promotes the ciphertext to an operable handle.
    pub fn validate_input(
        env: Env,
        ciphertext: BytesN<32>,
        proof: Bytes,
        contract: Address,
        caller: Address,
    ) -> BytesN<32> {
        let binding: InputBinding = env
            .storage()
            .instance()
            .get(&DataKey::Input(ciphertext))
            .unwrap_or_else(|| panic_with_error!(&env, CoprocessorError::InvalidProof));

        if binding.contract != contract
            || binding.caller != caller
            || Bytes::from(binding.proof) != proof
        {
            panic_with_error!(&env, CoprocessorError::InvalidProof);
        }

        let handle = mint_handle(&env);
        env.storage()
            .instance()
            .set(&DataKey::Plain(handle.clone()), &binding.value);
        handle
    }

    /// Homomorphic addition.
    pub fn add(env: Env, a: BytesN<32>, b: BytesN<32>) -> BytesN<32> {
        let pa = plaintext(&env, &a);
        let pb = plaintext(&env, &b);
        let handle = mint_handle(&env);
        env.storage()
            .instance()
            .set(&DataKey::Plain(handle.clone()), &(pa + pb));
        handle
    }

    /// Homomorphic `1 - v` for v in {0, 1}.
    pub fn complement(env: Env, v: BytesN<32>) -> BytesN<32> {
        let pv = plaintext(&env, &v);
        let handle = mint_handle(&env);
        env.storage()
            .instance()
            .set(&DataKey::Plain(handle.clone()), &1u64.saturating_sub(pv));
        handle
    }

    /// Records decrypt permission for `grantee`. Idempotent.
    pub fn grant_decrypt(env: Env, handle: BytesN<32>, grantee: Address) {
        // Touch the plaintext to reject grants on unknown handles.
        plaintext(&env, &handle);
        env.storage()
            .instance()
            .set(&DataKey::Grant(handle, grantee), &true);
    }

    /// Off-chain decryption stand-in: releases the plaintext to a caller
    /// holding a grant.
    pub fn decrypt(env: Env, handle: BytesN<32>, caller: Address) -> u64 {
        let granted = env
            .storage()
            .instance()
            .has(&DataKey::Grant(handle.clone(), caller));
        if !granted {
            panic_with_error!(&env, CoprocessorError::NoDecryptPermission);
        }
        plaintext(&env, &handle)
    }
}

fn mint_handle(env: &Env) -> BytesN<32> {
    let next: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextHandle)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::NextHandle, &(next + 1));

    let mut raw = [0u8; 32];
    raw[24..].copy_from_slice(&next.to_be_bytes());
    BytesN::from_array(env, &raw)
}

fn plaintext(env: &Env, handle: &BytesN<32>) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::Plain(handle.clone()))
        .unwrap_or_else(|| panic_with_error!(env, CoprocessorError::UnknownHandle))
}

#[cfg(test)]
mod test;
