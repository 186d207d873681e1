#![cfg(test)]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Bytes, Env};

use crate::{CoprocessorError, FheCoprocessorMock, FheCoprocessorMockClient};

fn setup(env: &Env) -> FheCoprocessorMockClient<'_> {
    let contract_id = env.register_contract(None, FheCoprocessorMock);
    FheCoprocessorMockClient::new(env, &contract_id)
}

#[test]
fn test_zero_and_arithmetic() {
    let env = Env::default();
    let cop = setup(&env);
    let reader = Address::generate(&env);

    let zero = cop.zero();
    let one = cop.complement(&zero);
    let two = cop.add(&one, &one);
    let sum = cop.add(&two, &zero);

    cop.grant_decrypt(&sum, &reader);
    assert_eq!(cop.decrypt(&sum, &reader), 2);

    // Each operation minted a distinct handle.
    assert_ne!(zero, one);
    assert_ne!(one, two);
    assert_ne!(two, sum);
}

#[test]
fn test_input_binding_round_trip() {
    let env = Env::default();
    let cop = setup(&env);

    let contract = Address::generate(&env);
    let caller = Address::generate(&env);

    let (ciphertext, proof) = cop.encrypt_input(&1, &contract, &caller);
    let handle = cop.validate_input(&ciphertext, &Bytes::from(proof), &contract, &caller);

    cop.grant_decrypt(&handle, &caller);
    assert_eq!(cop.decrypt(&handle, &caller), 1);
}

#[test]
fn test_validate_rejects_wrong_caller() {
    let env = Env::default();
    let cop = setup(&env);

    let contract = Address::generate(&env);
    let caller = Address::generate(&env);
    let intruder = Address::generate(&env);

    let (ciphertext, proof) = cop.encrypt_input(&1, &contract, &caller);

    let result = cop.try_validate_input(&ciphertext, &Bytes::from(proof), &contract, &intruder);
    assert_eq!(result, Err(Ok(CoprocessorError::InvalidProof.into())));
}

#[test]
fn test_validate_rejects_mismatched_proof() {
    let env = Env::default();
    let cop = setup(&env);

    let contract = Address::generate(&env);
    let caller = Address::generate(&env);

    let (ciphertext, _) = cop.encrypt_input(&1, &contract, &caller);
    let (_, other_proof) = cop.encrypt_input(&0, &contract, &caller);

    let result = cop.try_validate_input(&ciphertext, &Bytes::from(other_proof), &contract, &caller);
    assert_eq!(result, Err(Ok(CoprocessorError::InvalidProof.into())));
}

#[test]
fn test_decrypt_requires_grant() {
    let env = Env::default();
    let cop = setup(&env);
    let reader = Address::generate(&env);

    let zero = cop.zero();

    let result = cop.try_decrypt(&zero, &reader);
    assert_eq!(result, Err(Ok(CoprocessorError::NoDecryptPermission.into())));

    // Granting twice is a no-op, not an error.
    cop.grant_decrypt(&zero, &reader);
    cop.grant_decrypt(&zero, &reader);
    assert_eq!(cop.decrypt(&zero, &reader), 0);
}
