//======================================================================
// QPSC-FHE Crate Test Suite
//======================================================================
#![cfg(test)]

use std::time::Duration;

use qpsc::{QpscCore, SecurityLevel};

use crate::backend::FheFacade;
use crate::error::FheError;
use crate::params::{FheParams, Scheme};
use crate::plain::PlainBackend;
use crate::transcipher::{mask, throughput_kb_s, unmask};

const P: u64 = 65579;

fn params() -> FheParams {
    FheParams {
        security_level: 128,
        poly_modulus_degree: 4096,
        plain_modulus: P,
        cipher_modulus_bits: 218,
    }
}

fn facade(slots: usize) -> FheFacade<PlainBackend> {
    FheFacade::new(Scheme::Bfv, params(), PlainBackend::new(P, slots)).unwrap()
}

//======================================================================
// Parameter Tests
//======================================================================

#[test]
fn params_validate_security_level() {
    let mut p = params();
    p.security_level = 96;
    assert_eq!(p.validate().unwrap_err(), FheError::InvalidSecurityLevel(96));
    for level in [80, 128] {
        let mut p = params();
        p.security_level = level;
        assert!(p.validate().is_ok());
    }
}

#[test]
fn params_validate_plain_modulus() {
    let mut p = params();
    p.plain_modulus = 65539; // 1 (mod 3)
    assert_eq!(p.validate().unwrap_err(), FheError::InvalidPlainModulus);
}

//======================================================================
// Facade Tests
//======================================================================

#[test]
fn plain_backend_round_trip() {
    let facade = facade(8);
    let data: Vec<u64> = (0..20).map(|i| i * 31 % P).collect();
    let cipher = facade.encrypt(&data);
    assert_eq!(cipher.len(), 3); // 8 + 8 + 4 slots
    assert_eq!(facade.decrypt(&cipher), data);
}

#[test]
fn packing_preserves_order_and_covers_tail() {
    let facade = facade(5);
    let data: Vec<u64> = (0..12).collect();
    let packed = facade.pack_plaintext(&data);
    assert_eq!(packed.len(), 3);
    assert_eq!(packed[0], vec![0, 1, 2, 3, 4]);
    assert_eq!(packed[2], vec![10, 11]);
    let flat: Vec<u64> = packed.into_iter().flatten().collect();
    assert_eq!(flat, data);
}

#[test]
fn homomorphic_add_matches_field_addition() {
    let facade = facade(4);
    let a = [1u64, 2, 3, P - 1];
    let b = [5u64, 6, 7, 1];
    let ca = facade.encrypt(&a);
    let cb = facade.encrypt(&b);
    let sum = facade.add(&ca[0], &cb[0]);
    assert_eq!(facade.decrypt(&[sum]), vec![6, 8, 10, 0]);
}

#[test]
fn evaluate_product_relinearizes_pairwise() {
    let facade = facade(2);
    let key = [2u64, 3, 4, 5];
    let ks = [10u64, 20, 30, P - 1];
    let ck = facade.encrypt(&key);
    let cs = facade.encrypt(&ks);
    let prod = facade.evaluate_product(&ck, &cs).unwrap();
    assert_eq!(
        facade.decrypt(&prod),
        vec![20, 60, 120, (5 * (P as u128 - 1) % P as u128) as u64]
    );
}

#[test]
fn evaluate_product_rejects_length_mismatch() {
    let facade = facade(2);
    let ck = facade.encrypt(&[1, 2]);
    let cs = facade.encrypt(&[1, 2, 3, 4]);
    assert_eq!(
        facade.evaluate_product(&ck, &cs).unwrap_err(),
        FheError::LengthMismatch { expected: 1, got: 2 }
    );
}

#[test]
fn facade_reports_scheme_and_params() {
    let facade = facade(4);
    assert_eq!(facade.scheme(), Scheme::Bfv);
    assert_eq!(facade.params().plain_modulus, P);
}

//======================================================================
// Transciphering Tests
//======================================================================

#[test]
fn mask_then_unmask_round_trips() {
    let mut cipher = QpscCore::new(P, SecurityLevel::Sec80, 24).unwrap();
    cipher.init(&[7u64; 36], b"transcipher-nonce").unwrap();

    let message: Vec<u64> = (0..12).map(|i| (i * 1009) % P).collect();
    let keystream = cipher.generate_keystream(1).unwrap();

    let masked = mask(&message, &keystream, P).unwrap();
    assert_ne!(masked, message);
    assert_eq!(unmask(&masked, &keystream, P).unwrap(), message);
}

#[test]
fn masked_stream_decrypts_through_the_backend() {
    // Client masks; server decrypts an encrypted copy and unmasks.
    let mut cipher = QpscCore::new(P, SecurityLevel::Sec128, 24).unwrap();
    cipher.init(&[9u64; 36], b"backend-nonce").unwrap();
    let keystream = cipher.generate_keystream(1).unwrap();

    let message: Vec<u64> = (0..12).map(|i| (i * 4801 + 17) % P).collect();
    let masked = mask(&message, &keystream, P).unwrap();

    let facade = facade(12);
    let encrypted = facade.encrypt(&masked);
    let recovered = unmask(&facade.decrypt(&encrypted), &keystream, P).unwrap();
    assert_eq!(recovered, message);
}

#[test]
fn mask_rejects_length_mismatch() {
    assert_eq!(
        mask(&[1, 2, 3], &[1, 2], P).unwrap_err(),
        FheError::LengthMismatch { expected: 3, got: 2 }
    );
    assert_eq!(
        unmask(&[1], &[1, 2], P).unwrap_err(),
        FheError::LengthMismatch { expected: 1, got: 2 }
    );
}

#[test]
fn throughput_report() {
    let kb_s = throughput_kb_s(2048, Duration::from_secs(2));
    assert!((kb_s - 1.0).abs() < 1e-9);
    assert_eq!(throughput_kb_s(2048, Duration::ZERO), 0.0);
}
