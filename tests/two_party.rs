//! End-to-end flow between two participants exchanging text containers

use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use ecdsa_lab::{encoding, params, Ecdsa, KeyPair, KeyStore};

#[test]
fn sign_here_verify_there() {
    // Alice's side: fixed keys on the demo curve, registered in her store
    let curve = params::demo_p97();
    let engine = Ecdsa::new(&curve);

    let alice = KeyPair::from_private(&curve, BigUint::from(2u32)).unwrap();
    let bob = KeyPair::from_private(&curve, BigUint::from(3u32)).unwrap();

    let mut store = KeyStore::new();
    store.insert("alice", curve.clone(), alice.clone());
    store.insert("bob", curve.clone(), bob.clone());

    // Alice publishes her public key and a signed message as text
    let alice_entry = store.get("alice").unwrap();
    let exported_key =
        encoding::encode_public_key(&alice_entry.curve, alice_entry.keypair.public_point())
            .unwrap();
    let signature = engine
        .sign_with_nonce(b"Hola mundo", alice_entry.keypair.private_scalar(), &BigUint::from(1u32))
        .unwrap();
    let exported_signature = encoding::encode_signature("Hola mundo", &signature);

    // Bob's side: everything is reconstructed from the two text blobs
    let (imported_curve, alice_public) = encoding::decode_public_key(&exported_key).unwrap();
    let (message, imported_signature) = encoding::decode_signature(&exported_signature).unwrap();

    let verifier = Ecdsa::new(&imported_curve);
    assert!(verifier
        .verify(message.as_bytes(), &imported_signature, &alice_public)
        .unwrap());

    // Bob's own key must not verify Alice's signature
    assert!(!verifier
        .verify(message.as_bytes(), &imported_signature, bob.public_point())
        .unwrap());
}

#[test]
fn randomly_generated_keys_round_trip_through_files() {
    let curve = params::demo_p97();
    let engine = Ecdsa::new(&curve);
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    // "adios mundo" digests to 0 mod q, so signing succeeds for every
    // private key this curve can produce
    let keys = engine.generate_keypair(&mut rng).unwrap();
    let signature = engine
        .sign(&mut rng, "adios mundo".as_bytes(), keys.private_scalar())
        .unwrap();

    let dir = std::env::temp_dir();
    let key_path = dir.join(format!("ecdsa-lab-it-{}-key.pem", std::process::id()));
    let sig_path = dir.join(format!("ecdsa-lab-it-{}-msg.sig", std::process::id()));

    encoding::write_public_key_file(&key_path, &curve, keys.public_point()).unwrap();
    encoding::write_signature_file(&sig_path, "adios mundo", &signature).unwrap();

    let (imported_curve, public) = encoding::read_public_key_file(&key_path).unwrap();
    let (message, imported_signature) = encoding::read_signature_file(&sig_path).unwrap();

    let verifier = Ecdsa::new(&imported_curve);
    assert!(verifier
        .verify(message.as_bytes(), &imported_signature, &public)
        .unwrap());

    let _ = std::fs::remove_file(key_path);
    let _ = std::fs::remove_file(sig_path);
}
