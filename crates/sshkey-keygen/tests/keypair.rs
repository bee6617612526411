// ABOUTME: Integration tests for sshkey-keygen.
// ABOUTME: Exercises generation, encoding, and fingerprints for every key type.

use sshkey_keygen::{
    KeyPairConfig, KeyType, KeygenError, PrivateKey, SshKeyPair, StaticIdentity,
    OPENSSH_PEM_LABEL, SSH_KEY_TYPES,
};

fn pem_label(pem: &[u8]) -> String {
    let text = String::from_utf8(pem.to_vec()).expect("pem is utf-8");
    let first_line = text.lines().next().expect("pem has a header line");
    first_line
        .trim_start_matches("-----BEGIN ")
        .trim_end_matches("-----")
        .to_string()
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_every_type_generates_with_defaults() {
    for key_type in SSH_KEY_TYPES {
        let pair = SshKeyPair::new(KeyPairConfig::new(key_type))
            .unwrap_or_else(|e| panic!("{key_type} should generate: {e}"));

        assert!(!pair.private_key_pem().unwrap().is_empty());
        assert!(!pair.public_key().unwrap().is_empty());
        if key_type == KeyType::Rsa {
            assert_eq!(pair.bits(), 4096);
        }
    }
}

#[test]
fn test_unsupported_type_is_rejected() {
    let err = KeyPairConfig::from_type_str("dsa").unwrap_err();
    assert!(matches!(err, KeygenError::UnsupportedKeyType(ref t) if t == "dsa"));
    assert_eq!(err.to_string(), "unsupported key type: dsa");
}

#[test]
fn test_non_rsa_bits_are_echoed() {
    let config = KeyPairConfig::new(KeyType::Ed25519).with_bits(2048);
    let pair = SshKeyPair::new(config).expect("should generate");
    assert_eq!(pair.bits(), 2048);
}

#[test]
fn test_ed25519_scenario() {
    let pair = SshKeyPair::new(KeyPairConfig::new(KeyType::Ed25519)).expect("should generate");

    assert!(!pair.private_key_pem().unwrap().is_empty());
    let public_key = pair.public_key().unwrap();
    assert!(!public_key.is_empty());
    assert!(public_key.starts_with(b"ssh-ed25519 "));
}

#[test]
fn test_rsa_1024_with_passphrase_scenario() {
    let config = KeyPairConfig::new(KeyType::Rsa)
        .with_bits(1024)
        .with_passphrase("secret");
    let pair = SshKeyPair::new(config).expect("should generate");

    let pem = pair.private_key_pem().unwrap();
    assert_eq!(pem_label(&pem), OPENSSH_PEM_LABEL);
    assert!(PrivateKey::from_openssh(&pem).unwrap().is_encrypted());
}

// ============================================================================
// Public key line
// ============================================================================

#[test]
fn test_public_key_prefix_matches_type() {
    for key_type in SSH_KEY_TYPES {
        let config = KeyPairConfig::new(key_type).with_bits(if key_type == KeyType::Rsa {
            1024
        } else {
            0
        });
        let pair = SshKeyPair::new(config).expect("should generate");
        let prefix = format!("{} ", key_type.ssh_algorithm());

        assert!(
            pair.public_key().unwrap().starts_with(prefix.as_bytes()),
            "{key_type} public key should start with {prefix:?}"
        );
    }
}

#[test]
fn test_public_key_has_no_newline_with_plain_comment() {
    let config = KeyPairConfig::new(KeyType::Ed25519).with_comment("ops@bastion");
    let pair = SshKeyPair::new(config).expect("should generate");

    assert!(!pair.public_key().unwrap().contains(&b'\n'));
}

#[test]
fn test_comment_round_trips_byte_for_byte() {
    let config = KeyPairConfig::new(KeyType::Ecdsa).with_comment("ops@bastion");
    let pair = SshKeyPair::new(config).expect("should generate");

    let public_key = String::from_utf8(pair.public_key().unwrap()).unwrap();
    let (_, comment) = public_key.split_at(public_key.rfind(' ').unwrap() + 1);
    assert_eq!(comment, "ops@bastion");
}

#[test]
fn test_default_comment_round_trips_with_newline() {
    let identity = StaticIdentity::new("builder", "ci-runner");
    let pair = SshKeyPair::with_identity(KeyPairConfig::new(KeyType::Ed25519), &identity)
        .expect("should generate");

    let public_key = String::from_utf8(pair.public_key().unwrap()).unwrap();
    let mut parts = public_key.splitn(3, ' ');
    assert_eq!(parts.next(), Some("ssh-ed25519"));
    assert!(parts.next().is_some());
    assert_eq!(parts.next(), Some("builder@ci-runner\n"));
    // The only newline is the comment's own
    assert_eq!(public_key.matches('\n').count(), 1);
}

// ============================================================================
// Fingerprints
// ============================================================================

#[test]
fn test_fingerprints_are_deterministic_and_distinct_formats() {
    let pair = SshKeyPair::new(KeyPairConfig::new(KeyType::Ed25519)).expect("should generate");

    let md5 = pair.md5().unwrap();
    let sha256 = pair.sha256().unwrap();
    assert_eq!(md5, pair.md5().unwrap());
    assert_eq!(sha256, pair.sha256().unwrap());

    assert_eq!(md5.matches(':').count(), 15);
    assert!(!md5.starts_with("SHA256:"));
    assert!(sha256.starts_with("SHA256:"));
    assert_eq!(sha256.matches(':').count(), 1);
}

#[test]
fn test_encodings_describe_the_same_key() {
    for key_type in [KeyType::Ed25519, KeyType::Ecdsa] {
        let config = KeyPairConfig::new(key_type)
            .with_comment("ops@bastion")
            .with_passphrase("testpass");
        let pair = SshKeyPair::new(config).expect("should generate");

        let decrypted = PrivateKey::from_openssh(pair.private_key_pem().unwrap())
            .unwrap()
            .decrypt(b"testpass")
            .expect("should decrypt");
        let public_key = decrypted.public_key();

        assert_eq!(
            public_key.to_openssh().unwrap(),
            String::from_utf8(pair.public_key().unwrap()).unwrap()
        );
        assert_eq!(
            sshkey_keygen::sha256_fingerprint(public_key).unwrap(),
            pair.sha256().unwrap()
        );
        assert_eq!(
            sshkey_keygen::md5_fingerprint(public_key).unwrap(),
            pair.md5().unwrap()
        );
    }
}

// ============================================================================
// Passphrases
// ============================================================================

#[test]
fn test_same_passphrase_config_twice_yields_valid_distinct_containers() {
    for key_type in [KeyType::Ed25519, KeyType::Ecdsa] {
        let config = KeyPairConfig::new(key_type).with_passphrase("testpass");

        let first = SshKeyPair::new(config.clone()).unwrap().private_key_pem().unwrap();
        let second = SshKeyPair::new(config).unwrap().private_key_pem().unwrap();

        assert!(!first.is_empty());
        assert!(!second.is_empty());
        assert_ne!(first, second);
        for pem in [&first, &second] {
            assert_eq!(pem_label(pem), OPENSSH_PEM_LABEL);
            assert!(PrivateKey::from_openssh(pem).unwrap().is_encrypted());
        }
    }
}

#[test]
fn test_wrong_passphrase_fails_to_decrypt() {
    let config = KeyPairConfig::new(KeyType::Ed25519).with_passphrase("right");
    let pair = SshKeyPair::new(config).expect("should generate");

    let parsed = PrivateKey::from_openssh(pair.private_key_pem().unwrap()).unwrap();
    assert!(parsed.decrypt(b"wrong").is_err());
}

#[test]
fn test_empty_passphrase_is_unencrypted() {
    let pair = SshKeyPair::new(KeyPairConfig::new(KeyType::Ecdsa)).expect("should generate");
    let parsed = PrivateKey::from_openssh(pair.private_key_pem().unwrap()).unwrap();
    assert!(!parsed.is_encrypted());
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_parallel_generation_yields_independent_keys() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                SshKeyPair::new(KeyPairConfig::new(KeyType::Ed25519))
                    .expect("should generate")
                    .sha256()
                    .expect("should fingerprint")
            })
        })
        .collect();

    let mut fingerprints: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread should finish"))
        .collect();
    fingerprints.sort();
    fingerprints.dedup();
    assert_eq!(fingerprints.len(), 4);
}
