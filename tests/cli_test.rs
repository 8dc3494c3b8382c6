use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const SIGNER: &str = "CN=CertCrypt Test Signer, O=Example Org";

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn vector(name: &str) -> String {
    std::fs::read_to_string(fixtures().join("vectors").join(name))
        .unwrap()
        .trim()
        .to_string()
}

/// Run certcrypt against the fixture stores with an empty config file.
fn certcrypt(dir: &assert_fs::TempDir) -> Command {
    let config = dir.child("config.toml");
    if !config.path().exists() {
        config.write_str("").unwrap();
    }

    let mut cmd = cargo_bin_cmd!("certcrypt");
    cmd.env_remove("RUST_LOG")
        .env_remove("CERTCRYPT_STORE_ROOT")
        .arg("--config")
        .arg(config.path())
        .arg("--store-root")
        .arg(fixtures().join("stores"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap().trim().to_string()
}

#[test]
fn sign_sha1_matches_openssl_vector() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args([
            "--digest",
            "sha1",
            "sign",
            "--subject",
            SIGNER,
            "--content",
            "hello",
        ])
        .assert()
        .success()
        .stdout(format!("{}\n", vector("hello.sha1.sig")))
        .stderr(predicate::str::contains("Signed with"));
}

#[test]
fn config_file_sets_digest() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config.toml")
        .write_str("[certcrypt]\ndigest = \"sha1\"\n")
        .unwrap();

    let signature = stdout_of(certcrypt(&dir).args([
        "sign",
        "--subject",
        SIGNER,
        "--content",
        "hello",
    ]));
    assert_eq!(signature, vector("hello.sha1.sig"));
}

#[test]
fn sign_then_verify() {
    let dir = assert_fs::TempDir::new().unwrap();
    let signature = stdout_of(certcrypt(&dir).args([
        "sign",
        "--subject",
        SIGNER,
        "--content",
        "release 1.4.2",
    ]));

    certcrypt(&dir)
        .args([
            "verify",
            "--subject",
            SIGNER,
            "--content",
            "release 1.4.2",
            "--signature",
            signature.as_str(),
        ])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn verify_tampered_content_exits_2() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args([
            "verify",
            "--subject",
            SIGNER,
            "--content",
            "hellO",
            "--signature",
            vector("hello.sha256.sig").as_str(),
        ])
        .assert()
        .code(2)
        .stdout("invalid\n")
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn verify_with_wrong_digest_is_invalid() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args([
            "--digest",
            "sha512",
            "verify",
            "--subject",
            SIGNER,
            "--content",
            "hello",
            "--signature",
            vector("hello.sha256.sig").as_str(),
        ])
        .assert()
        .code(2)
        .stdout("invalid\n");
}

#[test]
fn verify_malformed_signature_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args([
            "verify",
            "--subject",
            SIGNER,
            "--content",
            "hello",
            "--signature",
            "not base64!",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed signature"));
}

#[test]
fn empty_subject_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args(["sign", "--subject", "", "--content", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'subject' must not be empty"));
}

#[test]
fn unknown_subject_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args(["encrypt", "--subject", "CN=Nobody", "--content", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No certificate with subject 'CN=Nobody'"));
}

#[test]
fn subject_match_is_case_sensitive() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args([
            "sign",
            "--subject",
            "cn=certcrypt test signer, o=example org",
            "--content",
            "hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No certificate with subject"));
}

#[test]
fn missing_store_is_unavailable() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args([
            "--store",
            "disallowed",
            "sign",
            "--subject",
            SIGNER,
            "--content",
            "hello",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("current_user/disallowed is unavailable"));
}

#[test]
fn unknown_store_name_is_rejected() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args(["--store", "keychain", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("keychain"));
}

#[test]
fn public_only_certificate_cannot_sign() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args(["sign", "--subject", "CN=Public Only", "--content", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Key unavailable"));
}

#[test]
fn ec_certificate_is_unsupported() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args(["encrypt", "--subject", "CN=EC Signer", "--content", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Only RSA keys are supported"));
}

#[test]
fn encrypt_then_decrypt_text() {
    let dir = assert_fs::TempDir::new().unwrap();
    let ciphertext = stdout_of(certcrypt(&dir).args([
        "encrypt",
        "--subject",
        SIGNER,
        "--content",
        "hello",
    ]));

    certcrypt(&dir)
        .args([
            "decrypt",
            "--subject",
            SIGNER,
            "--ciphertext",
            ciphertext.as_str(),
            "--text",
        ])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn decrypt_openssl_vector_prints_base64_plaintext() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args([
            "decrypt",
            "--subject",
            SIGNER,
            "--ciphertext",
            vector("hello.oaep.ct").as_str(),
        ])
        .assert()
        .success()
        .stdout("aABlAGwAbABvAA==\n");
}

#[test]
fn legacy_mode_does_not_round_trip() {
    let dir = assert_fs::TempDir::new().unwrap();
    let ciphertext = stdout_of(certcrypt(&dir).args([
        "--mode",
        "legacy",
        "encrypt",
        "--subject",
        SIGNER,
        "--content",
        "hello",
    ]));
    assert!(!ciphertext.is_empty());

    certcrypt(&dir)
        .args([
            "--mode",
            "legacy",
            "decrypt",
            "--subject",
            SIGNER,
            "--ciphertext",
            ciphertext.as_str(),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Key unavailable"));
}

#[test]
fn legacy_encrypt_needs_private_key() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args([
            "--mode",
            "legacy",
            "encrypt",
            "--subject",
            "CN=Public Only",
            "--content",
            "hello",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Key unavailable"));
}

#[test]
fn list_shows_store_order_and_key_markers() {
    let dir = assert_fs::TempDir::new().unwrap();
    let listing = stdout_of(certcrypt(&dir).arg("list"));
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(
        lines,
        vec![
            format!("* {SIGNER}"),
            format!("* {SIGNER}"),
            "  CN=Public Only".to_string(),
            "  CN=EC Signer".to_string(),
        ]
    );
}

#[test]
fn list_local_machine_root() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args(["--location", "local_machine", "--store", "root", "list"])
        .assert()
        .success()
        .stdout("  CN=Example Root CA, O=Example Org\n");
}

#[test]
fn list_json() {
    let dir = assert_fs::TempDir::new().unwrap();
    let listing = stdout_of(certcrypt(&dir).args(["--json", "list"]));
    let value: serde_json::Value = serde_json::from_str(&listing).unwrap();

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["subject"], SIGNER);
    assert_eq!(entries[0]["has_private_key"], true);
    assert_eq!(entries[2]["subject"], "CN=Public Only");
    assert_eq!(entries[2]["has_private_key"], false);
}

#[test]
fn sign_json_output() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = stdout_of(certcrypt(&dir).args([
        "--json",
        "sign",
        "--subject",
        SIGNER,
        "--content",
        "hello",
    ]));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["operation"], "sign");
    assert_eq!(value["subject"], SIGNER);
    assert_eq!(value["store"], "current_user/my");
    assert_eq!(value["result"], vector("hello.sha256.sig"));
}

#[test]
fn verify_json_reports_false_with_exit_2() {
    let dir = assert_fs::TempDir::new().unwrap();

    let output = certcrypt(&dir)
        .args([
            "--json",
            "verify",
            "--subject",
            SIGNER,
            "--content",
            "goodbye",
            "--signature",
            vector("hello.sha256.sig").as_str(),
        ])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["operation"], "verify");
    assert_eq!(value["result"], false);
}

#[test]
fn quiet_mode_prints_only_the_result() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .args([
            "-q",
            "--encoding",
            "utf8",
            "sign",
            "--subject",
            SIGNER,
            "--content",
            "hello",
        ])
        .assert()
        .success()
        .stdout(format!("{}\n", vector("hello.utf8.sha256.sig")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn cert_and_key_files_replace_the_store() {
    let dir = assert_fs::TempDir::new().unwrap();
    let store = fixtures().join("stores/current_user/my");

    certcrypt(&dir)
        .arg("--cert")
        .arg(store.join("01-signer.pem"))
        .arg("--key")
        .arg(store.join("01-signer.key"))
        .args(["sign", "--subject", SIGNER, "--content", "hello"])
        .assert()
        .success()
        .stdout(format!("{}\n", vector("hello.sha256.sig")));
}

#[test]
fn cert_without_key_can_still_verify() {
    let dir = assert_fs::TempDir::new().unwrap();
    let store = fixtures().join("stores/current_user/my");

    certcrypt(&dir)
        .arg("--cert")
        .arg(store.join("01-signer.pem"))
        .args([
            "verify",
            "--subject",
            SIGNER,
            "--content",
            "hello",
            "--signature",
            vector("hello.sha256.sig").as_str(),
        ])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn missing_cert_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    certcrypt(&dir)
        .arg("--cert")
        .arg(dir.path().join("absent.pem"))
        .args(["sign", "--subject", SIGNER, "--content", "hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn missing_config_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    cargo_bin_cmd!("certcrypt")
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}
