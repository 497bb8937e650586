#![allow(missing_docs)]
use assert_cmd::Command;
use predicates::prelude::*;

fn bacon_cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bacon-cli"))
}

#[test]
fn test_encrypt_command() {
    bacon_cli()
        .arg("encrypt")
        .arg("ab c")
        .assert()
        .success()
        .stdout("AAAAAAAAAB AAABA\n");
}

#[test]
fn test_decrypt_command() {
    bacon_cli()
        .arg("decrypt")
        .arg("aaaaa aaaab")
        .assert()
        .success()
        .stdout("A B\n");
}

#[test]
fn test_rejected_input_exits_with_failure() {
    bacon_cli()
        .arg("encrypt")
        .arg("abc!")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Incorrect plain text format.."));

    bacon_cli()
        .arg("decrypt")
        .arg("BBBBB")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect ciphertext format.."));
}

#[test]
fn test_json_report() {
    let output = bacon_cli()
        .arg("--json")
        .arg("decrypt")
        .arg("AAAAA AAAA")
        .output()
        .expect("Failed to run decrypt");

    assert!(!output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Failed to parse JSON report");
    assert_eq!(report["operation"], "decrypt");
    assert_eq!(report["input"], "AAAAA AAAA");
    assert_eq!(report["error"]["reason"], "decode");
    assert_eq!(report["error"]["kind"], "truncated");
    assert_eq!(report["error"]["position"], 6);
}
