//! End-to-end tests for the `qore` binary.
//!
//! Each test runs the compiled binary in a scratch directory with `HOME`
//! pointed there, so no user configuration leaks in.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const BELL_JSON: &str = r#"{
    "format": "ionq.circuit.v0",
    "qubits": 2,
    "gateset": "qis",
    "circuit": [
        {"gate": "H", "targets": [0]},
        {"gate": "CNOT", "targets": [1], "controls": [0]}
    ]
}"#;

fn qore(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qore"))
        .args(args)
        .current_dir(home)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("QORE_CHECKSUM")
        .env_remove("QORE_OUTPUT_FORMAT")
        .env_remove("QORE_LOG_LEVEL")
        .output()
        .expect("failed to run qore")
}

fn scratch_with_bell() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bell.json"), BELL_JSON).unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// encode
// ============================================================================

mod encode {
    use super::*;

    #[test]
    fn test_encode_default_output() {
        let dir = scratch_with_bell();
        let out = qore(dir.path(), &["encode", "-i", "bell.json"]);
        assert!(out.status.success(), "{}", stderr(&out));

        let bytes = fs::read(dir.path().join("bell.qore")).unwrap();
        assert_eq!(&bytes[..4], b"QORE");

        let circuit = qore_codec::decode(&bytes).unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.len(), 2);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let dir = scratch_with_bell();
        assert!(qore(dir.path(), &["encode", "-i", "bell.json", "-o", "a.qore"]).status.success());
        assert!(qore(dir.path(), &["encode", "-i", "bell.json", "-o", "b.qore"]).status.success());

        assert_eq!(
            fs::read(dir.path().join("a.qore")).unwrap(),
            fs::read(dir.path().join("b.qore")).unwrap()
        );
    }

    #[test]
    fn test_encode_no_checksum() {
        let dir = scratch_with_bell();
        let out = qore(dir.path(), &["encode", "-i", "bell.json", "--no-checksum"]);
        assert!(out.status.success(), "{}", stderr(&out));

        let bytes = fs::read(dir.path().join("bell.qore")).unwrap();
        assert_eq!(bytes.len(), 29);
        assert_eq!(&bytes[6..8], &[0, 0]);
    }

    #[test]
    fn test_encode_text_listing() {
        let dir = scratch_with_bell();
        let out = qore(dir.path(), &["encode", "-i", "bell.json", "--text"]);
        assert!(out.status.success(), "{}", stderr(&out));

        let text = fs::read_to_string(dir.path().join("bell.qore.txt")).unwrap();
        assert!(text.starts_with("// max qubit 2\n"));
        assert!(text.contains("op not [1] [0]\n"));
    }

    #[test]
    fn test_encode_reports_instruction_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("bad.json"),
            BELL_JSON.replace(r#""targets": [0]"#, r#""targets": [2]"#),
        )
        .unwrap();

        let out = qore(dir.path(), &["encode", "-i", "bad.json"]);
        assert!(!out.status.success());
        let err = stderr(&out);
        assert!(err.contains("Instruction 0"), "{err}");
        assert!(err.contains("out of range"), "{err}");
        assert!(!dir.path().join("bad.qore").exists());
    }

    #[test]
    fn test_encode_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let out = qore(dir.path(), &["encode", "-i", "missing.json"]);
        assert!(!out.status.success());
        assert!(stderr(&out).contains("File not found"));
    }
}

// ============================================================================
// decode
// ============================================================================

mod decode {
    use super::*;

    fn encoded_bell() -> TempDir {
        let dir = scratch_with_bell();
        assert!(qore(dir.path(), &["encode", "-i", "bell.json"]).status.success());
        dir
    }

    #[test]
    fn test_decode_summary() {
        let dir = encoded_bell();
        let out = qore(dir.path(), &["decode", "-i", "bell.qore"]);
        assert!(out.status.success(), "{}", stderr(&out));
        let text = stdout(&out);
        assert!(text.contains("Qubits: 2"), "{text}");
        assert!(text.contains("cnot×1"), "{text}");
    }

    #[test]
    fn test_decode_to_json_round_trips() {
        let dir = encoded_bell();
        let out = qore(dir.path(), &["decode", "-i", "bell.qore", "-f", "json"]);
        assert!(out.status.success(), "{}", stderr(&out));

        let decoded = qore_json::parse(&out.stdout).unwrap();
        let original = qore_json::parse_str(BELL_JSON).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_text() {
        let dir = encoded_bell();
        let out = qore(dir.path(), &["decode", "-i", "bell.qore", "-f", "text"]);
        assert!(out.status.success());
        assert!(stdout(&out).contains("alloc [2]"));
    }

    #[test]
    fn test_decode_corrupted_stream() {
        let dir = encoded_bell();
        let path = dir.path().join("bell.qore");
        let mut bytes = fs::read(&path).unwrap();
        bytes[22] ^= 0x01;
        fs::write(&path, bytes).unwrap();

        let out = qore(dir.path(), &["decode", "-i", "bell.qore"]);
        assert!(!out.status.success());
        assert!(stderr(&out).contains("Checksum mismatch"));
    }

    #[test]
    fn test_decode_rejects_json_input() {
        let dir = scratch_with_bell();
        let out = qore(dir.path(), &["decode", "-i", "bell.json"]);
        assert!(!out.status.success());
        assert!(stderr(&out).contains("Bad magic"));
    }
}

// ============================================================================
// configuration
// ============================================================================

mod config {
    use super::*;

    #[test]
    fn test_home_config_selects_text() {
        let dir = scratch_with_bell();
        fs::create_dir_all(dir.path().join(".qore")).unwrap();
        fs::write(
            dir.path().join(".qore/config.yaml"),
            "encode:\n  format: text\n",
        )
        .unwrap();

        let out = qore(dir.path(), &["encode", "-i", "bell.json"]);
        assert!(out.status.success(), "{}", stderr(&out));
        assert!(dir.path().join("bell.qore.txt").exists());
    }

    #[test]
    fn test_explicit_config_disables_checksum() {
        let dir = scratch_with_bell();
        fs::write(dir.path().join("qore.yaml"), "encode:\n  checksum: false\n").unwrap();

        let out = qore(
            dir.path(),
            &["--config", "qore.yaml", "encode", "-i", "bell.json"],
        );
        assert!(out.status.success(), "{}", stderr(&out));
        assert_eq!(fs::read(dir.path().join("bell.qore")).unwrap().len(), 29);
    }

    #[test]
    fn test_env_overrides_config_file() {
        let dir = scratch_with_bell();
        fs::write(dir.path().join("qore.yaml"), "encode:\n  format: text\n").unwrap();

        let out = Command::new(env!("CARGO_BIN_EXE_qore"))
            .args(["--config", "qore.yaml", "encode", "-i", "bell.json"])
            .current_dir(dir.path())
            .env("HOME", dir.path())
            .env("QORE_OUTPUT_FORMAT", "binary")
            .output()
            .unwrap();
        assert!(out.status.success(), "{}", stderr(&out));
        assert!(dir.path().join("bell.qore").exists());
    }

    #[test]
    fn test_binary_flag_overrides_text_config() {
        let dir = scratch_with_bell();
        fs::create_dir_all(dir.path().join(".qore")).unwrap();
        fs::write(
            dir.path().join(".qore/config.yaml"),
            "encode:\n  format: text\n",
        )
        .unwrap();

        let out = qore(dir.path(), &["encode", "-i", "bell.json", "--binary"]);
        assert!(out.status.success(), "{}", stderr(&out));
        assert!(!dir.path().join("bell.qore.txt").exists());
        let bytes = fs::read(dir.path().join("bell.qore")).unwrap();
        assert_eq!(&bytes[..4], b"QORE");
    }

    #[test]
    fn test_text_and_binary_conflict() {
        let dir = scratch_with_bell();
        let out = qore(dir.path(), &["encode", "-i", "bell.json", "--text", "--binary"]);
        assert!(!out.status.success());
        assert!(!dir.path().join("bell.qore").exists());
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = scratch_with_bell();
        fs::write(dir.path().join("qore.yaml"), "encode:\n  format: hex\n").unwrap();

        let out = qore(dir.path(), &["--config", "qore.yaml", "gates"]);
        assert!(!out.status.success());
        assert!(stderr(&out).contains("Unknown output format"));
    }
}

// ============================================================================
// informational commands
// ============================================================================

#[test]
fn test_gates_lists_registry() {
    let dir = tempfile::tempdir().unwrap();
    let out = qore(dir.path(), &["gates"]);
    assert!(out.status.success());
    let text = stdout(&out);
    for name in ["h", "cnot", "toffoli", "measure"] {
        assert!(text.contains(name), "{name} missing from:\n{text}");
    }
    assert!(text.contains("0x10"));
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    let out = qore(dir.path(), &["version"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(env!("CARGO_PKG_VERSION")));
}
