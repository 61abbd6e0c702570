//! End-to-end tests for the `z85` binary.
//!
//! Each test spawns the built binary, pipes a fixed input to stdin, and
//! compares stdout byte for byte. The vectors cover the empty input, each
//! trailing-group length, whole groups, and mixed text.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::thread;

fn run(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_z85"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn z85");

    // Feed stdin from another thread so a large input cannot deadlock
    // against the child filling its stdout pipe.
    let mut pipe = child.stdin.take().expect("stdin is piped");
    let input = stdin.to_vec();
    let writer = thread::spawn(move || pipe.write_all(&input));

    let output = child.wait_with_output().expect("failed to wait for z85");
    writer
        .join()
        .expect("stdin writer panicked")
        .expect("failed to write stdin");
    output
}

/// (name, raw bytes, encoded text)
const VECTORS: &[(&str, &[u8], &[u8])] = &[
    ("empty input", b"", b""),
    ("single byte", b"\x42", b"li"),
    ("two bytes", b"\x42\x42", b"lp7"),
    ("three bytes", b"\x42\x42\x42", b"lpa0"),
    ("exact chunk", b"\x86\x4F\xD2\x6F", b"Hello"),
    (
        "two chunks",
        b"\x86\x4F\xD2\x6F\xB5\x59\xF7\x5B",
        b"HelloWorld",
    ),
    ("text with partial chunk", b"Hello world!!", b"nm=QNzY<mxA+]nfaP"),
];

#[test]
fn encode_vectors() {
    for &(name, raw, encoded) in VECTORS {
        let out = run(&["encode"], raw);
        assert!(out.status.success(), "{name}: exit {:?}", out.status);
        assert_eq!(out.stdout, encoded, "{name}");
    }
}

#[test]
fn decode_vectors() {
    for &(name, raw, encoded) in VECTORS {
        let out = run(&["decode"], encoded);
        assert!(out.status.success(), "{name}: exit {:?}", out.status);
        assert_eq!(out.stdout, raw, "{name}");
    }
}

#[test]
fn strict_decode_rejects_newline() {
    let out = run(&["decode", "--strict"], b"Hello\n");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("invalid symbol 0x0A at offset 5"),
        "stderr: {stderr}"
    );
}

#[test]
fn validate_accepts_and_rejects() {
    let ok = run(&["validate"], b"nm=QNzY<mxA+]nfaP");
    assert!(ok.status.success());
    assert!(String::from_utf8_lossy(&ok.stdout).contains("decode to 13 bytes"));

    let bad = run(&["validate"], b"Hel~o");
    assert_eq!(bad.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&bad.stdout).contains("✗ Error: invalid symbol 0x7E at offset 3"));
}

#[test]
fn encode_then_decode_large_input() {
    let raw: Vec<u8> = (0..100_003u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();
    let encoded = run(&["encode"], &raw);
    assert!(encoded.status.success());
    assert_eq!(encoded.stdout.len(), 125_004);

    let decoded = run(&["decode", "--strict"], &encoded.stdout);
    assert!(decoded.status.success());
    assert_eq!(decoded.stdout, raw);
}
