use std::io::Write;
use std::process::{Command, Stdio};

fn run_binary(input: &[u8]) -> String {
    let exe = env!("CARGO_BIN_EXE_chess_match");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn console binary");

    child.stdin.as_mut().unwrap().write_all(input).unwrap();
    let output = child.wait_with_output().expect("failed to read output");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn console_smoke_test_plays_moves() {
    let stdout = run_binary(b"e2e4\ne7e5\ng1f3\nlog\nturn\nquit\n");

    assert!(stdout.contains("8 r n b q k b n r"), "initial board drawn");
    assert!(stdout.contains("played e4"));
    assert!(stdout.contains("played Nf3"));
    assert!(stdout.contains("1. e4 e5"));
    assert!(stdout.contains("2. Nf3"));
    assert!(stdout.contains("Black to move"));
}

#[test]
fn console_reports_errors_and_continues() {
    let stdout = run_binary(b"select e7\ne2e5\nfoo\ne2e4\nquit\n");

    assert!(stdout.contains("error: No piece of the side to move on e7"));
    assert!(stdout.contains("error: Illegal move from e2 to e5"));
    assert!(stdout.contains("error: Unknown command 'foo'"));
    assert!(stdout.contains("played e4"));
}

#[test]
fn console_ends_on_eof() {
    let stdout = run_binary(b"set flip true\nboard\n");
    assert!(stdout.contains("1 R N B K Q B N R"));
}
