// Exercises the built binary: exit codes and exactly what reaches stdout.

use std::io::Write;
use std::process::{Command, Output};

const FAILURE: &str = "Something has failed. The file could not be uploaded.\n";

fn transfersh(args: &[&str], url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_transfersh"))
        .args(args)
        .env("TRANSFERSH_URL", url)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn missing_file_exits_with_1() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/").expect(0).create();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let output = transfersh(&[path.to_str().unwrap()], &server.url());

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), FAILURE);
    mock.assert();
}

#[test]
fn unreachable_server_exits_with_1() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"payload").unwrap();

    let output = transfersh(
        &[file.path().to_str().unwrap()],
        &format!("http://127.0.0.1:{}", port),
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), FAILURE);
}

#[test]
fn successful_upload_prints_url_and_exits_with_0() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("max-days", "2")
        .match_header("max-downloads", "5")
        .with_body("https://transfer.sh/abc123/file.txt")
        .create();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"payload").unwrap();

    let output = transfersh(
        &[file.path().to_str().unwrap(), "-a", "2", "--max-downloads", "5"],
        &server.url(),
    );

    mock.assert();
    assert_eq!(output.status.code(), Some(0));
    // Whether the clipboard line follows depends on the host having one.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Download from here: https://transfer.sh/abc123/file.txt\n"));
    assert!(!stdout.contains("Something has failed"));
}

#[test]
fn non_integer_option_is_a_usage_error() {
    let output = transfersh(&["file.txt", "--max-days", "forever"], "http://127.0.0.1:9");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
