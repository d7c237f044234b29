use std::process::Command;

#[test]
fn no_args_exits_one_with_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_imdiff"))
        .output()
        .expect("run imdiff");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not provided"), "stderr: {stderr}");
    assert!(stderr.contains("candidate_title"), "stderr: {stderr}");
}

#[test]
fn fewer_than_four_args_exits_one_without_reading_files() {
    // three arguments: the parse failure must be reported before any
    // attempt to open the candidate path
    let output = Command::new(env!("CARGO_BIN_EXE_imdiff"))
        .args(["Ours", "/no/such/candidate.png", "GT"])
        .output()
        .expect("run imdiff");

    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not provided"), "stderr: {stderr}");
    assert!(stderr.contains("reference_path"), "stderr: {stderr}");
    assert!(
        !stderr.contains("File does not exist"),
        "stderr: {stderr}"
    );
}
