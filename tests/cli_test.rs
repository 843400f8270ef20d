use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::process::{Command,Stdio}; // Run programs
use std::path::Path;
use std::fs::File;
use std::io::Write;
use regex::Regex;

const BROKEN_FIXED: &str = "# header\n'''docstring with two quotes'''\ny = 3\n\"\"\"never closed\n\"\"\"";

#[test]
fn scan_clean_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tqkit")?;
    let fd = File::open(Path::new("tests").join("clean.py"))?;
    let output = cmd.arg("scan")
        .stdin(Stdio::from(fd))
        .output()?;
    assert!(output.status.success());
    let obj: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let tokens = obj["tokens"].as_array().expect("tokens missing");
    assert_eq!(tokens.len(),8);
    assert_eq!(obj["errors"].as_array().expect("errors missing").len(),0);
    assert_eq!(tokens[0]["code"],1);
    assert_eq!(tokens[1]["value"],"compute a sum");
    assert_eq!(tokens[3]["value"],"Adds two numbers.");
    assert_eq!(tokens[3]["position"],"Line 2, Position 4");
    assert_eq!(tokens[4]["type"],"multi-line comment end");
    assert_eq!(tokens[4]["position"],"Line 4, Position 1");
    assert!(String::from_utf8(output.stderr)?.contains("scan complete"));
    Ok(())
}

#[test]
fn scan_console_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tqkit")?;
    cmd.arg("scan")
        .arg("--console")
        .arg("-f").arg(Path::new("tests").join("clean.py"))
        .assert()
        .success()
        .stdout(predicate::str::contains("single-line comment start"))
        .stdout(predicate::str::contains("Line 6, Position 1"))
        .stdout(predicate::str::contains("trailing note"));
    Ok(())
}

#[test]
fn scan_unclosed() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tqkit")?;
    let output = cmd.arg("scan")
        .arg("--indent").arg("2")
        .arg("-f").arg(Path::new("tests").join("broken.py"))
        .output()?;
    assert!(output.status.success());
    let obj: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(obj["tokens"].as_array().expect("tokens missing").len(),4);
    let errors = obj["errors"].as_array().expect("errors missing");
    assert_eq!(errors.len(),1);
    assert!(errors[0].as_str().expect("not a string").contains("line 4, position 1"));
    Ok(())
}

#[test]
fn scan_indent_is_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tqkit")?;
    let output = cmd.arg("scan")
        .arg("--console")
        .arg("--indent").arg("4")
        .arg("-f").arg(Path::new("tests").join("clean.py"))
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("\n    \"tokens\": ["));
    let obj: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(obj["tokens"].as_array().expect("tokens missing").len(),8);
    Ok(())
}

#[test]
fn verify_clean()-> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tqkit")?;
    let expected = std::fs::read_to_string(Path::new("tests").join("clean.py"))?;
    let fd = File::open(Path::new("tests").join("clean.py"))?;
    cmd.arg("verify")
        .stdin(Stdio::from(fd))
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("Passing"));
    Ok(())
}

#[test]
fn verify_broken() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tqkit")?;
    let output = cmd.arg("verify")
        .arg("-f").arg(Path::new("tests").join("broken.py"))
        .output()?;
    assert!(!output.status.success());
    assert_eq!(output.stdout.len(),0);
    let stderr = String::from_utf8(output.stderr)?;
    let patt = Regex::new(r"ERROR\S* \S*(\d) line (\d+) col (\d+): ")?;
    let found: Vec<(String,String,String)> = patt.captures_iter(&stderr).map(|c| {
        (c[1].to_string(),c[2].to_string(),c[3].to_string())
    }).collect();
    assert_eq!(found,vec![
        ("1".to_string(),"2".to_string(),"1".to_string()),
        ("2".to_string(),"2".to_string(),"28".to_string()),
        ("3".to_string(),"4".to_string(),"1".to_string())
    ]);
    assert!(stderr.contains("insufficient quotes to open multi-line comment"));
    assert!(stderr.contains("insufficient quotes to close multi-line comment"));
    assert!(stderr.contains("unterminated multi-line comment"));
    Ok(())
}

#[test]
fn correct_broken() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tqkit")?;
    let fd = File::open(Path::new("tests").join("broken.py"))?;
    cmd.arg("correct")
        .stdin(Stdio::from(fd))
        .assert()
        .success()
        .stdout(BROKEN_FIXED)
        .stderr(predicate::str::contains("normalization complete, 3 errors"));
    Ok(())
}

#[test]
fn correct_then_verify() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("tqkit")?;
    cmd.arg("verify")
        .write_stdin(BROKEN_FIXED)
        .assert()
        .success()
        .stdout(BROKEN_FIXED);
    Ok(())
}

#[test]
fn correct_with_config() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("tqkit")?;
    cmd.arg("fix")
        .arg("--config").arg(r#"{"corrector": {"shortClose": "stray"}}"#)
        .write_stdin("''abc''")
        .assert()
        .success()
        .stdout("'''abc'''''")
        .stderr(predicate::str::contains("normalization complete, 2 errors"));
    Ok(())
}

#[test]
fn correct_bad_config() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("tqkit")?;
    cmd.arg("correct")
        .arg("--config").arg("{corrector")
        .write_stdin("''abc''")
        .assert()
        .failure();
    Ok(())
}

#[test]
fn correct_temp_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("unclosed.py");
    let mut f = File::create(&path)?;
    f.write_all("'''abc".as_bytes())?;
    drop(f);
    let mut cmd = Command::cargo_bin("tqkit")?;
    cmd.arg("correct")
        .arg("-f").arg(&path)
        .assert()
        .success()
        .stdout("'''abc'''")
        .stderr(predicate::str::contains("normalization complete, 1 errors"));
    Ok(())
}

#[test]
fn missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tqkit")?;
    cmd.arg("scan")
        .arg("-f").arg(Path::new("tests").join("no-such-file.py"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("PathNotFound"));
    Ok(())
}

#[test]
fn empty_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::Command::cargo_bin("tqkit")?;
    cmd.arg("verify")
        .write_stdin("")
        .assert()
        .failure();
    Ok(())
}

#[test]
fn completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("tqkit")?;
    cmd.arg("completions")
        .arg("-s").arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("tqkit"));
    Ok(())
}
