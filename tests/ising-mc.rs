extern crate tempfile;
#[macro_use]
extern crate difference;

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Output};

fn binary() -> PathBuf {
    let mut root = env::current_exe()
        .unwrap()
        .parent()
        .expect("executable's directory")
        .to_path_buf();
    if root.ends_with("deps") {
        root.pop();
    }
    root.join("ising-mc")
}

fn run_in(dir: &tempfile::TempDir, args: &[&str]) -> Output {
    let mut cmd = Command::new(binary());
    cmd.env("RUST_BACKTRACE", "1");
    cmd.current_dir(dir.path()).args(args);
    let out = cmd.output().expect("command failed to run");
    println!("{}", String::from_utf8_lossy(&out.stdout));
    println!("{}", String::from_utf8_lossy(&out.stderr));
    out
}

#[test]
fn help_works() {
    let dir = tempfile::tempdir().expect("Unable to create temp directory");
    let out = run_in(&dir, &["--help"]);
    assert!(out.status.success());
}

#[test]
fn missing_flags_fail() {
    let dir = tempfile::tempdir().expect("Unable to create temp directory");
    let out = run_in(&dir, &[]);
    assert!(!out.status.success());
}

#[test]
fn empty_schedule_is_reported() {
    let dir = tempfile::tempdir().expect("Unable to create temp directory");
    let out = run_in(
        &dir,
        &[
            "--L",
            "4",
            "--beta",
            "0.4",
            "--production",
            "5",
            "--sample-stride",
            "10",
        ],
    );
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no samples"));
}

#[test]
fn identical_seeds_give_identical_summaries() {
    let dir = tempfile::tempdir().expect("Unable to create temp directory");
    let flags = &[
        "--L",
        "4",
        "--beta",
        "0.4",
        "--random",
        "--thermalization",
        "20",
        "--production",
        "100",
        "--sample-stride",
        "10",
        "--seed",
        "10137",
        "--output",
        "summary.dat",
    ];

    let out = run_in(&dir, flags);
    assert!(out.status.success());
    let s1 = String::from_utf8_lossy(&out.stdout).to_string();

    let out = run_in(&dir, flags);
    assert!(out.status.success());
    let s2 = String::from_utf8_lossy(&out.stdout).to_string();

    assert_diff!(&s1, &s2, "\n", 0);

    let mut f = File::open(dir.path().join("summary.dat")).unwrap();
    let mut appended = String::new();
    f.read_to_string(&mut appended).unwrap();
    let lines: Vec<&str> = appended.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
    assert_eq!(format!("{}\n", lines[0]), s1);
}

#[test]
fn summary_is_five_numbers() {
    let dir = tempfile::tempdir().expect("Unable to create temp directory");
    let out = run_in(
        &dir,
        &[
            "--L",
            "8",
            "--beta",
            "0.4",
            "--random",
            "--thermalization",
            "50",
            "--production",
            "200",
            "--sample-stride",
            "20",
            "--seed",
            "3",
        ],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let values: Vec<f64> = stdout
        .split_whitespace()
        .map(|w| w.parse().expect("summary should be numbers"))
        .collect();
    assert_eq!(values.len(), 5);
    // The first column is the temperature 1/beta.
    assert_eq!(values[0], 2.5);
    assert!(values[1] >= 0.0 && values[1] <= 1.0);
    assert!(values[2] >= -1e-9);
    assert!(values[3].abs() <= 2.0);
    assert!(values[4] >= -1e-9);
}

#[test]
fn yaml_summary_names_the_fields() {
    let dir = tempfile::tempdir().expect("Unable to create temp directory");
    let out = run_in(
        &dir,
        &[
            "--L",
            "4",
            "--beta",
            "0.5",
            "--thermalization",
            "10",
            "--production",
            "50",
            "--sample-stride",
            "10",
            "--seed",
            "1",
            "--yaml",
        ],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("mean_m"));
    assert!(stdout.contains("var_e"));
    assert!(stdout.contains("mean_e"));
}
