//! Custom cargo commands for folio.
//!
//! Usage:
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - check + test + clippy
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask wasm      - Build the browser package with wasm-pack
//!   cargo xtask fixtures  - Build the fixture site into target/fixtures

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("wasm") => wasm()?,
        Some("fixtures") => fixtures()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test      Run all Rust tests (native, then without default features)
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  wasm      Build pkg/ with wasm-pack (--features wasm)
  fixtures  Build data/build-fixtures/portfolio into target/fixtures
"#
    );
}

/// Run the test suite with and without the parallel loader
fn test() -> Result<()> {
    println!("[1/2] cargo test...");
    run_cargo(&["test"])?;

    println!("[2/2] cargo test --no-default-features...");
    run_cargo(&["test", "--lib", "--no-default-features"])?;

    println!("\n✓ All tests passed");
    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Build the browser package
fn wasm() -> Result<()> {
    let root = project_root()?;
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--target",
            "web",
            "--release",
            "--",
            "--no-default-features",
            "--features",
            "wasm",
        ])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }
    println!("✓ WASM package written to pkg/");
    Ok(())
}

/// Build the fixture site with the CLI
fn fixtures() -> Result<()> {
    run_cargo(&[
        "run",
        "--quiet",
        "--",
        "index",
        "--input",
        "data/build-fixtures/portfolio",
        "--output",
        "target/fixtures",
    ])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no working directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
