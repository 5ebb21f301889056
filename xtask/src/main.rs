//! Custom cargo commands for podsift.
//!
//! Usage:
//!   cargo xtask check       - Quick check (check + test + clippy)
//!   cargo xtask test        - Run all tests
//!   cargo xtask bench       - Run benchmarks
//!   cargo xtask build-wasm  - Build the browser package with wasm-pack

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("check") => check()?,
        Some("test") => test()?,
        Some("bench") => bench()?,
        Some("build-wasm") => build_wasm()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  check       Quick check (cargo check, test, clippy for native and wasm)
  test        Run all Rust tests
  bench       Run benchmarks
  build-wasm  Build pkg/ with wasm-pack (--target web, feature "wasm")
"#
    );
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/4] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/4] cargo check (wasm32)...");
    run_cargo(&[
        "check",
        "--lib",
        "--target",
        "wasm32-unknown-unknown",
        "--features",
        "wasm",
    ])?;

    println!("[3/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[4/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Build the JS package
fn build_wasm() -> Result<()> {
    let root = project_root()?;
    let status = Command::new("wasm-pack")
        .args(["build", "--target", "web", "--release", "--", "--features", "wasm"])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    println!("✓ Package written to {}", root.join("pkg").display());
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
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
