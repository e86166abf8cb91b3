//! Generates `build_info.rs` in OUT_DIR: short commit hash and build date,
//! shown by `flappy --version`.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Short hash of HEAD, if this is a git checkout with git on PATH.
fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

/// Environment override first, then `fallback`.
fn env_or(name: &str, fallback: impl FnOnce() -> String) -> String {
    println!("cargo:rerun-if-env-changed={name}");
    env::var(name).ok().filter(|v| !v.is_empty()).unwrap_or_else(fallback)
}

fn main() {
    let commit = env_or("BUILD_COMMIT", || {
        git_commit().unwrap_or_else(|| "unknown".to_string())
    });
    let date = env_or("BUILD_DATE", || {
        chrono::Utc::now().format("%Y-%m-%d").to_string()
    });

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {commit:?};\npub const BUILD_DATE: &str = {date:?};\n"
    );
    fs::write(out_dir.join("build_info.rs"), generated).expect("write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
}
