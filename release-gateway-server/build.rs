//! Stamps `/version` with the release tag and build time.
//!
//! Packaged builds without a git checkout set `RELEASE_GATEWAY_VERSION`.

use std::process::Command;

fn git_describe() -> Option<String> {
    let output = Command::new("git").args(["describe", "--tags", "--always", "--dirty"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    (!described.is_empty()).then(|| described.to_string())
}

fn main() {
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/refs/tags");
    println!("cargo:rerun-if-env-changed=RELEASE_GATEWAY_VERSION");

    let version = std::env::var("RELEASE_GATEWAY_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(git_describe)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    println!("cargo:rustc-env=GIT_VERSION={}", version);

    let build_time = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
}
