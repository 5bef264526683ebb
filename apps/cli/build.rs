//! Injects `EXAMPLE_VERSION` into the crate at compile time.
//!
//! The package version is used unless the build environment provides its own
//! `EXAMPLE_VERSION` (e.g. a release pipeline stamping a tag).

fn main() {
    let version = std::env::var("EXAMPLE_VERSION")
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .or_else(|| std::env::var("CARGO_PKG_VERSION").ok())
        .unwrap_or_else(|| "unknown".to_owned());

    println!("cargo:rustc-env=EXAMPLE_VERSION={version}");
    println!("cargo:rerun-if-env-changed=EXAMPLE_VERSION");
    println!("cargo:rerun-if-changed=build.rs");
}
