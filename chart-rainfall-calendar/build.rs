//! Build script for chart-rainfall-calendar.
//!
//! Copies the rainfall fixture to OUT_DIR so it can be embedded via
//! `include_str!` at compile time. A missing fixture becomes an empty JSON
//! array; a fixture that is not valid JSON fails the build early.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let src_path = "../fixtures/rainfall.json";
    let src = Path::new(src_path);
    let dest = Path::new(&out_dir).join("rainfall.json");

    if src.exists() {
        let text = fs::read_to_string(src)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", src_path, e));
        if let Err(e) = serde_json::from_str::<serde_json::Value>(&text) {
            panic!("Fixture {} is not valid JSON: {}", src_path, e);
        }
        fs::write(&dest, text).unwrap_or_else(|e| {
            panic!("Failed to write {}: {}", dest.display(), e);
        });
    } else {
        fs::write(&dest, "[]").unwrap();
        println!(
            "cargo:warning=Fixture file {} not found, using empty placeholder",
            src_path
        );
    }

    println!("cargo:rerun-if-changed={}", src_path);
    println!("cargo:rerun-if-changed=build.rs");
}
