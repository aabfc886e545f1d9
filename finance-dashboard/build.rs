//! Build script for finance-dashboard.
//!
//! Copies the seed category CSV into OUT_DIR for `include_str!`. A missing
//! fixture becomes an empty placeholder so the app still builds and simply
//! starts with no categories.

use std::env;
use std::fs;
use std::path::Path;

const SEED_CSV: &str = "../fixtures/categories.csv";
const EXPECTED_HEADER: &str = "NAME,BUDGET";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("categories.csv");

    match fs::read_to_string(SEED_CSV) {
        Ok(contents) => {
            let header = contents.lines().next().unwrap_or("").trim();
            if header != EXPECTED_HEADER {
                println!(
                    "cargo:warning={} starts with {:?}, expected {:?}",
                    SEED_CSV, header, EXPECTED_HEADER
                );
            }
            fs::write(&dest, contents).unwrap_or_else(|e| {
                panic!("Failed to write {}: {}", dest.display(), e);
            });
        }
        Err(_) => {
            fs::write(&dest, "").unwrap();
            println!(
                "cargo:warning=Fixture file {} not found, using empty placeholder",
                SEED_CSV
            );
        }
    }

    println!("cargo:rerun-if-changed={}", SEED_CSV);
    println!("cargo:rerun-if-changed=build.rs");
}
