//! Test helpers for Crypto Coffee Mollusk tests
//!
//! NOTE: This module is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::* (not modular crates like solana_pubkey)

#![allow(dead_code)]

pub mod accounts;
pub mod errors;

pub use accounts::*;
pub use errors::*;
pub use instructions::*;
pub use serialization::*;

use mollusk_svm::Mollusk;

/// Setup Mollusk for testing
///
/// Uses SBF_OUT_DIR to tell Mollusk where to find the program binary.
/// For Anchor workspace: tests are in programs/crypto-coffee/tests,
/// binary is at workspace_root/target/deploy/
/// The System Program is a Mollusk builtin, so lamport transfers work as-is.
pub fn setup_mollusk() -> Mollusk {
    // From programs/crypto-coffee/, go up 2 levels to workspace root
    let deploy_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent() // programs/
        .unwrap()
        .parent() // workspace root
        .unwrap()
        .join("target/deploy");

    std::env::set_var("SBF_OUT_DIR", deploy_dir);

    // Just pass the program name, Mollusk will find it via SBF_OUT_DIR
    Mollusk::new(&instructions::PROGRAM_ID, "crypto_coffee")
}
