//! Account creation helpers for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! In 0.5.1, all imports come from solana_sdk::* (not modular crates like solana_pubkey)

use {
    mollusk_svm::Mollusk,
    // 0.5.1: All types from solana_sdk, not modular crates
    solana_sdk::{account::Account, pubkey::Pubkey, rent::Rent, system_program},
};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Create a system-owned account with given lamports
pub fn system_account(lamports: u64) -> Account {
    Account {
        lamports,
        data: vec![],
        owner: system_program::id(),
        executable: false,
        rent_epoch: 0,
    }
}

/// Create an uninitialized account (for init)
pub fn uninitialized_account() -> Account {
    system_account(0)
}

/// Create a program-owned account with data
pub fn program_account(lamports: u64, data: Vec<u8>, owner: Pubkey) -> Account {
    Account {
        lamports,
        data,
        owner,
        executable: false,
        rent_epoch: 0,
    }
}

/// Create a rent-exempt account owned by the program under test
pub fn rent_exempt_program_account(rent: &Rent, data: Vec<u8>) -> Account {
    program_account(
        rent.minimum_balance(data.len()),
        data,
        super::instructions::PROGRAM_ID,
    )
}

/// Get rent from Mollusk
pub fn get_rent(mollusk: &Mollusk) -> Rent {
    mollusk.sysvars.rent.clone()
}

/// Create a system program account tuple for test setup
pub fn system_program_account() -> (Pubkey, Account) {
    (
        system_program::id(),
        Account {
            lamports: 1,
            data: vec![],
            owner: solana_sdk::native_loader::id(),
            executable: true,
            rent_epoch: 0,
        },
    )
}
