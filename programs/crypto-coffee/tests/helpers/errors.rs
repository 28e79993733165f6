//! Error code re-exports from the program
//!
//! We re-export the program's ErrorCode enum for use in tests.
//! Anchor custom errors start at 6000.

pub use crypto_coffee::errors::ErrorCode;

/// System Program `SystemError::AccountAlreadyInUse`
pub const SYSTEM_ACCOUNT_ALREADY_IN_USE: u32 = 0;

/// System Program `SystemError::ResultWithNegativeLamports` (insufficient funds)
pub const SYSTEM_RESULT_WITH_NEGATIVE_LAMPORTS: u32 = 1;

/// Anchor `ErrorCode::AccountOwnedByWrongProgram`, raised when a typed account
/// is missing or not owned by the program
pub const ANCHOR_ACCOUNT_OWNED_BY_WRONG_PROGRAM: u32 = 3007;

/// Convert ErrorCode to u32 for ProgramError::Custom
pub fn error_code(code: ErrorCode) -> u32 {
    // Anchor error codes start at 6000
    6000 + code as u32
}
