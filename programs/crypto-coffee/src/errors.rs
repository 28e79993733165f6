use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Fee percentage must be between 0 and 100")]
    InvalidFeePercentage,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Fee destination does not match platform configuration")]
    InvalidFeeDestination,

    #[msg("Must buy at least one coffee")]
    InvalidUnits,

    #[msg("Unit price must be greater than 0")]
    InvalidUnitPrice,

    #[msg("Math overflow")]
    MathOverflow,
}
