use anchor_lang::prelude::*;

/// Global platform fee configuration (single instance)
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct PlatformState {
    /// Authority that can update fees and manage creator discounts
    pub authority: Pubkey,
    /// Wallet that receives the platform's cut of every payment
    pub fee_destination: Pubkey,
    /// Default platform fee, whole percent (0-100)
    pub fee_percentage: u64,
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
}

/// Per-creator fee override. Existence of the account is the discount.
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct CreatorFeeDiscount {
    /// Creator this discount applies to
    pub creator: Pubkey,
    /// Fee charged on payments to this creator, whole percent (0-100)
    pub fee_percentage: u64,
    pub bump: u8,
}

// Compile-time size assertions to catch accidental struct changes
// PlatformState: 32 + 32 + 8 + 1 = 73, padded to 80 for u64 alignment
const _: () = assert!(std::mem::size_of::<PlatformState>() == 80); // 88 - 8 (discriminator added by Anchor)

// CreatorFeeDiscount: 32 + 8 + 1 = 41, padded to 48
const _: () = assert!(std::mem::size_of::<CreatorFeeDiscount>() == 48); // 56 - 8 (discriminator added by Anchor)
