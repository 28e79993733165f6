// PDA seeds
pub const PLATFORM_STATE_SEED: &[u8] = b"platform_state";
pub const CREATOR_FEE_DISCOUNT_SEED: &[u8] = b"creator_fee_discount";

// Fee configuration
pub const MAX_FEE_PERCENTAGE: u64 = 100;
pub const PERCENTAGE_DENOMINATOR: u64 = 100;

// Account sizes for zero-copy structs
// PlatformState: discriminator (8) + authority (32) + fee_destination (32)
//   + fee_percentage (8) + bump (1) + padding for 8-byte alignment (7)
pub const PLATFORM_STATE_SIZE: usize = 8 + 32 + 32 + 8 + 1 + 7; // 88 bytes

// CreatorFeeDiscount: discriminator (8) + creator (32) + fee_percentage (8)
//   + bump (1) + padding for 8-byte alignment (7)
pub const CREATOR_FEE_DISCOUNT_SIZE: usize = 8 + 32 + 8 + 1 + 7; // 56 bytes
