use anchor_lang::prelude::*;

#[event]
pub struct PlatformInitialized {
    pub authority: Pubkey,
    pub fee_destination: Pubkey,
    pub fee_percentage: u64,
    pub timestamp: i64,
}

#[event]
pub struct PlatformFeeUpdated {
    pub authority: Pubkey,
    pub old_fee_percentage: u64,
    pub new_fee_percentage: u64,
    pub timestamp: i64,
}

#[event]
pub struct FeeDestinationUpdated {
    pub authority: Pubkey,
    pub old_fee_destination: Pubkey,
    pub new_fee_destination: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct CreatorDiscountAdded {
    pub discount: Pubkey,
    pub creator: Pubkey,
    pub fee_percentage: u64,
    pub timestamp: i64,
}

#[event]
pub struct CreatorDiscountUpdated {
    pub discount: Pubkey,
    pub creator: Pubkey,
    pub old_fee_percentage: u64,
    pub new_fee_percentage: u64,
    pub timestamp: i64,
}

#[event]
pub struct CreatorDiscountRemoved {
    pub discount: Pubkey,
    pub creator: Pubkey,
    pub rent_recovered: u64,
    pub timestamp: i64,
}

#[event]
pub struct CoffeePurchased {
    pub contributor: Pubkey,
    pub creator: Pubkey,
    pub fee_destination: Pubkey,
    pub units: u64,
    pub unit_price: u64,
    pub total_amount: u64,
    pub fee_amount: u64,
    pub creator_amount: u64,
    pub fee_percentage: u64,
    pub discount_applied: bool,
    pub timestamp: i64,
}
