use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
mod utils;

use instructions::*;

declare_id!("3ujQg6Cqf5XycaPGRbEqZkTwRQSDmE8ThKfZXhCMy5o9");

#[program]
pub mod crypto_coffee {
    use super::*;

    /// Creates the platform fee configuration
    /// Can only be called once; the signer becomes the platform authority
    pub fn initialize_platform(
        ctx: Context<InitializePlatform>,
        fee_percentage: u64,
    ) -> Result<()> {
        instructions::initialize_platform::handler(ctx, fee_percentage)
    }

    /// Updates the default platform fee percentage
    /// Only callable by the platform authority
    pub fn update_fee(ctx: Context<UpdateFee>, new_fee_percentage: u64) -> Result<()> {
        instructions::update_fee::handler(ctx, new_fee_percentage)
    }

    /// Updates the wallet receiving platform fees
    /// Only callable by the platform authority
    pub fn update_fee_destination(ctx: Context<UpdateFeeDestination>) -> Result<()> {
        instructions::update_fee_destination::handler(ctx)
    }

    /// Creates a per-creator fee override
    /// Only callable by the platform authority
    pub fn add_creator_fee_discount(
        ctx: Context<AddCreatorFeeDiscount>,
        fee_percentage: u64,
    ) -> Result<()> {
        instructions::add_creator_fee_discount::handler(ctx, fee_percentage)
    }

    /// Changes an existing creator fee override
    /// Only callable by the platform authority
    pub fn update_creator_fee_discount(
        ctx: Context<UpdateCreatorFeeDiscount>,
        new_fee_percentage: u64,
    ) -> Result<()> {
        instructions::update_creator_fee_discount::handler(ctx, new_fee_percentage)
    }

    /// Deletes a creator fee override and recovers its rent
    /// Only callable by the platform authority
    pub fn remove_creator_discount(ctx: Context<RemoveCreatorDiscount>) -> Result<()> {
        instructions::remove_creator_discount::handler(ctx)
    }

    /// Pays a creator, splitting the total with the platform fee destination
    /// Permissionless - any funded signer can contribute
    pub fn buy_coffee(ctx: Context<BuyCoffee>, units: u64, unit_price: u64) -> Result<()> {
        instructions::buy_coffee::handler(ctx, units, unit_price)
    }
}
