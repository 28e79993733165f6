use anchor_lang::prelude::*;

use crate::{
    constants::{CREATOR_FEE_DISCOUNT_SEED, CREATOR_FEE_DISCOUNT_SIZE, PLATFORM_STATE_SEED},
    errors::ErrorCode,
    events::CreatorDiscountAdded,
    state::{CreatorFeeDiscount, PlatformState},
    utils::validate_fee_percentage,
};

#[derive(Accounts)]
pub struct AddCreatorFeeDiscount<'info> {
    #[account(
        init,
        payer = authority,
        space = CREATOR_FEE_DISCOUNT_SIZE,
        seeds = [CREATOR_FEE_DISCOUNT_SEED, creator.key().as_ref()],
        bump
    )]
    pub creator_discount: AccountLoader<'info, CreatorFeeDiscount>,

    #[account(
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.load()?.bump,
        constraint = platform_state.load()?.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub platform_state: AccountLoader<'info, PlatformState>,

    /// CHECK: Only used as a PDA seed and stored as the discount owner
    pub creator: AccountInfo<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Gives a creator their own fee percentage
/// Only callable by the platform authority; one discount per creator
pub fn handler(ctx: Context<AddCreatorFeeDiscount>, fee_percentage: u64) -> Result<()> {
    validate_fee_percentage(fee_percentage)?;

    let creator = ctx.accounts.creator.key();
    let creator_discount = &mut ctx.accounts.creator_discount.load_init()?;

    creator_discount.creator = creator;
    creator_discount.fee_percentage = fee_percentage;
    creator_discount.bump = ctx.bumps.creator_discount;

    emit!(CreatorDiscountAdded {
        discount: ctx.accounts.creator_discount.key(),
        creator,
        fee_percentage,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
