use anchor_lang::prelude::*;

use crate::{
    constants::{CREATOR_FEE_DISCOUNT_SEED, PLATFORM_STATE_SEED},
    errors::ErrorCode,
    events::CreatorDiscountUpdated,
    state::{CreatorFeeDiscount, PlatformState},
    utils::validate_fee_percentage,
};

#[derive(Accounts)]
pub struct UpdateCreatorFeeDiscount<'info> {
    #[account(
        mut,
        seeds = [CREATOR_FEE_DISCOUNT_SEED, creator.key().as_ref()],
        bump = creator_discount.load()?.bump
    )]
    pub creator_discount: AccountLoader<'info, CreatorFeeDiscount>,

    #[account(
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.load()?.bump,
        constraint = platform_state.load()?.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub platform_state: AccountLoader<'info, PlatformState>,

    /// CHECK: Only used as a PDA seed
    pub creator: AccountInfo<'info>,

    pub authority: Signer<'info>,
}

/// Changes an existing creator discount in place
/// Only callable by the platform authority
pub fn handler(ctx: Context<UpdateCreatorFeeDiscount>, new_fee_percentage: u64) -> Result<()> {
    validate_fee_percentage(new_fee_percentage)?;

    let creator_discount = &mut ctx.accounts.creator_discount.load_mut()?;
    let old_fee_percentage = creator_discount.fee_percentage;

    creator_discount.fee_percentage = new_fee_percentage;

    emit!(CreatorDiscountUpdated {
        discount: ctx.accounts.creator_discount.key(),
        creator: creator_discount.creator,
        old_fee_percentage,
        new_fee_percentage,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
