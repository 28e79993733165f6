use anchor_lang::prelude::*;

use crate::{
    constants::{CREATOR_FEE_DISCOUNT_SEED, PLATFORM_STATE_SEED},
    errors::ErrorCode,
    events::CreatorDiscountRemoved,
    state::{CreatorFeeDiscount, PlatformState},
};

#[derive(Accounts)]
pub struct RemoveCreatorDiscount<'info> {
    #[account(
        mut,
        seeds = [CREATOR_FEE_DISCOUNT_SEED, creator.key().as_ref()],
        bump = creator_discount.load()?.bump,
        close = authority
    )]
    pub creator_discount: AccountLoader<'info, CreatorFeeDiscount>,

    /// CHECK: Only used as a PDA seed
    pub creator: AccountInfo<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.load()?.bump,
        constraint = platform_state.load()?.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub platform_state: AccountLoader<'info, PlatformState>,
}

/// Deletes a creator discount and returns its rent to the authority
/// Payments to the creator fall back to the platform fee afterwards
pub fn handler(ctx: Context<RemoveCreatorDiscount>) -> Result<()> {
    let discount_key = ctx.accounts.creator_discount.key();
    let creator = ctx.accounts.creator.key();
    let rent_recovered = ctx.accounts.creator_discount.to_account_info().lamports();

    emit!(CreatorDiscountRemoved {
        discount: discount_key,
        creator,
        rent_recovered,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
