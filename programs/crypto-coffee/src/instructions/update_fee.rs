use anchor_lang::prelude::*;

use crate::{
    constants::PLATFORM_STATE_SEED,
    errors::ErrorCode,
    events::PlatformFeeUpdated,
    state::PlatformState,
    utils::validate_fee_percentage,
};

#[derive(Accounts)]
pub struct UpdateFee<'info> {
    #[account(
        mut,
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.load()?.bump,
        constraint = platform_state.load()?.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub platform_state: AccountLoader<'info, PlatformState>,

    pub authority: Signer<'info>,
}

/// Replaces the platform default fee
/// Only callable by the platform authority
pub fn handler(ctx: Context<UpdateFee>, new_fee_percentage: u64) -> Result<()> {
    validate_fee_percentage(new_fee_percentage)?;

    let platform_state = &mut ctx.accounts.platform_state.load_mut()?;
    let old_fee_percentage = platform_state.fee_percentage;

    platform_state.fee_percentage = new_fee_percentage;

    emit!(PlatformFeeUpdated {
        authority: ctx.accounts.authority.key(),
        old_fee_percentage,
        new_fee_percentage,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
