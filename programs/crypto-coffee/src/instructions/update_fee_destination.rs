use anchor_lang::prelude::*;

use crate::{
    constants::PLATFORM_STATE_SEED,
    errors::ErrorCode,
    events::FeeDestinationUpdated,
    state::PlatformState,
};

#[derive(Accounts)]
pub struct UpdateFeeDestination<'info> {
    #[account(
        mut,
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.load()?.bump,
        constraint = platform_state.load()?.authority == authority.key() @ ErrorCode::Unauthorized
    )]
    pub platform_state: AccountLoader<'info, PlatformState>,

    pub authority: Signer<'info>,

    /// CHECK: Must be a system-owned wallet; only the address is stored
    #[account(owner = System::id() @ ErrorCode::InvalidFeeDestination)]
    pub new_fee_destination: AccountInfo<'info>,
}

/// Points platform fees at a new wallet
/// Only callable by the platform authority
pub fn handler(ctx: Context<UpdateFeeDestination>) -> Result<()> {
    let new_fee_destination = ctx.accounts.new_fee_destination.key();

    let platform_state = &mut ctx.accounts.platform_state.load_mut()?;
    let old_fee_destination = platform_state.fee_destination;

    platform_state.fee_destination = new_fee_destination;

    emit!(FeeDestinationUpdated {
        authority: ctx.accounts.authority.key(),
        old_fee_destination,
        new_fee_destination,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
