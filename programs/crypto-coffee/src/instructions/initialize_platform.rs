use anchor_lang::prelude::*;

use crate::{
    constants::{PLATFORM_STATE_SEED, PLATFORM_STATE_SIZE},
    errors::ErrorCode,
    events::PlatformInitialized,
    state::PlatformState,
    utils::validate_fee_percentage,
};

#[derive(Accounts)]
pub struct InitializePlatform<'info> {
    #[account(
        init,
        payer = authority,
        space = PLATFORM_STATE_SIZE,
        seeds = [PLATFORM_STATE_SEED],
        bump
    )]
    pub platform_state: AccountLoader<'info, PlatformState>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Must be a system-owned wallet; payments are checked against its address
    #[account(owner = System::id() @ ErrorCode::InvalidFeeDestination)]
    pub fee_destination: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the platform singleton
/// A second call fails because the PDA is already in use
pub fn handler(ctx: Context<InitializePlatform>, fee_percentage: u64) -> Result<()> {
    validate_fee_percentage(fee_percentage)?;

    let platform_state = &mut ctx.accounts.platform_state.load_init()?;

    platform_state.authority = ctx.accounts.authority.key();
    platform_state.fee_destination = ctx.accounts.fee_destination.key();
    platform_state.fee_percentage = fee_percentage;
    platform_state.bump = ctx.bumps.platform_state;

    emit!(PlatformInitialized {
        authority: ctx.accounts.authority.key(),
        fee_destination: ctx.accounts.fee_destination.key(),
        fee_percentage,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
