use anchor_lang::prelude::*;

use crate::{
    constants::PLATFORM_STATE_SEED,
    errors::ErrorCode,
    events::CoffeePurchased,
    state::PlatformState,
    utils::{
        calculate_fee_split, effective_fee_percentage, read_creator_fee_discount,
        transfer_lamports,
    },
};

#[derive(Accounts)]
pub struct BuyCoffee<'info> {
    #[account(
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.load()?.bump
    )]
    pub platform_state: AccountLoader<'info, PlatformState>,

    #[account(mut)]
    pub contributor: Signer<'info>,

    /// CHECK: Only receives lamports
    #[account(mut)]
    pub creator: AccountInfo<'info>,

    /// CHECK: Only receives lamports; must be the configured fee destination
    #[account(
        mut,
        constraint = fee_destination.key() == platform_state.load()?.fee_destination
            @ ErrorCode::InvalidFeeDestination
    )]
    pub fee_destination: AccountInfo<'info>,

    /// CHECK: Applied only when it is a live discount record for `creator`.
    /// Closed or foreign accounts fall back to the platform fee
    pub creator_fee_discount: Option<UncheckedAccount<'info>>,

    pub system_program: Program<'info, System>,
}

/// Pays a creator for `units` coffees at `unit_price` lamports each
/// The platform fee goes to the fee destination, the rest to the creator
pub fn handler(ctx: Context<BuyCoffee>, units: u64, unit_price: u64) -> Result<()> {
    require!(unit_price > 0, ErrorCode::InvalidUnitPrice);
    require!(units > 0, ErrorCode::InvalidUnits);

    let creator_key = ctx.accounts.creator.key();
    let platform_fee_percentage = ctx.accounts.platform_state.load()?.fee_percentage;

    // Copy the discount out so its data borrow ends before any CPI
    let discount = match &ctx.accounts.creator_fee_discount {
        Some(account) => read_creator_fee_discount(account.owner, &account.try_borrow_data()?),
        None => None,
    };
    let (fee_percentage, discount_applied) =
        effective_fee_percentage(platform_fee_percentage, discount.as_ref(), &creator_key);

    let split = calculate_fee_split(units, unit_price, fee_percentage)
        .ok_or(ErrorCode::MathOverflow)?;

    // Both legs run in this instruction, so a failed debit reverts the other
    transfer_lamports(
        &ctx.accounts.contributor,
        &ctx.accounts.creator,
        &ctx.accounts.system_program,
        split.creator_amount,
    )?;
    transfer_lamports(
        &ctx.accounts.contributor,
        &ctx.accounts.fee_destination,
        &ctx.accounts.system_program,
        split.fee_amount,
    )?;

    emit!(CoffeePurchased {
        contributor: ctx.accounts.contributor.key(),
        creator: creator_key,
        fee_destination: ctx.accounts.fee_destination.key(),
        units,
        unit_price,
        total_amount: split.total_amount,
        fee_amount: split.fee_amount,
        creator_amount: split.creator_amount,
        fee_percentage,
        discount_applied,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
