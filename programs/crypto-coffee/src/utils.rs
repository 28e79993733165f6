use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};

use crate::{
    constants::{CREATOR_FEE_DISCOUNT_SIZE, MAX_FEE_PERCENTAGE, PERCENTAGE_DENOMINATOR},
    errors::ErrorCode,
    state::CreatorFeeDiscount,
};

/// Amounts moved by a single payment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub total_amount: u64,
    pub fee_amount: u64,
    pub creator_amount: u64,
}

/// Rejects fee percentages outside 0-100
pub fn validate_fee_percentage(fee_percentage: u64) -> Result<()> {
    require!(
        fee_percentage <= MAX_FEE_PERCENTAGE,
        ErrorCode::InvalidFeePercentage
    );
    Ok(())
}

/// Split `units * unit_price` into the platform fee and the creator's share.
/// Fee rounds down, so the creator receives any remainder.
/// Returns None on overflow
pub fn calculate_fee_split(units: u64, unit_price: u64, fee_percentage: u64) -> Option<FeeSplit> {
    let total_amount = units.checked_mul(unit_price)?;
    let fee_amount: u64 = (total_amount as u128)
        .checked_mul(fee_percentage as u128)?
        .checked_div(PERCENTAGE_DENOMINATOR as u128)?
        .try_into()
        .ok()?;
    let creator_amount = total_amount.checked_sub(fee_amount)?;

    Some(FeeSplit {
        total_amount,
        fee_amount,
        creator_amount,
    })
}

/// Picks the fee for a payment to `creator`: the discount when it belongs to
/// that creator, the platform default otherwise.
/// Second value reports whether the discount was used.
pub fn effective_fee_percentage(
    platform_fee_percentage: u64,
    discount: Option<&CreatorFeeDiscount>,
    creator: &Pubkey,
) -> (u64, bool) {
    match discount {
        Some(discount) if discount.creator == *creator => (discount.fee_percentage, true),
        _ => (platform_fee_percentage, false),
    }
}

/// Decodes a `CreatorFeeDiscount` from raw account data.
/// Returns None unless the account is a live record owned by this program
pub fn read_creator_fee_discount(owner: &Pubkey, data: &[u8]) -> Option<CreatorFeeDiscount> {
    if owner != &crate::ID
        || data.len() < CREATOR_FEE_DISCOUNT_SIZE
        || !data.starts_with(CreatorFeeDiscount::DISCRIMINATOR)
    {
        return None;
    }

    // Field offsets follow the #[repr(C)] layout after the discriminator
    let record = &data[CreatorFeeDiscount::DISCRIMINATOR.len()..];
    let creator = Pubkey::try_from(&record[..32]).ok()?;
    let fee_percentage = u64::from_le_bytes(record[32..40].try_into().ok()?);

    Some(CreatorFeeDiscount {
        creator,
        fee_percentage,
        bump: record[40],
    })
}

/// Moves lamports from a signer through the System Program.
/// Zero amounts are skipped.
pub fn transfer_lamports<'info>(
    from: &Signer<'info>,
    to: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = Transfer {
        from: from.to_account_info(),
        to: to.clone(),
    };
    let cpi_ctx = CpiContext::new(system_program.to_account_info(), cpi_accounts);
    system_program::transfer(cpi_ctx, amount)
}
