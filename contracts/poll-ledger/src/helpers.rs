use cosmwasm_std::{Coin, Storage, Timestamp, Uint128, Uint64};
use watermelon_types::poll_ledger::Post;

use crate::{
    error::{ContractError, ContractResult},
    state::POSTS,
};

/// Total amount of `denom` sent along with the message. Coins of any other denom are ignored and
/// simply stay in the contract's balance.
pub(crate) fn paid_amount(funds: &[Coin], denom: &str) -> Uint128 {
    funds.iter().filter(|coin| coin.denom == denom).map(|coin| coin.amount).sum()
}

pub(crate) fn assert_not_empty(value: &str, reason: &str) -> ContractResult<()> {
    if value.is_empty() {
        return Err(ContractError::invalid_input(reason));
    }
    Ok(())
}

/// Load a post, treating any id outside of the stored range as invalid
pub(crate) fn load_post(storage: &dyn Storage, post_id: u64) -> ContractResult<Post> {
    POSTS.may_load(storage, post_id)?.ok_or_else(ContractError::invalid_post_id)
}

/// `created_at + ttl` seconds, as an error instead of a panic when it leaves the nanosecond range
pub(crate) fn expiry_time(created_at: Timestamp, ttl: u64) -> ContractResult<Timestamp> {
    let ttl_nanos = Uint64::new(ttl).checked_mul(Uint64::new(1_000_000_000))?;
    let expires_at = Uint64::new(created_at.nanos()).checked_add(ttl_nanos)?;
    Ok(Timestamp::from_nanos(expires_at.u64()))
}

/// Same rules the Cosmos SDK applies to native denoms: 3 - 128 characters, starting with a letter
/// and followed by letters, digits or one of `/ : . _ -`
pub(crate) fn validate_fee_denom(denom: &str) -> ContractResult<()> {
    let invalid = |reason: &str| ContractError::invalid_input(format!("Invalid fee denom: {reason}"));

    if denom.len() < 3 || denom.len() > 128 {
        return Err(invalid("length must be between 3 and 128"));
    }

    let mut chars = denom.chars();
    if !chars.next().is_some_and(|first| first.is_ascii_alphabetic()) {
        return Err(invalid("first character must be a letter"));
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-')) {
        return Err(invalid("unsupported character"));
    }

    Ok(())
}
