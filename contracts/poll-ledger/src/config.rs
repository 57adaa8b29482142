use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};
use watermelon_types::poll_ledger::Config;

use crate::{
    error::{ContractError, ContractResult},
    state::{CONFIG, OWNER},
};

/// Longest lifetime a post can be given, 100 years
pub const MAX_POST_TTL_LIMIT: u64 = 100 * 365 * 24 * 60 * 60;

/// Owner-only: apply `update` to the stored config, nothing is saved if it fails
fn update_config(
    deps: DepsMut,
    info: &MessageInfo,
    update: impl FnOnce(&mut Config) -> ContractResult<()>,
) -> ContractResult<()> {
    OWNER.assert_owner(deps.storage, &info.sender)?;
    cw_utils::nonpayable(info)?;

    let mut config = CONFIG.load(deps.storage)?;
    update(&mut config)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(())
}

pub fn set_post_creation_fee(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> ContractResult<Response> {
    update_config(deps, &info, |config| {
        config.post_creation_fee = amount;
        Ok(())
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_post_creation_fee")
        .add_attribute("value", amount))
}

pub fn set_vote_fee(deps: DepsMut, info: MessageInfo, amount: Uint128) -> ContractResult<Response> {
    update_config(deps, &info, |config| {
        config.vote_fee = amount;
        Ok(())
    })?;

    Ok(Response::new().add_attribute("action", "set_vote_fee").add_attribute("value", amount))
}

/// Only affects posts created afterwards, existing posts keep their `expires_at`
pub fn set_max_post_ttl(deps: DepsMut, info: MessageInfo, duration: u64) -> ContractResult<Response> {
    update_config(deps, &info, |config| {
        if duration > MAX_POST_TTL_LIMIT {
            return Err(ContractError::invalid_input(format!(
                "Max post TTL must be at most {MAX_POST_TTL_LIMIT} seconds"
            )));
        }
        config.max_post_ttl = duration;
        Ok(())
    })?;

    Ok(Response::new()
        .add_attribute("action", "set_max_post_ttl")
        .add_attribute("value", duration.to_string()))
}
