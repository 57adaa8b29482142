use cosmwasm_std::{DepsMut, Response, Uint128};
use cw2::set_contract_version;
use mars_owner::OwnerInit::SetInitialOwner;
use watermelon_types::poll_ledger::{Config, InstantiateMsg};

use crate::{
    contract::{CONTRACT_NAME, CONTRACT_VERSION},
    error::ContractResult,
    helpers::validate_fee_denom,
    state::{CONFIG, OWNER, POST_COUNT},
};

pub const DEFAULT_POST_CREATION_FEE: Uint128 = Uint128::new(10_000);
pub const DEFAULT_VOTE_FEE: Uint128 = Uint128::new(5_000);
/// One week
pub const DEFAULT_MAX_POST_TTL: u64 = 7 * 24 * 60 * 60;

pub fn instantiate(deps: DepsMut, msg: InstantiateMsg) -> ContractResult<Response> {
    set_contract_version(deps.storage, format!("crates.io:{CONTRACT_NAME}"), CONTRACT_VERSION)?;

    OWNER.initialize(
        deps.storage,
        deps.api,
        SetInitialOwner {
            owner: msg.owner.clone(),
        },
    )?;

    validate_fee_denom(&msg.fee_denom)?;

    let config = Config {
        fee_denom: msg.fee_denom,
        post_creation_fee: DEFAULT_POST_CREATION_FEE,
        vote_fee: DEFAULT_VOTE_FEE,
        max_post_ttl: DEFAULT_MAX_POST_TTL,
    };
    CONFIG.save(deps.storage, &config)?;
    POST_COUNT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", msg.owner)
        .add_attribute("fee_denom", config.fee_denom))
}
