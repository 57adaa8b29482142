#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use watermelon_types::poll_ledger::{ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::{
    config,
    error::ContractResult,
    instantiate,
    post::{self, NewPost},
    query,
    state::OWNER,
    vote,
};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    instantiate::instantiate(deps, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::AddPost {
            title,
            option1_name,
            option1_image_hash,
            option2_name,
            option2_image_hash,
        } => post::add_post(
            deps,
            env,
            info,
            NewPost {
                title,
                option1_name,
                option1_image_hash,
                option2_name,
                option2_image_hash,
            },
        ),
        ExecuteMsg::VoteOnPost {
            post_id,
            option,
        } => vote::vote_on_post(deps, env, info, post_id, option),
        ExecuteMsg::SetPostCreationFee {
            amount,
        } => config::set_post_creation_fee(deps, info, amount),
        ExecuteMsg::SetVoteFee {
            amount,
        } => config::set_vote_fee(deps, info, amount),
        ExecuteMsg::SetMaxPostTtl {
            duration,
        } => config::set_max_post_ttl(deps, info, duration),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    let res = match msg {
        QueryMsg::Owner {} => to_json_binary(&OWNER.query(deps.storage)?),
        QueryMsg::Config {} => to_json_binary(&query::query_config(deps)?),
        QueryMsg::PostPage {
            page,
        } => to_json_binary(&query::query_post_page(deps, page)?),
        QueryMsg::Post {
            post_id,
        } => to_json_binary(&query::query_post(deps, post_id)?),
        QueryMsg::PostLength {} => to_json_binary(&query::query_post_length(deps)?),
        QueryMsg::Vote {
            post_id,
            voter,
        } => to_json_binary(&query::query_vote(deps, post_id, voter)?),
    };
    res.map_err(Into::into)
}
