use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::{
    error::{ContractError, ContractResult},
    events::build_vote_cast_event,
    helpers::{load_post, paid_amount},
    state::{CONFIG, POSTS, VOTES},
};

pub fn vote_on_post(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    post_id: u64,
    option: u8,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;

    if paid_amount(&info.funds, &config.fee_denom) < config.vote_fee {
        return Err(ContractError::insufficient_payment("Not enough to pay fee"));
    }

    let mut post = load_post(deps.storage, post_id)?;

    if option > 1 {
        return Err(ContractError::invalid_input("Invalid vote option"));
    }

    if post.is_expired(env.block.time) {
        return Err(ContractError::invalid_state("Post has expired"));
    }

    if VOTES.has(deps.storage, (post_id, &info.sender)) {
        return Err(ContractError::invalid_state("Cannot vote twice"));
    }

    if option == 0 {
        post.option1_votes += 1;
    } else {
        post.option2_votes += 1;
    }

    POSTS.save(deps.storage, post_id, &post)?;
    VOTES.save(deps.storage, (post_id, &info.sender), &option)?;

    Ok(Response::new()
        .add_event(build_vote_cast_event(&post, info.sender.as_str(), option))
        .add_attribute("action", "vote_on_post")
        .add_attribute("sender", info.sender)
        .add_attribute("post_id", post_id.to_string())
        .add_attribute("option", option.to_string()))
}
