use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;
use watermelon_types::poll_ledger::{Config, Post, PostPageResponse, POST_PAGE_SIZE};

use crate::{
    error::ContractResult,
    helpers::load_post,
    state::{CONFIG, POSTS, POST_COUNT, VOTES},
};

pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_post_length(deps: Deps) -> StdResult<u64> {
    POST_COUNT.load(deps.storage)
}

pub fn query_post(deps: Deps, post_id: u64) -> ContractResult<Post> {
    load_post(deps.storage, post_id)
}

/// Pages past the last post are empty rather than an error
pub fn query_post_page(deps: Deps, page: u32) -> StdResult<PostPageResponse> {
    let start = u64::from(page) * u64::from(POST_PAGE_SIZE);

    let posts = POSTS
        .range(deps.storage, Some(Bound::inclusive(start)), None, Order::Ascending)
        .take(POST_PAGE_SIZE as usize)
        .map(|item| Ok(item?.1))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PostPageResponse {
        count: posts.len() as u32,
        posts,
    })
}

pub fn query_vote(deps: Deps, post_id: u64, voter: String) -> ContractResult<Option<u8>> {
    load_post(deps.storage, post_id)?;
    let voter = deps.api.addr_validate(&voter)?;
    Ok(VOTES.may_load(deps.storage, (post_id, &voter))?)
}
