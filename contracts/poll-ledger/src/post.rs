use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response};
use watermelon_types::poll_ledger::Post;

use crate::{
    error::{ContractError, ContractResult},
    events::build_post_created_event,
    helpers::{assert_not_empty, expiry_time, paid_amount},
    state::{CONFIG, POSTS, POST_COUNT},
};

/// User supplied content of a post
pub struct NewPost {
    pub title: String,
    pub option1_name: String,
    pub option1_image_hash: String,
    pub option2_name: String,
    pub option2_image_hash: String,
}

impl NewPost {
    /// Checks run in a fixed order, callers rely on seeing the first violated rule
    fn validate(&self) -> ContractResult<()> {
        assert_not_empty(&self.title, "Must include a title")?;
        assert_not_empty(&self.option1_name, "Must include an name for option 1")?;
        assert_not_empty(&self.option2_name, "Must include an name for option 2")?;
        assert_not_empty(
            &self.option1_image_hash,
            "Must include an hash identifier for option 1 image",
        )?;
        assert_not_empty(
            &self.option2_image_hash,
            "Must include an hash identifier for option 2 image",
        )?;
        Ok(())
    }
}

pub fn add_post(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_post: NewPost,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;

    if paid_amount(&info.funds, &config.fee_denom) < config.post_creation_fee {
        return Err(ContractError::insufficient_payment("Not enough to create post"));
    }

    new_post.validate()?;

    let id = POST_COUNT.load(deps.storage)?;
    let created_at = env.block.time;
    let expires_at = expiry_time(created_at, config.max_post_ttl)?;

    // Destructuring to force a compile error if `NewPost` grows a field that isn't stored
    let NewPost {
        title,
        option1_name,
        option1_image_hash,
        option2_name,
        option2_image_hash,
    } = new_post;

    let post = Post {
        id,
        title,
        option1_name,
        option1_image_hash,
        option2_name,
        option2_image_hash,
        option1_votes: 0,
        option2_votes: 0,
        creator: info.sender.clone(),
        created_at,
        expires_at,
    };

    POSTS.save(deps.storage, id, &post)?;
    POST_COUNT.save(deps.storage, &(id + 1))?;

    Ok(Response::new()
        .set_data(to_json_binary(&id)?)
        .add_event(build_post_created_event(&post))
        .add_attribute("action", "add_post")
        .add_attribute("sender", info.sender)
        .add_attribute("post_id", id.to_string()))
}
