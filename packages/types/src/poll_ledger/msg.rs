use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use super::post::Post;

/// Number of posts returned by a full `PostPage` query
pub const POST_PAGE_SIZE: u32 = 10;

#[cw_serde]
pub struct InstantiateMsg {
    /// Contract's owner, the only address allowed to change fees and post TTL
    pub owner: String,
    /// Native denom both fees are paid in
    pub fee_denom: String,
}

#[cw_serde]
pub struct Config {
    pub fee_denom: String,
    /// Minimum amount of `fee_denom` that must accompany `AddPost`
    pub post_creation_fee: Uint128,
    /// Minimum amount of `fee_denom` that must accompany `VoteOnPost`
    pub vote_fee: Uint128,
    /// Lifetime in seconds given to posts created from now on
    pub max_post_ttl: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Create a new two-option poll. Must be paid with at least `post_creation_fee`.
    AddPost {
        title: String,
        option1_name: String,
        option1_image_hash: String,
        option2_name: String,
        option2_image_hash: String,
    },
    /// Cast the sender's single vote on a post. Option `0` is the first option, `1` the second.
    VoteOnPost {
        post_id: u64,
        option: u8,
    },
    SetPostCreationFee {
        amount: Uint128,
    },
    SetVoteFee {
        amount: Uint128,
    },
    SetMaxPostTtl {
        /// Seconds
        duration: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(mars_owner::OwnerResponse)]
    Owner {},

    #[returns(Config)]
    Config {},

    /// Zero-indexed page of `POST_PAGE_SIZE` posts in creation order
    #[returns(PostPageResponse)]
    PostPage {
        page: u32,
    },

    #[returns(Post)]
    Post {
        post_id: u64,
    },

    #[returns(u64)]
    PostLength {},

    /// Option chosen by `voter` on the post, `None` if they haven't voted
    #[returns(Option<u8>)]
    Vote {
        post_id: u64,
        voter: String,
    },
}

#[cw_serde]
pub struct PostPageResponse {
    /// Number of posts actually returned, less than `POST_PAGE_SIZE` on the last page
    pub count: u32,
    pub posts: Vec<Post>,
}
