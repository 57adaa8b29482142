use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};

#[cw_serde]
pub struct Post {
    /// Position of the post in creation order, starting at 0
    pub id: u64,
    pub title: String,
    pub option1_name: String,
    /// Content hash identifying the image of the first option
    pub option1_image_hash: String,
    pub option2_name: String,
    /// Content hash identifying the image of the second option
    pub option2_image_hash: String,
    pub option1_votes: u64,
    pub option2_votes: u64,
    pub creator: Addr,
    pub created_at: Timestamp,
    /// `created_at` plus the TTL in effect when the post was created
    pub expires_at: Timestamp,
}

impl Post {
    /// A post stops accepting votes once the block time is past `expires_at`
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }

    pub fn total_votes(&self) -> u64 {
        self.option1_votes.saturating_add(self.option2_votes)
    }
}
