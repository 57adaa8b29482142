use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use mars_owner::Owner;
use watermelon_types::poll_ledger::{Config, Post};

pub const OWNER: Owner = Owner::new("owner");
pub const CONFIG: Item<Config> = Item::new("config");

/// Posts keyed by id. Ids are dense, so the number of posts is also the next id.
pub const POSTS: Map<u64, Post> = Map::new("posts");
pub const POST_COUNT: Item<u64> = Item::new("post_count");

/// (post id, voter) => chosen option
pub const VOTES: Map<(u64, &Addr), u8> = Map::new("votes");
