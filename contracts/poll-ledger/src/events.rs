use cosmwasm_std::Event;
use watermelon_types::poll_ledger::Post;

pub fn build_post_created_event(post: &Post) -> Event {
    Event::new("post_created")
        .add_attribute("post_id", post.id.to_string())
        .add_attribute("creator", post.creator.as_str())
        .add_attribute("title", post.title.as_str())
        .add_attribute("expires_at", post.expires_at.seconds().to_string())
}

pub fn build_vote_cast_event(post: &Post, voter: &str, option: u8) -> Event {
    Event::new("vote_cast")
        .add_attribute("post_id", post.id.to_string())
        .add_attribute("voter", voter)
        .add_attribute("option", option.to_string())
        .add_attribute("option1_votes", post.option1_votes.to_string())
        .add_attribute("option2_votes", post.option2_votes.to_string())
        .add_attribute("total_votes", post.total_votes().to_string())
}
