mod msg;
mod post;

pub use msg::*;
pub use post::*;
