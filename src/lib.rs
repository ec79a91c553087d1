pub mod config;
pub mod error;
pub mod export;
pub mod logger;
pub mod pacing;
pub mod pipeline;
pub mod post_filter;
pub mod post_render;
pub mod rewrite;
pub mod slug;
pub mod target;
pub mod util;
mod test_data;
