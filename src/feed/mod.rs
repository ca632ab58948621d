pub mod bookmarks;
pub mod controller;
pub mod state;

pub use bookmarks::Bookmarks;
pub use controller::{FeedController, FetchOutcome};
pub use state::FeedSnapshot;
