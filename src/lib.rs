//! # Newsdesk
//!
//! A terminal news client: paginated headlines, keyword search and
//! session bookmarks on top of a JSON news API.
//!
//! ## Architecture
//!
//! ```text
//! Shell → FeedController → ArticleTransport → Normalizer → FeedSnapshot → Shell
//! ```
//!
//! - [`transport`]: News API access behind the [`ArticleTransport`](transport::ArticleTransport) trait
//! - [`normalizer`]: Fills defaults for partial article records
//! - [`feed`]: The feed controller owning pagination, search mode, loading state and bookmarks
//! - [`cli`]: Command-line front end and interactive shell
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive session against the built-in sample feed
//! newsdesk --offline
//!
//! # First three pages of latest news
//! NEWSDESK_API_KEY=... newsdesk browse --pages 3
//!
//! # Keyword search
//! NEWSDESK_API_KEY=... newsdesk search "climate"
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires configuration,
/// transport and feed controller together.
pub mod app;

/// Command-line interface using clap.
///
/// - `browse [--pages N]` - Print the latest news
/// - `search <query>` - Search news
/// - `shell` - Interactive session (default)
pub mod cli;

/// Configuration loaded from `~/.config/newsdesk/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Article`](domain::Article): Normalized news article
/// - [`RawArticle`](domain::RawArticle): Article as sent by the API
/// - [`NewsPage`](domain::NewsPage): One page of API results
pub mod domain;

/// Feed state: the [`FeedController`](feed::FeedController) and its snapshots.
pub mod feed;

/// Raw record to [`Article`](domain::Article) conversion.
pub mod normalizer;

/// News API access.
///
/// - [`ArticleTransport`](transport::ArticleTransport): Async trait for page fetching
/// - [`HttpTransport`](transport::http_transport::HttpTransport): reqwest-based implementation
/// - [`OfflineTransport`](transport::offline::OfflineTransport): Built-in sample feed
pub mod transport;
