pub mod article;

pub use article::{Article, NewsPage, RawArticle};
