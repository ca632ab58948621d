use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{NewsdeskError, Result};
use crate::config::ApiConfig;
use crate::domain::NewsPage;
use crate::transport::{ArticleTransport, PageRequest};

const NEWS_PATH: &str = "v1/news";
const API_KEY_HEADER: &str = "x-api-key";

pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                NewsdeskError::Config(
                    "No API key configured (set api.api_key or NEWSDESK_API_KEY)".into(),
                )
            })?;

        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: Self::endpoint(&config.base_url)?,
            api_key,
        })
    }

    fn endpoint(base_url: &str) -> Result<Url> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(NEWS_PATH)?)
    }

    /// Full request URL for `request`, including query parameters.
    pub fn request_url(&self, request: &PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            match request {
                PageRequest::Browse { cursor, page_size } => {
                    if let Some(cursor) = cursor {
                        pairs.append_pair("cursor", cursor);
                    }
                    pairs.append_pair("per_page", &page_size.to_string());
                }
                PageRequest::Search { query, page_size } => {
                    pairs.append_pair("q", query);
                    pairs.append_pair("per_page", &page_size.to_string());
                }
            }
        }
        url
    }
}

#[async_trait]
impl ArticleTransport for HttpTransport {
    async fn fetch_page(&self, request: &PageRequest) -> Result<NewsPage> {
        let url = self.request_url(request);
        tracing::debug!(%url, "Requesting news page");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NewsdeskError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        let page: NewsPage = serde_json::from_slice(&body)?;
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.into(),
            api_key: Some("secret".into()),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn test_browse_url_first_page() {
        let transport = HttpTransport::new(&config("https://api.example.com/")).unwrap();
        let url = transport.request_url(&PageRequest::Browse {
            cursor: None,
            page_size: 40,
        });
        assert_eq!(url.as_str(), "https://api.example.com/v1/news?per_page=40");
    }

    #[test]
    fn test_browse_url_with_cursor() {
        let transport = HttpTransport::new(&config("https://api.example.com")).unwrap();
        let url = transport.request_url(&PageRequest::Browse {
            cursor: Some("c1".into()),
            page_size: 10,
        });
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/news?cursor=c1&per_page=10"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let transport = HttpTransport::new(&config("https://api.example.com/proxy")).unwrap();
        let url = transport.request_url(&PageRequest::Search {
            query: "rust lang".into(),
            page_size: 40,
        });
        assert_eq!(
            url.as_str(),
            "https://api.example.com/proxy/v1/news?q=rust+lang&per_page=40"
        );
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let config = ApiConfig {
            api_key: None,
            ..ApiConfig::default()
        };
        let err = HttpTransport::new(&config).err().unwrap();
        assert!(matches!(err, NewsdeskError::Config(_)));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = HttpTransport::new(&config("not a url")).err().unwrap();
        assert!(matches!(err, NewsdeskError::InvalidUrl(_)));
    }
}
