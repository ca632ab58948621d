//! Scripted transport shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use newsdesk::app::{NewsdeskError, Result};
use newsdesk::domain::{NewsPage, RawArticle};
use newsdesk::feed::FeedController;
use newsdesk::transport::{ArticleTransport, PageRequest};

enum Reply {
    Ready(Result<NewsPage>),
    Gated(oneshot::Receiver<Result<NewsPage>>),
}

/// Answers requests in order from a queue of replies and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_page(&self, page: NewsPage) {
        self.replies.lock().unwrap().push_back(Reply::Ready(Ok(page)));
    }

    pub fn push_error(&self, status: u16) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Ready(Err(NewsdeskError::Status {
                status,
                body: "upstream error".into(),
            })));
    }

    /// Queue a reply that stays pending until the returned sender fires.
    pub fn push_gate(&self) -> oneshot::Sender<Result<NewsPage>> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back(Reply::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleTransport for ScriptedTransport {
    async fn fetch_page(&self, request: &PageRequest) -> Result<NewsPage> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request");

        match reply {
            Reply::Ready(result) => result,
            Reply::Gated(rx) => rx
                .await
                .unwrap_or_else(|_| Err(NewsdeskError::Other("gate dropped".into()))),
        }
    }
}

pub fn controller(transport: &Arc<ScriptedTransport>) -> FeedController {
    FeedController::new(transport.clone(), 40)
}

pub fn raw(id: &str) -> RawArticle {
    RawArticle {
        id: Some(id.to_string()),
        title: Some(format!("Article {}", id)),
        source_name: Some("Wire".into()),
        published_at: Some("2025-03-20T10:00:00".into()),
        media_url: None,
        description: Some(String::new()),
    }
}

pub fn page(ids: &[&str], next_cursor: Option<&str>) -> NewsPage {
    NewsPage::new(ids.iter().map(|id| raw(id)).collect(), next_cursor.map(String::from))
}

pub fn ids(controller: &FeedController) -> Vec<String> {
    controller.articles().into_iter().map(|a| a.id).collect()
}

pub fn browse(cursor: Option<&str>) -> PageRequest {
    PageRequest::Browse {
        cursor: cursor.map(String::from),
        page_size: 40,
    }
}

pub fn search(query: &str) -> PageRequest {
    PageRequest::Search {
        query: query.to_string(),
        page_size: 40,
    }
}
