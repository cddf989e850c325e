use std::collections::HashMap;

use async_trait::async_trait;
use services::{QueryClient, QueryError, QueryPanel, QueryReply, QueryTransport};

#[derive(Default)]
struct FakeProxy {
    replies: HashMap<String, Result<QueryReply, QueryError>>,
}

impl FakeProxy {
    fn answer(mut self, query: &str, result: &str) -> Self {
        self.replies.insert(
            query.to_string(),
            Ok(QueryReply {
                result: Some(result.to_string()),
                error: None,
            }),
        );
        self
    }

    fn reply(mut self, query: &str, reply: Result<QueryReply, QueryError>) -> Self {
        self.replies.insert(query.to_string(), reply);
        self
    }
}

#[async_trait]
impl QueryTransport for FakeProxy {
    async fn fetch(&self, query: &str) -> Result<QueryReply, QueryError> {
        self.replies
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(QueryReply::default()))
    }
}

fn client() -> QueryClient<FakeProxy> {
    QueryClient::new(
        FakeProxy::default()
            .answer("2^5", "32")
            .answer("2^6", "64")
            .reply(
                "nonsense",
                Ok(QueryReply {
                    result: None,
                    error: Some("no result for: nonsense".into()),
                }),
            )
            .reply(
                "down",
                Err(QueryError::Transport("connection refused".into())),
            ),
    )
}

#[tokio::test]
async fn query_outcomes() {
    let client = client();
    assert_eq!(client.query("  2^5 ").await, Ok(Some("32".into())));
    assert_eq!(client.query("   ").await, Ok(None));
    assert_eq!(
        client.query("nonsense").await,
        Err(QueryError::Rejected("no result for: nonsense".into()))
    );
    assert_eq!(client.query("unknown").await, Err(QueryError::NoResult));

    let err = client.query("down").await.unwrap_err();
    assert_eq!(err.to_string(), "Proxy error: connection refused");
    assert_eq!(
        QueryError::NoResult.to_string(),
        "No result from the compute engine."
    );
}

#[tokio::test]
async fn late_response_for_an_older_query_is_discarded() {
    let client = client();
    let mut panel = QueryPanel::new();

    let slow = panel.begin("2^5").unwrap();
    let fast = panel.begin("2^6").unwrap();

    assert!(panel.resolve(fast, client.query("2^6").await));
    assert!(!panel.resolve(slow, client.query("2^5").await));
    assert_eq!(panel.last(), Some(&Ok("64".to_string())));
}

#[tokio::test]
async fn run_applies_the_latest_query() {
    let client = client();
    let mut panel = QueryPanel::new();

    assert!(panel.run(&client, "2^5").await);
    assert_eq!(panel.last(), Some(&Ok("32".to_string())));
    assert!(!panel.run(&client, " ").await);

    assert!(panel.run(&client, "nonsense").await);
    assert!(matches!(panel.last(), Some(Err(QueryError::Rejected(_)))));
    assert!(!panel.is_loading());
}
