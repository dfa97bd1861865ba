use async_trait::async_trait;
use domain::{protocol, NewComment, Post};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{BackendConfig, BackendError, ContentBackend};

/// 通过托管服务的 HTTP 数据接口实现 ContentBackend
pub struct HttpBackend {
    config: BackendConfig,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Deserialize)]
struct MutateResponse {
    #[serde(default)]
    results: Vec<MutateResult>,
}

#[derive(Deserialize)]
struct MutateResult {
    id: String,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn query_url(&self) -> String {
        format!(
            "{}/{}/data/query/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_version,
            self.config.dataset
        )
    }

    fn mutate_url(&self) -> String {
        format!(
            "{}/{}/data/mutate/{}?returnIds=true",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_version,
            self.config.dataset
        )
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl ContentBackend for HttpBackend {
    async fn fetch_posts(&self) -> Result<Vec<Post>, BackendError> {
        let resp = self
            .authorize(
                self.http
                    .get(self.query_url())
                    .query(&[("query", protocol::posts_query())]),
            )
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let body: QueryResponse<Vec<Post>> = resp.json().await?;
        Ok(body.result)
    }

    async fn create_comment(&self, record: NewComment) -> Result<String, BackendError> {
        let payload = json!({
            "mutations": [
                { "create": protocol::build_comment_record(&record) }
            ]
        });

        let resp = self
            .authorize(self.http.post(self.mutate_url()).json(&payload))
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let body: MutateResponse = resp.json().await?;
        let id = body
            .results
            .into_iter()
            .next()
            .map(|r| r.id)
            .unwrap_or_default();

        info!("Comment record created: {}", id);
        Ok(id)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(BackendError::Rejected {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BackendConfig {
        BackendConfig {
            base_url: "https://demo.content.example/".into(),
            dataset: "production".into(),
            api_version: "v2022-03-07".into(),
            token: None,
        }
    }

    #[test]
    fn urls_follow_the_data_api_layout() {
        let backend = HttpBackend::new(config());

        assert_eq!(
            backend.query_url(),
            "https://demo.content.example/v2022-03-07/data/query/production"
        );
        assert_eq!(
            backend.mutate_url(),
            "https://demo.content.example/v2022-03-07/data/mutate/production?returnIds=true"
        );
    }
}
