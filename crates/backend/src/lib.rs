mod error;
mod http;

pub use error::BackendError;
pub use http::HttpBackend;

use async_trait::async_trait;
use domain::{NewComment, Post};

/// 内容后端只暴露两个能力：结构化查询与创建记录。
/// 存储、鉴权、引用解析都由托管服务自己负责。
#[async_trait]
pub trait ContentBackend: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, BackendError>;
    async fn create_comment(&self, record: NewComment) -> Result<String, BackendError>;
}

#[derive(Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub dataset: String,
    pub api_version: String,
    // 写入需要 token，匿名只读时可以不配
    pub token: Option<String>,
}
