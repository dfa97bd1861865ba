use domain::{CommentDraft, PostId, ValidationError};
use draft::DraftStore;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

const VALIDATION_MESSAGE: &str = "Please fill out all fields.";
const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";
const SUCCESS_MESSAGE: &str = "Thank you for your comment!";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to reach the comment endpoint")]
    Transport(#[from] reqwest::Error),

    #[error("comment endpoint rejected the submission (status {0})")]
    Rejected(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sent(String),
    Failed(String),
}

#[derive(Serialize)]
struct CreateCommentRequest<'a> {
    name: &'a str,
    email: &'a str,
    comment: &'a str,
    #[serde(rename = "postId")]
    post_id: &'a str,
}

/// 评论表单：字段状态 + 草稿簿记 + 到中继端点的一次性提交
pub struct CommentForm {
    store: DraftStore,
    http: reqwest::Client,
    relay_url: String,
    fields: CommentDraft,
    status: FormStatus,
}

impl CommentForm {
    /// 打开表单时恢复上次保存的草稿
    pub fn new(relay_url: impl Into<String>, store: DraftStore) -> Self {
        let fields = store.load();
        Self {
            store,
            http: reqwest::Client::new(),
            relay_url: relay_url.into(),
            fields,
            status: FormStatus::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn email(&self) -> &str {
        &self.fields.email
    }

    pub fn comment(&self) -> &str {
        &self.fields.comment
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.fields.name = value.into();
        self.persist_draft();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.email = value.into();
        self.persist_draft();
    }

    pub fn set_comment(&mut self, value: impl Into<String>) {
        self.fields.comment = value.into();
        self.persist_draft();
    }

    // 每次编辑都落盘；落盘失败只告警，不属于提交的正确性契约
    fn persist_draft(&self) {
        if let Err(e) = self.store.save(&self.fields) {
            warn!("Failed to persist comment draft: {:?}", e);
        }
    }

    /// 校验 → 单次 POST → 成功才清草稿、重置字段。
    /// 没有重试、没有超时、没有幂等键，重复点击可能产生重复评论。
    pub async fn submit(&mut self, post_id: &PostId) -> Result<(), SubmitError> {
        self.status = FormStatus::Idle;

        if let Err(e) = self.fields.validate() {
            self.status = FormStatus::Failed(VALIDATION_MESSAGE.to_string());
            return Err(e.into());
        }

        let payload = CreateCommentRequest {
            name: &self.fields.name,
            email: &self.fields.email,
            comment: &self.fields.comment,
            post_id: post_id.as_str(),
        };

        let url = format!("{}/api/createComment", self.relay_url.trim_end_matches('/'));
        let resp = match self.http.post(&url).json(&payload).send().await {
            Ok(resp) => resp,
            Err(e) => {
                // 草稿原样保留，用户的输入不丢
                self.status = FormStatus::Failed(FAILURE_MESSAGE.to_string());
                return Err(e.into());
            }
        };

        if !resp.status().is_success() {
            self.status = FormStatus::Failed(FAILURE_MESSAGE.to_string());
            return Err(SubmitError::Rejected(resp.status().as_u16()));
        }

        if let Err(e) = self.store.clear() {
            warn!("Failed to clear comment draft after submit: {:?}", e);
        }
        self.fields = CommentDraft::default();
        self.status = FormStatus::Sent(SUCCESS_MESSAGE.to_string());
        Ok(())
    }
}
