use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(s: impl Into<String>) -> Result<Self, String> {
        let s = s.into();
        if s.is_empty() {
            return Err("Post ID cannot be empty.".to_string());
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
        {
            return Err("Post ID contains invalid characters.".to_string());
        }
        if s.len() > 128 {
            return Err("Post ID is too long (max 128 chars).".to_string());
        }
        Ok(Self(s))
    }

    pub fn new_unchecked(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// 本地草稿：一条尚未提交的评论
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub comment: String,
}

impl CommentDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.comment.is_empty()
    }

    /// 三个字段去掉首尾空白后都必须非空
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError { field: "name" });
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError { field: "email" });
        }
        if self.comment.trim().is_empty() {
            return Err(ValidationError { field: "comment" });
        }
        Ok(())
    }
}

// 中继观察到的写入形状：字段缺失原样转发，由后端 schema 裁决
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub name: Option<String>,
    pub email: Option<String>,
    pub comment: Option<String>,
    pub post_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub bio: Option<String>,
    pub image: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}
