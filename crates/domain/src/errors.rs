use thiserror::Error;

/// 客户端校验失败：必填字段为空，不会触网
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing required field: {field}")]
pub struct ValidationError {
    pub field: &'static str,
}
