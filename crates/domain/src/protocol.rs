use serde_json::{json, Map, Value};

use crate::models::NewComment;

pub const COMMENT_TYPE: &str = "comment";

/// 首页查询：文章倒序，作者解引用，评论按反向引用聚合（同样倒序）
pub fn posts_query() -> &'static str {
    r#"*[_type=="post"] | order(_createdAt desc){
  _id,
  "slug": slug.current,
  title,
  summary,
  image,
  author->{ bio, image, name },
  "comments": *[_type == "comment" && post._ref == ^._id] | order(_createdAt desc){
    _id,
    name,
    email,
    comment,
    _createdAt
  }
}"#
}

/// 组装发往内容后端的评论文档，post 字段为 reference 指针。
/// 缺失的字段直接省略，不补占位值。
pub fn build_comment_record(c: &NewComment) -> Value {
    let mut record = Map::new();
    record.insert("_type".into(), json!(COMMENT_TYPE));
    if let Some(ref name) = c.name {
        record.insert("name".into(), json!(name));
    }
    if let Some(ref email) = c.email {
        record.insert("email".into(), json!(email));
    }
    if let Some(ref comment) = c.comment {
        record.insert("comment".into(), json!(comment));
    }

    let mut post = Map::new();
    post.insert("_type".into(), json!("reference"));
    if let Some(ref id) = c.post_id {
        post.insert("_ref".into(), json!(id));
    }
    record.insert("post".into(), Value::Object(post));

    Value::Object(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tags_post_reference() {
        let record = build_comment_record(&NewComment {
            name: Some("A".into()),
            email: Some("a@x.com".into()),
            comment: Some("hi".into()),
            post_id: Some("p1".into()),
        });

        assert_eq!(record["_type"], "comment");
        assert_eq!(record["name"], "A");
        assert_eq!(record["post"]["_type"], "reference");
        assert_eq!(record["post"]["_ref"], "p1");
    }

    #[test]
    fn record_omits_absent_fields() {
        let record = build_comment_record(&NewComment {
            name: None,
            email: None,
            comment: Some("hi".into()),
            post_id: None,
        });

        assert!(record.get("name").is_none());
        assert!(record.get("email").is_none());
        assert_eq!(record["comment"], "hi");
        // reference 容器保留，但没有 _ref
        assert_eq!(record["post"]["_type"], "reference");
        assert!(record["post"].get("_ref").is_none());
    }

    #[test]
    fn posts_query_joins_comments_by_back_reference() {
        let q = posts_query();
        assert!(q.contains(r#"*[_type=="post"]"#));
        assert!(q.contains("post._ref == ^._id"));
        assert!(q.contains("order(_createdAt desc)"));
    }
}
