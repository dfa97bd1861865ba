use std::{
    fs, io,
    path::{Path, PathBuf},
};

use domain::CommentDraft;

const DRAFT_FILE: &str = "comment-draft.json";

/// 单槽位草稿存储，按 profile 目录隔离。
/// 写入语义是 last-write-wins，没有合并、没有版本号。
#[derive(Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn open(profile_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = profile_dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(Self {
            path: dir.join(DRAFT_FILE),
        })
    }

    /// 读不到或解析失败都视同没有草稿，绝不向调用方抛错
    pub fn load(&self) -> CommentDraft {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Stored draft is unparseable, treating as empty: {}", e);
                CommentDraft::default()
            }),
            Err(_) => CommentDraft::default(),
        }
    }

    pub fn save(&self, draft: &CommentDraft) -> anyhow::Result<()> {
        let raw = serde_json::to_string(draft)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// 幂等：清除不存在的草稿不是错误
    pub fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CommentDraft {
        CommentDraft {
            name: "A".into(),
            email: "a@x.com".into(),
            comment: "hi".into(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = DraftStore::open(dir.path()).unwrap();

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), sample());

        store.clear().unwrap();
        assert_eq!(store.load(), CommentDraft::default());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = DraftStore::open(dir.path()).unwrap();

        store.clear().unwrap();
        store.save(&sample()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.exists());
    }

    #[test]
    fn unparseable_draft_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = DraftStore::open(dir.path()).unwrap();

        fs::write(dir.path().join(DRAFT_FILE), "{not json").unwrap();
        assert_eq!(store.load(), CommentDraft::default());

        // 形状不对（数组）同样按空草稿处理
        fs::write(dir.path().join(DRAFT_FILE), "[1,2,3]").unwrap();
        assert_eq!(store.load(), CommentDraft::default());
    }

    #[test]
    fn save_overwrites_unconditionally() {
        let dir = tempfile::tempdir().unwrap();
        let store = DraftStore::open(dir.path()).unwrap();

        store.save(&sample()).unwrap();
        let second = CommentDraft {
            name: "B".into(),
            ..CommentDraft::default()
        };
        store.save(&second).unwrap();
        assert_eq!(store.load(), second);
    }
}
