use std::{collections::BTreeMap, path::PathBuf, sync::Mutex};

use crate::{Res, config, types::Token};

/// Where tokens live between runs, keyed by Spotify username.
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    /// Returns the stored token of `username`, if there is one.
    async fn load(&self, username: &str) -> Res<Option<Token>>;

    /// Stores `token` for `username`, replacing any previous one.
    async fn store(&self, username: &str, token: &Token) -> Res<()>;

    /// Usernames that currently have a stored token, sorted.
    async fn usernames(&self) -> Res<Vec<String>>;
}

/// Keeps one `<username>.json` token file per user in a cache directory.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    dir: PathBuf,
}

impl FileCredentialStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self, username: &str) -> PathBuf {
        let file_name: String = username
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl Default for FileCredentialStore {
    /// `<data_local_dir>/powerspot/cache`
    fn default() -> Self {
        Self::new(config::data_dir().join("cache"))
    }
}

impl CredentialStore for FileCredentialStore {
    async fn load(&self, username: &str) -> Res<Option<Token>> {
        let path = self.token_path(username);
        if !path.is_file() {
            return Ok(None);
        }

        let content = async_fs::read_to_string(&path).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Some(token))
    }

    async fn store(&self, username: &str, token: &Token) -> Res<()> {
        async_fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(token)?;
        async_fs::write(self.token_path(username), json).await?;
        Ok(())
    }

    async fn usernames(&self) -> Res<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

/// Keeps tokens in memory only.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    tokens: Mutex<BTreeMap<String, Token>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tokens(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Token>> {
        // a poisoned map is still a valid map
        self.tokens.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn load(&self, username: &str) -> Res<Option<Token>> {
        Ok(self.tokens().get(username).cloned())
    }

    async fn store(&self, username: &str, token: &Token) -> Res<()> {
        self.tokens().insert(username.to_string(), token.clone());
        Ok(())
    }

    async fn usernames(&self) -> Res<Vec<String>> {
        Ok(self.tokens().keys().cloned().collect())
    }
}
