use crate::builder::DEFAULT_OWNER;
use crate::error::{FlashcardError, Result};
use crate::scanner::EntryOrder;
use flashcard_index_common::{IdStrategy, DEFAULT_SITE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// GitHub Actions が設定するリポジトリ所有者
pub const OWNER_ENV: &str = "GITHUB_REPOSITORY_OWNER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub owner: Option<String>,
    pub site: String,
    pub order: EntryOrder,
    pub ids: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: None,
            site: DEFAULT_SITE.into(),
            order: EntryOrder::default(),
            ids: IdStrategy::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルがなければ既定値、壊れていればエラー
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FlashcardError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FlashcardError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("flashcard-index").join("config.json"))
    }

    /// 所有者: 引数 > 環境変数 > 設定ファイル > 既定値
    pub fn resolve_owner(&self, arg: Option<&str>) -> String {
        let env = std::env::var(OWNER_ENV).ok();
        self.resolve_owner_with(arg, env.as_deref())
    }

    pub fn resolve_owner_with(&self, arg: Option<&str>, env: Option<&str>) -> String {
        [arg, env, self.owner.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_OWNER)
            .to_string()
    }

    /// サイト名: 引数 > 設定ファイル
    pub fn resolve_site(&self, arg: Option<&str>) -> String {
        match arg.filter(|s| !s.trim().is_empty()) {
            Some(site) => site.to_string(),
            None if self.site.trim().is_empty() => DEFAULT_SITE.to_string(),
            None => self.site.clone(),
        }
    }

    pub fn set_owner(&mut self, owner: String) -> Result<()> {
        self.owner = Some(owner);
        self.save()
    }

    pub fn set_site(&mut self, site: String) -> Result<()> {
        self.site = site;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_owner_default() {
        let config = Config::default();
        assert_eq!(config.resolve_owner_with(None, None), "sb2chun");
    }

    #[test]
    fn test_owner_precedence() {
        let config = Config {
            owner: Some("from-file".into()),
            ..Default::default()
        };
        assert_eq!(config.resolve_owner_with(Some("from-arg"), Some("from-env")), "from-arg");
        assert_eq!(config.resolve_owner_with(None, Some("from-env")), "from-env");
        assert_eq!(config.resolve_owner_with(None, None), "from-file");
    }

    #[test]
    fn test_owner_ignores_empty() {
        let config = Config::default();
        assert_eq!(config.resolve_owner_with(Some(""), Some("  ")), "sb2chun");
    }

    #[test]
    fn test_site_resolution() {
        let config = Config::default();
        assert_eq!(config.resolve_site(None), "baby-flashcard-repo");
        assert_eq!(config.resolve_site(Some("cards")), "cards");

        let config = Config {
            site: "my-cards".into(),
            ..Default::default()
        };
        assert_eq!(config.resolve_site(None), "my-cards");
    }

    #[test]
    fn test_partial_config_file() {
        let config: Config =
            serde_json::from_str(r#"{ "owner": "octocat", "ids": "content" }"#).unwrap();
        assert_eq!(config.owner.as_deref(), Some("octocat"));
        assert_eq!(config.site, "baby-flashcard-repo");
        assert_eq!(config.order, EntryOrder::Name);
        assert_eq!(config.ids, IdStrategy::Content);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_corrupted_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, FlashcardError::Config(_)));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            owner: Some("octocat".into()),
            order: EntryOrder::Filesystem,
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
