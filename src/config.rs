use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// 运行配置
///
/// 优先级从高到低：命令行参数、`~/.config/dinelist/config.toml`、内置默认值
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 可选的 TOML 种子文件，替代内置数据
    pub seed_path: Option<PathBuf>,
    pub log_file: PathBuf,
    /// `tracing` 过滤指令，例如 `info` 或 `dinelist=debug`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            log_file: default_log_file(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 读取配置文件，文件不存在时返回默认值
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 用命令行参数覆盖已加载的值
    pub fn merge(
        mut self,
        seed_path: Option<PathBuf>,
        log_file: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Self {
        if seed_path.is_some() {
            self.seed_path = seed_path;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        self
    }
}

/// 配置文件路径 (~/.config/dinelist/config.toml 或平台对应目录)
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dinelist")
        .join("config.toml")
}

/// 默认日志路径 (~/.local/share/dinelist/dinelist.log 或平台对应目录)
fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dinelist")
        .join("dinelist.log")
}
