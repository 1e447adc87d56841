//! 扫描配置

use std::path::PathBuf;

/// 内部命名空间前缀
pub const DEFAULT_PREFIX: &str = "github.com/gesundheitscloud/go-svc/pkg";

/// 仓库描述: 根目录 + 显示名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    pub path: PathBuf,
    pub name: String,
}

impl RepoConfig {
    pub fn new(path: impl Into<PathBuf>, name: &str) -> Self {
        Self {
            path: path.into(),
            name: name.to_string(),
        }
    }
}

/// 扫描配置 (编译期固定)
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub prefix: String,
    pub repositories: Vec<RepoConfig>,
    /// 每个仓库下扫描的子目录: 公共包、内部包、入口
    pub source_dirs: Vec<String>,
    pub extension: String,
    /// 本地包根目录
    pub package_root: PathBuf,
    pub output: PathBuf,
    pub title: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            repositories: vec![
                RepoConfig::new("../../research-pillars", "ResearchPillars"),
                RepoConfig::new("../../data-dispatcher", "DataDispatcher"),
                RepoConfig::new("../../data-receiver", "DataReceiver"),
            ],
            source_dirs: vec!["pkg".to_string(), "internal".to_string(), "cmd".to_string()],
            extension: ".go".to_string(),
            package_root: PathBuf::from("../pkg"),
            output: PathBuf::from("dependencies.plantuml"),
            title: "Dependencies".to_string(),
        }
    }
}

impl ScanConfig {
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn with_repositories(mut self, repositories: Vec<RepoConfig>) -> Self {
        self.repositories = repositories;
        self
    }

    pub fn with_package_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.package_root = root.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// 是否为源码文件
    pub fn is_source_file(&self, path: &std::path::Path) -> bool {
        path.to_string_lossy().ends_with(&self.extension)
    }
}
