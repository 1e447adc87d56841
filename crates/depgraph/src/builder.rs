use crate::config::ScanConfig;
use crate::error::Result;
use crate::extractor::ReferenceExtractor;
use crate::tree::SourceTree;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, info, warn};

/// 单个仓库引用的内部模块
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryDeps {
    pub name: String,
    pub modules: BTreeSet<String>,
}

/// 一次运行的依赖图
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyGraphs {
    /// 所有出现过的模块名
    pub modules: BTreeSet<String>,
    /// 仓库 -> 模块, 按配置顺序
    pub repositories: Vec<RepositoryDeps>,
    /// 本地包 -> 模块 (不含自引用)
    pub packages: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraphs {
    /// 为每个配置的仓库建立空条目; 同名仓库合并为一个
    pub fn new(config: &ScanConfig) -> Self {
        let mut repositories: Vec<RepositoryDeps> = Vec::new();
        for repo in &config.repositories {
            if !repositories.iter().any(|r| r.name == repo.name) {
                repositories.push(RepositoryDeps {
                    name: repo.name.clone(),
                    modules: BTreeSet::new(),
                });
            }
        }

        Self {
            modules: BTreeSet::new(),
            repositories,
            packages: BTreeMap::new(),
        }
    }

    pub fn repository(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.repositories
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.modules)
    }

    fn repository_mut(&mut self, name: &str) -> Option<&mut BTreeSet<String>> {
        self.repositories
            .iter_mut()
            .find(|r| r.name == name)
            .map(|r| &mut r.modules)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
            && self.repositories.iter().all(|r| r.modules.is_empty())
            && self.packages.values().all(BTreeSet::is_empty)
    }
}

/// 引用是否指向包自身 (仅比较首段路径)
#[doc(hidden)]
pub fn is_self_reference(package: &str, module: &str) -> bool {
    module.split('/').next() == Some(package)
}

/// 依赖图构建器
pub struct GraphBuilder<'a, T: SourceTree> {
    tree: &'a T,
    config: &'a ScanConfig,
    extractor: ReferenceExtractor,
}

impl<'a, T: SourceTree> GraphBuilder<'a, T> {
    pub fn new(tree: &'a T, config: &'a ScanConfig) -> Result<Self> {
        Ok(Self {
            tree,
            config,
            extractor: ReferenceExtractor::new(&config.prefix)?,
        })
    }

    /// 依次执行仓库扫描和本地包扫描
    pub fn build(&self) -> Result<DependencyGraphs> {
        let mut graphs = DependencyGraphs::new(self.config);
        self.scan_repositories(&mut graphs)?;
        self.scan_local_packages(&mut graphs)?;
        Ok(graphs)
    }

    /// 扫描配置中的各仓库
    pub fn scan_repositories(&self, graphs: &mut DependencyGraphs) -> Result<()> {
        for repo in &self.config.repositories {
            let mut found = Vec::new();
            for dir in &self.config.source_dirs {
                found.extend(self.references_under(&repo.path.join(dir))?);
            }

            for module in found {
                graphs.modules.insert(module.clone());
                if let Some(deps) = graphs.repository_mut(&repo.name) {
                    deps.insert(module);
                }
            }

            info!(
                "{}: {} internal modules",
                repo.name,
                graphs.repository(&repo.name).map_or(0, BTreeSet::len)
            );
        }

        Ok(())
    }

    /// 扫描本地包根目录下的各个包
    pub fn scan_local_packages(&self, graphs: &mut DependencyGraphs) -> Result<()> {
        let root = &self.config.package_root;
        let packages = self.tree.list_dirs(root)?;
        if packages.is_empty() {
            warn!("No packages found under {}", root.display());
        }

        for package in packages {
            graphs.modules.insert(package.clone());
            let deps = graphs.packages.entry(package.clone()).or_default();

            let mut external = BTreeSet::new();
            for module in self.references_under(&root.join(&package))? {
                if !is_self_reference(&package, &module) {
                    external.insert(module);
                }
            }

            info!("{}: {} internal modules", package, external.len());
            deps.extend(external.iter().cloned());
            graphs.modules.extend(external);
        }

        Ok(())
    }

    /// 目录下所有源码文件中的引用
    fn references_under(&self, root: &Path) -> Result<Vec<String>> {
        let files = self.tree.list_files(root)?;
        let mut references = Vec::new();
        let mut scanned = 0usize;

        for file in files.iter().filter(|f| self.config.is_source_file(f)) {
            let content = self.tree.read_to_string(file)?;
            references.extend(self.extractor.extract(&content));
            scanned += 1;
        }

        debug!(
            "{}: scanned {} files, {} references",
            root.display(),
            scanned,
            references.len()
        );
        Ok(references)
    }
}
