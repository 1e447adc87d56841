//! depgraph - go-svc 依赖清单
//!
//! 扫描仓库与本地包的源码引用，生成 PlantUML 依赖图

mod builder;
mod config;
mod error;
mod extractor;
mod plantuml;
mod tree;

pub use builder::{DependencyGraphs, GraphBuilder, RepositoryDeps};
pub use config::{RepoConfig, ScanConfig};
pub use error::{GraphError, Result};
pub use extractor::ReferenceExtractor;
pub use plantuml::PlantUmlRenderer;
pub use tree::{FsTree, SourceTree};
