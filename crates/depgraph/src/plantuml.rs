use crate::builder::{DependencyGraphs, RepositoryDeps};
use std::collections::{BTreeMap, BTreeSet};

/// PlantUML 依赖图生成器
pub struct PlantUmlRenderer {
    title: String,
}

impl PlantUmlRenderer {
    pub fn new() -> Self {
        Self {
            title: "Dependencies".to_string(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn render(&self, graphs: &DependencyGraphs) -> String {
        self.render_parts(&graphs.modules, &graphs.repositories, &graphs.packages)
    }

    /// 生成完整图: 仓库为 class, 模块为 object, 仓库边实线, 包边虚线
    pub fn render_parts(
        &self,
        modules: &BTreeSet<String>,
        repositories: &[RepositoryDeps],
        packages: &BTreeMap<String, BTreeSet<String>>,
    ) -> String {
        let mut lines = vec![
            format!("@startuml {}", self.title),
            String::new(),
            "together {".to_string(),
        ];

        // 仓库保持配置顺序
        lines.extend(repositories.iter().map(|r| format!("class {}", r.name)));
        lines.push("}".to_string());
        lines.push(String::new());

        lines.extend(Self::block(modules, |m| format!("object {}", m)));

        for repo in repositories {
            lines.extend(Self::block(&repo.modules, |m| format!("{} --> {}", repo.name, m)));
        }

        for (package, deps) in packages {
            lines.extend(Self::block(deps, |m| format!("{} -[dotted]-|> {}", package, m)));
        }

        lines.push("@enduml".to_string());
        lines.push(String::new());
        lines.join("\n")
    }

    /// 有序输出集合, 非空时追加一个空行
    fn block<F>(set: &BTreeSet<String>, line: F) -> Vec<String>
    where
        F: Fn(&str) -> String,
    {
        let mut lines: Vec<String> = set.iter().map(|m| line(m)).collect();
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }
}

impl Default for PlantUmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
