//! svcdeps - go-svc dependency inventory
//!
//! Scans the configured repositories and the local packages for go-svc
//! imports and writes the result as a PlantUML diagram.

use anyhow::Context;
use clap::Parser;
use depgraph::{DependencyGraphs, FsTree, GraphBuilder, PlantUmlRenderer, ScanConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "svcdeps")]
#[command(about = "go-svc dependency diagram generator", version)]
struct Cli {
    /// Output file (default: dependencies.plantuml)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Local package root (default: ../pkg)
    #[arg(long)]
    package_root: Option<PathBuf>,
    /// Print the collected graphs as JSON instead of the diagram
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ScanConfig::default();
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }
    if let Some(root) = cli.package_root {
        config = config.with_package_root(root);
    }

    let (graphs, uml) = generate(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&graphs)?);
    } else {
        print!("{}", uml);
    }

    Ok(())
}

/// Scans, renders and writes the diagram. The output file is only written
/// once rendering has succeeded.
fn generate(config: &ScanConfig) -> anyhow::Result<(DependencyGraphs, String)> {
    let tree = FsTree;
    let builder = GraphBuilder::new(&tree, config)?;

    let mut graphs = DependencyGraphs::new(config);
    builder
        .scan_repositories(&mut graphs)
        .context("Failed to scan repositories")?;
    builder
        .scan_local_packages(&mut graphs)
        .with_context(|| format!("Failed to scan packages under {}", config.package_root.display()))?;

    let uml = PlantUmlRenderer::new().with_title(&config.title).render(&graphs);

    std::fs::write(&config.output, &uml)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    tracing::info!("Saved to: {}", config.output.display());

    Ok((graphs, uml))
}

#[cfg(test)]
mod tests {
    use super::*;
    use depgraph::RepoConfig;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_generate_writes_rendered_diagram() {
        let dir = tempdir().unwrap();
        let repo = dir.path().join("repo");
        fs::create_dir_all(repo.join("cmd")).unwrap();
        fs::write(
            repo.join("cmd/main.go"),
            "import \"github.com/gesundheitscloud/go-svc/pkg/log\"\n",
        )
        .unwrap();

        let config = ScanConfig::default()
            .with_repositories(vec![RepoConfig::new(&repo, "Repo")])
            .with_package_root(dir.path().join("none"))
            .with_output(dir.path().join("dependencies.plantuml"));

        let (graphs, uml) = generate(&config).unwrap();

        assert_eq!(fs::read_to_string(&config.output).unwrap(), uml);
        assert!(graphs.modules.contains("log"));
        assert!(uml.contains("Repo --> log"));
    }

    #[test]
    fn test_failed_scan_leaves_no_output_file() {
        let dir = tempdir().unwrap();
        // a regular file where the package root directory is expected
        let package_root = dir.path().join("pkg");
        fs::write(&package_root, "not a directory").unwrap();

        let config = ScanConfig::default()
            .with_repositories(Vec::new())
            .with_package_root(&package_root)
            .with_output(dir.path().join("dependencies.plantuml"));

        let err = generate(&config).unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to scan packages"));
        assert!(!config.output.exists());
    }
}
