//! 目录树与文件读取

use crate::error::{GraphError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 源码树访问接口
pub trait SourceTree {
    /// 递归列出 root 下的所有文件; root 不存在时返回空
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// 列出 root 下的直接子目录名; root 不存在时返回空
    fn list_dirs(&self, root: &Path) -> Result<Vec<String>>;

    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// 本地文件系统
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTree;

impl SourceTree for FsTree {
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        if !root.exists() {
            return Ok(files);
        }

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn list_dirs(&self, root: &Path) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(GraphError::io(root, e)),
        };

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| GraphError::io(root, e))?;
            let file_type = entry.file_type().map_err(|e| GraphError::io(entry.path(), e))?;
            if file_type.is_dir() {
                dirs.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(dirs)
    }

    /// 非 UTF-8 字节替换为 U+FFFD
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|e| GraphError::io(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
