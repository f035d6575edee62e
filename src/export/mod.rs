pub mod excel;

use std::path::{Path, PathBuf};

/// デフォルト出力ファイル名
pub const DEFAULT_FILE_NAME: &str = "Student summary & skills.xlsx";

/// 出力先を解決
///
/// 未指定なら入力ファイルと同じフォルダ、ディレクトリ指定ならその中に
/// デフォルト名で出力する
pub fn resolve_output_path(output: Option<&Path>, input: &Path) -> PathBuf {
    match output {
        Some(path) if path.is_dir() || path.extension().is_none() => path.join(DEFAULT_FILE_NAME),
        Some(path) => path.to_path_buf(),
        None => input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(DEFAULT_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_output_default_next_to_input() {
        let path = resolve_output_path(None, Path::new("/data/comments.xlsx"));
        assert_eq!(path, PathBuf::from("/data").join(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_resolve_output_directory() {
        let dir = tempdir().unwrap();
        let path = resolve_output_path(Some(dir.path()), Path::new("in.xlsx"));
        assert_eq!(path, dir.path().join(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_resolve_output_file() {
        let path = resolve_output_path(Some(Path::new("out/result.xlsx")), Path::new("in.xlsx"));
        assert_eq!(path, PathBuf::from("out/result.xlsx"));
    }
}
