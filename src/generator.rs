use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::art_test::ArtTest;
use crate::config::{configurations, Configuration, Layout};
use crate::error::{GenError, Result};

#[derive(Debug, PartialEq, Default)]
pub struct Summary {
    pub configurations: usize,
    pub files_written: usize,
}

/// Names of the directories directly under `source_dir`, sorted.
pub fn discover_test_cases(source_dir: &Path) -> Result<Vec<String>> {
    let discovery = |source: std::io::Error| GenError::Discovery {
        path: source_dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(discovery)? {
        let entry = entry.map_err(discovery)?;
        // follows symlinks, like a plain directory check on the path would
        let is_dir = fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(_) => return Err(GenError::NonUtf8Name { path: entry.path() }),
        }
    }
    names.sort();
    Ok(names)
}

/// Deletes `output_dir` if present, then creates it with its parents.
pub fn reset_output_dir(output_dir: &Path) -> Result<()> {
    let reset = |source: std::io::Error| GenError::ResetDir {
        path: output_dir.to_path_buf(),
        source,
    };
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(reset)?;
    }
    fs::create_dir_all(output_dir).map_err(reset)
}

pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| GenError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Regenerates the output directory of a single configuration.
/// Returns the number of files written.
pub fn generate_configuration(config: &Configuration) -> Result<usize> {
    let test_cases = discover_test_cases(&config.source_dir)?;
    info!(
        toolchain = config.toolchain.name,
        tool = config.tool.name(),
        test_cases = test_cases.len(),
        "generating art tests"
    );
    if test_cases.is_empty() {
        warn!("no test cases found in {}", config.source_dir.display());
    }

    reset_output_dir(&config.output_dir)?;
    for name in &test_cases {
        let test = ArtTest::new(name);
        let contents = test.render(config)?;
        let path = config.output_dir.join(test.file_name());
        write_file(&path, &contents)?;
        debug!("wrote {}", path.display());
    }
    Ok(test_cases.len())
}

/// Regenerates every configuration, stopping at the first error.
pub fn generate(layout: &Layout) -> Result<Summary> {
    let mut summary = Summary::default();
    for config in configurations(layout) {
        summary.files_written += generate_configuration(&config)?;
        summary.configurations += 1;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenErrorKind;

    #[test]
    fn discovers_only_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("b-test")).unwrap();
        fs::create_dir(dir.path().join("A")).unwrap();
        fs::create_dir_all(dir.path().join("A").join("nested")).unwrap();
        fs::write(dir.path().join("README"), "not a test").unwrap();

        assert_eq!(
            discover_test_cases(dir.path()).unwrap(),
            vec!["A".to_string(), "b-test".to_string()]
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(OsStr::from_bytes(b"bad\xff"))).unwrap();
        let err = discover_test_cases(dir.path()).unwrap_err();
        assert!(matches!(err, GenError::NonUtf8Name { .. }));
        assert_eq!(err.kind(), GenErrorKind::Discovery);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Real")).unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("linked-case")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

        assert_eq!(
            discover_test_cases(dir.path()).unwrap(),
            vec!["Real".to_string(), "linked-case".to_string()]
        );
    }

    #[test]
    fn missing_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_test_cases(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Discovery);
    }

    #[test]
    fn source_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "").unwrap();
        assert_eq!(
            discover_test_cases(&file).unwrap_err().kind(),
            GenErrorKind::Discovery
        );
    }

    #[test]
    fn reset_clears_stale_content() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b");
        fs::create_dir_all(out.join("sub")).unwrap();
        fs::write(out.join("Stale.java"), "old").unwrap();

        reset_output_dir(&out).unwrap();
        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn reset_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("x").join("y").join("z");
        reset_output_dir(&out).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn reset_fails_under_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        fs::write(&file, "").unwrap();
        let err = reset_output_dir(&file.join("out")).unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Write);
    }

    #[test]
    fn write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("F.java");
        write_file(&path, "one").unwrap();
        write_file(&path, "two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn write_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_file(&dir.path().join("nope").join("F.java"), "x").unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Write);
    }
}
