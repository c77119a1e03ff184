//! Repository layout checks: unit tests mirror `src/` and every test file tests something

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    // Entry points and module organization files don't require separate test files
    fn needs_unit_test(relative: &str) -> bool {
        relative != "main.rs" && relative != "lib.rs" && !relative.ends_with("mod.rs")
    }

    // Relative paths of every directory and `.rs` file below `base`
    fn mirrored_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_prefix_error| io::Error::other("path outside scanned directory"))?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    paths.insert(relative);
                    pending.push(path);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative);
                }
            }
        }

        Ok(paths)
    }

    fn rust_files(dir: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                found.push(path);
            }
        }
        Ok(())
    }

    // Test files that must hold at least one test: everything except module
    // organization files and the test suite entry point
    fn test_files() -> Vec<PathBuf> {
        let tests_dir = Path::new("tests");
        let mut files = Vec::new();
        if let Err(error) = rust_files(tests_dir, &mut files) {
            assert!(!tests_dir.exists(), "Failed to scan tests directory: {error}");
        }

        files
            .into_iter()
            .filter(|path| {
                let is_entry = path.parent() == Some(tests_dir)
                    && path.file_name().and_then(|name| name.to_str()) == Some("main.rs");
                let is_module = path.file_name().and_then(|name| name.to_str()) == Some("mod.rs");
                !is_entry && !is_module
            })
            .collect()
    }

    #[test]
    fn test_src_and_unit_tests_mirror_each_other() {
        let src_paths = mirrored_paths(Path::new("src")).unwrap_or_default();
        let test_paths = mirrored_paths(Path::new("tests/unit")).unwrap_or_default();
        assert!(!src_paths.is_empty(), "No source files found under src/");

        let missing: Vec<String> = src_paths
            .iter()
            .filter(|path| needs_unit_test(path) && !test_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        let orphaned: Vec<String> = test_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let without_tests: Vec<String> = test_files()
            .into_iter()
            .filter(|path| {
                !fs::read_to_string(path).is_ok_and(|content| content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            without_tests.is_empty(),
            "Test files without any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_describe_themselves() {
        let undocumented: Vec<String> = test_files()
            .into_iter()
            .filter(|path| {
                !fs::read_to_string(path).is_ok_and(|content| content.starts_with("//!"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            undocumented.is_empty(),
            "Test files without a leading //! description:\n{}",
            undocumented.join("\n")
        );
    }
}
