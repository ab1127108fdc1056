//! Keeps `tests/unit` in one-to-one correspondence with `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Entry points and module organisation files need no counterpart
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    // Test target roots such as tests/unit/main.rs only declare modules
    fn is_harness_root(relative: &str) -> bool {
        relative == "main.rs" || relative.ends_with("mod.rs")
    }

    fn tree(dir: &Path) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        if let Err(error) = walk(dir, dir, &mut paths) {
            assert!(!dir.exists(), "Failed to read {}: {error}", dir.display());
        }
        paths
    }

    fn walk(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|error| io::Error::other(error.to_string()))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                walk(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn path_file_name(relative: &str) -> &str {
        relative.rsplit('/').next().unwrap_or(relative)
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src = tree(Path::new(SRC_DIR));
        let unit = tree(Path::new(UNIT_DIR));

        let missing: Vec<_> = src
            .iter()
            .filter(|path| !is_exempt(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = tree(Path::new(SRC_DIR));
        let unit = tree(Path::new(UNIT_DIR));
        assert!(
            unit.contains("main.rs"),
            "tests/unit/main.rs must declare the unit test target"
        );

        let orphaned: Vec<_> = unit
            .iter()
            .filter(|path| !is_harness_root(path) && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    // Verified by moving tests/unit/main.rs back to tests/unit.rs
    #[test]
    fn test_directory_targets_have_main_roots() {
        let base = Path::new(TESTS_DIR);

        for target in ["unit", "meta"] {
            let dir = base.join(target);
            assert!(
                dir.join("main.rs").is_file(),
                "{} needs a main.rs so its modules resolve inside the directory",
                dir.display()
            );
            assert!(
                !base.join(format!("{target}.rs")).exists(),
                "tests/{target}.rs would resolve its modules against tests/ instead of tests/{target}/"
            );
        }
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let base = Path::new(TESTS_DIR);
        let mut empty = Vec::new();

        for relative in tree(base) {
            let path = base.join(&relative);
            if path.is_dir() || is_harness_root(path_file_name(&relative)) {
                continue;
            }

            match fs::read_to_string(&path) {
                Ok(content) if content.contains("#[test]") => {}
                Ok(_) => empty.push(format!("  - {}", path.display())),
                Err(error) => empty.push(format!("  - {} ({error})", path.display())),
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
