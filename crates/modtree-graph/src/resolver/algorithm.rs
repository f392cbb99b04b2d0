//! Specifier classification and candidate construction.

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

/// True for specifiers that name a file relative to the importer or by
/// absolute path. Everything else is a bare package specifier.
pub fn is_relative(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier.starts_with('/')
}

/// Join a specifier onto the importer's directory and normalise the result.
pub fn candidate_path(importer: &Path, specifier: &str) -> PathBuf {
    let base = importer.parent().unwrap_or(Path::new(""));
    base.join(specifier).clean()
}

/// True when the part of `candidate` below the directory it shares with
/// `importer` passes through one of `vendor_dirs`.
///
/// Components the importer already lives under are ignored, so a project
/// checked out inside a directory called `vendor` is not itself vendored.
pub fn is_vendored(importer: &Path, candidate: &Path, vendor_dirs: &[String]) -> bool {
    let base = importer.parent().unwrap_or(Path::new(""));
    let shared = base
        .components()
        .zip(candidate.components())
        .take_while(|(a, b)| a == b)
        .count();

    candidate
        .components()
        .skip(shared)
        .any(|component| match component {
            Component::Normal(name) => name
                .to_str()
                .is_some_and(|name| vendor_dirs.iter().any(|dir| dir == name)),
            _ => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_relative() {
        assert!(is_relative("./a"));
        assert!(is_relative("../a"));
        assert!(is_relative("."));
        assert!(is_relative(".."));
        assert!(is_relative("/abs/a"));
        assert!(!is_relative("react"));
        assert!(!is_relative("@scope/pkg"));
        assert!(!is_relative(".hidden"));
    }

    #[test]
    fn test_candidate_path_normalises() {
        let importer = Path::new("/project/src/pages/home.ts");
        assert_eq!(
            candidate_path(importer, "../utils/./format"),
            PathBuf::from("/project/src/utils/format")
        );
        assert_eq!(
            candidate_path(importer, "/abs/mod.ts"),
            PathBuf::from("/abs/mod.ts")
        );
        assert_eq!(candidate_path(importer, "."), PathBuf::from("/project/src/pages"));
    }

    #[test]
    fn test_is_vendored_matches_whole_components() {
        let vendor = vec!["node_modules".to_string()];
        let importer = Path::new("/project/src/main.ts");
        assert!(is_vendored(
            importer,
            Path::new("/project/node_modules/lib/index.js"),
            &vendor
        ));
        assert!(is_vendored(
            importer,
            Path::new("/project/src/node_modules/lib/index.js"),
            &vendor
        ));
        assert!(!is_vendored(
            importer,
            Path::new("/project/my_node_modules_notes/a.ts"),
            &vendor
        ));
    }

    #[test]
    fn test_is_vendored_ignores_importer_ancestry() {
        let vendor = vec!["vendor".to_string()];
        let importer = Path::new("/home/me/vendor/app/src/main.ts");
        assert!(!is_vendored(
            importer,
            Path::new("/home/me/vendor/app/src/util.ts"),
            &vendor
        ));
        assert!(!is_vendored(
            importer,
            Path::new("/home/me/vendor/app/lib/util.ts"),
            &vendor
        ));
        assert!(is_vendored(
            importer,
            Path::new("/home/me/vendor/app/src/vendor/dep.js"),
            &vendor
        ));
    }
}
