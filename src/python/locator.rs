use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File whose presence marks a directory tree as holding a virtual environment.
pub const ACTIVATION_MARKER: &str = "activate";

/// Walk `root` and return the first file named `activate`. A symlink to a
/// file counts; a symlink to a directory does not.
///
/// Symlinked directories are never descended into, so the walk cannot loop.
/// Subtrees that cannot be read are skipped rather than reported.
pub fn find_activation_marker(root: &Path) -> Option<PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .find(is_marker)
        .map(|entry| entry.into_path())
}

fn is_marker(entry: &DirEntry) -> bool {
    if entry.file_name() != ACTIVATION_MARKER {
        return false;
    }
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_marker_at_depth() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("venv").join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("activate"), "# venv").unwrap();
        std::fs::write(bin.join("activate.fish"), "# fish").unwrap();

        let found = find_activation_marker(dir.path()).unwrap();
        assert_eq!(found, bin.join("activate"));
    }

    #[test]
    fn finds_marker_deeply_nested() {
        let dir = tempfile::tempdir().unwrap();
        let deep = dir.path().join("a").join("b").join("c").join("d");
        std::fs::create_dir_all(&deep).unwrap();
        std::fs::write(deep.join("activate"), "").unwrap();

        assert!(find_activation_marker(dir.path()).is_some());
    }

    #[test]
    fn no_marker_is_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src").join("activate.py"), "").unwrap();

        assert_eq!(find_activation_marker(dir.path()), None);
    }

    #[test]
    fn directory_named_activate_does_not_count() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("activate")).unwrap();

        assert_eq!(find_activation_marker(dir.path()), None);
    }

    #[test]
    fn missing_root_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_activation_marker(&dir.path().join("gone")), None);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_marker_is_found() {
        let dir = tempfile::tempdir().unwrap();
        let shared = dir.path().join("shared");
        std::fs::create_dir_all(&shared).unwrap();
        std::fs::write(shared.join("activate.sh"), "# venv").unwrap();
        let bin = dir.path().join("venv").join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::os::unix::fs::symlink(shared.join("activate.sh"), bin.join("activate")).unwrap();

        assert_eq!(find_activation_marker(dir.path()), Some(bin.join("activate")));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_entered() {
        let outside = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(outside.path().join("bin")).unwrap();
        std::fs::write(outside.path().join("bin").join("activate"), "").unwrap();

        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(outside.path().join("bin"), dir.path().join("activate"))
            .unwrap();

        assert_eq!(find_activation_marker(dir.path()), None);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subtree_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("aaa-locked");
        std::fs::create_dir_all(&locked).unwrap();
        std::fs::write(locked.join("activate"), "").unwrap();
        let bin = dir.path().join("venv").join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        std::fs::write(bin.join("activate"), "").unwrap();

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
        if std::fs::read_dir(&locked).is_ok() {
            // Privileged processes can still read the directory.
            std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let with_sibling = find_activation_marker(dir.path());
        let locked_only = find_activation_marker(&locked);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(with_sibling, Some(bin.join("activate")));
        assert_eq!(locked_only, None);
    }
}
