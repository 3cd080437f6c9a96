//! Output file writes and the "latest" alias

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Replace `path` with `contents` in one step.
///
/// Data goes to a sibling temp file that is renamed over the target, so a
/// failed write leaves any previous output intact.
pub(crate) fn write_whole(path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    if let Err(err) = fs::write(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    fs::rename(&tmp, path).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}

/// Point the symlink at `link` to `target`, using a target path relative to
/// the link's directory. An existing link or file at `link` is replaced.
pub(crate) fn update_latest_link(link: &Path, target: &Path) -> io::Result<()> {
    let link_abs = std::path::absolute(link)?;
    let target_abs = std::path::absolute(target)?;
    let base = link_abs.parent().unwrap_or(Path::new("/"));
    let relative = relative_path(&target_abs, base);

    if fs::symlink_metadata(&link_abs).is_ok() {
        fs::remove_file(&link_abs)?;
    }
    symlink(&relative, &link_abs)
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// Path to `target` as seen from directory `base`; both must be absolute.
fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component<'_>> = target.components().collect();
    let base: Vec<Component<'_>> = base.components().collect();
    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base.len() {
        out.push("..");
    }
    for component in &target[common..] {
        out.push(component.as_os_str());
    }
    out
}
