use std::{io, path::Path, process::Command};

/// Hands `path` to the desktop's default handler for its file type. Returns
/// once the opener has been spawned.
pub fn open_with_default_viewer(path: &Path) -> io::Result<()> {
    let mut command = opener_command(path);
    tracing::info!(path = %path.display(), "opening file in default viewer");
    command.spawn().map(|_| ())
}

/// `explorer` hands the file to its registered handler without going through
/// `cmd`, so `&`, `^` and `%` in the path stay literal.
#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("explorer");
    command.arg(path);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(all(unix, not(target_os = "macos")))]
fn opener_command(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}
