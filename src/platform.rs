use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::constants::platform::FOLDER_OPENER;

/// Open `path` in the platform file manager without waiting for it
pub fn open_folder(path: &Path) -> Result<()> {
    let mut command = Command::new(FOLDER_OPENER);
    command.arg(path).stdin(Stdio::null());

    let (pid, _reaper) = spawn_reaped(&mut command)
        .with_context(|| format!("Failed to run {FOLDER_OPENER} for {:?}", path))?;

    info!(pid, path = %path.display(), opener = FOLDER_OPENER, "Opened containing folder");
    Ok(())
}

/// Spawn `command` and wait for it on a background thread
///
/// The child is reaped when it exits, so it never lingers as a zombie while
/// the window stays open.
fn spawn_reaped(command: &mut Command) -> io::Result<(u32, JoinHandle<io::Result<ExitStatus>>)> {
    let mut child = command.spawn()?;
    let pid = child.id();

    let reaper = thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || {
            let status = child.wait();
            match &status {
                Ok(status) => debug!(pid, %status, "Child process exited"),
                Err(e) => warn!(pid, error = %e, "Failed to wait for child process"),
            }
            status
        })?;

    Ok((pid, reaper))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_child_is_reaped() {
        let (pid, reaper) = spawn_reaped(&mut Command::new("true")).unwrap();
        assert!(pid > 0);

        let status = reaper.join().unwrap().unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_exit_status_is_reported() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 3"]);
        let (_pid, reaper) = spawn_reaped(&mut command).unwrap();

        assert_eq!(reaper.join().unwrap().unwrap().code(), Some(3));
    }

    #[test]
    fn test_missing_program_is_error() {
        assert!(spawn_reaped(&mut Command::new("definitely-not-a-real-program-xyz")).is_err());
    }
}
