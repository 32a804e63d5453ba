use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use crate::chime_err;
use crate::errors::{ChimeError, ChimeErrorKind};

/// Runs a user scroll command fully detached from the bar.
///
/// The command line goes through `sh -c`, so quoting, `$HOME`, globs and
/// pipes behave the way they do in any other scroll binding.
///
/// Double-forks so the grandchild is reparented to PID 1: the bar never
/// accumulates zombies and the command survives a bar restart. `pre_exec`
/// runs between fork and exec, so nothing beyond the fork/setsid syscalls
/// happens in there.
pub(crate) fn spawn_detached(cmd: &str) -> Result<(), ChimeError> {
    if cmd.trim().is_empty() {
        return Ok(());
    }

    let mut command = Command::new("sh");
    command.arg("-c").arg(cmd);

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    unsafe {
        command.pre_exec(|| {
            match libc::fork() {
                -1 => Err(std::io::Error::last_os_error()),
                0 => {
                    libc::setsid();
                    Ok(())
                }
                _ => {
                    // The middle child exits at once; PID 1 adopts the rest.
                    libc::_exit(0);
                }
            }
        });
    }

    let mut child = command
        .spawn()
        .map_err(|e| chime_err!(ChimeErrorKind::CommandExecute, e.to_string()))?;
    let _ = child.wait();

    Ok(())
}
