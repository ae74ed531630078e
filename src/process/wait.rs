use std::io;

use super::ProcessError;

// How a child left the running state for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
}

/// Blocks until `pid` actually terminates.
///
/// Waits with `WUNTRACED`, so a stop (e.g. SIGTSTP) wakes the call, but a
/// stopped child is not terminal: the loop goes back to waiting until the
/// child has exited or was killed by a signal.
pub(crate) fn wait_for_termination(pid: libc::pid_t) -> Result<Termination, ProcessError> {
    let mut status: libc::c_int = 0;
    loop {
        let ret = unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED) };
        if ret < 0 {
            return Err(ProcessError::Wait(io::Error::last_os_error()));
        }
        if libc::WIFEXITED(status) {
            return Ok(Termination::Exited(libc::WEXITSTATUS(status)));
        }
        if libc::WIFSIGNALED(status) {
            return Ok(Termination::Signaled(libc::WTERMSIG(status)));
        }
        // Stopped; keep waiting.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use std::thread;
    use std::time::Duration;

    fn spawn(program: &str, args: &[&str]) -> libc::pid_t {
        let child = Command::new(program)
            .args(args)
            .spawn()
            .expect("failed to spawn test child");
        child.id() as libc::pid_t
    }

    #[test]
    fn test_reports_normal_exit() {
        let pid = spawn("true", &[]);
        assert_eq!(wait_for_termination(pid).unwrap(), Termination::Exited(0));
    }

    #[test]
    fn test_reports_nonzero_exit() {
        let pid = spawn("sh", &["-c", "exit 7"]);
        assert_eq!(wait_for_termination(pid).unwrap(), Termination::Exited(7));
    }

    #[test]
    fn test_reports_death_by_signal() {
        let pid = spawn("sleep", &["5"]);
        unsafe { libc::kill(pid, libc::SIGKILL) };
        assert_eq!(
            wait_for_termination(pid).unwrap(),
            Termination::Signaled(libc::SIGKILL)
        );
    }

    #[test]
    fn test_stopped_child_is_not_terminal() {
        let pid = spawn("sleep", &["5"]);
        unsafe { libc::kill(pid, libc::SIGSTOP) };

        let killer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(200));
            unsafe { libc::kill(pid, libc::SIGKILL) };
        });

        // The stop wakes the waitpid loop once; only the SIGKILL ends it.
        assert_eq!(
            wait_for_termination(pid).unwrap(),
            Termination::Signaled(libc::SIGKILL)
        );
        killer.join().expect("killer thread panicked");
    }

    #[test]
    fn test_invalid_pid_is_an_error() {
        assert!(matches!(
            wait_for_termination(-1_000_000),
            Err(ProcessError::Wait(_))
        ));
    }
}
