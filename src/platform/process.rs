//! Bounded external process execution.
//!
//! The child is polled until it exits or the deadline passes. On timeout it
//! is killed and reaped so no zombie outlives the hook.
//!
//! stdout and stderr are drained on reader threads while the child runs, so
//! a chatty program never stalls on a full pipe.

use super::CommandOutcome;
use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Run `program` with `args`, giving up after `timeout`.
pub fn run_with_timeout(program: &str, args: &[&str], timeout: Duration) -> CommandOutcome {
    let start = Instant::now();

    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(program, "command not found");
            return CommandOutcome::NotFound;
        }
        Err(e) => {
            debug!(program, error = %e, "command failed to start");
            return CommandOutcome::SpawnFailed {
                message: e.to_string(),
            };
        }
    };

    let stdout = spawn_reader(child.stdout.take());
    let stderr = spawn_reader(child.stderr.take());

    // On timeout or wait failure the readers are left detached: a grandchild
    // may still hold the pipes open.
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                let elapsed = start.elapsed();
                if elapsed >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    let after_ms = elapsed.as_millis() as u64;
                    debug!(program, after_ms, "command timed out");
                    return CommandOutcome::TimedOut { after_ms };
                }
                thread::sleep(POLL_INTERVAL.min(timeout - elapsed));
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return CommandOutcome::SpawnFailed {
                    message: e.to_string(),
                };
            }
        }
    };

    debug!(
        program,
        code = ?status.code(),
        duration_ms = start.elapsed().as_millis() as u64,
        "command exited"
    );
    CommandOutcome::Exited {
        code: status.code(),
        stdout: collect_output(stdout),
        stderr: collect_output(stderr),
    }
}

/// Read a child pipe to the end on its own thread
fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            buf
        })
    })
}

fn collect_output(reader: Option<JoinHandle<Vec<u8>>>) -> String {
    reader
        .and_then(|handle| handle.join().ok())
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default()
}
