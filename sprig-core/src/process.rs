use crate::event::AppEvent;
use anyhow::Result;
use std::{
    io::{self, BufRead, BufReader, Read, Write},
    path::Path,
    process::{ChildStdin, Command, Stdio},
    sync::mpsc::Sender,
    thread::{self, JoinHandle},
};

/// Handle to the single live foreground child. Exists only while the
/// process runs; cleared the moment its exit code is consumed.
pub struct Handle {
    stdin: Option<ChildStdin>,
}

/// Owns the lifecycle of at most one foreground child process. stdout
/// and stderr share a single pipe, so the merged output is streamed
/// line-by-line as [`AppEvent::CommandOutput`] in the exact order the
/// child produced it; the terminal [`AppEvent::CommandExited`] is sent
/// only after the pipe hits end-of-stream, so the scrollback is
/// complete before any post-completion action runs.
#[derive(Default)]
pub struct Supervisor {
    handle: Option<Handle>,
}

impl Supervisor {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Spawn `argv` in `cwd` and stream its output as events on `sender`.
    ///
    /// Fails synchronously if a process is already active — that is a
    /// contract violation by the caller, who must check `is_active`
    /// first. Also fails if the spawn itself fails; no events are sent
    /// in either case.
    pub fn start(&mut self, argv: &[String], cwd: &Path, sender: Sender<AppEvent>) -> Result<()> {
        anyhow::ensure!(
            self.handle.is_none(),
            "a supervised process is already running"
        );
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| anyhow::anyhow!("empty argument vector"))?;

        // One pipe for both streams: interleaving is decided by the
        // child's own write order, not by racing reader threads.
        let (merged, stdout_writer) = io::pipe()?;
        let stderr_writer = stdout_writer.try_clone()?;

        // The Command temporary drops the parent's write ends right
        // after the spawn, so `merged` sees EOF once the child exits.
        let mut child = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::piped())
            .stdout(Stdio::from(stdout_writer))
            .stderr(Stdio::from(stderr_writer))
            .spawn()?;

        let stdin = child.stdin.take();
        let reader = spawn_line_reader(merged, sender.clone());

        // The exit event must trail every output line, so the waiter
        // joins the reader before reaping the child.
        thread::spawn(move || {
            let _ = reader.join();
            let code = match child.wait() {
                Ok(status) => status.code().unwrap_or(-1),
                Err(err) => {
                    log::warn!("wait on child failed: {err}");
                    -1
                }
            };
            let _ = sender.send(AppEvent::CommandExited { code });
        });

        self.handle = Some(Handle { stdin });
        Ok(())
    }

    /// Forward one line (newline appended) to the child's stdin. A no-op
    /// when no process is active or its stdin is gone; write failures
    /// are swallowed because the child may already have exited.
    pub fn send(&mut self, text: &str) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        let Some(stdin) = handle.stdin.as_mut() else {
            return;
        };
        if let Err(err) = writeln!(stdin, "{text}").and_then(|()| stdin.flush()) {
            log::debug!("stdin write to child failed: {err}");
        }
    }

    /// Drop the handle. Called by the event loop the instant it consumes
    /// [`AppEvent::CommandExited`], keeping handle liveness in lockstep
    /// with the UI's busy mode.
    pub fn clear(&mut self) {
        self.handle = None;
    }
}

fn spawn_line_reader<R>(pipe: R, sender: Sender<AppEvent>) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(pipe);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    let line = line.trim_end_matches('\n').trim_end_matches('\r');
                    let _ = sender.send(AppEvent::CommandOutput(line.to_string()));
                }
                Err(err) => {
                    log::debug!("child output read failed: {err}");
                    break;
                }
            }
        }
    })
}
