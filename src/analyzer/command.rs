//! External analyzer run as a child process

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use wait_timeout::ChildExt;

use crate::error::AnalyzerError;

use super::Analyzer;

/// Flags selecting non-interactive, plain-text output
pub(crate) const DEFAULT_ARGS: &[&str] = &["-p", "--output-format", "text"];

#[derive(Debug, Clone)]
pub(crate) struct CommandAnalyzer {
    program: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandAnalyzer {
    pub(crate) fn new(program: impl Into<PathBuf>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }
}

impl Analyzer for CommandAnalyzer {
    fn analyze(&self, prompt: &str) -> Result<String, AnalyzerError> {
        let deadline = Instant::now() + self.timeout;
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AnalyzerError::NotFound {
                        program: self.program.clone(),
                    }
                } else {
                    AnalyzerError::Spawn(e)
                }
            })?;

        // Drain both pipes while waiting so a chatty child cannot fill them and stall.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = match child.wait_timeout(self.timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(AnalyzerError::Timeout(self.timeout));
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(AnalyzerError::Wait(e));
            }
        };

        // A descendant that inherited the pipes can keep them open after the
        // child exits; reads share the same deadline as the wait.
        let stdout = collect(stdout, deadline);
        let stderr = collect(stderr, deadline).unwrap_or_default();

        if status.success() {
            let stdout = stdout.ok_or(AnalyzerError::Timeout(self.timeout))?;
            String::from_utf8(stdout).map_err(AnalyzerError::Utf8)
        } else {
            Err(AnalyzerError::Failed {
                code: status.code(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            })
        }
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = pipe.read_to_end(&mut buffer);
        let _ = tx.send(buffer);
    });
    rx
}

/// `None` when the pipe is still open at the deadline
fn collect(rx: Option<Receiver<Vec<u8>>>, deadline: Instant) -> Option<Vec<u8>> {
    match rx {
        Some(rx) => rx
            .recv_timeout(deadline.saturating_duration_since(Instant::now()))
            .ok(),
        None => Some(Vec::new()),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str, timeout: Duration) -> CommandAnalyzer {
        // `sh -c SCRIPT sh PROMPT` exposes the prompt as $1
        CommandAnalyzer::new(
            "sh",
            vec!["-c".to_string(), script.to_string(), "sh".to_string()],
            timeout,
        )
    }

    #[test]
    fn returns_stdout_on_success() {
        let analyzer = sh(r#"printf 'analysis of: %s' "$1""#, Duration::from_secs(10));
        assert_eq!(
            analyzer.analyze("three logs").unwrap(),
            "analysis of: three logs"
        );
    }

    #[test]
    fn non_zero_exit_carries_stderr() {
        let analyzer = sh("echo 'rate limited' >&2; exit 3", Duration::from_secs(10));
        match analyzer.analyze("x") {
            Err(AnalyzerError::Failed { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "rate limited");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn slow_analyzer_times_out() {
        let analyzer = sh("sleep 5", Duration::from_millis(200));
        assert!(matches!(
            analyzer.analyze("x"),
            Err(AnalyzerError::Timeout(t)) if t == Duration::from_millis(200)
        ));
    }

    #[test]
    fn missing_program_is_not_found() {
        let analyzer = CommandAnalyzer::new(
            "/nonexistent/worklog-analyzer",
            Vec::new(),
            Duration::from_secs(1),
        );
        assert!(matches!(
            analyzer.analyze("x"),
            Err(AnalyzerError::NotFound { .. })
        ));
    }

    #[test]
    fn large_output_does_not_stall() {
        let analyzer = sh("head -c 300000 /dev/zero | tr '\\0' a", Duration::from_secs(10));
        assert_eq!(analyzer.analyze("x").unwrap().len(), 300_000);
    }

    #[test]
    fn descendant_holding_stdout_open_is_bounded() {
        let analyzer = sh("sleep 5 & echo done", Duration::from_millis(500));
        let started = Instant::now();
        assert!(matches!(
            analyzer.analyze("x"),
            Err(AnalyzerError::Timeout(_))
        ));
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
