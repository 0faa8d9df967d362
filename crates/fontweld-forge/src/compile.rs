//! External compiler discovery and invocation
//!
//! FontForge is a collaborator, not a dependency: when no binary exists
//! at any well-known location the capability is reported as missing and
//! generation is refused, nothing else degrades. Invocation is a
//! synchronous subprocess call, optionally bounded by a deadline so a
//! hung compiler cannot freeze the whole session.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use fontweld_core::error::CompileError;
use fontweld_core::report::{Event, Reporter};
use fontweld_core::types::FontSpec;

use crate::script::build_script;

/// Environment override for the compiler binary location.
pub const COMPILER_ENV: &str = "FONTWELD_FONTFORGE";

/// Well-known FontForge install locations, probed in order.
const WELL_KNOWN_PATHS: &[&str] = &[
    "/usr/bin/fontforge",
    "/usr/local/bin/fontforge",
    "C:/Program Files (x86)/FontForgeBuilds/bin/fontforge.exe",
    "C:/Program Files/FontForgeBuilds/bin/fontforge.exe",
];

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Captured output of a successful compiler run
#[derive(Debug, Default)]
pub struct CompileOutcome {
    pub stdout: String,
    pub stderr: String,
}

/// Locates the external compiler, env override first.
pub fn find_compiler() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(COMPILER_ENV) {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
        log::warn!("{COMPILER_ENV} points at {}, which does not exist", path.display());
    }

    WELL_KNOWN_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Runs the compiler against the script derived from `spec`.
///
/// The script is written under `script_dir` (the session temp dir, so it
/// disappears with the session). Glyph file paths are passed as
/// positional arguments after `-script`, matching the compiler's
/// expected invocation. Exit code zero is success; anything else fails
/// with the captured stderr, and a partial output file is not valid.
pub fn compile(
    compiler: &Path,
    spec: &FontSpec,
    script_dir: &Path,
    timeout: Option<Duration>,
    reporter: &dyn Reporter,
) -> Result<CompileOutcome, CompileError> {
    let script_path = script_dir.join("generate_font.pe");
    std::fs::write(&script_path, build_script(spec)).map_err(|source| {
        CompileError::ScriptWrite {
            path: script_path.display().to_string(),
            source,
        }
    })?;
    reporter.event(&Event::ScriptWritten {
        path: script_path.clone(),
    });

    let mut child = Command::new(compiler)
        .arg("-script")
        .arg(&script_path)
        .args(spec.glyphs.iter().map(|g| g.path.as_os_str()))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| CompileError::Spawn {
            path: compiler.display().to_string(),
            source,
        })?;

    // Drain both pipes on the side so the child can never block on a
    // full pipe while we wait for it.
    let stdout_drain = child.stdout.take().map(drain_pipe);
    let stderr_drain = child.stderr.take().map(drain_pipe);

    let status = wait_with_deadline(&mut child, timeout)?;

    let outcome = CompileOutcome {
        stdout: stdout_drain.map(join_drain).unwrap_or_default(),
        stderr: stderr_drain.map(join_drain).unwrap_or_default(),
    };

    if !status.success() {
        let status = match status.code() {
            Some(code) => format!("exit code {code}"),
            None => "a signal".to_string(),
        };
        return Err(CompileError::CompilerFailed {
            status,
            stderr: outcome.stderr,
        });
    }

    reporter.event(&Event::FontGenerated {
        output: spec.output.clone(),
    });
    Ok(outcome)
}

fn drain_pipe<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        // Non-UTF-8 compiler output degrades to whatever prefix read.
        let _ = pipe.read_to_string(&mut buf);
        buf
    })
}

fn join_drain(handle: thread::JoinHandle<String>) -> String {
    handle.join().unwrap_or_default()
}

fn wait_with_deadline(
    child: &mut Child,
    timeout: Option<Duration>,
) -> Result<ExitStatus, CompileError> {
    let Some(timeout) = timeout else {
        return child.wait().map_err(wait_error);
    };

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait().map_err(wait_error)? {
            Some(status) => return Ok(status),
            None if Instant::now() >= deadline => {
                // Kill then reap; a kill race with normal exit is fine.
                let _ = child.kill();
                let _ = child.wait();
                return Err(CompileError::Timeout {
                    secs: timeout.as_secs(),
                });
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    }
}

fn wait_error(source: std::io::Error) -> CompileError {
    CompileError::Spawn {
        path: "<child process>".to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontweld_core::report::BufferReporter;
    use fontweld_core::types::{FontConfig, GlyphSource};
    use std::fs;
    use tempfile::TempDir;

    fn spec(temp: &TempDir) -> FontSpec {
        let glyph = temp.path().join("a.svg");
        fs::write(&glyph, "<svg/>").unwrap();
        FontSpec::new(
            FontConfig::new("TestFont"),
            temp.path().join("out.ttf"),
            vec![GlyphSource {
                path: glyph,
                code_point: 'a',
            }],
        )
    }

    #[test]
    fn well_known_probe_ignores_missing_paths() {
        // No assertion on Some/None: hosts may have FontForge installed.
        // The probe itself must not panic or error.
        let _ = find_compiler();
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_is_success_with_captured_output() {
        let temp = TempDir::new().unwrap();
        let reporter = BufferReporter::new();
        // `true` ignores its arguments and exits 0.
        let outcome = compile(
            Path::new("/bin/true"),
            &spec(&temp),
            temp.path(),
            None,
            &reporter,
        )
        .unwrap();

        assert!(outcome.stderr.is_empty());
        let lines = reporter.lines();
        assert!(lines[0].contains("generate_font.pe"));
        assert!(lines[1].contains("out.ttf"));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_failure_carrying_stderr() {
        let temp = TempDir::new().unwrap();
        let reporter = BufferReporter::new();
        let err = compile(
            Path::new("/bin/false"),
            &spec(&temp),
            temp.path(),
            None,
            &reporter,
        )
        .unwrap_err();

        match err {
            CompileError::CompilerFailed { status, .. } => {
                assert!(status.contains("1"), "unexpected status: {status}");
            }
            other => panic!("unexpected error: {other}"),
        }
        // Failure must not report a generated font.
        assert!(reporter.lines().iter().all(|l| !l.contains("Font generated")));
    }

    #[cfg(unix)]
    #[test]
    fn hung_compiler_is_killed_at_the_deadline() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let fake = temp.path().join("hang.sh");
        fs::write(&fake, "#!/bin/sh\nsleep 60\n").unwrap();
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755)).unwrap();

        let reporter = BufferReporter::new();
        let started = Instant::now();
        let err = compile(
            &fake,
            &spec(&temp),
            temp.path(),
            Some(Duration::from_millis(200)),
            &reporter,
        )
        .unwrap_err();

        assert!(matches!(err, CompileError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let temp = TempDir::new().unwrap();
        let reporter = BufferReporter::new();
        let err = compile(
            Path::new("/definitely/not/fontforge"),
            &spec(&temp),
            temp.path(),
            None,
            &reporter,
        )
        .unwrap_err();
        assert!(matches!(err, CompileError::Spawn { .. }));
    }

    #[test]
    fn script_lands_in_the_given_directory() {
        let temp = TempDir::new().unwrap();
        let reporter = BufferReporter::new();
        // Spawn fails, but the script must already be on disk.
        let _ = compile(
            Path::new("/definitely/not/fontforge"),
            &spec(&temp),
            temp.path(),
            None,
            &reporter,
        );
        let script = fs::read_to_string(temp.path().join("generate_font.pe")).unwrap();
        assert!(script.starts_with("New()\n"));
    }
}
