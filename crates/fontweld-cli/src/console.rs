//! Console rendering of pipeline events
//!
//! The CLI's view of the message sink: every event becomes one stderr
//! line, prefixed so warnings stand out. Relaying through the `log`
//! facade is delegated to [`LogReporter`], so anyone running with
//! RUST_LOG set sees the same stream.

use fontweld_core::report::{Event, LogReporter, Reporter};

/// Prints events to stderr as they happen
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    log: LogReporter,
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            log: LogReporter,
            quiet,
        }
    }
}

impl Reporter for ConsoleReporter {
    fn event(&self, event: &Event) {
        self.log.event(event);
        if !self.quiet {
            if event.is_warning() {
                eprintln!("! {event}");
            } else {
                eprintln!("  {event}");
            }
        }
    }
}
