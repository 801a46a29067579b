use crate::application::dto::FilterFlag;
use crate::dashboard::services::{Clock, Debouncer, SystemClock};
use crate::ports::inbound::DashboardInteractionPort;
use crate::ports::outbound::ProgressReporter;
use crate::shared::error::DashboardError;
use crate::shared::Result;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Rows listed by `show` before the summary is cut off
const MAX_SHOWN_ROWS: usize = 50;

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveCommand {
    /// `search <text>`; empty text clears the search
    Search(String),
    /// `broken|outdated|noncpan on|off`
    Toggle(FilterFlag, bool),
    /// `select <name> <version>`
    Select { name: String, version: String },
    /// `show`
    Show,
    /// `quit` or `exit`
    Quit,
}

impl InteractiveCommand {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "search" => InteractiveCommand::Search(rest.to_string()),
            "show" => InteractiveCommand::Show,
            "quit" | "exit" => InteractiveCommand::Quit,
            "select" => {
                let mut args = rest.split_whitespace();
                match (args.next(), args.next(), args.next()) {
                    (Some(name), Some(version), None) => InteractiveCommand::Select {
                        name: name.to_string(),
                        version: version.to_string(),
                    },
                    _ => return Err(usage_error("select <name> <version>")),
                }
            }
            other => {
                let flag: FilterFlag = other.parse().map_err(|message| {
                    anyhow::Error::from(DashboardError::Validation { message })
                })?;
                let checked = match rest.to_lowercase().as_str() {
                    "on" | "1" | "true" => true,
                    "off" | "0" | "false" => false,
                    _ => return Err(usage_error(&format!("{} on|off", flag))),
                };
                InteractiveCommand::Toggle(flag, checked)
            }
        };
        Ok(Some(command))
    }
}

fn usage_error(usage: &str) -> anyhow::Error {
    DashboardError::Validation {
        message: format!("Usage: {}", usage),
    }
    .into()
}

/// Whether the session keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    Continue,
    Quit,
}

/// InteractiveSession - drives a loaded dashboard from line-oriented input
///
/// Search commands go through a debouncer so a burst of them triggers one
/// re-render; every other command first flushes a pending search so it acts
/// on the latest text.
pub struct InteractiveSession<'a, PR: ProgressReporter, C: Clock = SystemClock> {
    debouncer: Debouncer<String, C>,
    progress_reporter: &'a PR,
}

impl<'a, PR: ProgressReporter> InteractiveSession<'a, PR, SystemClock> {
    pub fn new(debounce: Duration, progress_reporter: &'a PR) -> Self {
        Self::with_clock(debounce, SystemClock, progress_reporter)
    }
}

impl<'a, PR: ProgressReporter, C: Clock> InteractiveSession<'a, PR, C> {
    pub fn with_clock(debounce: Duration, clock: C, progress_reporter: &'a PR) -> Self {
        Self {
            debouncer: Debouncer::with_clock(debounce, clock),
            progress_reporter,
        }
    }

    /// Reads commands until `quit` or end of input, then applies any search
    /// still pending
    ///
    /// # Errors
    /// Returns an error only if reading the input fails; bad commands are
    /// reported and skipped
    pub async fn run<R, P>(&mut self, port: &mut P, reader: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        P: DashboardInteractionPort,
    {
        let mut lines = reader.lines();
        loop {
            let line = match self.debouncer.deadline() {
                Some(deadline) => {
                    tokio::select! {
                        line = lines.next_line() => line?,
                        _ = tokio::time::sleep_until(deadline) => {
                            self.fire_due(port);
                            continue;
                        }
                    }
                }
                None => lines.next_line().await?,
            };

            let Some(line) = line else {
                break;
            };
            if self.handle_line(port, &line) == SessionStep::Quit {
                break;
            }
        }

        self.flush(port);
        Ok(())
    }

    /// Parses and executes one input line
    pub fn handle_line<P: DashboardInteractionPort>(&mut self, port: &mut P, line: &str) -> SessionStep {
        match InteractiveCommand::parse(line) {
            Ok(Some(command)) => self.execute(port, command),
            Ok(None) => SessionStep::Continue,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", e));
                SessionStep::Continue
            }
        }
    }

    pub fn execute<P: DashboardInteractionPort>(
        &mut self,
        port: &mut P,
        command: InteractiveCommand,
    ) -> SessionStep {
        if let InteractiveCommand::Search(text) = command {
            self.debouncer.schedule(text);
            return SessionStep::Continue;
        }

        self.flush(port);
        match command {
            InteractiveCommand::Search(_) => {}
            InteractiveCommand::Toggle(flag, checked) => port.toggle_filter(flag, checked),
            InteractiveCommand::Select { name, version } => {
                if let Err(e) = port.select_version(&name, &version) {
                    self.progress_reporter
                        .report_error(&format!("⚠️  Warning: {}", e));
                }
            }
            InteractiveCommand::Show => self.show(port),
            InteractiveCommand::Quit => return SessionStep::Quit,
        }
        SessionStep::Continue
    }

    /// Applies the pending search if its delay has elapsed
    pub fn fire_due<P: DashboardInteractionPort>(&mut self, port: &mut P) {
        if let Some(text) = self.debouncer.poll() {
            port.apply_search(&text);
        }
    }

    /// Applies the pending search immediately
    pub fn flush<P: DashboardInteractionPort>(&mut self, port: &mut P) {
        if let Some(text) = self.debouncer.flush() {
            port.apply_search(&text);
        }
    }

    fn show<P: DashboardInteractionPort>(&self, port: &P) {
        let ids = port.shown_ids();
        self.progress_reporter
            .report(&format!("📋 {} row(s) shown", ids.len()));
        for id in ids.iter().take(MAX_SHOWN_ROWS) {
            self.progress_reporter.report(&format!("   - {}", id));
        }
        if ids.len() > MAX_SHOWN_ROWS {
            self.progress_reporter
                .report(&format!("   ... and {} more", ids.len() - MAX_SHOWN_ROWS));
        }
    }
}
