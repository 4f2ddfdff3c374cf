//! Driving harness around the scanner: file runs, the interactive prompt, and
//! `[line L] Error: ...` reporting.
//!
//! The scanner itself never prints or exits. A `Lox` session inspects the
//! returned result, reports it, and records whether the run failed; the binary
//! decides what exit status that maps to.

use anyhow::{bail, Context, Result};
use glox_scan::scan_str;
use glox_token::Token;
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::Path;

/// Maximum source file size in bytes (1MB)
pub const MAX_SOURCE_SIZE: usize = 1_000_000;

/// Exit status for a run that hit a lexical error (`EX_DATAERR`).
pub const EXIT_DATA_ERR: i32 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    Failed,
}

pub struct Lox<W: Write, E: Write> {
    out: W,
    err: E,
    had_error: bool,
}

impl<W: Write, E: Write> Lox<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            had_error: false,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Scan one complete unit of input and print its tokens.
    pub fn run(&mut self, source: &str) -> Result<()> {
        match scan_str(source) {
            Ok(tokens) => {
                for token in &tokens {
                    writeln!(self.out, "{}", token)?;
                }
                Ok(())
            }
            Err(e) => self.error(e.line(), &e.message()),
        }
    }

    pub fn error(&mut self, line: usize, message: &str) -> Result<()> {
        self.report(line, "", message)
    }

    pub fn report(&mut self, line: usize, where_: &str, message: &str) -> Result<()> {
        writeln!(self.err, "[line {}] Error{}: {}", line, where_, message)?;
        self.had_error = true;
        Ok(())
    }

    pub fn run_file(&mut self, path: impl AsRef<Path>) -> Result<RunStatus> {
        let path = path.as_ref();
        let src = read_source(path)?;
        info!("running {} ({} bytes)", path.display(), src.len());
        self.run(&src)?;
        Ok(if self.had_error {
            RunStatus::Failed
        } else {
            RunStatus::Ok
        })
    }

    /// Read-scan-print loop. Each line is scanned on its own; an error on one
    /// line does not poison the next.
    pub fn run_prompt(&mut self, mut input: impl BufRead) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("prompt reached end of input");
                writeln!(self.out)?;
                return Ok(());
            }
            self.run(line.trim_end_matches(['\n', '\r']))?;
            self.had_error = false;
        }
    }
}

/// Read a whole source file, enforcing `MAX_SOURCE_SIZE`.
pub fn read_source(path: &Path) -> Result<String> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;

    if src.len() > MAX_SOURCE_SIZE {
        bail!(
            "source file exceeds {}MB limit ({} bytes)",
            MAX_SOURCE_SIZE / 1_000_000,
            src.len()
        );
    }
    Ok(src)
}

/// Pretty-printed JSON array of the scanned tokens.
pub fn tokens_json(tokens: &[Token]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}
