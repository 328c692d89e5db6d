//! Operator console
//!
//! Everything the auction asks or tells the operator goes through
//! [`Prompt`], so a run can be driven from stdin or replayed from a
//! script in tests.
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use tracing::trace;

pub trait Prompt {
    /// Show `query` and block until the operator answers with a line
    ///
    /// The answer comes back without its line terminator. Running out of
    /// input is an error: there is no way to finish the auction without it.
    fn ask(&mut self, query: &str) -> Result<String>;

    /// Print `text` followed by a newline
    fn say(&mut self, text: &str) -> Result<()>;
}

/// A [`Prompt`] over any line-based reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R, W> Prompt for Console<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask(&mut self, query: &str) -> Result<String> {
        write!(self.output, "{query}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        if self
            .input
            .read_line(&mut line)
            .context("failed to read answer")?
            == 0
        {
            bail!("input closed while waiting for an answer to {:?}", query.trim());
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_owned();
        trace!(query = query.trim(), %answer, "answer");
        Ok(answer)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("failed to write output")
    }
}

/// Whether the operator answered exactly "yes", ignoring case and padding
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

pub fn is_no(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("no")
}
