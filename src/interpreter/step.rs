use std::io::Write;

use tracing::debug;

use crate::command::Command;
use crate::error::Result;
use crate::reader::Line;

use super::Interpreter;

/// Result of evaluating one command against the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The command is satisfied; evaluate the next one against the same line
    Advance,
    /// The line has been dispositioned; fetch a new one
    Fetch,
}

impl<'a> Interpreter<'a> {
    pub fn step<W: Write>(&mut self, line: &Line<'_>, output: &mut W) -> Result<StepResult> {
        let commands = self.commands;
        let Some(command) = commands.get(self.cursor) else {
            self.emit(line, output)?;
            return Ok(StepResult::Fetch);
        };

        match command {
            Command::Toggle => {
                self.pass = !self.pass;
                Ok(self.advance(command))
            }

            Command::Pass => {
                self.pass = true;
                Ok(self.advance(command))
            }

            Command::Reject => {
                self.pass = false;
                Ok(self.advance(command))
            }

            Command::MoveTo(target) => {
                if line.index < *target {
                    self.emit(line, output)?;
                    Ok(StepResult::Fetch)
                } else {
                    Ok(self.advance(command))
                }
            }

            Command::JumpBy(count) => {
                if self.progress < *count {
                    self.emit(line, output)?;
                    self.progress += 1;
                    Ok(StepResult::Fetch)
                } else {
                    self.progress = 0;
                    Ok(self.advance(command))
                }
            }

            Command::FindTag(tag) | Command::SkipTag(tag) => {
                let len = *self.search.get_or_insert(tag.len());
                if !line.starts_with(&tag[..len]) {
                    self.emit(line, output)?;
                    return Ok(StepResult::Fetch);
                }

                self.search = None;
                self.advance(command);
                if matches!(command, Command::SkipTag(_)) {
                    self.emit(line, output)?;
                    Ok(StepResult::Fetch)
                } else {
                    Ok(StepResult::Advance)
                }
            }
        }
    }

    fn advance(&mut self, command: &Command) -> StepResult {
        debug!(cursor = self.cursor, pass = self.pass, "{} satisfied", command);
        self.cursor += 1;
        if self.cursor == self.commands.len() {
            debug!(pass = self.pass, "commands exhausted, passing through");
        }
        StepResult::Advance
    }

    #[inline]
    fn emit<W: Write>(&mut self, line: &Line<'_>, output: &mut W) -> Result<()> {
        if self.pass {
            output.write_all(line.bytes)?;
            self.stats.lines_emitted += 1;
            self.stats.bytes_emitted += line.bytes.len();
        }
        Ok(())
    }
}
