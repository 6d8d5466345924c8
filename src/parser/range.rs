use crate::command::Command;
use crate::error::{Error, Result};

/// Line range given with `--left`, `--right` and `--invert`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineRange {
    /// First selected line, 1-based
    pub left: Option<usize>,
    /// Last selected line, 1-based and inclusive
    pub right: Option<usize>,
    pub invert: bool,
}

impl LineRange {
    pub fn is_set(&self) -> bool {
        self.left.is_some() || self.right.is_some() || self.invert
    }

    /// Lower the range into an equivalent command sequence
    pub fn compile(&self) -> Result<Vec<Command>> {
        let left = match self.left {
            Some(0) => return Err(Error::invalid_range("left limit must be at least 1")),
            Some(left) => left,
            None => return Err(Error::invalid_range("--left is required with --right or --invert")),
        };

        // a right limit of 0 means no limit
        let right = self.right.filter(|&right| right != 0);
        if let Some(right) = right
            && right < left
        {
            return Err(Error::invalid_range(format!(
                "right limit {} precedes left limit {}",
                right, left
            )));
        }

        let (inside, outside) = if self.invert {
            (Command::Reject, Command::Pass)
        } else {
            (Command::Pass, Command::Reject)
        };

        let mut commands = Vec::with_capacity(5);
        if self.invert {
            commands.push(Command::Pass);
        }
        commands.push(Command::MoveTo(left - 1));
        commands.push(inside);
        if let Some(right) = right {
            commands.push(Command::MoveTo(right));
            commands.push(outside);
        }
        Ok(commands)
    }
}
