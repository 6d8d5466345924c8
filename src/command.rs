use std::fmt;

/// A single step of a line-selection program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Flip the pass state
    Toggle,
    /// Turn the pass state on
    Pass,
    /// Turn the pass state off
    Reject,
    /// Consume lines until the current line has the given 0-based index
    MoveTo(usize),
    /// Consume exactly this many lines
    JumpBy(usize),
    /// Consume lines until one starts with the tag; the match is left for the next command
    FindTag(Vec<u8>),
    /// Like `FindTag`, but the matching line is consumed too
    SkipTag(Vec<u8>),
}

impl Command {
    /// Commands that only change the pass state and never consume a line
    pub fn is_free(&self) -> bool {
        matches!(self, Command::Toggle | Command::Pass | Command::Reject)
    }

    pub fn find(tag: impl Into<Vec<u8>>) -> Self {
        Command::FindTag(tag.into())
    }

    pub fn skip(tag: impl Into<Vec<u8>>) -> Self {
        Command::SkipTag(tag.into())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Toggle => write!(f, "toggle"),
            Command::Pass => write!(f, "pass"),
            Command::Reject => write!(f, "reject"),
            Command::MoveTo(index) => write!(f, "move {}", index),
            Command::JumpBy(count) => write!(f, "jump {}", count),
            Command::FindTag(tag) => write!(f, "find {:?}", String::from_utf8_lossy(tag)),
            Command::SkipTag(tag) => write!(f, "skip {:?}", String::from_utf8_lossy(tag)),
        }
    }
}

/// An ordered, immutable sequence of commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    commands: Vec<Command>,
}

impl CommandTable {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Command> {
        self.commands.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

impl From<Vec<Command>> for CommandTable {
    fn from(commands: Vec<Command>) -> Self {
        Self::new(commands)
    }
}

impl FromIterator<Command> for CommandTable {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CommandTable {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
