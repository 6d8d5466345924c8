mod range;

pub use range::LineRange;

use std::path::PathBuf;

use crate::command::{Command, CommandTable};
use crate::error::{Error, Result};

/// What the command line asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Run,
    Help,
    Version,
}

/// Where lines are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// A fully validated command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    pub commands: CommandTable,
    pub input: Input,
    /// Number of `-v` flags
    pub verbose: u8,
}

/// Options understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    Toggle,
    Pass,
    Reject,
    Move,
    Jump,
    Find,
    Skip,
    Left,
    Right,
    Invert,
    Verbose,
    Help,
    Version,
}

impl Opt {
    fn lookup(name: &str) -> Option<Self> {
        let opt = match name {
            "-t" | "--toggle" => Opt::Toggle,
            "-p" | "--pass" => Opt::Pass,
            "-x" | "--reject" => Opt::Reject,
            "-m" | "--move" => Opt::Move,
            "-j" | "--jump" => Opt::Jump,
            "-f" | "--find" => Opt::Find,
            "-s" | "--skip" => Opt::Skip,
            "-l" | "--left" => Opt::Left,
            "-r" | "--right" => Opt::Right,
            "-i" | "--invert" => Opt::Invert,
            "-v" | "--verbose" => Opt::Verbose,
            "-h" | "--help" => Opt::Help,
            "--version" => Opt::Version,
            _ => return None,
        };
        Some(opt)
    }

    fn takes_value(self) -> bool {
        matches!(
            self,
            Opt::Move | Opt::Jump | Opt::Find | Opt::Skip | Opt::Left | Opt::Right
        )
    }
}

/// Command-line parser producing an [`Invocation`]
pub struct Parser {
    args: Vec<String>,
    current: usize,
}

impl Parser {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            current: 0,
        }
    }

    /// Parse all arguments (program name excluded)
    pub fn parse(&mut self) -> Result<Invocation> {
        let mut commands = Vec::new();
        let mut range = LineRange::default();
        let mut input: Option<String> = None;
        let mut verbose: u8 = 0;

        while let Some(arg) = self.advance() {
            if arg == "--" {
                while let Some(positional) = self.advance() {
                    set_input(&mut input, positional)?;
                }
                break;
            }

            if arg == "-" || !arg.starts_with('-') {
                set_input(&mut input, arg)?;
                continue;
            }

            let (name, inline) = split_option(&arg);
            let opt = Opt::lookup(name).ok_or_else(|| Error::UnknownOption(arg.clone()))?;

            let value = if opt.takes_value() {
                match inline {
                    Some(value) => Some(value.to_string()),
                    None => Some(self.advance().ok_or_else(|| Error::missing_argument(name))?),
                }
            } else if inline.is_some() {
                return Err(Error::UnknownOption(arg.clone()));
            } else {
                None
            };
            let value = value.unwrap_or_default();

            match opt {
                Opt::Help => return Ok(Self::early(Action::Help, verbose)),
                Opt::Version => return Ok(Self::early(Action::Version, verbose)),
                Opt::Verbose => verbose = verbose.saturating_add(1),
                Opt::Toggle => commands.push(Command::Toggle),
                Opt::Pass => commands.push(Command::Pass),
                Opt::Reject => commands.push(Command::Reject),
                Opt::Move => commands.push(Command::MoveTo(parse_count(name, &value)?)),
                Opt::Jump => commands.push(Command::JumpBy(parse_count(name, &value)?)),
                Opt::Find => commands.push(Command::FindTag(value.into_bytes())),
                Opt::Skip => commands.push(Command::SkipTag(value.into_bytes())),
                Opt::Left => range.left = Some(parse_count(name, &value)?),
                Opt::Right => range.right = Some(parse_count(name, &value)?),
                Opt::Invert => range.invert = true,
            }
        }

        if range.is_set() {
            if !commands.is_empty() {
                return Err(Error::invalid_range(
                    "--left/--right/--invert cannot be combined with command options",
                ));
            }
            commands = range.compile()?;
        }

        let input = match input {
            None => Input::Stdin,
            Some(path) if path == "-" => Input::Stdin,
            Some(path) => Input::File(PathBuf::from(path)),
        };

        Ok(Invocation {
            action: Action::Run,
            commands: CommandTable::new(commands),
            input,
            verbose,
        })
    }

    fn early(action: Action, verbose: u8) -> Invocation {
        Invocation {
            action,
            commands: CommandTable::default(),
            input: Input::Stdin,
            verbose,
        }
    }

    fn advance(&mut self) -> Option<String> {
        let arg = self.args.get(self.current).cloned();
        if arg.is_some() {
            self.current += 1;
        }
        arg
    }
}

/// Split `--name=value` or `-Xvalue` into the option name and its inline value
fn split_option(arg: &str) -> (&str, Option<&str>) {
    if arg.starts_with("--") {
        match arg.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (arg, None),
        }
    } else {
        let boundary = arg
            .char_indices()
            .nth(2)
            .map(|(i, _)| i)
            .unwrap_or(arg.len());
        let (name, rest) = arg.split_at(boundary);
        (name, (!rest.is_empty()).then_some(rest))
    }
}

fn parse_count(option: &str, value: &str) -> Result<usize> {
    value
        .parse::<usize>()
        .map_err(|_| Error::invalid_number(option, value))
}

fn set_input(input: &mut Option<String>, arg: String) -> Result<()> {
    if input.is_some() {
        return Err(Error::ExtraInput(arg));
    }
    *input = Some(arg);
    Ok(())
}
