#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lines::{Command, CommandTable, Interpreter};
use std::io::Cursor;

#[derive(Debug, Arbitrary)]
enum FuzzCommand {
    Toggle,
    Pass,
    Reject,
    MoveTo(u16),
    JumpBy(u8),
    FindTag(Vec<u8>),
    SkipTag(Vec<u8>),
}

impl From<FuzzCommand> for Command {
    fn from(command: FuzzCommand) -> Self {
        match command {
            FuzzCommand::Toggle => Command::Toggle,
            FuzzCommand::Pass => Command::Pass,
            FuzzCommand::Reject => Command::Reject,
            FuzzCommand::MoveTo(index) => Command::MoveTo(index as usize),
            FuzzCommand::JumpBy(count) => Command::JumpBy(count as usize),
            FuzzCommand::FindTag(tag) => Command::FindTag(tag),
            FuzzCommand::SkipTag(tag) => Command::SkipTag(tag),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    commands: Vec<FuzzCommand>,
    input: Vec<u8>,
}

fuzz_target!(|data: FuzzInput| {
    // Limit input sizes to keep runs short
    if data.commands.len() > 64 || data.input.len() > 100_000 {
        return;
    }

    let table: CommandTable = data.commands.into_iter().map(Command::from).collect();
    let mut interpreter = Interpreter::new(&table);
    let mut output = Vec::new();
    let stats = interpreter.run(Cursor::new(&data.input), &mut output).unwrap();

    assert!(output.len() <= data.input.len());
    assert_eq!(stats.bytes_emitted, output.len());
    assert_eq!(stats.bytes_read, data.input.len());
});
