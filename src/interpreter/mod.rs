pub mod step;

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::command::CommandTable;
use crate::error::Result;
use crate::reader::LineReader;

pub use step::StepResult;

/// Counters collected over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines_read: usize,
    pub lines_emitted: usize,
    pub bytes_read: usize,
    pub bytes_emitted: usize,
}

/// Executes a command table against a line stream
pub struct Interpreter<'a> {
    /// The command program
    commands: &'a CommandTable,

    /// Whether lines are currently emitted
    pub(crate) pass: bool,
    /// Index of the pending command
    pub(crate) cursor: usize,

    /// Lines consumed so far by a pending `JumpBy`
    pub(crate) progress: usize,
    /// Tag length cached by a pending `FindTag`/`SkipTag`
    pub(crate) search: Option<usize>,

    pub(crate) stats: RunStats,
}

impl<'a> Interpreter<'a> {
    pub fn new(commands: &'a CommandTable) -> Self {
        Self {
            commands,
            pass: false,
            cursor: 0,
            progress: 0,
            search: None,
            stats: RunStats::default(),
        }
    }

    /// Current pass state
    pub fn pass(&self) -> bool {
        self.pass
    }

    /// Index of the pending command; equals the table length in pass-through mode
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Filter `input` into `output` until end of stream
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<RunStats> {
        debug!(commands = self.commands.len(), "starting run");
        let mut reader = LineReader::new(input);

        while let Some(line) = reader.next_line()? {
            self.stats.lines_read += 1;
            trace!(index = line.index, cursor = self.cursor, pass = self.pass, "line");

            while self.step(&line, output)? == StepResult::Advance {}
        }

        if self.search.is_some() {
            debug!(cursor = self.cursor, "input ended before tag was found");
        }

        self.stats.bytes_read = reader.bytes_read();
        output.flush()?;

        debug!(
            lines_read = self.stats.lines_read,
            lines_emitted = self.stats.lines_emitted,
            "run finished"
        );
        Ok(self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use std::io::Cursor;

    fn run_lines(commands: Vec<Command>, input: &str) -> String {
        let table = CommandTable::new(commands);
        let mut interpreter = Interpreter::new(&table);
        let mut output = Vec::new();
        interpreter.run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_empty_table_emits_nothing() {
        assert_eq!(run_lines(vec![], "a\nb\nc\n"), "");
    }

    #[test]
    fn test_pass_is_identity() {
        assert_eq!(run_lines(vec![Command::Pass], "a\nb\nc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_pass_twice_is_fixed_point() {
        let once = run_lines(vec![Command::Pass], "one\ntwo\nthree");
        let twice = run_lines(vec![Command::Pass], &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(run_lines(vec![Command::Toggle], "a\nb\n"), "a\nb\n");
        assert_eq!(run_lines(vec![Command::Toggle, Command::Toggle], "a\nb\n"), "");
    }

    #[test]
    fn test_reject_after_pass() {
        assert_eq!(run_lines(vec![Command::Pass, Command::Reject], "a\nb\n"), "");
    }

    #[test]
    fn test_move_then_pass() {
        let output = run_lines(vec![Command::MoveTo(2), Command::Pass], "a\nb\nc\nd\n");
        assert_eq!(output, "c\nd\n");
    }

    #[test]
    fn test_move_to_zero_is_immediate() {
        let output = run_lines(vec![Command::MoveTo(0), Command::Pass], "a\nb\n");
        assert_eq!(output, "a\nb\n");
    }

    #[test]
    fn test_move_backwards_is_immediate() {
        let output = run_lines(
            vec![Command::MoveTo(2), Command::Pass, Command::MoveTo(1), Command::Reject],
            "a\nb\nc\nd\n",
        );
        assert_eq!(output, "");
    }

    #[test]
    fn test_move_past_end() {
        let output = run_lines(vec![Command::Pass, Command::MoveTo(10)], "a\nb\n");
        assert_eq!(output, "a\nb\n");
    }

    #[test]
    fn test_jump_then_reject() {
        let output = run_lines(
            vec![Command::Pass, Command::JumpBy(2), Command::Reject],
            "a\nb\nc\nd\n",
        );
        assert_eq!(output, "a\nb\n");
    }

    #[test]
    fn test_jump_zero() {
        let output = run_lines(vec![Command::Pass, Command::JumpBy(0), Command::Reject], "a\n");
        assert_eq!(output, "");
    }

    #[test]
    fn test_consecutive_jumps_do_not_share_progress() {
        let output = run_lines(
            vec![
                Command::JumpBy(1),
                Command::Pass,
                Command::JumpBy(2),
                Command::Reject,
            ],
            "a\nb\nc\nd\ne\n",
        );
        assert_eq!(output, "b\nc\n");
    }

    #[test]
    fn test_find_leaves_match_for_next_command() {
        let commands = vec![Command::Pass, Command::find("END"), Command::Reject];
        assert_eq!(run_lines(commands, "x\nEND\ny\n"), "x\n");
    }

    #[test]
    fn test_skip_consumes_match() {
        let commands = vec![Command::Pass, Command::skip("END"), Command::Reject];
        assert_eq!(run_lines(commands, "x\nEND\ny\n"), "x\nEND\n");
    }

    #[test]
    fn test_find_then_fallthrough_keeps_pass() {
        let commands = vec![Command::Pass, Command::find("END")];
        assert_eq!(run_lines(commands, "x\nEND\ny\n"), "x\nEND\ny\n");
    }

    #[test]
    fn test_find_while_rejecting() {
        let commands = vec![Command::find("BEGIN"), Command::Pass];
        assert_eq!(run_lines(commands, "a\nBEGIN\nb\n"), "BEGIN\nb\n");
    }

    #[test]
    fn test_skip_while_rejecting() {
        let commands = vec![Command::skip("BEGIN"), Command::Pass];
        assert_eq!(run_lines(commands, "a\nBEGIN\nb\n"), "b\n");
    }

    #[test]
    fn test_tag_is_prefix_match() {
        let commands = vec![Command::find("ab"), Command::Pass];
        assert_eq!(run_lines(commands, "a\nxab\nabc\nd\n"), "abc\nd\n");
    }

    #[test]
    fn test_tag_longer_than_line() {
        let commands = vec![Command::find("abcdef"), Command::Pass];
        assert_eq!(run_lines(commands, "abc\nabcdefg\n"), "abcdefg\n");
    }

    #[test]
    fn test_empty_tag_matches_immediately() {
        assert_eq!(run_lines(vec![Command::find(""), Command::Pass], "a\nb\n"), "a\nb\n");
        assert_eq!(run_lines(vec![Command::skip(""), Command::Pass], "a\nb\n"), "b\n");
    }

    #[test]
    fn test_tag_not_found_is_silent() {
        let table = CommandTable::new(vec![Command::Pass, Command::find("nope"), Command::Reject]);
        let mut interpreter = Interpreter::new(&table);
        let mut output = Vec::new();
        let stats = interpreter.run(Cursor::new("a\nb\n"), &mut output).unwrap();
        assert_eq!(output, b"a\nb\n");
        assert_eq!(interpreter.cursor(), 1);
        assert_eq!(stats.lines_emitted, 2);
    }

    #[test]
    fn test_same_tag_twice() {
        let commands = vec![
            Command::skip("--"),
            Command::Pass,
            Command::find("--"),
            Command::Reject,
        ];
        assert_eq!(run_lines(commands, "h\n--\nbody\n--\nt\n"), "body\n");
    }

    #[test]
    fn test_unterminated_last_line_emitted() {
        assert_eq!(run_lines(vec![Command::Pass], "a\nb"), "a\nb");
    }

    #[test]
    fn test_unterminated_last_line_not_counted() {
        let commands = vec![Command::MoveTo(2), Command::Pass];
        assert_eq!(run_lines(commands, "a\nb"), "");
        let commands = vec![Command::MoveTo(1), Command::Pass];
        assert_eq!(run_lines(commands, "a\nb"), "b");
    }

    #[test]
    fn test_state_after_run() {
        let table = CommandTable::new(vec![Command::Pass, Command::JumpBy(1)]);
        let mut interpreter = Interpreter::new(&table);
        let mut output = Vec::new();
        interpreter.run(Cursor::new("a\nb\n"), &mut output).unwrap();
        assert!(interpreter.pass());
        assert_eq!(interpreter.cursor(), 2);
    }

    #[test]
    fn test_stats() {
        let table = CommandTable::new(vec![Command::MoveTo(1), Command::Pass]);
        let mut interpreter = Interpreter::new(&table);
        let mut output = Vec::new();
        let stats = interpreter.run(Cursor::new("aa\nbbb\ncc"), &mut output).unwrap();
        assert_eq!(
            stats,
            RunStats {
                lines_read: 3,
                lines_emitted: 2,
                bytes_read: 9,
                bytes_emitted: 6,
            }
        );
        assert_eq!(interpreter.stats(), stats);
    }

    #[test]
    fn test_free_commands_chain_before_consuming() {
        let commands = vec![
            Command::Reject,
            Command::Toggle,
            Command::Toggle,
            Command::Pass,
            Command::JumpBy(1),
            Command::Toggle,
        ];
        assert_eq!(run_lines(commands, "a\nb\n"), "a\n");
    }
}
