use std::io::{self, Read};

use aho_corasick::AhoCorasick;
use core_2048::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Reset,
    Quit,
}

// Indexed by pattern id.
const PATTERNS: [&[u8]; 6] = [b"\x1b[A", b"\x1b[B", b"\x1b[C", b"\x1b[D", b"r", b"q"];
const COMMANDS: [Command; 6] = [
    Command::Move(Direction::Up),
    Command::Move(Direction::Down),
    Command::Move(Direction::Right),
    Command::Move(Direction::Left),
    Command::Reset,
    Command::Quit,
];

/// Turns raw terminal bytes into commands. Bytes that are not part of a known
/// key are dropped.
pub struct KeyDecoder {
    searcher: AhoCorasick,
    buf: [u8; 128],
    buf_len: usize,
}

impl KeyDecoder {
    pub fn new() -> io::Result<Self> {
        let searcher = AhoCorasick::new(PATTERNS)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

        Ok(Self {
            searcher,
            buf: [0; 128],
            buf_len: 0,
        })
    }

    /// Performs one read and decodes everything available. End of input is
    /// reported as [`Command::Quit`].
    pub fn read_commands(&mut self, input: &mut impl Read) -> io::Result<Vec<Command>> {
        let read = input.read(&mut self.buf[self.buf_len..])?;

        if read == 0 {
            return Ok(vec![Command::Quit]);
        }

        self.buf_len += read;

        Ok(self.take_commands())
    }

    fn take_commands(&mut self) -> Vec<Command> {
        let commands = self
            .searcher
            .find_iter(&self.buf[..self.buf_len])
            .map(|m| COMMANDS[m.pattern().as_usize()])
            .collect();

        // Keep an escape sequence that was cut off by the read.
        self.buf_len = match &self.buf[..self.buf_len] {
            [.., 0x1b, b'['] => {
                self.buf[..2].copy_from_slice(b"\x1b[");
                2
            }
            [.., 0x1b] => {
                self.buf[0] = 0x1b;
                1
            }
            _ => 0,
        };

        commands
    }
}
