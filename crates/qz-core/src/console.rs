//! Line-oriented console driver for quiz sessions.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::score::Scorecard;
use crate::session::QuizSession;

/// A prompt/response channel over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: Vec::new(),
        }
    }

    /// Print `text` without a newline and read one line of input.
    ///
    /// Returns the line without its terminator, or `None` at end of input.
    /// Bytes that are not UTF-8 are replaced, so a garbled line still comes
    /// back as text for the caller to reject.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// The output side, for printing.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Unwrap into the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Play a session to the end and print the final score.
///
/// End of input stops the session early; unanswered questions count as wrong.
pub fn run_session<R: BufRead, W: Write>(
    mut session: QuizSession,
    console: &mut Console<R, W>,
) -> io::Result<Scorecard> {
    while let Some(prompt) = session.next_question() {
        debug!("presenting question {}/{}", prompt.number, prompt.total);
        writeln!(console.out(), "{prompt}")?;
        let Some(line) = console.prompt("answer number? ")? else {
            writeln!(console.out())?;
            break;
        };
        if let Some(verdict) = session.answer(&line) {
            writeln!(console.out(), "{verdict}")?;
        }
        writeln!(console.out())?;
    }

    let card = session.finish();
    writeln!(console.out(), "{card}")?;
    Ok(card)
}
