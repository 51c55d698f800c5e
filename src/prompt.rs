//! Line-based prompt primitives.
//!
//! Every prompt follows the same contract: ask, read a line, lowercase and
//! trim it, parse. Invalid input triggers a prompt-specific apology plus a
//! "Do you want to continue? Y/N" confirmation — anything but y/yes ends
//! the whole program. EOF on stdin counts as declining.
//!
//! All functions take the reader and writer explicitly so tests can drive
//! them with in-memory buffers.

use std::io::{self, BufRead, Write};

/// Outcome of a prompt: a parsed value, or the user's decision to quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    Quit,
}

/// Read one line, trimmed and lowercased. `None` on EOF.
pub fn read_reply<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_lowercase()))
}

/// Ask `question` until `parse` accepts the reply.
///
/// On a reply `parse` rejects, print `sorry` and the continue confirmation;
/// a non-affirmative answer there returns [`Answer::Quit`].
pub fn ask<R, W, T, F>(
    input: &mut R,
    out: &mut W,
    question: &str,
    sorry: &str,
    parse: F,
) -> io::Result<Answer<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        writeln!(out, "\n{question}")?;
        out.flush()?;
        let Some(reply) = read_reply(input)? else {
            return Ok(Answer::Quit);
        };
        if let Some(value) = parse(&reply) {
            return Ok(Answer::Value(value));
        }

        writeln!(out, "{sorry} Do you want to continue? Y/N")?;
        out.flush()?;
        let Some(confirm) = read_reply(input)? else {
            return Ok(Answer::Quit);
        };
        if confirm != "y" && confirm != "yes" {
            return Ok(Answer::Quit);
        }
    }
}

/// Yes/no prompt with the standard retry loop.
pub fn ask_yes_no<R, W>(
    input: &mut R,
    out: &mut W,
    question: &str,
    sorry: &str,
) -> io::Result<Answer<bool>>
where
    R: BufRead,
    W: Write,
{
    ask(input, out, question, sorry, |reply| match reply {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    })
}
