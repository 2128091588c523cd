//! The numbered console menu that drives a [`Tree`] of `i32` keys.
//!
//! The session loop is written against [`BufRead`] and [`Write`] so it can
//! be exercised in tests with in-memory buffers instead of a terminal.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::tree::Tree;

/// One selectable menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a key and insert it.
    Insert,
    /// Print the keys in pre-order.
    PreOrder,
    /// Print the keys in in-order (ascending).
    InOrder,
    /// Print the keys in post-order.
    PostOrder,
    /// Print the number of keys.
    Count,
    /// Print the depth of the tree.
    Depth,
    /// Prompt for a key and remove it.
    Remove,
    /// End the session.
    Exit,
}

/// Error returned when a menu selection matches none of the numbered
/// options.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unavailable option: {input}")]
pub struct UnavailableOption {
    input: String,
}

impl FromStr for Command {
    type Err = UnavailableOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Insert),
            "2" => Ok(Self::PreOrder),
            "3" => Ok(Self::InOrder),
            "4" => Ok(Self::PostOrder),
            "5" => Ok(Self::Count),
            "6" => Ok(Self::Depth),
            "7" => Ok(Self::Remove),
            "8" => Ok(Self::Exit),
            other => Err(UnavailableOption {
                input: other.to_string(),
            }),
        }
    }
}

/// Runs the interactive session until the exit option is chosen or the
/// input reaches end of file.
///
/// Only the exit option ends the session on purpose; unknown selections and
/// non-numeric keys are reported on `output` and the menu is shown again.
pub fn run<R, W>(tree: &mut Tree<i32>, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Binary search tree console")?;
    loop {
        write_menu(output)?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        let selection = line.trim();
        if selection.is_empty() {
            continue;
        }
        match selection.parse::<Command>() {
            Ok(command) => {
                debug!(?command, "dispatching");
                match command {
                    Command::Insert => {
                        let Some(key) = read_key(input, output, "Key to insert: ")? else {
                            return Ok(());
                        };
                        if tree.insert(key) {
                            debug!(key, "inserted");
                        } else {
                            writeln!(output, "{key} already exists")?;
                        }
                    }
                    Command::PreOrder => write_traversal(output, "Pre-order", tree.pre_order())?,
                    Command::InOrder => write_traversal(output, "In-order", tree.iter())?,
                    Command::PostOrder => {
                        write_traversal(output, "Post-order", tree.post_order())?
                    }
                    Command::Count => writeln!(output, "{}", tree.count())?,
                    Command::Depth => writeln!(output, "{}", tree.depth())?,
                    Command::Remove => {
                        let Some(key) = read_key(input, output, "Key to remove: ")? else {
                            return Ok(());
                        };
                        // A missing key is silently ignored.
                        let removed = tree.remove(&key);
                        debug!(key, removed, "remove");
                    }
                    Command::Exit => return Ok(()),
                }
            }
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "-----------------------------")?;
    writeln!(output, " 1. Insert a key")?;
    writeln!(output, " 2. Pre-order traversal")?;
    writeln!(output, " 3. In-order traversal")?;
    writeln!(output, " 4. Post-order traversal")?;
    writeln!(output, " 5. Count nodes")?;
    writeln!(output, " 6. Tree depth")?;
    writeln!(output, " 7. Remove a key")?;
    writeln!(output, " 8. Exit")?;
    write!(output, "Select an option: ")?;
    output.flush()
}

fn write_traversal<'a, W>(
    output: &mut W,
    label: &str,
    keys: impl Iterator<Item = &'a i32>,
) -> io::Result<()>
where
    W: Write,
{
    write!(output, "{label}:")?;
    for key in keys {
        write!(output, " {key}")?;
    }
    writeln!(output)
}

/// Reads one line, or `None` once the input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prompts for an integer key until one parses, re-prompting on anything
/// else. `None` once the input is exhausted.
fn read_key<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<i32>>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let entry = line.trim();
        match entry.parse::<i32>() {
            Ok(key) => return Ok(Some(key)),
            Err(_) => writeln!(output, "'{entry}' is not an integer, try again")?,
        }
    }
}
