//! Note header codec
//!
//! Every note starts with a fixed five-line block:
//!
//! ```text
//! ---
//! ID:{id}
//! TITLE:{title}
//! TAGS:{tag,tag,...}
//! ---
//! ```
//!
//! Lines 1-3 are `KEY:value` pairs; the value is everything after the first
//! `:` with surrounding whitespace trimmed. Keys and delimiter lines are not
//! checked, only their presence.

use std::fs::OpenOptions;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{HeaderError, NotebookError, Result};
use crate::note::{Note, NoteHeader};

/// Delimiter line opening and closing the header
pub const DELIMITER: &str = "---";

/// Number of lines in a header block
pub const HEADER_LINES: usize = 5;

/// Extension of note files
pub const NOTE_EXTENSION: &str = "md";

const ID_LINE: usize = 1;
const TITLE_LINE: usize = 2;
const TAGS_LINE: usize = 3;

/// Render the header block for a new note. Tags are always empty at creation.
pub fn render_header(id: &str, title: &str) -> String {
    format!("{DELIMITER}\nID:{id}\nTITLE:{title}\nTAGS:\n{DELIMITER}\n")
}

/// File name for a note id
pub fn note_file_name(id: &str) -> String {
    format!("{id}.{NOTE_EXTENSION}")
}

/// Create `{dir}/{id}.md` containing a fresh header.
///
/// The file must not already exist. Ids are expected to be unique by
/// construction, so there is no retry.
pub fn write_note(dir: &Path, id: &str, title: &str) -> Result<PathBuf> {
    let path = dir.join(note_file_name(id));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => NotebookError::AlreadyExists { path: path.clone() },
            _ => NotebookError::Io(e),
        })?;

    file.write_all(render_header(id, title).as_bytes())?;
    file.flush()?;

    debug!("Wrote header for {}", path.display());
    Ok(path)
}

/// Read the header of a note file. Only the first five lines are read.
pub fn read_header(path: &Path) -> Result<NoteHeader> {
    let mut reader = BufReader::new(std::fs::File::open(path)?);
    let mut lines = Vec::with_capacity(HEADER_LINES);

    for _ in 0..HEADER_LINES {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        lines.push(line);
    }

    parse_header_lines(&lines).map_err(|e| NotebookError::format(path, e))
}

/// Parse a header from the start of `content`
pub fn parse_header(content: &str) -> std::result::Result<NoteHeader, HeaderError> {
    parse_note(content).map(|note| note.header)
}

/// Parse a whole note into its header and body
pub fn parse_note(content: &str) -> std::result::Result<Note, HeaderError> {
    let mut lines = Vec::with_capacity(HEADER_LINES);
    let mut offset = 0;

    for line in content.split_inclusive('\n').take(HEADER_LINES) {
        offset += line.len();
        lines.push(line);
    }

    let header = parse_header_lines(&lines)?;
    Ok(Note {
        header,
        body: content[offset..].to_string(),
    })
}

fn parse_header_lines<S: AsRef<str>>(lines: &[S]) -> std::result::Result<NoteHeader, HeaderError> {
    if lines.len() < HEADER_LINES {
        return Err(HeaderError::MissingLine { line: lines.len() });
    }

    let id = field_value(lines, ID_LINE)?;
    let title = field_value(lines, TITLE_LINE)?;
    let tags = field_value(lines, TAGS_LINE)?
        .split(',')
        .map(str::to_string)
        .collect();

    Ok(NoteHeader {
        id: id.to_string(),
        title: title.to_string(),
        tags,
    })
}

fn field_value<S: AsRef<str>>(lines: &[S], index: usize) -> std::result::Result<&str, HeaderError> {
    let line = lines[index].as_ref();
    line.split_once(':')
        .map(|(_, value)| value.trim())
        .ok_or_else(|| HeaderError::MissingSeparator {
            line: index,
            content: line.trim_end().to_string(),
        })
}
