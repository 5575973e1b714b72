use std::{io, fmt};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::io::{BufRead, BufReader};

use common::Segment;

const TOKENS_PER_LINE: usize = 4;

#[derive(Debug)]
pub enum LoadError {
    Open { path: PathBuf, error: io::Error, },
    Read { line_no: usize, error: io::Error, },
    TokensCount { line_no: usize, line: String, found: usize, },
    NotANumber { line_no: usize, line: String, token: String, },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &LoadError::Open { ref path, ref error, } =>
                write!(f, "Cannot open {}: {}", path.display(), error),
            &LoadError::Read { line_no, ref error, } =>
                write!(f, "Read failure at line {}: {}", line_no, error),
            &LoadError::TokensCount { line_no, ref line, found, } =>
                write!(f, "Invalid line {}: {} (expected {} numbers, found {})", line_no, line, TOKENS_PER_LINE, found),
            &LoadError::NotANumber { line_no, ref line, ref token, } =>
                write!(f, "Invalid data at line {}: {} ({:?} is not a number)", line_no, line, token),
        }
    }
}

/// Parses `x1 y1 x2 y2` lines. The first malformed line aborts the whole parse,
/// nothing parsed before it is returned.
pub fn parse_segments<R>(reader: R) -> Result<Vec<Segment>, LoadError> where R: BufRead {
    let mut segments = Vec::new();
    for (index, maybe_line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = maybe_line
            .map_err(|error| LoadError::Read { line_no, error, })?;
        segments.push(parse_line(line_no, &line)?);
    }
    Ok(segments)
}

pub fn load_file<P>(path: P) -> Result<Vec<Segment>, LoadError> where P: AsRef<Path> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|error| LoadError::Open { path: path.to_path_buf(), error, })?;
    parse_segments(BufReader::new(file))
}

fn parse_line(line_no: usize, line: &str) -> Result<Segment, LoadError> {
    let tokens: Vec<_> = line.split_whitespace().collect();
    if tokens.len() != TOKENS_PER_LINE {
        return Err(LoadError::TokensCount {
            line_no,
            line: line.trim().to_string(),
            found: tokens.len(),
        });
    }
    let mut coords = [0.0; TOKENS_PER_LINE];
    for (coord, token) in coords.iter_mut().zip(tokens.iter()) {
        *coord = token.parse()
            .map_err(|_| LoadError::NotANumber {
                line_no,
                line: line.trim().to_string(),
                token: token.to_string(),
            })?;
    }
    Ok(Segment::new(coords[0], coords[1], coords[2], coords[3]))
}
