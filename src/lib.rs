//! Turns a binary file into a C `unsigned char` array declaration.
//!
//! The encoder walks the input in 16-byte windows and renders each window
//! as one indented line of comma-terminated hex literals. The assembler
//! wraps the body in a declaration named after the input file and writes
//! it to `<out_dir>/<name>.c`, ready to be compiled into a program.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Bytes per encoded line.
pub const WINDOW_LEN: usize = 16;

const INDENT: &str = "    ";

#[derive(Debug, Error)]
pub enum Error {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("output directory not found: {0}")]
    OutputDirNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Progress reporting for the encode loop.
pub trait EncodeProgress {
    /// Called after each window is rendered, with the zero-based window
    /// index and the total window count.
    fn on_window(&mut self, index: u64, total: u64);
}

/// Default no-op progress reporter.
pub struct NoProgress;

impl EncodeProgress for NoProgress {
    fn on_window(&mut self, _index: u64, _total: u64) {}
}

/// Derives the array name from the input path text.
///
/// Takes the last path segment (a backslash separator is checked before a
/// forward slash, and a bare filename is used as-is), then truncates at the
/// first dot, so `archive.tar.gz` becomes `archive`.
pub fn array_name(path: &str) -> String {
    let segment = if let Some(idx) = path.rfind('\\') {
        &path[idx + 1..]
    } else if let Some(idx) = path.rfind('/') {
        &path[idx + 1..]
    } else {
        path
    };

    segment.split('.').next().unwrap_or(segment).to_string()
}

/// Encodes the file at `path` into the declaration body.
///
/// The file size is measured once up front and exactly `size / 16` full
/// windows are read; a trailing partial window is dropped, never encoded.
/// Each byte becomes a lowercase `0x` literal with no zero padding
/// (`5` -> `0x5`, `255` -> `0xff`), each followed by a comma. A zero-byte
/// file yields an empty body.
pub fn encode<P: EncodeProgress>(path: &Path, progress: &mut P) -> Result<String, Error> {
    let size = fs::metadata(path)?.len();
    let total = size / WINDOW_LEN as u64;

    let mut file = File::open(path)?;
    let mut window = [0u8; WINDOW_LEN];
    let mut body = String::with_capacity(total as usize * (INDENT.len() + WINDOW_LEN * 5 + 1));

    for index in 0..total {
        file.read_exact(&mut window)?;

        body.push_str(INDENT);
        for byte in window {
            body.push_str(&format!("0x{:x},", byte));
        }
        body.push('\n');

        progress.on_window(index, total);
    }

    Ok(body)
}

/// Wraps an encoded body in the declaration header and trailer. The last
/// literal keeps its trailing comma; array-initializer syntax tolerates it.
pub fn assemble(name: &str, body: &str) -> String {
    format!("unsigned char __hex_file_{name}[] = {{\n{body}}};\n")
}

/// Writes the declaration to `<out_dir>/<name>.c`, silently replacing any
/// existing file at that path.
pub fn write_declaration(out_dir: &Path, name: &str, declaration: &str) -> Result<PathBuf, Error> {
    let path = out_dir.join(format!("{name}.c"));
    fs::write(&path, declaration)?;
    Ok(path)
}

/// Validates the input file and output directory, then runs the full
/// encode-assemble-write pipeline. Nothing is written until the entire
/// body has been encoded in memory. Returns the path of the generated file.
pub fn convert<P: EncodeProgress>(
    input: &Path,
    out_dir: &Path,
    progress: &mut P,
) -> Result<PathBuf, Error> {
    if !input.is_file() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    if !out_dir.is_dir() {
        return Err(Error::OutputDirNotFound(out_dir.to_path_buf()));
    }

    let name = array_name(&input.to_string_lossy());
    let body = encode(input, progress)?;

    write_declaration(out_dir, &name, &assemble(&name, &body))
}
