//! Line formatters for inspection output.
//!
//! Each function renders one logical line without indentation or line
//! terminator; [`Console`](super::Console) adds both. Lines that quote a
//! path or link target are built as bytes so that names which are not
//! valid UTF-8 are printed exactly as the filesystem stores them.

use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use chrono::{Local, TimeZone};

use crate::entry::{FileKind, MetadataRecord};
use crate::error::Error;
use crate::link::LinkTarget;

/// `ctime(3)` layout, e.g. `Wed Jun 30 21:49:08 1993`.
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Formats seconds since the epoch as local time in `ctime(3)` layout.
///
/// Timestamps that cannot be represented fall back to the raw seconds.
#[must_use]
pub fn format_ctime(secs: i64) -> String {
    match Local.timestamp_opt(secs, 0).earliest() {
        Some(dt) => dt.format(CTIME_FORMAT).to_string(),
        None => format!("{secs} (seconds since epoch)"),
    }
}

fn push_quoted(line: &mut Vec<u8>, raw: &[u8]) {
    line.push(b'"');
    line.extend_from_slice(raw);
    line.push(b'"');
}

/// The framing line printed before each top-level argument.
#[must_use]
pub fn frame_line(arg: &Path) -> Vec<u8> {
    let mut line = Vec::with_capacity(arg.as_os_str().len() + 7);
    push_quoted(&mut line, arg.as_os_str().as_bytes());
    line.extend_from_slice(b" ==>>");
    line
}

/// `<typeword>: "<path>"`
#[must_use]
pub fn type_line(kind: FileKind, path: &Path) -> Vec<u8> {
    let mut line = format!("{kind}: ").into_bytes();
    push_quoted(&mut line, path.as_os_str().as_bytes());
    line
}

/// The ten attribute lines of a terminal record, in output order.
#[must_use]
pub fn record_lines(record: &MetadataRecord) -> Vec<String> {
    vec![
        format!("I-node number:            {}", record.ino),
        format!("Mode:                     {:o} (octal)", record.mode),
        format!("Link count:               {}", record.nlink),
        format!(
            "Ownership:                UID={}   GID={}",
            record.uid, record.gid
        ),
        format!("Preferred I/O block size: {} bytes", record.blksize),
        format!("File size:                {} bytes", record.size),
        format!("Blocks allocated:         {}", record.blocks),
        format!("Last status change:       {}", format_ctime(record.ctime)),
        format!("Last file access:         {}", format_ctime(record.atime)),
        format!("Last file modification:   {}", format_ctime(record.mtime)),
    ]
}

/// `ERROR: inspect(): on call to <syscall>(): "<path>"; ec=<n>; <message>`
#[must_use]
pub fn error_line(err: &Error) -> Vec<u8> {
    let mut line = format!("ERROR: inspect(): on call to {}(): ", err.syscall()).into_bytes();
    push_quoted(&mut line, err.path().as_os_str().as_bytes());
    line.extend_from_slice(format!("; {}", err.os_error()).as_bytes());
    line
}

/// Warning for a link target that filled the read buffer.
///
/// The target is quoted byte for byte, even when the cut landed inside a
/// multibyte character.
#[must_use]
pub fn truncation_warning(target: &LinkTarget) -> Vec<u8> {
    let mut line = b"WARN: ".to_vec();
    push_quoted(&mut line, target.as_bytes());
    line.extend_from_slice(b" may be a truncated file name due to buffer size limit");
    line
}
