//! File kinds and metadata records produced by `lstat`.

use std::fmt;
use std::fs::{FileType, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};

// File-type bits of `st_mode` as filled in by lstat(2); see inode(7).
const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

/// The type of a filesystem entry as encoded in its mode bits.
///
/// # Examples
///
/// ```
/// use linkstat::FileKind;
///
/// assert_eq!(FileKind::from_mode(0o100_644), FileKind::Regular);
/// assert_eq!(FileKind::from_mode(0o120_777).typeword(), "symlink");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Block device.
    BlockDevice,
    /// Character device.
    CharDevice,
    /// Directory.
    Directory,
    /// Named pipe.
    Fifo,
    /// Symbolic link.
    Symlink,
    /// Regular file.
    Regular,
    /// Unix domain socket.
    Socket,
    /// Any type bits the platform reports that are not listed above.
    Unknown,
}

impl FileKind {
    /// Classifies the file type reported by a no-follow lookup.
    #[must_use]
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_file() {
            Self::Regular
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_block_device() {
            Self::BlockDevice
        } else if file_type.is_char_device() {
            Self::CharDevice
        } else if file_type.is_fifo() {
            Self::Fifo
        } else if file_type.is_socket() {
            Self::Socket
        } else {
            Self::Unknown
        }
    }

    /// Classifies a raw `st_mode` value.
    #[must_use]
    pub fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFBLK => Self::BlockDevice,
            S_IFCHR => Self::CharDevice,
            S_IFDIR => Self::Directory,
            S_IFIFO => Self::Fifo,
            S_IFLNK => Self::Symlink,
            S_IFREG => Self::Regular,
            S_IFSOCK => Self::Socket,
            _ => Self::Unknown,
        }
    }

    /// The word used for this kind on the type line.
    #[must_use]
    pub fn typeword(self) -> &'static str {
        match self {
            Self::BlockDevice => "block device",
            Self::CharDevice => "character device",
            Self::Directory => "directory",
            Self::Fifo => "FIFO/pipe",
            Self::Symlink => "symlink",
            Self::Regular => "regular file",
            Self::Socket => "socket",
            Self::Unknown => "unknown?",
        }
    }

    /// Whether this entry must be followed rather than reported.
    #[must_use]
    pub fn is_symlink(self) -> bool {
        self == Self::Symlink
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.typeword())
    }
}

/// Raw attributes of one filesystem entry, as returned by `lstat`.
///
/// Timestamps are whole seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    /// Entry type.
    pub kind: FileKind,
    /// Inode number.
    pub ino: u64,
    /// Full mode bits, type included.
    pub mode: u32,
    /// Number of hard links.
    pub nlink: u64,
    /// Owner user id.
    pub uid: u32,
    /// Owner group id.
    pub gid: u32,
    /// Preferred I/O block size.
    pub blksize: u64,
    /// Size in bytes.
    pub size: u64,
    /// Number of 512-byte blocks allocated.
    pub blocks: u64,
    /// Last status change.
    pub ctime: i64,
    /// Last access.
    pub atime: i64,
    /// Last modification.
    pub mtime: i64,
}

impl MetadataRecord {
    /// Captures the attributes of `metadata`.
    #[must_use]
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            kind: FileKind::from_file_type(metadata.file_type()),
            ino: metadata.ino(),
            mode: metadata.mode(),
            nlink: metadata.nlink(),
            uid: metadata.uid(),
            gid: metadata.gid(),
            blksize: metadata.blksize(),
            size: metadata.size(),
            blocks: metadata.blocks(),
            ctime: metadata.ctime(),
            atime: metadata.atime(),
            mtime: metadata.mtime(),
        }
    }
}

impl From<&Metadata> for MetadataRecord {
    fn from(metadata: &Metadata) -> Self {
        Self::from_metadata(metadata)
    }
}
