use std::path::{Path, PathBuf};
use std::{error, fmt, io, result};

#[derive(Debug)]
pub enum Error {
    PermissionDenied(PathBuf),
    NotADirectory(PathBuf),
    InvalidPath(PathBuf),
    IO(io::Error),
}

pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Classifies a failure of `create_dir_all` on `path`.
    ///
    /// `NotADirectory` produced here names `path` itself. To name the entry
    /// that is in the way, use `TargetDir::blocking_entry`.
    pub fn from_create_dir<P>(path: P, err: io::Error) -> Error
    where
        P: AsRef<Path>,
    {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.as_ref().to_owned()),
            io::ErrorKind::NotADirectory => Error::NotADirectory(path.as_ref().to_owned()),
            io::ErrorKind::InvalidInput => Error::InvalidPath(path.as_ref().to_owned()),
            _ => Error::IO(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::PermissionDenied(path) => write!(
                f,
                "Permission denied while creating directory: {}",
                path.display()
            ),
            Error::NotADirectory(path) => write!(f, "Not a directory: {}", path.display()),
            Error::InvalidPath(path) => write!(f, "The path is invalid: {}", path.display()),
            Error::IO(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IO(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IO(err)
    }
}
