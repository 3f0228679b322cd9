use std::path::PathBuf;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GenErrorKind {
    Discovery,
    Write,
    Template,
}

#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("cannot list test cases in {}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("test case directory name is not valid UTF-8: {}", path.display())]
    NonUtf8Name { path: PathBuf },
    #[error("cannot reset output directory {}", path.display())]
    ResetDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no value supplied for placeholder ${name}")]
    MissingPlaceholder { name: String },
    #[error("invalid placeholder at line {line}, column {column}")]
    InvalidPlaceholder { line: usize, column: usize },
}

impl GenError {
    pub fn kind(&self) -> GenErrorKind {
        match self {
            GenError::Discovery { .. } | GenError::NonUtf8Name { .. } => GenErrorKind::Discovery,
            GenError::ResetDir { .. } | GenError::WriteFile { .. } => GenErrorKind::Write,
            GenError::MissingPlaceholder { .. } | GenError::InvalidPlaceholder { .. } => {
                GenErrorKind::Template
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
