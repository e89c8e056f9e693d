#[derive(Debug)]
pub struct SimpleStringError {
  description: String
}

impl std::fmt::Display for SimpleStringError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl std::error::Error for SimpleStringError {
}

#[derive(Debug)]
pub enum Error {
  InvalidArgument {
    error: SimpleStringError
  },
  IO {
    error: std::io::Error
  },
  Csv {
    error: csv::Error
  }
}

impl Error {
  pub fn invalid_argument<S: Into<String>>(description: S) -> Self {
    Error::InvalidArgument {
      error: SimpleStringError {
        description: description.into()
      }
    }
  }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidArgument { error } => write!(f, "invalid argument: {}", error),
            Error::IO { error } => write!(f, "{}", error),
            Error::Csv { error } => write!(f, "csv: {}", error)
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidArgument { error } => Some(error),
            Error::IO { error } => Some(error),
            Error::Csv { error } => Some(error)
        }
    }
}

impl From<std::io::Error> for Error {
  fn from(error: std::io::Error) -> Self {
    Error::IO { error: error }
  }
}

// The csv writer wraps sink failures; hand the io::Error back untouched.
impl From<csv::Error> for Error {
  fn from(error: csv::Error) -> Self {
    if !error.is_io_error() {
      return Error::Csv { error: error };
    }
    match error.into_kind() {
      csv::ErrorKind::Io(error) => Error::IO { error: error },
      kind => Error::Csv {
        error: csv::Error::from(std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", kind)))
      }
    }
  }
}

impl From<String> for Error {
  fn from(description: String) -> Self {
    Error::invalid_argument(description)
  }
}
