//! .
//!
//! Minimal error surface: the geometry core consists of total functions and
//! never fails; errors only arise on the image IO paths of the drawing
//! feature and the demos.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(pub ErrorKind);

#[derive(Debug)]
pub enum ErrorKind {
  IoError(std::io::Error),
  #[cfg(feature = "image")]
  ImageError(image::ImageError),
  Msg(String)
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error(ErrorKind::IoError(e))
  }
}

#[cfg(feature = "image")]
impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self {
    Error(ErrorKind::ImageError(e))
  }
}

impl From<String> for Error {
  fn from(msg: String) -> Self {
    Error(ErrorKind::Msg(msg))
  }
}

impl From<&str> for Error {
  fn from(msg: &str) -> Self {
    Error(ErrorKind::Msg(msg.to_string()))
  }
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    use ErrorKind::*;
    match self {
      IoError(err) => write!(fmt, "{}", err),
      #[cfg(feature = "image")]
      ImageError(err) => write!(fmt, "{}", err),
      Msg(msg) => write!(fmt, "{}", msg)
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    write!(fmt, "{}", self.0)
  }
}

impl std::error::Error for Error {}
