use thiserror::Error;

pub type Result<T> = std::result::Result<T, RleError>;

#[derive(Error, Debug)]
pub enum RleError {
	#[error("bad encoding: truncated block after marker ({} bytes left, need count and value)", .remaining.len())]
	BadEncoding {
		/// Unconsumed tail of the input at the point of failure, for diagnostics.
		remaining: Vec<u8>,
	},

	#[error("decoded data is not valid UTF-8")]
	InvalidUtf8(#[from] std::string::FromUtf8Error),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
