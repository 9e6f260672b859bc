use tracing::debug;

use crate::{error::described, Error, ErrorKind};

/// An error code reported by the connection layer.
///
/// Mirrors the hiredis `REDIS_ERR_*` codes. There is no "no error" value; use
/// [ConnectionErrorCode::from_raw] to find out whether an error is pending at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionErrorCode {
	/// Reading or writing the socket failed.
	Io,
	/// The server closed the connection.
	Eof,
	/// The server sent data that isn't valid RESP.
	Protocol,
	/// Allocation failed.
	Oom,
	/// A connect, read or write deadline expired.
	Timeout,
	/// An error raised by the application using the connection.
	Other,
	/// A code this crate doesn't know about.
	Unknown(i32),
}

impl ConnectionErrorCode {
	/// Convert a raw hiredis status code, returning `None` for `REDIS_OK` (0).
	pub fn from_raw(code: i32) -> Option<Self> {
		Some(match code {
			0 => return None,
			1 => Self::Io,
			2 => Self::Other,
			3 => Self::Eof,
			4 => Self::Protocol,
			5 => Self::Oom,
			6 => Self::Timeout,
			other => Self::Unknown(other),
		})
	}

	/// The kind of error raised for this code. Codes without a dedicated kind are I/O errors.
	pub fn kind(self) -> ErrorKind {
		match self {
			Self::Eof => ErrorKind::Closed,
			Self::Protocol => ErrorKind::Proto,
			Self::Oom => ErrorKind::Oom,
			Self::Timeout => ErrorKind::Timeout,
			Self::Io | Self::Other | Self::Unknown(_) => ErrorKind::Io,
		}
	}
}

impl Error {
	/// Classify an error reported by the connection layer.
	pub fn from_connection(code: ConnectionErrorCode, message: impl Into<String>) -> Self {
		let kind = code.kind();
		let message = described(kind, message);
		debug!(?code, ?kind, error = %message, "connection error");

		match code {
			ConnectionErrorCode::Eof => Self::Closed(message),
			ConnectionErrorCode::Protocol => Self::Proto(message),
			ConnectionErrorCode::Oom => Self::Oom(message),
			ConnectionErrorCode::Timeout => Self::Timeout(message),
			ConnectionErrorCode::Io | ConnectionErrorCode::Other | ConnectionErrorCode::Unknown(_) => {
				Self::Io(message)
			}
		}
	}
}
