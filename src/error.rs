use std::io;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::redirect::{Ask, Moved};

/// The kind of an [Error].
///
/// Kinds form a shallow hierarchy: [ErrorKind::Timeout] and [ErrorKind::Closed] are I/O
/// failures, and [ErrorKind::Moved] and [ErrorKind::Ask] are reply errors. Use the `is_*`
/// methods to handle a whole category at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
	Io,
	Timeout,
	Closed,
	Proto,
	Oom,
	Reply,
	Moved,
	Ask,
}

impl ErrorKind {
	/// Whether this kind is a failure of the underlying connection.
	pub fn is_io(self) -> bool {
		matches!(self, Self::Io | Self::Timeout | Self::Closed)
	}

	/// Whether this kind is an error reported by the server.
	pub fn is_reply(self) -> bool {
		matches!(self, Self::Reply | Self::Moved | Self::Ask)
	}

	/// Whether this kind is a cluster redirection.
	pub fn is_redirect(self) -> bool {
		matches!(self, Self::Moved | Self::Ask)
	}

	/// Message used when an error is raised without one.
	pub(crate) fn description(self) -> &'static str {
		match self {
			Self::Io => "IO error",
			Self::Timeout => "operation timed out",
			Self::Closed => "connection closed",
			Self::Proto => "protocol error",
			Self::Oom => "out of memory",
			Self::Reply => "error reply",
			Self::Moved => "MOVED redirection",
			Self::Ask => "ASK redirection",
		}
	}
}

/// A Redis client error.
///
/// The displayed text is always the message that the error was raised with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// Sending or receiving failed.
	#[error("{0}")]
	Io(String),
	/// An I/O operation exceeded its deadline.
	#[error("{0}")]
	Timeout(String),
	/// The connection was already closed.
	#[error("{0}")]
	Closed(String),
	/// The peer violated the protocol.
	#[error("{0}")]
	Proto(String),
	/// The peer ran out of memory.
	#[error("{0}")]
	Oom(String),
	/// The server replied with an error.
	#[error("{0}")]
	Reply(String),
	/// The slot has moved to another node.
	#[error("{0}")]
	Moved(Moved),
	/// The slot is being migrated; ask another node.
	#[error("{0}")]
	Ask(Ask),
}

impl Error {
	pub fn io(message: impl Into<String>) -> Self {
		Self::Io(described(ErrorKind::Io, message))
	}

	pub fn timeout(message: impl Into<String>) -> Self {
		Self::Timeout(described(ErrorKind::Timeout, message))
	}

	pub fn closed(message: impl Into<String>) -> Self {
		Self::Closed(described(ErrorKind::Closed, message))
	}

	pub fn proto(message: impl Into<String>) -> Self {
		Self::Proto(described(ErrorKind::Proto, message))
	}

	pub fn oom(message: impl Into<String>) -> Self {
		Self::Oom(described(ErrorKind::Oom, message))
	}

	pub fn reply(message: impl Into<String>) -> Self {
		Self::Reply(described(ErrorKind::Reply, message))
	}

	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) => ErrorKind::Io,
			Self::Timeout(_) => ErrorKind::Timeout,
			Self::Closed(_) => ErrorKind::Closed,
			Self::Proto(_) => ErrorKind::Proto,
			Self::Oom(_) => ErrorKind::Oom,
			Self::Reply(_) => ErrorKind::Reply,
			Self::Moved(_) => ErrorKind::Moved,
			Self::Ask(_) => ErrorKind::Ask,
		}
	}

	/// The message this error was raised with.
	pub fn message(&self) -> &str {
		match self {
			Self::Io(msg)
			| Self::Timeout(msg)
			| Self::Closed(msg)
			| Self::Proto(msg)
			| Self::Oom(msg)
			| Self::Reply(msg) => msg,
			Self::Moved(moved) => moved.message(),
			Self::Ask(ask) => ask.message(),
		}
	}

	/// See [ErrorKind::is_io].
	#[inline]
	pub fn is_io(&self) -> bool {
		self.kind().is_io()
	}

	/// See [ErrorKind::is_reply].
	#[inline]
	pub fn is_reply(&self) -> bool {
		self.kind().is_reply()
	}

	/// See [ErrorKind::is_redirect].
	#[inline]
	pub fn is_redirect(&self) -> bool {
		self.kind().is_redirect()
	}
}

impl From<io::Error> for Error {
	fn from(err: io::Error) -> Self {
		let message = err.to_string();

		match err.kind() {
			io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted => {
				Self::timeout(message)
			}
			io::ErrorKind::UnexpectedEof
			| io::ErrorKind::ConnectionReset
			| io::ErrorKind::ConnectionAborted
			| io::ErrorKind::BrokenPipe
			| io::ErrorKind::NotConnected => Self::closed(message),
			io::ErrorKind::OutOfMemory => Self::oom(message),
			io::ErrorKind::InvalidData => Self::proto(message),
			_ => Self::io(message),
		}
	}
}

pub(crate) fn described(kind: ErrorKind, message: impl Into<String>) -> String {
	let message = message.into();
	if message.trim().is_empty() {
		kind.description().to_string()
	} else {
		message
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
