use std::str::from_utf8;

use nom::{
	character::complete::{char, crlf, not_line_ending},
	combinator::{all_consuming, map_res},
	sequence::delimited,
	IResult,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
	error::described,
	redirect::{Ask, Moved},
	Error, ErrorKind,
};

/// The type of an error reply, determined by its first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReplyErrorType {
	/// Any error other than a redirection, e.g. `ERR` or `WRONGTYPE`.
	Err,
	Moved,
	Ask,
}

impl ReplyErrorType {
	pub fn of(text: &str) -> Self {
		match text.split(char::is_whitespace).next() {
			Some("MOVED") => Self::Moved,
			Some("ASK") => Self::Ask,
			_ => Self::Err,
		}
	}
}

fn error_frame(data: &[u8]) -> IResult<&[u8], &str> {
	all_consuming(map_res(
		delimited(char('-'), not_line_ending, crlf),
		from_utf8,
	))(data)
}

impl Error {
	/// Classify the text of an error reply (without the leading `-`).
	///
	/// A malformed `ASK` redirection is returned as [Error::Proto].
	pub fn from_reply(text: impl Into<String>) -> Self {
		let text = described(ErrorKind::Reply, text);
		let ty = ReplyErrorType::of(&text);

		let err = match ty {
			ReplyErrorType::Moved => Self::Moved(Moved::new(text)),
			ReplyErrorType::Ask => match Ask::new(text) {
				Ok(ask) => Self::Ask(ask),
				Err(err) => {
					warn!(reply = err.message(), "malformed ASK redirection");
					err
				}
			},
			ReplyErrorType::Err => Self::Reply(text),
		};

		debug!(?ty, kind = ?err.kind(), reply = err.message(), "error reply");
		err
	}

	/// Classify a complete RESP error frame, e.g. `-ERR unknown command\r\n`.
	///
	/// Anything other than a single error frame is a protocol error.
	pub fn from_frame(frame: &[u8]) -> Self {
		match error_frame(frame) {
			Ok((_, text)) => Self::from_reply(text),
			Err(_) => Self::proto(format!(
				"expected error reply, got {:?}",
				String::from_utf8_lossy(frame)
			)),
		}
	}
}
