use std::fmt::{self, Display};

use nom::{
	bytes::complete::{tag, take_till1},
	character::complete::{digit1, multispace0, space1},
	combinator::{all_consuming, map_res, verify},
	sequence::{preceded, terminated, tuple},
	IResult,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Node, Result};

/// The number of hash slots in a Redis cluster. Every slot is below this value.
pub const SLOT_COUNT: u16 = 16384;

fn slot(input: &str) -> IResult<&str, u16> {
	verify(map_res(digit1, str::parse), |slot: &u16| *slot < SLOT_COUNT)(input)
}

fn address(input: &str) -> IResult<&str, &str> {
	take_till1(char::is_whitespace)(input)
}

fn redirection<'a>(prefix: &str, input: &'a str) -> IResult<&'a str, (u16, &'a str)> {
	all_consuming(terminated(
		tuple((
			preceded(tag(prefix), preceded(space1, slot)),
			preceded(space1, address),
		)),
		multispace0,
	))(input)
}

/// Where a redirected command should be sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(Serialize, Deserialize),
	serde(try_from = "RedirectionParts", into = "RedirectionParts")
)]
pub struct Redirection {
	slot: u16,
	node: Node,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RedirectionParts {
	slot: u16,
	node: Node,
}

#[cfg(feature = "serde")]
impl TryFrom<RedirectionParts> for Redirection {
	type Error = Error;

	fn try_from(parts: RedirectionParts) -> Result<Self> {
		Self::new(parts.slot, parts.node)
	}
}

#[cfg(feature = "serde")]
impl From<Redirection> for RedirectionParts {
	fn from(redirection: Redirection) -> Self {
		Self {
			slot: redirection.slot,
			node: redirection.node,
		}
	}
}

impl Redirection {
	/// Fails with [Error::Proto] if `slot` isn't below [SLOT_COUNT].
	pub fn new(slot: u16, node: Node) -> Result<Self> {
		if slot >= SLOT_COUNT {
			return Err(Error::proto(format!("Invalid slot {slot} for node {node}")));
		}

		Ok(Self { slot, node })
	}

	/// Parse `<prefix> <slot> <host>:<port>`, e.g. `ASK 3999 127.0.0.1:7001`.
	///
	/// Any deviation from that shape is a [Error::Proto]: the server claimed a redirection
	/// but didn't say where to.
	pub fn parse(prefix: &str, text: &str) -> Result<Self> {
		let invalid = || Error::proto(format!("Invalid {prefix} error message: {text}"));

		let (_, (slot, address)) = redirection(prefix, text).map_err(|_| invalid())?;
		let node = address.parse().map_err(|_| invalid())?;

		Ok(Self { slot, node })
	}

	pub fn slot(&self) -> u16 {
		self.slot
	}

	pub fn node(&self) -> &Node {
		&self.node
	}
}

impl Display for Redirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.slot, self.node)
	}
}

/// A `MOVED` reply: the slot is now permanently served by another node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moved {
	message: String,
}

impl Moved {
	pub(crate) fn new(message: String) -> Self {
		Self { message }
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	/// Parse the slot and node out of the reply.
	pub fn redirection(&self) -> Result<Redirection> {
		Redirection::parse("MOVED", &self.message)
	}
}

impl Display for Moved {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

/// An `ASK` reply: the slot is migrating, and this command alone should be retried against
/// another node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ask {
	message: String,
	redirection: Redirection,
}

impl Ask {
	/// Build from the full reply text. Fails with [Error::Proto] if the text isn't a valid
	/// `ASK` redirection.
	pub fn new(message: impl Into<String>) -> Result<Self> {
		let message = message.into();
		let redirection = Redirection::parse("ASK", &message)?;

		Ok(Self {
			message,
			redirection,
		})
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn slot(&self) -> u16 {
		self.redirection.slot
	}

	pub fn node(&self) -> &Node {
		&self.redirection.node
	}

	pub fn redirection(&self) -> &Redirection {
		&self.redirection
	}
}

impl Display for Ask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}
