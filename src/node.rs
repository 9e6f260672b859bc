use std::{
	fmt::{self, Display},
	io,
	net::{SocketAddr, ToSocketAddrs},
	str::FromStr,
	vec,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The address of a Redis cluster node.
///
/// The host is kept exactly as the server sent it, so an IPv6 literal may still be wrapped in
/// brackets. Use [Node::socket_addr] to connect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(Serialize, Deserialize),
	serde(try_from = "String", into = "String")
)]
pub struct Node {
	host: String,
	port: u16,
}

impl Node {
	/// The host must be non-empty without whitespace, and the port non-zero.
	pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
		let host = host.into();
		if host.is_empty() || host.contains(char::is_whitespace) || port == 0 {
			return Err(Error::proto(format!("Invalid node address: {host}:{port}")));
		}

		Ok(Self { host, port })
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn port(&self) -> u16 {
		self.port
	}

	/// A `(host, port)` pair usable with both `std` and `tokio` address resolution. IPv6
	/// brackets are removed from the host.
	pub fn socket_addr(&self) -> (&str, u16) {
		let host = self
			.host
			.strip_prefix('[')
			.and_then(|host| host.strip_suffix(']'))
			.unwrap_or(&self.host);

		(host, self.port)
	}
}

impl Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.host, self.port)
	}
}

impl FromStr for Node {
	type Err = Error;

	/// Parse `host:port`. The port follows the last `:`, so unbracketed IPv6 hosts parse too.
	fn from_str(s: &str) -> Result<Self> {
		let invalid = || Error::proto(format!("Invalid node address: {s}"));

		let (host, port) = s.rsplit_once(':').ok_or_else(invalid)?;
		if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
			return Err(invalid());
		}

		let port = port.parse().map_err(|_| invalid())?;
		Self::new(host, port).map_err(|_| invalid())
	}
}

impl TryFrom<String> for Node {
	type Error = Error;

	fn try_from(s: String) -> Result<Self> {
		s.parse()
	}
}

impl From<Node> for String {
	fn from(node: Node) -> Self {
		node.to_string()
	}
}

impl ToSocketAddrs for Node {
	type Iter = vec::IntoIter<SocketAddr>;

	fn to_socket_addrs(&self) -> io::Result<Self::Iter> {
		self.socket_addr().to_socket_addrs()
	}
}
