//! Typed errors for a Redis client.
//!
//! Raw failure signals from the transport ([connection codes](ConnectionErrorCode) and
//! [std::io::Error]) and from the server (error replies) are classified into a single [Error].
//! Cluster redirections (`MOVED` and `ASK`) carry the slot and [Node] to retry against.

/// Dispatch of transport error codes.
pub mod connection;
/// The error taxonomy.
pub mod error;
/// Cluster node addresses.
pub mod node;
/// Cluster redirection replies.
pub mod redirect;
/// Dispatch of server error replies.
pub mod reply;

pub use connection::ConnectionErrorCode;
pub use error::{Error, ErrorKind, Result};
pub use node::Node;
pub use redirect::{Ask, Moved, Redirection, SLOT_COUNT};
pub use reply::ReplyErrorType;
