use std::thread;

use test_log::test;

use redust_error::{ConnectionErrorCode, Error, ErrorKind, Node, Redirection, Result, SLOT_COUNT};

use crate::common::cluster_nodes;

mod common;

/// Where a cluster router would resend a command, if anywhere.
fn retry_target(err: &Error) -> Result<Option<Node>> {
	Ok(match err {
		Error::Ask(ask) => Some(ask.node().clone()),
		Error::Moved(moved) => Some(moved.redirection()?.node().clone()),
		_ => None,
	})
}

fn handles_io(err: &Error) -> bool {
	err.is_io()
}

#[test]
fn timeout_is_io() {
	let err = Error::from_connection(ConnectionErrorCode::Timeout, "recv timed out");

	assert_eq!(err.kind(), ErrorKind::Timeout);
	assert_eq!(err.message(), "recv timed out");
	assert_eq!(err.to_string(), "recv timed out");
	assert!(handles_io(&err));
	assert!(!err.is_reply());
}

#[test]
fn redirections() -> Result<()> {
	for (slot, node) in [0, 1, SLOT_COUNT - 1].into_iter().zip(cluster_nodes()) {
		let ask = Error::from_reply(format!("ASK {slot} {node}"));
		assert_eq!(ask.kind(), ErrorKind::Ask);
		assert_eq!(retry_target(&ask)?, Some(node.clone()));

		let moved = Error::from_reply(format!("MOVED {slot} {node}"));
		assert_eq!(moved.kind(), ErrorKind::Moved);
		assert_eq!(retry_target(&moved)?, Some(node));

		assert!(ask.is_reply() && moved.is_reply());
	}

	Ok(())
}

#[test]
fn malformed_moved() {
	let moved = Error::from_reply("MOVED 5");
	assert_eq!(moved.kind(), ErrorKind::Moved);

	let err = retry_target(&moved).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Proto);
}

#[test]
fn not_redirected() -> Result<()> {
	let errors = [
		Error::from_reply("ERR unknown command 'FOO'"),
		Error::from_connection(ConnectionErrorCode::Eof, "server closed the connection"),
		Error::from_frame(b"-LOADING Redis is loading the dataset in memory\r\n"),
	];

	for err in &errors {
		assert_eq!(retry_target(err)?, None);
	}

	assert_eq!(errors[1].kind(), ErrorKind::Closed);
	assert_eq!(errors[2].kind(), ErrorKind::Reply);
	Ok(())
}

#[test]
fn concurrent_dispatch() {
	let expected = Error::from_reply("ASK 3999 127.0.0.1:7001");

	let results: Vec<Error> = thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|_| scope.spawn(|| Error::from_reply("ASK 3999 127.0.0.1:7001")))
			.collect();

		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	for err in results {
		assert_eq!(err, expected);
	}
}

#[test]
fn shareable() {
	fn assert_shareable<T: Send + Sync + Clone + 'static>() {}

	assert_shareable::<Error>();
	assert_shareable::<Node>();
}

#[test]
fn constructed_redirections_round_trip() -> Result<()> {
	assert_eq!(Node::new("", 0).unwrap_err().kind(), ErrorKind::Proto);

	let node = Node::new("127.0.0.1", 7001)?;
	let err = Redirection::new(SLOT_COUNT + 100, node.clone()).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Proto);

	let redirection = Redirection::new(SLOT_COUNT - 1, node)?;
	let ask = Error::from_reply(format!("ASK {redirection}"));
	match ask {
		Error::Ask(ref ask) => assert_eq!(ask.redirection(), &redirection),
		_ => panic!("unexpected error type {:?}", ask),
	}

	Ok(())
}
