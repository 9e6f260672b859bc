use redust_error::Node;

/// Nodes in a typical local test cluster, including an IPv6 one.
pub fn cluster_nodes() -> Vec<Node> {
	["127.0.0.1:7000", "127.0.0.1:7001", "[::1]:7002"]
		.into_iter()
		.map(|addr| addr.parse().expect("valid node address"))
		.collect()
}
