//! JSON snapshot and order encoding.
//!
//! Snapshot layout, with edges listed under their source node and each
//! edge's transit slots ordered from furthest to nearest arrival:
//!
//! ```json
//! {"nodes":[{"id":"a","size":10,"units":{"p1":3},
//!            "edges":[{"dst":"b","units":[{},{"p1":2}]}]}]}
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::{Edge, Node, NodeId, Order, Units, WorldState};

/// Errors that can occur while decoding a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("node with empty id")]
    EmptyNodeId,

    #[error("duplicate node '{0}'")]
    DuplicateNode(String),

    #[error("edge from '{src}' to unknown node '{dst}'")]
    UnknownEdgeTarget { src: String, dst: String },

    #[error("duplicate edge from '{src}' to '{dst}'")]
    DuplicateEdge { src: String, dst: String },

    #[error("self-loop edge on '{0}'")]
    SelfLoop(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotDoc {
    nodes: Vec<NodeDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeDoc {
    id: NodeId,
    #[serde(default)]
    size: u32,
    #[serde(default)]
    units: Units,
    #[serde(default)]
    edges: Vec<EdgeDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeDoc {
    dst: NodeId,
    #[serde(default)]
    units: Vec<Units>,
}

/// Parses and validates a JSON snapshot.
pub fn parse_snapshot(json: &str) -> Result<WorldState, SnapshotError> {
    let doc: SnapshotDoc = serde_json::from_str(json)?;

    let mut ids = BTreeSet::new();
    for node in &doc.nodes {
        if node.id.as_str().is_empty() {
            return Err(SnapshotError::EmptyNodeId);
        }
        if !ids.insert(node.id.clone()) {
            return Err(SnapshotError::DuplicateNode(node.id.to_string()));
        }
    }

    let mut state = WorldState::empty();
    for entry in doc.nodes {
        let mut units = entry.units;
        units.compact();
        let mut node = Node {
            id: entry.id,
            size: entry.size,
            units,
            edges: Vec::with_capacity(entry.edges.len()),
        };
        for edge in entry.edges {
            if edge.dst == node.id {
                return Err(SnapshotError::SelfLoop(node.id.to_string()));
            }
            if !ids.contains(&edge.dst) {
                return Err(SnapshotError::UnknownEdgeTarget {
                    src: node.id.to_string(),
                    dst: edge.dst.to_string(),
                });
            }
            let mut transit = edge.units;
            transit.iter_mut().for_each(Units::compact);
            node.edges.push(Edge {
                src: node.id.clone(),
                dst: edge.dst,
                transit,
            });
        }
        node.edges.sort_by(|a, b| a.dst.cmp(&b.dst));
        if let Some(w) = node.edges.windows(2).find(|w| w[0].dst == w[1].dst) {
            return Err(SnapshotError::DuplicateEdge {
                src: node.id.to_string(),
                dst: w[0].dst.to_string(),
            });
        }
        state.nodes.insert(node.id.clone(), node);
    }
    Ok(state)
}

/// Encodes a snapshot in the same layout `parse_snapshot` reads.
pub fn encode_snapshot(state: &WorldState) -> String {
    let doc = SnapshotDoc {
        nodes: state
            .nodes
            .values()
            .map(|n| NodeDoc {
                id: n.id.clone(),
                size: n.size,
                units: n.units.clone(),
                edges: n
                    .edges
                    .iter()
                    .map(|e| EdgeDoc {
                        dst: e.dst.clone(),
                        units: e.transit.clone(),
                    })
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_string(&doc).unwrap_or_default()
}

/// Encodes orders as a JSON array.
pub fn format_orders(orders: &[Order]) -> String {
    serde_json::to_string(orders).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes a JSON array of orders.
pub fn parse_orders(json: &str) -> Result<Vec<Order>, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
