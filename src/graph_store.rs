/*
 * Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use std::collections::HashMap;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::constants::{EdgeId, NodeId, Weight};
use crate::errors::{Result, RoutingError};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Edge {
        Edge { from, to, weight }
    }
}

/// The base topology of a scenario: every node and every directed link at full capacity.
///
/// Nodes are identified by short codes and get a dense `NodeId` in the order they are first
/// registered. Edges keep their insertion order, which together with the node order makes every
/// computation on the store reproducible. Once built, the store is only ever handed out by shared
/// reference, failures are simulated with a `DisablementSet` and never by mutating the store.
///
/// Weights may be negative, but only the general algorithm gives correct distances for such
/// graphs, see `Dijkstra::calc`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct GraphStore {
    codes: Vec<String>,
    ids: HashMap<String, NodeId>,
    edges: Vec<Edge>,
    out_edges: Vec<Vec<EdgeId>>,
    display_names: HashMap<String, String>,
}

impl GraphStore {
    pub fn new() -> Self {
        GraphStore::default()
    }

    /// Registers a node and returns its id. Adding a code twice returns the existing id.
    pub fn add_node(&mut self, code: &str) -> NodeId {
        if let Some(&id) = self.ids.get(code) {
            return id;
        }
        let id = self.codes.len();
        self.codes.push(code.to_string());
        self.ids.insert(code.to_string(), id);
        self.out_edges.push(vec![]);
        id
    }

    /// Appends the directed edge `from -> to`. Endpoints that are not yet known are registered.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> EdgeId {
        let from = self.add_node(from);
        let to = self.add_node(to);
        let edge_id = self.edges.len();
        trace!("adding edge {} -> {} with weight {}", from, to, weight);
        self.edges.push(Edge::new(from, to, weight));
        self.out_edges[from].push(edge_id);
        edge_id
    }

    /// Adds the undirected link `a <-> b` as a pair of directed edges with equal weight.
    pub fn add_link(&mut self, a: &str, b: &str, weight: Weight) -> (EdgeId, EdgeId) {
        let forward = self.add_edge(a, b, weight);
        let backward = self.add_edge(b, a, weight);
        (forward, backward)
    }

    pub fn set_display_name(&mut self, code: &str, name: &str) {
        self.display_names.insert(code.to_string(), name.to_string());
    }

    /// The configured display name, or the code itself if there is none.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.display_names
            .get(code)
            .map(String::as_str)
            .unwrap_or(code)
    }

    pub fn display_names(&self) -> &HashMap<String, String> {
        &self.display_names
    }

    pub fn node_id(&self, code: &str) -> Result<NodeId> {
        self.ids
            .get(code)
            .copied()
            .ok_or_else(|| RoutingError::UnknownNode(code.to_string()))
    }

    /// `None` if `node` was not created by this store.
    pub fn code(&self, node: NodeId) -> Option<&str> {
        self.codes.get(node).map(String::as_str)
    }

    /// Only for ids handed out by this store or derived from its edges.
    pub(crate) fn code_at(&self, node: NodeId) -> &str {
        &self.codes[node]
    }

    pub fn contains(&self, code: &str) -> bool {
        self.ids.contains_key(code)
    }

    /// All node codes in id order.
    pub fn nodes(&self) -> &[String] {
        &self.codes
    }

    /// All edges in insertion order, including the ones a query might disable.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, edge_id: EdgeId) -> Option<&Edge> {
        self.edges.get(edge_id)
    }

    /// Ids of the outgoing edges of `node`, in insertion order. Empty for an unknown id.
    pub fn out_edges(&self, node: NodeId) -> &[EdgeId] {
        self.out_edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.out_edges(node).iter().map(move |&e| &self.edges[e])
    }

    pub fn get_num_nodes(&self) -> usize {
        self.codes.len()
    }

    pub fn get_num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn has_negative_weights(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_registers_nodes_in_order() {
        let mut g = GraphStore::new();
        g.add_edge("C", "M", 30);
        g.add_edge("C", "R", 11);
        g.add_edge("R", "M", 22);
        assert_eq!(vec!["C", "M", "R"], g.nodes());
        assert_eq!(3, g.get_num_nodes());
        assert_eq!(3, g.get_num_edges());
        assert_eq!(Some(&Edge::new(2, 1, 22)), g.edge(2));
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = GraphStore::new();
        let a = g.add_node("A");
        let b = g.add_node("B");
        assert_eq!(a, g.add_node("A"));
        assert_ne!(a, b);
        assert_eq!(2, g.get_num_nodes());
    }

    #[test]
    fn edges_are_directed() {
        let mut g = GraphStore::new();
        g.add_edge("A", "B", 5);
        let a = g.node_id("A").unwrap();
        let b = g.node_id("B").unwrap();
        assert_eq!(vec![Edge::new(a, b, 5)], g.neighbors(a).cloned().collect::<Vec<_>>());
        assert_eq!(0, g.neighbors(b).count());
    }

    #[test]
    fn add_link_adds_both_directions() {
        let mut g = GraphStore::new();
        let (forward, backward) = g.add_link("A", "B", 7);
        assert_eq!(Some(&Edge::new(0, 1, 7)), g.edge(forward));
        assert_eq!(Some(&Edge::new(1, 0, 7)), g.edge(backward));
        assert_eq!(&[backward], g.out_edges(1));
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = GraphStore::new();
        g.add_edge("A", "B", 5);
        g.add_edge("A", "B", 3);
        assert_eq!(2, g.neighbors(0).count());
    }

    #[test]
    fn unknown_node() {
        let g = GraphStore::new();
        match g.node_id("X") {
            Err(RoutingError::UnknownNode(code)) => assert_eq!("X", code),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn out_of_range_ids() {
        let mut g = GraphStore::new();
        g.add_edge("A", "B", 5);
        assert_eq!(Some("B"), g.code(1));
        assert_eq!(None, g.code(2));
        assert_eq!(None, g.edge(1));
        assert!(g.out_edges(9).is_empty());
        assert_eq!(0, g.neighbors(9).count());
        assert!(g.contains("A"));
        assert!(!g.contains("C"));
    }

    #[test]
    fn display_names_fall_back_to_code() {
        let mut g = GraphStore::new();
        g.add_node("C");
        g.add_node("M");
        g.set_display_name("C", "Casablanca");
        assert_eq!("Casablanca", g.display_name("C"));
        assert_eq!("M", g.display_name("M"));
        assert_eq!(1, g.display_names().len());
        assert_eq!(Some(&"Casablanca".to_string()), g.display_names().get("C"));
    }

    #[test]
    fn negative_weights() {
        let mut g = GraphStore::new();
        g.add_edge("A", "B", 5);
        assert!(!g.has_negative_weights());
        g.add_edge("B", "C", -1);
        assert!(g.has_negative_weights());
    }
}
