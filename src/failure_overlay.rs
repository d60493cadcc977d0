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

use std::collections::BTreeSet;

use log::debug;

use crate::constants::{EdgeId, NodeId, Weight};
use crate::errors::Result;
use crate::graph_store::{Edge, GraphStore};

/// Nodes and directed edges that are out of service for a single query.
///
/// Disabling the edge `(from, to)` leaves `(to, from)` untouched, use `disable_link` to take down
/// both directions. Disabling a node takes down every edge touching it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisablementSet {
    nodes: BTreeSet<String>,
    edges: BTreeSet<(String, String)>,
}

impl DisablementSet {
    pub fn new() -> Self {
        DisablementSet::default()
    }

    pub fn disable_node(&mut self, code: &str) -> &mut Self {
        self.nodes.insert(code.to_string());
        self
    }

    pub fn disable_edge(&mut self, from: &str, to: &str) -> &mut Self {
        self.edges.insert((from.to_string(), to.to_string()));
        self
    }

    pub fn disable_link(&mut self, a: &str, b: &str) -> &mut Self {
        self.disable_edge(a, b).disable_edge(b, a)
    }

    pub fn disabled_nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn disabled_edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges.iter().map(|(f, t)| (f.as_str(), t.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// The part of a `GraphStore` that is still in service once a `DisablementSet` is applied.
///
/// This is a view: it borrows the store and only keeps one flag per node and per edge.
pub struct EffectiveGraph<'a> {
    store: &'a GraphStore,
    node_enabled: Vec<bool>,
    edge_enabled: Vec<bool>,
}

impl<'a> EffectiveGraph<'a> {
    /// Derives the effective graph. Fails with `UnknownNode` if the disablement set names a node
    /// the store does not know. Disabling a non-existent edge between known nodes has no effect.
    pub fn new(store: &'a GraphStore, disablement: &DisablementSet) -> Result<EffectiveGraph<'a>> {
        let mut node_enabled = vec![true; store.get_num_nodes()];
        for code in disablement.disabled_nodes() {
            node_enabled[store.node_id(code)?] = false;
        }
        let mut disabled_pairs = BTreeSet::new();
        for (from, to) in disablement.disabled_edges() {
            disabled_pairs.insert((store.node_id(from)?, store.node_id(to)?));
        }
        let edge_enabled: Vec<bool> = store
            .edges()
            .iter()
            .map(|e| {
                node_enabled[e.from]
                    && node_enabled[e.to]
                    && !disabled_pairs.contains(&(e.from, e.to))
            })
            .collect();
        debug!(
            "effective graph: {}/{} nodes, {}/{} edges enabled",
            node_enabled.iter().filter(|&&n| n).count(),
            node_enabled.len(),
            edge_enabled.iter().filter(|&&e| e).count(),
            edge_enabled.len()
        );
        Ok(EffectiveGraph {
            store,
            node_enabled,
            edge_enabled,
        })
    }

    /// The whole store without any failures.
    pub fn full(store: &'a GraphStore) -> EffectiveGraph<'a> {
        EffectiveGraph {
            store,
            node_enabled: vec![true; store.get_num_nodes()],
            edge_enabled: vec![true; store.get_num_edges()],
        }
    }

    pub fn store(&self) -> &'a GraphStore {
        self.store
    }

    /// `false` for ids outside the store.
    pub fn is_node_enabled(&self, node: NodeId) -> bool {
        self.node_enabled.get(node).copied().unwrap_or(false)
    }

    /// `false` for ids outside the store.
    pub fn is_edge_enabled(&self, edge_id: EdgeId) -> bool {
        self.edge_enabled.get(edge_id).copied().unwrap_or(false)
    }

    /// Number of nodes of the underlying store, enabled or not. Node ids range below this value.
    pub fn get_num_nodes(&self) -> usize {
        self.node_enabled.len()
    }

    pub fn get_num_enabled_nodes(&self) -> usize {
        self.node_enabled.iter().filter(|&&n| n).count()
    }

    /// Enabled nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_enabled.len()).filter(move |&n| self.node_enabled[n])
    }

    /// Enabled edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &'a Edge> + '_ {
        let store = self.store;
        store
            .edges()
            .iter()
            .enumerate()
            .filter(move |(id, _)| self.edge_enabled[*id])
            .map(|(_, e)| e)
    }

    /// Enabled outgoing edges of `node`. Empty for a disabled node.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = &'a Edge> + '_ {
        let store = self.store;
        store
            .out_edges(node)
            .iter()
            .filter(move |&&id| self.edge_enabled[id])
            .map(move |&id| &store.edges()[id])
    }

    /// Every edge of the store together with its state, so disabled links can still be shown.
    pub fn edge_states(&self) -> impl Iterator<Item = (&'a Edge, bool)> + '_ {
        let store = self.store;
        store
            .edges()
            .iter()
            .enumerate()
            .map(move |(id, e)| (e, self.edge_enabled[id]))
    }

    pub fn has_negative_weights(&self) -> bool {
        self.edges().any(|e| e.weight < 0)
    }

    /// For every hop of `path` the cheapest enabled edge connecting the two nodes. Stops at the
    /// first hop that has no enabled edge.
    pub fn path_legs(&self, path: &[NodeId]) -> Vec<Edge> {
        let mut legs = Vec::with_capacity(path.len().saturating_sub(1));
        for hop in path.windows(2) {
            let cheapest = self
                .neighbors(hop[0])
                .filter(|e| e.to == hop[1])
                .min_by_key(|e| e.weight);
            match cheapest {
                Some(e) => legs.push(*e),
                None => break,
            }
        }
        legs
    }

    /// Weight of the cheapest enabled edge `from -> to`.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.neighbors(from)
            .filter(|e| e.to == to)
            .map(|e| e.weight)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RoutingError;

    fn triangle() -> GraphStore {
        let mut g = GraphStore::new();
        g.add_edge("A", "B", 1);
        g.add_edge("B", "A", 1);
        g.add_edge("B", "C", 2);
        g.add_edge("A", "C", 5);
        g
    }

    #[test]
    fn no_failures() {
        let g = triangle();
        let eg = EffectiveGraph::new(&g, &DisablementSet::new()).unwrap();
        assert_eq!(3, eg.get_num_enabled_nodes());
        assert_eq!(4, eg.edges().count());
    }

    #[test]
    fn edge_disablement_is_directional() {
        let g = triangle();
        let mut d = DisablementSet::new();
        d.disable_edge("A", "B");
        let eg = EffectiveGraph::new(&g, &d).unwrap();
        assert!(!eg.is_edge_enabled(0));
        assert!(eg.is_edge_enabled(1));
        assert_eq!(Some(1), eg.edge_weight(1, 0));
        assert_eq!(None, eg.edge_weight(0, 1));
    }

    #[test]
    fn link_disablement_takes_both_directions() {
        let g = triangle();
        let mut d = DisablementSet::new();
        d.disable_link("B", "A");
        let eg = EffectiveGraph::new(&g, &d).unwrap();
        assert!(!eg.is_edge_enabled(0));
        assert!(!eg.is_edge_enabled(1));
        assert!(eg.is_edge_enabled(2));
    }

    #[test]
    fn node_disablement_removes_incident_edges() {
        let g = triangle();
        let mut d = DisablementSet::new();
        d.disable_node("B");
        let eg = EffectiveGraph::new(&g, &d).unwrap();
        assert_eq!(vec![0, 2], eg.nodes().collect::<Vec<_>>());
        assert_eq!(vec![Edge::new(0, 2, 5)], eg.edges().cloned().collect::<Vec<_>>());
        assert_eq!(0, eg.neighbors(1).count());
    }

    #[test]
    fn edge_states_include_disabled_edges() {
        let g = triangle();
        let mut d = DisablementSet::new();
        d.disable_node("C");
        let eg = EffectiveGraph::new(&g, &d).unwrap();
        let states: Vec<bool> = eg.edge_states().map(|(_, enabled)| enabled).collect();
        assert_eq!(vec![true, true, false, false], states);
    }

    #[test]
    fn store_is_not_modified() {
        let g = triangle();
        let mut d = DisablementSet::new();
        d.disable_node("A").disable_edge("B", "C");
        let eg = EffectiveGraph::new(&g, &d).unwrap();
        assert_eq!(0, eg.edges().count());
        assert_eq!(4, g.get_num_edges());
        assert_eq!(4, EffectiveGraph::full(&g).edges().count());
    }

    #[test]
    fn unknown_nodes_are_rejected() {
        let g = triangle();
        let mut d = DisablementSet::new();
        d.disable_edge("A", "X");
        match EffectiveGraph::new(&g, &d) {
            Err(RoutingError::UnknownNode(code)) => assert_eq!("X", code),
            _ => panic!("expected UnknownNode"),
        }
    }

    #[test]
    fn out_of_range_ids_are_disabled() {
        let g = triangle();
        let eg = EffectiveGraph::full(&g);
        assert!(!eg.is_node_enabled(3));
        assert!(!eg.is_edge_enabled(4));
        assert_eq!(0, eg.neighbors(3).count());
        assert_eq!(None, eg.edge_weight(3, 0));
    }

    #[test]
    fn missing_edge_is_ignored() {
        let g = triangle();
        let mut d = DisablementSet::new();
        d.disable_edge("C", "A");
        let eg = EffectiveGraph::new(&g, &d).unwrap();
        assert_eq!(4, eg.edges().count());
    }

    #[test]
    fn path_legs_pick_cheapest_parallel_edge() {
        let mut g = triangle();
        g.add_edge("B", "C", 1);
        let eg = EffectiveGraph::full(&g);
        assert_eq!(
            vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1)],
            eg.path_legs(&[0, 1, 2])
        );
        assert!(eg.path_legs(&[0]).is_empty());
        assert!(eg.path_legs(&[]).is_empty());
    }
}
