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

use log::{debug, trace};
use priority_queue::PriorityQueue;

use crate::constants::{NodeId, WEIGHT_ZERO};
use crate::errors::{Result, RoutingError};
use crate::failure_overlay::EffectiveGraph;
use crate::heap_item::HeapItem;
use crate::shortest_path_tree::ShortestPathTree;

/// Single-source shortest paths for graphs without negative weights.
///
/// Nodes are settled in order of increasing distance, ties are broken by the smaller node id.
/// Once settled, a node's distance is final and it is never relaxed again. This only holds if
/// every enabled edge has a non-negative weight: with negative weights the returned distances
/// are undefined and not necessarily the shortest ones. `calc` does not check for this, use
/// `BellmanFord` or let `compute_shortest_paths` pick the algorithm.
pub struct Dijkstra {
    settled: Vec<bool>,
    queue: PriorityQueue<NodeId, HeapItem>,
}

impl Dijkstra {
    pub fn new(num_nodes: usize) -> Self {
        Dijkstra {
            settled: vec![false; num_nodes],
            queue: PriorityQueue::new(),
        }
    }

    pub fn calc(&mut self, graph: &EffectiveGraph, source: NodeId) -> Result<ShortestPathTree> {
        let num_nodes = graph.get_num_nodes();
        if source >= num_nodes {
            return Err(RoutingError::UnknownNode(source.to_string()));
        }
        self.reset(num_nodes);
        let mut tree = ShortestPathTree::new(source, num_nodes);
        if !graph.is_node_enabled(source) {
            debug!("source {} is disabled, nothing is reachable", source);
            return Ok(tree);
        }
        tree.init_root();
        self.queue.push(source, HeapItem::new(WEIGHT_ZERO, source));
        let mut num_settled = 0;
        while let Some((node, item)) = self.queue.pop() {
            self.settled[node] = true;
            num_settled += 1;
            trace!("settled node {} at distance {}", node, item.weight);
            for edge in graph.neighbors(node) {
                if self.settled[edge.to] {
                    continue;
                }
                let improved = tree
                    .relax(node, edge.to, edge.weight)
                    .map_err(|e| RoutingError::overflow(graph, source, e))?;
                if improved {
                    let weight = tree.distances().raw(edge.to);
                    self.queue.push(edge.to, HeapItem::new(weight, edge.to));
                }
            }
        }
        debug!(
            "dijkstra from {} settled {} of {} nodes",
            source,
            num_settled,
            graph.get_num_enabled_nodes()
        );
        Ok(tree)
    }

    fn reset(&mut self, num_nodes: usize) {
        self.settled.clear();
        self.settled.resize(num_nodes, false);
        self.queue = PriorityQueue::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::INVALID_NODE;
    use crate::failure_overlay::DisablementSet;
    use crate::graph_store::GraphStore;

    fn calc(store: &GraphStore, source: &str) -> ShortestPathTree {
        let graph = EffectiveGraph::full(store);
        let mut dijkstra = Dijkstra::new(store.get_num_nodes());
        dijkstra
            .calc(&graph, store.node_id(source).unwrap())
            .unwrap()
    }

    fn dist(store: &GraphStore, tree: &ShortestPathTree, code: &str) -> Option<i64> {
        tree.distance(store.node_id(code).unwrap())
    }

    #[test]
    fn simple_path() {
        //  0 -> 1 -> 2
        //  \_________/^  (weight 10)
        let mut g = GraphStore::new();
        g.add_edge("0", "1", 3);
        g.add_edge("1", "2", 4);
        g.add_edge("0", "2", 10);
        let tree = calc(&g, "0");
        assert_eq!(Some(0), dist(&g, &tree, "0"));
        assert_eq!(Some(3), dist(&g, &tree, "1"));
        assert_eq!(Some(7), dist(&g, &tree, "2"));
        assert!(tree.predecessors().get(2).has_id(1));
        assert!(tree.predecessors().get(0).has_id(0));
    }

    #[test]
    fn unreachable_nodes() {
        let mut g = GraphStore::new();
        g.add_edge("0", "1", 3);
        g.add_edge("2", "0", 1);
        g.add_node("3");
        let tree = calc(&g, "0");
        assert_eq!(None, dist(&g, &tree, "2"));
        assert_eq!(None, dist(&g, &tree, "3"));
        assert_eq!(INVALID_NODE, tree.predecessors().get(2));
    }

    #[test]
    fn cycles_terminate() {
        let mut g = GraphStore::new();
        g.add_link("0", "1", 1);
        g.add_link("1", "2", 1);
        g.add_link("2", "0", 1);
        g.add_edge("2", "2", 0);
        let tree = calc(&g, "0");
        assert_eq!(Some(1), dist(&g, &tree, "2"));
        assert!(tree.predecessors().get(2).has_id(0));
    }

    #[test]
    fn ties_prefer_first_relaxation() {
        //   /-> 1 -\
        //  0        3
        //   \-> 2 -/
        let mut g = GraphStore::new();
        g.add_edge("0", "1", 1);
        g.add_edge("0", "2", 1);
        g.add_edge("2", "3", 1);
        g.add_edge("1", "3", 1);
        for _ in 0..10 {
            let tree = calc(&g, "0");
            assert_eq!(Some(2), dist(&g, &tree, "3"));
            // node 1 is settled before node 2 and relaxes node 3 first
            assert!(tree.predecessors().get(3).has_id(1));
        }
    }

    #[test]
    fn zero_weights() {
        let mut g = GraphStore::new();
        g.add_edge("0", "1", 0);
        g.add_edge("1", "2", 0);
        let tree = calc(&g, "0");
        assert_eq!(Some(0), dist(&g, &tree, "2"));
    }

    #[test]
    fn disabled_source_reaches_nothing() {
        let mut g = GraphStore::new();
        g.add_edge("0", "1", 1);
        let mut d = DisablementSet::new();
        d.disable_node("0");
        let graph = EffectiveGraph::new(&g, &d).unwrap();
        let tree = Dijkstra::new(2).calc(&graph, 0).unwrap();
        assert_eq!(None, tree.distance(0));
        assert_eq!(None, tree.distance(1));
    }

    #[test]
    fn source_out_of_range() {
        let mut g = GraphStore::new();
        g.add_edge("0", "1", 1);
        let graph = EffectiveGraph::full(&g);
        match Dijkstra::new(2).calc(&graph, 7) {
            Err(RoutingError::UnknownNode(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn huge_weights_overflow_instead_of_vanishing() {
        let mut g = GraphStore::new();
        g.add_edge("0", "1", std::i64::MAX - 1);
        g.add_edge("1", "2", 5);
        let graph = EffectiveGraph::full(&g);
        match Dijkstra::new(3).calc(&graph, 0) {
            Err(RoutingError::DistanceOverflow { origin }) => assert_eq!("0", origin),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn can_be_reused() {
        let mut g = GraphStore::new();
        g.add_edge("0", "1", 1);
        g.add_edge("1", "2", 1);
        let graph = EffectiveGraph::full(&g);
        let mut dijkstra = Dijkstra::new(0);
        let first = dijkstra.calc(&graph, 0).unwrap();
        let second = dijkstra.calc(&graph, 1).unwrap();
        assert_eq!(Some(2), first.distance(2));
        assert_eq!(Some(1), second.distance(2));
        assert_eq!(None, second.distance(0));
    }
}
