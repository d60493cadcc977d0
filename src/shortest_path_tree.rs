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

use crate::constants::{Node, NodeId, Weight, INVALID_NODE, WEIGHT_MAX, WEIGHT_ZERO};

/// Shortest distance of every node from the query source. Unreachable and disabled nodes keep
/// `WEIGHT_MAX`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMap {
    distances: Vec<Weight>,
}

impl DistanceMap {
    pub(crate) fn new(num_nodes: usize) -> DistanceMap {
        DistanceMap {
            distances: vec![WEIGHT_MAX; num_nodes],
        }
    }

    /// `None` if `node` cannot be reached.
    pub fn get(&self, node: NodeId) -> Option<Weight> {
        match self.distances.get(node) {
            Some(&d) if d != WEIGHT_MAX => Some(d),
            _ => None,
        }
    }

    pub(crate) fn raw(&self, node: NodeId) -> Weight {
        self.distances[node]
    }

    pub(crate) fn set(&mut self, node: NodeId, weight: Weight) {
        self.distances[node] = weight;
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// `(node, distance)` for every reachable node, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d != WEIGHT_MAX)
            .map(|(n, &d)| (n, d))
    }
}

/// The node preceding each reachable node on a shortest path. The source is its own predecessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredecessorMap {
    predecessors: Vec<Node>,
}

impl PredecessorMap {
    pub fn new(num_nodes: usize) -> PredecessorMap {
        PredecessorMap {
            predecessors: vec![INVALID_NODE; num_nodes],
        }
    }

    /// `INVALID_NODE` for unreachable nodes and for ids outside the map.
    pub fn get(&self, node: NodeId) -> Node {
        self.predecessors.get(node).copied().unwrap_or(INVALID_NODE)
    }

    pub fn set(&mut self, node: NodeId, predecessor: NodeId) {
        self.predecessors[node] = Node::Node(predecessor);
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }
}

/// Relaxing `from -> to` left the range of `Weight`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DistanceOverflow {
    pub from: NodeId,
    pub to: NodeId,
}

/// Result of one single-source query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: NodeId,
    distances: DistanceMap,
    predecessors: PredecessorMap,
}

impl ShortestPathTree {
    /// A tree in which nothing has been reached yet, not even the source.
    pub(crate) fn new(source: NodeId, num_nodes: usize) -> ShortestPathTree {
        ShortestPathTree {
            source,
            distances: DistanceMap::new(num_nodes),
            predecessors: PredecessorMap::new(num_nodes),
        }
    }

    pub(crate) fn init_root(&mut self) {
        self.distances.set(self.source, WEIGHT_ZERO);
        self.predecessors.set(self.source, self.source);
    }

    /// Applies the relaxation rule to `from -> to`: updates `to` only on strict improvement.
    /// A candidate distance outside `i64::MIN..WEIGHT_MAX` cannot be represented and is reported
    /// instead of being clamped.
    pub(crate) fn relax(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: Weight,
    ) -> std::result::Result<bool, DistanceOverflow> {
        let from_distance = self.distances.raw(from);
        if from_distance == WEIGHT_MAX {
            return Ok(false);
        }
        let candidate = match from_distance.checked_add(weight) {
            Some(candidate) if candidate != WEIGHT_MAX => candidate,
            _ => return Err(DistanceOverflow { from, to }),
        };
        if candidate < self.distances.raw(to) {
            self.distances.set(to, candidate);
            self.predecessors.set(to, from);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.distances.get(node)
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distances.get(node).is_some()
    }

    pub fn distances(&self) -> &DistanceMap {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }
}
