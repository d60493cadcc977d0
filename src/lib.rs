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

//! Minimum-latency routes on small weighted networks, with what-if failure simulation.
//!
//! A `GraphStore` holds the full topology. Every query derives an `EffectiveGraph` from the store
//! and a `DisablementSet`, runs one of the single-source algorithms on it and hands back a
//! `ShortestPathTree`, from which concrete routes are reconstructed. The store is never
//! modified by a query and can be shared between threads.

use log::debug;
use serde::{Deserialize, Serialize};

pub use crate::bellman_ford::BellmanFord;
pub use crate::config::{EdgeConfig, NetworkConfig};
pub use crate::constants::*;
pub use crate::dijkstra::Dijkstra;
pub use crate::errors::{Result, RoutingError};
pub use crate::failure_overlay::{DisablementSet, EffectiveGraph};
pub use crate::graph_store::{Edge, GraphStore};
pub use crate::shortest_path::{Leg, ShortestPath};
pub use crate::shortest_path_tree::{DistanceMap, PredecessorMap, ShortestPathTree};
pub use crate::walk_counts::walk_counts;

mod bellman_ford;
mod config;
mod constants;
mod dijkstra;
mod errors;
mod failure_overlay;
mod graph_store;
mod heap_item;
mod path_reconstructor;
mod shortest_path;
mod shortest_path_tree;
mod walk_counts;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Only valid if no enabled edge has a negative weight.
    Dijkstra,
    /// Any weights, fails on a reachable negative cycle.
    BellmanFord,
    /// `Dijkstra` if the effective graph has no negative weight, `BellmanFord` otherwise.
    Auto,
}

/// Computes the shortest distance from `source` to every node of the network after applying
/// `disablement`, and the predecessor of every reached node.
///
/// If `source` itself is disabled, nothing is reachable. Fails with `UnknownNode` for codes that
/// are not part of the store, with `InvalidAlgorithmChoice` if `Algorithm::Dijkstra` is requested
/// while an enabled edge has a negative weight and with `NegativeCycle` if the general algorithm
/// finds a negative cycle reachable from `source`.
pub fn compute_shortest_paths(
    store: &GraphStore,
    source: &str,
    disablement: &DisablementSet,
    algorithm: Algorithm,
) -> Result<ShortestPathTree> {
    let source = store.node_id(source)?;
    let graph = EffectiveGraph::new(store, disablement)?;
    run(&graph, source, algorithm)
}

/// The nodes on the shortest path from `source` to `destination` in forward order, or `None` if
/// `destination` was not reached.
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    source: NodeId,
    destination: NodeId,
) -> Option<Vec<NodeId>> {
    path_reconstructor::reconstruct(predecessors, source, destination)
}

/// Calculates the minimum-latency route from `source` to `destination` after applying
/// `disablement`. An unreachable destination yields `NoPathFound`.
pub fn calc_path(
    store: &GraphStore,
    source: &str,
    destination: &str,
    disablement: &DisablementSet,
    algorithm: Algorithm,
) -> Result<ShortestPath> {
    let source_id = store.node_id(source)?;
    let destination_id = store.node_id(destination)?;
    let graph = EffectiveGraph::new(store, disablement)?;
    let tree = run(&graph, source_id, algorithm)?;
    let no_path = || RoutingError::NoPathFound {
        origin: source.to_string(),
        destination: destination.to_string(),
    };
    let weight = tree.distance(destination_id).ok_or_else(no_path)?;
    let nodes = reconstruct_path(tree.predecessors(), source_id, destination_id)
        .ok_or_else(no_path)?;
    let legs = graph
        .path_legs(&nodes)
        .iter()
        .map(|e| Leg {
            from: store.code_at(e.from).to_string(),
            to: store.code_at(e.to).to_string(),
            weight: e.weight,
        })
        .collect();
    let nodes = nodes.iter().map(|&n| store.code_at(n).to_string()).collect();
    Ok(ShortestPath::new(
        source.to_string(),
        destination.to_string(),
        weight,
        nodes,
        legs,
    ))
}

fn run(graph: &EffectiveGraph, source: NodeId, algorithm: Algorithm) -> Result<ShortestPathTree> {
    let negative = graph.has_negative_weights();
    let algorithm = match algorithm {
        Algorithm::Auto if negative => Algorithm::BellmanFord,
        Algorithm::Auto => Algorithm::Dijkstra,
        Algorithm::Dijkstra if negative => {
            return Err(RoutingError::InvalidAlgorithmChoice { algorithm });
        }
        other => other,
    };
    debug!(
        "query from {} using {:?} on {} enabled nodes",
        graph.store().code_at(source),
        algorithm,
        graph.get_num_enabled_nodes()
    );
    match algorithm {
        Algorithm::BellmanFord => BellmanFord::calc(graph, source),
        _ => Dijkstra::new(graph.get_num_nodes()).calc(graph, source),
    }
}
