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

use log::{debug, trace, warn};

use crate::constants::NodeId;
use crate::errors::{Result, RoutingError};
use crate::failure_overlay::EffectiveGraph;
use crate::shortest_path_tree::ShortestPathTree;

/// Single-source shortest paths for graphs with weights of any sign.
///
/// Every enabled edge is relaxed in insertion order, pass after pass, until a pass changes
/// nothing. Without a negative cycle this happens after at most `n` passes, `n` being the number
/// of enabled nodes. If the `n`-th pass still improves a distance, a negative cycle is reachable
/// from the source and the query fails with `NegativeCycle`, no partial distances are returned.
pub struct BellmanFord;

impl BellmanFord {
    pub fn calc(graph: &EffectiveGraph, source: NodeId) -> Result<ShortestPathTree> {
        let num_nodes = graph.get_num_nodes();
        if source >= num_nodes {
            return Err(RoutingError::UnknownNode(source.to_string()));
        }
        let mut tree = ShortestPathTree::new(source, num_nodes);
        if !graph.is_node_enabled(source) {
            debug!("source {} is disabled, nothing is reachable", source);
            return Ok(tree);
        }
        tree.init_root();
        let max_passes = graph.get_num_enabled_nodes();
        for pass in 1..=max_passes {
            let mut updated = 0;
            for edge in graph.edges() {
                let improved = tree
                    .relax(edge.from, edge.to, edge.weight)
                    .map_err(|e| RoutingError::overflow(graph, source, e))?;
                if improved {
                    updated += 1;
                }
            }
            trace!("pass {} updated {} distances", pass, updated);
            if updated == 0 {
                debug!("bellman-ford from {} converged after {} passes", source, pass);
                return Ok(tree);
            }
        }
        warn!(
            "no convergence after {} passes, negative cycle reachable from {}",
            max_passes, source
        );
        Err(RoutingError::NegativeCycle {
            origin: graph.store().code_at(source).to_string(),
        })
    }
}
