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

use log::trace;

use crate::constants::{Node, NodeId};
use crate::shortest_path_tree::PredecessorMap;

/// Walks the predecessors back from `destination` to `source` and returns the nodes in forward
/// order, both ends included.
///
/// Returns `None` if `destination` was not reached, or if the walk hits a node without
/// predecessor, a node that is its own predecessor other than `source`, or takes more steps than
/// there are nodes. The latter two can only happen for a predecessor map that was not produced
/// by a query from `source`. `source == destination` yields `[source]` as long as it was reached.
pub fn reconstruct(
    predecessors: &PredecessorMap,
    source: NodeId,
    destination: NodeId,
) -> Option<Vec<NodeId>> {
    if let Node::Invalid = predecessors.get(destination) {
        return None;
    }
    let mut path = vec![destination];
    let mut current = destination;
    while current != source {
        if path.len() > predecessors.len() {
            trace!("predecessor walk from {} does not reach {}", destination, source);
            return None;
        }
        match predecessors.get(current) {
            Node::Node(prev) if prev != current => {
                path.push(prev);
                current = prev;
            }
            _ => {
                trace!("predecessor walk from {} stopped at {}", destination, current);
                return None;
            }
        }
    }
    path.reverse();
    Some(path)
}
