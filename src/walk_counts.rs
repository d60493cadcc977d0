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

use crate::failure_overlay::EffectiveGraph;

/// Number of directed walks with exactly `length` edges between every pair of nodes.
///
/// Entry `[i][j]` counts the walks from node `i` to node `j`, computed as the `length`-th power
/// of the 0/1 adjacency matrix of the effective graph, so parallel edges count once. Disabled
/// nodes have all-zero rows and columns (except for the identity at `length == 0`, which is
/// only set for enabled nodes). Counts saturate at `u64::MAX`.
pub fn walk_counts(graph: &EffectiveGraph, length: usize) -> Vec<Vec<u64>> {
    let n = graph.get_num_nodes();
    let mut adjacency = vec![vec![0u64; n]; n];
    for edge in graph.edges() {
        adjacency[edge.from][edge.to] = 1;
    }
    let mut result = vec![vec![0u64; n]; n];
    for node in graph.nodes() {
        result[node][node] = 1;
    }
    for _ in 0..length {
        result = multiply(&result, &adjacency);
    }
    result
}

fn multiply(a: &[Vec<u64>], b: &[Vec<u64>]) -> Vec<Vec<u64>> {
    let n = a.len();
    let mut result = vec![vec![0u64; n]; n];
    for i in 0..n {
        for k in 0..n {
            if a[i][k] == 0 {
                continue;
            }
            for j in 0..n {
                let walks = a[i][k].saturating_mul(b[k][j]);
                result[i][j] = result[i][j].saturating_add(walks);
            }
        }
    }
    result
}
