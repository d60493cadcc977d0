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

use log::warn;
use thiserror::Error;

use crate::failure_overlay::EffectiveGraph;
use crate::shortest_path_tree::DistanceOverflow;
use crate::constants::NodeId;
use crate::Algorithm;

pub type Result<T> = std::result::Result<T, RoutingError>;

/// Failure of a routing query. None of these leave the store in an unusable state, the next
/// query can simply be issued with different inputs.
#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("node {0} is not part of the network")]
    UnknownNode(String),

    #[error("no path from {origin} to {destination}")]
    NoPathFound { origin: String, destination: String },

    #[error("negative cycle reachable from {origin}")]
    NegativeCycle { origin: String },

    #[error("distance from {origin} leaves the range of the weight type")]
    DistanceOverflow { origin: String },

    #[error("{algorithm:?} cannot be used on a network with negative weights")]
    InvalidAlgorithmChoice { algorithm: Algorithm },

    #[error("invalid network configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl RoutingError {
    pub fn kind(&self) -> &str {
        match self {
            RoutingError::UnknownNode(_) => "UnknownNode",
            RoutingError::NoPathFound { .. } => "NoPathFound",
            RoutingError::NegativeCycle { .. } => "NegativeCycle",
            RoutingError::DistanceOverflow { .. } => "DistanceOverflow",
            RoutingError::InvalidAlgorithmChoice { .. } => "InvalidAlgorithmChoice",
            RoutingError::Config(_) => "Config",
        }
    }
}

impl RoutingError {
    pub(crate) fn overflow(graph: &EffectiveGraph, source: NodeId, e: DistanceOverflow) -> Self {
        warn!(
            "relaxing {} -> {} overflows the distance from {}",
            e.from, e.to, source
        );
        RoutingError::DistanceOverflow {
            origin: graph.store().code_at(source).to_string(),
        }
    }
}
