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

//! Static description of a network: the edge list plus the table of display names.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::Weight;
use crate::errors::Result;
use crate::graph_store::GraphStore;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct NetworkConfig {
    /// Fixes the node order and lets a scenario contain nodes without any links.
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
    /// Every edge is also added in the reverse direction with the same weight.
    #[serde(default)]
    pub symmetric: bool,
    #[serde(default)]
    pub names: BTreeMap<String, String>,
}

const MOROCCO: &str = include_str!("../data/morocco.toml");

impl NetworkConfig {
    pub fn from_toml_str(input: &str) -> Result<NetworkConfig> {
        let config: NetworkConfig = toml::from_str(input)?;
        debug!(
            "parsed network configuration with {} nodes, {} edges",
            config.nodes.len(),
            config.edges.len()
        );
        Ok(config)
    }

    /// The ten-city reference network.
    pub fn morocco() -> Result<NetworkConfig> {
        NetworkConfig::from_toml_str(MOROCCO)
    }
}

impl GraphStore {
    pub fn from_config(config: &NetworkConfig) -> GraphStore {
        let mut store = GraphStore::new();
        for code in &config.nodes {
            store.add_node(code);
        }
        for e in &config.edges {
            if config.symmetric {
                store.add_link(&e.from, &e.to, e.weight);
            } else {
                store.add_edge(&e.from, &e.to, e.weight);
            }
        }
        for (code, name) in &config.names {
            store.set_display_name(code, name);
        }
        debug!(
            "created graph store with {} nodes, {} edges",
            store.get_num_nodes(),
            store.get_num_edges()
        );
        store
    }
}
