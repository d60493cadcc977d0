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

use serde::{Deserialize, Serialize};

use crate::constants::Weight;

/// One hop of a route.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// A minimum-latency route with node codes resolved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    source: String,
    target: String,
    weight: Weight,
    nodes: Vec<String>,
    legs: Vec<Leg>,
}

impl ShortestPath {
    pub fn new(
        source: String,
        target: String,
        weight: Weight,
        nodes: Vec<String>,
        legs: Vec<Leg>,
    ) -> Self {
        ShortestPath {
            source,
            target,
            weight,
            nodes,
            legs,
        }
    }

    pub fn get_source(&self) -> &str {
        &self.source
    }

    pub fn get_target(&self) -> &str {
        &self.target
    }

    pub fn get_weight(&self) -> Weight {
        self.weight
    }

    pub fn get_nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn get_legs(&self) -> &[Leg] {
        &self.legs
    }
}
