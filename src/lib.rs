// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod bridge;
pub mod categories;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod filters;
pub mod forms;
pub mod models;
pub mod mutation;
pub mod notify;
pub mod session;
pub mod snapshot;
pub mod stats;
pub mod utils;
