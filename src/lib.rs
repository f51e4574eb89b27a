// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod config;
pub mod api;
pub mod models;
pub mod category;
pub mod bucket;
pub mod aggregate;
pub mod chart;
pub mod fetch;
pub mod utils;
pub mod commands;
