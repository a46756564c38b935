// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod db;
pub mod models;
pub mod store;
pub mod records;
pub mod forms;
pub mod budgets;
pub mod reports;
pub mod goals;
pub mod investments;
pub mod tracker;
pub mod transfer;
pub mod utils;
pub mod commands;
