// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each module renders its result as text or JSON and prints it; the
//! rendering functions are public so they can be tested without stdout.

pub mod dataset;
pub mod find;
pub mod normalize;
pub mod options;
pub mod settings;
