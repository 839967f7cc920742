// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Provides reusable plan and history generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
