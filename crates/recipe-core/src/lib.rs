// ABOUTME: Core types and constants for the Recipe Finder client
// ABOUTME: Foundation crate with error handling, canonical recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing the shared domain types for the Recipe Finder
//! workspace. Provider clients and the application crate both depend on it,
//! and it changes far less often than either.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Provider tags, endpoints, storage keys, and placeholder text
//! - **models**: Canonical `Recipe`, `SearchFilter`, favorites, and generation types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Canonical domain models
pub mod models;
