// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deprecation engine: reference table, version handling and evaluation.

pub mod evaluator;
pub mod table;
pub mod version;

pub use evaluator::{check_deprecations, evaluate, EvaluateRequest, EvaluationResult};
pub use table::{DeprecationRecord, DeprecationTable};
