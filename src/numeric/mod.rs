// ============================================================================
// Numeric Module
// Fixed-precision decimal normalization for brewing quantities
// ============================================================================
//
// This module provides:
// - ToDecimal: conversion of integers, floats and Decimals into Decimal
// - normalize: round-half-up to an explicit number of fractional digits
// - checked helpers used by the calculation engine
// - NumericError: Error types for conversion and arithmetic
//
// Design principles:
// - No floating-point arithmetic after input conversion
// - All arithmetic returns Result (no panics)
// - Ties always round away from zero (0.5 -> 1), never banker's rounding

mod decimal;
mod errors;

pub use decimal::{
    checked_add, checked_div, checked_mul, checked_sub, normalize, normalize_default, ToDecimal,
    DEFAULT_PLACES, MAX_PLACES,
};
pub use errors::{NumericError, NumericResult};
