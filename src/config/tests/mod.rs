//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `loading`: Environment and CLI loading tests
//! - `validation`: Value validation and filter construction tests

mod helpers;
mod operation_mode;
mod precedence;
