//! Shared test harness modules for the osmid CLI.
#![expect(
    clippy::panic,
    clippy::expect_used,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
