//! Shared test harness modules for the newsrank CLI.

use super::*;

mod helpers;
