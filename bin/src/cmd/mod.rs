//! CLI subcommand modules.
//!
//! This module contains the implementations for all cuenta CLI subcommands.

pub(crate) mod modes;
pub(crate) mod view;
