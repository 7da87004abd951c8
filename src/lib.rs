//! GOPATH mirror maintenance library.
//!
//! This crate keeps a fixed set of golang.org/x repositories synchronized by:
//! - Resolving the workspace root from GOPATH
//! - Cloning packages that are missing from `<root>/src`
//! - Pulling packages that already have a git checkout
//! - Replacing stale directories that are not checkouts

pub mod catalog;
pub mod config;
pub mod constants;
pub mod git;
pub mod mirror;
pub mod output;
