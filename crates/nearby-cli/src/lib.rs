//! nearby-cli
//! ==========
//!
//! Command-line interface and HTTP front end for `nearby-core`.
//!
//! The binary (`nearby`) is the primary deliverable. The library target
//! holds the pieces the binary shares with its tests: the axum router and
//! the logging setup.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;
pub mod server;
