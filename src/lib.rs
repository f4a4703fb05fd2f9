//! TOPSIS Ranker - Multi-criteria decision ranking service
//!
//! Ranks alternatives against weighted benefit and cost criteria with the
//! TOPSIS method. The engine in [`domain::topsis`] is pure and synchronous;
//! the catalog, history and HTTP surface around it follow a ports and
//! adapters layout.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
