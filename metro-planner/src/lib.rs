//! Metro line planner.
//!
//! Models a single transit line as a directed graph with distance and
//! time weights, and answers shortest-path and forward-ride queries
//! between named stations.

pub mod config;
pub mod domain;
pub mod graph;
pub mod network;
pub mod planner;
pub mod seed;
pub mod stations;
pub mod web;
