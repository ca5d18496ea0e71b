//! NicheNest - AI-powered keyword research for Amazon book niches.
//!
//! The Dioxus front-end over [`nichenest_core`]: a single screen that shows
//! a paginated grid of keyword opportunities for a chosen recency window,
//! with per-keyword insight drill-down. All fetch orchestration and state
//! transitions live in the core crate; this crate renders and wires events.

pub mod components;
pub mod utils;
