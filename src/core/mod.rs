//! Core application module
//!
//! This module contains:
//! - Session start-up: configuration, screen discovery, review brief
//! - Application entry point and Cosmic Application implementation

pub mod app;
pub mod startup;
