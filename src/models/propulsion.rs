//! Propulsion models.
//!
//! This module contains models for liquid rocket engine components.

pub mod pintle;
