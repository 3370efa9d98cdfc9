//! Shift pay engine for a personal life-OS dashboard.
//!
//! This crate classifies worked shifts into regular and overtime hour buckets
//! by day of week and shift type, prices them at the job's hourly rate,
//! aggregates them into monthly work records with the transport stipend, and
//! rolls the stored records up into yearly views. It also computes the gym
//! attendance streak and the yearly income report shown on the same dashboard.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
