//! Piece-Rate Payroll Engine
//!
//! This crate turns daily piece-rate work quantities and a versioned rate
//! table into payable amounts for a dock and warehouse workforce: per-day
//! amounts, range totals with running balances, and the online, TDS and
//! cash split of a range's pay.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
