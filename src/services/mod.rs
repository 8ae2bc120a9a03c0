//! Data access and chart assembly services

pub mod equity;  // equity index history (Yahoo Finance chart API)
pub mod rates;   // interest rate history (FRED observations API)
pub mod refresh; // per-tick chart assembly
pub mod source;  // data source traits
