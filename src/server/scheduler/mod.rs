//! Background cron jobs.

pub mod code_sweep;
