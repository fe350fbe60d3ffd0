pub mod filter;
pub mod rankings;
pub mod roster;
pub mod store;
pub mod synth;
pub mod team_report;
