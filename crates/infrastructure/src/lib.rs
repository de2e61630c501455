//! Ferrous AXFR Infrastructure Layer
pub mod dns;
pub mod input;
