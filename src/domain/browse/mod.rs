//! Client-side browsing: fixed-size pagination and the sliding page window.

pub mod paginator;

pub use paginator::*;
