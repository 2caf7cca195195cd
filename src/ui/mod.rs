//! UI utilities for terminal output
//!
//! Progress feedback on stderr while members are fetched.

mod spinner;

pub use spinner::{create_spinner, finish_spinner, update_spinner};
