//! Organization member module

mod api;
mod models;

pub use models::MemberSummary;
