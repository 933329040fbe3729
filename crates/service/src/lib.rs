//! Business operations composed from the store in `models` and the GitHub
//! client in `common`. Each module maps to one operation group the HTTP
//! layer exposes; transport concerns stay out of this crate.

pub mod errors;
pub mod contact_service;
pub mod github_service;
pub mod runtime;
pub mod visit_service;
#[cfg(test)]
pub mod test_support;
