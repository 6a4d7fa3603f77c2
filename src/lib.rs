//! HawkAdvisor library exports.
//!
//! Browse majors, the careers they lead to, and the electives and professor
//! ratings behind each career. All content is static JSON.

pub mod core;
pub mod data;
pub mod tui;

#[cfg(test)]
pub mod test_support;
