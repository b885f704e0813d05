//! Request extractors that gate handlers before their body is read.
//!
//! - [`content_type::RequireJson`] -- Rejects write requests not declared as JSON.

pub mod content_type;
