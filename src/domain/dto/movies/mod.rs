//! # Movie Data Transfer Objects Module
//!
//! ```text
//! movies/
//! ├── request/     # MovieRequest, MovieQuery
//! └── response/    # MovieResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
