//! # User Data Transfer Objects Module
//!
//! ```text
//! users/
//! ├── request/     # CreateUserRequest, UpdateUserRequest, UsernameQuery
//! └── response/    # UserResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
