//! Authentication Module
//!
//! User accounts, password storage and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── passwords.rs    - bcrypt hashing and verification
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Response types
//!     ├── signup.rs   - User registration handler
//!     └── signin.rs   - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email, password and optional name → user created
//! 2. **Signin**: email and password → credentials verified → token returned
//! 3. **Post mutations**: token presented as `Authorization: Bearer <token>`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs signed with `JWT_SECRET`
//! - Tokens expire only when `JWT_TTL_SECS` is configured

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{signin, signup, MessageResponse, SigninResponse};
pub use sessions::{Claims, SessionKeys};
pub use users::{NewUser, User};
