//! Trade Desk client
//!
//! HTTP client for the persistence API, the submission service that turns
//! a validated [`TransactionDraft`](shared::TransactionDraft) into a stored
//! sale, purchase or bill, and the ambient setup (config, logging) shared
//! by the `desk` tool.

pub mod api;
pub mod config;
pub mod draft_file;
pub mod error;
pub mod http;
pub mod logger;
pub mod submit;

pub use config::ClientConfig;
pub use draft_file::DraftFile;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use submit::{SubmitOutcome, TransactionHeader, TransactionService};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
