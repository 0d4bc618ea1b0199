//! # Collection Patcher
//!
//! Adds the Invoices, Resumes, Contracts and Receipts folders to the DocuFlow
//! Postman collection, in front of the existing "Health Check" item.
//!
//! ## Steps
//! - Load the collection JSON whole
//! - Merge the id variables (never overwriting existing keys)
//! - Insert the four folders before the anchor item
//! - Write the document back, preserving every field it does not touch

pub mod cli;
pub mod collection;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod patcher;
pub mod storage;

// Re-export commonly used types
pub use collection::Collection;
pub use error::{PatchError, Result};
pub use models::{Folder, HttpMethod, Request, RequestItem, Variable};
pub use patcher::{apply, patch, patch_with, PatchOptions, PatchReport};
