pub mod client;
pub mod tracker;

pub use client::{ApprovalLookup, ApprovalResponse, HttpApprovalClient, UserRecord};
pub use tracker::{ApprovalStatus, ApprovalTracker};
