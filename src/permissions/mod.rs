//! Action permission gating

mod gate;

pub use gate::{ActionGate, ApprovalReply, Approver, ConsoleApprover, PermissionMode};
