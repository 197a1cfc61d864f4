//! Action gate implementation
//!
//! Every action passes through the gate before it can touch the registry or
//! run. The gate combines a permission mode with an `Approver`, the
//! collaborator that actually asks whoever is in charge.

use std::io::Write;
use std::sync::Arc;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::core::ActionRequest;

/// How the gate treats action requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionMode {
    /// Every action requires explicit approval
    AlwaysAsk,
    /// Non-destructive actions pass silently; destructive ones require approval
    AutoUnlessDestructive,
    /// Everything passes without consulting the approver
    NeverAsk,
}

impl Default for PermissionMode {
    fn default() -> Self {
        Self::AutoUnlessDestructive
    }
}

/// One reply from an approver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalReply {
    /// The action may run
    Approve,
    /// The action must not run
    Deny,
    /// The reply was unintelligible; ask again
    Invalid,
}

/// Collaborator that reviews an action request
///
/// An `Invalid` reply is not a decision: the gate asks again until it gets
/// one. There is no default answer.
#[async_trait::async_trait]
pub trait Approver: Send + Sync {
    /// Review the request and reply
    async fn review(&self, request: &ActionRequest) -> ApprovalReply;
}

/// Gate that decides whether an action may execute
pub struct ActionGate {
    mode: PermissionMode,
    approver: Arc<dyn Approver>,
}

impl ActionGate {
    /// Create a gate with the given mode and approver
    pub fn new(mode: PermissionMode, approver: Arc<dyn Approver>) -> Self {
        Self { mode, approver }
    }

    /// The gate's permission mode
    pub fn mode(&self) -> PermissionMode {
        self.mode
    }

    /// Decide whether the request may run
    ///
    /// Returns `false` only on an explicit denial.
    pub async fn authorize(&self, request: &ActionRequest) -> bool {
        match self.mode {
            PermissionMode::NeverAsk => true,
            PermissionMode::AutoUnlessDestructive if !request.destructive => true,
            PermissionMode::AutoUnlessDestructive | PermissionMode::AlwaysAsk => {
                self.consult(request).await
            }
        }
    }

    async fn consult(&self, request: &ActionRequest) -> bool {
        loop {
            match self.approver.review(request).await {
                ApprovalReply::Approve => {
                    tracing::info!("[ActionGate] Approved: {}", request.name);
                    return true;
                }
                ApprovalReply::Deny => {
                    tracing::warn!("[ActionGate] Denied: {}", request.name);
                    return false;
                }
                ApprovalReply::Invalid => {
                    tracing::debug!("[ActionGate] Unintelligible reply, asking again");
                }
            }
        }
    }
}

/// Approver that prompts on the terminal
///
/// Accepts `y`/`yes` and `n`/`no`, case-insensitive. Anything else is
/// `Invalid` and triggers a re-prompt.
#[derive(Debug, Default)]
pub struct ConsoleApprover;

impl ConsoleApprover {
    /// Create a new console approver
    pub fn new() -> Self {
        Self
    }

    fn classify(input: &str) -> ApprovalReply {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => ApprovalReply::Approve,
            "n" | "no" => ApprovalReply::Deny,
            _ => ApprovalReply::Invalid,
        }
    }
}

#[async_trait::async_trait]
impl Approver for ConsoleApprover {
    async fn review(&self, request: &ActionRequest) -> ApprovalReply {
        println!(
            "\n{} {} {}",
            "Permission required:".yellow().bold(),
            request.name.cyan(),
            serde_json::Value::Object(request.args.clone()).to_string().dimmed()
        );
        print!("{}", "Allow? [y/n]: ".yellow());
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return ApprovalReply::Deny;
        }
        Self::classify(&line)
    }
}
