//! The agent loop
//!
//! Drives the model → decision → gate → invoke → observe cycle for one user
//! turn at a time. Each loop iteration costs one model round-trip; the budget
//! bounds retries and action chains alike.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::agent::{AgentConfig, Protocol};
use crate::capabilities::{InvocationOutput, Registered};
use crate::conversation::{ConversationState, Message};
use crate::core::{
    ActionRequest, AgentError, AgentResult, Decision, NullObserver, TurnObserver, TurnOutcome,
};
use crate::llm::ModelProvider;
use crate::parser::{NativeParser, ResponseParser, StructuredParser};
use crate::permissions::{ActionGate, Approver};
use crate::prompt;

/// An agent instance driving one conversation
///
/// # Example
///
/// ```ignore
/// let config = Arc::new(
///     AgentConfig::new("assistant", "You answer questions about the codebase.")
///         .with_registry(registry),
/// );
/// let mut agent = Agent::new(config, provider, Arc::new(ConsoleApprover::new()))?;
///
/// match agent.run("What does the parser module do?").await? {
///     TurnOutcome::Answering(text) => println!("{}", text),
///     other => eprintln!("{}", other),
/// }
/// ```
pub struct Agent {
    config: Arc<AgentConfig>,
    provider: Arc<dyn ModelProvider>,
    approver: Arc<dyn Approver>,
    gate: ActionGate,
    parser: Box<dyn ResponseParser>,
    observer: Arc<dyn TurnObserver>,
    conversation: ConversationState,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Agent {
    /// Create a new agent from its configuration
    ///
    /// The parser is fixed here by the configured protocol; nothing downstream
    /// branches on protocol for parsing again.
    pub fn new(
        config: Arc<AgentConfig>,
        provider: Arc<dyn ModelProvider>,
        approver: Arc<dyn Approver>,
    ) -> AgentResult<Self> {
        config.validate()?;

        let parser: Box<dyn ResponseParser> = match config.protocol() {
            Protocol::Native => Box::new(NativeParser::new()),
            Protocol::Structured => Box::new(StructuredParser::new()),
        };

        let instructions = match config.protocol() {
            Protocol::Native => prompt::native_instructions(config.name(), config.system()),
            Protocol::Structured => prompt::structured_instructions(
                config.name(),
                config.system(),
                &config.registry().catalogue(),
            ),
        };

        let gate = ActionGate::new(config.permission_mode(), approver.clone());

        Ok(Self {
            conversation: ConversationState::with_system(instructions),
            config,
            provider,
            approver,
            gate,
            parser,
            observer: Arc::new(NullObserver),
        })
    }

    /// Set the observer that receives in-loop events
    pub fn with_observer(mut self, observer: Arc<dyn TurnObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The agent's configuration
    pub fn config(&self) -> &Arc<AgentConfig> {
        &self.config
    }

    /// The conversation log
    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    /// Run one user turn to completion
    ///
    /// `Answering` does not end the session: calling `run` again starts a
    /// fresh turn on the same conversation with a reset iteration budget.
    pub async fn run(&mut self, message: impl Into<String>) -> AgentResult<TurnOutcome> {
        self.conversation.push(Message::user(message));
        self.run_turn().await
    }

    async fn run_turn(&mut self) -> AgentResult<TurnOutcome> {
        let manifests = match self.config.protocol() {
            Protocol::Native => Some(self.config.registry().manifest()),
            Protocol::Structured => None,
        };

        for iteration in 1..=self.config.max_iterations() {
            tracing::debug!(
                "[Agent] {} ({}) calling model with {} messages (iteration {}/{})",
                self.config.name(),
                self.conversation.id(),
                self.conversation.len(),
                iteration,
                self.config.max_iterations()
            );

            // Provider failures end the turn as a reported outcome, not a fault
            let response = match self
                .provider
                .complete(self.conversation.messages(), manifests.as_deref())
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    let err = AgentError::Provider(format!("{:#}", e));
                    tracing::error!("[Agent] {}: {}", self.config.name(), err);
                    return Ok(TurnOutcome::Errored(err.to_string()));
                }
            };

            // Everything the model said enters the log, even malformed output
            self.conversation.push(Message::assistant(response.audit_text()));

            match self.parser.parse(&response) {
                Decision::Thought { text } => {
                    tracing::debug!("[Agent] {} thinking", self.config.name());
                    self.observer.on_thought(&text);
                }

                Decision::Answer { text } => {
                    tracing::info!("[Agent] {} answered", self.config.name());
                    return Ok(TurnOutcome::Answering(text));
                }

                Decision::Malformed { reason, .. } => {
                    tracing::warn!(
                        "[Agent] {} produced a malformed response: {}",
                        self.config.name(),
                        reason
                    );
                    self.conversation.push(Message::user(format!(
                        "Your reply could not be processed: {}. Reply again in the required format.",
                        reason
                    )));
                }

                Decision::Action(request) => {
                    if let Some(outcome) = self.take_action(request).await? {
                        return Ok(outcome);
                    }
                }
            }
        }

        tracing::warn!(
            "[Agent] {} exhausted its iteration budget ({})",
            self.config.name(),
            self.config.max_iterations()
        );
        Ok(TurnOutcome::ExhaustedBudget)
    }

    /// Resolve, gate, and execute one action request
    ///
    /// Returns `Some` when the action terminates the turn, `None` when the
    /// observation was appended and the loop should continue.
    async fn take_action(&mut self, request: ActionRequest) -> AgentResult<Option<TurnOutcome>> {
        // Resolution comes before gating: an unregistered name ends the turn
        // regardless of permission mode.
        let entry = match self.config.registry().resolve(&request.name) {
            Ok(entry) => entry.clone(),
            Err(e) => {
                tracing::warn!("[Agent] {}", e);
                return Ok(Some(TurnOutcome::Errored(e.to_string())));
            }
        };

        let destructive = request.destructive
            || match &entry {
                Registered::Invoke(capability) => capability.is_destructive(&request.args),
                Registered::Delegate(_) => false,
            };

        let gated = request.clone().destructive(destructive);
        if !self.gate.authorize(&gated).await {
            return Ok(Some(TurnOutcome::Forbidden(
                "Action cancelled by the user.".to_string(),
            )));
        }

        self.observer.on_action(&request.name);
        tracing::info!("[Agent] {} invoking {}", self.config.name(), request.name);

        let output = match entry {
            Registered::Invoke(capability) => match capability.invoke(&request.args).await {
                Ok(output) => output,
                // Hard failures are fed back as error observations so the
                // model can adjust; the turn itself survives.
                Err(e) => {
                    let err = AgentError::invocation(&request.name, format!("{:#}", e));
                    tracing::warn!("[Agent] {}", err);
                    InvocationOutput::error(err.to_string())
                }
            },
            Registered::Delegate(child) => self.delegate(child, &request).await,
        };

        self.observer
            .on_observation(&request.name, &output.output, output.is_error);

        let observation = match self.config.protocol() {
            Protocol::Native => Message::tool_result(output.output, request.tool_call_id),
            Protocol::Structured => Message::user(output.output),
        };
        self.conversation.push(observation);

        Ok(None)
    }

    /// Hand a task to a child agent and return its result as an observation
    ///
    /// The child runs on a private conversation; only the result crosses back.
    /// The future is boxed to break the async recursion.
    fn delegate<'a>(
        &'a self,
        child: Arc<AgentConfig>,
        request: &'a ActionRequest,
    ) -> Pin<Box<dyn Future<Output = InvocationOutput> + Send + 'a>> {
        Box::pin(async move {
            let Some(task) = request.args.get("task").and_then(Value::as_str) else {
                return InvocationOutput::error(format!(
                    "{} requires a 'task' string argument",
                    request.name
                ));
            };

            tracing::info!(
                "[Agent] {} delegating to {}: {}",
                self.config.name(),
                child.name(),
                task
            );

            let mut agent =
                match Agent::new(child, self.provider.clone(), self.approver.clone()) {
                    Ok(agent) => agent.with_observer(self.observer.clone()),
                    Err(e) => return InvocationOutput::error(e.to_string()),
                };

            match agent.run(task).await {
                Ok(TurnOutcome::Answering(text)) => InvocationOutput::success(text),
                Ok(outcome) => InvocationOutput::error(outcome.to_string()),
                Err(e) => InvocationOutput::error(e.to_string()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{Capability, CapabilityRegistry};
    use crate::conversation::Role;
    use crate::llm::{CapabilityManifest, ModelResponse};
    use crate::permissions::{ApprovalReply, PermissionMode};
    use async_trait::async_trait;
    use serde_json::{json, Map};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct ScriptedProvider {
        responses: Mutex<Vec<ModelResponse>>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<ModelResponse>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelProvider for ScriptedProvider {
        async fn complete(
            &self,
            _messages: &[Message],
            _manifest: Option<&[CapabilityManifest]>,
        ) -> anyhow::Result<ModelResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                anyhow::bail!("script exhausted");
            }
            Ok(responses.remove(0))
        }
    }

    struct FixedApprover {
        reply: ApprovalReply,
        consulted: AtomicUsize,
    }

    impl FixedApprover {
        fn new(reply: ApprovalReply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                consulted: AtomicUsize::new(0),
            })
        }

        fn consulted(&self) -> usize {
            self.consulted.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Approver for FixedApprover {
        async fn review(&self, _request: &ActionRequest) -> ApprovalReply {
            self.consulted.fetch_add(1, Ordering::SeqCst);
            self.reply
        }
    }

    /// Non-destructive capability that counts its invocations
    struct Counter {
        invocations: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Capability for Counter {
        fn name(&self) -> &str {
            "count"
        }

        fn description(&self) -> &str {
            "Increments a counter"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn invoke(&self, _args: &Map<String, Value>) -> anyhow::Result<InvocationOutput> {
            let n = self.invocations.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(InvocationOutput::success(format!("count is {}", n)))
        }
    }

    /// Destructive capability that counts its invocations
    struct Wipe {
        invocations: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Capability for Wipe {
        fn name(&self) -> &str {
            "wipe"
        }

        fn description(&self) -> &str {
            "Deletes everything"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        fn is_destructive(&self, _args: &Map<String, Value>) -> bool {
            true
        }

        async fn invoke(&self, _args: &Map<String, Value>) -> anyhow::Result<InvocationOutput> {
            self.invocations.fetch_add(1, Ordering::SeqCst);
            Ok(InvocationOutput::success("wiped"))
        }
    }

    /// Capability whose invocation always fails hard
    struct Flaky;

    #[async_trait]
    impl Capability for Flaky {
        fn name(&self) -> &str {
            "flaky"
        }

        fn description(&self) -> &str {
            "Fails every time"
        }

        fn parameters(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn invoke(&self, _args: &Map<String, Value>) -> anyhow::Result<InvocationOutput> {
            anyhow::bail!("connection refused")
        }
    }

    fn structured_action(name: &str) -> ModelResponse {
        ModelResponse::text(format!(r#"{{"action": {{"name": "{}", "args": {{}}}}}}"#, name))
    }

    #[tokio::test]
    async fn test_thought_then_answer() {
        let provider = ScriptedProvider::new(vec![
            ModelResponse::text(r#"{"thought": ["nothing to do here"]}"#),
            ModelResponse::text(r#"{"answer": "done"}"#),
        ]);
        let config = Arc::new(AgentConfig::new("helper", "You help."));
        let mut agent = Agent::new(config, provider, FixedApprover::new(ApprovalReply::Deny)).unwrap();

        let outcome = agent.run("hi").await.unwrap();

        assert_eq!(outcome, TurnOutcome::Answering("done".to_string()));
        assert_eq!(agent.conversation().count_role(Role::Assistant), 2);
        assert_eq!(agent.conversation().count_role(Role::User), 1);
        assert_eq!(agent.conversation().count_role(Role::ToolResult), 0);
    }

    #[tokio::test]
    async fn test_native_sentinel_answer() {
        let provider = ScriptedProvider::new(vec![
            ModelResponse::text("Let me think about this."),
            ModelResponse::text("ANSWER: 42"),
        ]);
        let config =
            Arc::new(AgentConfig::new("helper", "You help.").with_protocol(Protocol::Native));
        let mut agent = Agent::new(config, provider, FixedApprover::new(ApprovalReply::Deny)).unwrap();

        let outcome = agent.run("what is the answer?").await.unwrap();

        assert_eq!(outcome, TurnOutcome::Answering("42".to_string()));
        assert_eq!(agent.conversation().count_role(Role::Assistant), 2);
    }

    #[tokio::test]
    async fn test_unregistered_capability_errors() {
        let provider = ScriptedProvider::new(vec![structured_action("run_shell")]);
        let config = Arc::new(AgentConfig::new("helper", "You help."));
        let mut agent = Agent::new(
            config,
            provider.clone(),
            FixedApprover::new(ApprovalReply::Approve),
        ).unwrap();

        let outcome = agent.run("list files").await.unwrap();

        match outcome {
            TurnOutcome::Errored(detail) => {
                assert!(detail.contains("run_shell isn't registered"))
            }
            other => panic!("expected errored, got {:?}", other),
        }
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_denied_destructive_action_is_forbidden() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let mut registry = CapabilityRegistry::new();
        registry.register(Wipe {
            invocations: invocations.clone(),
        });

        let provider = ScriptedProvider::new(vec![structured_action("wipe")]);
        let config = Arc::new(
            AgentConfig::new("helper", "You help.")
                .with_permission_mode(PermissionMode::AutoUnlessDestructive)
                .with_registry(Arc::new(registry)),
        );
        let approver = FixedApprover::new(ApprovalReply::Deny);
        let mut agent = Agent::new(config, provider, approver.clone()).unwrap();

        let outcome = agent.run("clean up").await.unwrap();

        assert!(matches!(outcome, TurnOutcome::Forbidden(_)));
        assert_eq!(approver.consulted(), 1);
        // Nothing was invoked and no observation was appended
        assert_eq!(invocations.load(Ordering::SeqCst), 0);
        assert_eq!(agent.conversation().count_role(Role::User), 1);
        assert_eq!(agent.conversation().count_role(Role::ToolResult), 0);
    }

    #[tokio::test]
    async fn test_malformed_responses_exhaust_budget() {
        let provider = ScriptedProvider::new(vec![
            ModelResponse::text("not json"),
            ModelResponse::text("still not json"),
            ModelResponse::text("never json"),
        ]);
        let config =
            Arc::new(AgentConfig::new("helper", "You help.").with_max_iterations(3));
        let mut agent = Agent::new(
            config,
            provider.clone(),
            FixedApprover::new(ApprovalReply::Approve),
        ).unwrap();

        let outcome = agent.run("hi").await.unwrap();

        assert_eq!(outcome, TurnOutcome::ExhaustedBudget);
        assert_eq!(provider.calls(), 3);
        // Initial message plus one corrective message per retry
        assert_eq!(agent.conversation().count_role(Role::User), 4);
    }

    #[tokio::test]
    async fn test_never_ask_skips_the_approver() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let mut registry = CapabilityRegistry::new();
        registry.register(Wipe {
            invocations: invocations.clone(),
        });

        let provider = ScriptedProvider::new(vec![
            structured_action("wipe"),
            ModelResponse::text(r#"{"answer": "all gone"}"#),
        ]);
        let config = Arc::new(
            AgentConfig::new("helper", "You help.")
                .with_permission_mode(PermissionMode::NeverAsk)
                .with_registry(Arc::new(registry)),
        );
        let approver = FixedApprover::new(ApprovalReply::Deny);
        let mut agent = Agent::new(config, provider, approver.clone()).unwrap();

        let outcome = agent.run("clean up").await.unwrap();

        assert_eq!(outcome, TurnOutcome::Answering("all gone".to_string()));
        assert_eq!(approver.consulted(), 0);
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_action_round_trips_invoke_once_each() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let mut registry = CapabilityRegistry::new();
        registry.register(Counter {
            invocations: invocations.clone(),
        });

        let provider = ScriptedProvider::new(vec![
            structured_action("count"),
            structured_action("count"),
            structured_action("count"),
            ModelResponse::text(r#"{"answer": "counted"}"#),
        ]);
        let config = Arc::new(
            AgentConfig::new("helper", "You help.").with_registry(Arc::new(registry)),
        );
        let mut agent = Agent::new(
            config,
            provider,
            FixedApprover::new(ApprovalReply::Approve),
        ).unwrap();

        let outcome = agent.run("count three times").await.unwrap();

        assert_eq!(outcome, TurnOutcome::Answering("counted".to_string()));
        assert_eq!(invocations.load(Ordering::SeqCst), 3);
        // Structured observations come back as user messages
        assert_eq!(agent.conversation().count_role(Role::User), 4);
        assert_eq!(agent.conversation().count_role(Role::Assistant), 4);
    }

    #[tokio::test]
    async fn test_native_observation_carries_tool_call_id() {
        let invocations = Arc::new(AtomicUsize::new(0));
        let mut registry = CapabilityRegistry::new();
        registry.register(Counter {
            invocations: invocations.clone(),
        });

        let provider = ScriptedProvider::new(vec![
            ModelResponse::tool_call(Some("call_9".into()), "count", json!({})),
            ModelResponse::text("ANSWER: ok"),
        ]);
        let config = Arc::new(
            AgentConfig::new("helper", "You help.")
                .with_protocol(Protocol::Native)
                .with_registry(Arc::new(registry)),
        );
        let mut agent = Agent::new(
            config,
            provider,
            FixedApprover::new(ApprovalReply::Approve),
        ).unwrap();

        let outcome = agent.run("count once").await.unwrap();

        assert_eq!(outcome, TurnOutcome::Answering("ok".to_string()));
        let observation = agent
            .conversation()
            .messages()
            .iter()
            .find(|m| m.role == Role::ToolResult)
            .expect("tool observation present");
        assert_eq!(observation.tool_call_id.as_deref(), Some("call_9"));
        assert_eq!(observation.content, "count is 1");
    }

    #[tokio::test]
    async fn test_invocation_failure_is_fed_back() {
        let mut registry = CapabilityRegistry::new();
        registry.register(Flaky);

        let provider = ScriptedProvider::new(vec![
            structured_action("flaky"),
            ModelResponse::text(r#"{"answer": "gave up"}"#),
        ]);
        let config = Arc::new(
            AgentConfig::new("helper", "You help.").with_registry(Arc::new(registry)),
        );
        let mut agent = Agent::new(
            config,
            provider,
            FixedApprover::new(ApprovalReply::Approve),
        ).unwrap();

        let outcome = agent.run("try it").await.unwrap();

        assert_eq!(outcome, TurnOutcome::Answering("gave up".to_string()));
        let observation = &agent.conversation().messages()[3];
        assert_eq!(observation.role, Role::User);
        assert!(observation.content.contains("capability 'flaky' failed"));
        assert!(observation.content.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_delegation_returns_child_answer() {
        let child = Arc::new(
            AgentConfig::new("researcher", "You research.")
                .with_description("Looks things up"),
        );
        let mut registry = CapabilityRegistry::new();
        registry.register_delegate(child);

        // Shared provider script: parent delegates, child answers, parent answers
        let provider = ScriptedProvider::new(vec![
            ModelResponse::text(
                r#"{"action": {"name": "researcher", "args": {"task": "find x"}}}"#,
            ),
            ModelResponse::text(r#"{"answer": "child result"}"#),
            ModelResponse::text(r#"{"answer": "parent done"}"#),
        ]);
        let config = Arc::new(
            AgentConfig::new("parent", "You coordinate.").with_registry(Arc::new(registry)),
        );
        let mut agent = Agent::new(
            config,
            provider,
            FixedApprover::new(ApprovalReply::Approve),
        ).unwrap();

        let outcome = agent.run("research x").await.unwrap();

        assert_eq!(outcome, TurnOutcome::Answering("parent done".to_string()));
        // The child's private conversation never leaks into the parent's:
        // system, user, assistant (delegation), user (observation), assistant
        assert_eq!(agent.conversation().len(), 5);
        assert_eq!(agent.conversation().messages()[3].content, "child result");
        assert_eq!(agent.conversation().messages()[3].role, Role::User);
    }

    #[tokio::test]
    async fn test_delegation_without_task_is_an_error_observation() {
        let child = Arc::new(AgentConfig::new("researcher", "You research."));
        let mut registry = CapabilityRegistry::new();
        registry.register_delegate(child);

        let provider = ScriptedProvider::new(vec![
            ModelResponse::text(r#"{"action": {"name": "researcher", "args": {}}}"#),
            ModelResponse::text(r#"{"answer": "retried"}"#),
        ]);
        let config = Arc::new(
            AgentConfig::new("parent", "You coordinate.").with_registry(Arc::new(registry)),
        );
        let mut agent = Agent::new(
            config,
            provider,
            FixedApprover::new(ApprovalReply::Approve),
        ).unwrap();

        let outcome = agent.run("research x").await.unwrap();

        assert_eq!(outcome, TurnOutcome::Answering("retried".to_string()));
        assert!(agent.conversation().messages()[3]
            .content
            .contains("requires a 'task' string argument"));
    }

    #[tokio::test]
    async fn test_session_continues_after_answer() {
        let provider = ScriptedProvider::new(vec![
            ModelResponse::text(r#"{"answer": "first"}"#),
            ModelResponse::text(r#"{"answer": "second"}"#),
        ]);
        let config = Arc::new(AgentConfig::new("helper", "You help."));
        let mut agent = Agent::new(config, provider, FixedApprover::new(ApprovalReply::Deny)).unwrap();

        assert_eq!(
            agent.run("one").await.unwrap(),
            TurnOutcome::Answering("first".to_string())
        );
        assert_eq!(
            agent.run("two").await.unwrap(),
            TurnOutcome::Answering("second".to_string())
        );
        assert_eq!(agent.conversation().count_role(Role::User), 2);
        assert_eq!(agent.conversation().count_role(Role::Assistant), 2);
    }

    #[tokio::test]
    async fn test_provider_failure_ends_the_turn_errored() {
        let provider = ScriptedProvider::new(vec![]);
        let config = Arc::new(AgentConfig::new("helper", "You help."));
        let mut agent =
            Agent::new(config, provider, FixedApprover::new(ApprovalReply::Deny)).unwrap();

        match agent.run("hi").await.unwrap() {
            TurnOutcome::Errored(detail) => {
                assert!(detail.contains("model provider error"))
            }
            other => panic!("expected errored, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let provider = ScriptedProvider::new(vec![]);
        let config = Arc::new(AgentConfig::new("", "You help."));

        let err = Agent::new(config, provider, FixedApprover::new(ApprovalReply::Deny))
            .unwrap_err();
        assert!(matches!(err, AgentError::InvalidConfig(_)));
    }
}
