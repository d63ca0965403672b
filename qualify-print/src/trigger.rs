//! Print trigger wiring
//!
//! Binds a job template and its auth requirement to the orchestrator and
//! drives the returned steps through the dialog collaborators. The trigger
//! holds no business state of its own; everything it renders comes from the
//! orchestrator's reported steps.

use crate::error::PrintResult;
use crate::gateway::GatewayApi;
use crate::job::{Destination, PrintJob};
use crate::orchestrator::{PrintOrchestrator, Step};
use async_trait::async_trait;

/// Destination picker collaborator
///
/// Implementations render the listing and return the operator's choice, or
/// `None` when the dialog is closed without confirmation. Empty selections
/// must be rejected dialog-side and never returned.
#[async_trait]
pub trait DestinationPicker: Send + Sync {
    async fn pick(&self, destinations: &[Destination], notice: Option<&str>) -> Option<String>;
}

/// Credential prompt collaborator
///
/// Returns `(username, password)` or `None` on cancel. Both fields must be
/// validated non-empty dialog-side before returning.
#[async_trait]
pub trait CredentialPrompt: Send + Sync {
    async fn prompt(&self) -> Option<(String, String)>;
}

/// Outcome of one trigger activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Job accepted by the gateway
    Printed,
    /// Operator closed a dialog without confirming
    Cancelled,
    /// Destination-only flow finished, nothing was printed
    Configured,
}

/// The print trigger: one orchestrator plus its two dialogs
pub struct PrintTrigger<G: GatewayApi, P, C> {
    orchestrator: PrintOrchestrator<G>,
    picker: P,
    prompt: C,
}

impl<G, P, C> PrintTrigger<G, P, C>
where
    G: GatewayApi,
    P: DestinationPicker,
    C: CredentialPrompt,
{
    pub fn new(orchestrator: PrintOrchestrator<G>, picker: P, prompt: C) -> Self {
        Self {
            orchestrator,
            picker,
            prompt,
        }
    }

    /// Access the underlying orchestrator
    pub fn orchestrator(&self) -> &PrintOrchestrator<G> {
        &self.orchestrator
    }

    /// Fire a print request and drive the dialogs to completion
    pub async fn print(&mut self, job: PrintJob, requires_auth: bool) -> PrintResult<TriggerOutcome> {
        let step = self.orchestrator.submit_job(job, requires_auth).await?;
        self.drive(step).await
    }

    /// Open the destination picker without a job attached
    pub async fn configure(&mut self) -> PrintResult<TriggerOutcome> {
        let step = self.orchestrator.configure_destination().await?;
        self.drive(step).await
    }

    async fn drive(&mut self, mut step: Step) -> PrintResult<TriggerOutcome> {
        loop {
            step = match step {
                Step::Printed => return Ok(TriggerOutcome::Printed),
                Step::Completed => return Ok(TriggerOutcome::Configured),
                Step::SelectDestination {
                    destinations,
                    notice,
                } => match self.picker.pick(&destinations, notice.as_deref()).await {
                    Some(name) => self.orchestrator.select_destination(&name).await?,
                    None => {
                        self.orchestrator.cancel();
                        return Ok(TriggerOutcome::Cancelled);
                    }
                },
                Step::EnterCredentials => match self.prompt.prompt().await {
                    Some((username, password)) => {
                        self.orchestrator
                            .submit_credentials(&username, &password)
                            .await?
                    }
                    None => {
                        self.orchestrator.cancel();
                        return Ok(TriggerOutcome::Cancelled);
                    }
                },
            };
        }
    }
}
