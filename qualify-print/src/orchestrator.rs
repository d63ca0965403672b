//! Print orchestration state machine
//!
//! Owns the single pending job and decides, per print request, which dialog
//! the trigger must show next before the job can be dispatched. All state
//! lives in one tagged value so that invalid combinations (credentials held
//! with no pending job, two pending jobs) cannot be represented.
//!
//! Dispatch is at-most-once: a job leaves the machine either through one
//! successful gateway call or by being dropped (cancel, replacement, or a
//! reported failure).

use crate::error::{PrintError, PrintResult};
use crate::gateway::GatewayApi;
use crate::job::{Credentials, Destination, PrintJob};
use crate::settings::{GatewaySettings, SettingsStore};
use tracing::{info, instrument, warn};

/// A job held while destination selection or authentication is outstanding
///
/// The auth requirement travels with the job, not with the dialog events.
#[derive(Debug, Clone)]
struct PendingJob {
    job: PrintJob,
    requires_auth: bool,
    credentials: Option<Credentials>,
}

impl PendingJob {
    fn new(job: PrintJob, requires_auth: bool) -> Self {
        Self {
            job,
            requires_auth,
            credentials: None,
        }
    }

    /// A destination is the only thing still missing
    fn ready_for_dispatch(&self) -> bool {
        !self.requires_auth || self.credentials.is_some()
    }
}

/// Orchestrator state; each variant carries only the data valid for it
#[derive(Debug, Clone)]
enum FlowState {
    Idle,
    /// Picker open; `pending` is `None` for the destination-only flow
    AwaitingDestination { pending: Option<PendingJob> },
    /// Credential prompt open for the held job
    AwaitingCredentials { pending: PendingJob },
    /// Gateway call in flight; cannot be aborted, only observed
    Dispatching,
}

/// Externally visible stage, for rendering decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    AwaitingDestination,
    AwaitingCredentials,
    Dispatching,
}

/// What the print trigger should render next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Nothing left to show
    Completed,
    /// Open the destination picker
    SelectDestination {
        destinations: Vec<Destination>,
        /// Non-fatal notice when the listing could not be loaded
        notice: Option<String>,
    },
    /// Open the credential prompt
    EnterCredentials,
    /// Job accepted by the gateway
    Printed,
}

/// The print orchestration state machine
pub struct PrintOrchestrator<G: GatewayApi> {
    gateway: G,
    store: SettingsStore,
    state: FlowState,
}

impl<G: GatewayApi> PrintOrchestrator<G> {
    pub fn new(gateway: G, store: SettingsStore) -> Self {
        Self {
            gateway,
            store,
            state: FlowState::Idle,
        }
    }

    /// Current stage of the flow
    pub fn stage(&self) -> Stage {
        match self.state {
            FlowState::Idle => Stage::Idle,
            FlowState::AwaitingDestination { .. } => Stage::AwaitingDestination,
            FlowState::AwaitingCredentials { .. } => Stage::AwaitingCredentials,
            FlowState::Dispatching => Stage::Dispatching,
        }
    }

    /// Access the gateway transport
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Access the settings store
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Start a print request
    ///
    /// Last submission wins: any pending job, together with credentials
    /// collected for it, is discarded.
    #[instrument(skip(self, job), fields(mime_type = %job.mime_type))]
    pub async fn submit_job(&mut self, job: PrintJob, requires_auth: bool) -> PrintResult<Step> {
        if !matches!(self.state, FlowState::Idle) {
            warn!("Replacing pending print job");
        }
        self.state = FlowState::Idle;

        let settings = self.store.load();

        // First run: no destination was ever chosen, ask for one before
        // anything else.
        if !self.store.exists() {
            let (destinations, notice) = self.fetch_destinations(&settings.url).await;
            self.state = FlowState::AwaitingDestination {
                pending: Some(PendingJob::new(job, requires_auth)),
            };
            return Ok(Step::SelectDestination {
                destinations,
                notice,
            });
        }

        if requires_auth {
            self.state = FlowState::AwaitingCredentials {
                pending: PendingJob::new(job, requires_auth),
            };
            return Ok(Step::EnterCredentials);
        }

        let destination = settings.default_destination.clone().unwrap_or_default();
        self.dispatch(job.with_destination(destination), &settings)
            .await
    }

    /// Open the destination picker without a job attached
    ///
    /// A pending job, if any, survives reconfiguration.
    pub async fn configure_destination(&mut self) -> PrintResult<Step> {
        let settings = self.store.load();
        let pending = self.take_pending();
        let (destinations, notice) = self.fetch_destinations(&settings.url).await;
        self.state = FlowState::AwaitingDestination { pending };
        Ok(Step::SelectDestination {
            destinations,
            notice,
        })
    }

    /// Operator picked a destination in the picker
    ///
    /// Persists the choice as the new default, then dispatches the pending
    /// job if nothing else is missing.
    #[instrument(skip(self))]
    pub async fn select_destination(&mut self, name: &str) -> PrintResult<Step> {
        if name.trim().is_empty() {
            return Err(PrintError::Validation("No destination selected".to_string()));
        }

        let mut settings = self.store.load();
        settings.default_destination = Some(name.to_string());
        if let Err(e) = self.store.save(&settings) {
            // Non-fatal: the job can still go out, only the default is lost.
            warn!(error = %e, "Failed to persist gateway settings");
        }
        info!("Default destination configured");

        let Some(pending) = self.take_pending() else {
            return Ok(Step::Completed);
        };

        if pending.ready_for_dispatch() {
            return self
                .dispatch(pending.job.with_destination(name), &settings)
                .await;
        }

        self.state = FlowState::AwaitingCredentials { pending };
        Ok(Step::EnterCredentials)
    }

    /// Operator confirmed the credential prompt
    #[instrument(skip_all)]
    pub async fn submit_credentials(&mut self, username: &str, password: &str) -> PrintResult<Step> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(PrintError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let mut pending = match std::mem::replace(&mut self.state, FlowState::Idle) {
            FlowState::AwaitingCredentials { pending } => pending,
            other => {
                self.state = other;
                return Err(PrintError::Validation(
                    "No authentication is pending".to_string(),
                ));
            }
        };
        pending.credentials = Some(Credentials::new(username, password));

        let settings = self.store.load();
        match settings.default_destination.clone() {
            Some(destination) => {
                self.dispatch(pending.job.with_destination(destination), &settings)
                    .await
            }
            None => {
                // Auth satisfied, destination still unknown: hold the
                // credentials and fall back to the picker.
                let (destinations, notice) = self.fetch_destinations(&settings.url).await;
                self.state = FlowState::AwaitingDestination {
                    pending: Some(pending),
                };
                Ok(Step::SelectDestination {
                    destinations,
                    notice,
                })
            }
        }
    }

    /// Abandon the flow; any dialog close other than explicit confirmation
    /// lands here
    ///
    /// Clears the pending job and its credentials, leaves persisted settings
    /// untouched.
    pub fn cancel(&mut self) {
        if !matches!(self.state, FlowState::Idle) {
            info!("Print flow cancelled");
        }
        self.state = FlowState::Idle;
    }

    fn take_pending(&mut self) -> Option<PendingJob> {
        match std::mem::replace(&mut self.state, FlowState::Idle) {
            FlowState::AwaitingDestination { pending } => pending,
            FlowState::AwaitingCredentials { pending } => Some(pending),
            _ => None,
        }
    }

    async fn fetch_destinations(&self, url: &str) -> (Vec<Destination>, Option<String>) {
        match self.gateway.list_destinations(url).await {
            Ok(destinations) => (destinations, None),
            Err(e) => {
                warn!(error = %e, "Failed to load destinations");
                (Vec::new(), Some("Failed to load printers".to_string()))
            }
        }
    }

    /// Single dispatch point; the machine always lands back in `Idle`
    async fn dispatch(&mut self, job: PrintJob, settings: &GatewaySettings) -> PrintResult<Step> {
        self.state = FlowState::Dispatching;
        let result = self.gateway.dispatch(&job, &settings.url).await;
        // Pending job and credentials are gone regardless of the outcome.
        self.state = FlowState::Idle;
        result.map(|_| Step::Printed)
    }
}
