//! # qualify-print
//!
//! Print orchestration core for the Qualify operator app.
//!
//! ## Scope
//!
//! This crate decides, for every print request, whether a destination
//! printer is already configured and whether the job needs operator
//! authentication, sequences the destination/credential dialogs, and
//! dispatches the job to the local print gateway:
//! - Persisted gateway settings (url + default destination)
//! - Stateless HTTP gateway client (list / default / dispatch)
//! - Single-pending-job state machine with at-most-once dispatch
//! - Trigger wiring that drives the dialog collaborators
//!
//! Rendering the dialogs (HOW they look) stays in application code; this
//! crate only tells the trigger WHICH dialog to show next.
//!
//! ## Example
//!
//! ```ignore
//! use qualify_print::{GatewayClient, PrintJob, PrintOrchestrator, SettingsStore, Step};
//!
//! let store = SettingsStore::new("gateway-settings.json");
//! let mut orchestrator = PrintOrchestrator::new(GatewayClient::new(), store);
//!
//! let job = PrintJob::new("^XA^FDPKG-001^FS^XZ", "text/plain");
//! match orchestrator.submit_job(job, false).await? {
//!     Step::Printed => {}
//!     Step::SelectDestination { destinations, .. } => { /* open the picker */ }
//!     Step::EnterCredentials => { /* open the credential prompt */ }
//!     Step::Completed => {}
//! }
//! ```

mod error;
mod gateway;
mod job;
mod orchestrator;
mod settings;
mod trigger;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use gateway::{GatewayApi, GatewayClient};
pub use job::{Credentials, Destination, PrintJob, PrintSettings};
pub use orchestrator::{PrintOrchestrator, Stage, Step};
pub use settings::{DEFAULT_GATEWAY_URL, GatewaySettings, SettingsStore};
pub use trigger::{CredentialPrompt, DestinationPicker, PrintTrigger, TriggerOutcome};
