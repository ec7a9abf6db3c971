//! Baymax dashboard session
//!
//! [`Dashboard`] owns the state of one clinician session: the patient
//! directory, the selected patient and every result panel. Its operations
//! call the [`baymax_client::ClinicalApi`] and reconcile the responses:
//!
//! - each operation has a busy flag, so a second trigger is rejected while
//!   the first is outstanding
//! - every selection change bumps an epoch; responses captured under an older
//!   epoch are discarded
//! - failures become displayable panel values or a banner, never a panic
//!
//! [`Companion`] is the rotating help ticker shown next to the dashboard.

mod ai_summary;
mod busy;
mod companion;
mod directory;
mod discharge;
mod drug_order;
mod session;
mod state;
mod summary;

pub use busy::{BusyFlags, BusyGuard};
pub use companion::{COMPANION_GREETING, COMPANION_MESSAGES, COMPANION_PERIOD, Companion};
pub use directory::{DIRECTORY_LOAD_FAILED, UPLOAD_FAILED};
pub use drug_order::DRUG_ORDER_FAILED;
pub use session::Dashboard;
pub use state::{DashboardState, DirectoryState, Ticket};
pub use summary::SUMMARY_LOAD_FAILED;
