//! Meeting domain module.
//!
//! Everything around scheduling: the meeting models, the create-session
//! draft with its validation rules, the two-step wizard state machine, and
//! the scheduling service contract.
//!
//! # Module Structure
//!
//! - `model`: Meeting domain models (`Meeting`, `MeetingType`) and the
//!   create-session wire types
//! - `draft`: Form state and validation (`SessionDraft`, `FieldErrors`)
//! - `wizard`: Create-session state machine (`SessionWizard`, `WizardStep`)
//! - `service`: Scheduling service trait (`SchedulingApi`)

mod draft;
mod model;
mod service;
mod wizard;

// Re-export public API
pub use draft::{DATE_FORMAT, DraftField, FieldErrors, SessionDraft, TIME_FORMAT};
pub use model::{CreateSessionPayload, CreatedSession, Meeting, MeetingType};
pub use service::SchedulingApi;
pub use wizard::{SessionWizard, WizardStep, WizardView};
