//! Create/update/delete workflow shared by all entity forms and list rows.

pub mod effects;
pub mod row_actions;
pub mod state;
pub mod view_model;

#[cfg(test)]
pub(crate) mod testing;

pub use effects::{FormEffects, Toast, ToastKind};
pub use row_actions::RowActions;
pub use state::FormPhase;
pub use view_model::{DeleteOutcome, EntityFormController, SubmitOutcome};
