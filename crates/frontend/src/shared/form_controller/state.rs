/// Phase of an entity form, derived from the `loading` and `confirm_open` flags.
///
/// ```text
/// Idle --submit--> Submitting --done--> Idle
/// Idle --request delete--> ConfirmingDelete --cancel--> Idle
/// ConfirmingDelete --confirm--> Deleting --done--> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    ConfirmingDelete,
    Deleting,
}

impl FormPhase {
    pub fn from_flags(loading: bool, confirm_open: bool) -> Self {
        match (loading, confirm_open) {
            (false, false) => FormPhase::Idle,
            (true, false) => FormPhase::Submitting,
            (false, true) => FormPhase::ConfirmingDelete,
            (true, true) => FormPhase::Deleting,
        }
    }

    /// A request is in flight
    pub fn is_busy(self) -> bool {
        matches!(self, FormPhase::Submitting | FormPhase::Deleting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_from_flags() {
        assert_eq!(FormPhase::from_flags(false, false), FormPhase::Idle);
        assert_eq!(FormPhase::from_flags(true, false), FormPhase::Submitting);
        assert_eq!(FormPhase::from_flags(false, true), FormPhase::ConfirmingDelete);
        assert_eq!(FormPhase::from_flags(true, true), FormPhase::Deleting);
    }

    #[test]
    fn test_busy_phases() {
        assert!(!FormPhase::Idle.is_busy());
        assert!(!FormPhase::ConfirmingDelete.is_busy());
        assert!(FormPhase::Submitting.is_busy());
        assert!(FormPhase::Deleting.is_busy());
    }
}
