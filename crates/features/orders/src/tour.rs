//! Dependents and accompanied-tour rules.

use mymove_domain::orders::{DependentsAnswer, OrdersType};
use serde::Serialize;

/// Visibility of the OCONUS dependents group. Both fields always toggle together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourFields {
    pub show_accompanied_tour: bool,
    pub show_dependent_age_fields: bool,
}

/// Orders type forces the dependents answer to "yes".
pub fn is_dependents_locked(orders_type: Option<OrdersType>) -> bool {
    orders_type.is_some_and(OrdersType::locks_dependents)
}

/// The dependents answer the rules see: a locked orders type always reads as "yes".
pub fn effective_dependents(orders_type: Option<OrdersType>, answer: DependentsAnswer) -> DependentsAnswer {
    if is_dependents_locked(orders_type) { DependentsAnswer::Yes } else { answer }
}

pub fn derive_tour_fields(
    orders_type: Option<OrdersType>,
    is_oconus_move: bool,
    has_dependents: DependentsAnswer,
    ub_enabled: bool,
) -> TourFields {
    let show =
        ub_enabled && is_oconus_move && effective_dependents(orders_type, has_dependents).is_yes();
    TourFields { show_accompanied_tour: show, show_dependent_age_fields: show }
}

/// Dependents radio state after an orders type change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependentsLock {
    pub has_dependents: DependentsAnswer,
    pub disabled: bool,
}

/// Applies the dependents lock on an orders type transition.
///
/// Edge-triggered: entering a locked type forces "yes"; leaving one clears the answer. Moving
/// between two unlocked types keeps whatever the user picked.
pub fn dependents_lock_transition(
    previous: Option<OrdersType>,
    next: Option<OrdersType>,
    current: DependentsAnswer,
) -> DependentsLock {
    match (is_dependents_locked(previous), is_dependents_locked(next)) {
        (_, true) => DependentsLock { has_dependents: DependentsAnswer::Yes, disabled: true },
        (true, false) => DependentsLock { has_dependents: DependentsAnswer::Unset, disabled: false },
        (false, false) => DependentsLock { has_dependents: current, disabled: false },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrdersType::{EarlyReturnOfDependents, LocalMove, PermanentChangeOfStation, StudentTravel};

    #[test]
    fn tour_fields_need_flag_oconus_and_dependents() {
        let shown = derive_tour_fields(Some(PermanentChangeOfStation), true, DependentsAnswer::Yes, true);
        assert!(shown.show_accompanied_tour && shown.show_dependent_age_fields);

        for (oconus, answer, ub) in [
            (false, DependentsAnswer::Yes, true),
            (true, DependentsAnswer::No, true),
            (true, DependentsAnswer::Unset, true),
            (true, DependentsAnswer::Yes, false),
        ] {
            let hidden = derive_tour_fields(Some(PermanentChangeOfStation), oconus, answer, ub);
            assert_eq!(hidden, TourFields::default(), "{oconus} {answer:?} {ub}");
        }
    }

    #[test]
    fn locked_types_count_as_having_dependents() {
        let fields = derive_tour_fields(Some(StudentTravel), true, DependentsAnswer::Unset, true);
        assert!(fields.show_accompanied_tour);
    }

    #[test]
    fn entering_locked_type_forces_yes() {
        let lock = dependents_lock_transition(Some(PermanentChangeOfStation), Some(StudentTravel), DependentsAnswer::No);
        assert_eq!(lock, DependentsLock { has_dependents: DependentsAnswer::Yes, disabled: true });
    }

    #[test]
    fn leaving_locked_type_clears_answer() {
        let lock = dependents_lock_transition(Some(StudentTravel), Some(PermanentChangeOfStation), DependentsAnswer::Yes);
        assert_eq!(lock, DependentsLock { has_dependents: DependentsAnswer::Unset, disabled: false });
    }

    #[test]
    fn switching_between_locked_types_stays_locked() {
        let lock = dependents_lock_transition(
            Some(StudentTravel),
            Some(EarlyReturnOfDependents),
            DependentsAnswer::Yes,
        );
        assert!(lock.disabled);
        assert_eq!(lock.has_dependents, DependentsAnswer::Yes);
    }

    #[test]
    fn unlocked_transition_keeps_user_answer() {
        for answer in [DependentsAnswer::Yes, DependentsAnswer::No, DependentsAnswer::Unset] {
            let lock = dependents_lock_transition(Some(PermanentChangeOfStation), Some(LocalMove), answer);
            assert_eq!(lock, DependentsLock { has_dependents: answer, disabled: false });
        }
    }

    #[test]
    fn clearing_the_type_after_lock_resets() {
        let lock = dependents_lock_transition(Some(EarlyReturnOfDependents), None, DependentsAnswer::Yes);
        assert_eq!(lock.has_dependents, DependentsAnswer::Unset);
    }
}
