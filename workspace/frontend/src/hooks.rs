use std::ops::Deref;
use std::rc::Rc;

use common::{FormAction, FormState};
use yew::prelude::*;

/// Reducer state of the prediction form.
///
/// Every submission dispatches its own `SubmitFinished`, so overlapping
/// requests all land here and the last one to resolve wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormStore(FormState);

impl Reducible for FormStore {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::trace!("Form action: {:?}", action);
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(Self(state))
    }
}

impl Deref for FormStore {
    type Target = FormState;

    fn deref(&self) -> &FormState {
        &self.0
    }
}
