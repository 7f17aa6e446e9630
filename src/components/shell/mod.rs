mod reducer;
mod view;

pub use reducer::{Action, State, TransientUi};
pub use view::ShellApp;

pub struct ShellReducer;
use navicula::reducer::Reducer;

impl Reducer for ShellReducer {
    type Message = ();

    type DelegateMessage = reducer::Action;

    type Action = reducer::Action;

    type State = reducer::State;

    type Environment = crate::environment::Environment;

    fn reduce<'a, 'b>(
        context: &'a impl navicula::types::MessageContext<
            Self::Action,
            Self::DelegateMessage,
            Self::Message,
        >,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> navicula::effect::Effect<'b, Self::Action> {
        reducer::reduce(context, action, state, environment)
    }

    fn initial_action() -> Option<Self::Action> {
        Some(Action::Initial)
    }
}
