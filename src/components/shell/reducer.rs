use crate::environment::storage::NavigationIntent;
use crate::environment::types::{NoticeCounts, PageDescriptor};
use crate::environment::Environment;
use navicula::Effect;

pub type ViewStore<'a> = navicula::ViewStore<'a, super::ShellReducer>;

/// Interaction state owned by this shell instance alone: whether the
/// off-canvas menu is out, and whether the sign-out prompt is up. Never
/// persisted; gone when the shell unmounts. The two flags are independent
/// booleans, the prompt does not force the menu shut.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TransientUi {
    pub sidebar: bool,
    pub logout: bool,
}

impl TransientUi {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar = !self.sidebar;
    }

    pub fn open_logout_dialog(&mut self) {
        self.logout = true;
    }

    pub fn close_logout_dialog(&mut self) {
        self.logout = false;
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct State {
    /// Snapshot of the store's current page, refreshed on every store change.
    pub page: PageDescriptor,
    /// Snapshot of the unread counters, same cadence.
    pub counts: NoticeCounts,
    /// Read-only session fact, picked up once at mount.
    pub signed_in: bool,
    pub ui: TransientUi,
}

#[derive(Clone, Debug)]
pub enum Action {
    Initial,
    DataUpdated,

    ToggleSidebar,
    OpenLogoutDialog,
    CloseLogoutDialog,
    ConfirmLogout,

    Home,
    Navigate(NavigationIntent),
    OpenSourceCode,
}

pub fn reduce<'a>(
    context: &'a impl navicula::types::MessageContext<Action, Action, ()>,
    action: Action,
    state: &'a mut State,
    environment: &'a Environment,
) -> Effect<'static, Action> {
    log::trace!("{action:?}");
    match action {
        Action::Initial => {
            state.signed_in = environment.signed_in();
            Effect::merge2(
                environment
                    .storage
                    .subscribe("shell_reducer", context, |_| Action::DataUpdated),
                Effect::action(Action::DataUpdated),
            )
        }
        Action::DataUpdated => {
            environment.storage.with(|data| {
                state.page = data.page.clone();
                state.counts = data.counts;
            });
            Effect::NONE
        }
        Action::ToggleSidebar => {
            state.ui.toggle_sidebar();
            Effect::NONE
        }
        Action::OpenLogoutDialog => {
            state.ui.open_logout_dialog();
            Effect::NONE
        }
        Action::CloseLogoutDialog => {
            state.ui.close_logout_dialog();
            Effect::NONE
        }
        Action::ConfirmLogout => {
            // Terminal for this session: the request is not awaited and the
            // dialog flag is left alone, nothing renders past this point
            // that depends on it.
            if let Err(e) = environment.repository.clear_session() {
                log::error!("Could not clear session: {e:?}");
            }
            let model = environment.model.clone();
            Effect::fire_forget(async move {
                if let Err(e) = model.logout().await {
                    log::error!("{e:?}");
                }
            })
        }
        Action::Home => Effect::action(Action::Navigate(NavigationIntent::home(state.signed_in))),
        Action::Navigate(intent) => {
            environment.storage.with_mutation(|mut data| {
                data.navigate(intent);
            });
            Effect::NONE
        }
        Action::OpenSourceCode => {
            environment.open_url(crate::SOURCE_URL);
            Effect::NONE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_toggle_round_trips() {
        let mut ui = TransientUi::default();
        ui.toggle_sidebar();
        assert_eq!(
            ui,
            TransientUi {
                sidebar: true,
                logout: false
            }
        );
        ui.toggle_sidebar();
        assert_eq!(ui, TransientUi::default());
    }

    #[test]
    fn cancelling_the_prompt_restores_the_prior_state() {
        let mut ui = TransientUi::default();
        ui.toggle_sidebar();
        let before = ui;
        ui.open_logout_dialog();
        assert!(ui.logout);
        assert!(ui.sidebar);
        ui.close_logout_dialog();
        assert_eq!(ui, before);
    }

    #[test]
    fn the_prompt_opens_from_a_closed_menu_too() {
        let mut ui = TransientUi::default();
        ui.open_logout_dialog();
        assert_eq!(
            ui,
            TransientUi {
                sidebar: false,
                logout: true
            }
        );
    }
}
