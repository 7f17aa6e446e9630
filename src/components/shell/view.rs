#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::reducer::{Action, State, ViewStore};
use crate::components::pages::{
    ErrorPage, LoginPage, NewPostPage, NoticesPage, PageView, PublicTimelinePage, TimelinePage,
    UserPage,
};
use crate::environment::storage::NavigationIntent;
use crate::environment::types::Badge;
use crate::environment::Environment;
use crate::loc;
use crate::widgets::*;

#[inline_props]
pub fn ShellApp<'a>(cx: Scope<'a>, environment: &'a UseState<Environment>) -> Element<'a> {
    log::trace!("rerender shell app");
    let store: ViewStore = navicula::root(cx, &[], environment.get(), State::default);
    cx.render(rsx!(
        div { class: "app-frame vstack",
            NavBarComponent { store: store.clone() }
            SidebarComponent { store: store.clone() }
            ActivePage { store: store.clone() }
        }
    ))
}

/// The persistent top bar: menu toggle, home, compose, notices with the
/// unread badge, and a sign-in button for strangers.
#[inline_props]
fn NavBarComponent<'a>(cx: Scope<'a>, store: ViewStore<'a>) -> Element<'a> {
    log::trace!("rerender navbar");
    let badge = Badge::aggregate(&store.counts);
    cx.render(rsx!(
        HStack { class: "navbar",
            IconButton {
                icon: crate::icons::ICON_MENU,
                title: loc!("Menu"),
                onclick: move |_| store.send(Action::ToggleSidebar)
            }
            IconButton {
                icon: crate::icons::ICON_HOME,
                title: loc!("Home"),
                onclick: move |_| store.send(Action::Home)
            }
            IconButton {
                icon: crate::icons::ICON_WRITE,
                title: loc!("New Post"),
                onclick: move |_| store.send(Action::Navigate(NavigationIntent::NewPost))
            }
            IconButton {
                icon: crate::icons::ICON_ALARM,
                title: loc!("Notices"),
                onclick: move |_| store.send(Action::Navigate(NavigationIntent::Notices))
            }
            badge.visible.then(|| rsx!(CountBadge { count: badge.total }))
            div { class: "spacer" }
            (!store.signed_in).then(|| rsx!(TextButton {
                text: loc!("Sign in"),
                title: loc!("Sign in"),
                onclick: move |_| store.send(Action::Navigate(NavigationIntent::Login))
            }))
        }
    ))
}

/// The off-canvas menu. Clicks anywhere inside collapse it again, so every
/// entry both acts and closes. The sign-out confirmation lives in this
/// subtree but renders independently of the menu's visibility.
#[inline_props]
fn SidebarComponent<'a>(cx: Scope<'a>, store: ViewStore<'a>) -> Element<'a> {
    let open = store.ui.sidebar.then_some("open").unwrap_or_default();
    cx.render(rsx!(
        div {
            class: "sidebar {open}",
            onclick: move |_| store.send(Action::ToggleSidebar),
            div { class: "sidebar-item no-selection",
                onclick: move |_| store.send(Action::Navigate(NavigationIntent::PublicTimeline)),
                loc!("Public Timeline")
            }
            div { class: "sidebar-item no-selection",
                onclick: move |_| store.send(Action::OpenSourceCode),
                loc!("Source Code")
            }
            store.signed_in.then(|| rsx!(div {
                class: "sidebar-item no-selection",
                onclick: move |_| store.send(Action::OpenLogoutDialog),
                loc!("Sign out")
            }))
        }
        ConfirmDialog {
            open: store.ui.logout,
            content: loc!("Are you sure you want to sign out?"),
            oncancel: move |_| store.send(Action::CloseLogoutDialog),
            onconfirm: move |_| store.send(Action::ConfirmLogout)
        }
    ))
}

/// Exactly one page is active at a time, picked by total resolution over
/// the store's descriptor. Only the user page receives parameters.
#[inline_props]
fn ActivePage<'a>(cx: Scope<'a>, store: ViewStore<'a>) -> Element<'a> {
    let view = PageView::resolve(&store.page);
    log::trace!("resolved page {view:?}");
    cx.render(rsx!(
        div { class: "page vstack",
            {
                match view {
                    PageView::PublicTimeline => rsx!(PublicTimelinePage {}),
                    PageView::Timeline => rsx!(TimelinePage {}),
                    PageView::NewPost => rsx!(NewPostPage {}),
                    PageView::User { params } => rsx!(UserPage { params: params }),
                    PageView::Notices => rsx!(NoticesPage {}),
                    PageView::Login => rsx!(LoginPage {}),
                    PageView::Error => rsx!(ErrorPage {}),
                }
            }
        }
    ))
}
