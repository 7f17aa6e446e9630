use dioxus::prelude::*;

use super::{HStack, Paragraph, TextButton, VStack};
use crate::loc;

#[derive(Props)]
pub struct ConfirmDialogProps<'a> {
    pub open: bool,
    pub content: &'a str,
    pub oncancel: EventHandler<'a, ()>,
    pub onconfirm: EventHandler<'a, ()>,
}

/// A modal yes/no prompt. Renders nothing while `open` is false, so it can
/// sit in the tree permanently and be driven by a flag.
pub fn ConfirmDialog<'a>(cx: Scope<'a, ConfirmDialogProps<'a>>) -> Element<'a> {
    if !cx.props.open {
        return cx.render(rsx!({}));
    }
    cx.render(rsx!(
        div { class: "confirm-overlay",
            VStack { class: "confirm-box",
                Paragraph { "{cx.props.content}" }
                HStack { class: "confirm-actions",
                    TextButton {
                        text: loc!("Cancel"),
                        title: loc!("Cancel"),
                        class: "secondary",
                        onclick: move |_| cx.props.oncancel.call(())
                    }
                    TextButton {
                        text: loc!("OK"),
                        title: loc!("OK"),
                        onclick: move |_| cx.props.onconfirm.call(())
                    }
                }
            }
        }
    ))
}
