use dioxus::prelude::*;

use crate::loc;
use crate::widgets::*;

pub fn NewPostPage(cx: Scope<'_>) -> Element<'_> {
    cx.render(rsx!(
        VStack { class: "grow",
            h3 { loc!("New Notice") }
            textarea {
                rows: "6",
                placeholder: "What's happening?"
            }
        }
    ))
}
