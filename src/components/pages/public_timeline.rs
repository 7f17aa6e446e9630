use dioxus::prelude::*;

use crate::loc;
use crate::widgets::*;

/// Everything the instance federates with, newest first.
pub fn PublicTimelinePage(cx: Scope<'_>) -> Element<'_> {
    cx.render(rsx!(
        VStack { class: "grow",
            h3 { loc!("Public Timeline") }
            Paragraph { style: TextStyle::Secondary,
                loc!("The whole known network, as it happens.")
            }
        }
    ))
}
