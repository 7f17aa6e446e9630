use dioxus::prelude::*;

use crate::loc;
use crate::widgets::*;

/// The signed-in home feed.
pub fn TimelinePage(cx: Scope<'_>) -> Element<'_> {
    cx.render(rsx!(
        VStack { class: "grow",
            h3 { loc!("Timeline") }
            Paragraph { style: TextStyle::Secondary,
                loc!("Notices from the people you follow.")
            }
        }
    ))
}
