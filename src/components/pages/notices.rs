use dioxus::prelude::*;

use crate::loc;
use crate::widgets::*;

/// Favorites, new followers, and notices addressed to the user.
pub fn NoticesPage(cx: Scope<'_>) -> Element<'_> {
    cx.render(rsx!(
        VStack { class: "grow",
            h3 { loc!("Notices") }
            Paragraph { style: TextStyle::Secondary,
                loc!("Everything that happened to you while you were away.")
            }
        }
    ))
}
