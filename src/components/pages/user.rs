use dioxus::prelude::*;

use crate::loc;
use crate::widgets::*;

/// A single account's profile and notices. The shell passes the page
/// parameters through untouched; validating them is this page's problem.
#[inline_props]
pub fn UserPage(cx: Scope, params: im::HashMap<String, String>) -> Element {
    let Some(id) = params.get("id") else {
        return cx.render(rsx!(
            Paragraph { style: TextStyle::Secondary, loc!("No such user.") }
        ));
    };
    cx.render(rsx!(
        VStack { class: "grow",
            h3 { "@{id}" }
            Paragraph { style: TextStyle::Secondary,
                loc!("Profile and recent notices.")
            }
        }
    ))
}
