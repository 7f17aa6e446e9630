use dioxus::prelude::*;

use crate::loc;
use crate::widgets::*;

/// Fallback for descriptors naming nothing we know. Reached through
/// resolution, never through a fault.
pub fn ErrorPage(cx: Scope<'_>) -> Element<'_> {
    cx.render(rsx!(
        VStack { class: "grow error-page",
            h3 { loc!("Nothing here") }
            Paragraph { style: TextStyle::Secondary,
                loc!("The page you were looking for does not exist.")
            }
        }
    ))
}
