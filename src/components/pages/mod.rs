mod error;
mod login;
mod new_post;
mod notices;
mod public_timeline;
mod timeline;
mod user;

pub use error::ErrorPage;
pub use login::LoginPage;
pub use new_post::NewPostPage;
pub use notices::NoticesPage;
pub use public_timeline::PublicTimelinePage;
pub use timeline::TimelinePage;
pub use user::UserPage;

use crate::environment::types::{PageDescriptor, PageName};

/// Identifies the one view the shell renders for a page descriptor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PageView {
    PublicTimeline,
    Timeline,
    NewPost,
    User { params: im::HashMap<String, String> },
    Notices,
    Login,
    Error,
}

impl PageView {
    /// Total resolution: every descriptor maps to some view. Absent names
    /// and names outside the closed `PageName` set degrade to the error
    /// view instead of faulting; everything inside it routes through an
    /// exhaustive match, so an unrouted page is a compile error.
    pub fn resolve(descriptor: &PageDescriptor) -> Self {
        let Some(name) = descriptor.name.as_deref() else {
            return PageView::Error;
        };
        let Ok(page) = name.parse::<PageName>() else {
            return PageView::Error;
        };
        match page {
            PageName::PublicTimeline => PageView::PublicTimeline,
            PageName::Timeline => PageView::Timeline,
            PageName::NewPost => PageView::NewPost,
            PageName::User => PageView::User {
                params: descriptor.params.clone(),
            },
            PageName::Notices => PageView::Notices,
            PageName::Login => PageView::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_name_resolves_to_its_view() {
        let table = [
            (PageName::PublicTimeline, PageView::PublicTimeline),
            (PageName::Timeline, PageView::Timeline),
            (PageName::NewPost, PageView::NewPost),
            (PageName::Notices, PageView::Notices),
            (PageName::Login, PageView::Login),
        ];
        for (name, expected) in table {
            assert_eq!(PageView::resolve(&PageDescriptor::page(name)), expected);
        }
    }

    #[test]
    fn no_page_name_falls_through_to_the_error_view() {
        use strum::IntoEnumIterator;
        for name in PageName::iter() {
            assert_ne!(
                PageView::resolve(&PageDescriptor::page(name)),
                PageView::Error
            );
        }
    }

    #[test]
    fn the_user_page_carries_its_params_through() {
        let params: im::HashMap<String, String> =
            [("id".to_string(), "42".to_string())].into_iter().collect();
        let descriptor = PageDescriptor::page_with_params(PageName::User, params.clone());
        assert_eq!(PageView::resolve(&descriptor), PageView::User { params });
    }

    #[test]
    fn anything_else_degrades_to_the_error_view() {
        let unknown = PageDescriptor {
            name: Some("moderation-queue".to_string()),
            params: im::HashMap::new(),
        };
        let empty = PageDescriptor {
            name: Some(String::new()),
            params: im::HashMap::new(),
        };
        let absent = PageDescriptor::default();
        for descriptor in [unknown, empty, absent] {
            assert_eq!(PageView::resolve(&descriptor), PageView::Error);
        }
    }
}
