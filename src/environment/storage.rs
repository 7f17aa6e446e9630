use super::types::{NoticeCounts, PageDescriptor, PageName};

/// Outbound request asking the store to change the current page. Fired and
/// forgotten; the shell re-renders when the next snapshot arrives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavigationIntent {
    PublicTimeline,
    Timeline,
    NewPost,
    Notices,
    Login,
}

impl NavigationIntent {
    /// Where "home" leads depends on the session: the personal timeline when
    /// signed in, the public one otherwise. Decided before dispatch, never at
    /// render time.
    pub fn home(signed_in: bool) -> Self {
        if signed_in {
            NavigationIntent::Timeline
        } else {
            NavigationIntent::PublicTimeline
        }
    }

    fn page(&self) -> PageName {
        match self {
            NavigationIntent::PublicTimeline => PageName::PublicTimeline,
            NavigationIntent::Timeline => PageName::Timeline,
            NavigationIntent::NewPost => PageName::NewPost,
            NavigationIntent::Notices => PageName::Notices,
            NavigationIntent::Login => PageName::Login,
        }
    }
}

/// The shared application state the shell binds to: the current page
/// descriptor and the unread notice counters.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Data {
    pub page: PageDescriptor,
    pub counts: NoticeCounts,
}

impl Data {
    /// Fresh store contents: a new session starts on its home page.
    pub fn new(signed_in: bool) -> Self {
        Self {
            page: PageDescriptor::page(NavigationIntent::home(signed_in).page()),
            counts: NoticeCounts::default(),
        }
    }

    /// Publish the page an intent names. Params-carrying pages (the user
    /// page) are not navigation intents; their descriptors are written by
    /// the views that know the parameters.
    pub fn navigate(&mut self, intent: NavigationIntent) {
        self.page = PageDescriptor::page(intent.page());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_branches_on_the_session() {
        assert_eq!(NavigationIntent::home(true), NavigationIntent::Timeline);
        assert_eq!(
            NavigationIntent::home(false),
            NavigationIntent::PublicTimeline
        );
    }

    #[test]
    fn navigate_publishes_the_named_page() {
        let mut data = Data::new(false);
        data.navigate(NavigationIntent::Notices);
        assert_eq!(data.page, PageDescriptor::page(PageName::Notices));
        data.navigate(NavigationIntent::NewPost);
        assert_eq!(data.page, PageDescriptor::page(PageName::NewPost));
    }

    #[test]
    fn fresh_stores_start_on_the_home_page() {
        assert_eq!(
            Data::new(true).page,
            PageDescriptor::page(PageName::Timeline)
        );
        assert_eq!(
            Data::new(false).page,
            PageDescriptor::page(PageName::PublicTimeline)
        );
    }
}
