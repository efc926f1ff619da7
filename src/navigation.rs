/// Height of the fixed site header, kept clear above a scrolled-to section.
pub const HEADER_OFFSET: f64 = 80.0;

/// Document access needed to scroll to a section.
pub trait ScrollHost {
    /// Top of the element with `target_id`, relative to the document.
    fn document_top(&self, target_id: &str) -> Option<f64>;

    fn scroll_to(&self, top: f64);
}

pub fn scroll_offset(document_top: f64) -> f64 {
    document_top - HEADER_OFFSET
}

/// Scroll so the section named `target_id` sits just below the header.
///
/// A missing section is ignored. `on_navigate` runs either way, right after
/// the scroll is requested. Returns the offset that was requested, if any.
pub fn navigate_to<H>(host: &H, target_id: &str, on_navigate: impl FnOnce()) -> Option<f64>
where
    H: ScrollHost + ?Sized,
{
    let offset = host.document_top(target_id).map(scroll_offset);

    match offset {
        Some(top) => host.scroll_to(top),
        None => log::debug!(target_id = target_id; "scroll_target_missing"),
    }

    on_navigate();
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeDocument {
        sections: HashMap<&'static str, f64>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl FakeDocument {
        fn with_section(mut self, id: &'static str, top: f64) -> Self {
            self.sections.insert(id, top);
            self
        }
    }

    impl ScrollHost for FakeDocument {
        fn document_top(&self, target_id: &str) -> Option<f64> {
            self.sections.get(target_id).copied()
        }

        fn scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[test]
    fn existing_section_scrolls_below_header() {
        let document = FakeDocument::default().with_section("projects", 1200.0);

        let offset = navigate_to(&document, "projects", || ());

        assert_eq!(offset, Some(1120.0));
        assert_eq!(*document.scrolls.borrow(), vec![1120.0]);
    }

    #[test]
    fn missing_section_is_a_no_op() {
        let document = FakeDocument::default().with_section("projects", 1200.0);

        let offset = navigate_to(&document, "nonexistent", || ());

        assert_eq!(offset, None);
        assert!(document.scrolls.borrow().is_empty());
    }

    #[test]
    fn callback_runs_whether_or_not_the_target_exists() {
        let document = FakeDocument::default().with_section("contact", 3000.0);
        let calls = Cell::new(0);

        navigate_to(&document, "contact", || calls.set(calls.get() + 1));
        navigate_to(&document, "missing", || calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn repeated_navigation_issues_a_fresh_target_each_time() {
        let document = FakeDocument::default()
            .with_section("about", 900.0)
            .with_section("skills", 1800.0);

        navigate_to(&document, "about", || ());
        navigate_to(&document, "skills", || ());
        navigate_to(&document, "about", || ());

        assert_eq!(*document.scrolls.borrow(), vec![820.0, 1720.0, 820.0]);
    }

    #[test]
    fn section_near_the_top_yields_negative_offset() {
        assert_eq!(scroll_offset(30.0), -50.0);
    }

    #[test]
    fn works_through_a_trait_object() {
        let document = FakeDocument::default().with_section("skills", 500.0);
        let host: &dyn ScrollHost = &document;

        assert_eq!(navigate_to(host, "skills", || ()), Some(420.0));
    }
}
