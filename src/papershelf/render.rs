//! # Page Rendering
//!
//! Turns a [`PageView`] into a self-contained HTML document.
//!
//! Templates are stand-alone files under `templates/`, embedded at compile time with
//! `include_str!` and compiled once into a shared minijinja environment. Every
//! template is rendered with HTML auto-escaping, so corpus text (titles, authors,
//! abstracts, links) can never inject markup. Templates only decide structure and
//! visibility; all text shaping (previews, date formatting, labels) happens in
//! [`crate::view`].
//!
//! Rendering is a pure projection: the same view always produces the same markup,
//! and the card grid is rebuilt from scratch each time.

use crate::error::Result;
use crate::view::PageView;
use minijinja::{AutoEscape, Environment};
use once_cell::sync::Lazy;

pub const PAGE_TEMPLATE: &str = include_str!("templates/page.html");
pub const CARD_TEMPLATE: &str = include_str!("templates/card.html");

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("page.html", PAGE_TEMPLATE)
        .expect("embedded page template should compile");
    env.add_template("card.html", CARD_TEMPLATE)
        .expect("embedded card template should compile");
    env
});

/// Renders the full page for the given view.
pub fn render_page(view: &PageView) -> Result<String> {
    let template = TEMPLATES.get_template("page.html")?;
    Ok(template.render(view)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::stats::CorpusStats;
    use crate::model::{Authors, Paper, SortKey};
    use crate::nav::Navigation;
    use crate::preview::CardState;
    use crate::source::memory::fixtures::long_abstract;
    use crate::view::{CardView, SortOption};

    fn page(cards: Vec<CardView>, empty_state: bool) -> PageView {
        let nav = Navigation::new(vec!["home".into(), "papers".into()], "papers");
        PageView {
            title: "Test Shelf".into(),
            sections: nav.views(),
            query: String::new(),
            sort_options: SortOption::all(SortKey::DateDesc),
            show_grid: !cards.is_empty(),
            show_no_results: cards.is_empty(),
            cards,
            empty_state,
            stats: CorpusStats::default(),
        }
    }

    fn card(paper: &Paper, state: CardState) -> CardView {
        CardView::new(paper, state, 50, "%Y-%m-%d")
    }

    #[test]
    fn test_card_exposes_data_id_and_link() {
        let paper = Paper::new("paper-42", "Answer")
            .with_abstract("Short.")
            .with_pdf_url("https://example.org/42.pdf");
        let html = render_page(&page(vec![card(&paper, CardState::Collapsed)], false)).unwrap();

        assert!(html.contains(r#"data-id="paper-42""#));
        // minijinja escapes '/' inside attribute values too
        assert!(html.contains(r#"href="https:&#x2f;&#x2f;example.org&#x2f;42.pdf""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"id="papers-grid" class="papers-grid" style="display: grid""#));
        assert!(html.contains(r#"id="no-results" class="no-results" style="display: none""#));
    }

    #[test]
    fn test_corpus_text_is_escaped() {
        let paper = Paper::new("x", "<script>alert(1)</script>")
            .with_authors(Authors::Single("Tom & \"Jerry\"".into()))
            .with_abstract("a < b > c");
        let html = render_page(&page(vec![card(&paper, CardState::Collapsed)], false)).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;&#x2f;script&gt;"));
        assert!(html.contains("By: Tom &amp; &quot;Jerry&quot;"));
        assert!(html.contains("a &lt; b &gt; c"));
    }

    #[test]
    fn test_short_abstract_has_no_expand_control() {
        let paper = Paper::new("1", "Short").with_abstract("Only a few words here.");
        let html = render_page(&page(vec![card(&paper, CardState::Collapsed)], false)).unwrap();

        assert!(!html.contains(r#"class="expand-btn""#));
        assert!(!html.contains(r#"class="abstract-full""#));
        assert!(html.contains("Only a few words here.</div>"));
    }

    #[test]
    fn test_long_abstract_renders_collapsed_control() {
        let paper = Paper::new("1", "Long").with_abstract(long_abstract(80));
        let html = render_page(&page(vec![card(&paper, CardState::Collapsed)], false)).unwrap();

        assert_eq!(html.matches(r#"class="expand-btn""#).count(), 1);
        assert!(html.contains("word50...</div>"));
        assert!(html.contains(r#"class="abstract-full" style="display: none""#));
        assert!(html.contains(">Read full abstract</button>"));
    }

    #[test]
    fn test_expanded_card_swaps_visibility() {
        let paper = Paper::new("1", "Long").with_abstract(long_abstract(80));
        let html = render_page(&page(vec![card(&paper, CardState::Expanded)], false)).unwrap();

        assert!(html.contains(r#"class="abstract-preview" style="display: none""#));
        assert!(html.contains(r#"class="abstract-full" style="display: block""#));
        assert!(html.contains(">Show less</button>"));
    }

    #[test]
    fn test_empty_view_shows_placeholder() {
        let html = render_page(&page(vec![], true)).unwrap();

        assert!(html.contains(r#"id="papers-grid" class="papers-grid" style="display: none""#));
        assert!(html.contains(r#"id="no-results" class="no-results" style="display: block""#));
        assert!(html.contains(r#"<body class="empty-state">"#));
        assert!(!html.contains(r#"class="paper-card""#));
    }

    #[test]
    fn test_filter_controls_render_disabled() {
        let mut view = page(vec![], false);
        view.query = "graph".into();
        let html = render_page(&view).unwrap();

        // the static page is a snapshot: search and sort are applied before rendering
        assert!(html.contains(r#"id="search-input" placeholder="Search papers..." value="graph" disabled>"#));
        assert!(html.contains(r#"<select id="sort-select" disabled>"#));
        assert!(html.contains(r#"<button type="reset" id="reset-filters" disabled>"#));
    }

    #[test]
    fn test_active_section_marked() {
        let html = render_page(&page(vec![], false)).unwrap();
        assert!(html.contains(r#"<section id="papers" class="section active">"#));
        assert!(html.contains(r#"<section id="home" class="section">"#));
        assert!(html.contains(r##"<a href="#papers" class="nav-link active">Papers</a>"##));
    }
}
