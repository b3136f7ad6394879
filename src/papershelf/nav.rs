//! Single-page section switching: exactly one section is visible at a time.

use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Navigation {
    sections: Vec<String>,
    active: Option<String>,
}

/// One navigation entry as seen by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub id: String,
    pub href: String,
    pub label: String,
    pub active: bool,
}

impl Navigation {
    /// Creates the navigation with `default` shown.
    pub fn new(sections: Vec<String>, default: &str) -> Self {
        let mut nav = Self {
            sections,
            active: None,
        };
        nav.show_section(default);
        nav
    }

    /// Makes `id` the only visible section. An unknown id hides every section
    /// and returns false.
    pub fn show_section(&mut self, id: &str) -> bool {
        if self.sections.iter().any(|s| s == id) {
            self.active = Some(id.to_string());
            true
        } else {
            self.active = None;
            false
        }
    }

    /// Follows a fragment link such as `#about`.
    pub fn activate_link(&mut self, href: &str) -> bool {
        let id = href.trim().strip_prefix('#').unwrap_or(href.trim());
        self.show_section(id)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn views(&self) -> Vec<SectionView> {
        self.sections
            .iter()
            .map(|id| SectionView {
                id: id.clone(),
                href: format!("#{}", id),
                label: section_label(id),
                active: self.is_active(id),
            })
            .collect()
    }
}

fn section_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
