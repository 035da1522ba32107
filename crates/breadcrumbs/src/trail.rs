use std::fmt;
use std::slice;

use crate::error::TemplateResult;
use crate::item::{Breadcrumb, Variables};
use crate::path::decompose_path;
use crate::template::{TemplateSlot, Templates};

/// Ordered breadcrumb trail plus the templates it renders through.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Breadcrumbs {
    items: Vec<Breadcrumb>,
    templates: Templates,
}

impl Breadcrumbs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: Templates) -> Self {
        Self {
            items: Vec::new(),
            templates,
        }
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    pub fn set_template(
        &mut self,
        slot: TemplateSlot,
        html: impl Into<String>,
    ) -> TemplateResult<()> {
        self.templates.set(slot, html)
    }

    /// Requires `{breadcrumbs}`.
    pub fn set_outer_template(&mut self, html: impl Into<String>) -> TemplateResult<()> {
        self.set_template(TemplateSlot::Outer, html)
    }

    /// Requires `{text}` and `{link}`; any other `{name}` resolves against the
    /// breadcrumb's variables.
    pub fn set_item_template(&mut self, html: impl Into<String>) -> TemplateResult<()> {
        self.set_template(TemplateSlot::Item, html)
    }

    /// Requires `{breadcrumb}`.
    pub fn set_active_template(&mut self, html: impl Into<String>) -> TemplateResult<()> {
        self.set_template(TemplateSlot::Active, html)
    }

    pub fn set_separator(&mut self, html: impl Into<String>) {
        self.templates.set_separator(html);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Breadcrumb> {
        self.items.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Breadcrumb> {
        self.items.get_mut(position)
    }

    pub fn items(&self) -> &[Breadcrumb] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, Breadcrumb> {
        self.items.iter()
    }

    /// Appends a breadcrumb and hands it back for further tweaking.
    pub fn add(
        &mut self,
        text: impl Into<String>,
        link: Option<&str>,
        vars: Option<Variables>,
    ) -> &mut Breadcrumb {
        let position = self.items.len();
        self.items.push(Breadcrumb::new(text, link, vars));
        log::debug!("added breadcrumb at {position}");
        &mut self.items[position]
    }

    /// Inserts at `position`, shifting later breadcrumbs right. Returns `None`
    /// and leaves the trail untouched when `position > len()`.
    pub fn insert(
        &mut self,
        position: usize,
        text: impl Into<String>,
        link: Option<&str>,
        vars: Option<Variables>,
    ) -> Option<&mut Breadcrumb> {
        if position > self.items.len() {
            log::debug!("insert position {position} outside 0..={}", self.items.len());
            return None;
        }
        self.items.insert(position, Breadcrumb::new(text, link, vars));
        log::debug!("inserted breadcrumb at {position}");
        Some(&mut self.items[position])
    }

    /// Removes the breadcrumb at `position`. Out of range is a no-op.
    pub fn delete(&mut self, position: usize) -> Option<Breadcrumb> {
        if position >= self.items.len() {
            log::debug!("delete position {position} past end of trail");
            return None;
        }
        log::debug!("deleted breadcrumb at {position}");
        Some(self.items.remove(position))
    }

    /// Swaps in a new breadcrumb at `position` and returns the old one.
    ///
    /// Past the end nothing is removed: the new breadcrumb is appended and
    /// `None` is returned.
    pub fn replace(
        &mut self,
        position: usize,
        text: impl Into<String>,
        link: Option<&str>,
        vars: Option<Variables>,
    ) -> Option<Breadcrumb> {
        let replacement = Breadcrumb::new(text, link, vars);
        match self.items.get_mut(position) {
            Some(slot) => {
                log::debug!("replaced breadcrumb at {position}");
                Some(std::mem::replace(slot, replacement))
            }
            None => {
                log::debug!("replace position {position} past end of trail, appending");
                self.items.push(replacement);
                None
            }
        }
    }

    /// Adds one breadcrumb per path segment, e.g. `/shoes/mens/vans/` gives
    /// `shoes` → `/shoes/`, `mens` → `/shoes/mens/` and an unlinked `vans`.
    pub fn add_from_path<F>(&mut self, path: &str, mut transform: F)
    where
        F: FnMut(&str) -> String,
    {
        for part in decompose_path(path) {
            let text = transform(part.segment);
            self.add(text, part.link.as_deref(), None);
        }
    }

    pub fn render(&self) -> String {
        let fragments = self.items.iter().map(|breadcrumb| {
            let fragment = self.templates.render_breadcrumb(breadcrumb);
            log::trace!("rendered breadcrumb {:?} as {fragment:?}", breadcrumb.text());
            fragment
        });
        self.templates.wrap(fragments)
    }
}

impl fmt::Display for Breadcrumbs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<'a> IntoIterator for &'a Breadcrumbs {
    type Item = &'a Breadcrumb;
    type IntoIter = slice::Iter<'a, Breadcrumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_returns_mutable_breadcrumb() {
        let mut trail = Breadcrumbs::new();
        trail
            .add("Home", Some("/"), None)
            .set_var("icon", Some("house".into()));
        assert_eq!(trail.get(0).and_then(|c| c.var("icon")), Some("house"));
    }

    #[test]
    fn replace_past_end_appends() {
        let mut trail = Breadcrumbs::new();
        trail.add("a", Some("/a/"), None);
        assert!(trail.replace(5, "b", None, None).is_none());
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.get(1).and_then(Breadcrumb::text), Some("b"));
    }

    #[test]
    fn separator_accepts_anything() {
        let mut trail = Breadcrumbs::new();
        trail.set_separator("");
        assert_eq!(trail.templates().separator(), "");
    }
}
