//! Wrapper templates and flat `{name}` placeholder substitution.

use std::fmt;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::{TemplateError, TemplateResult};
use crate::item::{Breadcrumb, Variables};

pub const DEFAULT_OUTER_TEMPLATE: &str = r#"<p class="breadcrumbs">{breadcrumbs}</p>"#;
pub const DEFAULT_ITEM_TEMPLATE: &str =
    r#"<span class="breadcrumb"><a href="{link}">{text}</a></span>"#;
pub const DEFAULT_ACTIVE_TEMPLATE: &str =
    r#"<span class="breadcrumb active_breadcrumb">{breadcrumb}</span>"#;
pub const DEFAULT_SEPARATOR: &str = r#"<span class="breadcrumb_separator"> » </span>"#;

const BREADCRUMBS_TOKEN: &str = "{breadcrumbs}";
const BREADCRUMB_TOKEN: &str = "{breadcrumb}";

/// The four configurable templates of a trail.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TemplateSlot {
    /// Wraps the whole rendered trail.
    Outer,
    /// Wraps every linked breadcrumb.
    Item,
    /// Wraps the breadcrumb without a link.
    Active,
    /// Inserted between consecutive breadcrumbs.
    Separator,
}

impl TemplateSlot {
    pub const ALL: &'static [TemplateSlot] = &[
        TemplateSlot::Outer,
        TemplateSlot::Item,
        TemplateSlot::Active,
        TemplateSlot::Separator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateSlot::Outer => "outer",
            TemplateSlot::Item => "item",
            TemplateSlot::Active => "active",
            TemplateSlot::Separator => "separator",
        }
    }

    /// Literal tokens a template for this slot must contain.
    pub fn required_placeholders(self) -> &'static [&'static str] {
        match self {
            TemplateSlot::Outer => &[BREADCRUMBS_TOKEN],
            TemplateSlot::Item => &["{text}", "{link}"],
            TemplateSlot::Active => &[BREADCRUMB_TOKEN],
            TemplateSlot::Separator => &[],
        }
    }

    pub fn default_template(self) -> &'static str {
        match self {
            TemplateSlot::Outer => DEFAULT_OUTER_TEMPLATE,
            TemplateSlot::Item => DEFAULT_ITEM_TEMPLATE,
            TemplateSlot::Active => DEFAULT_ACTIVE_TEMPLATE,
            TemplateSlot::Separator => DEFAULT_SEPARATOR,
        }
    }

    /// Checks `html` against the slot's required placeholders.
    pub fn validate(self, html: &str) -> TemplateResult<()> {
        let missing: Vec<&'static str> = self
            .required_placeholders()
            .iter()
            .copied()
            .filter(|token| !html.contains(*token))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TemplateError::new(self, missing))
        }
    }
}

impl fmt::Display for TemplateSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TemplateSlot {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "outer" => Ok(TemplateSlot::Outer),
            "item" => Ok(TemplateSlot::Item),
            "active" => Ok(TemplateSlot::Active),
            "separator" => Ok(TemplateSlot::Separator),
            _ => Err(()),
        }
    }
}

/// Template set used to render a trail. Every stored template satisfies its
/// slot's placeholder contract.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Templates {
    outer: String,
    item: String,
    active: String,
    separator: String,
}

impl Default for Templates {
    fn default() -> Self {
        Templates {
            outer: DEFAULT_OUTER_TEMPLATE.to_owned(),
            item: DEFAULT_ITEM_TEMPLATE.to_owned(),
            active: DEFAULT_ACTIVE_TEMPLATE.to_owned(),
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

impl Templates {
    pub fn get(&self, slot: TemplateSlot) -> &str {
        match slot {
            TemplateSlot::Outer => &self.outer,
            TemplateSlot::Item => &self.item,
            TemplateSlot::Active => &self.active,
            TemplateSlot::Separator => &self.separator,
        }
    }

    /// Replaces the template for `slot`. A rejected value leaves the
    /// previous template untouched.
    pub fn set(&mut self, slot: TemplateSlot, html: impl Into<String>) -> TemplateResult<()> {
        let html = html.into();
        if let Err(err) = slot.validate(&html) {
            log::debug!("rejected {slot} template {html:?}: {err}");
            return Err(err);
        }

        let target = match slot {
            TemplateSlot::Outer => &mut self.outer,
            TemplateSlot::Item => &mut self.item,
            TemplateSlot::Active => &mut self.active,
            TemplateSlot::Separator => &mut self.separator,
        };
        *target = html;
        Ok(())
    }

    /// Separators carry no placeholder contract, so this cannot fail.
    pub fn set_separator(&mut self, html: impl Into<String>) {
        self.separator = html.into();
    }

    pub fn outer(&self) -> &str {
        &self.outer
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Renders one breadcrumb through the item or active template.
    pub fn render_breadcrumb(&self, breadcrumb: &Breadcrumb) -> String {
        if breadcrumb.is_active() {
            let text = breadcrumb.text().unwrap_or_default();
            self.active.replace(BREADCRUMB_TOKEN, text)
        } else {
            substitute(&self.item, breadcrumb.vars())
        }
    }

    /// Joins rendered fragments with the separator and wraps them in the
    /// outer template.
    pub fn wrap<I, S>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for (idx, fragment) in fragments.into_iter().enumerate() {
            if idx > 0 {
                joined.push_str(&self.separator);
            }
            joined.push_str(fragment.as_ref());
        }
        self.outer.replace(BREADCRUMBS_TOKEN, &joined)
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([^}\n]+)\}").expect("placeholder pattern compiles"))
}

/// Resolves every `{name}` token in `template` against `vars`. Tokens whose
/// variable is absent or null stay in the output verbatim.
pub fn substitute(template: &str, vars: &Variables) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &Captures<'_>| {
            match vars.get(&caps[1]).and_then(|value| value.as_deref()) {
                Some(value) => value.to_owned(),
                None => caps[0].to_owned(),
            }
        })
        .into_owned()
}
