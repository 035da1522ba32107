use std::collections::HashMap;

/// Named values attached to a breadcrumb. A `None` value is kept as a key but
/// reads as absent.
pub type Variables = HashMap<String, Option<String>>;

pub const TEXT_VAR: &str = "text";
pub const LINK_VAR: &str = "link";

/// A single breadcrumb: display text, optional link and any extra variables
/// custom templates refer to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Breadcrumb {
    vars: Variables,
}

impl Breadcrumb {
    /// `text` and `link` always override entries of the same name in `vars`.
    pub fn new(text: impl Into<String>, link: Option<&str>, vars: Option<Variables>) -> Self {
        let mut vars = vars.unwrap_or_default();
        vars.insert(TEXT_VAR.to_owned(), Some(text.into()));
        vars.insert(LINK_VAR.to_owned(), link.map(str::to_owned));
        Breadcrumb { vars }
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).and_then(|value| value.as_deref())
    }

    pub fn vars(&self) -> &Variables {
        &self.vars
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: Option<String>) {
        self.vars.insert(name.into(), value);
    }

    /// Adds entries from `vars` whose keys are not present yet. Keys that
    /// already exist keep their current value.
    pub fn set_vars(&mut self, vars: Variables) {
        for (name, value) in vars {
            self.vars.entry(name).or_insert(value);
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.var(TEXT_VAR)
    }

    pub fn link(&self) -> Option<&str> {
        self.var(LINK_VAR)
    }

    /// A breadcrumb without a usable link marks the current page.
    pub fn is_active(&self) -> bool {
        self.link().map_or(true, str::is_empty)
    }
}
