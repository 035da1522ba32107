//! Breadcrumb trails rendered through flat `{name}` placeholder templates.

pub mod error;
pub mod item;
pub mod path;
pub mod template;
pub mod trail;
pub mod transform;

pub use error::{TemplateError, TemplateResult};
pub use item::{Breadcrumb, Variables, LINK_VAR, TEXT_VAR};
pub use path::{decompose_path, PathSegment};
pub use template::{TemplateSlot, Templates};
pub use trail::Breadcrumbs;
pub use transform::TextTransform;
