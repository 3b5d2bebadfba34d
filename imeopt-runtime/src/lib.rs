//! # imeopt-runtime
//!
//! Glue between the engines, the document model and the settings layer:
//! decides whether a site is enabled, resolves each candidate field to a
//! saved override or a prediction, applies it, and labels the field with an
//! indicator. [`dispatch`] serves typed settings requests.

pub mod bootstrap;
pub mod enablement;
pub mod indicator;
pub mod messages;
pub mod optimizer;
pub mod resolution;
pub mod selector;

pub use bootstrap::bootstrap;
pub use enablement::{decide_enablement, EnablementReason, SiteDecision};
pub use indicator::{glyph_for_settings, Indicator, INDICATOR_CLASS};
pub use messages::{
    dispatch, dispatch_value, on_install, InstallReason, Request, Response, UNKNOWN_MESSAGE_TYPE,
};
pub use optimizer::Optimizer;
pub use resolution::FieldResolution;
pub use selector::generate_selector;
