//! Menu data model: the action tree and its parsed configuration.

mod builtin;
pub mod types;

pub use types::{
    Action, ActionGroup, ConfigurationFormat, MenuItem, ROOT_GROUP_NAME, RadialMenuConfiguration,
};
