//! Stateless presentation helpers for a user-switcher UI: grid column
//! counts, icon and text resource selection, and localized row names.

#[macro_use]
mod macros;

mod i18n;
mod record;
mod resources;
mod strings;
mod switcher;

pub use self::i18n::MESSAGES;
pub use self::record::{UserInfo, UserRecord};
pub use self::resources::{IconResource, TextResource};
pub use self::strings::{FluentStrings, StringLookup};
pub use self::switcher::{action_icon, action_text_resource, guest_name_resource, max_columns, record_name, SwitcherError, NOT_SELECTABLE_ALPHA, SELECTABLE_ALPHA};
