use crate::resources::TextResource;

/// Resolves a text resource to a localized string.
///
/// Injected at the call sites that need user-visible text, so the switcher
/// logic stays testable without a locale runtime.
pub trait StringLookup {
  fn resolve(&self, id: TextResource) -> String;
}

/// Lookup backed by the embedded Fluent catalogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FluentStrings;

impl StringLookup for FluentStrings {
  fn resolve(&self, id: TextResource) -> String {
    match id {
      TextResource::GuestExit => fl!("guest-exit"),
      TextResource::GuestName => fl!("guest-name"),
      TextResource::GuestResetting => fl!("guest-resetting"),
      TextResource::AddUser => fl!("add-user"),
      TextResource::AddSupervisedUser => fl!("add-supervised-user"),
    }
  }
}
