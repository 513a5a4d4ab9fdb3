/// Drawable token for a switcher row. Opaque to this crate; callers map it
/// to an actual asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconResource {
  Add,
  AccountCircle,
  AddSupervisedUser,
  Avatar,
}

impl IconResource {
  /// Stable asset key for this icon.
  pub fn asset_name(&self) -> &'static str {
    match self {
      IconResource::Add => "ic_add",
      IconResource::AccountCircle => "ic_account_circle",
      IconResource::AddSupervisedUser => "ic_add_supervised_user",
      IconResource::Avatar => "ic_avatar_user",
    }
  }
}

/// Localizable string token, resolved through a [`StringLookup`].
///
/// [`StringLookup`]: crate::StringLookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextResource {
  GuestExit,
  GuestName,
  GuestResetting,
  AddUser,
  AddSupervisedUser,
}
