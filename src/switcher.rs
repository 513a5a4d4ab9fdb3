use std::{
  error::Error,
  fmt::{self, Display},
};

use crate::{
  record::UserRecord,
  resources::{IconResource, TextResource},
  strings::StringLookup,
};

/// Alpha applied to a row the user can select.
pub const SELECTABLE_ALPHA: f32 = 1.0;

/// Alpha applied to a row the user cannot select.
pub const NOT_SELECTABLE_ALPHA: f32 = 0.38;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SwitcherError {
  /// Action text was requested for a record carrying none of the guest,
  /// add-user or add-supervised-user flags.
  InvariantViolation,
  /// No action text branch matched even though a role flag was set.
  IllegalState,
}

impl Display for SwitcherError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      SwitcherError::InvariantViolation => write!(f, "record has no guest, add-user or add-supervised-user flag"),
      SwitcherError::IllegalState => write!(f, "no action text branch matched"),
    }
  }
}

impl Error for SwitcherError {}

/// Number of grid columns used to lay out `user_count` switcher rows.
pub fn max_columns(user_count: usize) -> usize {
  if user_count < 5 {
    4
  } else {
    user_count.div_ceil(2)
  }
}

/// Icon shown on an action row. The first flag set wins, in this order:
/// add-user, guest, add-supervised-user.
pub fn action_icon(is_add_user: bool, is_guest: bool, is_add_supervised_user: bool) -> IconResource {
  if is_add_user {
    IconResource::Add
  } else if is_guest {
    IconResource::AccountCircle
  } else if is_add_supervised_user {
    IconResource::AddSupervisedUser
  } else {
    IconResource::Avatar
  }
}

/// Text resource naming the guest row, or `None` when `record` is not the
/// guest account (the add-guest action row included).
pub fn guest_name_resource(record: &UserRecord) -> Option<TextResource> {
  if record.is_guest && record.is_current {
    Some(TextResource::GuestExit)
  } else if record.is_guest && record.info.is_some() {
    Some(TextResource::GuestName)
  } else {
    None
  }
}

/// Text resource for an action row. At least one of the guest, add-user or
/// add-supervised-user flags must be set.
pub fn action_text_resource(is_guest: bool, is_guest_auto_created: bool, is_guest_resetting: bool, is_add_user: bool, is_add_supervised_user: bool) -> Result<TextResource, SwitcherError> {
  if !is_guest && !is_add_user && !is_add_supervised_user {
    tracing::error!("action text requested for a record with no role flag set");

    return Err(SwitcherError::InvariantViolation);
  }

  if is_guest && is_guest_auto_created && is_guest_resetting {
    Ok(TextResource::GuestResetting)
  } else if is_guest && is_guest_auto_created {
    Ok(TextResource::GuestName)
  } else if is_guest {
    // Auto-created and plain guest rows currently share the same name.
    Ok(TextResource::GuestName)
  } else if is_add_user {
    Ok(TextResource::AddUser)
  } else if is_add_supervised_user {
    Ok(TextResource::AddSupervisedUser)
  } else {
    Err(SwitcherError::IllegalState)
  }
}

/// Localized display name for a switcher row: the guest name when `record`
/// is the guest, the account name for a concrete row, the action text
/// otherwise.
pub fn record_name<S>(strings: &S, record: &UserRecord, is_guest_auto_created: bool, is_guest_resetting: bool) -> Result<String, SwitcherError>
where
  S: StringLookup,
{
  if let Some(resource) = guest_name_resource(record) {
    return Ok(strings.resolve(resource));
  }

  match record.info {
    Some(ref info) => Ok(info.name.clone()),

    None => {
      let resource = action_text_resource(record.is_guest, is_guest_auto_created, is_guest_resetting, record.is_add_user, record.is_add_supervised_user)?;

      Ok(strings.resolve(resource))
    }
  }
}
