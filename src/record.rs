/// A row in the user switcher: either a real account or an action
/// affordance such as "add user".
#[derive(Debug, Default, Clone)]
pub struct UserRecord {
  pub is_guest: bool,
  pub is_current: bool,
  pub is_add_user: bool,
  pub is_add_supervised_user: bool,
  pub info: Option<UserInfo>,
}

#[derive(Debug, Default, Clone)]
pub struct UserInfo {
  pub name: String,
}

impl UserRecord {
  /// Row for a concrete user account.
  pub fn user<S>(name: S) -> UserRecord
  where
    S: Into<String>,
  {
    UserRecord {
      info: Some(UserInfo { name: name.into() }),
      ..UserRecord::default()
    }
  }

  /// Row for an existing guest account.
  pub fn guest<S>(name: S, is_current: bool) -> UserRecord
  where
    S: Into<String>,
  {
    UserRecord {
      is_guest: true,
      is_current,
      info: Some(UserInfo { name: name.into() }),
      ..UserRecord::default()
    }
  }

  /// Action row offering to enter guest mode.
  pub fn add_guest() -> UserRecord {
    UserRecord { is_guest: true, ..UserRecord::default() }
  }

  /// Action row offering to add a regular user.
  pub fn add_user() -> UserRecord {
    UserRecord { is_add_user: true, ..UserRecord::default() }
  }

  /// Action row offering to add a supervised user.
  pub fn add_supervised_user() -> UserRecord {
    UserRecord {
      is_add_supervised_user: true,
      ..UserRecord::default()
    }
  }

  /// Whether this row is a UI affordance rather than a real account.
  pub fn is_action(&self) -> bool {
    self.info.is_none()
  }
}

#[cfg(test)]
mod tests {
  use super::UserRecord;

  #[test]
  fn concrete_rows_are_not_actions() {
    assert!(!UserRecord::user("Alice").is_action());
    assert!(!UserRecord::guest("Guest", false).is_action());
  }

  #[test]
  fn affordance_rows_are_actions() {
    assert!(UserRecord::add_guest().is_action());
    assert!(UserRecord::add_user().is_action());
    assert!(UserRecord::add_supervised_user().is_action());
  }
}
