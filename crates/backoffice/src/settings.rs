//! Workspace preference toggles

use serde::{Deserialize, Serialize};

/// A toggleable workspace preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preference {
    EmailNotifications,
    SmsNotifications,
    DarkMode,
    AutoLogout,
    TwoFactorAuth,
}

impl Preference {
    /// All preferences, in the order the settings screen lists them
    pub const ALL: [Preference; 5] = [
        Preference::EmailNotifications,
        Preference::SmsNotifications,
        Preference::DarkMode,
        Preference::AutoLogout,
        Preference::TwoFactorAuth,
    ];

    /// Returns the label shown next to the toggle
    pub fn label(&self) -> &'static str {
        match self {
            Preference::EmailNotifications => "Email Notifications",
            Preference::SmsNotifications => "SMS Notifications",
            Preference::DarkMode => "Dark Mode",
            Preference::AutoLogout => "Auto Logout",
            Preference::TwoFactorAuth => "Two-Factor Authentication",
        }
    }
}

/// The current state of every workspace preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub dark_mode: bool,
    pub auto_logout: bool,
    pub two_factor_auth: bool,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            dark_mode: false,
            auto_logout: true,
            two_factor_auth: true,
        }
    }
}

impl PreferenceSet {
    /// Checks whether a preference is currently enabled
    pub fn is_enabled(&self, preference: Preference) -> bool {
        match preference {
            Preference::EmailNotifications => self.email_notifications,
            Preference::SmsNotifications => self.sms_notifications,
            Preference::DarkMode => self.dark_mode,
            Preference::AutoLogout => self.auto_logout,
            Preference::TwoFactorAuth => self.two_factor_auth,
        }
    }

    /// Flips a preference and returns its new value
    pub fn toggle(&mut self, preference: Preference) -> bool {
        let slot = match preference {
            Preference::EmailNotifications => &mut self.email_notifications,
            Preference::SmsNotifications => &mut self.sms_notifications,
            Preference::DarkMode => &mut self.dark_mode,
            Preference::AutoLogout => &mut self.auto_logout,
            Preference::TwoFactorAuth => &mut self.two_factor_auth,
        };
        *slot = !*slot;
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_settings_screen() {
        let prefs = PreferenceSet::default();
        assert!(prefs.is_enabled(Preference::EmailNotifications));
        assert!(!prefs.is_enabled(Preference::SmsNotifications));
        assert!(!prefs.is_enabled(Preference::DarkMode));
        assert!(prefs.is_enabled(Preference::AutoLogout));
        assert!(prefs.is_enabled(Preference::TwoFactorAuth));
    }

    #[test]
    fn test_toggle_flips_and_reports() {
        let mut prefs = PreferenceSet::default();

        assert!(prefs.toggle(Preference::DarkMode));
        assert!(prefs.is_enabled(Preference::DarkMode));

        assert!(!prefs.toggle(Preference::DarkMode));
        assert!(!prefs.is_enabled(Preference::DarkMode));
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut prefs = PreferenceSet::default();
        prefs.toggle(Preference::SmsNotifications);

        assert!(prefs.is_enabled(Preference::SmsNotifications));
        assert!(prefs.is_enabled(Preference::EmailNotifications));
        assert!(!prefs.is_enabled(Preference::DarkMode));
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let json = serde_json::to_value(PreferenceSet::default()).unwrap();
        assert_eq!(json["emailNotifications"], true);
        assert_eq!(json["smsNotifications"], false);
        assert_eq!(json["twoFactorAuth"], true);
    }
}
