// Session state: settings and the busy flag
// Author: kelexine (https://github.com/kelexine)

use crate::models::post::{ApiKey, ImageModelTier, ModelTier, Settings};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// One interactive session: in-memory settings plus a busy flag that
/// refuses a second generation while one is outstanding.
#[derive(Debug, Default)]
pub struct Session {
    settings: RwLock<Settings>,
    busy: AtomicBool,
}

/// Clears the busy flag when dropped.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
            busy: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current settings
    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    /// Apply a partial update and return the resulting settings
    pub fn update(&self, update: SettingsUpdate) -> Settings {
        let mut settings = self.settings.write();
        if let Some(raw) = update.api_key {
            // Blank input clears the override
            settings.api_key = ApiKey::new(raw);
        }
        if let Some(tier) = update.model_tier {
            settings.model_tier = tier;
        }
        if let Some(tier) = update.image_model_tier {
            settings.image_model_tier = tier;
        }
        settings.clone()
    }

    /// Mark the session busy. `None` while another generation holds it.
    pub fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { busy: &self.busy })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Partial settings change sent by a client
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub api_key: Option<String>,
    pub model_tier: Option<ModelTier>,
    pub image_model_tier: Option<ImageModelTier>,
}

/// Settings as shown to a client; the key itself never leaves the process
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub api_key_set: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_fingerprint: Option<String>,
    pub model_tier: ModelTier,
    pub model_label: &'static str,
    pub image_model_tier: ImageModelTier,
    pub image_model_label: &'static str,
}

impl From<&Settings> for SettingsView {
    fn from(settings: &Settings) -> Self {
        Self {
            api_key_set: settings.api_key.is_some(),
            api_key_fingerprint: settings.api_key.as_ref().map(ApiKey::fingerprint),
            model_tier: settings.model_tier,
            model_label: settings.model_tier.label(),
            image_model_tier: settings.image_model_tier,
            image_model_label: settings.image_model_tier.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_flag_is_exclusive() {
        let session = Session::default();
        let guard = session.try_begin().expect("first begin");
        assert!(session.is_busy());
        assert!(session.try_begin().is_none());

        drop(guard);
        assert!(!session.is_busy());
        assert!(session.try_begin().is_some());
    }

    #[test]
    fn test_update_sets_and_clears_key() {
        let session = Session::default();
        let settings = session.update(SettingsUpdate {
            api_key: Some("AIzaOverride".to_string()),
            model_tier: Some(ModelTier::Pro),
            ..Default::default()
        });
        assert_eq!(settings.api_key.as_ref().map(ApiKey::expose), Some("AIzaOverride"));
        assert_eq!(settings.model_tier, ModelTier::Pro);
        assert_eq!(settings.image_model_tier, ImageModelTier::Fast);

        // Omitted fields are left alone
        let settings = session.update(SettingsUpdate::default());
        assert!(settings.api_key.is_some());

        let settings = session.update(SettingsUpdate {
            api_key: Some(String::new()),
            ..Default::default()
        });
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_view_hides_key() {
        let settings = Settings {
            api_key: ApiKey::new("AIzaHidden"),
            ..Default::default()
        };
        let json = serde_json::to_string(&SettingsView::from(&settings)).unwrap();
        assert!(json.contains("\"apiKeySet\":true"));
        assert!(!json.contains("AIzaHidden"));
    }
}
