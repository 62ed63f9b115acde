use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// One time-bucketed entry of a daily routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineActivity {
    /// Display label such as `5:00 AM`.
    pub time: Cow<'static, str>,
    pub activity: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub icon: Cow<'static, str>,
    /// Owning character for character-specific entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<Cow<'static, str>>,
}

impl RoutineActivity {
    /// Universal activity, usable in `static` tables.
    pub const fn universal(
        time: &'static str,
        activity: &'static str,
        description: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            time: Cow::Borrowed(time),
            activity: Cow::Borrowed(activity),
            description: Cow::Borrowed(description),
            icon: Cow::Borrowed(icon),
            character: None,
        }
    }

    /// Shallow merge: every field the override sets replaces ours.
    pub fn apply(&mut self, adjustment: &RoutineOverride) {
        self.time = adjustment.time.clone();
        if let Some(activity) = &adjustment.activity {
            self.activity = activity.clone();
        }
        if let Some(description) = &adjustment.description {
            self.description = description.clone();
        }
        if let Some(icon) = &adjustment.icon {
            self.icon = icon.clone();
        }
        if let Some(character) = &adjustment.character {
            self.character = Some(character.clone());
        }
    }

    pub fn belongs_to(&self, character: &str) -> bool {
        self.character.as_deref() == Some(character)
    }
}

/// Partial activity keyed by `time`, applied on top of a base routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineOverride {
    pub time: Cow<'static, str>,
    #[serde(default)]
    pub activity: Option<Cow<'static, str>>,
    #[serde(default)]
    pub description: Option<Cow<'static, str>>,
    #[serde(default)]
    pub icon: Option<Cow<'static, str>>,
    #[serde(default)]
    pub character: Option<Cow<'static, str>>,
}

impl RoutineOverride {
    /// Character adjustment as stored in the override table (no icon change).
    pub const fn adjustment(
        time: &'static str,
        activity: &'static str,
        description: &'static str,
        character: &'static str,
    ) -> Self {
        Self {
            time: Cow::Borrowed(time),
            activity: Some(Cow::Borrowed(activity)),
            description: Some(Cow::Borrowed(description)),
            icon: None,
            character: Some(Cow::Borrowed(character)),
        }
    }

    /// Standalone entry for an override that matched no existing slot.
    ///
    /// Returns `None` unless the override names an activity.
    pub fn to_activity(&self) -> Option<RoutineActivity> {
        let activity = self.activity.clone()?;
        Some(RoutineActivity {
            time: self.time.clone(),
            activity,
            description: self.description.clone().unwrap_or_default(),
            icon: self.icon.clone().unwrap_or_default(),
            character: self.character.clone(),
        })
    }
}
