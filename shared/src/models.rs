use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// Left border colour of an announcement card.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Rose,
    Green,
    Purple,
    Red,
}

impl Accent {
    pub fn border_class(self) -> &'static str {
        match self {
            Accent::Rose => "border-rose-500",
            Accent::Green => "border-green-500",
            Accent::Purple => "border-purple-500",
            Accent::Red => "border-red-500",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub sheet_url: &'static str,
    pub accent: Accent,
    /// SVG path data for the card icon.
    pub icon: &'static str,
}

/// What the student submitted, captured at submit time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub full_name: String,
    pub nisn: String,
    pub student_class: String,
    pub address: String,
    pub activity: Option<Activity>,
    pub registration_date: String,
}

impl RegistrationRecord {
    pub fn activity_name(&self) -> Option<&'static str> {
        self.activity.as_ref().map(|a| a.name)
    }
}
