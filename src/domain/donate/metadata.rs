use crate::constants::{DONATE_DESCRIPTION, DONATE_ICON_URL, DONATE_TITLE};

/// Static display metadata of the donate action.
#[derive(Debug, Clone, PartialEq)]
pub struct DonateInfo {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl DonateInfo {
    pub fn describe() -> Self {
        Self {
            icon: DONATE_ICON_URL.to_string(),
            title: DONATE_TITLE.to_string(),
            description: DONATE_DESCRIPTION.to_string(),
        }
    }
}
