//! Business information: contact details and weekly opening hours.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::locale::{FieldGroup, Localized, LocaleResolver, LocalizedText};
use crate::types::Timestamp;

/// Format of opening and closing times.
const TIME_FORMAT: &str = "%H:%M";

/// Opening hours of a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: String,
    pub close: String,
    #[serde(default)]
    pub closed: bool,
}

impl DayHours {
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            closed: false,
        }
    }

    pub fn closed() -> Self {
        Self {
            open: String::new(),
            close: String::new(),
            closed: true,
        }
    }
}

/// Opening hours for each day of the week. Missing days count as closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub monday: Option<DayHours>,
    pub tuesday: Option<DayHours>,
    pub wednesday: Option<DayHours>,
    pub thursday: Option<DayHours>,
    pub friday: Option<DayHours>,
    pub saturday: Option<DayHours>,
    pub sunday: Option<DayHours>,
}

/// Days in display order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Lower-case English day key (`monday`).
pub fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

impl WorkingHours {
    pub fn day(&self, day: Weekday) -> Option<&DayHours> {
        match day {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

/// The single business info record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: LocalizedText,
    pub address: LocalizedText,
    pub phone: String,
    pub email: Option<String>,
    pub google_maps_url: Option<String>,
    pub google_place_id: Option<String>,
    pub working_hours: WorkingHours,
    pub social_media: Option<SocialMedia>,
    pub updated_at: Timestamp,
}

impl Localized for BusinessInfo {
    fn localized(&self, group: FieldGroup) -> Option<&LocalizedText> {
        match group {
            FieldGroup::Name => Some(&self.name),
            FieldGroup::Address => Some(&self.address),
            _ => None,
        }
    }
}

/// One row of the public opening-hours table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayHoursView {
    pub day: &'static str,
    pub closed: bool,
    pub open: Option<String>,
    pub close: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessView {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub google_maps_url: Option<String>,
    pub hours: Vec<DayHoursView>,
    pub social_media: Option<SocialMedia>,
}

/// Resolve the business record for `locale`.
pub fn render_business(info: &BusinessInfo, locale: &str, resolver: &LocaleResolver) -> BusinessView {
    let hours = WEEK
        .iter()
        .map(|day| match info.working_hours.day(*day) {
            Some(hours) if !hours.closed => DayHoursView {
                day: day_key(*day),
                closed: false,
                open: Some(hours.open.clone()),
                close: Some(hours.close.clone()),
            },
            _ => DayHoursView {
                day: day_key(*day),
                closed: true,
                open: None,
                close: None,
            },
        })
        .collect();

    BusinessView {
        name: resolver.resolve(info, FieldGroup::Name, locale),
        address: resolver.resolve(info, FieldGroup::Address, locale),
        phone: info.phone.clone(),
        email: info.email.clone(),
        google_maps_url: info.google_maps_url.clone(),
        hours,
        social_media: info.social_media.clone(),
    }
}

/// Validate that every open day carries well-formed `HH:MM` times.
pub fn validate_working_hours(hours: &WorkingHours) -> Result<(), CoreError> {
    for day in WEEK {
        let Some(entry) = hours.day(day) else {
            continue;
        };
        if entry.closed {
            continue;
        }
        for (label, value) in [("open", &entry.open), ("close", &entry.close)] {
            if parse_time(value).is_err() {
                return Err(CoreError::Validation(format!(
                    "Invalid {label} time '{value}' for {}. Expected HH:MM",
                    day_key(day)
                )));
            }
        }
    }
    Ok(())
}

/// Validate the contact fields of a business record.
pub fn validate_contact(phone: &str, email: Option<&str>) -> Result<(), CoreError> {
    if phone.trim().is_empty() {
        return Err(CoreError::Validation("Phone number is required".into()));
    }
    if let Some(email) = email.filter(|e| !e.trim().is_empty()) {
        if !email.to_owned().validate_email() {
            return Err(CoreError::Validation(format!("Invalid email address '{email}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn week() -> WorkingHours {
        WorkingHours {
            monday: Some(DayHours::new("08:00", "22:00")),
            friday: Some(DayHours::new("18:00", "02:00")),
            sunday: Some(DayHours::closed()),
            ..WorkingHours::default()
        }
    }

    #[test]
    fn malformed_times_are_rejected() {
        let mut hours = week();
        assert!(validate_working_hours(&hours).is_ok());
        hours.tuesday = Some(DayHours::new("9am", "17:00"));
        assert_matches!(validate_working_hours(&hours), Err(CoreError::Validation(msg)) if msg.contains("tuesday"));
    }

    #[test]
    fn contact_requires_phone_and_valid_email() {
        assert!(validate_contact("+90 216 000 00 00", None).is_ok());
        assert!(validate_contact("+90 216 000 00 00", Some("")).is_ok());
        assert!(validate_contact("+90 216 000 00 00", Some("info@lokanta.com")).is_ok());
        assert_matches!(validate_contact("  ", None), Err(CoreError::Validation(_)));
        assert_matches!(
            validate_contact("+90", Some("not-an-email")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn renders_localized_view() {
        let info = BusinessInfo {
            name: LocalizedText::new().with("tr", "Lokanta"),
            address: LocalizedText::new().with("tr", "Kadıköy").with("en", "Kadikoy"),
            phone: "+90 216 000 00 00".into(),
            email: None,
            google_maps_url: None,
            google_place_id: None,
            working_hours: week(),
            social_media: None,
            updated_at: chrono::Utc::now(),
        };
        let view = render_business(&info, "en", &LocaleResolver::default());
        assert_eq!(view.name, "Lokanta");
        assert_eq!(view.address, "Kadikoy");
        assert_eq!(view.hours.len(), 7);
        assert_eq!(view.hours[0].open.as_deref(), Some("08:00"));
        assert!(view.hours[6].closed);
        assert!(view.hours[1].closed);
    }
}
