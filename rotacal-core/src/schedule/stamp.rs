//! The "Last updated by ..." line written into every event description.

use chrono::NaiveDateTime;

use crate::schedule::time::STAMP_FORMAT;

/// Who generated a batch of events, and when.
///
/// The timestamp is supplied by the caller so that building the same schedule
/// twice with the same stamp produces identical events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStamp {
    pub creator: String,
    pub at: NaiveDateTime,
}

impl UpdateStamp {
    pub fn new(creator: impl Into<String>, at: NaiveDateTime) -> Self {
        UpdateStamp {
            creator: creator.into(),
            at,
        }
    }

    /// e.g. `Last updated by Alice on 05/28/2021 at 09:00 AM\n`
    pub fn description(&self) -> String {
        format!(
            "Last updated by {} on {}\n",
            self.creator,
            self.at.format(STAMP_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_description_uses_twelve_hour_clock() {
        let at = NaiveDate::from_ymd_opt(2021, 5, 28)
            .unwrap()
            .and_hms_opt(21, 5, 0)
            .unwrap();
        let stamp = UpdateStamp::new("Alice", at);

        assert_eq!(
            stamp.description(),
            "Last updated by Alice on 05/28/2021 at 09:05 PM\n"
        );
    }
}
