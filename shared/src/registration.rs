use time::{Date, Month};

use crate::catalog::find_activity;
use crate::models::RegistrationRecord;
use crate::validation::{validate_draft, ValidationError};

pub const EXPORT_FILE_PREFIX: &str = "bukti-pendaftaran-";

/// Raw form values as typed, before a record exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub nisn: String,
    pub student_class: String,
    pub address: String,
    /// Value of the activity select, the activity id as text.
    pub activity_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Nisn,
    StudentClass,
    Address,
    Activity,
}

impl RegistrationDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Nisn => self.nisn = value,
            Field::StudentClass => self.student_class = value,
            Field::Address => self.address = value,
            Field::Activity => self.activity_id = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Nisn => &self.nisn,
            Field::StudentClass => &self.student_class,
            Field::Address => &self.address,
            Field::Activity => &self.activity_id,
        }
    }

    /// Turns the draft into a record dated `today`.
    ///
    /// Field values are kept exactly as typed. An activity id that matches no
    /// catalog entry yields a record without an activity.
    pub fn submit(&self, today: Date) -> Result<RegistrationRecord, ValidationError> {
        validate_draft(self)?;

        let activity = self.activity_id.trim().parse::<u32>().ok()
            .and_then(find_activity)
            .cloned();

        Ok(RegistrationRecord {
            full_name: self.full_name.clone(),
            nisn: self.nisn.clone(),
            student_class: self.student_class.clone(),
            address: self.address.clone(),
            activity,
            registration_date: format_long_date(today),
        })
    }
}

pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Januari",
        Month::February => "Februari",
        Month::March => "Maret",
        Month::April => "April",
        Month::May => "Mei",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "Agustus",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Desember",
    }
}

/// Indonesian long date, e.g. `5 Oktober 2026`.
pub fn format_long_date(date: Date) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}

/// Download name for a proof document; each whitespace character becomes `-`.
pub fn export_file_name(full_name: &str) -> String {
    let slug: String = full_name.chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();
    format!("{EXPORT_FILE_PREFIX}{slug}.pdf")
}
