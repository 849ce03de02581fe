use crate::registration::RegistrationDraft;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_ADDRESS_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} wajib diisi")]
    MissingField(&'static str),
}

fn required(value: &str, label: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() { return Err(ValidationError::MissingField(label)); }
    Ok(())
}

/// Checks the draft in form order and reports the first empty field.
///
/// Only emptiness is checked. Any value the browser lets through a
/// `required` input, whitespace and number notation included, is accepted.
pub fn validate_draft(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    required(&draft.full_name, "Nama Lengkap")?;
    required(&draft.nisn, "NISN")?;
    required(&draft.student_class, "Kelas & Jurusan")?;
    required(&draft.address, "Alamat Rumah")?;
    required(&draft.activity_id, "Pilihan Ekstrakurikuler")?;
    Ok(())
}
