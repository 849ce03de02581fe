//! Layout of the printable proof of registration.
//!
//! The modal and the rasterizer both render from [`ProofSheet`], so the
//! downloaded document always matches what the student saw on screen.

use crate::catalog::{SCHOOL_CITY, SCHOOL_NAME};
use crate::models::RegistrationRecord;

pub const PROOF_TITLE: &str = "BUKTI PENDAFTARAN EKSTRAKULIKULER";
pub const PROOF_HEADING: &str = "Data Pendaftaran Siswa";
pub const EMPTY_VALUE: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureBlock {
    /// Lines above the signing space.
    pub caption: Vec<String>,
    /// Name printed under the signing line, in parentheses.
    pub signer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofSheet {
    pub school_name: &'static str,
    pub title: &'static str,
    pub heading: &'static str,
    pub rows: Vec<ProofRow>,
    pub student: SignatureBlock,
    pub guardian: SignatureBlock,
}

fn row(label: &'static str, value: Option<&str>) -> ProofRow {
    let value = match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY_VALUE.to_string(),
    };
    ProofRow { label, value }
}

impl ProofSheet {
    pub fn from_record(record: &RegistrationRecord) -> Self {
        Self {
            school_name: SCHOOL_NAME,
            title: PROOF_TITLE,
            heading: PROOF_HEADING,
            rows: vec![
                row("Nama Lengkap", Some(&record.full_name)),
                row("NISN", Some(&record.nisn)),
                row("Kelas", Some(&record.student_class)),
                row("Alamat", Some(&record.address)),
                row("Ekstrakurikuler", record.activity_name()),
            ],
            student: SignatureBlock {
                caption: vec!["Tanda Tangan Siswa,".to_string()],
                signer: format!("({})", record.full_name),
            },
            guardian: SignatureBlock {
                caption: vec![
                    format!("{}, {}", SCHOOL_CITY, record.registration_date),
                    "Tanda Tangan Orang Tua/Wali,".to_string(),
                ],
                signer: "(Orang Tua/Wali)".to_string(),
            },
        }
    }
}
