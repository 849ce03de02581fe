#[cfg(test)]
mod tests {
    use time::{Date, Month};
    use crate::auth::{check_credentials, LOGIN_ERROR_MESSAGE};
    use crate::carousel::Carousel;
    use crate::catalog::{find_activity, ACTIVITIES, ANNOUNCEMENTS, CLASSES};
    use crate::pdf::{decode_data_url, PdfWriter};
    use crate::proof::{ProofSheet, EMPTY_VALUE};
    use crate::scene::{Camera, Scene, Vec3, Wireframe};
    use crate::{
        export_file_name, format_long_date, ErrorCode, Field, PageAction, PageModel,
        RegistrationDraft, RegistrationRecord, ValidationError,
    };

    fn today() -> Date {
        Date::from_calendar_date(2026, Month::October, 19).unwrap()
    }

    fn draft() -> RegistrationDraft {
        RegistrationDraft {
            full_name: "Siti Nur Aisyah".into(),
            nisn: "0081234567".into(),
            student_class: "XI PPLG".into(),
            address: "Jl. Pandanaran No. 5".into(),
            activity_id: "8".into(),
        }
    }

    fn record() -> RegistrationRecord {
        draft().submit(today()).unwrap()
    }

    #[test]
    fn test_submit_copies_typed_values() {
        let record = record();
        assert_eq!(record.full_name, "Siti Nur Aisyah");
        assert_eq!(record.nisn, "0081234567");
        assert_eq!(record.student_class, "XI PPLG");
        assert_eq!(record.address, "Jl. Pandanaran No. 5");
        assert_eq!(record.activity.as_ref().map(|a| a.id), Some(8));
        assert_eq!(record.activity_name(), Some("Robotika"));
        assert_eq!(record.registration_date, "19 Oktober 2026");
    }

    #[test]
    fn test_submit_blocks_missing_fields() {
        let fields = [
            (Field::FullName, "Nama Lengkap"),
            (Field::Nisn, "NISN"),
            (Field::StudentClass, "Kelas & Jurusan"),
            (Field::Address, "Alamat Rumah"),
            (Field::Activity, "Pilihan Ekstrakurikuler"),
        ];
        for (field, label) in fields {
            let mut d = draft();
            d.set(field, String::new());
            assert_eq!(d.get(field), "");
            assert_eq!(d.submit(today()), Err(ValidationError::MissingField(label)));
        }
    }

    #[test]
    fn test_submit_accepts_any_populated_value() {
        let mut d = draft();
        d.full_name = "   ".into();
        d.nisn = "1e5".into();
        let record = d.submit(today()).unwrap();
        assert_eq!(record.full_name, "   ");
        assert_eq!(record.nisn, "1e5");
    }

    #[test]
    fn test_submit_keeps_values_verbatim() {
        let long_address = "a".repeat(250);
        let cases = [
            ("Ákos Nguyễn Văn", "0081234567", "X AKL 1", "Jl. Pemuda 12", "1"),
            ("  Dewi  ", "000123", "XII PPLG", "  Gg. Mawar\tRT 02  ", "15"),
            ("李 小龙", "1e5", "kelas bebas", "Semarang", "7"),
            ("Budi", "-12", "XI PPLG", " ", "3"),
            ("Rina", "1.5", "XI PPLG", "Jl. Kaligawe", "99"),
            ("Agus", "123456789012345678901234", "XI PPLG", long_address.as_str(), "8"),
        ];
        for (full_name, nisn, student_class, address, activity_id) in cases {
            let d = RegistrationDraft {
                full_name: full_name.into(),
                nisn: nisn.into(),
                student_class: student_class.into(),
                address: address.into(),
                activity_id: activity_id.into(),
            };
            let record = d.submit(today()).unwrap();
            assert_eq!(record.full_name, full_name);
            assert_eq!(record.nisn, nisn);
            assert_eq!(record.student_class, student_class);
            assert_eq!(record.address, address);
            assert_eq!(
                record.activity.map(|a| a.id),
                activity_id.parse::<u32>().ok().filter(|id| (1..=15).contains(id))
            );
        }
    }

    #[test]
    fn test_unknown_activity_id_yields_no_activity() {
        let mut d = draft();
        d.activity_id = "99".into();
        assert_eq!(d.submit(today()).unwrap().activity, None);
    }

    #[test]
    fn test_catalog_shape() {
        assert_eq!(ACTIVITIES.len(), 15);
        assert_eq!(CLASSES.len(), 27);
        assert_eq!(ANNOUNCEMENTS.len(), 4);
        assert!(ACTIVITIES.iter().enumerate().all(|(i, a)| a.id as usize == i + 1));
        assert_eq!(find_activity(1).map(|a| a.name), Some("Basket"));
        assert!(find_activity(0).is_none());
        assert_eq!(ANNOUNCEMENTS[0].accent.border_class(), "border-rose-500");
    }

    #[test]
    fn test_long_date_format() {
        let date = Date::from_calendar_date(2025, Month::May, 3).unwrap();
        assert_eq!(format_long_date(date), "3 Mei 2025");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Siti Nur Aisyah"), "bukti-pendaftaran-Siti-Nur-Aisyah.pdf");
        assert_eq!(export_file_name("Budi  Santoso"), "bukti-pendaftaran-Budi--Santoso.pdf");
        assert_eq!(export_file_name("Budi"), "bukti-pendaftaran-Budi.pdf");
    }

    #[test]
    fn test_proof_sheet_layout() {
        let sheet = ProofSheet::from_record(&record());
        let labels: Vec<_> = sheet.rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, ["Nama Lengkap", "NISN", "Kelas", "Alamat", "Ekstrakurikuler"]);
        assert_eq!(sheet.rows[4].value, "Robotika");
        assert_eq!(sheet.student.signer, "(Siti Nur Aisyah)");
        assert_eq!(sheet.guardian.caption[0], "Semarang, 19 Oktober 2026");

        let mut without_activity = record();
        without_activity.activity = None;
        let sheet = ProofSheet::from_record(&without_activity);
        assert_eq!(sheet.rows[4].value, EMPTY_VALUE);
    }

    #[test]
    fn test_login_gate() {
        assert!(check_credentials("admin", "ekskul9").is_ok());

        for (user, pass) in [("admin", "wrong"), ("Admin", "ekskul9"), ("", ""), ("ekskul9", "admin")] {
            let err = check_credentials(user, pass).unwrap_err();
            assert_eq!(err.code, ErrorCode::Unauthorized);
            assert_eq!(err.message, LOGIN_ERROR_MESSAGE);
        }
    }

    #[test]
    fn test_page_overlays() {
        let mut page = PageModel::plain();
        assert!(page.proof().is_none());

        page.apply(PageAction::Submit(record()));
        assert_eq!(page.proof().map(|r| r.full_name.as_str()), Some("Siti Nur Aisyah"));
        page.apply(PageAction::CloseProof);
        assert!(page.proof().is_none());
        assert!(page.record.is_some());

        let url = ANNOUNCEMENTS[2].sheet_url.to_string();
        page.apply(PageAction::OpenAnnouncement(url.clone()));
        assert_eq!(page.announcement_url, Some(url));
        page.apply(PageAction::CloseAnnouncement);
        assert_eq!(page.announcement_url, None);
    }

    #[test]
    fn test_theme_toggle_flips_flag() {
        let mut page = PageModel::plain();
        let before = page.clone();
        page.apply(PageAction::ToggleTheme);
        assert!(page.dark);
        assert_eq!(PageModel { dark: false, ..page.clone() }, before);
        page.apply(PageAction::ToggleTheme);
        assert_eq!(page, before);
    }

    #[test]
    fn test_header_scroll_threshold() {
        let mut page = PageModel::plain();
        page.apply(PageAction::Scrolled(50.0));
        assert!(!page.header_scrolled);
        page.apply(PageAction::Scrolled(51.0));
        assert!(page.header_scrolled);
    }

    #[test]
    fn test_showcase_login_flow() {
        let mut page = PageModel::showcase();
        assert!(page.dark && page.loading && !page.unlocked);

        page.apply(PageAction::LoadingFinished);
        page.apply(PageAction::Login { username: "admin".into(), password: "salah".into() });
        assert!(!page.unlocked);
        assert_eq!(page.login_error.as_deref(), Some(LOGIN_ERROR_MESSAGE));

        page.apply(PageAction::Login { username: "admin".into(), password: "ekskul9".into() });
        assert!(page.unlocked);
        assert_eq!(page.login_error, None);

        page.apply(PageAction::Logout);
        assert!(!page.unlocked);

        let mut plain = PageModel::plain();
        plain.apply(PageAction::Logout);
        assert!(plain.unlocked);
    }

    #[test]
    fn test_carousel_wraps() {
        let mut c = Carousel::new(5, 3);
        c.prev();
        assert_eq!(c.index(), 4);
        assert_eq!(c.visible().collect::<Vec<_>>(), [4, 0, 1]);
        c.next();
        c.next();
        assert_eq!(c.index(), 1);
        c.go_to(7);
        assert_eq!(c.index(), 1);

        assert_eq!(Carousel::new(2, 3).visible().count(), 2);
        assert_eq!(Carousel::new(0, 3).visible().count(), 0);
    }

    #[test]
    fn test_data_url_decoding() {
        let decoded = decode_data_url("data:image/jpeg;base64,/9j/2Q==").unwrap();
        assert_eq!(decoded.mime, "image/jpeg");
        assert_eq!(decoded.bytes, vec![0xFF, 0xD8, 0xFF, 0xD9]);

        for bad in ["image/jpeg;base64,AAAA", "data:image/png,abc", "data:image/jpeg;base64", "data:image/jpeg;base64,!!"] {
            assert_eq!(decode_data_url(bad).unwrap_err().code, ErrorCode::MalformedDataUrl);
        }
    }

    #[test]
    fn test_single_image_pdf() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xD9];
        let pdf = PdfWriter::single_image(&jpeg, 1200, 1600);
        assert!(pdf.starts_with(b"%PDF-1.4\n"));
        assert!(pdf.ends_with(b"%%EOF\n"));

        let text = String::from_utf8_lossy(&pdf);
        assert!(text.contains("/MediaBox [0 0 900 1200]"));
        assert!(text.contains("/Width 1200 /Height 1600"));
        assert!(text.contains("/Filter /DCTDecode /Length 4 >>"));
        assert!(text.contains("xref\n0 6\n"));
        assert!(pdf.windows(jpeg.len()).any(|w| w == jpeg));
    }

    #[test]
    fn test_wireframe_edges() {
        assert_eq!(Wireframe::tetrahedron(1.0).edges.len(), 6);
        assert_eq!(Wireframe::cube(1.0).edges.len(), 12);
        assert_eq!(Wireframe::octahedron(1.0).edges.len(), 12);

        let ico = Wireframe::icosahedron(2.0);
        assert_eq!(ico.vertices.len(), 12);
        assert_eq!(ico.edges.len(), 30);
        assert!(ico.vertices.iter().all(|v| (v.length() - 2.0).abs() < 1e-9));
    }

    #[test]
    fn test_rotation_and_projection() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let r = v.rotate(Vec3::new(0.3, 1.1, -0.7));
        assert!((r.length() - v.length()).abs() < 1e-9);

        let q = Vec3::new(1.0, 0.0, 0.0).rotate_z(std::f64::consts::FRAC_PI_2);
        assert!(q.x.abs() < 1e-9 && (q.y - 1.0).abs() < 1e-9);

        let camera = Camera::default();
        let center = camera.project(Vec3::default(), 800.0, 600.0).unwrap();
        assert_eq!((center.x, center.y), (400.0, 300.0));

        let up = camera.project(Vec3::new(0.0, 1.0, 0.0), 800.0, 600.0).unwrap();
        assert!(up.y < 300.0);

        assert!(camera.project(Vec3::new(0.0, 0.0, -camera.distance), 800.0, 600.0).is_none());
    }

    #[test]
    fn test_scene_is_deterministic() {
        let a = Scene::new(9, 120);
        let b = Scene::new(9, 120);
        assert_eq!(a.particles.len(), 120);
        assert_eq!(a.frame(2.5, 1280.0, 720.0), b.frame(2.5, 1280.0, 720.0));
        assert_ne!(a.particles, Scene::new(10, 120).particles);

        let frame = a.frame(0.0, 1280.0, 720.0);
        assert_eq!(frame.segments.len(), 30 + 12 + 12 + 6);
        assert_eq!(frame.dots.len(), 120);
    }
}
