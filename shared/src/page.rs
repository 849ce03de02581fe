use crate::auth::check_credentials;
use crate::models::RegistrationRecord;

/// Scroll offset past which the header turns solid.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Plain,
    Showcase,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    Submit(RegistrationRecord),
    CloseProof,
    OpenAnnouncement(String),
    CloseAnnouncement,
    ToggleTheme,
    Scrolled(f64),
    LoadingFinished,
    Login { username: String, password: String },
    Logout,
}

/// View state of one page instance.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub variant: Variant,
    pub dark: bool,
    pub loading: bool,
    pub unlocked: bool,
    pub login_error: Option<String>,
    pub header_scrolled: bool,
    pub record: Option<RegistrationRecord>,
    pub show_proof: bool,
    pub announcement_url: Option<String>,
}

impl PageModel {
    pub fn plain() -> Self {
        Self {
            variant: Variant::Plain,
            dark: false,
            loading: false,
            unlocked: true,
            login_error: None,
            header_scrolled: false,
            record: None,
            show_proof: false,
            announcement_url: None,
        }
    }

    pub fn showcase() -> Self {
        Self {
            variant: Variant::Showcase,
            dark: true,
            loading: true,
            unlocked: false,
            ..Self::plain()
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Plain => Self::plain(),
            Variant::Showcase => Self::showcase(),
        }
    }

    /// Record to show in the proof overlay, if it is open.
    pub fn proof(&self) -> Option<&RegistrationRecord> {
        self.record.as_ref().filter(|_| self.show_proof)
    }

    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::Submit(record) => {
                self.record = Some(record);
                self.show_proof = true;
            }
            PageAction::CloseProof => self.show_proof = false,
            PageAction::OpenAnnouncement(url) => self.announcement_url = Some(url),
            PageAction::CloseAnnouncement => self.announcement_url = None,
            PageAction::ToggleTheme => self.dark = !self.dark,
            PageAction::Scrolled(y) => self.header_scrolled = y > HEADER_SCROLL_THRESHOLD,
            PageAction::LoadingFinished => self.loading = false,
            PageAction::Login { username, password } => {
                match check_credentials(&username, &password) {
                    Ok(()) => {
                        self.unlocked = true;
                        self.login_error = None;
                    }
                    Err(err) => {
                        self.unlocked = false;
                        self.login_error = Some(err.message);
                    }
                }
            }
            PageAction::Logout => {
                if self.variant == Variant::Showcase {
                    self.unlocked = false;
                    self.show_proof = false;
                    self.announcement_url = None;
                }
            }
        }
    }
}
