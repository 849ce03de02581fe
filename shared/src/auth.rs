use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::error::{Error, ErrorCode, Result};

pub const LOGIN_ERROR_MESSAGE: &str = "Username atau password salah!";

// URL-safe base64 SHA-256 digests of the single accepted pair.
const USERNAME_DIGEST: &str = "jGl25bVBBBW96Qi9Te4V37Fnqchz_Eu4qB9vKrRIqRg=";
const PASSWORD_DIGEST: &str = "E9xdDpSzhwucg86fwDY2MXCYBhadW6BgoLEDJAbc7A0=";

fn digest(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    URL_SAFE.encode(hasher.finalize())
}

/// The showcase page's gate. Not a security boundary: the page content ships
/// to the browser either way.
pub fn check_credentials(username: &str, password: &str) -> Result<()> {
    let username_ok = digest(username) == USERNAME_DIGEST;
    let password_ok = digest(password) == PASSWORD_DIGEST;

    if username_ok && password_ok {
        Ok(())
    } else {
        Err(Error::new(ErrorCode::Unauthorized, LOGIN_ERROR_MESSAGE))
    }
}
