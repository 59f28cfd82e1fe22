use std::process::Command;

use engine_logging::engine_info;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum NavigateError {
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("unsupported scheme {0:?}")]
    UnsupportedScheme(String),
    #[error("failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
}

/// Opens a URL in a new browsing context.
pub trait Navigator: Send + Sync {
    fn open(&self, url: &str) -> Result<(), NavigateError>;
}

/// Hands the URL to the desktop's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open(&self, url: &str) -> Result<(), NavigateError> {
        let target = normalize_url(url)?;
        engine_info!("Opening {}", target);
        launch(target.as_str())
    }
}

/// Parses `raw`, assuming `https://` when no scheme is given. Only http(s) is
/// accepted.
pub fn normalize_url(raw: &str) -> Result<Url, NavigateError> {
    let raw = raw.trim();
    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{raw}"))
            .map_err(|err| NavigateError::InvalidUrl {
                url: raw.to_string(),
                reason: err.to_string(),
            })?,
        Err(err) => {
            return Err(NavigateError::InvalidUrl {
                url: raw.to_string(),
                reason: err.to_string(),
            })
        }
    };
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(NavigateError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(target_os = "windows")]
fn launch(url: &str) -> Result<(), NavigateError> {
    Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn launch(url: &str) -> Result<(), NavigateError> {
    Command::new("open").arg(url).spawn()?;
    Ok(())
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn launch(url: &str) -> Result<(), NavigateError> {
    Command::new("xdg-open").arg(url).spawn()?;
    Ok(())
}
