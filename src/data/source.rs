use log::debug;

use super::LoadError;

/// Where spreadsheet bytes come from.
pub trait SpreadsheetSource {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError>;
}

/// `http(s)://` locations are fetched with one blocking GET, anything else is a local path.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSource;

impl DefaultSource {
    fn is_remote(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }
}

impl SpreadsheetSource for DefaultSource {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, LoadError> {
        if Self::is_remote(location) {
            let response = reqwest::blocking::get(location)?.error_for_status()?;
            let bytes = response.bytes()?;
            debug!("Downloaded {} bytes from {location}", bytes.len());
            Ok(bytes.to_vec())
        } else {
            std::fs::read(location).map_err(|source| LoadError::Io {
                path: location.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_remote_locations() {
        assert!(DefaultSource::is_remote("https://example.org/a.xlsx"));
        assert!(DefaultSource::is_remote("http://example.org/a.xlsx"));
        assert!(!DefaultSource::is_remote("data/GameTurns.xlsx"));
    }

    #[test]
    fn missing_local_file_is_an_io_error() {
        let err = DefaultSource
            .fetch("definitely/not/here/GameTurns.xlsx")
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here"));
    }
}
