//! Loading uploaded CSV files into memory.
//!
//! Reading the file is the only asynchronous step of an import; once the
//! text is in hand every stage runs synchronously.

use std::path::Path;

use chardetng::EncodingDetector;
use log::{debug, warn};

use crate::errors::Result;

use super::ImportError;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decodes raw file bytes to text.
///
/// A UTF-8 BOM is dropped. Bytes that are not valid UTF-8 are decoded with
/// the encoding `chardetng` guesses (typically Windows-1252 for spreadsheet
/// exports).
pub fn decode_csv_bytes(content: &[u8]) -> std::result::Result<String, ImportError> {
    let content = content.strip_prefix(&UTF8_BOM).unwrap_or(content);

    if let Ok(text) = std::str::from_utf8(content) {
        return Ok(text.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(content, true);
    let encoding = detector.guess(None, true);
    debug!("CSV is not UTF-8, decoding as {}", encoding.name());

    let (text, _, had_errors) = encoding.decode(content);
    if had_errors {
        warn!("CSV contains bytes that are invalid in {}", encoding.name());
        return Err(ImportError::Encoding(format!(
            "file is neither UTF-8 nor valid {}",
            encoding.name()
        )));
    }

    Ok(text.into_owned())
}

/// Reads and decodes a CSV file.
pub async fn load_csv_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_csv_bytes(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_decode_plain_utf8() {
        assert_eq!(decode_csv_bytes("name,qty\nPokémon,1".as_bytes()).unwrap(), "name,qty\nPokémon,1");
    }

    #[test]
    fn test_decode_strips_bom() {
        let bytes = b"\xEF\xBB\xBFname,qty\nBox,1";
        assert_eq!(decode_csv_bytes(bytes).unwrap(), "name,qty\nBox,1");
    }

    #[test]
    fn test_decode_legacy_encoding() {
        // "Pokémon" in Windows-1252
        let bytes = b"name,qty\nPok\xE9mon Booster Box,1";
        let text = decode_csv_bytes(bytes).unwrap();
        assert!(text.starts_with("name,qty\nPok"));
        assert!(text.ends_with("mon Booster Box,1"));
    }

    #[tokio::test]
    async fn test_load_csv_text_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Product Name,Quantity,Market Price\nEevee,2,1.50\n")
            .unwrap();

        let text = load_csv_text(file.path()).await.unwrap();

        assert!(text.starts_with("Product Name"));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let result = load_csv_text("/definitely/not/here.csv").await;

        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
