//! Pre-flight checks run before any bytes leave the machine.

use super::{UploadError, UploadFile};

/// Checks, in order: the declared type is an image, then the size is within `max_bytes`.
pub fn validate(file: &UploadFile, max_bytes: u64) -> Result<(), UploadError> {
    if !file.content_type.starts_with("image/") {
        return Err(UploadError::InvalidType {
            content_type: file.content_type.clone(),
        });
    }
    let size = file.size();
    if size > max_bytes {
        return Err(UploadError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 10 * 1024 * 1024;

    #[test]
    fn accepts_image_within_limit() {
        let f = UploadFile::new("a.png", "image/png", vec![0; 1024]);
        assert!(validate(&f, LIMIT).is_ok());
    }

    #[test]
    fn exactly_at_limit_is_accepted() {
        let f = UploadFile::new("a.jpg", "image/jpeg", vec![0; LIMIT as usize]);
        assert!(validate(&f, LIMIT).is_ok());
    }

    #[test]
    fn non_image_types_are_rejected() {
        for ct in ["text/plain", "application/pdf", "video/mp4", "", "imagex/png"] {
            let f = UploadFile::new("x", ct, vec![1]);
            assert!(matches!(validate(&f, LIMIT), Err(UploadError::InvalidType { .. })), "{ct}");
        }
    }

    #[test]
    fn oversize_is_rejected() {
        let f = UploadFile::new("big.png", "image/png", vec![0; LIMIT as usize + 1]);
        assert_eq!(
            validate(&f, LIMIT),
            Err(UploadError::FileTooLarge { size: LIMIT + 1, limit: LIMIT })
        );
    }

    #[test]
    fn type_is_checked_before_size() {
        let f = UploadFile::new("big.txt", "text/plain", vec![0; 16]);
        assert!(matches!(validate(&f, 8), Err(UploadError::InvalidType { .. })));
    }
}
