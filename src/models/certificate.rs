use serde::Serialize;

use super::{Categorized, CertificateCategory};

/// Shown in place of a certificate image that fails to load.
pub const FALLBACK_CERTIFICATE_IMAGE: &str = "https://images.pexels.com/photos/4974914/pexels-photo-4974914.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub id: u32,
    pub title: &'static str,
    pub issuer: &'static str,
    /// Display string, e.g. "June 2023".
    pub date: &'static str,
    pub category: CertificateCategory,
    pub description: &'static str,
    pub image: &'static str,
    pub url: Option<&'static str>,
}

impl Certificate {
    /// External link, ignoring the `"#"` placeholders used for certificates
    /// that have no public verification page yet.
    pub fn link(&self) -> Option<&'static str> {
        self.url.filter(|url| !url.is_empty() && *url != "#")
    }
}

impl Categorized for Certificate {
    type Category = CertificateCategory;

    fn category(&self) -> CertificateCategory {
        self.category
    }
}

/// Source of an `<img>` that falls back once when loading fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    fallback: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
            failed: false,
        }
    }

    pub fn for_certificate(certificate: &Certificate) -> Self {
        Self::new(certificate.image, FALLBACK_CERTIFICATE_IMAGE)
    }

    pub fn current(&self) -> &str {
        if self.failed {
            &self.fallback
        } else {
            &self.primary
        }
    }

    /// Records a load error. Returns `true` only on the first call, so an
    /// error raised by the fallback itself does not trigger another swap.
    pub fn on_error(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        true
    }

    /// Catches a load that already failed before any error listener was
    /// attached: a finished image with no intrinsic width is broken.
    pub fn settle(&mut self, complete: bool, natural_width: u32) -> bool {
        complete && natural_width == 0 && self.on_error()
    }
}
