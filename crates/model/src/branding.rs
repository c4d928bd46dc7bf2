use serde::Deserialize;

/// Alt text and title used when the logo descriptor leaves them out.
pub const DEFAULT_LOGO_TEXT: &str = "Company Logo";

/// Endpoint the logo photo reference is appended to.
pub const DEFAULT_LOGO_ENDPOINT: &str = "/api/logo/download/";

/// The colour logo shown at the left of the header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoDescriptor {
    /// Reference to the stored image. Without it no logo is rendered.
    pub photo: Option<String>,
    /// Alt text of the image.
    pub alt: Option<String>,
    /// Title (tooltip) of the image.
    pub img_title: Option<String>,
}

impl LogoDescriptor {
    /// A logo with only its photo set.
    pub fn new(photo: impl Into<String>) -> Self {
        Self {
            photo: Some(photo.into()),
            ..Self::default()
        }
    }

    /// Image source below `endpoint`, or `None` when there is no photo.
    pub fn src(&self, endpoint: &str) -> Option<String> {
        self.photo
            .as_deref()
            .filter(|photo| !photo.is_empty())
            .map(|photo| format!("{endpoint}{photo}"))
    }

    /// Alt text, or [`DEFAULT_LOGO_TEXT`].
    pub fn alt(&self) -> &str {
        non_empty_or_default(self.alt.as_deref())
    }

    /// Title, or [`DEFAULT_LOGO_TEXT`].
    pub fn title(&self) -> &str {
        non_empty_or_default(self.img_title.as_deref())
    }
}

fn non_empty_or_default(text: Option<&str>) -> &str {
    text.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_LOGO_TEXT)
}

/// Builds the `tel:` link for the help desk number. The number is used verbatim.
pub fn tel_href(phone: &str) -> String {
    format!("tel:{phone}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_without_photo_has_no_src() {
        assert_eq!(LogoDescriptor::default().src(DEFAULT_LOGO_ENDPOINT), None);
        let empty = LogoDescriptor::new("");
        assert_eq!(empty.src(DEFAULT_LOGO_ENDPOINT), None);
    }

    #[test]
    fn test_logo_src_and_fallback_text() {
        let logo = LogoDescriptor::new("abc123.png");
        assert_eq!(
            logo.src(DEFAULT_LOGO_ENDPOINT).as_deref(),
            Some("/api/logo/download/abc123.png")
        );
        assert_eq!(logo.alt(), DEFAULT_LOGO_TEXT);
        assert_eq!(logo.title(), DEFAULT_LOGO_TEXT);

        let logo: LogoDescriptor =
            serde_json::from_str(r#"{"photo":"p.png","alt":"Acme","imgTitle":"Acme Paints"}"#)
                .unwrap();
        assert_eq!(logo.alt(), "Acme");
        assert_eq!(logo.title(), "Acme Paints");
    }

    #[test]
    fn test_tel_href_is_verbatim() {
        assert_eq!(tel_href("+1 (555) 010-999"), "tel:+1 (555) 010-999");
        assert_eq!(tel_href(""), "tel:");
    }
}
