use crate::imports::*;

/// What the upload endpoint answers with.
///
/// Some deployments return the bare reference, others an object
/// describing the stored file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum UploadResponse {
    Reference(String),
    File(UploadedFile),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct UploadedFile {
    #[serde(default, alias = "secureUrl", skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl UploadResponse {
    pub fn reference(&self) -> Option<&str> {
        let reference = match self {
            Self::Reference(reference) => Some(reference.as_str()),
            Self::File(file) => file.secure_url.as_deref().or(file.url.as_deref()),
        };
        reference.filter(|reference| !reference.trim().is_empty())
    }

    pub fn into_reference(self) -> Option<String> {
        self.reference().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> UploadResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn bare_string() {
        assert_eq!(
            parse(r#""https://cdn.example.org/a.png""#).reference(),
            Some("https://cdn.example.org/a.png")
        );
    }

    #[test]
    fn secure_url_is_preferred() {
        let response = parse(
            r#"{"url":"http://cdn.example.org/a.png","secure_url":"https://cdn.example.org/a.png","bytes":10}"#,
        );
        assert_eq!(response.reference(), Some("https://cdn.example.org/a.png"));

        let response = parse(r#"{"secureUrl":"https://cdn.example.org/b.png"}"#);
        assert_eq!(response.reference(), Some("https://cdn.example.org/b.png"));
    }

    #[test]
    fn plain_url() {
        let response = parse(r#"{"url":"/uploads/book.pdf"}"#);
        assert_eq!(response.into_reference().as_deref(), Some("/uploads/book.pdf"));
    }

    #[test]
    fn object_without_reference() {
        assert_eq!(parse(r#"{"bytes":10}"#).reference(), None);
        assert_eq!(parse(r#""""#).reference(), None);
    }
}
