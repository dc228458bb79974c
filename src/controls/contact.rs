use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Subject used when the visitor leaves the subject field empty.
pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Build the mail request for `recipient` and clear the draft.
    ///
    /// The draft is emptied whether or not the host mail handler ever opens.
    pub fn submit(&mut self, recipient: &str) -> MailtoRequest {
        let draft = std::mem::take(self);
        MailtoRequest::compose(recipient, &draft)
    }
}

/// A `mailto:` URI handed to the browser; delivery is not observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoRequest {
    pub fn compose(recipient: &str, draft: &ContactDraft) -> Self {
        let subject = if draft.subject.is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            draft.subject.clone()
        };
        let body = format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            draft.name, draft.email, draft.message
        );
        Self {
            recipient: recipient.to_string(),
            subject,
            body,
        }
    }

    pub fn encoded_subject(&self) -> String {
        encode_component(&self.subject)
    }

    pub fn encoded_body(&self) -> String {
        encode_component(&self.body)
    }

    pub fn uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            self.encoded_subject(),
            self.encoded_body()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper building a draft field by field, the way the form does
    fn draft(name: &str, email: &str, subject: &str, message: &str) -> ContactDraft {
        let mut d = ContactDraft::default();
        d.set(ContactField::Name, name);
        d.set(ContactField::Email, email);
        d.set(ContactField::Subject, subject);
        d.set(ContactField::Message, message);
        d
    }

    #[test]
    fn test_submit_defaults_subject_and_resets() {
        let mut d = draft("A", "b@x.com", "", "hi");
        let req = d.submit("khushparv@gmail.com");

        assert_eq!(req.subject, DEFAULT_SUBJECT);
        assert_eq!(req.encoded_subject(), "Portfolio%20Contact");
        assert!(req.body.contains("Name: A"));
        assert!(req.body.contains("Email: b@x.com"));
        assert!(req.body.ends_with("\n\nMessage:\nhi"));
        assert!(req.encoded_body().contains("Name%3A%20A"));
        assert!(req.encoded_body().contains("Email%3A%20b%40x.com"));

        assert!(d.is_empty());
        assert_eq!(d.get(ContactField::Name), "");
        assert_eq!(d.get(ContactField::Message), "");
    }

    #[test]
    fn test_uri_layout() {
        let mut d = draft("Ann Lee", "ann@example.com", "Hello & welcome", "Let's talk?");
        let uri = d.submit("khushparv@gmail.com").uri();
        assert_eq!(
            uri,
            "mailto:khushparv@gmail.com?subject=Hello%20%26%20welcome\
             &body=Name%3A%20Ann%20Lee%0AEmail%3A%20ann%40example.com%0A%0AMessage%3A%0ALet's%20talk%3F"
        );
    }

    #[test]
    fn test_encoding_matches_uri_component() {
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("a+b=c/d#e"), "a%2Bb%3Dc%2Fd%23e");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_last_write_wins() {
        let mut d = ContactDraft::default();
        d.set(ContactField::Subject, "first");
        d.set(ContactField::Subject, "second");
        assert_eq!(d.get(ContactField::Subject), "second");
        assert!(!d.is_empty());
    }

    #[test]
    fn test_empty_draft_still_submits() {
        let mut d = ContactDraft::default();
        let req = d.submit("someone@example.com");
        assert_eq!(req.body, "Name: \nEmail: \n\nMessage:\n");
        assert!(req.uri().starts_with("mailto:someone@example.com?subject=Portfolio%20Contact&body="));
    }
}
