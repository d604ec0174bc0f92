//! Contact and callback forms: constraint checks and `mailto:` composition.

/// Mailbox for interests that are not in [`EMAIL_ROUTES`].
pub const DEFAULT_MAILBOX: &str = "bonjour@fermentierra.com";

/// Interest value → receiving mailbox.
pub const EMAIL_ROUTES: [(&str, &str); 5] = [
    ("tasting", "degustation@fermentierra.com"),
    ("subscription", "abonnements@fermentierra.com"),
    ("cocreation", "atelier@fermentierra.com"),
    ("training", "formation@fermentierra.com"),
    ("quote", "devis@fermentierra.com"),
];

pub fn mailbox_for(interest: Option<&str>) -> &'static str {
    interest
        .and_then(|interest| {
            EMAIL_ROUTES
                .iter()
                .find(|(key, _)| *key == interest)
                .map(|(_, mailbox)| *mailbox)
        })
        .unwrap_or(DEFAULT_MAILBOX)
}

/// A field that failed its constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Interest,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Interest => "interest",
        }
    }
}

/// Loose `type="email"` check: one `@`, non-empty local part, dotless
/// domains allowed like the browser does.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn or_dash(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub establishment: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

impl ContactSubmission {
    /// Fields failing their constraints, in form order. Empty when valid.
    pub fn validate(&self) -> Vec<Field> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(Field::Name);
        }
        if !looks_like_email(&self.email) {
            invalid.push(Field::Email);
        }
        if self.interest.trim().is_empty() {
            invalid.push(Field::Interest);
        }
        invalid
    }

    fn interest(&self) -> Option<&str> {
        Some(self.interest.trim()).filter(|i| !i.is_empty())
    }

    pub fn mailbox(&self) -> &'static str {
        mailbox_for(self.interest())
    }

    pub fn subject(&self) -> String {
        format!("Demande {}", self.interest().unwrap_or("contact"))
    }

    pub fn body(&self) -> String {
        format!(
            "Nom : {}\nEtablissement : {}\nEmail : {}\nTéléphone : {}\nMessage : {}",
            self.name.trim(),
            or_dash(&self.establishment),
            self.email.trim(),
            or_dash(&self.phone),
            or_dash(&self.message),
        )
    }

    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.mailbox(),
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body()),
        )
    }
}

/// The floating "call me back" form. Nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackRequest {
    pub name: String,
    pub phone: String,
    pub time: String,
}

impl CallbackRequest {
    /// `type="tel"` carries no format rule, so the phone only has to be there.
    pub fn validate(&self) -> Vec<Field> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(Field::Name);
        }
        if self.phone.trim().is_empty() {
            invalid.push(Field::Phone);
        }
        invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(interest: &str) -> ContactSubmission {
        ContactSubmission {
            name: "Ada".into(),
            establishment: String::new(),
            email: "ada@example.com".into(),
            phone: String::new(),
            interest: interest.into(),
            message: "Bonjour & merci".into(),
        }
    }

    #[test]
    fn routes_known_interests() {
        assert_eq!(mailbox_for(Some("tasting")), "degustation@fermentierra.com");
        assert_eq!(mailbox_for(Some("quote")), "devis@fermentierra.com");
    }

    #[test]
    fn unknown_or_missing_interest_goes_to_default() {
        assert_eq!(mailbox_for(Some("other")), DEFAULT_MAILBOX);
        assert_eq!(mailbox_for(None), DEFAULT_MAILBOX);
        assert_eq!(submission("").mailbox(), DEFAULT_MAILBOX);
    }

    #[test]
    fn mailto_targets_routed_mailbox() {
        let uri = submission("tasting").mailto_uri();
        assert!(uri.starts_with("mailto:degustation@fermentierra.com?subject=Demande%20tasting&body="));
    }

    #[test]
    fn body_is_encoded_with_dashes_for_blanks() {
        let s = submission("training");
        assert!(s.body().contains("Etablissement : -\n"));
        assert!(s.body().ends_with("Message : Bonjour & merci"));
        let uri = s.mailto_uri();
        assert!(uri.contains("Bonjour%20%26%20merci"));
        assert!(uri.contains("%0A"));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn validation_lists_invalid_fields() {
        assert!(submission("quote").validate().is_empty());
        let bad = ContactSubmission {
            email: "not-an-email".into(),
            phone: "abc".into(),
            ..ContactSubmission::default()
        };
        assert_eq!(
            bad.validate(),
            vec![Field::Name, Field::Email, Field::Interest]
        );
    }

    #[test]
    fn free_form_phone_numbers_are_accepted() {
        let contact = ContactSubmission {
            phone: "ext. 4".into(),
            ..submission("quote")
        };
        assert!(contact.validate().is_empty());

        let callback = CallbackRequest {
            name: "Léa".into(),
            phone: "poste 12".into(),
            time: String::new(),
        };
        assert!(callback.validate().is_empty());
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email(" chef@resto.fr "));
        assert!(!looks_like_email("a@@b"));
        assert!(!looks_like_email("@b.fr"));
        assert!(!looks_like_email("a b@c.fr"));
    }

    #[test]
    fn callback_needs_name_and_phone() {
        let ok = CallbackRequest {
            name: "Léa".into(),
            phone: "+33 6 12 34 56 78".into(),
            time: String::new(),
        };
        assert!(ok.validate().is_empty());
        assert_eq!(
            CallbackRequest::default().validate(),
            vec![Field::Name, Field::Phone]
        );
    }
}
