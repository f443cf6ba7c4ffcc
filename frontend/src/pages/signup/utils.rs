use crate::api::{SignupField, SignupRequest};

/// Replaces exactly one field of the form record.
pub fn apply_field(form: &mut SignupRequest, field: SignupField, value: String) {
    match field {
        SignupField::Email => form.email = value,
        SignupField::Username => form.username = value,
        SignupField::FullName => form.full_name = value,
        SignupField::Password => form.password = value,
    }
}

pub fn field_value(form: &SignupRequest, field: SignupField) -> &str {
    match field {
        SignupField::Email => &form.email,
        SignupField::Username => &form.username,
        SignupField::FullName => &form.full_name,
        SignupField::Password => &form.password,
    }
}

/// First empty field in display order. Whitespace counts as content, the
/// same as a browser `required` check.
pub fn first_missing_field(form: &SignupRequest) -> Option<SignupField> {
    SignupField::ALL
        .into_iter()
        .find(|field| field_value(form, *field).is_empty())
}

pub fn submit_label(pending: bool) -> &'static str {
    if pending {
        "Loading..."
    } else {
        "Sign up"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_field_touches_only_the_named_field() {
        let mut form = SignupRequest::default();
        apply_field(&mut form, SignupField::FullName, "Bob Builder".into());
        assert_eq!(
            form,
            SignupRequest {
                full_name: "Bob Builder".into(),
                ..SignupRequest::default()
            }
        );
    }

    #[test]
    fn latest_value_per_field_wins_regardless_of_interleaving() {
        let events = [
            (SignupField::Username, "b"),
            (SignupField::Email, "bob@"),
            (SignupField::Username, "bo"),
            (SignupField::Password, "x"),
            (SignupField::Email, "bob@example.com"),
            (SignupField::Username, "bob"),
            (SignupField::FullName, "Bob"),
            (SignupField::Password, ""),
        ];
        let mut form = SignupRequest::default();
        for (field, value) in events {
            apply_field(&mut form, field, value.to_string());
        }
        assert_eq!(field_value(&form, SignupField::Email), "bob@example.com");
        assert_eq!(field_value(&form, SignupField::Username), "bob");
        assert_eq!(field_value(&form, SignupField::FullName), "Bob");
        assert_eq!(field_value(&form, SignupField::Password), "");
    }

    #[test]
    fn first_missing_field_follows_display_order() {
        let mut form = SignupRequest::default();
        assert_eq!(first_missing_field(&form), Some(SignupField::Email));

        form.email = "bob@example.com".into();
        form.password = "pw".into();
        assert_eq!(first_missing_field(&form), Some(SignupField::Username));

        form.username = "bob".into();
        form.full_name = " ".into();
        assert_eq!(first_missing_field(&form), None);
    }

    #[test]
    fn submit_label_reflects_pending() {
        assert_eq!(submit_label(true), "Loading...");
        assert_eq!(submit_label(false), "Sign up");
    }
}
