//! Property-based tests for request validators

use proptest::prelude::*;
use serde_json::json;

use inkpost::shared::validation::{
    is_valid_email, validate_create_post, validate_signin, validate_signup, validate_update_post,
};

proptest! {
    #[test]
    fn test_email_without_at_is_rejected(email in "[^@]*") {
        prop_assert!(!is_valid_email(&email));
    }

    #[test]
    fn test_simple_emails_are_accepted(
        local in "[a-z0-9]{1,12}",
        host in "[a-z]{1,12}",
        tld in "[a-z]{2,5}",
    ) {
        let email = format!("{}@{}.{}", local, host, tld);
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn test_any_non_empty_password_is_accepted(password in ".{1,40}") {
        let body = json!({"email": "a@example.com", "password": password.clone()});
        let input = validate_signup(&body).unwrap();
        prop_assert_eq!(input.password, password.clone());

        let body = json!({"email": "a@example.com", "password": password.clone()});
        let input = validate_signin(&body).unwrap();
        prop_assert_eq!(input.password, password);
    }

    #[test]
    fn test_any_string_title_and_content_are_accepted(title in ".*", content in ".*") {
        let body = json!({"title": title.clone(), "content": content.clone()});
        let input = validate_create_post(&body).unwrap();
        prop_assert_eq!(input.title, title);
        prop_assert_eq!(input.content, content);
    }

    #[test]
    fn test_update_requires_an_id(title in ".*", content in ".*") {
        let body = json!({"title": title, "content": content});
        prop_assert!(validate_update_post(&body).is_err());
    }
}
