//! Request schemas
//!
//! Pure functions that check an incoming JSON body against the fixed contract
//! for each endpoint and return the typed input on success. They never touch
//! storage and never produce client-facing messages; callers map the returned
//! [`SharedError`] to whatever their route reports.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::error::SharedError;

/// Body of `POST /user/signup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupInput {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `POST /user/signin`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninInput {
    pub email: String,
    pub password: String,
}

/// Body of `POST /blog`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
}

/// Body of `PUT /blog`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePostInput {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Parse a raw request body as JSON
pub fn parse_json(body: &[u8]) -> Result<Value, SharedError> {
    Ok(serde_json::from_slice(body)?)
}

pub fn validate_signup(body: &Value) -> Result<SignupInput, SharedError> {
    let input: SignupInput = decode(body)?;
    check_email(&input.email)?;
    check_password(&input.password)?;
    Ok(input)
}

pub fn validate_signin(body: &Value) -> Result<SigninInput, SharedError> {
    let input: SigninInput = decode(body)?;
    check_email(&input.email)?;
    check_password(&input.password)?;
    Ok(input)
}

pub fn validate_create_post(body: &Value) -> Result<CreatePostInput, SharedError> {
    decode(body)
}

pub fn validate_update_post(body: &Value) -> Result<UpdatePostInput, SharedError> {
    decode(body)
}

fn decode<T: for<'de> Deserialize<'de>>(body: &Value) -> Result<T, SharedError> {
    if !body.is_object() {
        return Err(SharedError::serialization("request body must be a JSON object"));
    }
    Ok(T::deserialize(body)?)
}

/// Accepts `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && !host.starts_with('.') && !host.ends_with('.') && tld.len() >= 2
        }
        None => false,
    }
}

fn check_email(email: &str) -> Result<(), SharedError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SharedError::validation("email", "must be a valid email address"))
    }
}

fn check_password(password: &str) -> Result<(), SharedError> {
    if password.is_empty() {
        Err(SharedError::validation("password", "must not be empty"))
    } else {
        Ok(())
    }
}
