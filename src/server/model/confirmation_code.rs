//! Confirmation code domain models, generation and classification.
//!
//! Codes are short numeric strings mailed to a user to prove control of an email address.
//! A user may hold several outstanding codes at once. Classification of a submitted code
//! looks for a value match across all of them, then checks the expiry of the matches:
//!
//! 1. nothing submitted, or the user has no codes: `NoCode`
//! 2. no stored code has the submitted value: `Mismatch`
//! 3. every matching code has expired: `Expired`
//! 4. otherwise: `Valid`

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{
    model::confirmation_code::{
        CodeStatusDto, CodeVerificationDto, ConfirmationCodeDto, EmailValidationDto,
        VerifyCodeDto,
    },
    server::{
        config::{CodeSettings, MAX_CODE_LENGTH},
        validation::{max_length, not_blank, FieldError, Rule, Validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationCode {
    pub id: String,
    pub user_id: String,
    /// Email the code was sent to, captured when the code was issued.
    pub email: Option<String>,
    pub code: String,
    pub expiry_date: DateTime<Utc>,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub last_modified_by: String,
    pub last_modified_date: DateTime<Utc>,
}

impl ConfirmationCode {
    pub fn from_entity(entity: entity::confirmation_code::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            email: entity.email,
            code: entity.code,
            expiry_date: entity.expiry_date,
            created_by: entity.created_by,
            created_date: entity.created_date,
            last_modified_by: entity.last_modified_by,
            last_modified_date: entity.last_modified_date,
        }
    }

    pub fn into_dto(self) -> ConfirmationCodeDto {
        ConfirmationCodeDto {
            id: self.id,
            user_id: self.user_id,
            email: self.email,
            code: self.code,
            expiry_date: self.expiry_date,
            created_by: self.created_by,
            created_date: self.created_date,
            last_modified_by: self.last_modified_by,
            last_modified_date: self.last_modified_date,
        }
    }

    /// A code expires strictly after its expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date < now
    }
}

/// Outcome of checking a submitted code against a user's stored codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStatus {
    NoCode,
    /// At least one stored code with the submitted value is unexpired.
    Valid,
    /// Every stored code with the submitted value has expired. A single unexpired
    /// match gives `Valid` instead, and codes with other values are ignored. See
    /// [`classify_code`] and the module docs for the full order.
    Expired,
    Mismatch,
}

impl CodeStatus {
    /// HTTP status returned by `POST /verifyCode`.
    pub fn verification_status(self) -> StatusCode {
        match self {
            Self::Valid => StatusCode::OK,
            Self::Expired | Self::Mismatch => StatusCode::BAD_REQUEST,
            Self::NoCode => StatusCode::NOT_FOUND,
        }
    }

    /// HTTP status returned by `POST /users/{id}/email-validations`.
    pub fn email_validation_status(self) -> StatusCode {
        match self {
            Self::Valid => StatusCode::ACCEPTED,
            other => other.verification_status(),
        }
    }

    pub fn into_dto(self) -> CodeVerificationDto {
        let status = match self {
            Self::NoCode => CodeStatusDto::NoCode,
            Self::Valid => CodeStatusDto::Valid,
            Self::Expired => CodeStatusDto::Expired,
            Self::Mismatch => CodeStatusDto::Mismatch,
        };

        CodeVerificationDto { status }
    }
}

/// Classifies `submitted` against `stored` at instant `now`. Never fails.
pub fn classify_code(
    submitted: Option<&str>,
    stored: &[ConfirmationCode],
    now: DateTime<Utc>,
) -> CodeStatus {
    let Some(submitted) = submitted.filter(|code| !code.is_empty()) else {
        return CodeStatus::NoCode;
    };

    if stored.is_empty() {
        return CodeStatus::NoCode;
    }

    let mut matches = stored.iter().filter(|c| c.code == submitted).peekable();

    if matches.peek().is_none() {
        return CodeStatus::Mismatch;
    }

    if matches.any(|c| !c.is_expired(now)) {
        CodeStatus::Valid
    } else {
        CodeStatus::Expired
    }
}

/// Draws `length` decimal digits uniformly from `rng`. Leading zeros are kept.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Row level insert for a newly issued code.
#[derive(Debug, Clone)]
pub struct CreateCodeParams {
    pub user_id: String,
    pub email: Option<String>,
    pub code: String,
    pub created_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub actor: String,
}

impl CreateCodeParams {
    /// Generates a fresh code for a user, valid from `now` for `settings.expiry`.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        settings: &CodeSettings,
        user_id: &str,
        email: Option<String>,
        now: DateTime<Utc>,
        actor: &str,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            email,
            code: generate_code(rng, settings.length),
            created_date: now,
            expiry_date: now + settings.expiry,
            actor: actor.to_string(),
        }
    }
}

fn verify_user_id(dto: &VerifyCodeDto) -> Vec<FieldError> {
    not_blank("user_id", Some(dto.user_id.as_str()))
        .into_iter()
        .collect()
}

fn verify_code_length(dto: &VerifyCodeDto) -> Vec<FieldError> {
    max_length("code", dto.code.as_deref(), MAX_CODE_LENGTH)
        .into_iter()
        .collect()
}

impl Validate for VerifyCodeDto {
    fn rules() -> Vec<Rule<Self>> {
        vec![verify_user_id as Rule<Self>, verify_code_length]
    }
}

fn validation_code_length(dto: &EmailValidationDto) -> Vec<FieldError> {
    max_length(
        "confirmation_code",
        dto.confirmation_code.as_deref(),
        MAX_CODE_LENGTH,
    )
    .into_iter()
    .collect()
}

impl Validate for EmailValidationDto {
    fn rules() -> Vec<Rule<Self>> {
        vec![validation_code_length as Rule<Self>]
    }
}
