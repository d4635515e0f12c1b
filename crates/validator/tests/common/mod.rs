//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use rulekit_validator::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub first_name: String,
    pub email: String,
    pub age: i32,
}

impl User {
    pub fn new(first_name: &str, email: &str, age: i32) -> Self {
        Self {
            first_name: first_name.into(),
            email: email.into(),
            age,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Reader = 0,
    Editor = 1,
    Admin = 2,
}

impl TryFrom<i64> for Role {
    type Error = i64;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Reader),
            1 => Ok(Self::Editor),
            2 => Ok(Self::Admin),
            other => Err(other),
        }
    }
}

enum_value!(Role);

#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub info: Option<String>,
    pub city: String,
}

opaque_value!(UserInfo);

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub user_info: Option<UserInfo>,
    pub role_code: i32,
}

impl Member {
    pub fn new(name: &str, user_info: Option<UserInfo>) -> Self {
        Self {
            name: name.into(),
            user_info,
            role_code: 0,
        }
    }
}

/// The rules of the signup form: a name of at least two letters, an email
/// and a plausible age.
pub fn user_rules() -> ValidatorBuilder<User> {
    let mut rules = ValidatorBuilder::new();
    rules
        .rule_for(property!(User => first_name))
        .not_empty()
        .min_length(2);
    rules.rule_for(property!(User => email)).is_email();
    rules.rule_for(property!(User => age)).range(1, 120);
    rules
}

pub struct UserValidator;

impl AbstractValidator for UserValidator {
    type Model = User;

    fn configure(rules: &mut ValidatorBuilder<User>) -> Result<(), ValidatorError> {
        rules
            .rule_for(property!(User => first_name))
            .not_empty()
            .min_length(2);
        rules.rule_for(property!(User => email)).is_email();
        rules.rule_for(property!(User => age)).range(1, 120);
        Ok(())
    }
}

pub fn user_info_rules() -> ValidatorBuilder<UserInfo> {
    let mut rules = ValidatorBuilder::new();
    rules
        .rule_for(property!(UserInfo => info))
        .not_empty()
        .with_message("Info is required");
    rules.rule_for(property!(UserInfo => city)).min_length(2);
    rules
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
