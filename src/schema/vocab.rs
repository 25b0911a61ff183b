//! Accepted column names per channel and semantic role.
//!
//! Lookups against these lists are exact string matches only. Substring or
//! fuzzy matching would misclassify headers like `urlencoded_notes` as a URL
//! column, so it is deliberately not offered.

use std::fmt;

use crate::types::Channel;

/// Semantic role a column can play in a channel's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The main text-bearing column (URL string, SMS body, ...).
    Text,
    /// The label-bearing column.
    Label,
    /// Email subject line.
    Subject,
    /// Email body.
    Body,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Text => f.write_str("text"),
            Role::Label => f.write_str("label"),
            Role::Subject => f.write_str("subject"),
            Role::Body => f.write_str("body"),
        }
    }
}

const URL_TEXT: &[&str] = &["url", "link", "website", "domain", "uri", "phishing_url"];
const URL_LABEL: &[&str] = &["label", "type", "class", "result", "target", "phishing", "label_int"];

const SMS_TEXT: &[&str] = &[
    "message", "text", "sms", "v2", "content", "msg", "body", "data", "sms_text",
];
const SMS_LABEL: &[&str] = &["label", "type", "v1", "class", "category", "target", "ham_spam"];

const EMAIL_SUBJECT: &[&str] = &["subject", "sub", "title", "text_formatsubject", "email_subject"];
const EMAIL_BODY: &[&str] = &[
    "body", "content", "message", "text", "email", "data", "text_formatbody", "email_text",
];
const EMAIL_LABEL: &[&str] = &[
    "label", "type", "class", "category", "target", "spam", "check", "checklabelsort",
];

/// The accepted column names for `role` in `channel`.
///
/// Returns an empty slice for roles a channel does not use (e.g. subject/body
/// outside email).
pub fn vocabulary(channel: Channel, role: Role) -> &'static [&'static str] {
    match (channel, role) {
        (Channel::Url, Role::Text) => URL_TEXT,
        (Channel::Url, Role::Label) => URL_LABEL,
        (Channel::Sms, Role::Text) => SMS_TEXT,
        (Channel::Sms, Role::Label) => SMS_LABEL,
        (Channel::Email, Role::Subject) => EMAIL_SUBJECT,
        (Channel::Email, Role::Body) => EMAIL_BODY,
        (Channel::Email, Role::Label) => EMAIL_LABEL,
        _ => &[],
    }
}
