//! Notification request: raw inputs, validation and form encoding.

use std::io::Read;

use crate::priority::Priority;
use crate::sound::Sound;
use crate::{Error, Result};

/// Which optional fields end up in the form body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Attach only the first optional field present, in the order
    /// device, title, url, url_title, priority, sound, timestamp.
    /// Everything else is dropped.
    #[default]
    FirstMatch,
    /// Attach every optional field that is present.
    Independent,
}

/// Unvalidated inputs as collected from flags, environment and arguments.
///
/// Empty strings and zero integers mean "not set".
#[derive(Debug, Clone, Default)]
pub struct RequestDraft {
    pub user: String,
    pub token: String,
    pub device: String,
    pub title: String,
    pub sound: String,
    pub url: String,
    pub url_title: String,
    pub priority: i64,
    pub timestamp: i64,
    /// Positional arguments; at most one is allowed.
    pub args: Vec<String>,
}

impl RequestDraft {
    /// Check every field and resolve the message body.
    ///
    /// `stdin` is only read when no positional argument was given, and only
    /// after all flag checks have passed.
    pub fn validate<R: Read>(self, mut stdin: R) -> Result<NotificationRequest> {
        if self.user.is_empty() || self.token.is_empty() {
            return Err(Error::MissingCredentials {
                user: self.user.is_empty(),
                token: self.token.is_empty(),
            });
        }

        let sound = match self.sound.as_str() {
            "" => None,
            name => Some(name.parse::<Sound>()?),
        };

        if !self.url_title.is_empty() && self.url.is_empty() {
            return Err(Error::OrphanedUrlTitle);
        }

        let priority = Priority::try_from(self.priority)?;

        let message = match self.args.len() {
            0 => {
                let mut input = String::new();
                stdin.read_to_string(&mut input)?;
                if input.is_empty() {
                    return Err(Error::NoMessage);
                }
                input
            }
            1 => self.args.into_iter().next().ok_or(Error::NoMessage)?,
            n => return Err(Error::TooManyArguments(n)),
        };

        Ok(NotificationRequest {
            user: self.user,
            token: self.token,
            message,
            device: non_empty(self.device),
            title: non_empty(self.title),
            sound,
            url: non_empty(self.url),
            url_title: non_empty(self.url_title),
            priority,
            timestamp: (self.timestamp != 0).then_some(self.timestamp),
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// A validated message, ready to send. Only built through [`RequestDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    user: String,
    token: String,
    message: String,
    device: Option<String>,
    title: Option<String>,
    sound: Option<Sound>,
    url: Option<String>,
    url_title: Option<String>,
    priority: Priority,
    timestamp: Option<i64>,
}

impl NotificationRequest {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn sound(&self) -> Option<Sound> {
        self.sound
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn url_title(&self) -> Option<&str> {
        self.url_title.as_deref()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// Optional fields that are set, in precedence order.
    fn optional_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(device) = &self.device {
            fields.push(("device", device.clone()));
        }
        if let Some(title) = &self.title {
            fields.push(("title", title.clone()));
        }
        if let Some(url) = &self.url {
            fields.push(("url", url.clone()));
        }
        if let Some(url_title) = &self.url_title {
            fields.push(("url_title", url_title.clone()));
        }
        if !self.priority.is_normal() {
            fields.push(("priority", self.priority.to_string()));
        }
        if let Some(sound) = self.sound {
            fields.push(("sound", sound.as_str().to_string()));
        }
        if let Some(timestamp) = self.timestamp {
            fields.push(("timestamp", timestamp.to_string()));
        }
        fields
    }

    /// Form body fields: `token`, `user`, `message`, then optional fields per `policy`.
    pub fn form_fields(&self, policy: FieldPolicy) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("token", self.token.clone()),
            ("user", self.user.clone()),
            ("message", self.message.clone()),
        ];

        let optional = self.optional_fields();
        match policy {
            FieldPolicy::FirstMatch => form.extend(optional.into_iter().take(1)),
            FieldPolicy::Independent => form.extend(optional),
        }

        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RequestDraft {
        RequestDraft {
            user: "u1".into(),
            token: "t1".into(),
            args: vec!["hello".into()],
            ..Default::default()
        }
    }

    fn no_stdin() -> &'static [u8] {
        b""
    }

    #[test]
    fn test_minimal_request() {
        let request = draft().validate(no_stdin()).unwrap();
        assert_eq!(request.message(), "hello");
        assert_eq!(
            request.form_fields(FieldPolicy::FirstMatch),
            vec![
                ("token", "t1".to_string()),
                ("user", "u1".to_string()),
                ("message", "hello".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_user_and_token() {
        let err = RequestDraft::default().validate(no_stdin()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingCredentials {
                user: true,
                token: true
            }
        ));

        let err = RequestDraft {
            token: String::new(),
            ..draft()
        }
        .validate(no_stdin())
        .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingCredentials {
                user: false,
                token: true
            }
        ));
    }

    #[test]
    fn test_every_known_sound_accepted() {
        for sound in Sound::ALL {
            let request = RequestDraft {
                sound: sound.as_str().into(),
                ..draft()
            }
            .validate(no_stdin())
            .unwrap();
            assert_eq!(request.sound(), Some(sound));
        }
    }

    #[test]
    fn test_unknown_sound_rejected() {
        for name in ["Pushover", "tugboar", "ding"] {
            let err = RequestDraft {
                sound: name.into(),
                ..draft()
            }
            .validate(no_stdin())
            .unwrap_err();
            assert!(matches!(err, Error::InvalidSound(_)));
        }
    }

    #[test]
    fn test_url_title_requires_url() {
        let err = RequestDraft {
            url_title: "Docs".into(),
            ..draft()
        }
        .validate(no_stdin())
        .unwrap_err();
        assert!(matches!(err, Error::OrphanedUrlTitle));

        let request = RequestDraft {
            url: "https://example.com".into(),
            url_title: "Docs".into(),
            ..draft()
        }
        .validate(no_stdin())
        .unwrap();
        assert_eq!(request.url(), Some("https://example.com"));
        assert_eq!(request.url_title(), Some("Docs"));

        let request = RequestDraft {
            url: "https://example.com".into(),
            ..draft()
        }
        .validate(no_stdin())
        .unwrap();
        assert_eq!(request.url_title(), None);
    }

    #[test]
    fn test_priority_range() {
        for priority in [-2, -1, 0, 1, 2] {
            assert!(RequestDraft {
                priority,
                ..draft()
            }
            .validate(no_stdin())
            .is_ok());
        }
        for priority in [-3, 3, 42] {
            let err = RequestDraft {
                priority,
                ..draft()
            }
            .validate(no_stdin())
            .unwrap_err();
            assert!(matches!(err, Error::InvalidPriority(p) if p == priority));
        }
    }

    #[test]
    fn test_message_from_stdin_when_no_argument() {
        let request = RequestDraft {
            args: vec![],
            ..draft()
        }
        .validate(&b"disk almost full\n"[..])
        .unwrap();
        assert_eq!(request.message(), "disk almost full\n");
    }

    #[test]
    fn test_empty_stdin_is_no_message() {
        let err = RequestDraft {
            args: vec![],
            ..draft()
        }
        .validate(&b""[..])
        .unwrap_err();
        assert!(matches!(err, Error::NoMessage));
    }

    #[test]
    fn test_whitespace_stdin_sent_as_is() {
        let request = RequestDraft {
            args: vec![],
            ..draft()
        }
        .validate(&b"  \n"[..])
        .unwrap();
        assert_eq!(request.message(), "  \n");
    }

    #[test]
    fn test_argument_kept_verbatim_and_stdin_ignored() {
        let request = RequestDraft {
            args: vec!["  spaced out \t".into()],
            ..draft()
        }
        .validate(&b"ignored"[..])
        .unwrap();
        assert_eq!(request.message(), "  spaced out \t");
    }

    #[test]
    fn test_too_many_arguments() {
        let err = RequestDraft {
            args: vec!["one".into(), "two".into(), "three".into()],
            ..draft()
        }
        .validate(no_stdin())
        .unwrap_err();
        assert!(matches!(err, Error::TooManyArguments(3)));
    }

    #[test]
    fn test_flag_errors_reported_before_reading_stdin() {
        struct Unreadable;
        impl Read for Unreadable {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                panic!("stdin must not be read");
            }
        }

        let err = RequestDraft {
            args: vec![],
            sound: "bell".into(),
            ..draft()
        }
        .validate(Unreadable)
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSound(_)));
    }

    #[test]
    fn test_first_match_attaches_only_device() {
        let request = RequestDraft {
            device: "phone".into(),
            title: "Alert".into(),
            ..draft()
        }
        .validate(no_stdin())
        .unwrap();

        assert_eq!(request.title(), Some("Alert"));

        let form = request.form_fields(FieldPolicy::FirstMatch);
        assert!(form.contains(&("device", "phone".to_string())));
        assert!(!form.iter().any(|(name, _)| *name == "title"));
        assert_eq!(form.len(), 4);
    }

    #[test]
    fn test_first_match_precedence_order() {
        let request = RequestDraft {
            sound: "siren".into(),
            timestamp: 1_700_000_000,
            priority: -1,
            ..draft()
        }
        .validate(no_stdin())
        .unwrap();

        let form = request.form_fields(FieldPolicy::FirstMatch);
        assert_eq!(form.last(), Some(&("priority", "-1".to_string())));
        assert_eq!(form.len(), 4);
    }

    #[test]
    fn test_independent_attaches_everything() {
        let request = RequestDraft {
            device: "phone".into(),
            title: "Alert".into(),
            sound: "none".into(),
            url: "https://example.com".into(),
            url_title: "Open".into(),
            priority: 2,
            timestamp: 1_700_000_000,
            ..draft()
        }
        .validate(no_stdin())
        .unwrap();

        let names: Vec<&str> = request
            .form_fields(FieldPolicy::Independent)
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(
            names,
            vec![
                "token",
                "user",
                "message",
                "device",
                "title",
                "url",
                "url_title",
                "priority",
                "sound",
                "timestamp"
            ]
        );
    }

    #[test]
    fn test_zero_timestamp_is_unset() {
        let request = draft().validate(no_stdin()).unwrap();
        assert_eq!(request.timestamp(), None);
        assert!(request.priority().is_normal());
    }
}
