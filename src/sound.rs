//! Notification sounds accepted by Pushover.
//!
//! See <https://pushover.net/api#sounds>. Names are case-sensitive.

use std::fmt;
use std::str::FromStr;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Alien,
    Bike,
    Bugle,
    CashRegister,
    Classical,
    Climb,
    Cosmic,
    Echo,
    Falling,
    Gamelan,
    Incoming,
    Intermission,
    Magic,
    Mechanical,
    Persistent,
    PianoBar,
    Pushover,
    Siren,
    SpaceAlarm,
    Tugboat,
    UpDown,
    /// Silent
    None,
}

impl Sound {
    pub const ALL: [Sound; 22] = [
        Sound::Alien,
        Sound::Bike,
        Sound::Bugle,
        Sound::CashRegister,
        Sound::Classical,
        Sound::Climb,
        Sound::Cosmic,
        Sound::Echo,
        Sound::Falling,
        Sound::Gamelan,
        Sound::Incoming,
        Sound::Intermission,
        Sound::Magic,
        Sound::Mechanical,
        Sound::Persistent,
        Sound::PianoBar,
        Sound::Pushover,
        Sound::Siren,
        Sound::SpaceAlarm,
        Sound::Tugboat,
        Sound::UpDown,
        Sound::None,
    ];

    /// Identifier sent in the `sound` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Alien => "alien",
            Sound::Bike => "bike",
            Sound::Bugle => "bugle",
            Sound::CashRegister => "cashregister",
            Sound::Classical => "classical",
            Sound::Climb => "climb",
            Sound::Cosmic => "cosmic",
            Sound::Echo => "echo",
            Sound::Falling => "falling",
            Sound::Gamelan => "gamelan",
            Sound::Incoming => "incoming",
            Sound::Intermission => "intermission",
            Sound::Magic => "magic",
            Sound::Mechanical => "mechanical",
            Sound::Persistent => "persistent",
            Sound::PianoBar => "pianobar",
            Sound::Pushover => "pushover",
            Sound::Siren => "siren",
            Sound::SpaceAlarm => "spacealarm",
            Sound::Tugboat => "tugboat",
            Sound::UpDown => "updown",
            Sound::None => "none",
        }
    }
}

impl FromStr for Sound {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sound::ALL
            .iter()
            .copied()
            .find(|sound| sound.as_str() == s)
            .ok_or_else(|| Error::InvalidSound(s.to_string()))
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
