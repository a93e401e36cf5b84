//! Western dynamic names

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Volume {
    Ppppp,
    Pppp,
    Ppp,
    Pp,
    P,
    Mp,
    Mf,
    F,
    Ff,
    Fff,
    Ffff,
    Fffff,
}

impl Volume {
    pub fn parse(token: &str) -> Option<Volume> {
        match token {
            "ppppp" => Some(Volume::Ppppp),
            "pppp" => Some(Volume::Pppp),
            "ppp" => Some(Volume::Ppp),
            "pp" => Some(Volume::Pp),
            "p" => Some(Volume::P),
            "mp" => Some(Volume::Mp),
            "mf" => Some(Volume::Mf),
            "f" => Some(Volume::F),
            "ff" => Some(Volume::Ff),
            "fff" => Some(Volume::Fff),
            "ffff" => Some(Volume::Ffff),
            "fffff" => Some(Volume::Fffff),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Volume::Ppppp => "ppppp",
            Volume::Pppp => "pppp",
            Volume::Ppp => "ppp",
            Volume::Pp => "pp",
            Volume::P => "p",
            Volume::Mp => "mp",
            Volume::Mf => "mf",
            Volume::F => "f",
            Volume::Ff => "ff",
            Volume::Fff => "fff",
            Volume::Ffff => "ffff",
            Volume::Fffff => "fffff",
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
