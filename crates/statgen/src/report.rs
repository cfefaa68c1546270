use std::fmt;
use std::io::Write;

use roster::Athlete;

/// Four-line console rendering of an athlete's stat line.
pub struct StatReport<'a> {
    athlete: &'a Athlete,
}

impl<'a> StatReport<'a> {
    pub fn new(athlete: &'a Athlete) -> Self {
        Self { athlete }
    }
}

impl fmt::Display for StatReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player: {}", self.athlete.name)?;
        writeln!(f, "Points: {}", self.athlete.points)?;
        writeln!(f, "Assists: {}", self.athlete.assists)?;
        writeln!(f, "Rebounds: {}", self.athlete.rebounds)
    }
}

pub fn render(athlete: &Athlete) -> String {
    StatReport::new(athlete).to_string()
}

pub fn display_stats<W: Write>(athlete: &Athlete, mut out: W) -> std::io::Result<()> {
    write!(out, "{}", StatReport::new(athlete))?;
    out.flush()
}
