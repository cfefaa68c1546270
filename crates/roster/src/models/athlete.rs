/// One athlete and their generated stat line.
///
/// The name is kept exactly as entered, including surrounding whitespace,
/// and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Athlete {
    pub name: String,
    pub points: u32,
    pub assists: u32,
    pub rebounds: u32,
}

impl Athlete {
    pub fn new(name: impl Into<String>, points: u32, assists: u32, rebounds: u32) -> Self {
        Self {
            name: name.into(),
            points,
            assists,
            rebounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_kept_verbatim() {
        let athlete = Athlete::new("  LeBron James ", 1, 2, 3);
        assert_eq!(athlete.name, "  LeBron James ");
    }

    #[test]
    fn test_empty_name_allowed() {
        let athlete = Athlete::new("", 0, 0, 0);
        assert!(athlete.name.is_empty());
    }

    #[test]
    fn test_new_assigns_stats_in_order() {
        let athlete = Athlete::new("Max", 40, 10, 20);
        assert_eq!((athlete.points, athlete.assists, athlete.rebounds), (40, 10, 20));
    }
}
