/// Canonical answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// Accepts exactly `Y` or `N` in either case, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Option<YesNo> {
        match input.trim() {
            "y" | "Y" => Some(YesNo::Yes),
            "n" | "N" => Some(YesNo::No),
            _ => None,
        }
    }
}
