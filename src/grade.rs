use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    SS,
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Legend order used by every hiscores chart.
    pub const ALL: [Grade; 7] = [
        Grade::SS,
        Grade::S,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "SS" => Some(Grade::SS),
            "S" => Some(Grade::S),
            "A" => Some(Grade::A),
            "B" => Some(Grade::B),
            "C" => Some(Grade::C),
            "D" => Some(Grade::D),
            "F" => Some(Grade::F),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::SS => "SS",
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Series color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            Grade::SS => "#ffd166",
            Grade::S => "#f4a261",
            Grade::A => "#06d6a0",
            Grade::B => "#118ab2",
            Grade::C => "#9b5de5",
            Grade::D => "#ef476f",
            Grade::F => "#8d99ae",
        }
    }

    pub fn position(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Grade;

    #[test]
    fn all_is_in_legend_order_and_labels_round_trip() {
        for (idx, grade) in Grade::ALL.iter().enumerate() {
            assert_eq!(grade.position(), idx);
            assert_eq!(Grade::parse(grade.label()), Some(*grade));
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(Grade::parse("E"), None);
        assert_eq!(Grade::parse(""), None);
        assert_eq!(Grade::parse("s"), None);
    }
}
