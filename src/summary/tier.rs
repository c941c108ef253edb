use std::fmt;

/// Competitive skill tier, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
}

impl Tier {
    /// Classifies a skill rating into its tier.
    ///
    /// Bands are inclusive: Bronze up to 1499, then one tier per 500 points
    /// up to Master (3500-3999). Everything from 4000 up is Grandmaster.
    /// A rating of 0 never reaches here from a lookup and is classified Bronze.
    pub fn classify(rating: u32) -> Self {
        match rating {
            0..=1499 => Tier::Bronze,
            1500..=1999 => Tier::Silver,
            2000..=2499 => Tier::Gold,
            2500..=2999 => Tier::Platinum,
            3000..=3499 => Tier::Diamond,
            3500..=3999 => Tier::Master,
            _ => Tier::Grandmaster,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
            Tier::Master => "Master",
            Tier::Grandmaster => "Grandmaster",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let cases = [
            (1, Tier::Bronze),
            (1499, Tier::Bronze),
            (1500, Tier::Silver),
            (1999, Tier::Silver),
            (2000, Tier::Gold),
            (2499, Tier::Gold),
            (2500, Tier::Platinum),
            (2999, Tier::Platinum),
            (3000, Tier::Diamond),
            (3499, Tier::Diamond),
            (3500, Tier::Master),
            (3999, Tier::Master),
            (4000, Tier::Grandmaster),
            (5000, Tier::Grandmaster),
            (u32::MAX, Tier::Grandmaster),
        ];

        for (rating, expected) in cases {
            assert_eq!(Tier::classify(rating), expected, "rating {rating}");
        }
    }

    #[test]
    fn test_classification_is_monotonic() {
        let mut previous = Tier::classify(1);
        for rating in (1..=5000).step_by(7) {
            let tier = Tier::classify(rating);
            assert!(tier >= previous, "tier dropped at {rating}");
            previous = tier;
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Tier::Platinum.to_string(), "Platinum");
        assert_eq!(Tier::Grandmaster.to_string(), "Grandmaster");
        assert_eq!(format!("{}", Tier::classify(1)), "Bronze");
    }
}
