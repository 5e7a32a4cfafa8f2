//! Natural-gas component identifiers.

use crate::error::FluidError;

/// Components covered by the equation of state.
///
/// The identifier doubles as the key into the component database and the
/// binary interaction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Component {
    /// Methane (CH₄)
    Methane,
    /// Ethane (C₂H₆)
    Ethane,
    /// Propane (C₃H₈)
    Propane,
    /// Isobutane (i-C₄H₁₀)
    IsoButane,
    /// n-Butane (n-C₄H₁₀)
    NButane,
    /// Isopentane (i-C₅H₁₂)
    IsoPentane,
    /// n-Pentane (n-C₅H₁₂)
    NPentane,
    /// n-Hexane (n-C₆H₁₄)
    NHexane,
    /// Nitrogen (N₂)
    Nitrogen,
    /// Carbon dioxide (CO₂)
    CarbonDioxide,
    /// Helium (He)
    Helium,
    /// Hydrogen (H₂)
    Hydrogen,
}

impl Component {
    pub const COUNT: usize = 12;

    pub const ALL: [Component; Self::COUNT] = [
        Component::Methane,
        Component::Ethane,
        Component::Propane,
        Component::IsoButane,
        Component::NButane,
        Component::IsoPentane,
        Component::NPentane,
        Component::NHexane,
        Component::Nitrogen,
        Component::CarbonDioxide,
        Component::Helium,
        Component::Hydrogen,
    ];

    /// Dense index into per-component tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(&self) -> &'static str {
        match self {
            Component::Methane => "CH4",
            Component::Ethane => "C2H6",
            Component::Propane => "C3H8",
            Component::IsoButane => "iC4H10",
            Component::NButane => "nC4H10",
            Component::IsoPentane => "iC5H12",
            Component::NPentane => "nC5H12",
            Component::NHexane => "nC6H14",
            Component::Nitrogen => "N2",
            Component::CarbonDioxide => "CO2",
            Component::Helium => "He",
            Component::Hydrogen => "H2",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Component::Methane => "Methane",
            Component::Ethane => "Ethane",
            Component::Propane => "Propane",
            Component::IsoButane => "Isobutane",
            Component::NButane => "n-Butane",
            Component::IsoPentane => "Isopentane",
            Component::NPentane => "n-Pentane",
            Component::NHexane => "n-Hexane",
            Component::Nitrogen => "Nitrogen",
            Component::CarbonDioxide => "Carbon Dioxide",
            Component::Helium => "Helium",
            Component::Hydrogen => "Hydrogen",
        }
    }

    /// Names accepted by [`str::parse`] besides the key and display name.
    ///
    /// Includes the Russian names used by GOST-style input sheets.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Component::Methane => &["метан"],
            Component::Ethane => &["этан"],
            Component::Propane => &["пропан", "n-propane"],
            Component::IsoButane => &["i-butane", "и-бутан"],
            Component::NButane => &["butane", "nbutane", "н-бутан"],
            Component::IsoPentane => &["i-pentane", "и-пентан"],
            Component::NPentane => &["pentane", "npentane", "н-пентан"],
            Component::NHexane => &["hexane", "nhexane", "н-гексан"],
            Component::Nitrogen => &["азот"],
            Component::CarbonDioxide => &["carbondioxide", "диоксид углерода"],
            Component::Helium => &["гелий"],
            Component::Hydrogen => &["водород"],
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Component {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        Component::ALL
            .into_iter()
            .find(|c| {
                c.key().to_lowercase() == wanted
                    || c.display_name().to_lowercase() == wanted
                    || c.aliases().contains(&wanted.as_str())
            })
            .ok_or(FluidError::UnknownComponent {
                name: s.trim().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, c) in Component::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("CH4".parse::<Component>().unwrap(), Component::Methane);
        assert_eq!("methane".parse::<Component>().unwrap(), Component::Methane);
        assert_eq!("Метан".parse::<Component>().unwrap(), Component::Methane);
        assert_eq!(
            "Диоксид   углерода".parse::<Component>().unwrap(),
            Component::CarbonDioxide
        );
        assert_eq!("и-бутан".parse::<Component>().unwrap(), Component::IsoButane);
        assert_eq!("n-hexane".parse::<Component>().unwrap(), Component::NHexane);
    }

    #[test]
    fn parse_unknown() {
        let err = "argon".parse::<Component>().unwrap_err();
        assert_eq!(
            err,
            FluidError::UnknownComponent {
                name: "argon".to_string()
            }
        );
    }

    #[test]
    fn canonical_key_roundtrip() {
        for c in Component::ALL {
            assert_eq!(c.key().parse::<Component>().unwrap(), c);
            assert_eq!(c.display_name().parse::<Component>().unwrap(), c);
        }
    }
}
