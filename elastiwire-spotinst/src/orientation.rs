//! Placement orientation (the Elastigroup "availabilityVsCost" strategy)

use std::fmt;

use serde::Serialize;

/// Balance between cost, availability and zone distribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    #[default]
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "costOriented")]
    Cost,
    #[serde(rename = "availabilityOriented")]
    Availability,
    #[serde(rename = "equalAzDistribution")]
    EqualZoneDistribution,
}

impl Orientation {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Balanced => "balanced",
            Orientation::Cost => "costOriented",
            Orientation::Availability => "availabilityOriented",
            Orientation::EqualZoneDistribution => "equalAzDistribution",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a free-form orientation to the closed set the API accepts
///
/// Unrecognized values fall back to [`Orientation::Balanced`].
pub fn normalize_orientation(orientation: Option<&str>) -> Orientation {
    let Some(orientation) = orientation else {
        return Orientation::Balanced;
    };

    match orientation {
        "cost" => Orientation::Cost,
        "availability" => Orientation::Availability,
        "equal-distribution" => Orientation::EqualZoneDistribution,
        _ => Orientation::Balanced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_orientation() {
        assert_eq!(normalize_orientation(None), Orientation::Balanced);
        assert_eq!(normalize_orientation(Some("cost")), Orientation::Cost);
        assert_eq!(
            normalize_orientation(Some("availability")),
            Orientation::Availability
        );
        assert_eq!(
            normalize_orientation(Some("equal-distribution")),
            Orientation::EqualZoneDistribution
        );
    }

    #[test]
    fn test_unknown_orientation_falls_back_to_balanced() {
        assert_eq!(
            normalize_orientation(Some("unknown-value")),
            Orientation::Balanced
        );
        assert_eq!(normalize_orientation(Some("")), Orientation::Balanced);
        // Wire values are not accepted as input
        assert_eq!(
            normalize_orientation(Some("costOriented")),
            Orientation::Balanced
        );
    }

    #[test]
    fn test_orientation_wire_format() {
        assert_eq!(Orientation::default().to_string(), "balanced");
        assert_eq!(
            serde_json::to_string(&Orientation::EqualZoneDistribution).unwrap(),
            "\"equalAzDistribution\""
        );
    }
}
