//! Reference lists the entry screen offers as choices.
//!
//! Codes follow the VDYP7 genus (SP0) and BEC zone definition files.
//! Lookups are advisory only: the store accepts codes that are not listed.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Genus (SP0) definitions
// ---------------------------------------------------------------------------

/// A VDYP genus-level species code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genus {
    /// SP0 code, e.g. `"PL"`.
    pub code: &'static str,
    /// Common name.
    pub name: &'static str,
}

/// The sixteen SP0 codes in definition-file order.
pub const GENERA: [Genus; 16] = [
    Genus { code: "AC", name: "Poplar" },
    Genus { code: "AT", name: "Aspen" },
    Genus { code: "B", name: "True Fir" },
    Genus { code: "C", name: "Cedar" },
    Genus { code: "D", name: "Alder" },
    Genus { code: "E", name: "Birch" },
    Genus { code: "F", name: "Douglas Fir" },
    Genus { code: "H", name: "Hemlock" },
    Genus { code: "L", name: "Larch" },
    Genus { code: "MB", name: "Maple" },
    Genus { code: "PA", name: "White-bark Pine" },
    Genus { code: "PL", name: "Lodgepole Pine" },
    Genus { code: "PW", name: "White Pine" },
    Genus { code: "PY", name: "Yellow Pine" },
    Genus { code: "S", name: "Spruce" },
    Genus { code: "Y", name: "Yellow Cedar" },
];

/// Look up a genus by code, ignoring ASCII case.
#[must_use]
pub fn genus(code: &str) -> Option<&'static Genus> {
    GENERA.iter().find(|g| g.code.eq_ignore_ascii_case(code.trim()))
}

/// Label for a species code: `"PL - Lodgepole Pine"`, or the bare code if unlisted.
#[must_use]
pub fn species_label(code: &str) -> String {
    match genus(code) {
        Some(g) => format!("{} - {}", g.code, g.name),
        None => code.to_string(),
    }
}

// ---------------------------------------------------------------------------
// BEC zones
// ---------------------------------------------------------------------------

/// Province region a BEC zone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BecRegion {
    /// Coastal zones.
    Coast,
    /// Interior zones.
    Interior,
}

/// A Biogeoclimatic Ecosystem Classification zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BecZone {
    /// Zone alias, e.g. `"CWH"`.
    pub code: &'static str,
    /// Region used to pick coastal or interior curves.
    pub region: BecRegion,
    /// Full zone name.
    pub name: &'static str,
}

/// The fourteen BEC zones known to VDYP7.
pub const BEC_ZONES: [BecZone; 14] = [
    BecZone { code: "AT", region: BecRegion::Interior, name: "Alpine Tundra" },
    BecZone { code: "BG", region: BecRegion::Interior, name: "Bunchgrass" },
    BecZone { code: "BWBS", region: BecRegion::Interior, name: "Boreal White and Black Spruce" },
    BecZone { code: "CDF", region: BecRegion::Coast, name: "Coastal Douglas Fir" },
    BecZone { code: "CWH", region: BecRegion::Coast, name: "Coastal Western Hemlock" },
    BecZone { code: "ESSF", region: BecRegion::Interior, name: "Engelmann Spruce -SubAlpine Fir" },
    BecZone { code: "ICH", region: BecRegion::Interior, name: "Interior Cedar-Hemlock" },
    BecZone { code: "IDF", region: BecRegion::Interior, name: "Interior Douglas Fir" },
    BecZone { code: "MH", region: BecRegion::Coast, name: "Mountain Hemlock" },
    BecZone { code: "MS", region: BecRegion::Interior, name: "Montane Spruce" },
    BecZone { code: "PP", region: BecRegion::Interior, name: "Ponderosa Pine" },
    BecZone { code: "SBPS", region: BecRegion::Interior, name: "SubBoreal Pine-Spruce" },
    BecZone { code: "SBS", region: BecRegion::Interior, name: "SubBoreal Spruce" },
    BecZone { code: "SWB", region: BecRegion::Interior, name: "Spruce-Willow-Birch" },
];

/// Look up a BEC zone by alias, ignoring ASCII case.
#[must_use]
pub fn bec_zone(code: &str) -> Option<&'static BecZone> {
    BEC_ZONES.iter().find(|z| z.code.eq_ignore_ascii_case(code.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genus_lookup_ignores_case() {
        assert_eq!(genus("pl").map(|g| g.name), Some("Lodgepole Pine"));
        assert!(genus("XX").is_none());
    }

    #[test]
    fn species_label_falls_back_to_code() {
        assert_eq!(species_label("F"), "F - Douglas Fir");
        assert_eq!(species_label("FD"), "FD");
    }

    #[test]
    fn coastal_zones() {
        let coastal: Vec<&str> = BEC_ZONES
            .iter()
            .filter(|z| z.region == BecRegion::Coast)
            .map(|z| z.code)
            .collect();
        assert_eq!(coastal, ["CDF", "CWH", "MH"]);
        assert_eq!(bec_zone("idf").map(|z| z.region), Some(BecRegion::Interior));
    }
}
