//! Retention filter
//!
//! Decides, from the filename alone, whether a save file lies inside the
//! retained part of the world.

use crate::filename::ParsedFilename;
use std::collections::BTreeMap;
use tracing::debug;
use zprune_types::{Decision, KeepReason, Region};

/// Outcome of evaluating one filename, with the detail behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep(KeepReason),
    Remove { x: i64, y: i64 },
}

impl Verdict {
    #[must_use]
    pub fn decision(self) -> Decision {
        match self {
            Self::Keep(_) => Decision::Keep,
            Self::Remove { .. } => Decision::Remove,
        }
    }
}

/// Category to region mapping
///
/// Immutable once built. Categories may share a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionRules {
    regions: BTreeMap<String, Region>,
}

impl RetentionRules {
    #[must_use]
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, Region)>,
        S: Into<String>,
    {
        Self {
            regions: rules
                .into_iter()
                .map(|(category, region)| (category.into(), region))
                .collect(),
        }
    }

    #[must_use]
    pub fn region_for(&self, category: &str) -> Option<&Region> {
        self.regions.get(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn evaluate(&self, file_name: &str) -> Verdict {
        let parsed = ParsedFilename::parse(file_name);
        let Some(region) = self.region_for(parsed.category()) else {
            return Verdict::Keep(KeepReason::UnknownCategory);
        };

        match parsed {
            ParsedFilename::Matched { x, y, .. } if region.contains_wide(x, y) => {
                Verdict::Keep(KeepReason::InRegion)
            }
            ParsedFilename::Matched { x, y, .. } => Verdict::Remove { x, y },
            ParsedFilename::Unmatched { reason, .. } => {
                debug!(file_name, %reason, "keeping file with unexpected name");
                Verdict::Keep(KeepReason::Malformed)
            }
        }
    }

    #[must_use]
    pub fn classify(&self, file_name: &str) -> Decision {
        self.evaluate(file_name).decision()
    }
}

/// Classify a single save filename against `rules`
#[must_use]
pub fn classify(file_name: &str, rules: &RetentionRules) -> Decision {
    rules.classify(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_rules() -> RetentionRules {
        let cells = Region::new(6596..6866, 5286..5568);
        let chunks = Region::new(21..23, 17..18);
        RetentionRules::new([
            ("map", cells),
            ("chunkdata", chunks.clone()),
            ("zpop", chunks),
        ])
    }

    #[test]
    fn reference_scenarios() {
        let rules = reference_rules();
        assert_eq!(classify("map_6700_5300.dat", &rules), Decision::Keep);
        assert_eq!(classify("map_6000_5300.dat", &rules), Decision::Remove);
        assert_eq!(classify("chunkdata_21_17.bin", &rules), Decision::Keep);
        assert_eq!(classify("chunkdata_22_18.bin", &rules), Decision::Remove);
        assert_eq!(classify("readme.txt", &rules), Decision::Keep);
    }

    #[test]
    fn non_numeric_coordinates_are_kept() {
        let rules = reference_rules();
        assert_eq!(
            rules.evaluate("map_abc_5300.dat"),
            Verdict::Keep(KeepReason::Malformed)
        );
        assert_eq!(classify("map_abc_5300.dat", &rules), Decision::Keep);
    }

    #[test]
    fn wrong_segment_count_is_kept() {
        let rules = reference_rules();
        assert_eq!(
            rules.evaluate("map_1.bin"),
            Verdict::Keep(KeepReason::Malformed)
        );
        assert_eq!(
            rules.evaluate("zpop_1_2_3.bin"),
            Verdict::Keep(KeepReason::Malformed)
        );
    }

    #[test]
    fn unknown_category_wins_over_shape() {
        let rules = reference_rules();
        assert_eq!(
            rules.evaluate("objects_1_2.bin"),
            Verdict::Keep(KeepReason::UnknownCategory)
        );
        assert_eq!(
            rules.evaluate("Map_1_2.bin"),
            Verdict::Keep(KeepReason::UnknownCategory)
        );
    }

    #[test]
    fn coordinates_past_i32_are_removed() {
        let rules = reference_rules();
        assert_eq!(classify("map_99999999999_5300.dat", &rules), Decision::Remove);
        assert_eq!(classify("map_6700_-99999999999.dat", &rules), Decision::Remove);
        assert_eq!(
            rules.evaluate("chunkdata_21_123456789012345678901234567890.bin"),
            Verdict::Remove {
                x: 21,
                y: i64::MAX
            }
        );
    }

    #[test]
    fn remove_carries_coordinates() {
        let rules = reference_rules();
        assert_eq!(
            rules.evaluate("zpop_23_17.bin"),
            Verdict::Remove { x: 23, y: 17 }
        );
    }

    #[test]
    fn shared_regions_apply_to_every_category() {
        let rules = reference_rules();
        assert_eq!(rules.region_for("zpop"), rules.region_for("chunkdata"));
        assert_eq!(
            rules.categories().collect::<Vec<_>>(),
            vec!["chunkdata", "map", "zpop"]
        );
    }

    proptest! {
        #[test]
        fn unknown_categories_are_always_kept(name in "[a-z_0-9.]{0,24}") {
            let category = name.split('.').next().unwrap_or_default().split('_').next().unwrap_or_default();
            prop_assume!(!["map", "chunkdata", "zpop"].contains(&category));
            prop_assert_eq!(reference_rules().classify(&name), Decision::Keep);
        }

        #[test]
        fn keep_iff_both_coordinates_in_range(x in 0i32..60, y in 0i32..40) {
            let rules = RetentionRules::new([("zpop", Region::new(21..23, 17..18))]);
            let expected = if (21..23).contains(&x) && (17..18).contains(&y) {
                Decision::Keep
            } else {
                Decision::Remove
            };
            prop_assert_eq!(rules.classify(&format!("zpop_{x}_{y}.bin")), expected);
        }

        #[test]
        fn classification_is_deterministic(name in "(map|zpop|chunkdata)_[0-9a-z]{1,5}_[0-9]{1,5}(\\.bin)?") {
            let rules = reference_rules();
            prop_assert_eq!(rules.classify(&name), rules.classify(&name));
        }
    }
}
