//! Integration tests for types

#[cfg(test)]
mod tests {
    use zprune_types::*;

    #[test]
    fn test_region_display() {
        let region = Region::new(21..23, 17..18);
        assert_eq!(region.to_string(), "x 21..23, y 17..18");
    }

    #[test]
    fn test_empty_region() {
        assert!(Region::new(5..5, 0..1).is_empty());
        assert!(Region::new(0..1, 3..2).is_empty());
        assert!(!Region::new(0..1, 0..1).is_empty());
    }

    #[test]
    fn test_decision_serialization() {
        let json = serde_json::to_string(&Decision::Remove).unwrap();
        assert_eq!(json, r#""remove""#);
        assert!(Decision::Remove.is_remove());
        assert!(!Decision::Keep.is_remove());
    }

    #[test]
    fn test_report_json_round_trip() {
        let mut report = PruneReport::new(PruneMode::Execute);
        let mut dir = DirectoryReport::new("Saves/Multiplayer/World");
        dir.scanned = 3;
        dir.kept = 2;
        dir.flagged.push("map_6000_5300.bin".to_string());
        dir.removed.push("map_6000_5300.bin".to_string());
        report.directories.push(dir);

        let json = report.to_json().unwrap();
        let parsed: PruneReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
