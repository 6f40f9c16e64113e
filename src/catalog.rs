//! The fixed set of captured Trip Planner responses and their categories.

/// A captured API response file, keyed by a logical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseFile {
    pub name: &'static str,
    pub filename: &'static str,
}

/// Every response the inspector knows about, in report order.
pub static RESPONSE_FILES: &[ResponseFile] = &[
    ResponseFile {
        name: "stop_finder",
        filename: "example_stop_finder_1_epp.json",
    },
    ResponseFile {
        name: "departure_mon_1",
        filename: "example_departure_mon_1_central.json",
    },
    ResponseFile {
        name: "departure_mon_2",
        filename: "example_departure_mon_2_circular_quay.json",
    },
    ResponseFile {
        name: "trip_1",
        filename: "example_trip_1.json",
    },
    ResponseFile {
        name: "trip_2",
        filename: "example_trip_2.json",
    },
    ResponseFile {
        name: "add_info_1",
        filename: "example_add_info_1_all_modes.json",
    },
    ResponseFile {
        name: "add_info_2",
        filename: "example_add_info_2_only_trains.json",
    },
    ResponseFile {
        name: "coord_gis",
        filename: "example_coord_1_gis_point.json",
    },
    ResponseFile {
        name: "coord_bus",
        filename: "example_coord_2_bus_point.json",
    },
    ResponseFile {
        name: "coord_poi",
        filename: "example_coord_3_poi_point.json",
    },
];

/// Response shape, selecting which summarizer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    StopFinder,
    DepartureMonitor,
    Trip,
    AddInfo,
    Coord,
}

/// Substring checked against the logical name, in priority order.
static MATCH_ORDER: &[(&str, Category)] = &[
    ("stop_finder", Category::StopFinder),
    ("departure_mon", Category::DepartureMonitor),
    ("trip", Category::Trip),
    ("add_info", Category::AddInfo),
    ("coord", Category::Coord),
];

impl Category {
    /// Picks the first category whose marker appears in `name`.
    pub fn from_name(name: &str) -> Option<Self> {
        MATCH_ORDER
            .iter()
            .find(|(marker, _)| name.contains(marker))
            .map(|(_, category)| *category)
    }

    /// Heading printed above the summary.
    pub fn title(&self) -> &'static str {
        match self {
            Category::StopFinder => "STOP FINDER RESPONSE",
            Category::DepartureMonitor => "DEPARTURE MONITOR RESPONSE",
            Category::Trip => "TRIP RESPONSE",
            Category::AddInfo => "ADD_INFO (SERVICE ALERTS) RESPONSE",
            Category::Coord => "COORD (NEARBY) RESPONSE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_response_has_a_category() {
        for file in RESPONSE_FILES {
            assert!(
                Category::from_name(file.name).is_some(),
                "{} has no category",
                file.name
            );
        }
        assert_eq!(RESPONSE_FILES.len(), 10);
    }

    #[test]
    fn test_from_name_categories() {
        assert_eq!(Category::from_name("stop_finder"), Some(Category::StopFinder));
        assert_eq!(
            Category::from_name("departure_mon_2"),
            Some(Category::DepartureMonitor)
        );
        assert_eq!(Category::from_name("trip_1"), Some(Category::Trip));
        assert_eq!(Category::from_name("add_info_2"), Some(Category::AddInfo));
        assert_eq!(Category::from_name("coord_poi"), Some(Category::Coord));
        assert_eq!(Category::from_name("unknown"), None);
    }

    #[test]
    fn test_first_match_wins() {
        // contains both "stop_finder" and "trip"
        assert_eq!(
            Category::from_name("stop_finder_trip"),
            Some(Category::StopFinder)
        );
        assert_eq!(
            Category::from_name("departure_mon_trip"),
            Some(Category::DepartureMonitor)
        );
        assert_eq!(Category::from_name("trip_coord"), Some(Category::Trip));
    }
}
