//! Shared fixtures for unit tests.

pub mod fixtures {
    use crate::neo::NeoRecord;

    /// Two records whose miss distances sort opposite to their names.
    pub fn two_neos() -> Vec<NeoRecord> {
        vec![
            NeoRecord::new("A", "500000", "30000.5", true),
            NeoRecord::new("B", "100000", "60000", false),
        ]
    }

    /// A trimmed NeoWs feed with one populated date.
    pub const SAMPLE_FEED: &str = r#"{
        "links": {"self": "https://api.nasa.gov/neo/rest/v1/feed"},
        "element_count": 3,
        "near_earth_objects": {
            "2024-10-06": [
                {
                    "id": "54486771",
                    "name": "(2024 TB)",
                    "nasa_jpl_url": "https://ssd.jpl.nasa.gov/tools/sbdb_lookup.html#/?sstr=54486771",
                    "absolute_magnitude_h": 26.1,
                    "is_potentially_hazardous_asteroid": false,
                    "close_approach_data": [{
                        "close_approach_date": "2024-10-06",
                        "relative_velocity": {
                            "kilometers_per_second": "11.1440420023",
                            "kilometers_per_hour": "40118.5512083567",
                            "miles_per_hour": "24928.0285286627"
                        },
                        "miss_distance": {
                            "astronomical": "0.0322548458",
                            "lunar": "12.5471350162",
                            "kilometers": "4825213.251734446",
                            "miles": "2998249.0436227148"
                        },
                        "orbiting_body": "Earth"
                    }]
                },
                {
                    "id": "3893836",
                    "name": "(2019 UO13)",
                    "is_potentially_hazardous_asteroid": true,
                    "close_approach_data": [{
                        "relative_velocity": {"kilometers_per_hour": "95771.9902107832"},
                        "miss_distance": {"kilometers": "46893251.394398423"}
                    }]
                },
                {
                    "name": "433 Eros (A898 PA)",
                    "is_potentially_hazardous_asteroid": false,
                    "close_approach_data": []
                }
            ]
        }
    }"#;
}
