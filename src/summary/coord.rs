//! Nearby-point (`coord`) responses.

use super::fields::{Lookup, Shown};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

const PROPERTY_KEYS_SHOWN: usize = 10;

pub fn summarize(doc: &Value, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Version: {}", Shown(doc.at("version")))?;

    let locations = doc.items("locations");
    writeln!(out, "Locations count: {}", locations.len())?;

    let Some(loc) = locations.first() else {
        return Ok(());
    };

    writeln!(out, "\nFirst location structure:")?;
    for key in ["id", "name", "type", "coord"] {
        writeln!(out, "  - {key}: {}", Shown(loc.at(key)))?;
    }

    let props = loc.at("properties");
    writeln!(out, "  - properties.distance: {}", Shown(props.at("distance")))?;
    writeln!(
        out,
        "  - properties keys: {:?}",
        loc.key_names("properties", PROPERTY_KEYS_SHOWN)
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::catalog::Category;
    use crate::summary::render;
    use serde_json::json;

    #[test]
    fn test_nearby_location() {
        let doc = json!({
            "version": "10.2.1.42",
            "locations": [{
                "id": "2000338",
                "name": "Circular Quay, Wharf 4",
                "type": "platform",
                "properties": {"distance": 63, "STOP_GLOBAL_ID": "2000338"}
            }]
        });
        let text = render(Category::Coord, &doc);

        assert!(text.contains("  - name: Circular Quay, Wharf 4\n"));
        assert!(text.contains("  - coord: null\n"));
        assert!(text.contains("  - properties.distance: 63\n"));
        assert!(text.contains("  - properties keys: [\"distance\", \"STOP_GLOBAL_ID\"]\n"));
    }

    #[test]
    fn test_location_without_properties() {
        let text = render(Category::Coord, &json!({"locations": [{"id": "1"}]}));
        assert!(text.contains("  - properties.distance: null\n"));
        assert!(text.contains("  - properties keys: []\n"));
    }
}
