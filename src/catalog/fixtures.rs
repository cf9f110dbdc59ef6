//! Built-in seed catalog.
//!
//! Used when no catalog file is configured, and by tests and benchmarks.

use super::Dataset;
use crate::Result;
use crate::models::{ContentRecord, ContentType, RecordAttributes};

fn attributes(
    material: Option<&str>,
    era: Option<&str>,
    location: &str,
    coordinates: Option<(f64, f64)>,
) -> RecordAttributes {
    RecordAttributes {
        material: material.map(str::to_string),
        era: era.map(str::to_string),
        location: Some(location.to_string()),
        coordinates,
    }
}

/// Returns the seed records in catalog order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn seed_records() -> Vec<ContentRecord> {
    vec![
        ContentRecord::new("1", ContentType::Quarry, "Carrara Marble Quarry")
            .with_description(
                "World-famous marble quarry in operation since Roman times, producing the \
                 finest white marble used in sculpture and architecture.",
            )
            .with_category("Quarries")
            .with_tags(["marble", "italy", "carrara", "roman"])
            .with_featured(true)
            .with_attributes(attributes(
                Some("White Carrara Marble"),
                Some("Roman Era (200 BC)"),
                "Carrara, Tuscany, Italy",
                Some((44.0803, 10.0970)),
            )),
        ContentRecord::new("2", ContentType::Monument, "Pantheon")
            .with_description(
                "Ancient Roman temple with magnificent stone architecture and one of the \
                 largest unreinforced concrete domes in the world.",
            )
            .with_category("Monuments")
            .with_tags(["rome", "architecture", "roman", "granite"])
            .with_featured(true)
            .with_attributes(attributes(
                Some("Granite, Marble"),
                Some("Roman (126 AD)"),
                "Rome, Italy",
                Some((41.8986, 12.4769)),
            )),
        ContentRecord::new("3", ContentType::Marble, "Pentelic Marble")
            .with_description(
                "Premium white marble with a fine grain, quarried from Mount Pentelicus \
                 near Athens and prized for its workability.",
            )
            .with_category("Materials")
            .with_tags(["marble", "greece", "white"])
            .with_attributes(attributes(
                Some("Pentelic White Marble"),
                Some("Ancient Greece"),
                "Mount Pentelicus, Greece",
                Some((38.0833, 23.8833)),
            )),
        ContentRecord::new("4", ContentType::Company, "Stone Heritage Ltd")
            .with_description(
                "Restoration company that brought a 12th century cathedral back to its \
                 original glory over a five-year project.",
            )
            .with_category("Conservation")
            .with_tags(["restoration", "cathedral", "uk"])
            .with_attributes(attributes(None, None, "Canterbury, UK", None)),
        ContentRecord::new("5", ContentType::Company, "StoneLogistics International")
            .with_description(
                "Specialised in transporting delicate stone materials worldwide with over \
                 20 years of experience.",
            )
            .with_category("Logistics")
            .with_tags(["shipping", "transport", "italy"])
            .with_attributes(attributes(None, None, "Milan, Italy", None)),
        ContentRecord::new("6", ContentType::Company, "Heritage Stone Carriers")
            .with_description(
                "Expert handlers of precious stone heritage items, offering climate-controlled \
                 transport for monument parts.",
            )
            .with_category("Logistics")
            .with_tags(["transport", "artifacts", "uk"])
            .with_attributes(attributes(None, None, "London, UK", None)),
        ContentRecord::new("7", ContentType::Monument, "Parthenon")
            .with_description(
                "Classical temple on the Athenian Acropolis, built almost entirely from \
                 Pentelic marble.",
            )
            .with_category("Monuments")
            .with_tags(["greece", "classical", "acropolis"])
            .with_attributes(attributes(
                Some("Pentelic Marble"),
                Some("Classical (438 BC)"),
                "Athens, Greece",
                Some((37.9715, 23.7267)),
            )),
        ContentRecord::new("8", ContentType::Marble, "Calacatta Marble")
            .with_description(
                "Luxurious white stone with bold grey and gold veining from the Apuan Alps.",
            )
            .with_category("Materials")
            .with_tags(["italy", "luxury", "veined"])
            .with_attributes(attributes(
                Some("Calacatta"),
                None,
                "Carrara, Italy",
                None,
            )),
        ContentRecord::new("9", ContentType::Quarry, "Yorkshire Stone Quarry")
            .with_description(
                "Sandstone quarry supplying hard-wearing paving and building stone since \
                 the medieval period.",
            )
            .with_category("Quarries")
            .with_tags(["sandstone", "uk", "paving"])
            .with_attributes(attributes(
                Some("Yorkshire Sandstone"),
                Some("Medieval"),
                "Yorkshire, UK",
                None,
            )),
        ContentRecord::new("10", ContentType::Company, "Marble Masters Gallery")
            .with_description(
                "Gallery and workshop showcasing marble artistry from Michelangelo to \
                 contemporary sculptors.",
            )
            .with_category("Galleries")
            .with_tags(["sculpture", "workshops", "marble"])
            .with_featured(true)
            .with_attributes(attributes(None, None, "Carrara, Italy", None)),
    ]
}

/// Builds the seed dataset.
///
/// # Errors
///
/// Returns an error only if the seed records violate a dataset invariant.
pub fn seed_dataset() -> Result<Dataset> {
    Dataset::from_records(seed_records())
}
