//! Park Datasets
//!
//! Holds the compiled-in park tables. Each dataset has a fixed, ordered
//! attribute schema and every record supplies one integer per attribute.
//! Records are immutable once built; scores are derived per view by the scorer.

use crate::error::{DashboardError, Result};
use rustc_hash::FxHashSet;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Attribute values for one park, in schema order
pub type AttributeValues = SmallVec<[i64; 5]>;

/// Column positions in the Cary (variant A) schema
pub mod cary {
    pub const THREAT_LEVEL: usize = 0;
    pub const WATER_DISTRIBUTION: usize = 1;
    pub const LANDSCAPING: usize = 2;
    pub const PRIVATE_PROPERTY: usize = 3;
    pub const PARTNERSHIPS: usize = 4;

    pub const SCHEMA: [&str; 5] = [
        "Threat Level",
        "Water Distribution",
        "Landscaping",
        "Private Property",
        "Partnerships",
    ];
}

/// Column positions in the field survey (variant B) schema
pub mod field_survey {
    pub const SCHEMA: [&str; 5] = [
        "Invasive Coverage",
        "Ecological Value",
        "Public Visibility",
        "Volunteer Access",
        "Regrowth Risk",
    ];
}

/// Which compiled-in dataset (and therefore which scoring scheme) is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetVariant {
    /// Town of Cary priority matrix: Threat, Water, Landscaping, Private Property, Partnerships
    A,
    /// Field survey: five additive columns
    B,
}

impl DatasetVariant {
    pub const ALL: [DatasetVariant; 2] = [DatasetVariant::A, DatasetVariant::B];

    /// Short key used in URLs and on the command line
    pub fn key(self) -> &'static str {
        match self {
            DatasetVariant::A => "a",
            DatasetVariant::B => "b",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            DatasetVariant::A => "cary",
            DatasetVariant::B => "field_survey",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DatasetVariant::A => "Town of Cary Invasive Species Priority Dashboard",
            DatasetVariant::B => "Invasive Species Field Survey Dashboard",
        }
    }
}

impl fmt::Display for DatasetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DatasetVariant {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "cary" => Ok(DatasetVariant::A),
            "b" | "field_survey" => Ok(DatasetVariant::B),
            other => Err(DashboardError::UnknownVariant(other.to_string())),
        }
    }
}

/// Labelled free-text field attached to a park
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub label: String,
    pub text: String,
}

/// One park row: name, attribute values, and notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkRecord {
    pub name: String,
    pub values: AttributeValues,
    pub annotations: Vec<Annotation>,
}

impl ParkRecord {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().collect(),
            annotations: Vec::new(),
        }
    }

    /// Attach a labelled note
    pub fn with_annotation(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.annotations.push(Annotation {
            label: label.into(),
            text: text.into(),
        });
        self
    }

    pub fn value(&self, attribute: usize) -> i64 {
        self.values[attribute]
    }
}

/// Static park table with a fixed attribute schema
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub variant: DatasetVariant,
    pub schema: Vec<String>,
    pub records: Vec<ParkRecord>,
}

impl Dataset {
    /// Build a dataset, checking that every record matches the schema and names are unique
    ///
    /// Variant A is scored by fixed column position, so its schema must be
    /// exactly the Cary columns in order.
    pub fn new(
        variant: DatasetVariant,
        schema: Vec<String>,
        records: Vec<ParkRecord>,
    ) -> Result<Self> {
        if schema.is_empty() {
            return Err(DashboardError::EmptySchema);
        }
        if variant == DatasetVariant::A && !schema.iter().map(String::as_str).eq(cary::SCHEMA) {
            return Err(DashboardError::UnexpectedSchema(variant.slug()));
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for record in &records {
            if record.values.len() != schema.len() {
                return Err(DashboardError::SchemaMismatch {
                    park: record.name.clone(),
                    expected: schema.len(),
                    found: record.values.len(),
                });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(DashboardError::DuplicatePark(record.name.clone()));
            }
        }

        Ok(Self {
            variant,
            schema,
            records,
        })
    }

    /// Compiled-in dataset for a variant
    pub fn builtin(variant: DatasetVariant) -> Self {
        match variant {
            DatasetVariant::A => Self::cary(),
            DatasetVariant::B => Self::field_survey(),
        }
    }

    /// Town of Cary parks with the priority matrix columns
    pub fn cary() -> Self {
        const SPECIES: &str = "Most Concerning Invasive Species";
        const EFFORTS: &str = "Current Efforts";

        let records = vec![
            ParkRecord::new("Hemlock Bluffs", [8, 5, 2, 4, 8])
                .with_annotation(SPECIES, "Chinese Privet, Japanese Stiltgrass, Bamboo")
                .with_annotation(
                    EFFORTS,
                    "Privet: hand pull small shrubs; Cut and Paint large shrubs. Will likely need to come back retreat a few times.\n\
                     Japanese Stiltgrass: It is very widespread and difficult to tackle. We hand pull small sections and mow small sections where we can. \
                     Hand pulling is very easy because the root system is weak. If we had A LOT of volunteers we may be able to make a dent in the stiltgrass through hand pulling. \
                     However, handpulling needs to happen in the summer months. The same time that copperheads, yellow jackets and mosquitoes are active, so I have not done this yet. \
                     Foliar spray is another treatment method, but because the stiltgrass is mixed in with native plants and/or near water, I do not want to spray herbicide.\n\
                     Bamboo: Very difficult to remove! Due to the bamboo being so close to Swift Creek, the only option I have come across so far is to cut and paint the bamboo, \
                     although even that will likely not be super effective. Another obstacle is the size and amount of bamboo. Much of the patch bamboo is 30ft tall. \
                     Removing the bamboo and figuring out what to do with all the biomass is just as big of a hurdle as treating it.",
                ),
            ParkRecord::new("Dunham Park", [6, 0, 7, 8, 8])
                .with_annotation(SPECIES, "Mimosa Tree, Privet, Japanese Honey Suckle")
                .with_annotation(
                    EFFORTS,
                    "Privet & Mimosa: cutting to base and then direct application of glyphosate.\n\
                     Honeysuckle: removal of bulb from ground (digging up and hand weeding)",
                ),
            ParkRecord::new("Fred G. Bond", [7, 3, 5, 8, 6])
                .with_annotation(SPECIES, "English Ivy, Japanese Privet, Nandina")
                .with_annotation(
                    EFFORTS,
                    "English Ivy: requires hand pulling or mowing and spraying, burning would also work, but difficult in this area.\n\
                     Privet: cut and sprayed.\n\
                     Nandina: cut or dug up.",
                ),
            ParkRecord::new("Thomas Brooks", [6, 1, 6, 3, 2])
                .with_annotation(SPECIES, "English Ivy, Autumn Olive, Japanese Privet")
                .with_annotation(
                    EFFORTS,
                    "English Ivy: requires hand pulling or mowing and spraying.\n\
                     Autumn Olive: cut and sprayed.\n\
                     Japanese Privet: cut and sprayed.\n\
                     May also need to replant an understory depending on the severity of the population.",
                ),
            ParkRecord::new("Carpenter", [8, 2, 9, 3, 9])
                .with_annotation(SPECIES, "Dogfennel, Broomsedge, Privet")
                .with_annotation(EFFORTS, "Targeted application of glyphosate."),
        ];

        Self {
            variant: DatasetVariant::A,
            schema: cary::SCHEMA.iter().map(|s| s.to_string()).collect(),
            records,
        }
    }

    /// Field survey table: every column adds to the total
    pub fn field_survey() -> Self {
        const SPECIES: &str = "Dominant Invasive Species";
        const NOTES: &str = "Survey Notes";

        let records = vec![
            ParkRecord::new("Hemlock Bluffs", [8, 6, 2, 7, 9])
                .with_annotation(SPECIES, "Japanese Stiltgrass, Bamboo")
                .with_annotation(NOTES, "Stiltgrass carpets the creek floodplain; bamboo stand along Swift Creek keeps resprouting."),
            ParkRecord::new("Dunham Park", [5, 7, 6, 4, 3])
                .with_annotation(SPECIES, "Mimosa Tree, Japanese Honeysuckle")
                .with_annotation(NOTES, "Mimosa seedlings concentrated along the field edge."),
            ParkRecord::new("Fred G. Bond", [6, 5, 4, 5, 6])
                .with_annotation(SPECIES, "English Ivy, Nandina")
                .with_annotation(NOTES, "Ivy climbing trees near the lake trail."),
            ParkRecord::new("Thomas Brooks", [7, 4, 3, 6, 8])
                .with_annotation(SPECIES, "Autumn Olive, English Ivy")
                .with_annotation(NOTES, "Autumn olive thickets in the old field; understory replanting likely."),
            ParkRecord::new("Carpenter", [9, 3, 5, 4, 7])
                .with_annotation(SPECIES, "Privet, Dogfennel")
                .with_annotation(NOTES, "Privet regrowth after last season's treatment."),
        ];

        Self {
            variant: DatasetVariant::B,
            schema: field_survey::SCHEMA.iter().map(|s| s.to_string()).collect(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn park_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }
}
