//! Park Scorer - derives priority scores and the ranked view of a dataset
//!
//! Every score is a fixed linear combination of a park's attribute values.
//! Ranking sorts descending by total score; the sort is stable so ties keep
//! the dataset's input order. Includes both sequential and parallel (Rayon)
//! implementations, which must produce identical rankings.

use crate::data::{cary, field_survey, Dataset, DatasetVariant, ParkRecord};
use rayon::prelude::*;
use serde::Serialize;
use smallvec::{smallvec, SmallVec};

/// Weight vector aligned with a dataset schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinearCombination {
    pub weights: SmallVec<[i64; 5]>,
}

impl LinearCombination {
    pub fn new(weights: impl IntoIterator<Item = i64>) -> Self {
        Self {
            weights: weights.into_iter().collect(),
        }
    }

    /// Weighted sum of the values; missing weights count as zero
    pub fn apply(&self, values: &[i64]) -> i64 {
        self.weights
            .iter()
            .zip(values)
            .map(|(w, v)| w * v)
            .sum()
    }
}

/// Formulas for the total score and, where defined, the quadrant axes
#[derive(Debug, Clone, Serialize)]
pub struct ScoringScheme {
    pub total: LinearCombination,
    pub feasibility: Option<LinearCombination>,
    pub urgency: Option<LinearCombination>,
}

impl ScoringScheme {
    /// Scheme for the compiled-in schema of a variant
    ///
    /// Variant B is sized to the built-in field survey columns; use
    /// [`ScoringScheme::for_dataset`] for a custom additive schema.
    pub fn for_variant(variant: DatasetVariant) -> Self {
        match variant {
            DatasetVariant::A => Self::cary(),
            DatasetVariant::B => Self::additive(field_survey::SCHEMA.len()),
        }
    }

    /// Scheme sized to a dataset's schema
    pub fn for_dataset(dataset: &Dataset) -> Self {
        match dataset.variant {
            DatasetVariant::A => Self::cary(),
            DatasetVariant::B => Self::additive(dataset.schema.len()),
        }
    }

    /// Threat + Water + (Landscaping + Partnerships - Private Property)
    pub fn cary() -> Self {
        let mut feasibility: SmallVec<[i64; 5]> = smallvec![0; cary::SCHEMA.len()];
        feasibility[cary::LANDSCAPING] = 1;
        feasibility[cary::PARTNERSHIPS] = 1;
        feasibility[cary::PRIVATE_PROPERTY] = -1;

        let mut urgency: SmallVec<[i64; 5]> = smallvec![0; cary::SCHEMA.len()];
        urgency[cary::THREAT_LEVEL] = 1;
        urgency[cary::WATER_DISTRIBUTION] = 1;

        let total: SmallVec<[i64; 5]> = feasibility
            .iter()
            .zip(&urgency)
            .map(|(f, u)| f + u)
            .collect();

        Self {
            total: LinearCombination { weights: total },
            feasibility: Some(LinearCombination { weights: feasibility }),
            urgency: Some(LinearCombination { weights: urgency }),
        }
    }

    /// Plain sum over `columns` attributes
    pub fn additive(columns: usize) -> Self {
        Self {
            total: LinearCombination::new(std::iter::repeat(1).take(columns)),
            feasibility: None,
            urgency: None,
        }
    }

    pub fn has_quadrant_axes(&self) -> bool {
        self.feasibility.is_some() && self.urgency.is_some()
    }
}

/// A park together with its derived scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredPark {
    pub record: ParkRecord,
    pub total_score: i64,
    pub feasibility: Option<i64>,
    pub urgency: Option<i64>,
    /// Position in the dataset's input order (tie-break key)
    pub input_index: usize,
}

impl ScoredPark {
    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Parks in rank order (descending total score, input order on ties)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    pub variant: DatasetVariant,
    pub schema: Vec<String>,
    pub parks: Vec<ScoredPark>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.parks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredPark> {
        self.parks.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ScoredPark> {
        self.parks.iter().find(|p| p.name() == name)
    }

    /// 1-based rank of a park
    pub fn position(&self, name: &str) -> Option<usize> {
        self.parks.iter().position(|p| p.name() == name).map(|i| i + 1)
    }

    pub fn top(&self) -> Option<&ScoredPark> {
        self.parks.first()
    }
}

/// Main park scorer
#[derive(Debug, Clone)]
pub struct ParkScorer {
    scheme: ScoringScheme,
}

impl ParkScorer {
    pub fn new(scheme: ScoringScheme) -> Self {
        Self { scheme }
    }

    pub fn for_variant(variant: DatasetVariant) -> Self {
        Self::new(ScoringScheme::for_variant(variant))
    }

    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self::new(ScoringScheme::for_dataset(dataset))
    }

    pub fn scheme(&self) -> &ScoringScheme {
        &self.scheme
    }

    /// Score one record
    pub fn score(&self, record: &ParkRecord, input_index: usize) -> ScoredPark {
        let values = record.values.as_slice();
        ScoredPark {
            record: record.clone(),
            total_score: self.scheme.total.apply(values),
            feasibility: self.scheme.feasibility.as_ref().map(|c| c.apply(values)),
            urgency: self.scheme.urgency.as_ref().map(|c| c.apply(values)),
            input_index,
        }
    }

    /// Score and rank a dataset (sequential)
    pub fn rank(&self, dataset: &Dataset) -> Ranking {
        let scored: Vec<ScoredPark> = dataset
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| self.score(record, i))
            .collect();

        self.finish(dataset, scored)
    }

    /// Score and rank a dataset, scoring records on the Rayon pool
    ///
    /// `collect` on an indexed parallel iterator keeps input order, so the
    /// stable sort afterwards yields exactly the sequential ranking.
    pub fn rank_parallel(&self, dataset: &Dataset) -> Ranking {
        let scored: Vec<ScoredPark> = dataset
            .records
            .par_iter()
            .enumerate()
            .map(|(i, record)| self.score(record, i))
            .collect();

        self.finish(dataset, scored)
    }

    fn finish(&self, dataset: &Dataset, mut scored: Vec<ScoredPark>) -> Ranking {
        // sort_by is stable: equal totals stay in input order
        scored.sort_by(|a, b| b.total_score.cmp(&a.total_score));

        tracing::debug!(
            variant = %dataset.variant,
            parks = scored.len(),
            top = scored.first().map(|p| p.name()).unwrap_or(""),
            "ranked dataset"
        );

        Ranking {
            variant: dataset.variant,
            schema: dataset.schema.clone(),
            parks: scored,
        }
    }
}
