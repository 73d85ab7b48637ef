//! Overall priority ranking bars

use crate::presentation::types::{Bar, RankingChart};
use crate::scorer::Ranking;
use crate::utils::{min_max_normalize, ColorRamp};

pub fn build_ranking_chart(ranking: &Ranking) -> RankingChart {
    let totals: Vec<i64> = ranking.iter().map(|p| p.total_score).collect();
    let intensities = min_max_normalize(&totals);

    let bars = ranking
        .iter()
        .zip(intensities)
        .map(|(park, intensity)| Bar {
            park: park.name().to_string(),
            total_score: park.total_score,
            intensity,
            color: ColorRamp::Reds.at(intensity).to_hex(),
        })
        .collect();

    RankingChart { bars }
}
