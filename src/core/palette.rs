/// Fixed categorical palette cycled by whole-range profit rank.
///
/// Sized to match the default stacked lane cap so a full day of lanes never
/// repeats a color.
pub const PALETTE: [&str; 15] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac", "#86bcb6", "#d37295", "#fabfd2", "#b6992d", "#499894",
];

/// Neutral color for creatives absent from the ranking.
pub const FALLBACK_COLOR: &str = "#9aa0a6";

#[must_use]
pub fn color_for_rank(rank: usize) -> &'static str {
    PALETTE[rank % PALETTE.len()]
}
