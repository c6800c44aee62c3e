//! Defaults for the game-turn analysis run.

pub struct GameAnalysisConfig {
    /// Spreadsheet with one row per game turn
    pub data_url: &'static str,
    pub dependent_var: &'static str,
    pub independent_vars: &'static [&'static str],
    pub group_col: &'static str,
    pub plot_variable: &'static str,
    /// Rows shown in the data preview
    pub preview_rows: usize,
}

pub const GAME: GameAnalysisConfig = GameAnalysisConfig {
    data_url: "https://github.com/masterfloss/FakeNewsData/raw/refs/heads/main/GameTurns.xlsx",
    dependent_var: "current_followers",
    independent_vars: &["round_number", "credibility_change", "followers_change"],
    group_col: "round_number",
    plot_variable: "current_followers",
    preview_rows: 5,
};
