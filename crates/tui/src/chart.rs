//! Platform distribution bar chart.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use ludoteca_core::{CatalogStore, Platform};

use crate::app::Theme;

/// Chart title, fixed by the UI contract.
pub const CHART_TITLE: &str = "Nº de Juegos por Plataforma";

/// Bar chart of records per platform.
///
/// The dataset is cached together with the store revision that produced it;
/// [`PlatformChart::sync`] rebuilds it from scratch exactly when the record
/// list changed, never on view-only changes such as filtering.
pub struct PlatformChart {
    revision: Option<u64>,
    counts: Vec<(Platform, u64)>,
}

impl PlatformChart {
    pub fn new() -> Self {
        Self {
            revision: None,
            counts: Vec::new(),
        }
    }

    /// Recompute the per-platform counts when the record list mutated since
    /// the last call. Counts are zero-filled over the full enumeration.
    pub fn sync(&mut self, store: &CatalogStore) {
        if self.revision == Some(store.revision()) {
            return;
        }
        self.counts = store
            .platform_counts()
            .into_iter()
            .map(|(platform, count)| (platform, count as u64))
            .collect();
        self.revision = Some(store.revision());
    }

    pub fn render(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        let bars: Vec<Bar> = self
            .counts
            .iter()
            .map(|(platform, count)| Bar::default().label(platform.label().into()).value(*count))
            .collect();

        let gap = 1u16;
        let inner_width = area.width.saturating_sub(2);
        let bar_width = (inner_width.saturating_sub(gap * 3) / 4).clamp(3, 15);
        let max = self
            .counts
            .iter()
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0)
            .max(1);

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(CHART_TITLE))
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(gap)
            .max(max)
            .bar_style(Style::default().fg(theme.accent))
            .label_style(Style::default().fg(theme.primary_fg))
            .value_style(
                Style::default()
                    .fg(theme.on_accent)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(chart, area);
    }
}

impl Default for PlatformChart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ludoteca_core::{GameDraft, Genre};

    #[test]
    fn sync_rebuilds_only_when_the_list_changes() {
        let mut store = CatalogStore::with_seed();
        let mut chart = PlatformChart::new();
        chart.sync(&store);
        assert_eq!(chart.counts.len(), 4);
        assert_eq!(chart.counts[0], (Platform::Pc, 1));

        // Filtering is a view change; the dataset stays as-is.
        store.set_search_term("halo");
        chart.sync(&store);
        assert_eq!(chart.revision, Some(store.revision()));
        assert_eq!(chart.counts[0], (Platform::Pc, 1));

        *store.draft_mut() = GameDraft {
            id: None,
            title: "Celeste".to_string(),
            genre: Some(Genre::Aventura),
            platform: Some(Platform::Pc),
            score: Some(9),
            release_year: Some(2018),
        };
        store.save().expect("save should succeed");
        chart.sync(&store);
        assert_eq!(chart.counts[0], (Platform::Pc, 2));
    }
}
