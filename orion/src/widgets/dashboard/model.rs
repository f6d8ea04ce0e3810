use orion_core::dashboard::{
    FOOTER_STATS, FooterStat, KPIS, Kpi, PULSE_METRICS, PulseMetric,
    TEAM_MEMBERS, TIMELINE_EVENTS, TeamMember, TimelineEvent, TrendDirection,
    Urgency, WORKFLOW_SIGNALS, WorkflowSignal,
};

use crate::shared::ui::icons;
use crate::shared::ui::theme::IcedColorPalette;

/// View model for the read-only dashboard.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DashboardViewModel {
    pub(crate) kpis: &'static [Kpi],
    pub(crate) pulse_metrics: &'static [PulseMetric],
    pub(crate) timeline: &'static [TimelineEvent],
    pub(crate) signals: &'static [WorkflowSignal],
    pub(crate) team: &'static [TeamMember],
    pub(crate) footer_stats: &'static [FooterStat],
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self {
            kpis: &KPIS,
            pulse_metrics: &PULSE_METRICS,
            timeline: &TIMELINE_EVENTS,
            signals: &WORKFLOW_SIGNALS,
            team: &TEAM_MEMBERS,
            footer_stats: &FOOTER_STATS,
        }
    }
}

/// Arrow icon and color for a KPI trend.
pub(crate) fn trend_style(
    direction: TrendDirection,
    palette: &IcedColorPalette,
) -> (&'static [u8], iced::Color) {
    match direction {
        TrendDirection::Up => (icons::ARROW_UP, palette.success),
        TrendDirection::Down => (icons::ARROW_DOWN, palette.danger),
    }
}

/// Text color for a workflow signal state.
pub(crate) fn urgency_color(
    urgency: Urgency,
    palette: &IcedColorPalette,
) -> iced::Color {
    match urgency {
        Urgency::High => palette.danger,
        Urgency::Medium => palette.warning,
        Urgency::Low => palette.muted,
    }
}
