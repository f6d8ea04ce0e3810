//! Static dashboard content: KPIs, telemetry, timeline, signals and teams.

/// Direction of a KPI trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

/// A headline metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: &'static str,
    pub trend: &'static str,
    pub trend_direction: TrendDirection,
    /// Progress bar fill, 0..=100.
    pub progress: u8,
}

/// A metric in the operational pulse card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub title: &'static str,
    pub meta: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowSignal {
    pub label: &'static str,
    pub state: &'static str,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterStat {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
}

pub const KPIS: [Kpi; 4] = [
    Kpi {
        title: "Revenue Run Rate",
        value: "$2.4M",
        subtitle: "Projected Q4",
        trend: "+12.4%",
        trend_direction: TrendDirection::Up,
        progress: 72,
    },
    Kpi {
        title: "Net Payment Volume",
        value: "$187.2K",
        subtitle: "Last 7 days",
        trend: "+4.1%",
        trend_direction: TrendDirection::Up,
        progress: 54,
    },
    Kpi {
        title: "Inventory Health Score",
        value: "94%",
        subtitle: "Across 3 regions",
        trend: "-1.8%",
        trend_direction: TrendDirection::Down,
        progress: 94,
    },
    Kpi {
        title: "POS Conversion",
        value: "68%",
        subtitle: "Omnichannel impact",
        trend: "+6.7%",
        trend_direction: TrendDirection::Up,
        progress: 68,
    },
];

pub const PULSE_METRICS: [PulseMetric; 3] = [
    PulseMetric {
        label: "Live stores",
        value: "128",
        delta: "+6 open",
    },
    PulseMetric {
        label: "Digital SKUs",
        value: "34.2K",
        delta: "Updated 12m ago",
    },
    PulseMetric {
        label: "Fulfillment SLA",
        value: "96%",
        delta: "AI assist engaged",
    },
];

pub const TIMELINE_EVENTS: [TimelineEvent; 3] = [
    TimelineEvent {
        title: "Digital invoice approved",
        meta: "Amelia Loft • 3 mins ago",
        detail: "PO-8842 consolidated and routed to supplier network.",
    },
    TimelineEvent {
        title: "Realtime POS sync",
        meta: "5 flagship stores • 47 mins ago",
        detail: "Inventory snapshots reconciled across retail touchpoints.",
    },
    TimelineEvent {
        title: "Gemini forecast exported",
        meta: "AI Copilot • 2 hours ago",
        detail: "Revenue forecast scenario v3 pushed to analytics workspace.",
    },
];

pub const WORKFLOW_SIGNALS: [WorkflowSignal; 3] = [
    WorkflowSignal {
        label: "Cross-channel promotion uplift",
        state: "Ready",
        urgency: Urgency::High,
    },
    WorkflowSignal {
        label: "Auto-replenish threshold recalibration",
        state: "In Review",
        urgency: Urgency::Medium,
    },
    WorkflowSignal {
        label: "POS layout optimization",
        state: "Scheduled",
        urgency: Urgency::Low,
    },
];

pub const TEAM_MEMBERS: [TeamMember; 4] = [
    TeamMember {
        name: "Priya Shah",
        role: "Head of Operations",
        status: "In Strategy",
    },
    TeamMember {
        name: "Diego Ramirez",
        role: "Retail Technology",
        status: "Reviewing POS",
    },
    TeamMember {
        name: "Harper Quinn",
        role: "Finance Lead",
        status: "Reconciling",
    },
    TeamMember {
        name: "Felix Nguyen",
        role: "Inventory Systems",
        status: "Sync in progress",
    },
];

pub const FOOTER_STATS: [FooterStat; 3] = [
    FooterStat {
        label: "AI recommendations executed",
        value: "482",
        detail: "Past 30 days",
    },
    FooterStat {
        label: "Omnichannel NPS",
        value: "72",
        detail: "Customer feedback",
    },
    FooterStat {
        label: "POS uptime",
        value: "99.98%",
        detail: "Global infrastructure",
    },
];

/// Avatar initials: first letter of each word, at most two, uppercase.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
