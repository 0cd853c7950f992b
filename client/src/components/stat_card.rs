//! Metric cards used at the top of each section.

use leptos::prelude::*;

/// Tone of a metric's status badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Health {
    #[default]
    Neutral,
    Online,
    Warning,
    Error,
}

impl Health {
    fn css_modifier(self) -> &'static str {
        match self {
            Self::Neutral => "stat-card--neutral",
            Self::Online => "stat-card--online",
            Self::Warning => "stat-card--warning",
            Self::Error => "stat-card--error",
        }
    }
}

/// One labelled number with a short caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
    pub detail: String,
    pub health: Health,
}

impl Metric {
    pub fn new(label: &'static str, value: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { label, value: value.into(), detail: detail.into(), health: Health::Neutral }
    }

    #[must_use]
    pub fn with_health(mut self, health: Health) -> Self {
        self.health = health;
        self
    }
}

#[component]
pub fn StatCard(metric: Metric) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", metric.health.css_modifier())>
            <span class="stat-card__label">{metric.label}</span>
            <span class="stat-card__value">{metric.value}</span>
            <span class="stat-card__detail">{metric.detail}</span>
        </div>
    }
}

/// Responsive grid of [`StatCard`]s that re-renders when `metrics` changes.
#[component]
pub fn MetricGrid(metrics: Signal<Vec<Metric>>) -> impl IntoView {
    view! {
        <div class="metric-grid">
            {move || {
                metrics
                    .get()
                    .into_iter()
                    .map(|metric| view! { <StatCard metric=metric/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
