//! Projection of [`PageContent`] into the plain values the components render.
//!
//! Everything here is a pure function of the content. Rendering the same
//! content twice yields equal views, in the same order.

use crate::content::{InvestmentTier, MarketStat, Milestone, PageContent, TeamMember, TierStatus};
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    Success,
    Warning,
    Neutral,
}

impl LabelColor {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Success => "label-success",
            Self::Warning => "label-warning",
            Self::Neutral => "label-neutral",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Self::Success => "#2e7d32",
            Self::Warning => "#ed6c02",
            Self::Neutral => "#757575",
        }
    }
}

const CTA_ACCENT: &str = "#2e7d32";
const CTA_BORDER: &str = "2px solid #2e7d32";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaStyle {
    Solid,
    Outline,
}

impl CtaStyle {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Solid => "btn-solid",
            Self::Outline => "btn-outline",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Self::Solid => CTA_ACCENT,
            Self::Outline => "transparent",
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            Self::Solid => "white",
            Self::Outline => CTA_ACCENT,
        }
    }

    pub fn border(&self) -> &'static str {
        CTA_BORDER
    }
}

/// How a tier status shows up on its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPresentation {
    pub label: &'static str,
    pub color: LabelColor,
    pub cta_enabled: bool,
    pub cta_text: &'static str,
    pub cta_style: CtaStyle,
}

impl StatusPresentation {
    pub fn of(status: TierStatus) -> Self {
        let label = status.label();
        match status {
            TierStatus::Open => Self {
                label,
                color: LabelColor::Success,
                cta_enabled: true,
                cta_text: "Inquire Now",
                cta_style: CtaStyle::Solid,
            },
            TierStatus::ComingSoon => Self {
                label,
                color: LabelColor::Warning,
                cta_enabled: false,
                cta_text: "Notify Me",
                cta_style: CtaStyle::Outline,
            },
            TierStatus::ByInvitation => Self {
                label,
                color: LabelColor::Neutral,
                cta_enabled: false,
                cta_text: "Notify Me",
                cta_style: CtaStyle::Outline,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierCardView {
    pub title: String,
    pub description: String,
    pub min_investment: String,
    pub benefits: Vec<String>,
    pub presentation: StatusPresentation,
}

impl TierCardView {
    pub fn from_tier(tier: &InvestmentTier) -> Self {
        Self {
            title: tier.title.clone(),
            description: tier.description.clone(),
            min_investment: tier.min_investment.clone(),
            benefits: tier.benefits.clone(),
            presentation: StatusPresentation::of(tier.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatTileView {
    pub stat: String,
    pub label: String,
}

impl StatTileView {
    pub fn from_stat(stat: &MarketStat) -> Self {
        Self {
            stat: stat.stat.clone(),
            label: stat.label.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Even indices go left, odd indices go right.
    pub fn for_index(idx: usize) -> Self {
        if idx % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Left => "timeline-left",
            Self::Right => "timeline-right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntryView {
    pub quarter: String,
    pub title: String,
    pub description: String,
    pub side: Side,
}

pub fn timeline(milestones: &[Milestone]) -> Vec<TimelineEntryView> {
    milestones
        .iter()
        .enumerate()
        .map(|(idx, m)| TimelineEntryView {
            quarter: m.quarter.clone(),
            title: m.title.clone(),
            description: m.description.clone(),
            side: Side::for_index(idx),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamCardView {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar_url: String,
}

impl TeamCardView {
    pub fn from_member(member: &TeamMember) -> Self {
        Self {
            name: member.name.clone(),
            role: member.role.clone(),
            bio: member.bio.clone(),
            avatar_url: utils::avatar_url(&member.avatar_seed),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub email: String,
    pub email_href: String,
    pub phone: String,
    pub phone_href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub stats: Vec<StatTileView>,
    pub tiers: Vec<TierCardView>,
    pub timeline: Vec<TimelineEntryView>,
    pub team: Vec<TeamCardView>,
    pub contact: ContactView,
}

impl PageView {
    pub fn render(content: &PageContent) -> Self {
        Self {
            stats: content.stats.iter().map(StatTileView::from_stat).collect(),
            tiers: content.tiers.iter().map(TierCardView::from_tier).collect(),
            timeline: timeline(&content.milestones),
            team: content.team.iter().map(TeamCardView::from_member).collect(),
            contact: ContactView {
                email: content.contact.email.clone(),
                email_href: utils::mailto(&content.contact.email),
                phone: content.contact.phone.clone(),
                phone_href: utils::tel(&content.contact.phone),
            },
        }
    }
}
