use serde::{Deserialize, Serialize};

const EMBEDDED: &str = include_str!("../assets/content.json");

/// Availability of an investment tier.
///
/// Unknown strings coming from the content file land on `ByInvitation`,
/// and so does a tier with no status at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum TierStatus {
    Open,
    ComingSoon,
    #[default]
    ByInvitation,
}

impl TierStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Open" => Self::Open,
            "Coming Soon" | "ComingSoon" => Self::ComingSoon,
            "By Invitation" | "ByInvitation" => Self::ByInvitation,
            other => {
                tracing::warn!("unknown tier status {:?}, treating as by invitation", other);
                Self::ByInvitation
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::ComingSoon => "Coming Soon",
            Self::ByInvitation => "By Invitation",
        }
    }
}

impl From<String> for TierStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TierStatus> for String {
    fn from(status: TierStatus) -> Self {
        status.label().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestmentTier {
    pub title: String,
    pub description: String,
    pub min_investment: String,
    pub benefits: Vec<String>,
    #[serde(default)]
    pub status: TierStatus,
}

#[cfg(test)]
impl InvestmentTier {
    pub fn new(
        title: &str,
        description: &str,
        min_investment: &str,
        benefits: &[&str],
        status: TierStatus,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            min_investment: min_investment.to_string(),
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
            status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketStat {
    pub stat: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub quarter: String,
    pub title: String,
    pub description: String,
}

#[cfg(test)]
impl Milestone {
    pub fn new(quarter: &str, title: &str, description: &str) -> Self {
        Self {
            quarter: quarter.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar_seed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// Everything the investor page shows. Loaded once, never mutated.
///
/// `Default` is an empty page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PageContent {
    pub stats: Vec<MarketStat>,
    pub tiers: Vec<InvestmentTier>,
    pub milestones: Vec<Milestone>,
    pub team: Vec<TeamMember>,
    pub contact: ContactInfo,
}

impl PageContent {
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// The content file bundled with the app.
    pub fn embedded() -> serde_json::Result<Self> {
        Self::from_json(EMBEDDED)
    }

    /// Parses the bundled content file, falling back to an empty page.
    pub fn load() -> Self {
        match Self::embedded() {
            Ok(content) => {
                tracing::info!(
                    "loaded page content: {} tiers, {} stats, {} milestones",
                    content.tiers.len(),
                    content.stats.len(),
                    content.milestones.len()
                );
                content
            }
            Err(e) => {
                tracing::error!("failed to parse embedded page content: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content() {
        let content = PageContent::embedded().unwrap();

        let titles: Vec<&str> = content.tiers.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Seed Round", "Series A", "Strategic Partner"]);
        let statuses: Vec<TierStatus> = content.tiers.iter().map(|t| t.status).collect();
        assert_eq!(
            statuses,
            vec![
                TierStatus::Open,
                TierStatus::ComingSoon,
                TierStatus::ByInvitation
            ]
        );
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.milestones.len(), 4);
        assert_eq!(content.team.len(), 3);
        assert_eq!(content.contact.email, "investors@vitalis.app");
        assert_eq!(PageContent::load(), content);
    }

    #[test]
    fn test_missing_status_defaults_to_by_invitation() {
        let json = r#"{
            "title": "Angel",
            "description": "",
            "min_investment": "$25,000",
            "benefits": ["Equity stake"]
        }"#;
        let tier: InvestmentTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.status, TierStatus::ByInvitation);
    }

    #[test]
    fn test_default_is_empty_page() {
        let content = PageContent::default();
        assert!(content.tiers.is_empty());
        assert!(content.stats.is_empty());
        assert!(content.milestones.is_empty());
        assert!(content.team.is_empty());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(TierStatus::parse("Open"), TierStatus::Open);
        assert_eq!(TierStatus::parse("Coming Soon"), TierStatus::ComingSoon);
        assert_eq!(TierStatus::parse("ComingSoon"), TierStatus::ComingSoon);
        assert_eq!(TierStatus::parse("By Invitation"), TierStatus::ByInvitation);
    }

    #[test]
    fn test_unknown_status_falls_back() {
        assert_eq!(TierStatus::parse("Sold Out"), TierStatus::ByInvitation);
        assert_eq!(TierStatus::parse(""), TierStatus::ByInvitation);

        let json = r#"{
            "title": "Bridge",
            "description": "",
            "min_investment": "$10,000",
            "benefits": [],
            "status": "Paused"
        }"#;
        let tier: InvestmentTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.status, TierStatus::ByInvitation);
    }

    #[test]
    fn test_status_survives_serialization() {
        for status in [
            TierStatus::Open,
            TierStatus::ComingSoon,
            TierStatus::ByInvitation,
        ] {
            let s = serde_json::to_string(&status).unwrap();
            let back: TierStatus = serde_json::from_str(&s).unwrap();
            assert_eq!(status, back);
        }
    }

    #[test]
    fn test_broken_json_is_an_error() {
        assert!(PageContent::from_json("{ not json").is_err());
    }
}
