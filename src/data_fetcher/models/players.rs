use super::stats::CountingStats;
use serde::{Deserialize, Serialize};

/// Career-level profile of an athlete.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    #[serde(rename = "gamesPlayed")]
    pub games_played: u32,
    pub totals: CountingStats,
}

/// An athlete's profile scoped to one season.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SeasonProfile {
    pub season: String,
    pub name: String,
    #[serde(rename = "teamAbbreviation")]
    pub team_abbreviation: String,
    #[serde(rename = "gamesPlayed")]
    pub games_played: u32,
    pub totals: CountingStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_profile_deserialization() {
        let json = r#"{
            "id": "jamesle01",
            "name": "LeBron James",
            "gamesPlayed": 1421,
            "totals": {
                "points": 40474,
                "assists": 10420,
                "offensiveRebounds": 1680,
                "defensiveRebounds": 8872,
                "steals": 2191,
                "blocks": 1065,
                "turnovers": 4974
            }
        }"#;
        let profile: PlayerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "jamesle01");
        assert_eq!(profile.name, "LeBron James");
        assert_eq!(profile.games_played, 1421);
        assert_eq!(profile.totals.points, 40474);
    }

    #[test]
    fn test_season_profile_deserialization() {
        let json = r#"{
            "season": "2006-07",
            "name": "LeBron James",
            "teamAbbreviation": "CLE",
            "gamesPlayed": 78,
            "totals": {
                "points": 2132, "assists": 470, "offensiveRebounds": 83,
                "defensiveRebounds": 443, "steals": 125, "blocks": 55, "turnovers": 250
            }
        }"#;
        let profile: SeasonProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.team_abbreviation, "CLE");
        assert_eq!(profile.games_played, 78);
        assert_eq!(profile.totals.turnovers, 250);
    }

    #[test]
    fn test_missing_totals_is_rejected() {
        let json = r#"{"id": "jamesle01", "name": "LeBron James", "gamesPlayed": 3}"#;
        assert!(serde_json::from_str::<PlayerProfile>(json).is_err());
    }
}
