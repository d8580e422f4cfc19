//! Unit tests for ID and outcome types

use super::*;
use std::str::FromStr;

#[cfg(test)]
mod league_id_tests {
    use super::*;

    #[test]
    fn test_league_id_new() {
        let id = LeagueId::new(3);
        assert_eq!(id.as_u32(), 3);
    }

    #[test]
    fn test_league_id_default() {
        assert_eq!(LeagueId::default().as_u32(), 1);
    }

    #[test]
    fn test_league_id_from_str_valid() {
        let id = LeagueId::from_str("42").unwrap();
        assert_eq!(id.as_u32(), 42);
    }

    #[test]
    fn test_league_id_from_str_negative() {
        let result = LeagueId::from_str("-1");
        assert!(result.is_err());
    }

    #[test]
    fn test_league_id_serde() {
        let id = LeagueId::new(1);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "1");

        let deserialized: LeagueId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }
}

#[cfg(test)]
mod team_id_tests {
    use super::*;

    #[test]
    fn test_team_id_display() {
        let id = TeamId::new(10);
        assert_eq!(id.to_string(), "10");
        assert_eq!(id.as_i64(), 10);
    }

    #[test]
    fn test_team_id_from_str_invalid() {
        let result = TeamId::from_str("ten");
        assert!(result.is_err());
    }

    #[test]
    fn test_team_id_ordering() {
        assert!(TeamId::new(1) < TeamId::new(2));
    }

    #[test]
    fn test_fixture_id_serde_transparent() {
        let json = serde_json::to_string(&FixtureId::new(20)).unwrap();
        assert_eq!(json, "20");
    }
}

#[cfg(test)]
mod winner_tests {
    use super::*;

    #[test]
    fn test_parse_draw() {
        let winner = Winner::parse("Draw");
        assert!(winner.is_draw());
        assert_eq!(winner.team(), None);
        assert_eq!(winner.as_str(), DRAW);
    }

    #[test]
    fn test_parse_team() {
        let winner = Winner::parse("NK Osijek");
        assert!(!winner.is_draw());
        assert_eq!(winner.team(), Some("NK Osijek"));
        assert_eq!(winner.to_string(), "NK Osijek");
    }

    #[test]
    fn test_draw_is_case_sensitive() {
        // Only the exact literal counts as a draw.
        let winner = Winner::parse("draw");
        assert_eq!(winner, Winner::Team("draw".to_string()));
    }

    #[test]
    fn test_winner_serializes_as_plain_string() {
        let json = serde_json::to_string(&Winner::Draw).unwrap();
        assert_eq!(json, r#""Draw""#);

        let json = serde_json::to_string(&Winner::Team("HNK Rijeka".to_string())).unwrap();
        assert_eq!(json, r#""HNK Rijeka""#);
    }

    #[test]
    fn test_winner_deserializes_from_plain_string() {
        let winner: Winner = serde_json::from_str(r#""Draw""#).unwrap();
        assert_eq!(winner, Winner::Draw);

        let winner: Winner = serde_json::from_str(r#""Hajduk Split""#).unwrap();
        assert_eq!(winner, Winner::Team("Hajduk Split".to_string()));
    }

    #[test]
    fn test_winner_from_str() {
        let winner = Winner::from_str("Istra 1961").unwrap();
        assert_eq!(winner.team(), Some("Istra 1961"));
    }
}
