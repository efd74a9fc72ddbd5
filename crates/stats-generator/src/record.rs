//! The player statistics record submitted to the API.

use serde::{Deserialize, Serialize};

/// Statistics of a player for a single game event.
///
/// Serializes with the exact field names the statistics API expects
/// (camelCase). Every field is mandatory. Records are constructed by
/// [`crate::StatsGenerator::generate`], never mutated, and discarded once
/// submitted.
///
/// String-typed fields carry values the API parses on its side: `player_id`
/// and `game_id` are string-encoded integers, `minutes_played` is a decimal
/// string in tenths of a minute, and `id` is two integers joined with a
/// hyphen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatRecord {
    pub player_id: String,
    pub game_id: String,
    pub timestamp: String,
    pub season: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub fouls: i64,
    pub turnovers: i64,
    pub team_id: i64,
    pub id: String,
    pub minutes_played: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PlayerStatRecord {
        PlayerStatRecord {
            player_id: "7".to_string(),
            game_id: "23".to_string(),
            timestamp: "2024-03-01T19:30:00.000000".to_string(),
            season: "2023-2024".to_string(),
            points: 31,
            rebounds: 11,
            assists: 8,
            steals: 2,
            blocks: 1,
            fouls: 3,
            turnovers: 4,
            team_id: 5,
            id: "123456-9876543".to_string(),
            minutes_played: "37.5".to_string(),
        }
    }

    #[test]
    fn test_serializes_with_api_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();
        let object = json.as_object().unwrap();

        let expected = [
            "playerId",
            "gameId",
            "timestamp",
            "season",
            "points",
            "rebounds",
            "assists",
            "steals",
            "blocks",
            "fouls",
            "turnovers",
            "teamId",
            "id",
            "minutesPlayed",
        ];

        assert_eq!(object.len(), expected.len());
        for name in expected {
            assert!(object.contains_key(name), "missing field {name}");
        }

        assert_eq!(json["playerId"], "7");
        assert_eq!(json["teamId"], 5);
        assert_eq!(json["minutesPlayed"], "37.5");
        assert_eq!(json["id"], "123456-9876543");
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let record = sample_record();

        let json = serde_json::to_string(&record).unwrap();
        let parsed: PlayerStatRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
    }
}
