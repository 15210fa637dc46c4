use serde_json::{Value, json};

/// Builders for FIRST API shaped payloads used by tests
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// One record of the teams listing, twelve fields
    pub fn create_team(team_number: u32) -> Value {
        json!({
            "teamNumber": team_number,
            "nameFull": format!("Sponsor {team_number} & High School"),
            "nameShort": format!("Team {team_number}"),
            "city": "Seattle",
            "stateProv": "Washington",
            "country": "USA",
            "website": format!("http://team{team_number}.example.org"),
            "rookieYear": 2000 + (team_number % 17),
            "robotName": null,
            "districtCode": "PNW",
            "homeCMP": "Houston",
            "schoolName": "High School"
        })
    }

    /// A teams page holding `count` consecutive team numbers starting at `first_team`
    pub fn create_team_page(
        first_team: u32,
        count: u32,
        page_current: u32,
        page_total: u32,
        team_count_total: u32,
    ) -> String {
        let teams: Vec<Value> = (first_team..first_team + count)
            .map(Self::create_team)
            .collect();
        json!({
            "teams": teams,
            "teamCountTotal": team_count_total,
            "teamCountPage": count,
            "pageCurrent": page_current,
            "pageTotal": page_total
        })
        .to_string()
    }

    /// Status payload
    pub fn create_status() -> String {
        json!({
            "name": "FIRST ROBOTICS COMPETITION API",
            "version": 2,
            "status": "normal"
        })
        .to_string()
    }

    /// Districts payload with the given `(code, name)` pairs
    pub fn create_districts(districts: &[(&str, &str)]) -> String {
        let list: Vec<Value> = districts
            .iter()
            .map(|(code, name)| json!({"code": code, "name": name}))
            .collect();
        json!({"districts": list, "districtCount": districts.len()}).to_string()
    }

    /// One scheduled match with six teams, red 1-3 then blue 1-3
    pub fn create_scheduled_match(match_number: u32, teams: [u32; 6]) -> Value {
        let stations = ["Red1", "Red2", "Red3", "Blue1", "Blue2", "Blue3"];
        let teams: Vec<Value> = stations
            .iter()
            .zip(teams)
            .map(|(station, team)| {
                json!({"teamNumber": team, "station": station, "surrogate": false})
            })
            .collect();
        json!({
            "description": format!("Qualification {match_number}"),
            "field": "Primary",
            "tournamentLevel": "Qualification",
            "matchNumber": match_number,
            "startTime": "2017-04-06T09:00:00",
            "Teams": teams
        })
    }

    /// Schedule payload wrapping the given matches
    pub fn create_schedule(matches: Vec<Value>) -> String {
        json!({"Schedule": matches}).to_string()
    }

    /// Minimal XML document for raw XML output tests
    pub fn create_xml(root: &str, inner: &str) -> String {
        format!("<?xml version=\"1.0\" encoding=\"utf-8\"?><{root}>{inner}</{root}>")
    }
}
