use pretty_assertions::assert_eq;

const INPUT: &str = "tick,game_time,name,team_name,X,Y,Z,health,round,event,attacker_name,attacker_X,attacker_Y,attacker_Z,victim_name,weapon,headshot
1,0.5,A,CT,1,2,3,100,1,,,,,,,,
1,0.5,B,TERRORIST,4,5,6,80,1,,,,,,,,
2,1.0,A,CT,1,2,3,100,2,kill,A,1,2,3,B,ak47,true
";

fn run() -> common::SimulationData {
    analysis::parse(&analysis::Config::default(), INPUT.as_bytes()).unwrap()
}

#[test]
fn round_trip_through_json() {
    let result = run();

    let encoded = serde_json::to_string(&result).unwrap();
    let decoded: common::SimulationData = serde_json::from_str(&encoded).unwrap();

    assert_eq!(result, decoded);
}

#[test]
fn transform_is_deterministic() {
    assert_eq!(run(), run());
}

#[test]
fn missing_actor_fields_serialize_as_null() {
    let result = run();

    let value = serde_json::to_value(&result).unwrap();
    let attacker = &value["events"][0]["attacker"];
    let victim = &value["events"][0]["victim"];

    // fixed-shape records, every slot is present even when unknown
    assert!(attacker.get("yaw").is_some());
    assert!(attacker["yaw"].is_null());
    assert!(victim.get("position").is_some());
    assert_eq!(
        serde_json::json!([4.0, 6.0, 5.0]),
        value["positions"][0]["players"][1]["position"]
    );
    assert!(victim["health"].is_null());
}
