//! End-to-end runs of the enrichment pipeline over fixture files.

use std::path::Path;

use quakeprep::core::pipeline::{run_events, PipelineConfig};
use quakeprep::util::error::PrepError;

const HEADER_OUT: &str = "time,place,latitude,longitude,mag,country,sub_continent,continent";

const COUNTRIES_CSV: &str = "\
name,alpha-2,alpha-3,country-code,iso_3166-2,region,sub-region,intermediate-region
Antarctica,AQ,ATA,010,ISO 3166-2:AQ,,,
Venezuela,VE,VEN,862,ISO 3166-2:VE,Americas,Latin America and the Caribbean,South America
France,FR,FRA,250,ISO 3166-2:FR,Europe,Western Europe,
Japan,JP,JPN,392,ISO 3166-2:JP,Asia,Eastern Asia,
";

const GAZETTEER_CSV: &str = "\
lat,lon,name,admin1,admin2,cc
10.48,-66.90,Caracas,Capital,,VE
48.85,2.35,Paris,Ile-de-France,,FR
35.68,139.69,Tokyo,Tokyo,,JP
-77.85,166.67,McMurdo Station,,,AQ
";

const EVENTS_HEADER: &str = "time,place,latitude,longitude,depth,mag,magType\n";

fn write_fixtures(dir: &Path, events: &str) -> PipelineConfig {
    let config = PipelineConfig {
        events: dir.join("events.csv"),
        countries: dir.join("continents.csv"),
        gazetteer: dir.join("cities.csv"),
        output: dir.join("out.csv"),
        min_year: 1973,
    };
    std::fs::write(&config.events, format!("{EVENTS_HEADER}{events}")).unwrap();
    std::fs::write(&config.countries, COUNTRIES_CSV).unwrap();
    std::fs::write(&config.gazetteer, GAZETTEER_CSV).unwrap();
    config
}

#[test]
fn venezuela_event_is_enriched() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path(), "2023-05-01T10:00:00.000000Z,,12.0,-70.0,10.0,5.0,mww\n");

    let stats = run_events(&config).unwrap();
    assert_eq!(stats.emitted, 1);

    let out = std::fs::read_to_string(&config.output).unwrap();
    assert_eq!(
        out,
        format!("{HEADER_OUT}\n2023-05-01T10:00:00.000000Z,,12.0,-70.0,5.0,Venezuela,Southern America,South America\n")
    );
}

#[test]
fn pre_1973_event_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixtures(dir.path(), "1960-05-01T10:00:00.000000Z,,12.0,-70.0,10.0,5.0,mww\n");

    let stats = run_events(&config).unwrap();
    assert_eq!(stats.before_cutoff, 1);
    assert_eq!(std::fs::read_to_string(&config.output).unwrap(), format!("{HEADER_OUT}\n"));
}

#[test]
fn mixed_input_keeps_order_and_drops_failures() {
    let dir = tempfile::tempdir().unwrap();
    let events = "\
2010-01-01T00:00:00.000Z,off the coast of Honshu,36.0,141.0,20,7.1,mww
1950-01-01T00:00:00.000Z,old event,48.0,2.0,10,6.0,mw
2011-01-01T00:00:00.000Z,ross sea,-76.0,170.0,10,6.2,mww
2012-01-01T00:00:00.000Z,\"10 km N of Caracas, Venezuela\",10.6,-66.9,10,5.5,mww
2013-01-01T00:00:00.000Z,central France,46.0,3.0,10,5.1,mww
";
    let config = write_fixtures(dir.path(), events);

    let stats = run_events(&config).unwrap();
    assert_eq!((stats.read, stats.emitted), (5, 3));
    assert_eq!(stats.before_cutoff, 1);
    assert_eq!(stats.unknown_country, 1);

    let out = std::fs::read_to_string(&config.output).unwrap();
    let rows: Vec<&str> = out.lines().skip(1).collect();
    assert_eq!(
        rows,
        [
            "2010-01-01T00:00:00.000Z,Off the coast of Honshu,36.0,141.0,7.1,Japan,Eastern Asia,Asia",
            "2012-01-01T00:00:00.000Z,\"10 km N of Caracas, Venezuela\",10.6,-66.9,5.5,Venezuela,Southern America,South America",
            "2013-01-01T00:00:00.000Z,Central France,46.0,3.0,5.1,France,Western Europe,Europe",
        ]
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let events = "\
2013-01-01T00:00:00.000Z,central France,46.0,3.0,10,5.1,mww
2023-05-01T10:00:00.000000Z,,12.0,-70.0,10.0,5.0,mww
";
    let config = write_fixtures(dir.path(), events);

    run_events(&config).unwrap();
    let first = std::fs::read(&config.output).unwrap();
    run_events(&config).unwrap();
    let second = std::fs::read(&config.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn bad_timestamp_aborts_without_touching_output() {
    let dir = tempfile::tempdir().unwrap();
    let events = "\
2013-01-01T00:00:00.000Z,central France,46.0,3.0,10,5.1,mww
13/01/2014 00:00,somewhere,46.0,3.0,10,5.1,mww
";
    let config = write_fixtures(dir.path(), events);
    std::fs::write(&config.output, "previous run").unwrap();

    let err = run_events(&config).unwrap_err();
    assert!(matches!(err, PrepError::Timestamp { .. }));
    assert_eq!(std::fs::read_to_string(&config.output).unwrap(), "previous run");
}

#[test]
fn missing_gazetteer_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_fixtures(dir.path(), "");
    config.gazetteer = dir.path().join("absent.csv");

    assert!(matches!(run_events(&config), Err(PrepError::MissingInput(_))));
    assert!(!config.output.exists());
}
