use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["localeats"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_locate_command() {
    let cli = Cli::try_parse_from(["localeats", "locate"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Locate)));
}

#[test]
fn parses_interactive_command() {
    let cli = Cli::try_parse_from(["localeats", "interactive"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Interactive)));
}

#[test]
fn search_with_query_and_defaults() {
    let cli = Cli::try_parse_from(["localeats", "search", "boat noodles"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            query: Some(ref q),
            filter: None,
            lat: None,
            lng: None,
            json: false,
        }) if q == "boat noodles"
    ));
}

#[test]
fn search_filter_is_normalised_to_chip_label() {
    let cli = Cli::try_parse_from(["localeats", "search", "--filter", "hidden spots"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search { filter: Some(ref f), query: None, .. }) if f == "Hidden Spots"
    ));
}

#[test]
fn search_rejects_unknown_filter() {
    let result = Cli::try_parse_from(["localeats", "search", "--filter", "michelin"]);
    assert!(result.is_err());
}

#[test]
fn search_accepts_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "localeats", "search", "--lat", "-33.8688", "--lng", "151.2093", "--json",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Search {
            lat: Some(lat),
            lng: Some(lng),
            json: true,
            ..
        }) => {
            assert!((lat + 33.8688).abs() < f64::EPSILON);
            assert!((lng - 151.2093).abs() < f64::EPSILON);
        }
        other => panic!("unexpected parse: {other:?}"),
    }
}

#[test]
fn search_lat_requires_lng() {
    let result = Cli::try_parse_from(["localeats", "search", "--lat", "10.0"]);
    assert!(result.is_err());
}

#[test]
fn build_locator_prefers_explicit_coordinates() {
    let config = AppConfig {
        log_level: "warn".to_owned(),
        gemini_base_url: "http://localhost".to_owned(),
        gemini_model: "gemini-2.5-flash".to_owned(),
        user_agent: "localeats-test/0.1".to_owned(),
        fixed_location: None,
        ip_geolocation_enabled: false,
        ip_geolocation_url: "http://localhost/json/".to_owned(),
        geolocation_timeout_secs: 1,
    };
    assert!(matches!(
        build_locator(&config, Some(1.0), Some(2.0)).unwrap(),
        PlatformLocator::Fixed(_)
    ));
    assert!(matches!(
        build_locator(&config, None, None).unwrap(),
        PlatformLocator::Unsupported(_)
    ));
    assert!(build_locator(&config, Some(91.0), Some(2.0)).is_err());
}

#[test]
fn help_is_handled_by_the_parser() {
    let err = Cli::try_parse_from(["localeats", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

mod search_command {
    use localeats_core::{FetchFailure, LocalFoodAnswer};
    use localeats_locator::LocationFailure;

    use crate::controller::tests::{here, EchoSource, ScriptedLocator};
    use crate::controller::Controller;
    use crate::run_search;

    fn controller(
        location: Result<localeats_core::Coordinate, LocationFailure>,
    ) -> Controller<ScriptedLocator, EchoSource> {
        Controller::new(ScriptedLocator::new(vec![location]), EchoSource::default())
    }

    #[tokio::test]
    async fn json_output_lists_records() {
        let mut c = controller(Ok(here()));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let ok = run_search(&mut c, Some("khao soi".to_owned()), None, true, &mut out, &mut err)
            .await
            .unwrap();

        assert!(ok);
        assert!(err.is_empty());
        let answer: LocalFoodAnswer = serde_json::from_slice(&out).unwrap();
        assert_eq!(answer.explanation, "Explanation for khao soi");
        assert_eq!(answer.records.len(), 1);
        assert_eq!(answer.records[0].name, "khao soi");
    }

    #[tokio::test]
    async fn typed_query_wins_over_filter_label() {
        let mut c = controller(Ok(here()));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        run_search(
            &mut c,
            Some("boat noodles".to_owned()),
            Some("Street Food".to_owned()),
            false,
            &mut out,
            &mut err,
        )
        .await
        .unwrap();

        assert_eq!(c.state().active_filter, "Street Food");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[Street Food]"));
        assert!(text.contains("boat noodles  <Local Authentic>"));
    }

    #[tokio::test]
    async fn filter_alone_searches_for_its_label() {
        let mut c = controller(Ok(here()));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        run_search(&mut c, None, Some("Traditional".to_owned()), false, &mut out, &mut err)
            .await
            .unwrap();

        assert_eq!(c.state().records[0].name, "Traditional");
    }

    #[tokio::test]
    async fn failed_search_reports_failure_on_stderr_in_json_mode() {
        let mut c = controller(Ok(here()));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let ok = run_search(&mut c, Some("fail".to_owned()), None, true, &mut out, &mut err)
            .await
            .unwrap();

        assert!(!ok);
        assert!(out.is_empty());
        assert_eq!(String::from_utf8(err).unwrap().trim(), FetchFailure.to_string());
    }

    #[tokio::test]
    async fn location_failure_skips_the_search() {
        let mut c = controller(Err(LocationFailure::PermissionOrSignalDenied));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let ok = run_search(&mut c, Some("larb".to_owned()), None, false, &mut out, &mut err)
            .await
            .unwrap();

        assert!(!ok);
        assert!(c.state().records.is_empty());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("! Please enable location services to find nearby food."));
    }
}
