use spectrum_common::catalogue::categories_from_names;
use spectrum_common::{decade_label, ChartGeometry, FetchDecision, RawTrack, SpectrumSession};

fn rock_response() -> Vec<RawTrack> {
    serde_json::from_str(
        r#"[{"id":"1","name":"A","artist":"B","genre":"rock","decade":"1990-1999",
             "energy":0.8,"valence":0.3,"danceability":0.5,"tempo":120,"durationMs":200000}]"#,
    )
    .unwrap()
}

#[test]
fn toggling_a_genre_plots_and_selects_its_tracks() {
    let catalogue = categories_from_names(&["rock", "jazz"]);
    let mut session = SpectrumSession::new(200);

    let ticket = match session.toggle_genre("rock") {
        FetchDecision::Fetch(ticket) => ticket,
        FetchDecision::Clear => panic!("expected a fetch"),
    };
    assert_eq!(
        ticket.query.path_and_query().unwrap(),
        "/recommendation/database-tracks?genre=rock&limit=200"
    );

    assert!(session.apply_response(ticket.seq, rock_response(), &catalogue));
    let datasets = session.datasets();
    assert_eq!(datasets.len(), 1);
    assert_eq!((datasets[0].points[0].x, datasets[0].points[0].y), (0.3, 0.8));
    assert_eq!(datasets[0].background_color, catalogue[0].color);
    assert_eq!(session.records()[0].duration, 200.0);

    let geometry = ChartGeometry::default();
    let (px, py) = geometry.to_pixel(0.3, 0.8);
    let hit = geometry.hit_test(session.datasets(), px, py, None).unwrap();
    let selected = session.select(hit).unwrap().clone();

    assert_eq!(selected.track_name, "A");
    assert_eq!(selected.artist_name, "B");
    assert_eq!(selected.genre, "rock");
    assert_eq!(selected.decade, "1990-1999");
    assert_eq!(decade_label(&selected.decade), "90s");
}

#[test]
fn untoggling_the_last_genre_clears_everything() {
    let catalogue = categories_from_names(&["rock", "jazz"]);
    let mut session = SpectrumSession::new(200);
    let FetchDecision::Fetch(ticket) = session.toggle_genre("rock") else {
        panic!("expected a fetch");
    };
    session.apply_response(ticket.seq, rock_response(), &catalogue);
    session.select(0);

    assert_eq!(session.toggle_genre("rock"), FetchDecision::Clear);
    assert!(session.datasets().is_empty());
    assert!(session.selected().is_none());

    // A response that was still in flight must not resurrect the plot.
    assert!(!session.apply_response(ticket.seq, rock_response(), &catalogue));
    assert!(session.datasets().is_empty());
}
