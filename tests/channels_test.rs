// tests/channels_test.rs — Integration test: reactive binder and view state

use pretty_assertions::assert_eq;

use cupdash::core::channels::{country_wins, year_result};
use cupdash::core::{Binder, ChannelId, DashboardContext, Freshness, InputEvent, ViewState};
use cupdash::data::{Record, RecordSet};

fn rec(year: i32, winner: &str, runner_up: &str) -> Record {
    Record {
        year,
        winner: winner.into(),
        runner_up: runner_up.into(),
    }
}

fn context() -> DashboardContext {
    let set: RecordSet = vec![
        rec(1998, "France", "Brazil"),
        rec(2002, "Brazil", "Germany"),
        rec(2006, "Italy", "France"),
        rec(2018, "France", "Croatia"),
    ]
    .into_iter()
    .collect();
    DashboardContext::new(set)
}

#[test]
fn test_default_fallback_for_unknown_country() {
    let ctx = context();
    assert_eq!(ctx.tally().wins("Atlantis"), 0);
    assert_eq!(
        country_wins(&ctx, "Atlantis"),
        "Atlantis has won the World Cup 0 times."
    );
}

#[test]
fn test_year_lookup_exactness() {
    assert_eq!(
        year_result(&context(), 1998),
        "In 1998, France won the World Cup and Brazil was the runner-up."
    );
}

#[test]
fn test_duplicate_year_uses_first_record() {
    let set: RecordSet = vec![rec(1950, "Uruguay", "Brazil"), rec(1950, "Brazil", "Sweden")]
        .into_iter()
        .collect();
    let ctx = DashboardContext::new(set);
    assert_eq!(ctx.years(), [1950]);
    assert_eq!(
        year_result(&ctx, 1950),
        "In 1950, Uruguay won the World Cup and Brazil was the runner-up."
    );
}

#[test]
fn test_channel_independence() {
    let ctx = context();
    let binder = Binder::new();
    let mut state = ViewState::initial(&binder, &ctx).unwrap();

    let year_before = state.output(ChannelId::Year).cloned();
    let map_before = state.output(ChannelId::Map).cloned();

    for name in ["Brazil", "Italy", "Nowhere", "France"] {
        state
            .apply(&binder, &ctx, InputEvent::Country(name.into()))
            .unwrap();
        assert_eq!(state.output(ChannelId::Year).cloned(), year_before);
        assert_eq!(state.output(ChannelId::Map).cloned(), map_before);
    }
    assert_eq!(
        state.output(ChannelId::Country).and_then(|o| o.as_text()),
        Some("France has won the World Cup 2 times.")
    );
}

#[test]
fn test_idempotence() {
    let ctx = context();
    let binder = Binder::new();
    for event in [
        InputEvent::Map,
        InputEvent::Country("France".into()),
        InputEvent::Year(2006),
    ] {
        let (_, a) = binder.dispatch(&ctx, &event).unwrap();
        let (_, b) = binder.dispatch(&ctx, &event).unwrap();
        assert_eq!(
            serde_json::to_vec(&a).unwrap(),
            serde_json::to_vec(&b).unwrap()
        );
    }
}

#[test]
fn test_initial_state_every_channel_fresh() {
    let ctx = context();
    let state = ViewState::initial(&Binder::new(), &ctx).unwrap();
    for id in ChannelId::ALL {
        assert_eq!(state.channel(id).freshness, Freshness::Fresh, "{id}");
        assert!(state.output(id).is_some(), "{id}");
    }
    assert_eq!(
        state.country.input,
        Some(InputEvent::Country("France".into()))
    );
    assert_eq!(state.year.input, Some(InputEvent::Year(1998)));
}

#[test]
fn test_map_covers_unique_winners() {
    let ctx = context();
    let (_, out) = Binder::new().dispatch(&ctx, &InputEvent::Map).unwrap();
    let fig = out.as_figure().unwrap();
    let names: Vec<&str> = fig.data.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["France", "Brazil", "Italy"]);
    let france = &fig.data[0];
    assert_eq!(france.customdata, vec![2]);
}

#[test]
fn test_concurrent_dispatch_shares_context() {
    let ctx = std::sync::Arc::new(context());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                let event = if i % 2 == 0 {
                    InputEvent::Year(2002)
                } else {
                    InputEvent::Country("Brazil".into())
                };
                let (_, out) = Binder::new().dispatch(&ctx, &event).unwrap();
                out.as_text().unwrap().to_string()
            })
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        let text = h.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(
                text,
                "In 2002, Brazil won the World Cup and Germany was the runner-up."
            );
        } else {
            assert_eq!(text, "Brazil has won the World Cup 1 times.");
        }
    }
}
