use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::Mutex;

use energydash::{
    core::state::AppState,
    domain::{dataset::Dataset, route::Route},
    infrastructure::{
        config::Config,
        dataset_loader::BUNDLED_DATASET,
        tui::{test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
};

fn dataset() -> Dataset {
    Dataset::from_json(BUNDLED_DATASET).expect("bundled dataset parses")
}

fn state(dataset: Dataset, route: Route, reveal: bool) -> AppState {
    let mut config = Config::embedded().expect("embedded config");
    config.reveal.enabled = reveal;
    AppState::new(Arc::new(dataset), config, route, 10.0)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Runs the app until the queued events run out and returns the runner
/// together with the terminal it drew on.
async fn run(
    state: AppState,
    events: Vec<Event>,
    (width, height): (u16, u16),
) -> (AppRunner, Arc<Mutex<TestTui>>) {
    let tui = Arc::new(Mutex::new(
        TestTui::with_events(width, height, events).expect("failed to create TestTui"),
    ));
    let mut runner = AppRunner::new(state, Arc::<Mutex<TestTui>>::clone(&tui));
    runner.run().await.expect("runner exits cleanly");
    (runner, tui)
}

#[tokio::test]
async fn test_home_page_is_drawn_on_start() {
    let (runner, tui) = run(state(dataset(), Route::Home, false), vec![], (140, 60)).await;
    let tui = tui.lock().await;

    assert_eq!(runner.state().system.viewport, (140, 60));
    assert!(tui.draw_count() >= 1);
    assert!(!tui.is_entered(), "terminal is restored on exit");
    assert!(tui.contains("Autonomous Power"), "{:#?}", tui.lines());
    assert!(tui.contains("$4,924"), "{:#?}", tui.lines());
    assert!(tui.contains("1 Home"), "{:#?}", tui.lines());
}

#[tokio::test]
async fn test_number_key_opens_technology_page() {
    let (runner, tui) = run(
        state(dataset(), Route::Home, false),
        vec![key(KeyCode::Char('2'))],
        (120, 50),
    )
    .await;
    let tui = tui.lock().await;

    assert_eq!(runner.state().nav.route, Route::Solar);
    assert!(tui.contains("Photovoltaic Solar"), "{:#?}", tui.lines());
    assert!(tui.contains("CAPEX breakdown"), "{:#?}", tui.lines());
    assert!(tui.contains(" /solar "), "{:#?}", tui.lines());
}

#[tokio::test]
async fn test_tab_cycles_pages() {
    let (runner, _) = run(
        state(dataset(), Route::Dmfc, false),
        vec![key(KeyCode::Tab)],
        (120, 40),
    )
    .await;
    assert_eq!(runner.state().nav.route, Route::Home);
}

#[tokio::test]
async fn test_enter_opens_selected_alternative() {
    let (runner, _) = run(
        state(dataset(), Route::Home, false),
        vec![key(KeyCode::Right), key(KeyCode::Enter)],
        (120, 40),
    )
    .await;
    assert_eq!(runner.state().nav.route, Route::Wind);
}

#[tokio::test]
async fn test_missing_alternative_shows_not_found() {
    let mut dataset = dataset();
    dataset.alternatives.retain(|alt| alt.id != "wind");
    let (_, tui) = run(state(dataset, Route::Wind, false), vec![], (100, 30)).await;
    let tui = tui.lock().await;

    assert!(tui.contains("Wind not found"), "{:#?}", tui.lines());
    assert!(tui.contains("Press 1 to return home."), "{:#?}", tui.lines());
}

#[tokio::test]
async fn test_quit_stops_before_remaining_events() {
    let (runner, _) = run(
        state(dataset(), Route::Home, false),
        vec![key(KeyCode::Char('q')), key(KeyCode::Char('3'))],
        (100, 30),
    )
    .await;
    assert!(runner.state().system.should_quit);
    assert_eq!(runner.state().nav.route, Route::Home);
}

#[tokio::test]
async fn test_ctrl_z_suspends_and_resumes() {
    let ctrl_z = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
    let (runner, tui) = run(
        state(dataset(), Route::Home, false),
        vec![ctrl_z],
        (100, 30),
    )
    .await;

    assert_eq!(tui.lock().await.suspend_count(), 1);
    assert!(!runner.state().system.should_suspend);
    assert!(!runner.state().system.should_quit);
}

#[tokio::test]
async fn test_skip_reveal_shows_hidden_sections() {
    let (_, tui) = run(state(dataset(), Route::Home, true), vec![], (140, 60)).await;
    assert!(!tui.lock().await.contains("Strategic recommendations"));

    let (runner, tui) = run(
        state(dataset(), Route::Home, true),
        vec![key(KeyCode::Char(' '))],
        (140, 60),
    )
    .await;
    assert!(!runner.state().reveal.is_animating());
    assert!(tui.lock().await.contains("Strategic recommendations"));
}

#[tokio::test]
async fn test_resize_event_reflows_page() {
    let (runner, tui) = run(
        state(dataset(), Route::Home, false),
        vec![Event::Resize(90, 30)],
        (140, 60),
    )
    .await;
    assert_eq!(runner.state().system.viewport, (90, 30));
    assert_eq!(tui.lock().await.lines().len(), 30);
}
