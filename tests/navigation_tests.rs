use hawk_advisor::core::{Action, App, Route, Router, Screen, ScreenData, update};
use hawk_advisor::data::{BundledResources, MemoryResources, ResourceId, load_careers};

// ============================================================================
// Helper Functions
// ============================================================================

fn nurse_only() -> MemoryResources {
    MemoryResources::new()
        .with(
            ResourceId::Careers,
            r#"[{"name":"Nurse","description":"Cares for patients.","avgSalary":"$86,000","growth":"+6%","icon":"ic_nurse"}]"#,
        )
        .with(ResourceId::Electives, "[]")
        .with(ResourceId::Professors, "[]")
}

fn electives_view(screen: &Screen) -> &hawk_advisor::core::screen::ElectivesView {
    match screen.data() {
        Some(ScreenData::Electives(view)) => view,
        other => panic!("expected electives screen, got {other:?}"),
    }
}

// ============================================================================
// Router
// ============================================================================

#[test]
fn test_back_twice_from_electives_returns_to_majors() {
    let mut router = Router::new();
    router.navigate(Route::Majors);
    router
        .navigate_path(&Route::careers("Computer Science").to_path())
        .unwrap();
    router
        .navigate_path(&Route::electives("Software Engineer").to_path())
        .unwrap();

    assert!(router.back());
    assert!(router.back());
    assert_eq!(router.current(), &Route::Majors);
}

#[test]
fn test_route_parameters_round_trip_through_paths() {
    for name in [
        "Computer Science",
        "Computer Science / Engineering",
        "R&D Lead",
        "50% Remote?",
        "Électricien",
    ] {
        let careers = Route::careers(name);
        let electives = Route::electives(name);
        assert_eq!(Route::from_path(&careers.to_path()), Ok(careers));
        assert_eq!(Route::from_path(&electives.to_path()), Ok(electives));
    }
}

// ============================================================================
// Screens
// ============================================================================

#[test]
fn test_electives_for_nurse_keeps_source_figures() {
    let source = nurse_only();
    let mut router = Router::new();
    router.navigate_path("electives/Nurse").unwrap();

    let screen = Screen::mount(router.current().clone(), &source);
    let view = electives_view(&screen);
    assert_eq!(view.career.name, "Nurse");
    assert_eq!(view.career.avg_salary, "$86,000");
    assert_eq!(view.career.growth, "+6%");
}

#[test]
fn test_unknown_career_title_renders_placeholder() {
    let source = nurse_only();
    let screen = Screen::mount(Route::electives("Marine Biologist"), &source);
    let view = electives_view(&screen);
    assert_eq!(view.career.name, "Marine Biologist");
    assert!(view.career.description.contains("Marine Biologist"));
    assert_eq!(view.other_careers.len(), 1);
}

#[test]
fn test_missing_parameter_renders_placeholder() {
    let source = nurse_only();
    let route = Route::from_path("electives/").unwrap();
    let screen = Screen::mount(route, &source);
    assert_eq!(electives_view(&screen).career.name, "Career");
}

// ============================================================================
// Full App Flow
// ============================================================================

#[test]
fn test_bundled_walkthrough() {
    let source = BundledResources;
    let mut app = App::new(&source);

    update(&mut app, Action::Select, &source); // landing -> majors
    update(&mut app, Action::Select, &source); // first major -> careers
    assert!(matches!(app.current_route(), Route::Careers { .. }));

    update(&mut app, Action::Select, &source); // first career -> electives
    let first_career = load_careers(&source).unwrap().remove(0);
    assert_eq!(electives_view(&app.screen).career, first_career);

    update(&mut app, Action::Back, &source);
    update(&mut app, Action::Back, &source);
    assert_eq!(app.current_route(), &Route::Majors);
    assert_eq!(app.router.depth(), 2);
}

#[test]
fn test_other_careers_navigate_to_their_electives() {
    let source = BundledResources;
    let careers = load_careers(&source).unwrap();
    let mut app = App::starting_at(Route::electives(&careers[0].name), &source);

    update(&mut app, Action::Down, &source);
    update(&mut app, Action::Select, &source);
    // careers[0] is excluded from "other careers", so index 1 is careers[2].
    assert_eq!(app.current_route(), &Route::electives(&careers[2].name));
}
