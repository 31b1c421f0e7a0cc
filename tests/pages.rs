mod common;

use biblioteca_web::pages::{CatalogPage, DashboardPage, LoansPage, LoginPage};
use biblioteca_web::platform::Slot;
use biblioteca_web::services::HttpMethod;
use biblioteca_web::utils::KeyValueStorage;
use biblioteca_web::viewmodels::{LogoutOutcome, MutationOutcome};
use biblioteca_web::views::{ActionKind, UserAction};
use common::{book, list, loan, ok, Reply, World, USER_JSON};
use futures::executor::block_on;

#[test]
fn no_token_means_no_request_and_redirect() {
    let world = World::new(&[("user", USER_JSON)], vec![]);
    let page = CatalogPage::new(world.host(), world.api());

    assert!(block_on(page.init()).is_err());

    assert!(world.backend.requests.borrow().is_empty());
    assert_eq!(*world.browser.visited.borrow(), vec!["/login"]);
    assert!(world.browser.content().is_empty());
}

#[test]
fn corrupted_profile_is_cleared_before_redirect() {
    let world = World::new(&[("token", "t0k"), ("user", "{\"id\": ")], vec![]);
    let page = LoansPage::new(world.host(), world.api());

    assert!(block_on(page.init()).is_err());

    assert!(world.storage.is_empty());
    assert_eq!(*world.browser.visited.borrow(), vec!["/login"]);
}

#[test]
fn loans_example_shows_only_current_user() {
    let world = World::signed_in(vec![ok(list(&[loan(1, 7, "activo", 0.0), loan(2, 9, "devuelto", 0.0)]))]);
    let page = LoansPage::new(world.host(), world.api());

    block_on(page.init()).unwrap();

    let content = world.browser.content();
    assert!(content.contains("Préstamo #1"));
    assert!(!content.contains("Préstamo #2"));
    assert!(content.contains("data-action=\"return\""));
    assert!(!content.contains("Multa"));
    assert_eq!(world.browser.text.borrow()[&Slot::UserRole], "estudiante");
}

#[test]
fn return_reloads_and_rerenders() {
    let world = World::signed_in(vec![
        ok(list(&[loan(1, 7, "activo", 0.0)])),
        ok(r#"{"message": "Libro devuelto", "multa": 4.5}"#),
        ok(list(&[loan(1, 7, "devuelto", 4.5)])),
    ]);
    let page = LoansPage::new(world.host(), world.api());
    block_on(page.init()).unwrap();

    let outcome = block_on(page.handle_action(UserAction { kind: ActionKind::Return, id: 1 }));

    assert_eq!(outcome, Some(MutationOutcome::Done));
    let requests = world.backend.requests.borrow();
    assert_eq!(requests[1].method, HttpMethod::Post);
    assert_eq!(requests[1].url, "/api/loans/1/return");
    let content = world.browser.content();
    assert!(content.contains("Finalizado"));
    assert!(content.contains("Multa: $4.5"));
    assert_eq!(world.browser.last_message().as_deref(), Some("Libro devuelto exitosamente"));
    // carga inicial y luego devolución + recarga
    assert_eq!(*world.browser.loading.borrow(), vec![true, false, true, false]);
}

#[test]
fn rejected_loan_leaves_catalog_untouched() {
    let world = World::signed_in(vec![
        ok(list(&[book(3, 1)])),
        Reply::Status(400, r#"{"error": "Límite de préstamos alcanzado"}"#.into()),
    ]);
    let page = CatalogPage::new(world.host(), world.api());
    block_on(page.init()).unwrap();
    let before = world.browser.content();

    let outcome = block_on(page.handle_action(UserAction { kind: ActionKind::Loan, id: 3 }));

    assert!(matches!(outcome, Some(MutationOutcome::Failed(_))));
    assert_eq!(world.backend.requests.borrow().len(), 2);
    assert_eq!(world.browser.content(), before);
    assert_eq!(
        world.browser.last_message().as_deref(),
        Some("Error al realizar el préstamo: Límite de préstamos alcanzado")
    );
}

#[test]
fn dashboard_join_fails_as_a_whole() {
    let world = World::signed_in(vec![ok(list(&[book(1, 1)])), ok("[]"), Reply::Offline]);
    let page = DashboardPage::new(world.host(), world.api());

    block_on(page.init()).unwrap();

    assert!(world.browser.content().is_empty());
    assert_eq!(world.browser.last_message().as_deref(), Some("Error al cargar el dashboard"));
    assert_eq!(*world.browser.loading.borrow(), vec![true, false]);
}

fn logout_with(reply: Reply) -> (World, LogoutOutcome) {
    let world = World::new(
        &[("token", "t0k"), ("user", USER_JSON), ("preferencias", "{}")],
        vec![ok("[]"), reply],
    );
    world.cookies.set("token");
    world.cookies.set("user_id");
    let page = CatalogPage::new(world.host(), world.api());
    block_on(page.init()).unwrap();
    let outcome = block_on(page.logout());
    (world, outcome)
}

#[test]
fn logout_always_clears_and_returns_to_login() {
    for (reply, expected) in [
        (ok(r#"{"success": true}"#), LogoutOutcome::Confirmed),
        (Reply::Status(500, "{}".into()), LogoutOutcome::Failed(biblioteca_web::error::ApiError::Application {
            status: 500,
            message: "HTTP 500".into(),
        })),
        (Reply::Hang, LogoutOutcome::TimedOut),
    ] {
        let (world, outcome) = logout_with(reply);
        assert_eq!(outcome, expected);
        assert!(world.storage.is_empty());
        assert_eq!(world.storage.get_item("token").unwrap(), None);
        assert!(world.cookies.names().is_empty());
        assert_eq!(*world.browser.visited.borrow(), vec!["/login"]);
        assert_eq!(world.backend.urls().last().map(String::as_str), Some("/api/logout"));
    }
}

#[test]
fn hung_logout_does_not_bounce_between_login_and_dashboard() {
    let world = World::signed_in(vec![ok(list(&[loan(1, 7, "activo", 0.0)])), Reply::Hang]);
    let page = LoansPage::new(world.host(), world.api());
    block_on(page.init()).unwrap();
    assert_eq!(block_on(page.logout()), LogoutOutcome::TimedOut);
    assert!(world.cookies.names().is_empty());

    // de vuelta en /login: check-auth ya no ve la cookie y el formulario se queda
    world.backend.push(Reply::CheckAuth);
    let login = LoginPage::new(world.host(), world.api());
    assert!(!block_on(login.init()));
    assert_eq!(*world.browser.visited.borrow(), vec!["/login"]);
}

#[test]
fn logout_waits_for_timeout_then_redirect_delay() {
    let (world, outcome) = logout_with(Reply::Hang);
    assert_eq!(outcome, LogoutOutcome::TimedOut);
    assert_eq!(*world.browser.sleeps.borrow(), vec![3000, 500]);
}
