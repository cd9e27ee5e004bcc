use crate::helpers::{get_body, TestApp};
use cross_jungle_site::domain::Route;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_render_every_route(app: &mut TestApp) {
    for route in Route::ALL {
        let response = app.get_page(route.path()).await;
        assert_eq!(
            response.status().as_u16(),
            200,
            "Failed for route: {:?}",
            route
        );

        let body = get_body(response).await;
        assert!(
            body.contains("CROSS JUNGLE INSIDE"),
            "No navbar on {:?}",
            route
        );
        assert!(body.contains("Horários"), "No footer on {:?}", route);
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_paths(app: &mut TestApp) {
    for path in ["/nao-existe", "/participant/extra", "/admin"] {
        let response = app.get_page(path).await;
        assert_eq!(response.status().as_u16(), 404, "Failed for {path}");

        let body = get_body(response).await;
        assert!(body.contains("Página não encontrada"));
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_redirect_home_on_logout(app: &mut TestApp) {
    let response = app.post_logout().await;
    assert_eq!(response.status().as_u16(), 303);

    let location = response
        .headers()
        .get("location")
        .expect("No location header")
        .to_str()
        .unwrap();
    assert_eq!(location, "/?logout=true");

    let response = app.get_page(location).await;
    assert_eq!(response.status().as_u16(), 200);
    let body = get_body(response).await;
    assert!(body.contains("Logout realizado!"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_not_show_logout_notice_on_plain_visit(app: &mut TestApp) {
    let body = get_body(app.get_page("/").await).await;
    assert!(!body.contains("Logout realizado!"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_show_registered_team_to_participant(app: &mut TestApp) {
    let body = get_body(app.get_page("/participant").await).await;
    assert!(body.contains("Selva Warriors"));
    assert!(body.contains("Líder da Equipe"));
    assert_eq!(body.matches("Membro</span>").count(), 3);
    assert!(body.contains("08:00"));
    assert!(body.contains("Atestado médico obrigatório"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_wrap_carousels(app: &mut TestApp) {
    let body = get_body(app.get_page("/").await).await;
    assert!(body.contains("Ogro Challenge 2024"));
    assert!(body.contains("15 de Dezembro, 2024"));
    // Previous from the first slide is the last one.
    assert!(body.contains("/?tournament=3&gallery=0#torneios"));
    assert!(body.contains("/?tournament=0&gallery=5#galeria"));

    let body = get_body(app.get_page("/?tournament=5&gallery=7").await).await;
    assert!(body.contains("Jungle Warrior Cup"));
    assert!(body.contains("Notificar quando abrir"));
    assert!(body.contains("/?tournament=2&gallery=1#torneios"));
    assert!(body.contains("/?tournament=1&gallery=2#galeria"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_serve_assets(app: &mut TestApp) {
    let response = app.get_page("/assets/styles.css").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_body(response).await;
    assert!(body.contains(".visually-hidden"));
}
