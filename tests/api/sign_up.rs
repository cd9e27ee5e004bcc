use crate::helpers::{get_body, TestApp};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_and_redirect_to_gym_payment(app: &mut TestApp) {
    let response = app
        .post_sign_up(&[
            ("name", "Maria Santos"),
            ("email", "maria@email.com"),
            ("phone", "(92) 99999-2222"),
            ("experience", "basico"),
            ("agree_terms", "on"),
        ])
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_body(response).await;
    assert!(body.contains("Cadastro realizado com sucesso!"));
    assert!(body.contains("content=\"2;url=/payment-gym\""));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_only_require_terms(app: &mut TestApp) {
    let response = app.post_sign_up(&[("agree_terms", "on")]).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_and_keep_entries_if_terms_not_accepted(
    app: &mut TestApp,
) {
    let response = app
        .post_sign_up(&[
            ("name", "Maria Santos"),
            ("goals", "Competir no Ogro Challenge"),
            ("agree_marketing", "on"),
        ])
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let body = get_body(response).await;
    assert!(body.contains("Termos obrigatórios!"));
    assert!(body.contains("Maria Santos"));
    assert!(body.contains("Competir no Ogro Challenge"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_send_teaser_to_tournament_sign_up(app: &mut TestApp) {
    let response = app
        .post_form("/", &[("name", "Pedro Costa"), ("agree_terms", "on")])
        .await;
    assert_eq!(response.status().as_u16(), 303);
    let location = response
        .headers()
        .get("location")
        .expect("No location header")
        .to_str()
        .unwrap();
    assert_eq!(location, "/tournament-signup");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_teaser_terms_not_accepted(app: &mut TestApp) {
    let response = app.post_form("/", &[("name", "Pedro Costa")]).await;
    assert_eq!(response.status().as_u16(), 400);

    let body = get_body(response).await;
    assert!(body.contains("Termos obrigatórios!"));
    assert!(body.contains("Pedro Costa"));
    assert!(body.contains("TORNEIOS ÉPICOS"));
}
