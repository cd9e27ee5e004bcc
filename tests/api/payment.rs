use crate::helpers::{get_body, TestApp};
use test_context::test_context;

const PAYMENT_PAGES: [&str; 2] = ["/payment-gym", "/payment-tournament"];

#[test_context(TestApp)]
#[tokio::test]
async fn should_render_checkout_details(app: &mut TestApp) {
    let body = get_body(app.get_page("/payment-gym").await).await;
    assert!(body.contains("R$ 150,00"));
    assert!(body.contains("R$ 1.200,00"));
    assert!(body.contains("Aula Experimental Gratuita"));

    let body = get_body(app.get_page("/payment-tournament").await).await;
    assert!(body.contains("Ogro Challenge 2024"));
    assert!(body.contains("Selva Warriors"));
    assert!(body.contains("R$ 600,00"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_show_fields_for_selected_method(app: &mut TestApp) {
    for path in PAYMENT_PAGES {
        let body = get_body(
            app.post_form(path, &[("action", "method-credit")]).await,
        )
        .await;
        assert!(body.contains("name=\"card_number\""));
        assert!(!body.contains("name=\"pix_key\""));

        let body = get_body(
            app.post_form(
                path,
                &[("action", "method-pix"), ("method", "credit")],
            )
            .await,
        )
        .await;
        assert!(body.contains("name=\"pix_key\""));
        assert!(!body.contains("name=\"card_number\""));

        let body = get_body(
            app.post_form(path, &[("action", "method-bank")]).await,
        )
        .await;
        assert!(body.contains("name=\"method\" value=\"bank\""));
        assert!(!body.contains("name=\"pix_key\""));
        assert!(!body.contains("name=\"card_number\""));
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_no_method_selected(app: &mut TestApp) {
    for path in PAYMENT_PAGES {
        let response = app
            .post_form(path, &[("action", "submit"), ("agree_terms", "on")])
            .await;
        assert_eq!(response.status().as_u16(), 400, "Failed for {path}");

        let body = get_body(response).await;
        assert!(body.contains("Método de pagamento obrigatório!"));
        assert!(!body.contains("http-equiv=\"refresh\""));
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_terms_not_accepted(app: &mut TestApp) {
    for path in PAYMENT_PAGES {
        let response = app
            .post_form(path, &[("action", "submit"), ("method", "pix")])
            .await;
        assert_eq!(response.status().as_u16(), 400, "Failed for {path}");

        let body = get_body(response).await;
        assert!(body.contains("Termos obrigatórios!"));
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_approve_payment(app: &mut TestApp) {
    let test_cases = [
        ("/payment-gym", "content=\"2;url=/\""),
        ("/payment-tournament", "content=\"2;url=/participant\""),
    ];

    for (path, refresh) in test_cases {
        let response = app
            .post_form(
                path,
                &[
                    ("action", "submit"),
                    ("method", "credit"),
                    ("card_number", "4111 1111 1111 1111"),
                    ("card_name", "JOAO SILVA"),
                    ("expiry_date", "12/27"),
                    ("cvv", "123"),
                    ("agree_terms", "on"),
                ],
            )
            .await;
        assert_eq!(response.status().as_u16(), 200, "Failed for {path}");

        let body = get_body(response).await;
        assert!(body.contains("Pagamento aprovado!"));
        assert!(body.contains(refresh), "Failed for {path}");
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_method_unknown(app: &mut TestApp) {
    for path in PAYMENT_PAGES {
        let response = app
            .post_form(path, &[("action", "method-crypto")])
            .await;
        assert_eq!(response.status().as_u16(), 400, "Failed for {path}");

        let body = get_body(response).await;
        assert!(body.contains("Dados inválidos!"));
    }
}
