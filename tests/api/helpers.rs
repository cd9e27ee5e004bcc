use cross_jungle_site::{
    app_state::AppState,
    services::{
        data_stores::StaticContentStore, mock_authenticator::MockAuthenticator,
        mock_payment_gateway::MockPaymentGateway,
    },
    utils::constants::{test, MOCK_LOGIN_EMAIL, MOCK_LOGIN_PASSWORD},
    Application,
};
use reqwest::redirect::Policy;
use secrecy::Secret;
use std::sync::Arc;
use test_context::AsyncTestContext;

/// Ids of the bundled registered team, in display order.
pub const TEAM_MEMBER_IDS: [&str; 4] = [
    "0f6b6a3e-2c1d-4a8e-9d3b-1a2b3c4d5e01",
    "0f6b6a3e-2c1d-4a8e-9d3b-1a2b3c4d5e02",
    "0f6b6a3e-2c1d-4a8e-9d3b-1a2b3c4d5e03",
    "0f6b6a3e-2c1d-4a8e-9d3b-1a2b3c4d5e04",
];

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let content_store = Arc::new(
            StaticContentStore::bundled()
                .expect("Failed to load bundled content"),
        );
        let authenticator = Arc::new(MockAuthenticator::new(
            MOCK_LOGIN_EMAIL,
            Secret::new(MOCK_LOGIN_PASSWORD.to_owned()),
        ));
        let payment_gateway = Arc::new(MockPaymentGateway);

        let app_state =
            AppState::new(content_store, authenticator, payment_gateway);

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        // Immediate navigations are asserted on, not followed.
        let http_client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            http_client,
        }
    }

    pub async fn get_page(&self, path: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> reqwest::Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(
        &self,
        email: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post_form("/login", &[("email", email), ("password", password)])
            .await
    }

    pub async fn post_logout(&self) -> reqwest::Response {
        self.post_form("/logout", &[]).await
    }

    pub async fn post_edit_team(
        &self,
        form: &[(&str, &str)],
    ) -> reqwest::Response {
        self.post_form("/edit-team", form).await
    }

    pub async fn post_tournament_sign_up(
        &self,
        form: &[(&str, &str)],
    ) -> reqwest::Response {
        self.post_form("/tournament-signup", form).await
    }

    pub async fn post_sign_up(
        &self,
        form: &[(&str, &str)],
    ) -> reqwest::Response {
        self.post_form("/signup", form).await
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {}
}

pub async fn get_body(response: reqwest::Response) -> String {
    response.text().await.expect("Failed to read response body")
}

/// Form fields for one team member, as the roster partial renders them.
pub fn member_fields<'a>(
    id: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    experience: &'a str,
) -> [(&'a str, &'a str); 5] {
    [
        ("member_id", id),
        ("member_name", name),
        ("member_email", email),
        ("member_phone", phone),
        ("member_experience", experience),
    ]
}

/// The bundled team, fully filled in, followed by `extra` fields.
pub fn full_team_form<'a>(
    team_name: &'a str,
    extra: &[(&'a str, &'a str)],
) -> Vec<(&'a str, &'a str)> {
    let members = [
        ("João Silva", "joao@email.com", "(92) 99999-1111", "intermediario"),
        ("Maria Santos", "maria@email.com", "(92) 99999-2222", "basico"),
        ("Pedro Costa", "pedro@email.com", "(92) 99999-3333", "avancado"),
        ("Ana Oliveira", "ana@email.com", "(92) 99999-4444", "intermediario"),
    ];

    let mut form = vec![("team_name", team_name)];
    for (id, (name, email, phone, experience)) in
        TEAM_MEMBER_IDS.iter().zip(members)
    {
        form.extend(member_fields(id, name, email, phone, experience));
    }
    form.extend_from_slice(extra);
    form
}
