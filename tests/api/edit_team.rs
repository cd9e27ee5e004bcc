use crate::helpers::{
    full_team_form, get_body, member_fields, TestApp, TEAM_MEMBER_IDS,
};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_seed_editor_with_registered_team(app: &mut TestApp) {
    let response = app.get_page("/edit-team").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_body(response).await;
    assert!(body.contains("Selva Warriors"));
    assert!(body.contains("(4/4)"));
    for id in TEAM_MEMBER_IDS {
        assert!(body.contains(id));
    }
    // A full team offers no add button.
    assert!(!body.contains("value=\"add\""));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_not_add_beyond_four_members(app: &mut TestApp) {
    let form = full_team_form("Selva Warriors", &[("action", "add")]);
    let response = app.post_edit_team(&form).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_body(response).await;
    assert!(body.contains("(4/4)"));
    assert_eq!(body.matches("name=\"member_id\"").count(), 4);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_add_blank_member(app: &mut TestApp) {
    let mut form = vec![("team_name", "Selva Warriors"), ("action", "add")];
    form.extend(member_fields(
        TEAM_MEMBER_IDS[0],
        "João Silva",
        "joao@email.com",
        "(92) 99999-1111",
        "intermediario",
    ));

    let response = app.post_edit_team(&form).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_body(response).await;
    assert!(body.contains("(2/4)"));
    assert!(body.contains("João Silva"));
    assert_eq!(body.matches("name=\"member_id\"").count(), 2);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_not_remove_last_member(app: &mut TestApp) {
    let mut form = vec![("team_name", "Selva Warriors"), ("action", "remove-0")];
    form.extend(member_fields(
        TEAM_MEMBER_IDS[0],
        "João Silva",
        "joao@email.com",
        "(92) 99999-1111",
        "intermediario",
    ));

    let response = app.post_edit_team(&form).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_body(response).await;
    assert!(body.contains("(1/4)"));
    assert!(body.contains("João Silva"));
    assert!(!body.contains("remove-0"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_remove_member_at_index(app: &mut TestApp) {
    let form = full_team_form("Selva Warriors", &[("action", "remove-1")]);
    let response = app.post_edit_team(&form).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_body(response).await;
    assert!(body.contains("(3/4)"));
    assert!(!body.contains("Maria Santos"));
    assert!(body.contains("Pedro Costa"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_save_complete_team(app: &mut TestApp) {
    let form = full_team_form("Jungle Beasts", &[("action", "save")]);
    let response = app.post_edit_team(&form).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_body(response).await;
    assert!(body.contains("Equipe atualizada com sucesso!"));
    assert!(body.contains("content=\"1.5;url=/participant\""));
    assert!(body.contains("Jungle Beasts"));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_and_keep_edits_if_incomplete(app: &mut TestApp) {
    let test_cases = [
        full_team_form("", &[("action", "save")]),
        full_team_form("Selva Warriors", &[("action", "save")])
            .into_iter()
            .map(|(key, value)| match value {
                "maria@email.com" => (key, ""),
                _ => (key, value),
            })
            .collect(),
        full_team_form("Selva Warriors", &[("action", "save")])
            .into_iter()
            .map(|(key, value)| match value {
                "avancado" => (key, ""),
                _ => (key, value),
            })
            .collect::<Vec<_>>(),
    ];

    for form in test_cases.iter() {
        let response = app.post_edit_team(form).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            form
        );

        let body = get_body(response).await;
        assert!(body.contains("Dados incompletos!"));
        assert!(!body.contains("http-equiv=\"refresh\""));
        assert!(body.contains("Pedro Costa"));
        assert!(body.contains("(4/4)"));
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reset_to_registered_team_if_malformed(app: &mut TestApp) {
    let mut too_many = full_team_form("Intrusos", &[("action", "save")]);
    too_many.extend(member_fields(
        "0f6b6a3e-2c1d-4a8e-9d3b-1a2b3c4d5e05",
        "Quinto Membro",
        "quinto@email.com",
        "(92) 99999-5555",
        "basico",
    ));

    let test_cases = [
        too_many,
        full_team_form("Intrusos", &[("action", "save")])
            .into_iter()
            .map(|(key, value)| match value {
                "basico" => (key, "lendario"),
                _ => (key, value),
            })
            .collect(),
        full_team_form("Intrusos", &[("action", "save")])
            .into_iter()
            .map(|(key, value)| match key {
                "member_id" => (key, "not-a-uuid"),
                _ => (key, value),
            })
            .collect(),
        full_team_form("Intrusos", &[("action", "save")])
            .into_iter()
            .map(|(key, value)| {
                if key == "member_id" && value == TEAM_MEMBER_IDS[1] {
                    (key, TEAM_MEMBER_IDS[0])
                } else {
                    (key, value)
                }
            })
            .collect(),
        full_team_form("Intrusos", &[("action", "dance")]),
        vec![("team_name", "Intrusos"), ("action", "save")],
    ];

    for form in test_cases.iter() {
        let response = app.post_edit_team(form).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            form
        );

        let body = get_body(response).await;
        assert!(body.contains("Dados inválidos!"));
        assert!(body.contains("Selva Warriors"));
        assert!(!body.contains("Intrusos"));
    }
}
