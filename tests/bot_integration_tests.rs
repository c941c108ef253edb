use bb_summarizer::{
    bot::{HELP_TEXT, handle_message},
    config::Config,
    data_fetcher::create_http_client_with_timeout,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn create_mock_config(uri: &str) -> Config {
    Config {
        stats_api_domain: uri.to_string(),
        roster_domain: uri.to_string(),
        min_reply_delay_ms: 0,
        ..Config::default()
    }
}

#[tokio::test]
async fn test_stat_command_replies_with_player_summary() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pc/us/Mercy-1234/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"username": "Mercy", "private": false, "competitive": {"rank": 4120}}"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pc/us/Mercy-1234/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"top_heroes": {"competitive": {"played": [
                {"hero": "Zenyatta", "games_played": 3},
                {"hero": "Mercy", "games_played": 40},
                {"hero": "Ana", "games_played": 12}
            ]}}}"#,
        ))
        .mount(&mock_server)
        .await;

    let config = create_mock_config(&mock_server.uri());
    let client = create_http_client_with_timeout(5).unwrap();

    let reply = handle_message(&client, &config, ".bb stat Mercy#1234")
        .await
        .unwrap();

    let lines: Vec<&str> = reply.lines().collect();
    assert_eq!(lines[0], "**Mercy#1234** - Grandmaster (4120)");
    assert_eq!(
        lines[1],
        "<https://playoverwatch.com/en-us/career/pc/Mercy-1234>"
    );
    assert_eq!(&lines[2..], ["\tMercy (40)", "\tAna (12)", "\tZenyatta (3)"]);
}

#[tokio::test]
async fn test_stat_command_lookup_failure_replies_with_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = create_mock_config(&mock_server.uri());
    let client = create_http_client_with_timeout(5).unwrap();

    let reply = handle_message(&client, &config, ".bb stat Mercy#1234")
        .await
        .unwrap();
    assert!(reply.starts_with("Error: Failed to look up player Mercy#1234"));
}

#[tokio::test]
async fn test_summarize_command_replies_with_team_report() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tournament/5/team/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<table class="compete-table"><tr><td>1</td><td>Solo</td><td>Solo#77</td></tr></table>"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pc/us/Solo-77/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"private": false, "competitive": {"rank": 1850}}"#),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pc/us/Solo-77/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{}"#))
        .mount(&mock_server)
        .await;

    let config = create_mock_config(&mock_server.uri());
    let client = create_http_client_with_timeout(5).unwrap();

    let reply = handle_message(
        &client,
        &config,
        ".bb summarize https://compete.tespa.org/tournament/5/team/9",
    )
    .await
    .unwrap();

    assert!(reply.starts_with("**Average Team SR**: Silver (1850)\n"));
    assert!(reply.contains("**Team Members**: 1 (1 public, 1 ranked)"));
    assert!(reply.contains("\t**Solo#77** - Silver (1850)"));
    assert!(reply.contains("\t\tNo competitive heroes played"));
}

#[tokio::test]
async fn test_help_and_unknown_messages() {
    let config = create_mock_config("http://127.0.0.1:1");
    let client = create_http_client_with_timeout(5).unwrap();

    assert_eq!(
        handle_message(&client, &config, ".bb help").await.as_deref(),
        Some(HELP_TEXT)
    );
    assert_eq!(handle_message(&client, &config, "gg wp").await, None);
}
