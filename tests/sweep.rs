use chrono::NaiveDate;
use job_sweep::output::HEADER;
use job_sweep::posted_date::normalize_posted_at;
use job_sweep::{run_sweep, AppConfig, SweepSummary};
use mockito::{Matcher, Server};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
}

fn temp_csv() -> PathBuf {
    std::env::temp_dir().join(format!("clt-jobs-sweep-{}.csv", uuid::Uuid::new_v4()))
}

fn config(server: &Server, output: &Path, categories: &[&str]) -> AppConfig {
    AppConfig::new("test-key", &format!("{}/search", server.url()), today())
        .with_output_path(output.to_path_buf())
        .with_categories(categories.iter().map(|c| c.to_string()).collect())
        .with_page_delay(Duration::ZERO)
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}

// First-page requests carry no token, so the query string ends with `num`.
fn first_page(category: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("q".into(), category.into()),
        Matcher::Regex("num=50$".into()),
    ])
}

#[tokio::test]
async fn two_page_category_is_projected_into_csv() {
    let mut server = Server::new_async().await;
    let page_one = server
        .mock("GET", "/search")
        .match_query(first_page("electrician jobs"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jobs": [
                    {
                        "title": "Journeyman Electrician",
                        "company_name": "Carolina Power",
                        "location": "Charlotte, NC",
                        "detected_extensions": { "posted_at": "3 days ago" },
                        "apply_link": "https://jobs.example/1",
                        "job_highlights": [{ "title": "Qualifications", "items": ["NC license"] }]
                    },
                    {
                        "title": "Apprentice Electrician",
                        "company_name": "Queen City Electric",
                        "location": "Matthews, NC",
                        "detected_extensions": { "posted_at": "1 month ago" }
                    }
                ],
                "pagination": { "next_page_token": "page-2" }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let page_two = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "electrician jobs".into()),
            Matcher::UrlEncoded("next_page_token".into(), "page-2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jobs": [{
                    "title": "Master Electrician",
                    "company_name": "Duke Facilities",
                    "location": "Concord, NC",
                    "detected_extensions": { "posted_at": "yesterday" },
                    "apply_link": "https://jobs.example/3"
                }],
                "pagination": {}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let output = temp_csv();
    let summary = run_sweep(&config(&server, &output, &["electrician jobs"]), today())
        .await
        .unwrap();

    page_one.assert_async().await;
    page_two.assert_async().await;
    assert_eq!(
        summary,
        SweepSummary {
            categories: 1,
            jobs_written: 3,
            failed_categories: 0,
            write_failures: 0,
        }
    );

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>());
    assert_eq!(
        rows[1],
        vec![
            "Journeyman Electrician",
            "Carolina Power",
            "Charlotte, NC",
            "03/28/2025",
            "https://jobs.example/1",
            r#"[{"title":"Qualifications","items":["NC license"]}]"#,
        ]
    );
    assert_eq!(
        rows[2],
        vec![
            "Apprentice Electrician",
            "Queen City Electric",
            "Matthews, NC",
            "02/28/2025",
            "N/A",
            "N/A",
        ]
    );
    assert_eq!(rows[3][0], "Master Electrician");
    assert_eq!(rows[3][3], "N/A");

    for (row, posted_at) in rows[1..].iter().zip(["3 days ago", "1 month ago", "yesterday"]) {
        assert_eq!(row[3], normalize_posted_at(Some(posted_at), today()));
    }

    std::fs::remove_file(&output).unwrap();
}

#[tokio::test]
async fn failing_category_does_not_stop_the_sweep() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(first_page("chef jobs"))
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;
    server
        .mock("GET", "/search")
        .match_query(first_page("welder jobs"))
        .with_status(200)
        .with_body(json!({ "jobs": [{ "title": "Pipe Welder" }] }).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/search")
        .match_query(first_page("mason jobs"))
        .with_status(200)
        .with_body(json!({ "jobs": [] }).to_string())
        .create_async()
        .await;

    let output = temp_csv();
    let summary = run_sweep(
        &config(&server, &output, &["chef jobs", "welder jobs", "mason jobs"]),
        today(),
    )
    .await
    .unwrap();

    assert_eq!(summary.categories, 3);
    assert_eq!(summary.failed_categories, 1);
    assert_eq!(summary.jobs_written, 1);

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][0], "Pipe Welder");

    std::fs::remove_file(&output).unwrap();
}

#[tokio::test]
async fn rerun_appends_without_second_header() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(first_page("cashier jobs"))
        .with_status(200)
        .with_body(json!({ "jobs": [{ "title": "Cashier" }] }).to_string())
        .expect(2)
        .create_async()
        .await;

    let output = temp_csv();
    let config = config(&server, &output, &["cashier jobs"]);
    run_sweep(&config, today()).await.unwrap();
    run_sweep(&config, today()).await.unwrap();

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], "Title");
    assert_eq!(rows[1], rows[2]);

    std::fs::remove_file(&output).unwrap();
}
