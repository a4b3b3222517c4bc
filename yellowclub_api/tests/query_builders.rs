use chrono::NaiveDate;
use url::Url;
use yellowclub_api::{
    ClientQuery, ExtractQuery, PagedQuery, Query, RequestParams, ServiceOrderQuery, SortDirection,
};

fn base_url() -> Url {
    Url::parse("https://example.com/api/v1/clients").unwrap()
}

#[test]
fn request_params_skip_empty_values() {
    let params: RequestParams = vec![
        ("a", Some("1")),
        ("b", None),
        ("c", Some("")),
        ("d", Some("x")),
    ]
    .into_iter()
    .collect();
    assert_eq!(params.to_query_string(), "a=1&d=x");
}

#[test]
fn client_query_defaults_send_nothing() {
    let url = ClientQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn client_query_with_everything() {
    let url = ClientQuery::default()
        .with_page(3)
        .with_per_page(25)
        .with_search("ana")
        .with_sort_by("name")
        .with_sort_direction(SortDirection::Asc)
        .with_status("active")
        .with_partner(12)
        .add_to_url(&base_url());
    assert_eq!(
        url.query(),
        Some("page=3&per_page=25&search=ana&sort_by=name&sort_direction=asc&status=active&partner_id=12")
    );
}

#[test]
fn service_order_query_dates() {
    let query = ServiceOrderQuery::default()
        .with_client(4)
        .with_date_range(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .with_status("open");
    let params = query.to_params();
    assert_eq!(
        params.to_query_string(),
        "status=open&client_id=4&date_from=2024-01-01&date_to=2024-01-31"
    );
}

#[test]
fn extract_query_uses_server_names() {
    let query = ExtractQuery::default()
        .with_tipo("C")
        .with_per_page(50)
        .with_date_range(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        );
    let query_string = query.to_params().to_query_string();
    assert!(query_string.starts_with("per_page=50"));
    assert!(query_string.contains("tipo=C"));
    assert!(query_string.contains("data_inicio=2024-03-01"));
    assert!(query_string.contains("data_fim=2024-03-31"));
}

#[test]
fn sort_direction_parses() {
    assert_eq!("ASC".parse::<SortDirection>(), Ok(SortDirection::Asc));
    assert_eq!("desc".parse::<SortDirection>(), Ok(SortDirection::Desc));
    assert!("sideways".parse::<SortDirection>().is_err());
}

#[test]
fn query_appends_to_existing_query_string() {
    let url = Url::parse("https://example.com/clients?tenant=acme").unwrap();
    let url = RequestParams::new().with("page", 2).add_to_url(&url);
    assert_eq!(url.query(), Some("tenant=acme&page=2"));
}
