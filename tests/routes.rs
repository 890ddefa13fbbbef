use actix_web::{
    App,
    http::{StatusCode, header},
    test, web,
};
use serde_json::{Value, json};

use pushkind_trips::routes;

mod common;

use common::{TestDb, TripSeed};

fn seed_catalogue(test_db: &TestDb) {
    test_db.seed_trip(TripSeed {
        id: 1,
        name: "Baltic states",
        description: Some("Vilnius, Riga, Tallinn"),
        max_people: 20,
        countries: &[(1, "Lithuania"), (2, "Latvia"), (3, "Estonia")],
    });
    test_db.seed_trip(TripSeed {
        id: 2,
        name: "Crete",
        description: None,
        max_people: 1,
        countries: &[(4, "Greece")],
    });
}

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($test_db.repo()))
                .configure(routes::configure),
        )
        .await
    };
}

fn client_body(first_name: &str) -> Value {
    json!({
        "firstName": first_name,
        "lastName": "Kowalski",
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "telephone": "600100200",
    })
}

#[actix_web::test]
async fn lists_trips_with_countries() {
    let test_db = TestDb::new("lists_trips_with_countries.db");
    seed_catalogue(&test_db);
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/api/trips").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let trips = body.as_array().unwrap();
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0]["tripId"], 1);
    assert_eq!(trips[0]["name"], "Baltic states");
    assert_eq!(trips[0]["maxPeople"], 20);
    assert_eq!(trips[0]["countries"].as_array().unwrap().len(), 3);
    assert_eq!(trips[1]["description"], "");
    assert_eq!(trips[1]["dateFrom"], "2026-06-02T00:00:00");
    assert_eq!(trips[1]["countries"], json!(["Greece"]));

    let req = test::TestRequest::get().uri("/api/trips").to_request();
    let again: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(again, body);
}

#[actix_web::test]
async fn unknown_client_trips_is_not_found() {
    let test_db = TestDb::new("unknown_client_trips_is_not_found.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get()
        .uri("/api/clients/77/trips")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = test::read_body(resp).await;
    assert_eq!(body, "Client 77 does not exist.");
}

#[actix_web::test]
async fn created_client_has_location_and_no_trips() {
    let test_db = TestDb::new("created_client_has_location_and_no_trips.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .set_json(client_body("Jan"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body: Value = test::read_body_json(resp).await;
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/api/clients/{id}/trips"));

    let req = test::TestRequest::get().uri(&location).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let trips: Value = test::read_body_json(resp).await;
    assert_eq!(trips, json!([]));
}

#[actix_web::test]
async fn malformed_client_body_is_rejected() {
    let test_db = TestDb::new("malformed_client_body_is_rejected.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .set_json(json!({"firstName": "Jan"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn registration_respects_capacity() {
    let test_db = TestDb::new("registration_respects_capacity.db");
    seed_catalogue(&test_db);
    let app = init_app!(test_db);

    let mut ids = Vec::new();
    for name in ["Ewa", "Adam"] {
        let req = test::TestRequest::post()
            .uri("/api/clients")
            .set_json(client_body(name))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(body["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::put()
        .uri(&format!("/api/clients/{}/trips/2", ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Client registered.");

    let req = test::TestRequest::put()
        .uri(&format!("/api/clients/{}/trips/2", ids[1]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        test::read_body(resp).await,
        "Trip 2 has reached its maximum number of participants."
    );

    let req = test::TestRequest::put()
        .uri(&format!("/api/clients/{}/trips/2", ids[0]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/api/clients/{}/trips", ids[0]))
        .to_request();
    let trips: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(trips.as_array().unwrap().len(), 1);
    assert_eq!(trips[0]["tripId"], 2);
}

#[actix_web::test]
async fn registration_of_unknown_client_or_trip_is_not_found() {
    let test_db = TestDb::new("registration_of_unknown_client_or_trip_is_not_found.db");
    seed_catalogue(&test_db);
    let app = init_app!(test_db);

    let req = test::TestRequest::put()
        .uri("/api/clients/50/trips/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test::read_body(resp).await, "Client 50 does not exist.");

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .set_json(client_body("Ola"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/clients/{id}/trips/9"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(test::read_body(resp).await, "Trip 9 does not exist.");
}

#[actix_web::test]
async fn unregister_twice_is_not_found() {
    let test_db = TestDb::new("unregister_twice_is_not_found.db");
    seed_catalogue(&test_db);
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/clients")
        .set_json(client_body("Kasia"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/clients/{id}/trips/1"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{id}/trips/1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test::read_body(resp).await, "Client unregistered.");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{id}/trips/1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/clients/{id}/trips"))
        .to_request();
    let trips: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(trips, json!([]));
}
