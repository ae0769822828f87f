//! Common fixtures for integration tests.
//!
//! `users_json()` mirrors the shape served by the public demo endpoint
//! (including the `geo` object the decoder ignores).

#![allow(dead_code)]

use serde_json::{json, Value};
use userdeck::adapters::mock::MockHttpClient;
use userdeck::app::{App, Platform};
use userdeck::models::UserRecord;
use userdeck::state::FavoritesStore;

pub const TEST_ENDPOINT: &str = "https://users.test/users";

/// (name, username, email, city, company)
const PEOPLE: [(&str, &str, &str, &str, &str); 12] = [
    ("Leanne Graham", "Bret", "Sincere@april.biz", "Gwenborough", "Romaguera-Crona"),
    ("Ervin Howell", "Antonette", "Shanna@melissa.tv", "Wisokyburgh", "Deckow-Crist"),
    ("Clementine Bauch", "Samantha", "Nathan@yesenia.net", "McKenziehaven", "Romaguera-Jacobson"),
    ("Patricia Lebsack", "Karianne", "Julianne.OConner@kory.org", "South Elvis", "Robel-Corkery"),
    ("Chelsey Dietrich", "Kamren", "Lucio_Hettinger@annie.ca", "Roscoeview", "Keebler LLC"),
    ("Mrs. Dennis Schulist", "Leopoldo_Corkery", "Karley_Dach@jasper.info", "South Christy", "Considine-Lockman"),
    ("Kurtis Weissnat", "Elwyn.Skiles", "Telly.Hoeger@billy.biz", "Howemouth", "Johns Group"),
    ("Nicholas Runolfsdottir V", "Maxime_Nienow", "Sherwood@rosamond.me", "Aliyaview", "Abernathy Group"),
    ("Glenna Reichert", "Delphine", "Chaim_McDermott@dana.io", "Bartholomebury", "Yost and Sons"),
    ("Clementina DuBuque", "Moriah.Stanton", "Rey.Padberg@karina.biz", "Lebsackbury", "Hoeger LLC"),
    ("Extra One", "extra1", "one@extra.test", "Gwenborough", "Romaguera-Crona"),
    ("Extra Two", "extra2", "two@extra.test", "Gwenborough", "Romaguera-Crona"),
];

fn person(index: usize) -> Value {
    let (name, username, email, city, company) = PEOPLE[index];
    json!({
        "id": index + 1,
        "name": name,
        "username": username,
        "email": email,
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": city,
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": company,
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

/// JSON array with the first `n` people (at most 12).
pub fn users_json(n: usize) -> String {
    let people: Vec<Value> = (0..n.min(PEOPLE.len())).map(person).collect();
    Value::Array(people).to_string()
}

/// The ten-user directory as decoded records.
pub fn ten_users() -> Vec<UserRecord> {
    users(10)
}

pub fn users(n: usize) -> Vec<UserRecord> {
    serde_json::from_str(&users_json(n)).expect("fixture decodes")
}

pub fn favorites(ids: &[u64]) -> FavoritesStore {
    ids.iter().copied().collect()
}

/// App whose mock source serves `n` users.
pub fn app_serving(n: usize, platform: Platform) -> App {
    let mock = MockHttpClient::new();
    mock.set_response(
        TEST_ENDPOINT,
        userdeck::adapters::mock::MockResponse::json(users_json(n)),
    );
    App::new(App::source_from(mock, TEST_ENDPOINT), platform)
}

/// Run one fetch to completion through the app's message channel.
pub async fn fetch_and_apply(app: &mut App) {
    let mut rx = app.message_rx.take().expect("receiver not taken yet");
    app.fetch_users();
    let msg = rx.recv().await.expect("fetch task reports back");
    app.handle_message(msg);
    app.message_rx = Some(rx);
}
